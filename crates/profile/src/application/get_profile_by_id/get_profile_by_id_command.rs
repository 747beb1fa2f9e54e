// crates/profile/src/application/get_profile_by_id/get_profile_by_id_command.rs

use serde::{Deserialize, Serialize};

/// L'identifiant arrive sous sa forme transport (chaîne opaque), non encore parsé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProfileByIdCommand {
    pub id: String,
}

impl GetProfileByIdCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
