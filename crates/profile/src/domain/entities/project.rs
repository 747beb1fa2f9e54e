// crates/profile/src/domain/entities/project.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::RequiredText;

/// Étude de cas rattachée à un profil. Pas d'identité propre : vit et meurt avec son profil.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: RequiredText,
    pub description: RequiredText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Project {
    pub fn new(title: RequiredText, description: RequiredText, link: Option<String>) -> Self {
        Self {
            title,
            description,
            link,
        }
    }
}
