// crates/profile/src/domain/value_objects/profile_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifiant d'un profil. Attribué par le store à l'insertion, immuable,
/// sérialisé en chaîne simple côté JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(Uuid);

impl ProfileId {
    /// Génère un identifiant (UUID v7, ordonné dans le temps).
    /// Réservé aux stores qui n'attribuent pas eux-mêmes l'identifiant.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Identifier for ProfileId {
    fn as_uuid(&self) -> Uuid {
        self.0
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl ValueObject for ProfileId {
    fn validate(&self) -> Result<()> {
        if self.0.is_nil() {
            return Err(DomainError::Validation {
                field: "id",
                reason: "Profile ID cannot be nil".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

// --- CONVERSIONS ---

impl From<Uuid> for ProfileId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ProfileId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        <Self as Identifier>::parse(s).ok_or_else(|| DomainError::Validation {
            field: "id",
            reason: format!("'{}' is not a valid profile id", s),
        })
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
