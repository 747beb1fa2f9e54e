// crates/profile/src/domain/value_objects/skill_set.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Liste ordonnée de compétences. Une liste vide reste acceptée, un jeton vide non.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    /// Ordre conservé, blancs retirés
    fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            tokens
                .into_iter()
                .map(Into::into)
                .filter(|t| !t.trim().is_empty())
                .collect(),
        )
    }

    /// Saisie formulaire : "UX, Research, ,Data" -> ["UX", "Research", "Data"].
    /// Seul ce chemin écarte les jetons vides.
    pub fn from_csv(raw: &str) -> Self {
        Self::from_tokens(raw.split(',').map(str::trim))
    }

    /// Jetons tels que fournis (JSON client, store)
    pub fn from_raw(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for SkillSet {
    fn validate(&self) -> Result<()> {
        if let Some(index) = self.0.iter().position(|t| t.trim().is_empty()) {
            return Err(DomainError::Validation {
                field: "skills",
                reason: format!("skill at position {index} is empty"),
            });
        }
        Ok(())
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(skills: SkillSet) -> Self {
        skills.0
    }
}
