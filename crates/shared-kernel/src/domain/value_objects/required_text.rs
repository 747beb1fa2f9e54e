// crates/shared-kernel/src/domain/value_objects/required_text.rs

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Texte obligatoire : ni vide ni composé uniquement d'espaces.
///
/// La valeur est conservée telle que soumise (pas de trim), seule la présence est contrôlée.
/// La désérialisation ne valide pas : ce qui sort du store est considéré comme fiable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RequiredText(String);

impl RequiredText {
    /// Construction sans contrôle : le validateur de schéma (ou le store) a déjà vérifié
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Règle partagée par le validateur de schéma
    pub fn is_present(value: Option<&str>) -> bool {
        value.map(|v| !v.trim().is_empty()).unwrap_or(false)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl ValueObject for RequiredText {
    fn validate(&self) -> Result<()> {
        if self.is_blank() {
            return Err(DomainError::Validation {
                field: "text",
                reason: "text cannot be empty".into(),
            });
        }
        Ok(())
    }
}

impl From<RequiredText> for String {
    fn from(text: RequiredText) -> Self {
        text.0
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(matches!(
            RequiredText::from_raw("").validate(),
            Err(DomainError::Validation { field: "text", .. })
        ));
        assert!(!RequiredText::from_raw("   \n\t").is_valid());
    }

    #[test]
    fn test_keeps_value_untouched() {
        let text = RequiredText::from_raw("  Designer  ");
        assert!(text.is_valid());
        assert_eq!(text.as_str(), "  Designer  ");
    }

    #[test]
    fn test_presence_rule() {
        assert!(RequiredText::is_present(Some("x")));
        assert!(!RequiredText::is_present(Some(" ")));
        assert!(!RequiredText::is_present(None));
    }
}
