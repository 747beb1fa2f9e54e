use crate::errors::Result;

/// Un value object sait vérifier ses propres invariants.
pub trait ValueObject: PartialEq + Clone {
    fn validate(&self) -> Result<()>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
