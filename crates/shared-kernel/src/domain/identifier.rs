// crates/shared-kernel/src/domain/identifier.rs

use uuid::Uuid;

/// Contrat commun des identifiants exposés par les agrégats.
/// Le type natif du store (UUID) ne sort jamais du domaine : l'extérieur ne voit que `as_string`.
pub trait Identifier:
    serde::Serialize + for<'de> serde::Deserialize<'de> + Clone + Send + Sync + PartialEq
{
    fn as_uuid(&self) -> Uuid;
    fn from_uuid(uuid: Uuid) -> Self;

    fn as_string(&self) -> String {
        self.as_uuid().to_string()
    }

    /// Parsing tolérant : une chaîne mal formée ne peut désigner aucun enregistrement.
    fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self::from_uuid)
    }
}
