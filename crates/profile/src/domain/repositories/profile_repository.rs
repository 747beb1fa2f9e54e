// crates/profile/src/domain/repositories/profile_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::Profile;
use crate::domain::schema::NewProfile;
use crate::domain::value_objects::ProfileId;

/// Seul point de passage entre l'application et le store de documents.
/// Aucune opération n'est rejouée ici : la politique de retry appartient à l'appelant.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Tous les profils, du plus récent au plus ancien. Collection vide -> `vec![]`.
    async fn list_all(&self) -> Result<Vec<Profile>>;

    /// `Ok(None)` si absent ; une panne du store reste une `Err`.
    async fn get_by_id(&self, id: &ProfileId) -> Result<Option<Profile>>;

    /// Insertion atomique d'un document ; renvoie l'id et les timestamps attribués.
    async fn create(&self, profile: &NewProfile) -> Result<Profile>;

    /// Insertion groupée en une seule transaction (seed)
    async fn create_many(&self, profiles: &[NewProfile]) -> Result<Vec<Profile>>;

    async fn count(&self) -> Result<u64>;
}
