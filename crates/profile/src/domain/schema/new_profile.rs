// crates/profile/src/domain/schema/new_profile.rs

use serde::Serialize;
use shared_kernel::domain::value_objects::RequiredText;

use crate::domain::entities::Project;
use crate::domain::value_objects::SkillSet;

/// Profil validé, prêt à être inséré. Seul `ProfileDraft::validate` en produit
/// sur le chemin d'écriture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub name: RequiredText,
    pub avatar: RequiredText,
    pub bio: RequiredText,
    pub education: RequiredText,
    pub skills: SkillSet,
    pub experience: RequiredText,
    pub projects: Vec<Project>,
    pub linkedin: Option<String>,
    pub video_url: Option<String>,
}
