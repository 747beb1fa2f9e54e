// crates/profile/src/domain/entities/profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::RequiredText;

use crate::domain::entities::Project;
use crate::domain::schema::NewProfile;
use crate::domain::value_objects::{ProfileId, SkillSet};

/// Profil persisté. Créé une seule fois puis uniquement relu : aucune méthode de mutation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: RequiredText,
    pub avatar: RequiredText,
    pub bio: RequiredText,
    pub education: RequiredText,
    pub skills: SkillSet,
    pub experience: RequiredText,
    pub projects: Vec<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Chemin RESTAURATION : le store a attribué l'id et les timestamps
    pub fn restore(
        id: ProfileId,
        content: NewProfile,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let NewProfile {
            name,
            avatar,
            bio,
            education,
            skills,
            experience,
            projects,
            linkedin,
            video_url,
        } = content;

        Self {
            id,
            name,
            avatar,
            bio,
            education,
            skills,
            experience,
            projects,
            linkedin,
            video_url,
            created_at,
            updated_at,
        }
    }

    /// Contenu métier, sans ce qui est géré par le store
    pub fn content(&self) -> NewProfile {
        NewProfile {
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            bio: self.bio.clone(),
            education: self.education.clone(),
            skills: self.skills.clone(),
            experience: self.experience.clone(),
            projects: self.projects.clone(),
            linkedin: self.linkedin.clone(),
            video_url: self.video_url.clone(),
        }
    }
}

impl EntityMetadata for Profile {
    fn entity_name() -> &'static str {
        "Profile"
    }
}
