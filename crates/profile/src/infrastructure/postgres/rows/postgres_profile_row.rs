// crates/profile/src/infrastructure/postgres/rows/postgres_profile_row.rs

use crate::domain::entities::{Profile, Project};
use crate::domain::schema::NewProfile;
use crate::domain::value_objects::{ProfileId, SkillSet};
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use shared_kernel::domain::value_objects::RequiredText;
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow, Debug)]
pub struct PostgresProfileRow {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub education: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub projects: JsonValue,
    pub linkedin: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<PostgresProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: PostgresProfileRow) -> Result<Self> {
        let projects = serde_json::from_value::<Vec<Project>>(row.projects)
            .map_err(|e| DomainError::Internal(format!("Failed to deserialize projects: {}", e)))?;

        Ok(Profile::restore(
            ProfileId::from_uuid(row.id),
            NewProfile {
                name: RequiredText::from_raw(row.name),
                avatar: RequiredText::from_raw(row.avatar),
                bio: RequiredText::from_raw(row.bio),
                education: RequiredText::from_raw(row.education),
                skills: SkillSet::from_raw(row.skills),
                experience: RequiredText::from_raw(row.experience),
                projects,
                linkedin: row.linkedin,
                video_url: row.video_url,
            },
            row.created_at,
            row.updated_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(projects: JsonValue) -> PostgresProfileRow {
        let now = Utc::now();
        PostgresProfileRow {
            id: Uuid::now_v7(),
            name: "Asha Rao".into(),
            avatar: "https://img.example/a.png".into(),
            bio: "PM".into(),
            education: "MBA, TAPMI".into(),
            skills: vec!["Strategy".into(), "SQL".into()],
            experience: "3 yrs".into(),
            projects,
            linkedin: None,
            video_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_row_into_profile() {
        let raw = row(json!([{ "title": "Case A", "description": "Did X", "link": "#" }]));
        let id = raw.id;

        let profile = Profile::try_from(raw).unwrap();

        assert_eq!(profile.id.as_uuid(), id);
        assert_eq!(profile.skills.as_slice(), ["Strategy", "SQL"]);
        assert_eq!(profile.projects[0].title.as_str(), "Case A");
        assert_eq!(profile.projects[0].link.as_deref(), Some("#"));
    }

    #[test]
    fn test_corrupted_projects_are_internal_errors() {
        let result = Profile::try_from(row(json!({ "not": "a list" })));

        assert!(matches!(result, Err(DomainError::Internal(_))));
    }
}
