// crates/profile/src/domain/schema/profile_draft.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::RequiredText;
use shared_kernel::errors::{DomainError, ErrorContext, Result};

use crate::domain::entities::Project;
use crate::domain::schema::NewProfile;
use crate::domain::value_objects::SkillSet;

/// Candidat tel que reçu du client : tout est optionnel, rien n'est encore garanti.
/// `id` et timestamps éventuels sont ignorés (attribués par le store).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
    pub projects: Option<Vec<ProjectDraft>>,
    pub linkedin: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl ProfileDraft {
    /// Contrôle des champs obligatoires. Toutes les erreurs sont collectées
    /// en une passe, un message distinct par champ manquant.
    pub fn validate(self) -> Result<NewProfile> {
        let mut errors = Vec::new();

        let name = required(&mut errors, "name", self.name, "Please provide a name");
        let avatar = required(&mut errors, "avatar", self.avatar, "Please provide an avatar URL");
        let bio = required(&mut errors, "bio", self.bio, "Please provide a bio");
        let education = required(&mut errors, "education", self.education, "Please provide education");
        let experience = required(&mut errors, "experience", self.experience, "Please provide experience");

        // Pour les séquences, "obligatoire" = clé présente ; une liste vide passe
        let skills = match self.skills {
            Some(tokens) => {
                for (index, token) in tokens.iter().enumerate() {
                    if !RequiredText::is_present(Some(token.as_str())) {
                        errors.push(
                            ErrorContext::new(format!("skills.{index}"), "Please provide a skill")
                                .with_metadata("index", index.to_string()),
                        );
                    }
                }
                Some(SkillSet::from_raw(tokens))
            }
            None => {
                errors.push(ErrorContext::new("skills", "Please provide skills"));
                None
            }
        };

        let projects = match self.projects {
            Some(drafts) => Some(
                drafts
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, draft)| draft.validate(index, &mut errors))
                    .collect::<Vec<_>>(),
            ),
            None => {
                errors.push(ErrorContext::new("projects", "Please provide projects"));
                None
            }
        };

        match (name, avatar, bio, education, skills, experience, projects) {
            (
                Some(name),
                Some(avatar),
                Some(bio),
                Some(education),
                Some(skills),
                Some(experience),
                Some(projects),
            ) if errors.is_empty() => Ok(NewProfile {
                name,
                avatar,
                bio,
                education,
                skills,
                experience,
                projects,
                linkedin: self.linkedin,
                video_url: self.video_url,
            }),
            _ => Err(DomainError::InvalidFields(errors)),
        }
    }

    /// Scénario de référence utilisé dans les tests
    #[cfg(test)]
    pub fn example() -> Self {
        Self {
            name: Some("Asha Rao".into()),
            avatar: Some("https://x/img.png".into()),
            bio: Some("Designer".into()),
            education: Some("MBA, TAPMI".into()),
            skills: Some(vec!["UX".into(), "Research".into()]),
            experience: Some("2 internships".into()),
            projects: Some(vec![ProjectDraft {
                title: Some("Study A".into()),
                description: Some("desc".into()),
                link: None,
            }]),
            linkedin: None,
            video_url: None,
        }
    }
}

impl ProjectDraft {
    fn validate(self, index: usize, errors: &mut Vec<ErrorContext>) -> Option<Project> {
        let title = required_at(errors, index, "title", self.title, "Please provide a project title");
        let description = required_at(
            errors,
            index,
            "description",
            self.description,
            "Please provide a project description",
        );

        Some(Project::new(title?, description?, self.link))
    }
}

fn required(
    errors: &mut Vec<ErrorContext>,
    field: &'static str,
    value: Option<String>,
    message: &str,
) -> Option<RequiredText> {
    match value {
        Some(v) if RequiredText::is_present(Some(&v)) => Some(RequiredText::from_raw(v)),
        _ => {
            errors.push(ErrorContext::new(field, message));
            None
        }
    }
}

fn required_at(
    errors: &mut Vec<ErrorContext>,
    index: usize,
    field: &'static str,
    value: Option<String>,
    message: &str,
) -> Option<RequiredText> {
    match value {
        Some(v) if RequiredText::is_present(Some(&v)) => Some(RequiredText::from_raw(v)),
        _ => {
            errors.push(
                ErrorContext::new(format!("projects.{index}.{field}"), message)
                    .with_metadata("index", index.to_string()),
            );
            None
        }
    }
}
