// crates/profile/src/domain/schema/profile_form.rs

use serde::Deserialize;

use crate::domain::schema::{ProfileDraft, ProjectDraft};
use crate::domain::value_objects::SkillSet;

/// Saisie brute du formulaire d'ajout : compétences séparées par des virgules,
/// un projet par ligne au format `Titre: description`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub projects: Option<String>,
    pub linkedin: Option<String>,
    pub video_url: Option<String>,
}

impl ProfileForm {
    /// Conversion vers le candidat standard ; la validation reste celle du schéma
    pub fn into_draft(self) -> ProfileDraft {
        ProfileDraft {
            name: self.name,
            avatar: self.avatar,
            bio: self.bio,
            education: self.education,
            skills: self.skills.map(|raw| SkillSet::from_csv(&raw).into()),
            experience: self.experience,
            projects: self.projects.map(|raw| parse_projects(&raw)),
            linkedin: non_empty(self.linkedin),
            video_url: non_empty(self.video_url),
        }
    }
}

fn parse_projects(raw: &str) -> Vec<ProjectDraft> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(':') {
            Some((title, description)) => ProjectDraft {
                title: Some(title.trim().to_string()),
                description: Some(description.trim().to_string()),
                link: None,
            },
            // Pas de séparateur : toute la ligne devient le titre, la description manque
            None => ProjectDraft {
                title: Some(line.trim().to_string()),
                description: Some(String::new()),
                link: None,
            },
        })
        .collect()
}

// Un champ de formulaire laissé vide n'est pas une valeur
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
