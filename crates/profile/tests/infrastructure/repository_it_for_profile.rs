// crates/profile/tests/infrastructure/repository_it_for_profile.rs

use profile::application::seed_profiles::SeedProfilesUseCase;
use profile::domain::repositories::ProfileRepository;
use profile::domain::schema::{NewProfile, ProfileDraft, ProjectDraft};
use profile::domain::value_objects::ProfileId;
use profile::infrastructure::postgres::repositories::PostgresProfileRepository;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;

/// Helper pour centraliser l'init du repo par test
async fn get_repo() -> (PostgresProfileRepository, PostgresTestContext) {
    let db = crate::common::setup_postgres_test_db().await;
    (PostgresProfileRepository::new(db.pool()), db)
}

fn new_profile(name: &str) -> NewProfile {
    ProfileDraft {
        name: Some(name.into()),
        avatar: Some("https://x/img.png".into()),
        bio: Some("Designer".into()),
        education: Some("MBA, TAPMI".into()),
        skills: Some(vec!["UX".into(), "Research".into()]),
        experience: Some("2 internships".into()),
        projects: Some(vec![ProjectDraft {
            title: Some("Study A".into()),
            description: Some("desc".into()),
            link: Some("#".into()),
        }]),
        linkedin: Some("https://www.linkedin.com/in/asharao/".into()),
        video_url: None,
    }
    .validate()
    .unwrap()
}

#[tokio::test]
async fn test_profile_lifecycle() {
    let (repo, _db) = get_repo().await;

    // 1. Store vide
    assert_eq!(repo.count().await.unwrap(), 0);
    assert!(repo.list_all().await.unwrap().is_empty());

    // 2. Création : id et timestamps attribués par le store
    let created = repo.create(&new_profile("Asha Rao")).await.expect("Create failed");
    assert_eq!(created.content(), new_profile("Asha Rao"));
    assert_eq!(created.updated_at, created.created_at);

    // 3. Relecture fidèle (tableau TEXT[] + JSONB)
    let fetched = repo.get_by_id(&created.id).await.unwrap().expect("Profile missing");
    assert_eq!(fetched, created);
    assert_eq!(fetched.projects[0].link.as_deref(), Some("#"));
    assert_eq!(fetched.video_url, None);

    // 4. Comptage
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_unknown_id_is_absent() {
    let (repo, _db) = get_repo().await;
    repo.create(&new_profile("Asha Rao")).await.unwrap();

    let result = repo.get_by_id(&ProfileId::new()).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let (repo, _db) = get_repo().await;

    let mut ids = Vec::new();
    for name in ["First", "Second", "Third"] {
        ids.push(repo.create(&new_profile(name)).await.unwrap().id);
    }

    let listed = repo.list_all().await.unwrap();

    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Third", "Second", "First"]);
    assert!(listed.iter().all(|p| ids.contains(&p.id)));
}

#[tokio::test]
async fn test_create_many_inserts_the_seed() {
    let (repo, _db) = get_repo().await;
    let seed = SeedProfilesUseCase::seed_data().unwrap();

    let created = repo.create_many(&seed).await.expect("Bulk insert failed");

    assert_eq!(created.len(), 3);
    assert_eq!(repo.count().await.unwrap(), 3);
    // Le dernier inséré sort en tête
    assert_eq!(repo.list_all().await.unwrap()[0].name.as_str(), "Rahul Verma");
}
