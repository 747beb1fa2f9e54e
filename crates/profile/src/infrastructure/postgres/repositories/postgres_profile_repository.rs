// crates/profile/src/infrastructure/postgres/repositories/postgres_profile_repository.rs

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{internal_err, Result};
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::{PgConnection, PgPool};

use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::domain::schema::NewProfile;
use crate::domain::value_objects::ProfileId;
use crate::infrastructure::postgres::rows::PostgresProfileRow;

const INSERT_SQL: &str = r#"
    INSERT INTO profiles (
        name, avatar, bio, education, skills, experience, projects, linkedin, video_url
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
    RETURNING *
"#;

pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(conn: &mut PgConnection, profile: &NewProfile) -> Result<Profile> {
        let projects: JsonValue = serde_json::to_value(&profile.projects)
            .map_err(|e| internal_err(format!("Failed to serialize projects: {}", e)))?;

        let row = sqlx::query_as::<_, PostgresProfileRow>(INSERT_SQL)
            .bind(profile.name.as_str())
            .bind(profile.avatar.as_str())
            .bind(profile.bio.as_str())
            .bind(profile.education.as_str())
            .bind(profile.skills.as_slice())
            .bind(profile.experience.as_str())
            .bind(projects)
            .bind(profile.linkedin.as_deref())
            .bind(profile.video_url.as_deref())
            .fetch_one(&mut *conn)
            .await
            .map_domain::<Profile>()?;

        row.try_into()
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn list_all(&self) -> Result<Vec<Profile>> {
        // `id` départage deux créations au même instant
        let sql = "SELECT * FROM profiles ORDER BY created_at DESC, id DESC";

        let rows = sqlx::query_as::<_, PostgresProfileRow>(sql)
            .fetch_all(&self.pool)
            .await
            .map_domain::<Profile>()?;

        rows.into_iter().map(Profile::try_from).collect()
    }

    async fn get_by_id(&self, id: &ProfileId) -> Result<Option<Profile>> {
        let sql = "SELECT * FROM profiles WHERE id = $1";

        let row = sqlx::query_as::<_, PostgresProfileRow>(sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_domain::<Profile>()?;

        row.map(|r| r.try_into()).transpose()
    }

    async fn create(&self, profile: &NewProfile) -> Result<Profile> {
        let mut conn = self.pool.acquire().await.map_domain::<Profile>()?;
        Self::insert(&mut conn, profile).await
    }

    async fn create_many(&self, profiles: &[NewProfile]) -> Result<Vec<Profile>> {
        // Tout ou rien
        let mut tx = self.pool.begin().await.map_domain::<Profile>()?;

        let mut created = Vec::with_capacity(profiles.len());
        for profile in profiles {
            created.push(Self::insert(&mut *tx, profile).await?);
        }

        tx.commit().await.map_domain::<Profile>()?;
        Ok(created)
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await
            .map_domain::<Profile>()?;

        count
            .try_into()
            .map_err(|_| internal_err("Negative profile count in database"))
    }
}
