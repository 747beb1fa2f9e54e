// crates/profile/src/utils/profile_repository_stub.rs

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use shared_kernel::clock::Clock;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::domain::schema::NewProfile;
use crate::domain::value_objects::ProfileId;

// --- HORLOGE DÉTERMINISTE ---
/// Avance d'une seconde à chaque lecture : deux créations n'ont jamais le même instant.
pub struct SteppingClock {
    origin: DateTime<Utc>,
    ticks: AtomicI64,
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self {
            origin: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.origin + Duration::seconds(tick)
    }
}

// --- STUB PROFILE REPOSITORY (store en mémoire) ---
pub struct ProfileRepositoryStub {
    pub profiles: Mutex<Vec<Profile>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    pub write_calls: Mutex<usize>,
    clock: Arc<dyn Clock>,
}

impl Default for ProfileRepositoryStub {
    fn default() -> Self {
        Self {
            profiles: Mutex::new(Vec::new()),
            error_to_return: Mutex::new(None),
            write_calls: Mutex::new(0),
            clock: Arc::new(SteppingClock::default()),
        }
    }
}

impl ProfileRepositoryStub {
    pub fn failing(error: DomainError) -> Self {
        Self {
            error_to_return: Mutex::new(Some(error)),
            ..Default::default()
        }
    }

    pub fn writes(&self) -> usize {
        *self.write_calls.lock().unwrap()
    }

    fn fail_if_requested(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn insert(&self, content: &NewProfile) -> Profile {
        let now = self.clock.now();
        let profile = Profile::restore(ProfileId::new(), content.clone(), now, now);
        self.profiles.lock().unwrap().push(profile.clone());
        profile
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryStub {
    async fn list_all(&self) -> Result<Vec<Profile>> {
        self.fail_if_requested()?;
        let mut profiles = self.profiles.lock().unwrap().clone();
        // Tri stable : à instant égal, l'ordre d'insertion inverse départage
        profiles.reverse();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }

    async fn get_by_id(&self, id: &ProfileId) -> Result<Option<Profile>> {
        self.fail_if_requested()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn create(&self, profile: &NewProfile) -> Result<Profile> {
        *self.write_calls.lock().unwrap() += 1;
        self.fail_if_requested()?;
        Ok(self.insert(profile))
    }

    async fn create_many(&self, profiles: &[NewProfile]) -> Result<Vec<Profile>> {
        *self.write_calls.lock().unwrap() += 1;
        self.fail_if_requested()?;
        Ok(profiles.iter().map(|p| self.insert(p)).collect())
    }

    async fn count(&self) -> Result<u64> {
        self.fail_if_requested()?;
        Ok(self.profiles.lock().unwrap().len() as u64)
    }
}
