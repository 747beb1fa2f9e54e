// crates/shared-kernel/src/clock/mod.rs

use chrono::{DateTime, Utc};

/// Source de temps injectable (les stubs de test fournissent une horloge contrôlée).
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
