// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the creation and modification timestamps stamped on addresses.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
