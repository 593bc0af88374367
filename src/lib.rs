pub mod catalog;
pub mod clock;
pub mod config;
pub mod errors;
pub mod journal;
pub mod milestones;
pub mod models;
pub mod notes;
pub mod stats;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use errors::{JournalError, StoreError};
pub use journal::Journal;
pub use models::{JournalReport, Milestone, MilestoneKind, Note, Statistics};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
