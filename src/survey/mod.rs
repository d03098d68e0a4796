//! Survey Store Module
//!
//! Owns the single survey the service collects answers for, and keeps it
//! mirrored to one JSON backup file.
//!
//! ## Core Concepts
//! - **Survey**: a name, an ordered question list and the responders collected so far.
//! - **Overwrite semantics**: responders are keyed by name; resubmitting replaces the old answers.
//! - **Durability**: every mutation rewrites the whole backup before it is acknowledged.
//! - **Locking**: `SurveyStore` serializes "mutate + persist" behind one write lock.
//!
//! ## Submodules
//! - **`types`**: The `Survey` / `Responder` data model and the default survey.
//! - **`backup`**: Loading and atomically replacing the backup document.
//! - **`store`**: The shared, lock-guarded store handed to HTTP handlers.
//! - **`report`**: HTML rendering of collected responses.

pub mod backup;
pub mod report;
pub mod store;
pub mod types;
