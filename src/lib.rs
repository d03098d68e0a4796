//! Survey Collection Service Library
//!
//! Collects answers to a single survey over HTTP and keeps them in one JSON
//! backup file. The binary (`main.rs`) wires these modules into a server.
//!
//! ## Modules
//! - **`survey`**: The survey data model and `SurveyStore`, which holds the survey in
//!   memory behind a lock and rewrites the backup after every mutation.
//! - **`http`**: The axum front: submission endpoint, HTML report, static form and images.
//! - **`config`**: Bind address, backup path and static directory from flags or environment.
//! - **`error`**: Errors raised while loading or writing the backup.

pub mod config;
pub mod error;
pub mod http;
pub mod survey;
