//! HTTP Front Module
//!
//! Thin axum layer over the survey store: decodes submissions, renders the
//! report and passes static files through.
//!
//! ## Submodules
//! - **`protocol`**: Endpoint paths and response bodies.
//! - **`handlers`**: `/respond`, `/view` and `/survey`.
//! - **`assets`**: The fixed set of static files (form, stylesheet, images).
//! - **`router`**: Route table, shared extensions and the shutdown signal.

pub mod assets;
pub mod handlers;
pub mod protocol;
pub mod router;
