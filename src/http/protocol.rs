//! HTTP surface of the survey service.
//!
//! Endpoint paths and the JSON bodies the service sends back. Submissions
//! themselves are `Responder` documents (see `survey::types`).

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Accepts one responder document and stores it.
pub const ENDPOINT_RESPOND: &str = "/respond";
/// HTML report of every responder.
pub const ENDPOINT_VIEW: &str = "/view";
/// Survey name and questions as JSON, used by the form.
pub const ENDPOINT_SURVEY: &str = "/survey";

// --- Data Transfer Objects ---

/// What the form needs to draw itself.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurveyQuestionsResponse {
    pub name: String,
    pub questions: Vec<String>,
}

/// Plain-text acknowledgement for an accepted submission.
pub fn respond_ack(name: &str) -> String {
    format!("Responder {} added to survey", name)
}
