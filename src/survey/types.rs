use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Name given to a freshly initialized survey.
pub const DEFAULT_SURVEY_NAME: &str = "Alvoid Survey";

/// Questions asked by a freshly initialized survey, in display order.
pub const DEFAULT_QUESTIONS: [&str; 10] = [
    "Are you attending Alvoid?",
    "What is your name?",
    "How many other people are you bringing?",
    "Do you want to/ are you going to perform?",
    "What is your artist's name?",
    "Where are you from?",
    "How would you describe your music?",
    "Please link your socials and streaming platforms",
    "Can you provide (or need) transportation?",
    "What infrastructure/useful items can you bring?",
];

/// The whole questionnaire and everything collected for it.
///
/// This is also the exact shape of the backup document. Field names are
/// capitalized so backups written by earlier deployments keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Survey {
    #[serde(alias = "name", default)]
    pub name: String,
    #[serde(alias = "questions", default, deserialize_with = "null_as_default")]
    pub questions: Vec<String>,
    /// Keyed by responder name; a second submission under the same name replaces the first.
    #[serde(alias = "responders", default, deserialize_with = "null_as_default")]
    pub responders: BTreeMap<String, Responder>,
}

/// One person's submission.
///
/// Answers are keyed by the literal question text, not by position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Responder {
    #[serde(alias = "name", default)]
    pub name: String,
    #[serde(alias = "answers", default, deserialize_with = "null_as_default")]
    pub answers: BTreeMap<String, String>,
}

impl Survey {
    /// Builds an empty survey with the given name and questions.
    pub fn new(name: impl Into<String>, questions: Vec<String>) -> Self {
        Self {
            name: name.into(),
            questions,
            responders: BTreeMap::new(),
        }
    }

    /// Inserts or replaces the responder stored under `name`.
    ///
    /// Returns whatever was stored under that name before.
    pub fn add_response(
        &mut self,
        name: String,
        answers: BTreeMap<String, String>,
    ) -> Option<Responder> {
        let responder = Responder {
            name: name.clone(),
            answers,
        };
        self.responders.insert(name, responder)
    }

    pub fn add_question(&mut self, question: String) {
        self.questions.push(question);
    }
}

impl Default for Survey {
    fn default() -> Self {
        Self::new(
            DEFAULT_SURVEY_NAME,
            DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        )
    }
}

// Older backups and some clients send `null` for an empty map.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
