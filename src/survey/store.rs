use super::backup;
use super::report;
use super::types::Survey;
use crate::error::Result;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The live survey plus the file that mirrors it.
///
/// Writers hold the write lock across "mutate + persist", so at most one
/// mutation is in flight and the backup always matches some committed state.
/// Readers take the read lock and copy out what they need.
pub struct SurveyStore {
    survey: RwLock<Survey>,
    backup_path: PathBuf,
}

impl SurveyStore {
    /// Opens the store backed by `backup_path`.
    ///
    /// An existing backup is loaded verbatim. Without one, the default survey
    /// is created and written out before returning. A backup that exists but
    /// cannot be read or parsed is an error.
    pub async fn open(backup_path: impl Into<PathBuf>) -> Result<Arc<Self>> {
        let backup_path = backup_path.into();

        let survey = match backup::load(&backup_path).await? {
            Some(survey) => {
                tracing::info!(
                    "Loaded survey '{}' from backup {} ({} responders)",
                    survey.name,
                    backup_path.display(),
                    survey.responders.len()
                );
                survey
            }
            None => {
                let survey = Survey::default();
                tracing::info!("Initialized survey '{}'", survey.name);
                backup::save(&backup_path, &survey).await?;
                tracing::info!("Saved survey to backup {}", backup_path.display());
                survey
            }
        };

        Ok(Self::with_survey(survey, backup_path))
    }

    /// Wraps an already-built survey without touching disk.
    pub fn with_survey(survey: Survey, backup_path: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            survey: RwLock::new(survey),
            backup_path: backup_path.into(),
        })
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Stores `answers` under `name`, replacing any earlier submission by that
    /// name, and rewrites the backup.
    ///
    /// Returns once the backup is on disk. If writing fails the previous entry
    /// is restored and the error is returned.
    pub async fn add_response(&self, name: String, answers: BTreeMap<String, String>) -> Result<()> {
        let mut survey = self.survey.write().await;
        let previous = survey.add_response(name.clone(), answers);

        if let Err(e) = backup::save(&self.backup_path, &survey).await {
            match previous {
                Some(previous) => {
                    survey.responders.insert(name, previous);
                }
                None => {
                    survey.responders.remove(&name);
                }
            }
            return Err(e);
        }

        tracing::debug!("Saved survey to backup after response from '{}'", name);
        Ok(())
    }

    /// Appends a question and rewrites the backup.
    pub async fn add_question(&self, question: String) -> Result<()> {
        let mut survey = self.survey.write().await;
        survey.add_question(question);

        if let Err(e) = backup::save(&self.backup_path, &survey).await {
            survey.questions.pop();
            return Err(e);
        }

        Ok(())
    }

    /// Rewrites the backup from the current state.
    pub async fn persist(&self) -> Result<()> {
        let survey = self.survey.write().await;
        backup::save(&self.backup_path, &survey).await
    }

    /// Consistent copy of the current survey.
    pub async fn snapshot(&self) -> Survey {
        self.survey.read().await.clone()
    }

    /// Survey name and questions, without the responders.
    pub async fn questions(&self) -> (String, Vec<String>) {
        let survey = self.survey.read().await;
        (survey.name.clone(), survey.questions.clone())
    }

    /// HTML report of every responder.
    pub async fn render(&self) -> String {
        let survey = self.survey.read().await;
        report::render_html(&survey)
    }
}
