//! File-based Submission Store
//!
//! Stores the latest submission of each module as a YAML file, one directory
//! per identity:
//!
//! ```text
//! <base>/<identity key>/mentor.yaml
//! <base>/<identity key>/mentee.yaml
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::domain::dashboard::Submission;
use crate::domain::foundation::{Identity, ModuleId};
use crate::ports::{GatewayError, SnapshotSource, SubmissionGateway};

/// File-based store for module submissions
#[derive(Debug, Clone)]
pub struct FileSubmissionStore {
    base_path: PathBuf,
}

impl FileSubmissionStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSubmissionStore::new("./data/submissions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Directory holding one identity's submissions
    fn identity_dir(&self, identity: &Identity) -> PathBuf {
        let key: String = identity
            .key()
            .chars()
            .map(|c| match c {
                'a'..='z' | '0'..='9' | '@' | '.' | '-' | '_' => c,
                _ => '_',
            })
            .collect();
        self.base_path.join(key)
    }

    fn submission_path(&self, identity: &Identity, module: ModuleId) -> PathBuf {
        self.identity_dir(identity)
            .join(format!("{}.yaml", module.as_str()))
    }
}

#[async_trait]
impl SubmissionGateway for FileSubmissionStore {
    async fn submit(&self, submission: &Submission) -> Result<(), GatewayError> {
        fs::create_dir_all(self.identity_dir(&submission.identity)).await?;

        let yaml = serde_yaml::to_string(submission)
            .map_err(|e| GatewayError::serialization(e.to_string()))?;

        // Write then rename so a reader never sees a half-written file.
        // Each write gets its own temp file so concurrent writers never share one.
        let path = self.submission_path(&submission.identity, submission.module);
        let tmp = path.with_extension(format!("yaml.{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, yaml).await?;
        fs::rename(&tmp, &path).await?;

        Ok(())
    }
}

#[async_trait]
impl SnapshotSource for FileSubmissionStore {
    async fn latest(&self, identity: &Identity) -> Result<Vec<Submission>, GatewayError> {
        let mut submissions = Vec::new();

        for module in ModuleId::ORDER {
            let path = self.submission_path(identity, module);
            if !path.exists() {
                continue;
            }

            let yaml = fs::read_to_string(&path).await?;
            let submission: Submission = serde_yaml::from_str(&yaml)
                .map_err(|e| GatewayError::serialization(e.to_string()))?;
            submissions.push(submission);
        }

        Ok(submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::mentor::fixtures::complete_mentor;
    use crate::domain::dashboard::Dashboard;
    use crate::domain::foundation::ModuleStatus;
    use crate::domain::wizard::ModuleWizard;
    use tempfile::TempDir;

    fn identity() -> Identity {
        Identity::new("Ana", "ana@example.com").unwrap()
    }

    #[tokio::test]
    async fn test_file_store_submit_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSubmissionStore::new(temp_dir.path());

        let mut dashboard = Dashboard::new(identity());
        dashboard.restore_module(ModuleWizard::restore(
            complete_mentor().into(),
            ModuleStatus::UnderReview,
            true,
        ));
        let submission = dashboard.submission(ModuleId::Mentor);
        store.submit(&submission).await.unwrap();

        let latest = store.latest(&identity()).await.unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].module, ModuleId::Mentor);
        assert_eq!(latest[0].status, ModuleStatus::UnderReview);
        assert_eq!(latest[0].answers, submission.answers);
        assert!(latest[0].progress.mentor);
    }

    #[tokio::test]
    async fn test_file_store_writes_one_file_per_module() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSubmissionStore::new(temp_dir.path());
        let dashboard = Dashboard::new(identity());

        store.submit(&dashboard.submission(ModuleId::Mentor)).await.unwrap();
        store.submit(&dashboard.submission(ModuleId::Method)).await.unwrap();
        store.submit(&dashboard.submission(ModuleId::Method)).await.unwrap();

        let dir = temp_dir.path().join("ana@example.com");
        assert!(dir.join("mentor.yaml").exists());
        assert!(dir.join("method.yaml").exists());
        assert_eq!(leftover_temp_files(&dir), 0);
        assert_eq!(store.latest(&identity()).await.unwrap().len(), 2);
    }

    fn leftover_temp_files(dir: &Path) -> usize {
        std::fs::read_dir(dir)
            .unwrap()
            .filter(|entry| {
                let name = entry.as_ref().unwrap().file_name();
                name.to_string_lossy().ends_with(".tmp")
            })
            .count()
    }

    #[tokio::test]
    async fn test_file_store_concurrent_writes_of_one_module() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSubmissionStore::new(temp_dir.path());

        let mut dashboard = Dashboard::new(identity());
        let todo = dashboard.submission(ModuleId::Mentor);
        dashboard.restore_module(ModuleWizard::restore(
            complete_mentor().into(),
            ModuleStatus::UnderReview,
            true,
        ));
        let reviewed = dashboard.submission(ModuleId::Mentor);

        let (first, second) = tokio::join!(store.submit(&todo), store.submit(&reviewed));
        first.unwrap();
        second.unwrap();

        let dir = temp_dir.path().join("ana@example.com");
        assert_eq!(leftover_temp_files(&dir), 0);
        let latest = store.latest(&identity()).await.unwrap();
        assert_eq!(latest.len(), 1);
    }

    #[tokio::test]
    async fn test_file_store_unknown_identity_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSubmissionStore::new(temp_dir.path());

        let latest = store.latest(&identity()).await.unwrap();
        assert!(latest.is_empty());
    }

    #[tokio::test]
    async fn test_file_store_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSubmissionStore::new(temp_dir.path());

        let dir = temp_dir.path().join("ana@example.com");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("mentor.yaml"), "module: [unterminated").unwrap();

        let result = store.latest(&identity()).await;
        assert!(matches!(result, Err(GatewayError::Serialization { .. })));
    }

    #[test]
    fn test_identity_dir_is_sanitized() {
        let store = FileSubmissionStore::new("/data");
        let odd = Identity::new("Eve", "eve/../x@example.com").unwrap();
        let dir = store.identity_dir(&odd);
        assert_eq!(dir, PathBuf::from("/data/eve_.._x@example.com"));
    }
}
