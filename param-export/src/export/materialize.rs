use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ParameterRecord;
use crate::export::ExportError;

// Values are written as-is; the extension is a naming convention, not a
// promise that the content parses as JSON.
const OUTPUT_EXTENSION: &str = "json";

pub struct Materializer {
    output_dir: PathBuf,
}

impl Materializer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes each record's value verbatim to `<output_dir>/<flat name>.json`,
    /// overwriting whatever is already there. A failed write aborts the batch
    /// and the error names the offending path.
    pub async fn materialize(
        &self,
        records: &[ParameterRecord],
    ) -> Result<Vec<PathBuf>, ExportError> {
        self.ensure_output_dir().await?;

        let mut written = Vec::with_capacity(records.len());
        for record in records {
            let file_name = format!("{}.{}", record.name().file_stem(), OUTPUT_EXTENSION);
            let path = self.output_dir.join(file_name);

            tokio::fs::write(&path, record.value()).await.map_err(|err| {
                ExportError::Io(format!("Failed to write '{}': {}", path.display(), err))
            })?;

            debug!(path = %path.display(), "Wrote parameter value");
            written.push(path);
        }

        Ok(written)
    }

    /// Single-level creation; a directory that already exists (possibly made
    /// by a concurrent exporter) is fine.
    async fn ensure_output_dir(&self) -> Result<(), ExportError> {
        match tokio::fs::create_dir(&self.output_dir).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(ExportError::Io(format!(
                "Failed to create output directory '{}': {}",
                self.output_dir.display(),
                err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn records() -> Vec<ParameterRecord> {
        vec![
            ParameterRecord::new("/app/db/host", "db.internal"),
            ParameterRecord::new("singleKey", r#"{"nested": "json"}"#),
        ]
    }

    #[tokio::test]
    async fn test_writes_values_verbatim() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("out");
        let materializer = Materializer::new(&output_dir);

        let paths = materializer.materialize(&records()).await.unwrap();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], output_dir.join("app-db-host.json"));
        assert_eq!(paths[1], output_dir.join("singleKey.json"));

        let content = tokio::fs::read_to_string(&paths[0]).await.unwrap();
        assert_eq!(content, "db.internal");
        let content = tokio::fs::read_to_string(&paths[1]).await.unwrap();
        assert_eq!(content, r#"{"nested": "json"}"#);
    }

    #[tokio::test]
    async fn test_creates_missing_output_dir_once() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("fresh");
        assert!(!output_dir.exists());

        let materializer = Materializer::new(&output_dir);
        materializer.materialize(&records()).await.unwrap();
        assert!(output_dir.is_dir());
    }

    #[tokio::test]
    async fn test_existing_dir_and_unrelated_files_untouched() {
        let dir = tempdir().unwrap();
        let unrelated = dir.path().join("unrelated.txt");
        tokio::fs::write(&unrelated, "keep me").await.unwrap();

        let materializer = Materializer::new(dir.path());
        materializer.materialize(&records()).await.unwrap();

        let content = tokio::fs::read_to_string(&unrelated).await.unwrap();
        assert_eq!(content, "keep me");
    }

    #[tokio::test]
    async fn test_rerun_overwrites_idempotently() {
        let dir = tempdir().unwrap();
        let materializer = Materializer::new(dir.path());

        let first = materializer.materialize(&records()).await.unwrap();
        let second = materializer.materialize(&records()).await.unwrap();
        assert_eq!(first, second);

        let content = tokio::fs::read_to_string(&second[0]).await.unwrap();
        assert_eq!(content, "db.internal");
    }

    #[tokio::test]
    async fn test_colliding_names_last_write_wins() {
        let dir = tempdir().unwrap();
        let materializer = Materializer::new(dir.path());

        let colliding = vec![
            ParameterRecord::new("/app/key", "first"),
            ParameterRecord::new("app/key/", "second"),
        ];
        let paths = materializer.materialize(&colliding).await.unwrap();

        assert_eq!(paths[0], paths[1]);
        let content = tokio::fs::read_to_string(&paths[1]).await.unwrap();
        assert_eq!(content, "second");
    }

    #[tokio::test]
    async fn test_missing_parent_is_io_error() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("missing").join("nested");

        let materializer = Materializer::new(&output_dir);
        let err = materializer.materialize(&records()).await.unwrap_err();

        match err {
            ExportError::Io(msg) => assert!(msg.contains("Failed to create output directory")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_write_reports_path() {
        let dir = tempdir().unwrap();
        let materializer = Materializer::new(dir.path());

        // A record flattening to an empty stem targets the hidden file
        // ".json"; make that path a directory so the write itself fails.
        tokio::fs::create_dir(dir.path().join(".json")).await.unwrap();

        let bad = vec![ParameterRecord::new("/", "value")];
        let err = materializer.materialize(&bad).await.unwrap_err();

        match err {
            ExportError::Io(msg) => {
                assert!(msg.contains("Failed to write"));
                assert!(msg.contains(".json"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
