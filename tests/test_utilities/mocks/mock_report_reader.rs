use depcheck_comment::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ReportReader that serves fixed content and records requested paths
#[derive(Default, Clone)]
pub struct MockReportReader {
    content: Option<String>,
    pub requested_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockReportReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A reader for which the report does not exist
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn get_requested_paths(&self) -> Vec<PathBuf> {
        self.requested_paths.lock().unwrap().clone()
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, report_path: &Path) -> Result<Option<String>> {
        self.requested_paths
            .lock()
            .unwrap()
            .push(report_path.to_path_buf());
        Ok(self.content.clone())
    }
}
