// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::Report;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self {
            base_dir: base_path,
        })
    }

    /// Saves the assembled report as pretty JSON under <type>/<period>/
    pub fn save_report(&self, report: &Report, period: &str) -> Result<PathBuf, StorageError> {
        let target_dir = self.target_dir(report, period)?;

        let filename = format!("{}_{}.json", report.report_type, period);
        let file_path = target_dir.join(filename);

        let json = serde_json::to_string_pretty(report)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved report to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves a small metadata summary next to the report JSON
    pub fn save_report_metadata(
        &self,
        report: &Report,
        period: &str,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.target_dir(report, period)?;

        let filename = format!("{}_{}_meta.json", report.report_type, period);
        let file_path = target_dir.join(filename);

        let metadata = serde_json::json!({
            "report_type": report.report_type,
            "period": period,
            "sections_total": report.sections.len(),
            "sections_present": report.present_count(),
            "sections_missing": report.missing_sections(),
            "has_rankings": report.rankings.is_some(),
            "has_comments": report.comments.is_some(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }

    fn target_dir(&self, report: &Report, period: &str) -> Result<PathBuf, StorageError> {
        let target_dir = self
            .base_dir
            .join(report.report_type.label())
            .join(period);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }
        Ok(target_dir)
    }
}
