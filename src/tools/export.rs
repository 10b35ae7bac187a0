//! Result export tools
//!
//! Writes session results to CSV or JSON files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Export error types
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported format '{0}' (expected csv or json)")]
    UnsupportedFormat(String),

    #[error("No results to save")]
    NothingToSave,
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Csv, ExportFormat::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Target path for a file name entered without extension
pub fn output_path(base: &Path, format: ExportFormat) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Write rows to `<base>.<ext>`, returning the path written
pub fn save_results<T: Serialize>(
    rows: &[T],
    format: ExportFormat,
    base: &Path,
) -> ExportResult<PathBuf> {
    if rows.is_empty() {
        return Err(ExportError::NothingToSave);
    }

    let path = output_path(base, format);

    match format {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_path(&path)?;
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        ExportFormat::Json => {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writer.flush()?;
        }
    }

    tracing::info!("Saved {} rows to {}", rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::lookup::ResultRow;

    fn rows() -> Vec<ResultRow> {
        vec![
            ResultRow {
                food_description: "Oats, dry".into(),
                quantity: 50.0,
                unit: "g".into(),
                calories: 189.5,
                carbs: 33.85,
                protein: 6.6,
                fat: 3.25,
                fiber: 5.05,
            },
            ResultRow {
                food_description: "Milk".into(),
                quantity: 200.0,
                unit: "g".into(),
                calories: 122.0,
                carbs: 9.6,
                protein: 6.4,
                fat: 6.6,
                fiber: 0.0,
            },
        ]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(" json ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_output_path_appends_extension() {
        assert_eq!(
            output_path(Path::new("out/today"), ExportFormat::Csv),
            PathBuf::from("out/today.csv")
        );
        assert_eq!(
            output_path(Path::new("v1.2"), ExportFormat::Json),
            PathBuf::from("v1.2.json")
        );
    }

    #[test]
    fn test_save_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_results(&rows(), ExportFormat::Csv, &dir.path().join("meals")).unwrap();

        assert_eq!(path, dir.path().join("meals.csv"));
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("food_description,quantity,unit,calories,carbs,protein,fat,fiber")
        );
        assert_eq!(lines.next(), Some("\"Oats, dry\",50.0,g,189.5,33.85,6.6,3.25,5.05"));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_save_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_results(&rows(), ExportFormat::Json, &dir.path().join("meals")).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["food_description"], "Milk");
        assert_eq!(value[0]["fiber"], 5.05);
    }

    #[test]
    fn test_nothing_to_save() {
        let dir = tempfile::tempdir().unwrap();
        let empty: Vec<ResultRow> = Vec::new();
        assert!(matches!(
            save_results(&empty, ExportFormat::Csv, &dir.path().join("x")),
            Err(ExportError::NothingToSave)
        ));
    }
}
