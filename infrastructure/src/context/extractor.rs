//! Local file context extractor
//!
//! Implements [`ContextExtractorPort`] for the document kinds the chat can
//! take context from:
//!
//! - plain text (`.txt`, `.text`, `.md`), read as UTF-8
//! - CSV (`.csv`), rendered as an aligned table, header first
//! - PDF (`.pdf`), text layer via `pdf-extract`
//!
//! Anything else is reported as [`ContextError::Unsupported`].

use chatsutra_application::ports::context_extractor::{ContextError, ContextExtractorPort};
use chatsutra_domain::DocumentKind;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Context extractor that reads from the local file system.
#[derive(Debug, Clone, Default)]
pub struct FileContextExtractor;

impl FileContextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn read_text(path: &Path) -> Result<String, ContextError> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::InvalidData {
                ContextError::Parse {
                    path: path.to_path_buf(),
                    message: "file is not valid UTF-8".to_string(),
                }
            } else {
                read_error(path, e)
            }
        })
    }

    fn read_csv(path: &Path) -> Result<String, ContextError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| csv_error(path, e))?;

        let mut rows: Vec<Vec<String>> = Vec::new();
        let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
        rows.push(headers.iter().map(|h| h.trim().to_string()).collect());
        for record in reader.records() {
            let record = record.map_err(|e| csv_error(path, e))?;
            rows.push(record.iter().map(|f| f.trim().to_string()).collect());
        }

        Ok(render_table(&rows))
    }

    fn read_pdf(path: &Path) -> Result<String, ContextError> {
        if !path.is_file() {
            return Err(read_error(
                path,
                std::io::Error::new(ErrorKind::NotFound, "No such file"),
            ));
        }
        let parse_error = |message: String| ContextError::Parse {
            path: path.to_path_buf(),
            message,
        };
        // pdf-extract panics on some malformed documents
        match std::panic::catch_unwind(|| pdf_extract::extract_text(path)) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(parse_error(e.to_string())),
            Err(_) => Err(parse_error("malformed PDF document".to_string())),
        }
    }
}

fn read_error(path: &Path, e: std::io::Error) -> ContextError {
    ContextError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn csv_error(path: &Path, e: csv::Error) -> ContextError {
    if e.is_io_error() {
        ContextError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    } else {
        ContextError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    }
}

/// Render rows as right-aligned columns separated by two spaces.
///
/// Short rows are padded with empty cells.
fn render_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            (0..columns)
                .map(|i| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    format!("{:>width$}", cell, width = widths[i])
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl ContextExtractorPort for FileContextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ContextError> {
        let kind = DocumentKind::from_path(path)
            .ok_or_else(|| ContextError::Unsupported(path.to_path_buf()))?;
        debug!("Extracting {} context from {}", kind, path.display());

        match kind {
            DocumentKind::PlainText => Self::read_text(path),
            DocumentKind::Csv => Self::read_csv(path),
            DocumentKind::Pdf => Self::read_pdf(path),
        }
    }
}
