use crate::utils::file_size::format_kilobytes;
use std::fs;
use std::path::{Path, PathBuf};

pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["xlsx", "xls", "xlsm", "csv"];
pub const MAX_FILE_SIZE_MB: u64 = 10;
pub const INVALID_FILE_MESSAGE: &str = "Please select an Excel (.xlsx, .xls, .xlsm) or CSV file.";

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Case-sensitive suffix check; `LISTINGS.CSV` is rejected.
pub fn is_accepted_file_name(name: &str) -> bool {
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| name.strip_suffix(ext).is_some_and(|stem| stem.ends_with('.')))
}

pub fn declared_mime_type(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("csv") => "text/csv",
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsm") => "application/vnd.ms-excel.sheet.macroEnabled.12",
        _ => XLSX_MIME,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let mime_type = declared_mime_type(&name).to_string();

        Self {
            path: path.to_path_buf(),
            name,
            size,
            mime_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSummary {
    pub file_name: String,
    pub file_size: String,
    pub file_type: String,
}

impl PreviewSummary {
    pub fn new(file: &SelectedFile) -> Self {
        Self {
            file_name: file.name.clone(),
            file_size: format_kilobytes(file.size, 2),
            file_type: file.mime_type.clone(),
        }
    }
}
