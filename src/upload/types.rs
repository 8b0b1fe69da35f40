use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Maximum number of row errors listed in the partial-upload report.
pub const MAX_REPORTED_ROW_ERRORS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryStatus {
    Completed,
    Partial,
    Failed,
}

/// One past bulk upload, as recorded by the backend. Counters stay raw JSON
/// so a `null` or fractional value in one record cannot fail the whole list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadHistoryEntry {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upload_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_type: String,
    #[serde(default)]
    pub file_size: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub successful_uploads: Value,
    #[serde(default)]
    pub total_rows: Value,
}

impl UploadHistoryEntry {
    pub fn status_kind(&self) -> HistoryStatus {
        match self.status.as_str() {
            "completed" => HistoryStatus::Completed,
            "partial" => HistoryStatus::Partial,
            _ => HistoryStatus::Failed,
        }
    }

    /// Size in whole bytes; anything non-numeric or negative counts as zero.
    pub fn file_size_bytes(&self) -> u64 {
        self.file_size
            .as_f64()
            .filter(|size| size.is_finite() && *size > 0.0)
            .map_or(0, |size| size as u64)
    }

    pub fn rows_label(&self) -> String {
        format!(
            "{}/{} rows",
            display_value(&self.successful_uploads),
            display_value(&self.total_rows)
        )
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RowError {
    pub row: Value,
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default)]
    pub error: String,
}

impl RowError {
    fn describe(&self) -> String {
        let sheet_info = match self.sheet.as_deref() {
            Some(sheet) if !sheet.is_empty() => format!(" (Sheet: {})", sheet),
            _ => String::new(),
        };
        format!("Row {}{}: {}", display_value(&self.row), sheet_info, self.error)
    }
}

/// Response of `POST /api/directory/bulk-upload`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUploadResult {
    #[serde(default)]
    pub uploaded_count: u64,
    #[serde(default)]
    pub errors: Vec<RowError>,
}

impl BulkUploadResult {
    pub fn summary(&self) -> String {
        let error_clause = if self.errors.is_empty() {
            String::new()
        } else {
            format!("{} entries had errors.", self.errors.len())
        };
        format!(
            "Successfully uploaded {} listings! {}",
            self.uploaded_count, error_clause
        )
    }

    /// Detailed breakdown of the first few row errors, `None` when the upload was clean.
    pub fn error_report(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }

        let mut details = self
            .errors
            .iter()
            .take(MAX_REPORTED_ROW_ERRORS)
            .map(RowError::describe)
            .collect::<Vec<_>>()
            .join("\n");

        if self.errors.len() > MAX_REPORTED_ROW_ERRORS {
            details.push_str(&format!(
                "\n... and {} more errors",
                self.errors.len() - MAX_REPORTED_ROW_ERRORS
            ));
        }

        Some(format!(
            "Upload completed with errors:\n\n{}\n\nCheck the log for full details.",
            details
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SheetSummary {
    pub name: String,
    #[serde(default)]
    pub rows: Value,
}

/// Response of `POST /api/directory/test-parse`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestParseResult {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_extension: String,
    #[serde(default)]
    pub total_rows: Value,
    #[serde(default)]
    pub sheets: Option<Vec<SheetSummary>>,
    #[serde(default)]
    pub auto_categorization: Option<Map<String, Value>>,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub first_row: Value,
}

impl TestParseResult {
    pub fn report(&self) -> String {
        let mut message = format!(
            "File: {}\nFormat: {}\nTotal Rows: {}",
            self.file_name,
            self.file_extension,
            display_value(&self.total_rows)
        );

        if let Some(sheets) = self.sheets.as_ref().filter(|s| !s.is_empty()) {
            message.push_str("\n\nSheets:");
            for sheet in sheets {
                message.push_str(&format!("\n{}: {} rows", sheet.name, display_value(&sheet.rows)));
            }
        }

        if let Some(categories) = &self.auto_categorization {
            message.push_str("\n\nAuto-Categorization:");
            for (tab, industry) in categories {
                message.push_str(&format!("\n{} → {}", tab, display_value(industry)));
            }
        }

        let first_row =
            serde_json::to_string_pretty(&self.first_row).unwrap_or_else(|_| "null".to_string());
        message.push_str(&format!(
            "\n\nHeaders: {}\n\nFirst Row: {}",
            self.headers.join(", "),
            first_row
        ));

        message
    }
}

/// Response of `DELETE /api/directory/clear-all`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearAllResult {
    #[serde(default)]
    pub deleted_count: Value,
}

impl ClearAllResult {
    pub fn summary(&self) -> String {
        format!(
            "Successfully deleted {} listings and upload history",
            display_value(&self.deleted_count)
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Renders a JSON scalar the way it reads in a sentence: strings unquoted.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "undefined".to_string(),
        other => other.to_string(),
    }
}
