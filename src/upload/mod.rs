mod client;
mod selection;
mod types;

pub use client::{
    DirectoryClient, BULK_UPLOAD_PATH, CLEAR_ALL_PATH, TEST_PARSE_PATH, UPLOAD_HISTORY_PATH,
};
pub use selection::{
    declared_mime_type, is_accepted_file_name, PreviewSummary, SelectedFile, ACCEPTED_EXTENSIONS,
    INVALID_FILE_MESSAGE, MAX_FILE_SIZE_MB,
};
pub use types::{
    BulkUploadResult, ClearAllResult, HistoryStatus, RowError, SheetSummary, TestParseResult,
    UploadHistoryEntry, MAX_REPORTED_ROW_ERRORS,
};
