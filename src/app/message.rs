use crate::error::ClientError;
use crate::upload::{
    BulkUploadResult, ClearAllResult, SelectedFile, TestParseResult, UploadHistoryEntry,
};
use std::path::PathBuf;

/// Everything that can happen to the upload screen: user input and async completions.
#[derive(Debug)]
pub enum Message {
    // ===== Lifecycle =====
    Mounted,

    // ===== Selection =====
    FileChosen(SelectedFile),
    PreviewLoaded { path: PathBuf, byte_len: u64 },
    PreviewFailed { path: PathBuf },
    DragHover(bool),

    // ===== Status =====
    DismissStatus,
    DismissAlert,

    // ===== Test Parse =====
    SubmitTestParse,
    TestParseFinished(Result<TestParseResult, ClientError>),

    // ===== Upload =====
    SubmitUpload,
    ProgressTick,
    UploadResponded,
    UploadFinished(Result<BulkUploadResult, ClientError>),

    // ===== History =====
    RefreshHistory,
    HistoryLoaded(Result<Vec<UploadHistoryEntry>, ClientError>),

    // ===== Delete All =====
    RequestDeleteAll,
    CancelDeleteAll,
    ConfirmDeleteAll,
    DeleteAllFinished(Result<ClearAllResult, ClientError>),

    // ===== Session =====
    SessionImported { base_url: String },
    SessionImportFailed(String),
}

/// Side effects requested by the reducer; the app runs them off the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadPreview(SelectedFile),
    FetchHistory,
    TestParse(SelectedFile),
    Upload(SelectedFile),
    ClearAll,
}
