use super::message::{Command, Message};
use crate::error::ClientError;
use crate::upload::{
    is_accepted_file_name, PreviewSummary, SelectedFile, UploadHistoryEntry, INVALID_FILE_MESSAGE,
};
use derivative::Derivative;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);
pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_CAP: u8 = 90;
pub const PROGRESS_DONE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient banner. Equality ignores the expiry so tests can compare by content.
#[derive(Derivative, Clone)]
#[derivative(Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
    #[derivative(PartialEq = "ignore")]
    pub expires_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity, now: Instant) -> Self {
        Self {
            text: text.into(),
            severity,
            expires_at: now + STATUS_MESSAGE_TTL,
        }
    }
}

/// Blocking, dismissible diagnostic dump (test-parse results, row errors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct UploadState {
    pub selected_file: Option<SelectedFile>,
    pub preview: Option<PreviewSummary>,
    pub status: Option<StatusMessage>,
    pub progress: u8,
    pub is_uploading: bool,
    pub is_parsing: bool,
    pub history: Vec<UploadHistoryEntry>,
    pub history_requests: usize,
    pub drag_hover: bool,
    pub confirm_delete_all: bool,
    pub alerts: VecDeque<Alert>,
}

impl UploadState {
    /// Alert currently on screen; later ones wait until it is dismissed.
    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn modal_open(&self) -> bool {
        !self.alerts.is_empty() || self.confirm_delete_all
    }

    pub fn is_loading_history(&self) -> bool {
        self.history_requests > 0
    }

    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some() && !self.is_uploading
    }

    pub fn can_test_parse(&self) -> bool {
        self.can_upload() && !self.is_parsing
    }

    /// Deadline of the visible banner, used to schedule the next repaint.
    pub fn status_deadline(&self) -> Option<Instant> {
        self.status.as_ref().map(|status| status.expires_at)
    }

    pub fn expire_status(&mut self, now: Instant) {
        if self.status_deadline().is_some_and(|deadline| deadline <= now) {
            self.status = None;
        }
    }

    fn show(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.status = Some(StatusMessage::new(text, severity, now));
    }

    fn clear_selection(&mut self) {
        self.selected_file = None;
        self.preview = None;
    }

    fn fetch_history(&mut self) -> Option<Command> {
        self.history_requests += 1;
        Some(Command::FetchHistory)
    }

    /// Applies one message and returns the side effect it asks for, if any.
    pub fn update(&mut self, msg: Message, now: Instant) -> Option<Command> {
        match msg {
            // ===== Lifecycle =====
            Message::Mounted => {
                self.status = None;
                self.fetch_history()
            }

            // ===== Selection =====
            Message::FileChosen(file) => {
                if self.modal_open() {
                    tracing::debug!(name = %file.name, "selection ignored while a dialog is open");
                    return None;
                }
                if !is_accepted_file_name(&file.name) {
                    tracing::warn!(name = %file.name, "rejected file with unsupported extension");
                    self.show(INVALID_FILE_MESSAGE, Severity::Error, now);
                    return None;
                }

                tracing::info!(name = %file.name, size = file.size, "file selected");
                self.preview = None;
                self.selected_file = Some(file.clone());
                Some(Command::LoadPreview(file))
            }
            Message::PreviewLoaded { path, byte_len } => {
                if let Some(file) = self.selected_file.as_mut().filter(|f| f.path == path) {
                    file.size = byte_len;
                    self.preview = Some(PreviewSummary::new(file));
                }
                None
            }
            Message::PreviewFailed { path } => {
                if self.selected_file.as_ref().is_some_and(|f| f.path == path) {
                    self.preview = None;
                }
                None
            }
            Message::DragHover(hovering) => {
                self.drag_hover = hovering;
                None
            }

            // ===== Status =====
            Message::DismissStatus => {
                self.status = None;
                None
            }
            Message::DismissAlert => {
                self.alerts.pop_front();
                None
            }

            // ===== Test Parse =====
            Message::SubmitTestParse => {
                if self.is_parsing {
                    return None;
                }
                let Some(file) = self.selected_file.clone() else {
                    self.show("Please select a file to test.", Severity::Error, now);
                    return None;
                };
                self.is_parsing = true;
                Some(Command::TestParse(file))
            }
            Message::TestParseFinished(result) => {
                self.is_parsing = false;
                match result {
                    Ok(parsed) => {
                        tracing::info!(?parsed, "test parse result");
                        self.alerts.push_back(Alert {
                            title: "Test Parse Result".to_string(),
                            body: parsed.report(),
                        });
                    }
                    Err(e) => {
                        self.show(format!("Test parse failed: {}", e), Severity::Error, now);
                    }
                }
                None
            }

            // ===== Upload =====
            Message::SubmitUpload => {
                if self.is_uploading {
                    return None;
                }
                let Some(file) = self.selected_file.clone() else {
                    self.show("Please select a file to upload.", Severity::Error, now);
                    return None;
                };
                self.is_uploading = true;
                self.progress = 0;
                Some(Command::Upload(file))
            }
            Message::ProgressTick => {
                if self.is_uploading && self.progress < PROGRESS_CAP {
                    self.progress = (self.progress + PROGRESS_STEP).min(PROGRESS_CAP);
                }
                None
            }
            Message::UploadResponded => {
                if self.is_uploading {
                    self.progress = PROGRESS_DONE;
                }
                None
            }
            Message::UploadFinished(result) => {
                self.is_uploading = false;
                self.progress = 0;
                match result {
                    Ok(uploaded) => {
                        tracing::info!(
                            uploaded = uploaded.uploaded_count,
                            errors = uploaded.errors.len(),
                            "bulk upload finished"
                        );
                        self.clear_selection();
                        self.show(uploaded.summary(), Severity::Success, now);

                        if !uploaded.errors.is_empty() {
                            tracing::warn!(errors = ?uploaded.errors, "upload row errors");
                        }
                        if let Some(report) = uploaded.error_report() {
                            self.alerts.push_back(Alert {
                                title: "Upload Errors".to_string(),
                                body: report,
                            });
                        }

                        self.fetch_history()
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "bulk upload failed");
                        self.show(format!("Upload failed: {}", e), Severity::Error, now);
                        None
                    }
                }
            }

            // ===== History =====
            Message::RefreshHistory => self.fetch_history(),
            Message::HistoryLoaded(result) => {
                self.history_requests = self.history_requests.saturating_sub(1);
                match result {
                    Ok(history) => self.history = history,
                    Err(e) => tracing::error!(error = %e, "failed to fetch upload history"),
                }
                None
            }

            // ===== Delete All =====
            Message::RequestDeleteAll => {
                self.confirm_delete_all = true;
                None
            }
            Message::CancelDeleteAll => {
                self.confirm_delete_all = false;
                None
            }
            Message::ConfirmDeleteAll => {
                if !self.confirm_delete_all {
                    return None;
                }
                self.confirm_delete_all = false;
                Some(Command::ClearAll)
            }
            Message::DeleteAllFinished(result) => {
                match result {
                    Ok(cleared) => {
                        self.show(cleared.summary(), Severity::Success, now);
                        self.history.clear();
                        self.clear_selection();
                    }
                    Err(ClientError::Server { status, .. }) => {
                        tracing::error!(status, "delete all rejected");
                        self.show("Failed to delete data", Severity::Error, now);
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "error deleting data");
                        self.show("Error deleting data", Severity::Error, now);
                    }
                }
                None
            }

            // ===== Session =====
            Message::SessionImported { base_url } => {
                self.show(
                    format!("Session imported for {}", base_url),
                    Severity::Success,
                    now,
                );
                self.fetch_history()
            }
            Message::SessionImportFailed(reason) => {
                self.show(
                    format!("Session import failed: {}", reason),
                    Severity::Error,
                    now,
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::{BulkUploadResult, ClearAllResult, RowError, TestParseResult};
    use assert_matches::assert_matches;
    use serde_json::json;
    use std::path::PathBuf;

    fn file(name: &str) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from(format!("/tmp/{}", name)),
            name: name.to_string(),
            size: 2048,
            mime_type: "text/csv".to_string(),
        }
    }

    fn entry(name: &str) -> UploadHistoryEntry {
        serde_json::from_value(json!({
            "originalName": name,
            "uploadDate": "2024-01-01T00:00:00Z",
            "fileType": "csv",
            "fileSize": 100,
            "status": "completed",
            "successfulUploads": 1,
            "totalRows": 1
        }))
        .unwrap()
    }

    fn server_error(message: &str) -> ClientError {
        ClientError::Server {
            status: 500,
            message: message.to_string(),
        }
    }

    fn selected(state: &mut UploadState, name: &str, now: Instant) {
        let f = file(name);
        let path = f.path.clone();
        state.update(Message::FileChosen(f), now);
        state.update(Message::PreviewLoaded { path, byte_len: 2048 }, now);
    }

    #[test]
    fn mount_clears_status_and_fetches_history() {
        let now = Instant::now();
        let mut state = UploadState::default();
        state.status = Some(StatusMessage::new("stale", Severity::Error, now));

        assert_eq!(state.update(Message::Mounted, now), Some(Command::FetchHistory));
        assert!(state.status.is_none());
        assert!(state.is_loading_history());
    }

    #[test]
    fn invalid_extension_is_rejected_without_touching_selection() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.xlsx", now);

        let command = state.update(Message::FileChosen(file("listings.txt")), now);

        assert_eq!(command, None);
        assert_eq!(state.selected_file.as_ref().unwrap().name, "listings.xlsx");
        assert_eq!(
            state.status,
            Some(StatusMessage::new(INVALID_FILE_MESSAGE, Severity::Error, now))
        );
    }

    #[test]
    fn invalid_extension_with_nothing_selected_stays_empty() {
        let now = Instant::now();
        let mut state = UploadState::default();
        state.update(Message::FileChosen(file("listings.txt")), now);
        assert!(state.selected_file.is_none());
        assert!(state.preview.is_none());
    }

    #[test]
    fn valid_selection_loads_preview() {
        let now = Instant::now();
        let mut state = UploadState::default();
        let chosen = file("listings.csv");

        let command = state.update(Message::FileChosen(chosen.clone()), now);
        assert_eq!(command, Some(Command::LoadPreview(chosen.clone())));
        assert!(state.preview.is_none());

        state.update(
            Message::PreviewLoaded {
                path: chosen.path.clone(),
                byte_len: 1536,
            },
            now,
        );
        let preview = state.preview.as_ref().unwrap();
        assert_eq!(preview.file_name, "listings.csv");
        assert_eq!(preview.file_size, "1.50 KB");
        assert_eq!(preview.file_type, "text/csv");
    }

    #[test]
    fn stale_preview_is_discarded() {
        let now = Instant::now();
        let mut state = UploadState::default();
        let first = file("first.csv");
        state.update(Message::FileChosen(first.clone()), now);
        state.update(Message::FileChosen(file("second.csv")), now);

        state.update(
            Message::PreviewLoaded {
                path: first.path,
                byte_len: 10,
            },
            now,
        );
        assert!(state.preview.is_none());
        assert_eq!(state.selected_file.unwrap().name, "second.csv");
    }

    #[test]
    fn failed_preview_keeps_selection() {
        let now = Instant::now();
        let mut state = UploadState::default();
        let chosen = file("listings.csv");
        state.update(Message::FileChosen(chosen.clone()), now);
        state.update(Message::PreviewFailed { path: chosen.path }, now);

        assert!(state.selected_file.is_some());
        assert!(state.preview.is_none());
    }

    #[test]
    fn dismissing_status_is_idempotent() {
        let now = Instant::now();
        let mut state = UploadState::default();
        assert_eq!(state.update(Message::DismissStatus, now), None);

        state.update(Message::SubmitUpload, now);
        assert!(state.status.is_some());
        state.update(Message::DismissStatus, now);
        state.update(Message::DismissStatus, now);
        assert!(state.status.is_none());
    }

    #[test]
    fn status_expires_after_five_seconds() {
        let now = Instant::now();
        let mut state = UploadState::default();
        state.update(Message::SubmitUpload, now);

        state.expire_status(now + Duration::from_millis(4999));
        assert!(state.status.is_some());
        state.expire_status(now + STATUS_MESSAGE_TTL);
        assert!(state.status.is_none());
    }

    #[test]
    fn newer_status_supersedes_older_deadline() {
        let now = Instant::now();
        let mut state = UploadState::default();
        state.update(Message::SubmitUpload, now);
        let later = now + Duration::from_secs(3);
        state.update(Message::SubmitTestParse, later);

        state.expire_status(now + STATUS_MESSAGE_TTL);
        assert_eq!(
            state.status.as_ref().map(|s| s.text.as_str()),
            Some("Please select a file to test.")
        );
    }

    #[test]
    fn upload_without_file_issues_no_request() {
        let now = Instant::now();
        let mut state = UploadState::default();

        assert_eq!(state.update(Message::SubmitUpload, now), None);
        assert!(!state.is_uploading);
        assert_eq!(
            state.status,
            Some(StatusMessage::new(
                "Please select a file to upload.",
                Severity::Error,
                now
            ))
        );
    }

    #[test]
    fn only_one_upload_in_flight() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);

        assert_matches!(state.update(Message::SubmitUpload, now), Some(Command::Upload(_)));
        assert!(!state.can_upload());
        assert!(!state.can_test_parse());
        assert_eq!(state.update(Message::SubmitUpload, now), None);
    }

    #[test]
    fn progress_steps_by_ten_and_caps_at_ninety() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);
        state.update(Message::SubmitUpload, now);

        state.update(Message::ProgressTick, now);
        assert_eq!(state.progress, 10);
        for _ in 0..20 {
            state.update(Message::ProgressTick, now);
        }
        assert_eq!(state.progress, 90);

        state.update(Message::UploadResponded, now);
        assert_eq!(state.progress, 100);

        state.update(
            Message::UploadFinished(Err(server_error("Upload failed"))),
            now,
        );
        assert_eq!(state.progress, 0);
        assert!(!state.is_uploading);
    }

    #[test]
    fn ticks_outside_an_upload_are_ignored() {
        let now = Instant::now();
        let mut state = UploadState::default();
        state.update(Message::ProgressTick, now);
        state.update(Message::UploadResponded, now);
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn clean_upload_clears_selection_and_refetches_once() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);
        state.update(Message::SubmitUpload, now);

        let command = state.update(
            Message::UploadFinished(Ok(BulkUploadResult {
                uploaded_count: 42,
                errors: vec![],
            })),
            now,
        );

        assert_eq!(command, Some(Command::FetchHistory));
        assert_eq!(state.history_requests, 1);
        assert!(state.selected_file.is_none());
        assert!(state.preview.is_none());
        assert!(state.current_alert().is_none());
        assert_eq!(
            state.status,
            Some(StatusMessage::new(
                "Successfully uploaded 42 listings! ",
                Severity::Success,
                now
            ))
        );
    }

    #[test]
    fn partial_upload_reports_count_and_opens_alert() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);
        state.update(Message::SubmitUpload, now);

        let errors = (1..=7)
            .map(|row| RowError {
                row: json!(row),
                sheet: None,
                error: "Missing EMAIL".to_string(),
            })
            .collect();
        state.update(
            Message::UploadFinished(Ok(BulkUploadResult {
                uploaded_count: 3,
                errors,
            })),
            now,
        );

        let status = state.status.as_ref().unwrap();
        assert_eq!(status.severity, Severity::Success);
        assert!(status.text.contains("7 entries had errors."));
        let alert = state.current_alert().unwrap();
        assert!(alert.body.contains("... and 2 more errors"));
    }

    #[test]
    fn failed_upload_keeps_selection_for_retry() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);
        state.update(Message::SubmitUpload, now);

        let command = state.update(
            Message::UploadFinished(Err(server_error("Missing required columns"))),
            now,
        );

        assert_eq!(command, None);
        assert!(state.selected_file.is_some());
        assert!(state.preview.is_some());
        assert_eq!(
            state.status,
            Some(StatusMessage::new(
                "Upload failed: Missing required columns",
                Severity::Error,
                now
            ))
        );
    }

    #[test]
    fn test_parse_requires_file() {
        let now = Instant::now();
        let mut state = UploadState::default();
        assert_eq!(state.update(Message::SubmitTestParse, now), None);
        assert_eq!(
            state.status.as_ref().map(|s| s.text.as_str()),
            Some("Please select a file to test.")
        );
    }

    #[test]
    fn test_parse_result_opens_alert_without_touching_selection() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);
        state.history = vec![entry("old.csv")];

        assert_matches!(
            state.update(Message::SubmitTestParse, now),
            Some(Command::TestParse(_))
        );
        assert!(!state.can_test_parse());

        let parsed: TestParseResult = serde_json::from_value(json!({
            "fileName": "listings.csv",
            "fileExtension": ".csv",
            "totalRows": 1,
            "headers": ["COMPANY", "EMAIL"],
            "firstRow": {"COMPANY": "Acme", "EMAIL": "a@b.com"}
        }))
        .unwrap();
        state.update(Message::TestParseFinished(Ok(parsed)), now);

        let alert = state.current_alert().unwrap();
        assert!(alert.body.contains("Headers: COMPANY, EMAIL"));
        assert!(alert.body.contains("\"COMPANY\": \"Acme\""));
        assert!(alert.body.contains("\"EMAIL\": \"a@b.com\""));
        assert!(state.selected_file.is_some());
        assert!(state.preview.is_some());
        assert_eq!(state.history.len(), 1);
        assert!(!state.is_parsing);

        state.update(Message::DismissAlert, now);
        assert!(state.current_alert().is_none());
    }

    #[test]
    fn test_parse_failure_reports_server_error() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);
        state.update(Message::SubmitTestParse, now);
        state.update(
            Message::TestParseFinished(Err(server_error("No data rows"))),
            now,
        );
        assert_eq!(
            state.status.as_ref().map(|s| s.text.as_str()),
            Some("Test parse failed: No data rows")
        );
    }

    #[test]
    fn overlapping_results_queue_their_alerts() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);
        state.update(Message::SubmitTestParse, now);
        state.update(Message::SubmitUpload, now);

        let parsed: TestParseResult = serde_json::from_value(json!({
            "fileName": "listings.csv",
            "fileExtension": ".csv",
            "totalRows": 2,
            "headers": ["COMPANY"],
            "firstRow": {"COMPANY": "Acme"}
        }))
        .unwrap();
        state.update(Message::TestParseFinished(Ok(parsed)), now);
        state.update(
            Message::UploadFinished(Ok(BulkUploadResult {
                uploaded_count: 1,
                errors: vec![RowError {
                    row: json!(2),
                    sheet: None,
                    error: "Missing EMAIL".to_string(),
                }],
            })),
            now,
        );

        assert_eq!(state.current_alert().unwrap().title, "Test Parse Result");
        state.update(Message::DismissAlert, now);
        let next = state.current_alert().unwrap();
        assert_eq!(next.title, "Upload Errors");
        assert!(next.body.contains("Row 2: Missing EMAIL"));
        state.update(Message::DismissAlert, now);
        assert!(state.current_alert().is_none());
        assert!(!state.modal_open());
    }

    #[test]
    fn selection_is_ignored_while_a_dialog_is_open() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);

        state.update(Message::RequestDeleteAll, now);
        assert_eq!(state.update(Message::FileChosen(file("other.csv")), now), None);
        assert_eq!(state.selected_file.as_ref().unwrap().name, "listings.csv");
        state.update(Message::CancelDeleteAll, now);

        state.alerts.push_back(Alert {
            title: "Test Parse Result".to_string(),
            body: String::new(),
        });
        assert_eq!(state.update(Message::FileChosen(file("other.csv")), now), None);
        assert_eq!(state.selected_file.as_ref().unwrap().name, "listings.csv");
        assert!(state.preview.is_some());

        state.update(Message::DismissAlert, now);
        assert_matches!(
            state.update(Message::FileChosen(file("other.csv")), now),
            Some(Command::LoadPreview(_))
        );
    }

    #[test]
    fn failed_history_fetch_keeps_previous_list() {
        let now = Instant::now();
        let mut state = UploadState::default();
        state.update(Message::RefreshHistory, now);
        state.update(Message::HistoryLoaded(Ok(vec![entry("a.csv")])), now);
        assert!(!state.is_loading_history());

        state.update(Message::RefreshHistory, now);
        state.update(Message::HistoryLoaded(Err(server_error("nope"))), now);

        assert_eq!(state.history.len(), 1);
        assert!(state.status.is_none());
    }

    #[test]
    fn last_history_response_wins() {
        let now = Instant::now();
        let mut state = UploadState::default();
        state.update(Message::RefreshHistory, now);
        state.update(Message::RefreshHistory, now);
        state.update(Message::HistoryLoaded(Ok(vec![entry("a.csv"), entry("b.csv")])), now);
        assert!(state.is_loading_history());
        state.update(Message::HistoryLoaded(Ok(vec![entry("c.csv")])), now);

        assert!(!state.is_loading_history());
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].original_name, "c.csv");
    }

    #[test]
    fn declined_delete_all_changes_nothing() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);
        state.history = vec![entry("a.csv")];

        assert_eq!(state.update(Message::RequestDeleteAll, now), None);
        assert!(state.confirm_delete_all);
        assert_eq!(state.update(Message::CancelDeleteAll, now), None);

        assert!(!state.confirm_delete_all);
        assert_eq!(state.history.len(), 1);
        assert!(state.selected_file.is_some());
        assert!(state.status.is_none());
    }

    #[test]
    fn confirm_without_prompt_is_ignored() {
        let now = Instant::now();
        let mut state = UploadState::default();
        assert_eq!(state.update(Message::ConfirmDeleteAll, now), None);
    }

    #[test]
    fn confirmed_delete_all_clears_everything() {
        let now = Instant::now();
        let mut state = UploadState::default();
        selected(&mut state, "listings.csv", now);
        state.history = vec![entry("a.csv"), entry("b.csv")];

        state.update(Message::RequestDeleteAll, now);
        assert_eq!(
            state.update(Message::ConfirmDeleteAll, now),
            Some(Command::ClearAll)
        );

        let cleared: ClearAllResult =
            serde_json::from_value(json!({"deletedCount": 57})).unwrap();
        let command = state.update(Message::DeleteAllFinished(Ok(cleared)), now);

        assert_eq!(command, None);
        assert!(state.history.is_empty());
        assert!(state.selected_file.is_none());
        assert!(state.preview.is_none());
        assert_eq!(
            state.status.as_ref().map(|s| s.text.as_str()),
            Some("Successfully deleted 57 listings and upload history")
        );
    }

    #[test]
    fn failed_delete_all_leaves_state_intact() {
        let now = Instant::now();
        let mut state = UploadState::default();
        state.history = vec![entry("a.csv")];
        state.update(Message::RequestDeleteAll, now);
        state.update(Message::ConfirmDeleteAll, now);

        state.update(Message::DeleteAllFinished(Err(server_error("denied"))), now);

        assert_eq!(state.history.len(), 1);
        assert_eq!(
            state.status,
            Some(StatusMessage::new("Failed to delete data", Severity::Error, now))
        );
    }

    #[test]
    fn session_import_refetches_history() {
        let now = Instant::now();
        let mut state = UploadState::default();
        let command = state.update(
            Message::SessionImported {
                base_url: "https://admin.example.com".to_string(),
            },
            now,
        );
        assert_eq!(command, Some(Command::FetchHistory));
        assert_eq!(
            state.status.as_ref().map(|s| s.severity),
            Some(Severity::Success)
        );
    }
}
