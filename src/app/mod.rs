mod message;
mod state;
mod ui;

use crate::config::Config;
use crate::upload::{DirectoryClient, SelectedFile};
use crate::utils::curl_parser::CurlParser;
use anyhow::Result;
use eframe::{egui, App};
pub use message::{Command, Message};
pub use state::{
    Alert, Severity, StatusMessage, UploadState, PROGRESS_CAP, PROGRESS_DONE, PROGRESS_STEP,
    STATUS_MESSAGE_TTL,
};
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

pub const PROGRESS_TICK: Duration = Duration::from_millis(200);

/// Sends a [`Message::ProgressTick`] every [`PROGRESS_TICK`], starting one
/// period after the call, until aborted or the receiver is gone.
pub fn spawn_progress_ticker(
    sender: std_mpsc::Sender<Message>,
    on_tick: impl Fn() + Send + 'static,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PROGRESS_TICK);
        interval.tick().await;
        loop {
            interval.tick().await;
            if sender.send(Message::ProgressTick).is_err() {
                break;
            }
            on_tick();
        }
    })
}

pub struct DirectoryUploader {
    state: UploadState,
    client: DirectoryClient,
    session_text: String,
    runtime: Runtime,
    ctx: egui::Context,
    sender: std_mpsc::Sender<Message>,
    receiver: std_mpsc::Receiver<Message>,
}

impl DirectoryUploader {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Result<Self> {
        tracing::info!(api_base = %config.api_base, "initializing directory uploader");
        let client = DirectoryClient::new(&config.api_base, config.default_headers()?)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let (sender, receiver) = std_mpsc::channel();

        let mut app = Self {
            state: UploadState::default(),
            client,
            session_text: String::new(),
            runtime,
            ctx: cc.egui_ctx.clone(),
            sender,
            receiver,
        };
        app.dispatch(Message::Mounted);
        Ok(app)
    }

    pub fn dispatch(&mut self, msg: Message) {
        tracing::debug!(?msg, "dispatch");
        if let Some(command) = self.state.update(msg, Instant::now()) {
            self.run(command);
        }
    }

    pub fn choose_file(&mut self, path: PathBuf) {
        let file = SelectedFile::from_path(&path);
        self.dispatch(Message::FileChosen(file));
    }

    pub fn import_session(&mut self) {
        let mut parser = CurlParser::new();
        if let Err(e) = parser.parse(&self.session_text) {
            self.dispatch(Message::SessionImportFailed(e.to_string()));
            return;
        }

        let (Some(base_url), Some(headers)) = (parser.base_url, parser.headers) else {
            return;
        };

        match DirectoryClient::new(&base_url, headers) {
            Ok(client) => {
                self.client = client;
                self.session_text.clear();
                self.dispatch(Message::SessionImported { base_url });
            }
            Err(e) => self.dispatch(Message::SessionImportFailed(e.to_string())),
        }
    }

    fn run(&self, command: Command) {
        let client = self.client.clone();
        let sender = self.sender.clone();
        let ctx = self.ctx.clone();
        let post = move |msg: Message| {
            let _ = sender.send(msg);
            ctx.request_repaint();
        };

        match command {
            Command::LoadPreview(file) => {
                self.runtime.spawn(async move {
                    match tokio::fs::read(&file.path).await {
                        Ok(bytes) => post(Message::PreviewLoaded {
                            path: file.path,
                            byte_len: bytes.len() as u64,
                        }),
                        Err(e) => {
                            tracing::warn!(path = %file.path.display(), error = %e, "preview read failed");
                            post(Message::PreviewFailed { path: file.path });
                        }
                    }
                });
            }
            Command::FetchHistory => {
                self.runtime.spawn(async move {
                    let result = client.upload_history().await;
                    post(Message::HistoryLoaded(result));
                });
            }
            Command::TestParse(file) => {
                self.runtime.spawn(async move {
                    tracing::info!(name = %file.name, "test parse started");
                    let result = client.test_parse(&file).await;
                    post(Message::TestParseFinished(result));
                });
            }
            Command::Upload(file) => {
                let tick_sender = self.sender.clone();
                let tick_ctx = self.ctx.clone();
                self.runtime.spawn(async move {
                    tracing::info!(name = %file.name, size = file.size, "bulk upload started");
                    let ticker =
                        spawn_progress_ticker(tick_sender, move || tick_ctx.request_repaint());

                    let result = client.bulk_upload(&file).await;
                    ticker.abort();
                    post(Message::UploadResponded);
                    post(Message::UploadFinished(result));
                });
            }
            Command::ClearAll => {
                self.runtime.spawn(async move {
                    tracing::info!("deleting all directory listings");
                    let result = client.clear_all().await;
                    post(Message::DeleteAllFinished(result));
                });
            }
        }
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.receiver.try_recv() {
            self.dispatch(msg);
        }

        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.first().and_then(|f| f.path.clone()),
            )
        });
        let modal_open = self.state.modal_open();
        let hovering = hovering && !modal_open;
        if hovering != self.state.drag_hover {
            self.dispatch(Message::DragHover(hovering));
        }
        if let Some(path) = dropped.filter(|_| !modal_open) {
            self.dispatch(Message::DragHover(false));
            self.choose_file(path);
        }

        let now = Instant::now();
        self.state.expire_status(now);
        if let Some(deadline) = self.state.status_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

impl App for DirectoryUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn drain_ticks(receiver: &std_mpsc::Receiver<Message>) -> usize {
        receiver
            .try_iter()
            .filter(|msg| matches!(msg, Message::ProgressTick))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_fires_every_period_until_aborted() {
        let (sender, receiver) = std_mpsc::channel();
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = repaints.clone();
        let ticker = spawn_progress_ticker(sender, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(190)).await;
        assert_eq!(drain_ticks(&receiver), 0);

        tokio::time::sleep(Duration::from_millis(820)).await;
        assert_eq!(drain_ticks(&receiver), 5);
        assert_eq!(repaints.load(Ordering::SeqCst), 5);

        ticker.abort();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(drain_ticks(&receiver), 0);
        assert_eq!(repaints.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_stops_once_the_receiver_is_gone() {
        let (sender, receiver) = std_mpsc::channel();
        let ticker = spawn_progress_ticker(sender, || {});
        drop(receiver);

        tokio::time::sleep(PROGRESS_TICK * 2).await;
        assert!(ticker.is_finished());
    }
}
