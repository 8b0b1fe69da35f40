//! Admin desktop tool for bulk-uploading directory listings to the
//! directory backend: file selection with preview, dry-run parsing,
//! upload with progress, upload history and delete-all.

pub mod app;
pub mod config;
pub mod error;
pub mod upload;
pub mod utils;
