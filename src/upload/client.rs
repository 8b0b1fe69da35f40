use crate::error::ClientError;
use crate::upload::selection::SelectedFile;
use crate::upload::types::{
    ApiErrorBody, BulkUploadResult, ClearAllResult, TestParseResult, UploadHistoryEntry,
};
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;

pub const UPLOAD_HISTORY_PATH: &str = "/api/directory/upload-history";
pub const CLEAR_ALL_PATH: &str = "/api/directory/clear-all";
pub const BULK_UPLOAD_PATH: &str = "/api/directory/bulk-upload";
pub const TEST_PARSE_PATH: &str = "/api/directory/test-parse";

/// HTTP access to the directory admin endpoints.
///
/// Every request carries the session headers the client was built with, plus
/// any cookies the backend sets along the way.
#[derive(Clone, Debug)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: &str, headers: HeaderMap) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn upload_history(&self) -> Result<Vec<UploadHistoryEntry>, ClientError> {
        let response = self.http.get(self.endpoint(UPLOAD_HISTORY_PATH)).send().await?;
        decode(response, "Failed to fetch upload history").await
    }

    pub async fn clear_all(&self) -> Result<ClearAllResult, ClientError> {
        let response = self.http.delete(self.endpoint(CLEAR_ALL_PATH)).send().await?;
        decode(response, "Failed to delete data").await
    }

    pub async fn bulk_upload(&self, file: &SelectedFile) -> Result<BulkUploadResult, ClientError> {
        let form = file_form(file).await?;
        let response = self
            .http
            .post(self.endpoint(BULK_UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?;
        decode(response, "Upload failed").await
    }

    pub async fn test_parse(&self, file: &SelectedFile) -> Result<TestParseResult, ClientError> {
        let form = file_form(file).await?;
        let response = self
            .http
            .post(self.endpoint(TEST_PARSE_PATH))
            .multipart(form)
            .send()
            .await?;
        decode(response, "Test parse failed").await
    }
}

async fn file_form(file: &SelectedFile) -> Result<Form, ClientError> {
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|source| ClientError::Io {
            path: file.path.clone(),
            source,
        })?;

    let part = Part::bytes(bytes)
        .file_name(file.name.clone())
        .mime_str(&file.mime_type)?;

    Ok(Form::new().part("file", part))
}

async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|error| !error.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        tracing::error!(status = status.as_u16(), %message, "directory API request failed");
        return Err(ClientError::Server {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json::<T>().await?)
}
