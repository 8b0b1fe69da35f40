use crate::error::SessionImportError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE};
use std::str::FromStr;

const DIRECTORY_API_MARKER: &str = "/api/directory/";
const SKIPPED_HEADERS: [&str; 3] = ["content-type", "content-length", "host"];

/// Session pulled out of a browser "Copy as cURL" command.
#[derive(Clone, Debug, Default)]
pub struct CurlParser {
    pub base_url: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl CurlParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, curl_text: &str) -> Result<(), SessionImportError> {
        let url = Self::find_url(curl_text).ok_or(SessionImportError::MissingUrl)?;

        let base_url = url
            .find(DIRECTORY_API_MARKER)
            .map(|idx| url[..idx].trim_end_matches('/').to_string())
            .filter(|base| base.starts_with("http://") || base.starts_with("https://"))
            .ok_or(SessionImportError::NotDirectoryEndpoint)?;

        let mut headers = HeaderMap::new();
        let args = Self::quoted_arguments(curl_text);
        for (flag, value) in args {
            match flag.as_str() {
                "-H" | "--header" => {
                    let Some((key, value)) = value.split_once(':') else {
                        continue;
                    };
                    let key = key.trim().to_lowercase();
                    if SKIPPED_HEADERS.contains(&key.as_str()) {
                        continue;
                    }
                    if let (Ok(name), Ok(value)) =
                        (HeaderName::from_str(&key), HeaderValue::from_str(value.trim()))
                    {
                        headers.insert(name, value);
                    }
                }
                "-b" | "--cookie" => {
                    if let Ok(value) = HeaderValue::from_str(value.trim()) {
                        headers.insert(COOKIE, value);
                    }
                }
                _ => {}
            }
        }

        tracing::info!(%base_url, headers = headers.len(), "imported browser session");
        self.base_url = Some(base_url);
        self.headers = Some(headers);

        Ok(())
    }

    fn find_url(curl_text: &str) -> Option<String> {
        let start = curl_text.find("curl ")? + "curl ".len();
        let rest = curl_text[start..].trim_start();
        let (quote, body) = match rest.chars().next()? {
            q @ ('\'' | '"') => (Some(q), &rest[1..]),
            _ => (None, rest),
        };
        let end = match quote {
            Some(q) => body.find(q)?,
            None => body.find(char::is_whitespace).unwrap_or(body.len()),
        };
        let url = &body[..end];
        (!url.is_empty()).then(|| url.to_string())
    }

    /// `(flag, value)` pairs for every flag followed by a single- or double-quoted argument.
    fn quoted_arguments(curl_text: &str) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut rest = curl_text;

        while let Some(flag_start) = rest.find('-') {
            rest = &rest[flag_start..];
            let flag_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let flag = rest[..flag_end].to_string();
            let after = rest[flag_end..].trim_start();

            let quote = after.chars().next();
            if let Some(q @ ('\'' | '"')) = quote {
                if let Some(close) = after[1..].find(q) {
                    pairs.push((flag, after[1..1 + close].to_string()));
                    rest = &after[close + 2..];
                    continue;
                }
            }
            rest = &rest[flag_end.max(1)..];
        }

        pairs
    }
}
