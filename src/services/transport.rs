use crate::error::{redact, ClientError};
use log::debug;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// One-shot POST against the repository.
///
/// `Ok(None)` means the body was not valid JSON; callers decide what that
/// means. Only connection-level failures are errors here.
pub trait HttpTransport {
    fn post_json(&self, url: &str, body: &str) -> Result<Option<serde_json::Value>, ClientError>;

    fn post_file(
        &self,
        url: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<serde_json::Value>, ClientError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn post_json(&self, url: &str, body: &str) -> Result<Option<serde_json::Value>, ClientError> {
        (**self).post_json(url, body)
    }

    fn post_file(
        &self,
        url: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<serde_json::Value>, ClientError> {
        (**self).post_file(url, file_name, bytes)
    }
}

pub struct BlockingTransport {
    client: reqwest::blocking::Client,
}

impl BlockingTransport {
    pub fn new(timeout_ms: u64) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

fn parse_body(text: &str) -> Option<serde_json::Value> {
    serde_json::from_str(text).ok()
}

impl HttpTransport for BlockingTransport {
    fn post_json(&self, url: &str, body: &str) -> Result<Option<serde_json::Value>, ClientError> {
        debug!("event=http_post url={} bytes={}", redact(url), body.len());
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()?;
        let status = resp.status();
        let text = resp.text()?;
        debug!("event=http_response status={} body={}", status.as_u16(), text);
        Ok(parse_body(&text))
    }

    fn post_file(
        &self,
        url: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<serde_json::Value>, ClientError> {
        debug!(
            "event=http_upload url={} file={} bytes={}",
            redact(url),
            file_name,
            bytes.len()
        );
        let part =
            reqwest::blocking::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::blocking::multipart::Form::new()
            .text("name", file_name.to_string())
            .part("file", part);
        let resp = self.client.post(url).multipart(form).send()?;
        let status = resp.status();
        let text = resp.text()?;
        debug!("event=http_response status={} body={}", status.as_u16(), text);
        Ok(parse_body(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_json_body_parses_to_none() {
        assert!(parse_body("<html>bad gateway</html>").is_none());
        assert!(parse_body("").is_none());
    }

    #[test]
    fn json_body_parses() {
        let v = parse_body(r#"{"status": 200}"#).expect("json");
        assert_eq!(v["status"], 200);
    }
}
