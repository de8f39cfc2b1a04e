//! External collaborators: the upload and chat services.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use folio_core::transcript::ChatRequest;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service answered {status}: {body}")]
    Status { status: u16, body: String },
}

/// Accepts one file at a time. No retries: a failure is final for that
/// attempt.
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Send the file; on success returns the display name of the new source
    async fn upload(&self, path: &Path) -> Result<String, CollaboratorError>;
}

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Ask the assistant, returning its response text
    async fn chat(&self, request: &ChatRequest) -> Result<String, CollaboratorError>;
}

/// The collaborators a session talks to
#[derive(Clone)]
pub struct Services {
    pub upload: Arc<dyn UploadService>,
    pub chat: Arc<dyn ChatService>,
}

/// Name a source is displayed under: the file name of the uploaded path
pub fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Talks to the document backend over HTTP:
/// `POST upload` (multipart, field `file`) and `POST chat` (JSON).
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

impl HttpBackend {
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    pub fn services(self) -> Services {
        let backend = Arc::new(self);
        Services {
            upload: backend.clone(),
            chat: backend,
        }
    }

    fn endpoint(&self, name: &str) -> Result<Url, CollaboratorError> {
        Ok(self.base.join(name)?)
    }
}

async fn ensure_success(response: Response) -> Result<Response, CollaboratorError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(CollaboratorError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl UploadService for HttpBackend {
    async fn upload(&self, path: &Path) -> Result<String, CollaboratorError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CollaboratorError::Read {
                path: path.display().to_string(),
                source,
            })?;
        let file_name = file_display_name(path);

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.clone()));
        let response = self
            .client
            .post(self.endpoint("upload")?)
            .multipart(form)
            .send()
            .await?;
        ensure_success(response).await?;

        Ok(file_name)
    }
}

#[async_trait]
impl ChatService for HttpBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<String, CollaboratorError> {
        let response = self
            .client
            .post(self.endpoint("chat")?)
            .json(request)
            .send()
            .await?;
        let body: ChatResponse = ensure_success(response).await?.json().await?;
        Ok(body.response)
    }
}
