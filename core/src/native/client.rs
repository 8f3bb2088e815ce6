//! reqwest webhook client.

use reqwest::multipart::{Form, Part};

use crate::attachment::StagedFile;
use crate::config::Settings;
use crate::error::{ClientError, ClientResult};
use crate::native::files::LocalFile;
use crate::webhook::{file_field, Outcome, WebhookRequest};

/// Posts submissions to the menu webhook.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.webhook_url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one submission. Never fails: every error becomes a failure [`Outcome`].
    pub async fn submit<'f, I>(&self, request: &WebhookRequest, files: I) -> Outcome
    where
        I: IntoIterator<Item = &'f LocalFile>,
    {
        let files: Vec<&LocalFile> = files.into_iter().collect();

        match self.try_submit(request, &files).await {
            Ok(outcome) => outcome,
            Err(ClientError::Http(e)) if e.is_connect() || e.is_timeout() => {
                log::error!("Webhook connection failed: {}", e);
                Outcome::unreachable(None)
            }
            Err(ClientError::Http(e)) => Outcome::unreachable(Some(e.to_string().as_str())),
            Err(e @ ClientError::Io { .. }) => {
                log::error!("{}", e);
                Outcome::Failure { message: e.to_string() }
            }
        }
    }

    async fn try_submit(&self, request: &WebhookRequest, files: &[&LocalFile]) -> ClientResult<Outcome> {
        let form = build_form(request, files).await?;

        let response = self.http.post(&self.url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        log::debug!("Webhook answered {} ({} bytes)", status, body.len());
        Ok(Outcome::from_response(status, &body))
    }
}

/// Multipart body: text fields first, then `file_<n>` in staging order.
pub async fn build_form(request: &WebhookRequest, files: &[&LocalFile]) -> ClientResult<Form> {
    let mut form = Form::new();
    for (name, value) in request.text_fields() {
        form = form.text(name, value.to_string());
    }

    for (index, file) in files.iter().enumerate() {
        let bytes = tokio::fs::read(file.path()).await.map_err(|source| ClientError::Io {
            path: file.path().display().to_string(),
            source,
        })?;
        let part = Part::bytes(bytes)
            .file_name(file.name())
            .mime_str(&file.media_type())?;
        form = form.part(file_field(index), part);
    }

    Ok(form)
}
