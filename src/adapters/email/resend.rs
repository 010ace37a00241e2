use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::EmailSender,
};

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// [`EmailSender`] backed by the Resend HTTP API. Sends from the
/// configured `EMAIL_FROM` identity.
#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    api_key: SecretString,
    from: String,
}

impl ResendEmailSender {
    pub fn new(api_key: SecretString, from: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            from,
        }
    }
}

#[derive(Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        let body = SendEmailBody {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        self.client
            .post(RESEND_ENDPOINT)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(())
    }
}
