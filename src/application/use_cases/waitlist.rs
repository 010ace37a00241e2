use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::application::email_templates::waitlist_confirmation_email;
use crate::application::validators::is_valid_email;
use crate::domain::entities::waitlist_entry::WaitlistEntry;

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;
    /// Inserts a new entry. Fails with [`AppError::DuplicateEmail`] when the
    /// unique constraint rejects the email.
    async fn insert(&self, email: &str) -> AppResult<WaitlistEntry>;
    async fn count(&self) -> AppResult<i64>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

/// Outcome of a signup attempt that passed validation. Both variants are
/// expected results, not errors: the caller renders them differently.
#[derive(Debug, Clone)]
pub enum SignupOutcome {
    Created(WaitlistEntry),
    AlreadyOnList,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    email: Arc<dyn EmailSender>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, email: Arc<dyn EmailSender>) -> Self {
        Self { repo, email }
    }

    /// Validate the address, then check-and-insert. A confirmation mail is
    /// sent after the insert commits; the signup is durable at that point,
    /// so a failed send is logged and does not fail the operation.
    #[instrument(skip(self))]
    pub async fn subscribe(&self, email: &str) -> AppResult<SignupOutcome> {
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Invalid email format".into()));
        }

        if self.repo.find_by_email(email).await?.is_some() {
            return Ok(SignupOutcome::AlreadyOnList);
        }

        let entry = match self.repo.insert(email).await {
            Ok(entry) => entry,
            // Lost the race between lookup and insert; the unique
            // constraint is the authority on duplicates
            Err(AppError::DuplicateEmail) => return Ok(SignupOutcome::AlreadyOnList),
            Err(err) => return Err(err),
        };

        let (subject, html) = waitlist_confirmation_email();
        if let Err(err) = self.email.send(email, &subject, &html).await {
            tracing::error!(error = ?err, email, "Confirmation email send failed");
        }

        Ok(SignupOutcome::Created(entry))
    }

    /// Total number of waitlist entries.
    #[instrument(skip(self))]
    pub async fn count(&self) -> AppResult<i64> {
        self.repo
            .count()
            .await
            .map_err(|err| AppError::CountUnavailable(err.to_string()))
    }
}
