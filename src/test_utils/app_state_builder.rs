//! Test app state builder for HTTP-level integration testing.
//!
//! Provides `TestAppStateBuilder`, which creates an `AppState` wired to
//! in-memory mocks so routes can be exercised without Postgres or Resend.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{EmailSender, WaitlistRepo, WaitlistUseCases},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::AppConfig,
    test_utils::{
        FailingEmailSender, FailingWaitlistRepo, InMemoryEmailSender, InMemoryWaitlistRepo,
    },
};

/// Builder for creating `AppState` backed by in-memory mocks.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo, email_sender) = TestAppStateBuilder::new()
///     .with_entry(create_test_entry(|e| e.email = "a@b.com".into()))
///     .build_with_waitlist_mocks();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Seed an existing waitlist entry.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Build app state with an in-memory repo and a capturing email sender.
    /// Returns both mocks for test assertions.
    pub fn build_with_waitlist_mocks(
        self,
    ) -> (AppState, Arc<InMemoryWaitlistRepo>, Arc<InMemoryEmailSender>) {
        let repo = Arc::new(InMemoryWaitlistRepo::with_entries(self.entries));
        let email_sender = Arc::new(InMemoryEmailSender::new());

        let app_state = build_app_state(repo.clone(), email_sender.clone());

        (app_state, repo, email_sender)
    }

    /// Build app state where storage is unavailable.
    pub fn build_with_failing_repo(self) -> AppState {
        build_app_state(
            Arc::new(FailingWaitlistRepo::new()),
            Arc::new(InMemoryEmailSender::new()),
        )
    }

    /// Build app state where every email send fails.
    pub fn build_with_failing_email_sender(self) -> AppState {
        build_app_state(
            Arc::new(InMemoryWaitlistRepo::with_entries(self.entries)),
            Arc::new(FailingEmailSender::new()),
        )
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_app_state(repo: Arc<dyn WaitlistRepo>, email: Arc<dyn EmailSender>) -> AppState {
    AppState {
        config: test_config(),
        waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo, email)),
    }
}

// Minimal config for testing
fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
        database_url: String::new(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        resend_api_key: SecretString::new("test_resend_key".into()),
        email_from: "Clarity Team <hello@clarity.test>".to_string(),
    })
}
