use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    /// Origin allowed to call the API from a browser (the waitlist form).
    pub cors_origin: HeaderValue,
    /// Resend API secret for outbound confirmation mail.
    pub resend_api_key: SecretString,
    /// Sender identity, e.g. `Clarity Team <hello@example.com>`.
    pub email_from: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let database_url: String = get_env("DATABASE_URL");
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let resend_api_key: SecretString =
            SecretString::new(get_env::<String>("RESEND_API_KEY").into());
        let email_from: String = get_env("EMAIL_FROM");

        Self {
            bind_addr,
            database_url,
            cors_origin,
            resend_api_key,
            email_from,
        }
    }
}
