use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    error::ApiErrorBody,
    protocol::{
        SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse, SEND_OTP_PATH,
        VERIFY_OTP_PATH,
    },
};
use tracing::{debug, warn};

use crate::error::AuthError;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

const SEND_OTP_FALLBACK: &str = "Failed to send OTP";
const VERIFY_OTP_FALLBACK: &str = "Failed to verify OTP and register";

/// The remote auth service. Calls are awaited to completion; nothing is
/// retried, deduplicated or cancelled here.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn send_otp(&self, email: &str) -> Result<SendOtpResponse, AuthError>;

    async fn verify_otp_and_register(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<VerifyOtpResponse, AuthError>;
}

#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: Client,
    api_base: String,
}

impl HttpAuthClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_base)
    }

    pub fn with_client(http: Client, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { http, api_base }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn post_json<B, R>(&self, path: &str, body: &B, fallback: &str) -> Result<R, AuthError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.api_base, path);
        let res = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                warn!(%url, error = %err, "auth api unreachable");
                AuthError::Transport {
                    detail: err.to_string(),
                }
            })?;

        let status = res.status();
        if !status.is_success() {
            // error bodies without JSON still get the fallback text
            let body = res.json::<ApiErrorBody>().await.unwrap_or_default();
            let message = body.message_or(fallback);
            warn!(%url, status = status.as_u16(), %message, "auth api rejected request");
            return Err(AuthError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(%url, status = status.as_u16(), "auth api request succeeded");
        res.json::<R>()
            .await
            .map_err(|err| AuthError::MalformedResponse {
                detail: err.to_string(),
            })
    }
}

#[async_trait]
impl AuthApi for HttpAuthClient {
    async fn send_otp(&self, email: &str) -> Result<SendOtpResponse, AuthError> {
        self.post_json(
            SEND_OTP_PATH,
            &SendOtpRequest {
                email: email.to_string(),
            },
            SEND_OTP_FALLBACK,
        )
        .await
    }

    async fn verify_otp_and_register(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<VerifyOtpResponse, AuthError> {
        self.post_json(VERIFY_OTP_PATH, request, VERIFY_OTP_FALLBACK)
            .await
    }
}

#[cfg(test)]
#[path = "tests/auth_client_tests.rs"]
mod tests;
