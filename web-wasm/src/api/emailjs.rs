//! EmailJS連携
//!
//! 問い合わせフォームの内容をEmailJSのREST APIへ送信する（1回のみ）

use gloo::net::http::Request;
use portfolio_common::config::EmailJsConfig;
use portfolio_common::{EmailPayload, EmailRelay, SubmissionError};

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub struct EmailJsRelay<'a> {
    config: &'a EmailJsConfig,
}

impl<'a> EmailJsRelay<'a> {
    pub fn new(config: &'a EmailJsConfig) -> Self {
        Self { config }
    }
}

impl EmailRelay for EmailJsRelay<'_> {
    async fn send(&self, payload: &EmailPayload) -> Result<(), SubmissionError> {
        if !self.config.is_configured() {
            return Err(SubmissionError("email service is not configured".into()));
        }

        let resp = Request::post(EMAILJS_SEND_URL)
            .json(payload)
            .map_err(|e| SubmissionError(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError(e.to_string()))?;

        if !resp.ok() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(SubmissionError(format!(
                "EmailJS error: HTTP {} {}",
                resp.status(),
                detail
            )));
        }

        Ok(())
    }
}
