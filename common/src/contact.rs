//! 問い合わせフォーム
//!
//! 入力検証と、メール中継サービスへの送信（1回のみ、再試行なし）

use crate::config::EmailJsConfig;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 通知メッセージを自動で消すまでの時間（ミリ秒）
pub const MESSAGE_DISMISS_MS: u32 = 5_000;

pub const SUCCESS_TEXT: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_TEXT: &str = "Failed to send message. Please try again.";

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
}

/// フォームの項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// フォーム上の name 属性（テンプレート変数名と同じ）
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "from_name",
            ContactField::Email => "from_email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

/// 項目ごとの検証エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(ContactField),
    InvalidFormat(ContactField),
}

impl FieldError {
    pub fn field(self) -> ContactField {
        match self {
            FieldError::Required(field) | FieldError::InvalidFormat(field) => field,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.label()),
            FieldError::InvalidFormat(field) => write!(f, "{} is invalid", field.label()),
        }
    }
}

/// 検証エラーの集合（項目順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.iter().copied().find(|e| e.field() == field)
    }

    pub fn fields(&self) -> Vec<ContactField> {
        self.0.iter().map(|e| e.field()).collect()
    }
}

/// フォーム入力値
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.from_name,
            ContactField::Email => &self.from_email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.from_name = value,
            ContactField::Email => self.from_email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// 入力を検証する
    ///
    /// 全項目必須（前後空白を除いて判定）。メールは `local@domain.tld` 形式。
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        for field in ContactField::ALL {
            let value = self.value(field);
            if value.trim().is_empty() {
                errors.push(FieldError::Required(field));
            } else if field == ContactField::Email && !EMAIL_PATTERN.is_match(value) {
                errors.push(FieldError::InvalidFormat(field));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// メール中継サービスへの送信内容
#[derive(Debug, Clone, Serialize)]
pub struct EmailPayload {
    pub service_id: String,
    pub template_id: String,
    /// 公開鍵
    pub user_id: String,
    pub template_params: ContactForm,
}

impl EmailPayload {
    pub fn new(config: &EmailJsConfig, form: &ContactForm) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: form.clone(),
        }
    }
}

/// 送信失敗（詳細なエラー内容は利用しない）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Submission failed: {0}")]
pub struct SubmissionError(pub String);

/// メール中継サービス
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, payload: &EmailPayload) -> Result<(), SubmissionError>;
}

/// 通知メッセージの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// フォーム下に一時表示するメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: &'static str,
}

/// 送信結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 検証エラー（送信していない）
    Invalid(ValidationErrors),
    Sent,
    Failed(SubmissionError),
}

impl SubmitOutcome {
    pub fn status_message(&self) -> Option<StatusMessage> {
        match self {
            SubmitOutcome::Invalid(_) => None,
            SubmitOutcome::Sent => Some(StatusMessage {
                kind: StatusKind::Success,
                text: SUCCESS_TEXT,
            }),
            SubmitOutcome::Failed(_) => Some(StatusMessage {
                kind: StatusKind::Error,
                text: FAILURE_TEXT,
            }),
        }
    }

    /// 成功時のみフォームをクリアする
    pub fn clears_form(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

/// 検証して送信する
///
/// 検証に通った場合のみ、ちょうど1回送信を試みる
pub async fn submit_contact<R>(relay: &R, config: &EmailJsConfig, form: &ContactForm) -> SubmitOutcome
where
    R: EmailRelay + ?Sized,
{
    if let Err(errors) = form.validate() {
        return SubmitOutcome::Invalid(errors);
    }

    let payload = EmailPayload::new(config, form);
    match relay.send(&payload).await {
        Ok(()) => SubmitOutcome::Sent,
        Err(e) => {
            tracing::error!(error = %e, "contact submission failed");
            SubmitOutcome::Failed(e)
        }
    }
}
