//! `botdesk-email` — notification email contract surface.
//!
//! Delivery mechanics (SMTP, provider APIs) are outside this repository; the
//! API layer only needs a typed seam that consumes the resolved email
//! address.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use botdesk_core::DomainResult;

/// One outbound notification email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: EmailMessage) -> DomainResult<()>;
}
