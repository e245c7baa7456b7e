//! Dashboard and KPI read models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use botdesk_core::BotId;

/// Headline numbers for a user's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_bots: u64,
    pub total_conversations: u64,
    pub total_messages: u64,
    pub active_data_sources: u64,
}

/// KPI report over a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiReport {
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub conversations: u64,
    /// Share of conversations the bot closed without human handover, 0.0–1.0.
    pub resolution_rate: f64,
    pub avg_response_seconds: f64,
}

/// Conversation count for one bot on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationVolume {
    pub bot_id: BotId,
    pub day: NaiveDate,
    pub conversations: u64,
}
