use async_trait::async_trait;
use chrono::{DateTime, Utc};

use botdesk_core::{BotId, DomainResult, UserId};

use crate::dto::{ConversationVolume, DashboardSummary, KpiReport};

/// Read-side dashboard queries, scoped to the requesting user.
#[async_trait]
pub trait DashboardService: Send + Sync {
    async fn summary(&self, user_id: UserId) -> DomainResult<DashboardSummary>;

    async fn kpis(
        &self,
        user_id: UserId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<KpiReport>;

    async fn conversation_volume(
        &self,
        user_id: UserId,
        bot_id: BotId,
    ) -> DomainResult<Vec<ConversationVolume>>;
}
