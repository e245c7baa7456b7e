use async_trait::async_trait;

use botdesk_core::{BotId, DataSourceId, DomainResult, UserId};

use crate::dto::{DataSource, RegisterDataSourceRequest};

/// Management of a bot's knowledge sources, scoped to the owning user.
#[async_trait]
pub trait DataSourceService: Send + Sync {
    async fn register(
        &self,
        owner: UserId,
        request: RegisterDataSourceRequest,
    ) -> DomainResult<DataSource>;

    async fn list(&self, owner: UserId, bot_id: BotId) -> DomainResult<Vec<DataSource>>;

    async fn remove(&self, owner: UserId, data_source_id: DataSourceId) -> DomainResult<()>;
}
