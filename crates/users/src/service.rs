use async_trait::async_trait;

use botdesk_core::{DomainResult, UserId};

use crate::dto::{CreateUserRequest, UpdateRoleRequest, UserProfile};

/// User-account administration.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get(&self, user_id: UserId) -> DomainResult<UserProfile>;

    async fn list(&self) -> DomainResult<Vec<UserProfile>>;

    async fn create(&self, request: CreateUserRequest) -> DomainResult<UserProfile>;

    async fn update_role(
        &self,
        user_id: UserId,
        request: UpdateRoleRequest,
    ) -> DomainResult<UserProfile>;
}
