//! `botdesk-users` — user-management contract surface.
//!
//! DTO-returning service interface only; implementations live in the hosting
//! deployment. Consumers scope queries by the resolved `UserId` and role.

pub mod dto;
pub mod service;

pub use dto::{CreateUserRequest, UpdateRoleRequest, UserProfile};
pub use service::UserService;
