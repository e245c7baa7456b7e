//! `botdesk-dashboards` — dashboard & KPI contract surface.
//!
//! DTO-returning service interfaces only. Implementations are provided by
//! the hosting deployment; this crate carries no query logic.

pub mod dto;
pub mod service;

pub use dto::{ConversationVolume, DashboardSummary, KpiReport};
pub use service::DashboardService;
