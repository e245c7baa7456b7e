//! Service seams injected by the hosting deployment.

use std::sync::Arc;

use botdesk_ai::DataSourceService;
use botdesk_dashboards::DashboardService;
use botdesk_email::EmailSender;
use botdesk_files::FileService;
use botdesk_users::UserService;

/// Trait-object handles for the business services behind the API.
///
/// The scaffold ships no implementations; the hosting deployment fills these
/// in before serving traffic. Handlers answer 501 for seams that stay
/// unwired.
#[derive(Clone, Default)]
pub struct AppServices {
    pub dashboards: Option<Arc<dyn DashboardService>>,
    pub users: Option<Arc<dyn UserService>>,
    pub files: Option<Arc<dyn FileService>>,
    pub email: Option<Arc<dyn EmailSender>>,
    pub data_sources: Option<Arc<dyn DataSourceService>>,
}

impl AppServices {
    /// All seams empty; every business endpoint answers 501.
    pub fn unwired() -> Self {
        Self::default()
    }
}
