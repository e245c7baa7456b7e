use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use botdesk_core::{BotId, DataSourceId};

/// Kind of knowledge behind a data source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceKind {
    Website,
    Document,
    Faq,
}

impl DataSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSourceKind::Website => "website",
            DataSourceKind::Document => "document",
            DataSourceKind::Faq => "faq",
        }
    }
}

impl core::fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered knowledge source for one bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: DataSourceId,
    pub bot_id: BotId,
    pub kind: DataSourceKind,
    /// URL for websites, file reference for documents, collection name for FAQs.
    pub location: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterDataSourceRequest {
    pub bot_id: BotId,
    pub kind: DataSourceKind,
    pub location: String,
}
