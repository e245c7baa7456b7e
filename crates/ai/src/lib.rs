//! `botdesk-ai` — AI data-source contract surface.
//!
//! Data sources are the knowledge a chatbot answers from (crawled sites,
//! uploaded documents, curated FAQs). This crate defines the DTOs and the
//! service interface only; ingestion pipelines live elsewhere.

pub mod dto;
pub mod service;

pub use dto::{DataSource, DataSourceKind, RegisterDataSourceRequest};
pub use service::DataSourceService;
