//! HTTP side of the records core.
//!
//! [`HttpRecordService`](http::HttpRecordService) implements the core
//! `RecordService` seam over the REST contract served by `cadastros-api`.

pub mod config;
pub mod error;
pub mod http;
pub mod lookup;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::HttpRecordService;
