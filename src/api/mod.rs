//! # API Gateway Layer
//!
//! The single chokepoint for every outbound request: auth header
//! attachment, body encoding, and success/error classification live here.
//! Repositories build requests; nothing else in the crate talks HTTP.

pub mod client;
pub mod error;
pub mod urls;

pub use client::{ApiClient, ApiRequest, Method, MultipartField, RequestBody};
pub use error::{ApiError, ApiResult};
pub use urls::{ApiUrls, ListParams};
