//! # Resource Repositories
//!
//! One repository per resource, translating typed drafts and list queries
//! into gateway requests. Repositories read the bearer token through the
//! injected [`SessionAccess`](crate::session::SessionAccess) capability and
//! return the closed [`ApiError`](crate::api::ApiError) kinds unchanged.
//!
//! Multipart encoding convention (shared by every attachment-bearing
//! resource): scalar fields travel as text, booleans stringified as
//! `"true"`/`"false"`, arrays as JSON-encoded text, files with their name
//! and mime type.

pub mod auth;
pub mod banners;
pub mod blogs;
pub mod categories;
pub mod event_types;
pub mod events;
pub mod faqs;
pub mod users;

pub use auth::AuthRepo;
pub use banners::BannerRepo;
pub use blogs::BlogRepo;
pub use categories::CategoryRepo;
pub use event_types::EventTypeRepo;
pub use events::EventRepo;
pub use faqs::FaqRepo;
pub use users::UserRepo;

use crate::api::client::{FilePart, MultipartField};
use crate::models::drafts::Attachment;

pub(crate) fn text(name: &str, value: impl Into<String>) -> MultipartField {
    MultipartField::Text(name.to_string(), value.into())
}

pub(crate) fn flag(name: &str, value: bool) -> MultipartField {
    let value = if value { "true" } else { "false" };
    MultipartField::Text(name.to_string(), value.to_string())
}

pub(crate) fn json_list(name: &str, items: &[String]) -> MultipartField {
    let encoded = serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string());
    MultipartField::Text(name.to_string(), encoded)
}

pub(crate) fn file(name: &str, attachment: &Attachment) -> MultipartField {
    MultipartField::File(
        name.to_string(),
        FilePart {
            file_name: attachment.file_name.clone(),
            mime: attachment.mime.clone(),
            bytes: attachment.bytes.clone(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_should_stringify_as_lowercase_true_false() {
        assert_eq!(
            flag("isActive", true),
            MultipartField::Text("isActive".to_string(), "true".to_string())
        );
        assert_eq!(
            flag("isFeatured", false),
            MultipartField::Text("isFeatured".to_string(), "false".to_string())
        );
    }

    #[test]
    fn array_fields_should_encode_as_json_text() {
        let field = json_list("tags", &["rock".to_string(), "live".to_string()]);
        assert_eq!(
            field,
            MultipartField::Text("tags".to_string(), r#"["rock","live"]"#.to_string())
        );
    }
}
