//! Mutation drafts
//!
//! A draft is the transient, form-local copy of a record's editable fields
//! while a create/update dialog is open. It is owned exclusively by the
//! dialog, validated locally before any network call, and discarded on
//! close or successful submit.

use bytes::Bytes;

use crate::api::error::{ApiError, ApiResult};
use crate::models::icon::CategoryIcon;

/// Pending file upload held in memory until submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// A validatable, resettable dialog draft
pub trait Draft: Clone + Default + Send + 'static {
    /// Check required fields; text fields must be non-empty after trimming,
    /// attachments and selections must be present. Failures never reach the
    /// network.
    fn validate(&self) -> ApiResult<()>;
}

fn require_text(value: &str, message: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        Err(ApiError::Validation(message.to_string()))
    } else {
        Ok(())
    }
}

/// Draft for creating a banner; the image is mandatory here
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBanner {
    pub title: String,
    pub event_id: String,
    pub image: Option<Attachment>,
    pub is_featured: bool,
    pub is_active: bool,
}

impl Default for NewBanner {
    fn default() -> Self {
        Self {
            title: String::new(),
            event_id: String::new(),
            image: None,
            is_featured: false,
            is_active: true,
        }
    }
}

impl Draft for NewBanner {
    fn validate(&self) -> ApiResult<()> {
        require_text(&self.title, "Title is required")?;
        require_text(&self.event_id, "Event is required")?;
        if self.image.is_none() {
            return Err(ApiError::Validation("Image is required".to_string()));
        }
        Ok(())
    }
}

/// Draft for updating a banner; a missing image keeps the stored one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerUpdate {
    pub title: String,
    pub image: Option<Attachment>,
    pub is_featured: bool,
    pub is_active: bool,
}

impl Default for BannerUpdate {
    fn default() -> Self {
        Self {
            title: String::new(),
            image: None,
            is_featured: false,
            is_active: true,
        }
    }
}

impl Draft for BannerUpdate {
    fn validate(&self) -> ApiResult<()> {
        require_text(&self.title, "Title is required")
    }
}

/// Draft for creating a blog post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub image: Option<Attachment>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub is_active: bool,
}

impl Default for NewBlog {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            image: None,
            tags: Vec::new(),
            categories: Vec::new(),
            is_active: true,
        }
    }
}

impl Draft for NewBlog {
    fn validate(&self) -> ApiResult<()> {
        require_text(&self.title, "Title is required")?;
        require_text(&self.content, "Content is required")?;
        if self.image.is_none() {
            return Err(ApiError::Validation("Image is required".to_string()));
        }
        Ok(())
    }
}

/// Draft for updating a blog post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogUpdate {
    pub title: String,
    pub author: String,
    pub image: Option<Attachment>,
    pub is_active: bool,
}

impl Default for BlogUpdate {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            image: None,
            is_active: true,
        }
    }
}

impl Draft for BlogUpdate {
    fn validate(&self) -> ApiResult<()> {
        require_text(&self.title, "Title is required")?;
        require_text(&self.author, "Author is required")
    }
}

/// Draft shared by category create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub icon: Option<CategoryIcon>,
    pub subcategory: Option<String>,
    pub is_featured: bool,
}

impl Draft for CategoryDraft {
    fn validate(&self) -> ApiResult<()> {
        require_text(&self.name, "Name is required")?;
        if self.icon.is_none() {
            return Err(ApiError::Validation("Icon name is required".to_string()));
        }
        Ok(())
    }
}

/// Draft shared by FAQ create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
}

impl Draft for FaqDraft {
    fn validate(&self) -> ApiResult<()> {
        require_text(&self.question, "Question is required")?;
        require_text(&self.answer, "Answer is required")
    }
}

/// Draft shared by event-type create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTypeDraft {
    pub name: String,
}

impl Draft for EventTypeDraft {
    fn validate(&self) -> ApiResult<()> {
        require_text(&self.name, "Name is required")
    }
}

/// Draft shared by user create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub fullname: String,
    pub email: String,
    pub role: String,
}

impl Draft for UserDraft {
    fn validate(&self) -> ApiResult<()> {
        require_text(&self.fullname, "Fullname is required")?;
        require_text(&self.email, "Email is required")?;
        require_text(&self.role, "Role is required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment() -> Attachment {
        Attachment::new("banner.png", "image/png", Bytes::from_static(b"\x89PNG"))
    }

    #[test]
    fn new_banner_should_require_title_after_trimming() {
        let draft = NewBanner {
            title: "   ".to_string(),
            event_id: "e1".to_string(),
            image: Some(attachment()),
            ..NewBanner::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err, ApiError::Validation("Title is required".to_string()));
    }

    #[test]
    fn new_banner_should_require_an_image() {
        let draft = NewBanner {
            title: "Summer Fest".to_string(),
            event_id: "e1".to_string(),
            image: None,
            ..NewBanner::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err, ApiError::Validation("Image is required".to_string()));
    }

    #[test]
    fn banner_update_should_not_require_an_image() {
        let draft = BannerUpdate {
            title: "Summer Fest".to_string(),
            ..BannerUpdate::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn category_draft_should_require_an_icon_selection() {
        let draft = CategoryDraft {
            name: "Concerts".to_string(),
            ..CategoryDraft::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation("Icon name is required".to_string())
        );
    }

    #[test]
    fn faq_draft_should_require_both_fields() {
        let draft = FaqDraft {
            question: "How do I buy tickets?".to_string(),
            answer: String::new(),
        };
        assert!(draft.validate().is_err());

        let draft = FaqDraft {
            question: "How do I buy tickets?".to_string(),
            answer: "Online.".to_string(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn banner_defaults_should_start_active_and_unfeatured() {
        let draft = NewBanner::default();
        assert!(draft.is_active);
        assert!(!draft.is_featured);
    }
}
