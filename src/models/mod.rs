//! # Data Models
//!
//! Wire records mirrored from the backend, plus the transient drafts that
//! mutation dialogs edit. The client holds no authoritative state; every
//! record here is a snapshot of what the server last said.

pub mod drafts;
pub mod icon;
pub mod records;

pub use drafts::{
    Attachment, BannerUpdate, BlogUpdate, CategoryDraft, Draft, EventTypeDraft, FaqDraft,
    NewBanner, NewBlog, UserDraft,
};
pub use icon::{CategoryIcon, UnknownIconError};
pub use records::{
    Ack, Banner, Blog, Category, EventOption, EventType, Faq, ListPage, LoginRequest,
    LoginResponse, User,
};
