//! # Controllers
//!
//! The reusable state machines behind every resource screen: the paginated,
//! searchable, server-synchronized list controller and the
//! mutation-and-refresh dialog. Both are headless; rendering and input are
//! the caller's concern.

pub mod dialog;
pub mod list;

pub use dialog::{DialogOutcome, MutationDialog};
pub use list::{ListController, ListFetcher, ListPhase, ListQuery};
