//! # Backline - Admin Console Client for the Events Platform
//!
//! A command-line client for the events platform backoffice. It drives the
//! same REST API as the web dashboard: banners, blogs, categories, FAQs,
//! event types, and users.
//!
//! ## Architecture
//!
//! Every resource screen is the same machine wearing a different record type:
//!
//! ```text
//! ┌────────────┐   ListQuery    ┌──────────────┐   HTTP    ┌─────────┐
//! │    List    │───────────────▶│  Repository  │──────────▶│ Gateway │
//! │ Controller │◀───────────────│              │◀──────────│ Client  │
//! └────────────┘  ListPage<T>   └──────────────┘           └─────────┘
//!       ▲ refresh()
//!       │
//! ┌────────────┐
//! │  Mutation  │  validate draft, submit, then ask the list
//! │   Dialog   │  to resynchronize at its current query/page
//! └────────────┘
//! ```
//!
//! The list controller owns the query (search text, page, page size) and the
//! last good result. Search input is debounced, page changes fetch
//! immediately, and every dispatched fetch carries a sequence number so a
//! stale response can never overwrite a newer one. Mutations never touch the
//! list's counts; a successful write always triggers a full refetch.
//!
//! The server owns all real business logic. This client holds no
//! authoritative state beyond the persisted auth session.

pub mod api;
pub mod app;
pub mod cmd_args;
pub mod config;
pub mod controller;
pub mod kind;
pub mod models;
pub mod repos;
pub mod session;

pub use app::App;
