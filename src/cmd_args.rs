//! Command-line interface definition
//!
//! One subcommand per backoffice operation. Resource kinds and category
//! icons parse through their closed enums, so an unknown identifier is a
//! CLI error rather than a silent no-op downstream.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser, Subcommand};

use crate::kind::ResourceKind;
use crate::models::icon::CategoryIcon;

#[derive(Parser, Debug)]
#[command(name = "backline", version, about = "Admin console client for the events platform")]
pub struct Cli {
    /// API base URL override (defaults to BACKLINE_API_URL or localhost)
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the current session
    Whoami,
    /// List a resource with optional search and pagination
    List {
        #[arg(value_parser = ResourceKind::from_str)]
        kind: ResourceKind,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Fetch one record by id (banners, blogs, categories, FAQs)
    Get {
        #[arg(value_parser = ResourceKind::from_str)]
        kind: ResourceKind,
        id: String,
    },
    /// Delete one record by id
    Delete {
        #[arg(value_parser = ResourceKind::from_str)]
        kind: ResourceKind,
        id: String,
    },
    /// List event id/title options for banner wiring
    EventOptions,
    /// Create a record
    #[command(subcommand)]
    Create(CreateCommand),
    /// Update a record
    #[command(subcommand)]
    Update(UpdateCommand),
}

#[derive(Subcommand, Debug)]
pub enum CreateCommand {
    Banner {
        #[arg(long)]
        title: String,
        /// Owning event id
        #[arg(long)]
        event: String,
        /// Path to the banner image
        #[arg(long)]
        image: PathBuf,
        #[arg(long, action = ArgAction::Set, default_value_t = false)]
        featured: bool,
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        active: bool,
    },
    Blog {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        image: PathBuf,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        active: bool,
    },
    Category {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = CategoryIcon::from_str)]
        icon: CategoryIcon,
        #[arg(long)]
        subcategory: Option<String>,
        #[arg(long, action = ArgAction::Set, default_value_t = false)]
        featured: bool,
    },
    Faq {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
    },
    EventType {
        #[arg(long)]
        name: String,
    },
    User {
        #[arg(long)]
        fullname: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum UpdateCommand {
    Banner {
        id: String,
        #[arg(long)]
        title: String,
        /// Replacement image; omit to keep the stored one
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long, action = ArgAction::Set, default_value_t = false)]
        featured: bool,
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        active: bool,
    },
    Blog {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        active: bool,
    },
    Category {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = CategoryIcon::from_str)]
        icon: CategoryIcon,
        #[arg(long)]
        subcategory: Option<String>,
        #[arg(long, action = ArgAction::Set, default_value_t = false)]
        featured: bool,
    },
    Faq {
        id: String,
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
    },
    EventType {
        id: String,
        #[arg(long)]
        name: String,
    },
    User {
        id: String,
        #[arg(long)]
        fullname: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: String,
    },
}
