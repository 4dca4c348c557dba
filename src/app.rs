//! # Application Orchestrator
//!
//! Wires configuration, the session store, the gateway client, and the
//! repositories together, then executes one CLI command. List commands
//! drive a [`ListController`]; create/update commands drive a
//! [`MutationDialog`] whose refresh callback triggers the post-mutation
//! list resynchronization, exactly as the dashboard pages do.

use std::fs;
use std::future::Future;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use bytes::Bytes;

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::urls::ApiUrls;
use crate::cmd_args::{Command, CreateCommand, UpdateCommand};
use crate::config;
use crate::controller::dialog::{DialogOutcome, MutationDialog};
use crate::controller::list::{ListController, ListFetcher, ListPhase};
use crate::kind::ResourceKind;
use crate::models::drafts::{
    Attachment, BannerUpdate, BlogUpdate, CategoryDraft, Draft, EventTypeDraft, FaqDraft,
    NewBanner, NewBlog, UserDraft,
};
use crate::models::icon::CategoryIcon;
use crate::models::records::Ack;
use crate::repos::{
    AuthRepo, BannerRepo, BlogRepo, CategoryRepo, EventRepo, EventTypeRepo, FaqRepo, UserRepo,
};
use crate::session::gate::{self, GateDecision, LOGIN_PATH};
use crate::session::store::{AuthSession, FileSessionStore, SessionAccess};

/// The assembled application
pub struct App {
    api: ApiClient,
    urls: ApiUrls,
    store: Arc<FileSessionStore>,
}

impl App {
    pub fn new(base_url_override: Option<String>) -> Result<Self> {
        let base_url = base_url_override.unwrap_or_else(config::get_api_base_url);
        let api = ApiClient::new().context("failed to create API client")?;
        Ok(Self {
            api,
            urls: ApiUrls::new(base_url),
            store: Arc::new(FileSessionStore::open_default()),
        })
    }

    fn session(&self) -> Arc<dyn SessionAccess> {
        Arc::clone(&self.store) as Arc<dyn SessionAccess>
    }

    /// Apply the route-gate decision table to a resource command
    fn ensure_authorized(&self, kind: ResourceKind) -> Result<()> {
        self.ensure_path(&format!("/{}", kind.as_str()))
    }

    fn ensure_path(&self, path: &str) -> Result<()> {
        match gate::decide(path, self.store.token().is_some()) {
            GateDecision::RedirectToLogin => {
                bail!("not logged in; run `backline login` first")
            }
            GateDecision::Proceed | GateDecision::RedirectToHome => Ok(()),
        }
    }

    pub async fn run(self, command: Command) -> Result<()> {
        match command {
            Command::Login { email, password } => self.login(&email, &password).await,
            Command::Logout => {
                self.store.logout()?;
                println!("Logged out");
                Ok(())
            }
            Command::Whoami => {
                match self.store.current() {
                    Some(session) => {
                        println!("{} <{}> ({})", session.fullname, session.email, session.role)
                    }
                    None => println!("Not logged in"),
                }
                Ok(())
            }
            Command::List {
                kind,
                search,
                page,
                limit,
            } => {
                self.ensure_authorized(kind)?;
                self.show_list(kind, search, page, limit).await
            }
            Command::Get { kind, id } => {
                self.ensure_authorized(kind)?;
                self.get_record(kind, &id).await
            }
            Command::Delete { kind, id } => {
                self.ensure_authorized(kind)?;
                let ack = self.delete_record(kind, &id).await?;
                println!("{}", ack.message);
                // Counts come from the server, never local arithmetic.
                self.show_list(kind, None, None, 10).await
            }
            Command::EventOptions => {
                self.ensure_path("/events")?;
                let options = EventRepo::new(self.api.clone(), self.urls.clone(), self.session())
                    .options()
                    .await?;
                for option in options {
                    println!("{}  {}", option.id, option.title);
                }
                Ok(())
            }
            Command::Create(create) => self.run_create(create).await,
            Command::Update(update) => self.run_update(update).await,
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<()> {
        if gate::decide(LOGIN_PATH, self.store.token().is_some()) == GateDecision::RedirectToHome {
            if let Some(session) = self.store.current() {
                println!("Already logged in as {}", session.email);
                return Ok(());
            }
        }
        let response = AuthRepo::new(self.api.clone(), self.urls.clone())
            .login(email, password)
            .await?;
        println!("{}", response.message);
        self.store.login(&AuthSession::from(response))?;
        Ok(())
    }

    async fn show_list(
        &self,
        kind: ResourceKind,
        search: Option<String>,
        page: Option<u32>,
        limit: u32,
    ) -> Result<()> {
        let api = self.api.clone();
        let urls = self.urls.clone();
        let session = self.session();
        match kind {
            ResourceKind::Banner => {
                let repo = BannerRepo::new(api, urls, session);
                self.run_list(kind, Arc::new(repo), search, page, limit).await
            }
            ResourceKind::Blog => {
                let repo = BlogRepo::new(api, urls, session);
                self.run_list(kind, Arc::new(repo), search, page, limit).await
            }
            ResourceKind::Category => {
                let repo = CategoryRepo::new(api, urls, session);
                self.run_list(kind, Arc::new(repo), search, page, limit).await
            }
            ResourceKind::Faq => {
                let repo = FaqRepo::new(api, urls, session);
                self.run_list(kind, Arc::new(repo), search, page, limit).await
            }
            ResourceKind::EventType => {
                let repo = EventTypeRepo::new(api, urls, session);
                self.run_list(kind, Arc::new(repo), search, page, limit).await
            }
            ResourceKind::User => {
                let repo = UserRepo::new(api, urls, session);
                self.run_list(kind, Arc::new(repo), search, page, limit).await
            }
        }
    }

    /// Drive a list controller to its settled state and render the result
    async fn run_list<T>(
        &self,
        kind: ResourceKind,
        fetcher: Arc<dyn ListFetcher<T>>,
        search: Option<String>,
        page: Option<u32>,
        limit: u32,
    ) -> Result<()>
    where
        T: TableRecord + Send + 'static,
    {
        let mut ctl = ListController::new(fetcher, limit);

        match search {
            Some(text) => {
                ctl.set_search_text(text);
                ctl.flush_search();
            }
            None => ctl.refresh(),
        }
        if let Some(page) = page.filter(|p| *p > 1) {
            ctl.set_page(page);
        }

        // Every dispatch produces exactly one outcome; stale ones are
        // discarded until the latest lands.
        while !ctl.recv_applied().await {}

        if ctl.phase() == ListPhase::Error {
            let message = ctl
                .last_error()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "An error occurred".to_string());
            bail!("failed to fetch {}: {message}", kind.label().to_lowercase());
        }

        println!("{} ({} total)", kind.label(), ctl.total());
        print!("{}", render_table(ctl.items()));
        println!("{}", ctl.entries_line());
        if ctl.page_count() > 1 {
            let window = ctl
                .page_window()
                .iter()
                .map(|p| {
                    if *p == ctl.query().page {
                        format!("[{p}]")
                    } else {
                        p.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            println!("Pages: {window} of {}", ctl.page_count());
        }
        Ok(())
    }

    async fn get_record(&self, kind: ResourceKind, id: &str) -> Result<()> {
        let record = match kind {
            ResourceKind::Banner => {
                let banner = BannerRepo::new(self.api.clone(), self.urls.clone(), self.session())
                    .get_by_id(id)
                    .await?;
                serde_json::to_string_pretty(&banner)?
            }
            ResourceKind::Blog => {
                let blog = BlogRepo::new(self.api.clone(), self.urls.clone(), self.session())
                    .get_by_id(id)
                    .await?;
                serde_json::to_string_pretty(&blog)?
            }
            ResourceKind::Category => {
                let category =
                    CategoryRepo::new(self.api.clone(), self.urls.clone(), self.session())
                        .get_by_id(id)
                        .await?;
                serde_json::to_string_pretty(&category)?
            }
            ResourceKind::Faq => {
                let faq = FaqRepo::new(self.api.clone(), self.urls.clone(), self.session())
                    .get_by_id(id)
                    .await?;
                serde_json::to_string_pretty(&faq)?
            }
            other => bail!("get-by-id is not available for {other}"),
        };
        println!("{record}");
        Ok(())
    }

    async fn delete_record(&self, kind: ResourceKind, id: &str) -> Result<Ack> {
        let api = self.api.clone();
        let urls = self.urls.clone();
        let session = self.session();
        let ack = match kind {
            ResourceKind::Banner => BannerRepo::new(api, urls, session).delete(id).await?,
            ResourceKind::Blog => BlogRepo::new(api, urls, session).delete(id).await?,
            ResourceKind::Category => CategoryRepo::new(api, urls, session).delete(id).await?,
            ResourceKind::Faq => FaqRepo::new(api, urls, session).delete(id).await?,
            ResourceKind::EventType => EventTypeRepo::new(api, urls, session).delete(id).await?,
            ResourceKind::User => UserRepo::new(api, urls, session).delete(id).await?,
        };
        Ok(ack)
    }

    async fn run_create(&self, create: CreateCommand) -> Result<()> {
        match create {
            CreateCommand::Banner {
                title,
                event,
                image,
                featured,
                active,
            } => {
                self.ensure_authorized(ResourceKind::Banner)?;
                let draft = NewBanner {
                    title,
                    event_id: event,
                    image: Some(load_attachment(&image)?),
                    is_featured: featured,
                    is_active: active,
                };
                let repo = BannerRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::Banner, draft, |d| async move {
                    repo.create(&d).await
                })
                .await
            }
            CreateCommand::Blog {
                title,
                content,
                image,
                tags,
                categories,
                active,
            } => {
                self.ensure_authorized(ResourceKind::Blog)?;
                let draft = NewBlog {
                    title,
                    content,
                    image: Some(load_attachment(&image)?),
                    tags,
                    categories,
                    is_active: active,
                };
                let repo = BlogRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::Blog, draft, |d| async move {
                    repo.create(&d).await
                })
                .await
            }
            CreateCommand::Category {
                name,
                icon,
                subcategory,
                featured,
            } => {
                self.ensure_authorized(ResourceKind::Category)?;
                let draft = category_draft(name, icon, subcategory, featured);
                let repo = CategoryRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::Category, draft, |d| async move {
                    repo.create(&d).await
                })
                .await
            }
            CreateCommand::Faq { question, answer } => {
                self.ensure_authorized(ResourceKind::Faq)?;
                let draft = FaqDraft { question, answer };
                let repo = FaqRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::Faq, draft, |d| async move {
                    repo.create(&d).await
                })
                .await
            }
            CreateCommand::EventType { name } => {
                self.ensure_authorized(ResourceKind::EventType)?;
                let draft = EventTypeDraft { name };
                let repo = EventTypeRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::EventType, draft, |d| async move {
                    repo.create(&d).await
                })
                .await
            }
            CreateCommand::User {
                fullname,
                email,
                role,
            } => {
                self.ensure_authorized(ResourceKind::User)?;
                let draft = UserDraft {
                    fullname,
                    email,
                    role,
                };
                let repo = UserRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::User, draft, |d| async move {
                    repo.create(&d).await
                })
                .await
            }
        }
    }

    async fn run_update(&self, update: UpdateCommand) -> Result<()> {
        match update {
            UpdateCommand::Banner {
                id,
                title,
                image,
                featured,
                active,
            } => {
                self.ensure_authorized(ResourceKind::Banner)?;
                let draft = BannerUpdate {
                    title,
                    image: image.as_deref().map(load_attachment).transpose()?,
                    is_featured: featured,
                    is_active: active,
                };
                let repo = BannerRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::Banner, draft, |d| async move {
                    repo.update(&id, &d).await
                })
                .await
            }
            UpdateCommand::Blog {
                id,
                title,
                author,
                image,
                active,
            } => {
                self.ensure_authorized(ResourceKind::Blog)?;
                let draft = BlogUpdate {
                    title,
                    author,
                    image: image.as_deref().map(load_attachment).transpose()?,
                    is_active: active,
                };
                let repo = BlogRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::Blog, draft, |d| async move {
                    repo.update(&id, &d).await
                })
                .await
            }
            UpdateCommand::Category {
                id,
                name,
                icon,
                subcategory,
                featured,
            } => {
                self.ensure_authorized(ResourceKind::Category)?;
                let draft = category_draft(name, icon, subcategory, featured);
                let repo = CategoryRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::Category, draft, |d| async move {
                    repo.update(&id, &d).await
                })
                .await
            }
            UpdateCommand::Faq {
                id,
                question,
                answer,
            } => {
                self.ensure_authorized(ResourceKind::Faq)?;
                let draft = FaqDraft { question, answer };
                let repo = FaqRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::Faq, draft, |d| async move {
                    repo.update(&id, &d).await
                })
                .await
            }
            UpdateCommand::EventType { id, name } => {
                self.ensure_authorized(ResourceKind::EventType)?;
                let draft = EventTypeDraft { name };
                let repo = EventTypeRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::EventType, draft, |d| async move {
                    repo.update(&id, &d).await
                })
                .await
            }
            UpdateCommand::User {
                id,
                fullname,
                email,
                role,
            } => {
                self.ensure_authorized(ResourceKind::User)?;
                let draft = UserDraft {
                    fullname,
                    email,
                    role,
                };
                let repo = UserRepo::new(self.api.clone(), self.urls.clone(), self.session());
                self.submit(ResourceKind::User, draft, |d| async move {
                    repo.update(&id, &d).await
                })
                .await
            }
        }
    }

    /// Run a draft through a mutation dialog, then honor its refresh
    /// callback with a fresh list fetch
    async fn submit<D, F, Fut>(&self, kind: ResourceKind, draft: D, send: F) -> Result<()>
    where
        D: Draft,
        F: FnOnce(D) -> Fut,
        Fut: Future<Output = ApiResult<Ack>>,
    {
        let refresh_requested = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&refresh_requested);
        let mut dialog: MutationDialog<D> = MutationDialog::new().on_saved(move || {
            flag.store(true, Ordering::SeqCst);
        });
        dialog.open();
        *dialog.draft_mut() = draft;

        match dialog.submit(send).await {
            DialogOutcome::Saved(message) => {
                println!("{message}");
                if refresh_requested.load(Ordering::SeqCst) {
                    self.show_list(kind, None, None, 10).await?;
                }
                Ok(())
            }
            DialogOutcome::Invalid(message) | DialogOutcome::Failed(message) => bail!(message),
            DialogOutcome::Busy => bail!("a submit is already in flight"),
        }
    }
}

fn category_draft(
    name: String,
    icon: CategoryIcon,
    subcategory: Option<String>,
    featured: bool,
) -> CategoryDraft {
    CategoryDraft {
        name,
        icon: Some(icon),
        subcategory,
        is_featured: featured,
    }
}

fn load_attachment(path: &Path) -> Result<Attachment> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    Ok(Attachment::new(
        file_name,
        mime_for_path(path),
        Bytes::from(bytes),
    ))
}

fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Console table projection of a record
pub trait TableRecord {
    fn columns() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

fn render_table<T: TableRecord>(items: &[T]) -> String {
    let columns = T::columns();
    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    let rows: Vec<Vec<String>> = items.iter().map(|item| item.cells()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (i, column) in columns.iter().enumerate() {
        out.push_str(&format!("{:<width$}  ", column, width = widths[i]));
    }
    out.push('\n');
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
        }
        out.push('\n');
    }
    out
}

mod table_impls {
    use super::TableRecord;
    use crate::models::icon::CategoryIcon;
    use crate::models::records::{Banner, Blog, Category, EventType, Faq, User};
    use std::str::FromStr;

    fn yes_no(value: bool) -> String {
        if value { "yes" } else { "no" }.to_string()
    }

    impl TableRecord for Banner {
        fn columns() -> &'static [&'static str] {
            &["ID", "TITLE", "EVENT", "FEATURED", "ACTIVE"]
        }

        fn cells(&self) -> Vec<String> {
            vec![
                self.id.clone(),
                self.title.clone(),
                self.event.clone(),
                yes_no(self.is_featured),
                yes_no(self.is_active),
            ]
        }
    }

    impl TableRecord for Blog {
        fn columns() -> &'static [&'static str] {
            &["ID", "TITLE", "AUTHOR", "ACTIVE", "CREATED"]
        }

        fn cells(&self) -> Vec<String> {
            vec![
                self.id.clone(),
                self.title.clone(),
                self.author.clone(),
                self.is_active.clone(),
                self.created_at.clone(),
            ]
        }
    }

    impl TableRecord for Category {
        fn columns() -> &'static [&'static str] {
            &["ID", "ICON", "NAME", "FEATURED", "EVENTS", "BLOGS"]
        }

        fn cells(&self) -> Vec<String> {
            // An icon outside the known set renders as an explicit marker,
            // never as silent blank space.
            let icon = match CategoryIcon::from_str(&self.icon) {
                Ok(icon) => format!("{} {}", icon.glyph(), icon),
                Err(_) => format!("?! {}", self.icon),
            };
            vec![
                self.id.clone(),
                icon,
                self.name.clone(),
                yes_no(self.is_featured),
                self.total_events.to_string(),
                self.total_blogs.to_string(),
            ]
        }
    }

    impl TableRecord for Faq {
        fn columns() -> &'static [&'static str] {
            &["ID", "QUESTION", "ANSWER"]
        }

        fn cells(&self) -> Vec<String> {
            vec![self.id.clone(), self.question.clone(), self.answer.clone()]
        }
    }

    impl TableRecord for EventType {
        fn columns() -> &'static [&'static str] {
            &["ID", "NAME", "EVENTS"]
        }

        fn cells(&self) -> Vec<String> {
            vec![
                self.id.clone(),
                self.name.clone(),
                self.number_of_events.to_string(),
            ]
        }
    }

    impl TableRecord for User {
        fn columns() -> &'static [&'static str] {
            &["ID", "FULLNAME", "EMAIL", "ROLE", "ACTIVE", "LAST LOGIN"]
        }

        fn cells(&self) -> Vec<String> {
            vec![
                self.id.clone(),
                self.fullname.clone(),
                self.email.clone(),
                self.role.clone(),
                yes_no(self.is_active),
                self.last_login.clone(),
            ]
        }
    }
}
