//! Blog repository
//!
//! Blog bodies are multipart like banners, with tag and category arrays
//! JSON-encoded into text fields.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::{ApiClient, ApiRequest, Method, MultipartField};
use crate::api::error::ApiResult;
use crate::api::urls::{ApiUrls, ListParams};
use crate::controller::list::{ListFetcher, ListQuery};
use crate::models::drafts::{BlogUpdate, NewBlog};
use crate::models::records::{Ack, Blog, ListPage};
use crate::repos::{file, flag, json_list, text};
use crate::session::store::SessionAccess;

#[derive(Clone)]
pub struct BlogRepo {
    api: ApiClient,
    urls: ApiUrls,
    session: Arc<dyn SessionAccess>,
}

impl BlogRepo {
    pub fn new(api: ApiClient, urls: ApiUrls, session: Arc<dyn SessionAccess>) -> Self {
        Self { api, urls, session }
    }

    pub async fn list(&self, params: &ListParams) -> ApiResult<ListPage<Blog>> {
        let url = params.apply(&self.urls.blogs())?;
        self.api
            .send(ApiRequest::new(Method::Get, url).bearer(self.session.token()))
            .await
    }

    pub async fn create(&self, draft: &NewBlog) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Post, self.urls.blog())
                    .bearer(self.session.token())
                    .multipart(create_fields(draft)),
            )
            .await
    }

    pub async fn update(&self, id: &str, draft: &BlogUpdate) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Put, self.urls.blog_by_id(id))
                    .bearer(self.session.token())
                    .multipart(update_fields(draft)),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Delete, self.urls.blog_by_id(id))
                    .bearer(self.session.token()),
            )
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<Blog> {
        self.api
            .send(
                ApiRequest::new(Method::Get, self.urls.blog_by_id(id))
                    .bearer(self.session.token()),
            )
            .await
    }
}

fn create_fields(draft: &NewBlog) -> Vec<MultipartField> {
    let mut fields = vec![
        text("title", draft.title.trim()),
        text("content", draft.content.as_str()),
    ];
    if let Some(image) = &draft.image {
        fields.push(file("image", image));
    }
    fields.push(json_list("tags", &draft.tags));
    fields.push(json_list("categories", &draft.categories));
    fields.push(flag("isActive", draft.is_active));
    fields
}

fn update_fields(draft: &BlogUpdate) -> Vec<MultipartField> {
    let mut fields = vec![
        text("title", draft.title.trim()),
        text("author", draft.author.trim()),
    ];
    if let Some(image) = &draft.image {
        fields.push(file("image", image));
    }
    fields.push(flag("isActive", draft.is_active));
    fields
}

#[async_trait]
impl ListFetcher<Blog> for BlogRepo {
    async fn fetch(&self, query: &ListQuery) -> ApiResult<ListPage<Blog>> {
        self.list(&query.to_params()).await
    }
}
