//! User repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::{ApiClient, ApiRequest, Method};
use crate::api::error::ApiResult;
use crate::api::urls::{ApiUrls, ListParams};
use crate::controller::list::{ListFetcher, ListQuery};
use crate::models::drafts::UserDraft;
use crate::models::records::{Ack, ListPage, User};
use crate::session::store::SessionAccess;

#[derive(Clone)]
pub struct UserRepo {
    api: ApiClient,
    urls: ApiUrls,
    session: Arc<dyn SessionAccess>,
}

impl UserRepo {
    pub fn new(api: ApiClient, urls: ApiUrls, session: Arc<dyn SessionAccess>) -> Self {
        Self { api, urls, session }
    }

    pub async fn list(&self, params: &ListParams) -> ApiResult<ListPage<User>> {
        let url = params.apply(&self.urls.users())?;
        self.api
            .send(ApiRequest::new(Method::Get, url).bearer(self.session.token()))
            .await
    }

    pub async fn create(&self, draft: &UserDraft) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Post, self.urls.user())
                    .bearer(self.session.token())
                    .json(body(draft)),
            )
            .await
    }

    pub async fn update(&self, id: &str, draft: &UserDraft) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Put, self.urls.user_by_id(id))
                    .bearer(self.session.token())
                    .json(body(draft)),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Delete, self.urls.user_by_id(id))
                    .bearer(self.session.token()),
            )
            .await
    }
}

fn body(draft: &UserDraft) -> serde_json::Value {
    serde_json::json!({
        "fullname": draft.fullname.trim(),
        "email": draft.email.trim(),
        "role": draft.role.trim(),
    })
}

#[async_trait]
impl ListFetcher<User> for UserRepo {
    async fn fetch(&self, query: &ListQuery) -> ApiResult<ListPage<User>> {
        self.list(&query.to_params()).await
    }
}
