//! Event-type repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::{ApiClient, ApiRequest, Method};
use crate::api::error::ApiResult;
use crate::api::urls::{ApiUrls, ListParams};
use crate::controller::list::{ListFetcher, ListQuery};
use crate::models::drafts::EventTypeDraft;
use crate::models::records::{Ack, EventType, ListPage};
use crate::session::store::SessionAccess;

#[derive(Clone)]
pub struct EventTypeRepo {
    api: ApiClient,
    urls: ApiUrls,
    session: Arc<dyn SessionAccess>,
}

impl EventTypeRepo {
    pub fn new(api: ApiClient, urls: ApiUrls, session: Arc<dyn SessionAccess>) -> Self {
        Self { api, urls, session }
    }

    pub async fn list(&self, params: &ListParams) -> ApiResult<ListPage<EventType>> {
        let url = params.apply(&self.urls.event_types())?;
        self.api
            .send(ApiRequest::new(Method::Get, url).bearer(self.session.token()))
            .await
    }

    pub async fn create(&self, draft: &EventTypeDraft) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Post, self.urls.event_type())
                    .bearer(self.session.token())
                    .json(serde_json::json!({ "name": draft.name.trim() })),
            )
            .await
    }

    pub async fn update(&self, id: &str, draft: &EventTypeDraft) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Put, self.urls.event_type_by_id(id))
                    .bearer(self.session.token())
                    .json(serde_json::json!({ "name": draft.name.trim() })),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Delete, self.urls.event_type_by_id(id))
                    .bearer(self.session.token()),
            )
            .await
    }
}

#[async_trait]
impl ListFetcher<EventType> for EventTypeRepo {
    async fn fetch(&self, query: &ListQuery) -> ApiResult<ListPage<EventType>> {
        self.list(&query.to_params()).await
    }
}
