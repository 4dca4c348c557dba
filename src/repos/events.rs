//! Event utilities
//!
//! The banner dialog needs an event selector; the backend exposes a bare
//! array of id/title pairs for it.

use std::sync::Arc;

use crate::api::client::{ApiClient, ApiRequest, Method};
use crate::api::error::ApiResult;
use crate::api::urls::ApiUrls;
use crate::models::records::EventOption;
use crate::session::store::SessionAccess;

#[derive(Clone)]
pub struct EventRepo {
    api: ApiClient,
    urls: ApiUrls,
    session: Arc<dyn SessionAccess>,
}

impl EventRepo {
    pub fn new(api: ApiClient, urls: ApiUrls, session: Arc<dyn SessionAccess>) -> Self {
        Self { api, urls, session }
    }

    /// Id/title pairs for populating event selectors
    pub async fn options(&self) -> ApiResult<Vec<EventOption>> {
        self.api
            .send(
                ApiRequest::new(Method::Get, self.urls.event_options())
                    .bearer(self.session.token()),
            )
            .await
    }
}
