//! FAQ repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::{ApiClient, ApiRequest, Method};
use crate::api::error::ApiResult;
use crate::api::urls::{ApiUrls, ListParams};
use crate::controller::list::{ListFetcher, ListQuery};
use crate::models::drafts::FaqDraft;
use crate::models::records::{Ack, Faq, ListPage};
use crate::session::store::SessionAccess;

#[derive(Clone)]
pub struct FaqRepo {
    api: ApiClient,
    urls: ApiUrls,
    session: Arc<dyn SessionAccess>,
}

impl FaqRepo {
    pub fn new(api: ApiClient, urls: ApiUrls, session: Arc<dyn SessionAccess>) -> Self {
        Self { api, urls, session }
    }

    pub async fn list(&self, params: &ListParams) -> ApiResult<ListPage<Faq>> {
        let url = params.apply(&self.urls.faqs())?;
        self.api
            .send(ApiRequest::new(Method::Get, url).bearer(self.session.token()))
            .await
    }

    pub async fn create(&self, draft: &FaqDraft) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Post, self.urls.faq())
                    .bearer(self.session.token())
                    .json(body(draft)),
            )
            .await
    }

    pub async fn update(&self, id: &str, draft: &FaqDraft) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Put, self.urls.faq_by_id(id))
                    .bearer(self.session.token())
                    .json(body(draft)),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Delete, self.urls.faq_by_id(id))
                    .bearer(self.session.token()),
            )
            .await
    }

    // Reads go through the plural base, unlike mutations.
    pub async fn get_by_id(&self, id: &str) -> ApiResult<Faq> {
        self.api
            .send(
                ApiRequest::new(Method::Get, self.urls.faqs_by_id(id))
                    .bearer(self.session.token()),
            )
            .await
    }
}

fn body(draft: &FaqDraft) -> serde_json::Value {
    serde_json::json!({
        "question": draft.question.trim(),
        "answer": draft.answer.trim(),
    })
}

#[async_trait]
impl ListFetcher<Faq> for FaqRepo {
    async fn fetch(&self, query: &ListQuery) -> ApiResult<ListPage<Faq>> {
        self.list(&query.to_params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_should_trim_both_fields() {
        let draft = FaqDraft {
            question: " How do I buy tickets? ".to_string(),
            answer: " Online. ".to_string(),
        };
        let value = body(&draft);
        assert_eq!(value["question"], "How do I buy tickets?");
        assert_eq!(value["answer"], "Online.");
    }
}
