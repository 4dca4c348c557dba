//! Category repository
//!
//! Categories carry no file attachment, so bodies are plain JSON. The icon
//! travels as its wire identifier from the closed
//! [`CategoryIcon`](crate::models::CategoryIcon) set.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::client::{ApiClient, ApiRequest, Method};
use crate::api::error::{ApiError, ApiResult};
use crate::api::urls::{ApiUrls, ListParams};
use crate::controller::list::{ListFetcher, ListQuery};
use crate::models::drafts::CategoryDraft;
use crate::models::records::{Ack, Category, ListPage};
use crate::session::store::SessionAccess;

#[derive(Clone)]
pub struct CategoryRepo {
    api: ApiClient,
    urls: ApiUrls,
    session: Arc<dyn SessionAccess>,
}

impl CategoryRepo {
    pub fn new(api: ApiClient, urls: ApiUrls, session: Arc<dyn SessionAccess>) -> Self {
        Self { api, urls, session }
    }

    pub async fn list(&self, params: &ListParams) -> ApiResult<ListPage<Category>> {
        let url = params.apply(&self.urls.categories())?;
        self.api
            .send(ApiRequest::new(Method::Get, url).bearer(self.session.token()))
            .await
    }

    pub async fn create(&self, draft: &CategoryDraft) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Post, self.urls.category())
                    .bearer(self.session.token())
                    .json(body(draft)?),
            )
            .await
    }

    pub async fn update(&self, id: &str, draft: &CategoryDraft) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Put, self.urls.category_by_id(id))
                    .bearer(self.session.token())
                    .json(body(draft)?),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Delete, self.urls.category_by_id(id))
                    .bearer(self.session.token()),
            )
            .await
    }

    // Reads go through the plural base, unlike mutations.
    pub async fn get_by_id(&self, id: &str) -> ApiResult<Category> {
        self.api
            .send(
                ApiRequest::new(Method::Get, self.urls.categories_by_id(id))
                    .bearer(self.session.token()),
            )
            .await
    }
}

fn body(draft: &CategoryDraft) -> ApiResult<Value> {
    let icon = draft
        .icon
        .ok_or_else(|| ApiError::Validation("Icon name is required".to_string()))?;
    let mut body = serde_json::json!({
        "name": draft.name.trim(),
        "icon": icon.as_str(),
        "isFeatured": draft.is_featured,
    });
    if let Some(subcategory) = draft.subcategory.as_deref().filter(|s| !s.trim().is_empty()) {
        body["subcategory"] = Value::String(subcategory.trim().to_string());
    }
    Ok(body)
}

#[async_trait]
impl ListFetcher<Category> for CategoryRepo {
    async fn fetch(&self, query: &ListQuery) -> ApiResult<ListPage<Category>> {
        self.list(&query.to_params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::icon::CategoryIcon;

    #[test]
    fn body_should_send_the_icon_wire_identifier() {
        let draft = CategoryDraft {
            name: " Concerts ".to_string(),
            icon: Some(CategoryIcon::Music),
            subcategory: None,
            is_featured: true,
        };
        let value = body(&draft).unwrap();
        assert_eq!(value["name"], "Concerts");
        assert_eq!(value["icon"], "music");
        assert_eq!(value["isFeatured"], true);
        assert!(value.get("subcategory").is_none());
    }

    #[test]
    fn body_should_include_a_non_empty_subcategory() {
        let draft = CategoryDraft {
            name: "Concerts".to_string(),
            icon: Some(CategoryIcon::Music),
            subcategory: Some("Jazz".to_string()),
            is_featured: false,
        };
        let value = body(&draft).unwrap();
        assert_eq!(value["subcategory"], "Jazz");
    }

    #[test]
    fn body_without_an_icon_should_be_a_validation_error() {
        let draft = CategoryDraft {
            name: "Concerts".to_string(),
            ..CategoryDraft::default()
        };
        assert!(body(&draft).unwrap_err().is_validation());
    }
}
