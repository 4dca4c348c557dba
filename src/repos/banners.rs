//! Banner repository
//!
//! Banners carry an image, so create and update bodies are multipart.
//! Create includes the owning event id; update leaves it alone, and an
//! omitted image keeps the stored one server-side.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::client::{ApiClient, ApiRequest, Method, MultipartField};
use crate::api::error::ApiResult;
use crate::api::urls::{ApiUrls, ListParams};
use crate::controller::list::{ListFetcher, ListQuery};
use crate::models::drafts::{BannerUpdate, NewBanner};
use crate::models::records::{Ack, Banner, ListPage};
use crate::repos::{file, flag, text};
use crate::session::store::SessionAccess;

#[derive(Clone)]
pub struct BannerRepo {
    api: ApiClient,
    urls: ApiUrls,
    session: Arc<dyn SessionAccess>,
}

impl BannerRepo {
    pub fn new(api: ApiClient, urls: ApiUrls, session: Arc<dyn SessionAccess>) -> Self {
        Self { api, urls, session }
    }

    pub async fn list(&self, params: &ListParams) -> ApiResult<ListPage<Banner>> {
        let url = params.apply(&self.urls.banners())?;
        self.api
            .send(ApiRequest::new(Method::Get, url).bearer(self.session.token()))
            .await
    }

    pub async fn create(&self, draft: &NewBanner) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Post, self.urls.banner())
                    .bearer(self.session.token())
                    .multipart(create_fields(draft)),
            )
            .await
    }

    pub async fn update(&self, id: &str, draft: &BannerUpdate) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Put, self.urls.banner_by_id(id))
                    .bearer(self.session.token())
                    .multipart(update_fields(draft)),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<Ack> {
        self.api
            .send(
                ApiRequest::new(Method::Delete, self.urls.banner_by_id(id))
                    .bearer(self.session.token()),
            )
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> ApiResult<Banner> {
        self.api
            .send(
                ApiRequest::new(Method::Get, self.urls.banner_by_id(id))
                    .bearer(self.session.token()),
            )
            .await
    }
}

fn create_fields(draft: &NewBanner) -> Vec<MultipartField> {
    let mut fields = vec![
        text("title", draft.title.trim()),
        text("eventId", draft.event_id.as_str()),
    ];
    if let Some(image) = &draft.image {
        fields.push(file("image", image));
    }
    fields.push(flag("isFeatured", draft.is_featured));
    fields.push(flag("isActive", draft.is_active));
    fields
}

fn update_fields(draft: &BannerUpdate) -> Vec<MultipartField> {
    let mut fields = vec![text("title", draft.title.trim())];
    if let Some(image) = &draft.image {
        fields.push(file("image", image));
    }
    fields.push(flag("isFeatured", draft.is_featured));
    fields.push(flag("isActive", draft.is_active));
    fields
}

#[async_trait]
impl ListFetcher<Banner> for BannerRepo {
    async fn fetch(&self, query: &ListQuery) -> ApiResult<ListPage<Banner>> {
        self.list(&query.to_params()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::drafts::Attachment;
    use bytes::Bytes;

    fn draft() -> NewBanner {
        NewBanner {
            title: " Summer Fest ".to_string(),
            event_id: "e1".to_string(),
            image: Some(Attachment::new(
                "banner.png",
                "image/png",
                Bytes::from_static(b"\x89PNG"),
            )),
            is_featured: true,
            is_active: false,
        }
    }

    #[test]
    fn create_fields_should_trim_the_title_and_include_the_event() {
        let fields = create_fields(&draft());
        assert_eq!(
            fields[0],
            MultipartField::Text("title".to_string(), "Summer Fest".to_string())
        );
        assert_eq!(
            fields[1],
            MultipartField::Text("eventId".to_string(), "e1".to_string())
        );
    }

    #[test]
    fn create_fields_should_carry_the_drafts_current_toggles() {
        // Regression guard: toggles come from the draft, never from
        // hardcoded defaults.
        let fields = create_fields(&draft());
        assert!(fields.contains(&MultipartField::Text(
            "isFeatured".to_string(),
            "true".to_string()
        )));
        assert!(fields.contains(&MultipartField::Text(
            "isActive".to_string(),
            "false".to_string()
        )));
    }

    #[test]
    fn update_fields_should_omit_the_image_when_unchanged() {
        let draft = BannerUpdate {
            title: "Summer Fest".to_string(),
            image: None,
            is_featured: false,
            is_active: true,
        };
        let fields = update_fields(&draft);
        assert!(fields
            .iter()
            .all(|f| !matches!(f, MultipartField::File(name, _) if name == "image")));
        assert!(fields
            .iter()
            .all(|f| !matches!(f, MultipartField::Text(name, _) if name == "eventId")));
    }

    #[test]
    fn update_fields_should_include_a_replacement_image() {
        let draft = BannerUpdate {
            title: "Summer Fest".to_string(),
            image: Some(Attachment::new(
                "new.png",
                "image/png",
                Bytes::from_static(b"png"),
            )),
            is_featured: false,
            is_active: true,
        };
        let fields = update_fields(&draft);
        assert!(fields
            .iter()
            .any(|f| matches!(f, MultipartField::File(name, part) if name == "image" && part.file_name == "new.png")));
    }
}
