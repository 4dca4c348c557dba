//! Endpoint catalogue for the events platform API
//!
//! All paths live here so a backend route change is a one-file edit. List
//! endpoints take their query string from [`ListParams`]; only defined
//! parameters are serialized and the `?` is omitted entirely when none are.

use crate::api::error::{ApiError, ApiResult};

/// Query parameters accepted by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListParams {
    /// Append the defined parameters to a base URL
    pub fn apply(&self, base: &str) -> ApiResult<String> {
        let mut url = reqwest::Url::parse(base)
            .map_err(|e| ApiError::Validation(format!("invalid url '{base}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
                pairs.append_pair("search", search);
            }
            if let Some(page) = self.page {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(limit) = self.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url.into())
    }
}

/// Typed endpoint builders over the configured base URL
#[derive(Debug, Clone)]
pub struct ApiUrls {
    base: String,
}

impl ApiUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn login(&self) -> String {
        format!("{}/api/v1/auth/login", self.base)
    }

    // ---- event types ----

    pub fn event_types(&self) -> String {
        format!("{}/api/v1/util/event-types", self.base)
    }

    pub fn event_type(&self) -> String {
        format!("{}/api/v1/util/event-type", self.base)
    }

    pub fn event_type_by_id(&self, id: &str) -> String {
        format!("{}/{id}", self.event_type())
    }

    // ---- categories ----

    pub fn categories(&self) -> String {
        format!("{}/api/v1/util/categories", self.base)
    }

    pub fn category(&self) -> String {
        format!("{}/api/v1/util/category", self.base)
    }

    pub fn category_by_id(&self, id: &str) -> String {
        format!("{}/{id}", self.category())
    }

    /// Single-record read; the backend serves it under the plural base
    pub fn categories_by_id(&self, id: &str) -> String {
        format!("{}/{id}", self.categories())
    }

    // ---- faqs ----

    pub fn faqs(&self) -> String {
        format!("{}/api/v1/util/faqs", self.base)
    }

    pub fn faq(&self) -> String {
        format!("{}/api/v1/util/faq", self.base)
    }

    pub fn faq_by_id(&self, id: &str) -> String {
        format!("{}/{id}", self.faq())
    }

    /// Single-record read; the backend serves it under the plural base
    pub fn faqs_by_id(&self, id: &str) -> String {
        format!("{}/{id}", self.faqs())
    }

    // ---- banners ----

    pub fn banners(&self) -> String {
        format!("{}/api/v1/util/banners", self.base)
    }

    pub fn banner(&self) -> String {
        format!("{}/api/v1/util/banner", self.base)
    }

    pub fn banner_by_id(&self, id: &str) -> String {
        format!("{}/{id}", self.banner())
    }

    // ---- blogs ----

    pub fn blogs(&self) -> String {
        format!("{}/api/v1/blogs", self.base)
    }

    pub fn blog(&self) -> String {
        format!("{}/api/v1/blog", self.base)
    }

    pub fn blog_by_id(&self, id: &str) -> String {
        format!("{}/{id}", self.blog())
    }

    // ---- users ----

    pub fn users(&self) -> String {
        format!("{}/api/v1/users", self.base)
    }

    pub fn user(&self) -> String {
        format!("{}/api/v1/user", self.base)
    }

    pub fn user_by_id(&self, id: &str) -> String {
        format!("{}/{id}", self.user())
    }

    // ---- events ----

    /// Lightweight id/title pairs for event selectors
    pub fn event_options(&self) -> String {
        format!("{}/api/v1/events/options", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_should_be_trimmed() {
        let urls = ApiUrls::new("http://localhost:8000/");
        assert_eq!(urls.login(), "http://localhost:8000/api/v1/auth/login");
    }

    #[test]
    fn by_id_urls_should_append_the_id() {
        let urls = ApiUrls::new("http://localhost:8000");
        assert_eq!(
            urls.banner_by_id("abc123"),
            "http://localhost:8000/api/v1/util/banner/abc123"
        );
    }

    #[test]
    fn single_record_reads_should_use_the_plural_base() {
        let urls = ApiUrls::new("http://localhost:8000");
        assert_eq!(
            urls.faqs_by_id("f1"),
            "http://localhost:8000/api/v1/util/faqs/f1"
        );
        assert_eq!(
            urls.categories_by_id("c1"),
            "http://localhost:8000/api/v1/util/categories/c1"
        );
        // Mutations keep addressing the singular base.
        assert_eq!(
            urls.faq_by_id("f1"),
            "http://localhost:8000/api/v1/util/faq/f1"
        );
    }

    #[test]
    fn empty_params_should_leave_the_url_untouched() {
        let params = ListParams::default();
        let url = params
            .apply("http://localhost:8000/api/v1/util/banners")
            .unwrap();
        assert_eq!(url, "http://localhost:8000/api/v1/util/banners");
    }

    #[test]
    fn defined_params_should_serialize_in_order() {
        let params = ListParams {
            search: Some("summer".to_string()),
            page: Some(2),
            limit: Some(10),
        };
        let url = params
            .apply("http://localhost:8000/api/v1/util/banners")
            .unwrap();
        assert_eq!(
            url,
            "http://localhost:8000/api/v1/util/banners?search=summer&page=2&limit=10"
        );
    }

    #[test]
    fn empty_search_text_should_be_skipped() {
        let params = ListParams {
            search: Some(String::new()),
            page: Some(1),
            limit: None,
        };
        let url = params
            .apply("http://localhost:8000/api/v1/util/faqs")
            .unwrap();
        assert_eq!(url, "http://localhost:8000/api/v1/util/faqs?page=1");
    }

    #[test]
    fn search_text_should_be_url_encoded() {
        let params = ListParams {
            search: Some("rock & roll".to_string()),
            page: None,
            limit: None,
        };
        let url = params
            .apply("http://localhost:8000/api/v1/util/banners")
            .unwrap();
        assert!(url.contains("search=rock+%26+roll") || url.contains("search=rock%20%26%20roll"));
    }

    #[test]
    fn invalid_base_url_should_be_a_validation_error() {
        let params = ListParams::default();
        let err = params.apply("not a url").unwrap_err();
        assert!(err.is_validation());
    }
}
