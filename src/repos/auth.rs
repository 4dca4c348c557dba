//! Authentication endpoint

use crate::api::client::{ApiClient, ApiRequest, Method};
use crate::api::error::ApiResult;
use crate::api::urls::ApiUrls;
use crate::models::records::LoginResponse;

/// Repository for the login endpoint; the only request sent without a token
#[derive(Clone)]
pub struct AuthRepo {
    api: ApiClient,
    urls: ApiUrls,
}

impl AuthRepo {
    pub fn new(api: ApiClient, urls: ApiUrls) -> Self {
        Self { api, urls }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });
        self.api
            .send(ApiRequest::new(Method::Post, self.urls.login()).json(body))
            .await
    }
}
