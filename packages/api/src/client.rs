//! # HTTP client for the marketplace API
//!
//! [`MarketplaceApi`] lists every call the front end makes. Pages and form
//! actions are generic over it, so the same code runs against [`HttpApi`] in
//! the browser and against recording fakes in tests.
//!
//! ## Endpoints
//!
//! | Method | Trait fn | Path |
//! |--------|----------|------|
//! | POST | [`register`](MarketplaceApi::register) | `/api/register` |
//! | POST | [`login`](MarketplaceApi::login) | `/api/login` |
//! | POST | [`create_order`](MarketplaceApi::create_order) | `/api/orders` |
//! | GET | [`list_contractors`](MarketplaceApi::list_contractors) | `/api/contractors` |
//! | GET | [`get_contractor`](MarketplaceApi::get_contractor) | `/api/contractors/{username}` |
//! | GET | [`list_posts`](MarketplaceApi::list_posts) | `/api/posts[?username=]` |
//! | POST | [`create_post`](MarketplaceApi::create_post) | `/api/posts` |
//!
//! Path segments and query values go through [`reqwest::Url`], which
//! percent-encodes them.
//!
//! ## Responses
//!
//! A non-2xx status becomes [`ApiError::Http`] carrying the `detail` string of
//! the JSON error body when there is one. A request that never completes
//! becomes [`ApiError::Network`]. Nothing is retried.

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{
    Contractor, ErrorBody, LoginRequest, LoginResponse, OrderRequest, Post, PostRequest,
    RegisterRequest,
};

/// Async interface to the remote marketplace API.
pub trait MarketplaceApi {
    fn register(
        &self,
        req: &RegisterRequest,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn login(
        &self,
        req: &LoginRequest,
    ) -> impl std::future::Future<Output = Result<LoginResponse, ApiError>>;
    fn create_order(
        &self,
        req: &OrderRequest,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn list_contractors(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Contractor>, ApiError>>;
    fn get_contractor(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Contractor, ApiError>>;
    fn list_posts(
        &self,
        username: Option<&str>,
    ) -> impl std::future::Future<Output = Result<Vec<Post>, ApiError>>;
    fn create_post(
        &self,
        req: &PostRequest,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// `reqwest`-backed client. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL extended with the given path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `/api/posts`, scoped to one author when `username` is given.
    pub fn posts_url(&self, username: Option<&str>) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["api", "posts"])?;
        if let Some(username) = username {
            url.query_pairs_mut().append_pair("username", username);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);
        let res = self.client.get(url).send().await?;
        let res = check_status(res).await?;
        res.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize>(&self, url: Url, body: &B) -> Result<Response, ApiError> {
        tracing::debug!("POST {}", url);
        let res = self.client.post(url).json(body).send().await?;
        check_status(res).await
    }
}

/// Turn a non-success response into [`ApiError::Http`].
async fn check_status(res: Response) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.bytes().await.unwrap_or_default();
    let err = http_error(status.as_u16(), &body);
    tracing::warn!("API rejected request: {} ({:?})", status, err.detail());
    Err(err)
}

/// [`ApiError::Http`] for a rejected request. `detail` is only taken from a
/// JSON body whose `detail` is a string.
pub fn http_error(status: u16, body: &[u8]) -> ApiError {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message());
    ApiError::Http { status, detail }
}

impl MarketplaceApi for HttpApi {
    async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.post_json(self.endpoint(&["api", "register"])?, req)
            .await
            .map(|_| ())
    }

    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let res = self.post_json(self.endpoint(&["api", "login"])?, req).await?;
        res.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_order(&self, req: &OrderRequest) -> Result<(), ApiError> {
        self.post_json(self.endpoint(&["api", "orders"])?, req)
            .await
            .map(|_| ())
    }

    async fn list_contractors(&self) -> Result<Vec<Contractor>, ApiError> {
        self.get_json(self.endpoint(&["api", "contractors"])?).await
    }

    async fn get_contractor(&self, username: &str) -> Result<Contractor, ApiError> {
        self.get_json(self.endpoint(&["api", "contractors", username])?)
            .await
    }

    async fn list_posts(&self, username: Option<&str>) -> Result<Vec<Post>, ApiError> {
        self.get_json(self.posts_url(username)?).await
    }

    async fn create_post(&self, req: &PostRequest) -> Result<(), ApiError> {
        self.post_json(self.endpoint(&["api", "posts"])?, req)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let api = HttpApi::new("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(
            api.endpoint(&["api", "contractors"]).unwrap().as_str(),
            "http://localhost:8000/api/contractors"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let api = HttpApi::new("https://example.org/market");
        assert_eq!(
            api.endpoint(&["api", "orders"]).unwrap().as_str(),
            "https://example.org/market/api/orders"
        );
    }

    #[test]
    fn test_contractor_username_is_percent_encoded() {
        let api = HttpApi::new("http://localhost:8000");
        let url = api.endpoint(&["api", "contractors", "иван/петров"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/contractors/%D0%B8%D0%B2%D0%B0%D0%BD%2F%D0%BF%D0%B5%D1%82%D1%80%D0%BE%D0%B2"
        );
    }

    #[test]
    fn test_posts_url_scoping() {
        let api = HttpApi::new("http://localhost:8000");
        assert_eq!(
            api.posts_url(None).unwrap().as_str(),
            "http://localhost:8000/api/posts"
        );
        assert_eq!(
            api.posts_url(Some("a b&c")).unwrap().as_str(),
            "http://localhost:8000/api/posts?username=a+b%26c"
        );
    }

    #[test]
    fn test_http_error_takes_string_detail() {
        let err = http_error(400, br#"{"detail":"User already exists"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                detail: Some("User already exists".into())
            }
        );
    }

    #[test]
    fn test_http_error_without_usable_detail() {
        let bodies: [&[u8]; 5] = [
            b"<html>Internal Server Error</html>",
            b"",
            b"{}",
            br#"{"detail":[{"loc":["body","username"],"msg":"field required"}]}"#,
            br#"{"detail":null}"#,
        ];
        for body in bodies {
            assert_eq!(
                http_error(500, body),
                ApiError::Http {
                    status: 500,
                    detail: None
                },
                "body {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let api = HttpApi::new("not a url");
        assert!(matches!(
            api.endpoint(&["api"]),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
