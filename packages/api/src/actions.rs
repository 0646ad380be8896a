//! # Form submissions
//!
//! Registration, login, order placement and post publishing all follow one
//! contract: check the sign-in gate (orders and posts only), shape the payload
//! from the raw field values, POST it, and report the outcome. The UI layer
//! turns the returned [`SubmitError`] into an alert or a redirect.
//!
//! A gated action with no signed-in user returns
//! [`SubmitError::SignInRequired`] without touching the API.

use store::{Session, SessionStore};
use thiserror::Error;

use crate::client::MarketplaceApi;
use crate::error::ApiError;
use crate::models::{LoginRequest, OrderRequest, PostRequest, RegisterRequest};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("sign-in required")]
    SignInRequired,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Raw values of the registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Raw values of the login form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Raw values of the order form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub title: String,
    pub category: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    pub address: String,
}

impl OrderForm {
    /// Build the payload; empty optional fields are dropped.
    pub fn into_request(self, username: String) -> OrderRequest {
        OrderRequest {
            username,
            title: self.title,
            category: self.category,
            description: self.description,
            budget: parse_leading_float(&self.budget),
            deadline: non_empty(self.deadline),
            address: non_empty(self.address),
        }
    }
}

/// Post composer values. `image` is already a data URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub content: String,
    pub image: Option<String>,
}

impl PostForm {
    pub fn into_request(self, username: String) -> PostRequest {
        PostRequest {
            username,
            content: self.content,
            image: self.image.and_then(non_empty),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parse the longest numeric prefix, ignoring leading whitespace:
/// `"1500"` → 1500, `" 2.5k"` → 2.5, `"1e3"` → 1000, `"abc"` → `None`.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if frac_end > frac_start || digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok()
}

/// The signed-in username, or [`SubmitError::SignInRequired`].
pub fn require_user<S: SessionStore>(session: &Session<S>) -> Result<String, SubmitError> {
    session.username().ok_or(SubmitError::SignInRequired)
}

pub async fn register(api: &impl MarketplaceApi, form: RegisterForm) -> Result<(), SubmitError> {
    let req = RegisterRequest {
        username: form.username,
        email: form.email,
        password: form.password,
    };
    api.register(&req).await?;
    tracing::info!("registered {}", req.username);
    Ok(())
}

/// Log in and persist the returned username into the session.
pub async fn login<S: SessionStore>(
    api: &impl MarketplaceApi,
    session: &Session<S>,
    form: LoginForm,
) -> Result<String, SubmitError> {
    let req = LoginRequest {
        username: form.username,
        password: form.password,
    };
    let res = api.login(&req).await?;
    session.sign_in(&res.username);
    tracing::info!("signed in as {}", res.username);
    Ok(res.username)
}

pub async fn place_order<S: SessionStore>(
    api: &impl MarketplaceApi,
    session: &Session<S>,
    form: OrderForm,
) -> Result<(), SubmitError> {
    let username = require_user(session)?;
    let req = form.into_request(username);
    api.create_order(&req).await?;
    tracing::info!("order {:?} placed by {}", req.title, req.username);
    Ok(())
}

pub async fn publish_post<S: SessionStore>(
    api: &impl MarketplaceApi,
    session: &Session<S>,
    form: PostForm,
) -> Result<(), SubmitError> {
    let username = require_user(session)?;
    let req = form.into_request(username);
    api.create_post(&req).await?;
    tracing::info!("post published by {}", req.username);
    Ok(())
}
