//! # API crate — marketplace client and domain rules
//!
//! Everything the pages need that does not touch the DOM lives here, so it can
//! be unit-tested natively and reused by every view in the `ui` crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: `Contractor`, `Post`, request payloads, the error body |
//! | [`client`] | The [`MarketplaceApi`] trait and its `reqwest` implementation [`HttpApi`] |
//! | [`error`] | [`ApiError`], splitting HTTP rejections from transport and decode failures |
//! | [`directory`] | Client-side contractor search: text/category filters and sort keys |
//! | [`data_url`] | Base64 data URLs for images attached to posts |
//! | [`actions`] | The submit flow shared by registration, login, order and post forms |

pub mod actions;
pub mod client;
pub mod data_url;
pub mod directory;
pub mod error;
pub mod models;

pub use actions::SubmitError;
pub use client::{HttpApi, MarketplaceApi};
pub use directory::{DirectoryQuery, SortKey};
pub use error::ApiError;
pub use models::{Contractor, Post, PostId};
