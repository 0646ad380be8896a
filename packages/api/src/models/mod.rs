//! Wire models exchanged with the marketplace API.

mod contractor;
mod post;
mod requests;

pub use contractor::Contractor;
pub use post::{Post, PostId};
pub use requests::{
    ErrorBody, LoginRequest, LoginResponse, OrderRequest, PostRequest, RegisterRequest,
};
