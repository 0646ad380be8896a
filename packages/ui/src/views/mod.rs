mod auth;
pub use auth::{LoginView, RegisterView};

mod directory;
pub use directory::DirectoryView;

mod feed;
pub use feed::FeedView;

mod order;
pub use order::OrderView;
