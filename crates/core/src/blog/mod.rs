//! Investment insight articles.

pub mod catalog;
pub mod content;
pub mod repository;
pub mod types;

pub use content::ContentBlock;
pub use repository::{ALL_POSTS, BlogRepository, InMemoryBlogRepository};
pub use types::BlogPost;
