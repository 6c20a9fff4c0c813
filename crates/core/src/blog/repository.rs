//! Blog post lookups.

use safal_shared::types::PostSlug;

use super::catalog;
use super::types::BlogPost;

/// Pseudo-category that matches every post.
pub const ALL_POSTS: &str = "All Posts";

/// Read-only source of blog posts.
pub trait BlogRepository: Send + Sync {
    /// Returns the post with `slug`, if any.
    fn get_by_id(&self, slug: &PostSlug) -> Option<BlogPost>;

    /// Returns every post, newest first.
    fn list(&self) -> Vec<BlogPost>;

    /// Returns posts in `category`, newest first. `ALL_POSTS` matches all.
    fn list_by_category(&self, category: &str) -> Vec<BlogPost> {
        if category.eq_ignore_ascii_case(ALL_POSTS) {
            return self.list();
        }
        self.list()
            .into_iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Returns `ALL_POSTS` followed by each category in order of first use.
    fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_POSTS.to_string()];
        for post in self.list() {
            if !categories.contains(&post.category) {
                categories.push(post.category);
            }
        }
        categories
    }

    /// Up to `limit` other posts, same category first, then newest.
    fn related(&self, slug: &PostSlug, limit: usize) -> Vec<BlogPost> {
        let Some(current) = self.get_by_id(slug) else {
            return Vec::new();
        };
        let mut others: Vec<BlogPost> = self.list().into_iter().filter(|p| &p.slug != slug).collect();
        // Stable sort keeps newest-first within each group.
        others.sort_by_key(|p| p.category != current.category);
        others.truncate(limit);
        others
    }
}

/// Repository over a fixed, in-memory set of posts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlogRepository {
    posts: Vec<BlogPost>,
}

impl InMemoryBlogRepository {
    /// Creates a repository over `posts`, ordering them newest first.
    #[must_use]
    pub fn new(mut posts: Vec<BlogPost>) -> Self {
        posts.sort_by(|a, b| b.published_on.cmp(&a.published_on));
        Self { posts }
    }

    /// Creates a repository holding the site's published posts.
    #[must_use]
    pub fn with_catalog() -> Self {
        Self::new(catalog::posts())
    }
}

impl BlogRepository for InMemoryBlogRepository {
    fn get_by_id(&self, slug: &PostSlug) -> Option<BlogPost> {
        self.posts.iter().find(|p| &p.slug == slug).cloned()
    }

    fn list(&self) -> Vec<BlogPost> {
        self.posts.clone()
    }
}
