//! Blog routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::NaiveDate;
use safal_core::blog::{ALL_POSTS, BlogPost};
use safal_shared::types::PostSlug;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// Number of related posts shown under an article.
const RELATED_POSTS: usize = 3;

/// Creates blog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/blog", get(list_posts))
        .route("/blog/categories", get(list_categories))
        .route("/blog/{slug}", get(get_post))
}

/// Query parameters for listing posts.
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    /// Category to filter by; omitted or `All Posts` lists everything.
    pub category: Option<String>,
}

/// Post metadata without the body.
#[derive(Debug, Serialize)]
pub struct PostSummary {
    /// URL slug.
    pub slug: PostSlug,
    /// Headline.
    pub title: String,
    /// Teaser text.
    pub excerpt: String,
    /// Category name.
    pub category: String,
    /// Author name.
    pub author: String,
    /// Author's job title.
    pub author_role: String,
    /// Publication date.
    pub published_on: NaiveDate,
    /// Publication date as `December 10, 2024`.
    pub display_date: String,
    /// Reading time as `8 min read`.
    pub read_time: String,
    /// Cover image URL.
    pub image: String,
    /// Shown in the featured strip.
    pub featured: bool,
}

impl From<&BlogPost> for PostSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category.clone(),
            author: post.author.clone(),
            author_role: post.author_role.clone(),
            published_on: post.published_on,
            display_date: post.display_date(),
            read_time: post.read_time(),
            image: post.image.clone(),
            featured: post.featured,
        }
    }
}

/// Full article with related reading.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    /// The article itself.
    #[serde(flatten)]
    pub post: BlogPost,
    /// Publication date as `December 10, 2024`.
    pub display_date: String,
    /// Reading time as `8 min read`.
    pub read_time: String,
    /// Other posts, same category first.
    pub related: Vec<PostSummary>,
}

/// GET /blog?category=
async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Json<Vec<PostSummary>> {
    let category = query.category.as_deref().unwrap_or(ALL_POSTS);
    let posts = state.blog.list_by_category(category);
    Json(posts.iter().map(PostSummary::from).collect())
}

/// GET /blog/categories
async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.blog.categories())
}

/// GET /blog/{slug}
async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<PostResponse>> {
    let slug = PostSlug::new(slug);
    let post = state
        .blog
        .get_by_id(&slug)
        .ok_or_else(|| ApiError::not_found("post", slug.as_str()))?;
    let related = state.blog.related(&slug, RELATED_POSTS);

    Ok(Json(PostResponse {
        display_date: post.display_date(),
        read_time: post.read_time(),
        related: related.iter().map(PostSummary::from).collect(),
        post,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{get_json, state};
    use axum::http::StatusCode;
    use rstest::rstest;

    fn app() -> Router {
        Router::new().merge(routes()).with_state(state())
    }

    #[rstest]
    #[case("/blog", 6)]
    #[case("/blog?category=All%20Posts", 6)]
    #[case("/blog?category=Tax%20Planning", 1)]
    #[case("/blog?category=Gold", 0)]
    #[tokio::test]
    async fn test_list_posts(#[case] uri: &str, #[case] count: usize) {
        let (status, body) = get_json(app(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), count);
    }

    #[tokio::test]
    async fn test_post_summary_fields() {
        let (_, body) = get_json(app(), "/blog").await;
        let first = &body[0];

        assert_eq!(first["slug"], "what-is-pre-leased-property");
        assert_eq!(first["display_date"], "December 10, 2024");
        assert_eq!(first["read_time"], "8 min read");
        assert!(first.get("content").is_none());
    }

    #[tokio::test]
    async fn test_list_categories() {
        let (status, body) = get_json(app(), "/blog/categories").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0], "All Posts");
        assert_eq!(body.as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_get_post() {
        let (status, body) = get_json(app(), "/blog/roi-calculation-guide").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["author"], "Priya Sharma");
        assert_eq!(body["content"][1]["type"], "heading2");
        assert_eq!(body["related"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_post_not_found() {
        let (status, body) = get_json(app(), "/blog/no-such-post").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
