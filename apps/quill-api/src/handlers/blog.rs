//! Public blog handlers: localized reads plus authenticated writes.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{
    NewPublishedPost, PublishedFilters, PublishedPatch, PublishedPost, localize,
    reading_time_minutes,
};
use quill_shared::dto::{BlogListQuery, HighlightQuery, PostDetailQuery, PostDetailResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_HIGHLIGHT_LIMIT: u64 = 3;
const RELATED_LIMIT: u64 = 3;

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("invalid post id: {raw}")))
}

/// GET /api/blog/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<BlogListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filters = PublishedFilters {
        category: query.category,
        tag: query.tag,
        limit: query.limit,
        offset: query.offset,
    };

    let posts = state.published.list(&filters).await?;
    let posts: Vec<_> = posts.iter().map(|p| localize(p, query.lang)).collect();
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/blog/posts/{slug}
///
/// The view counter is bumped off the request path; a failed bump never
/// fails the read.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PostDetailQuery>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let lang = query.into_inner().lang;

    let post = state
        .published
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no post with slug {slug}")))?;

    let service = state.published.clone();
    let view_slug = slug.clone();
    tokio::spawn(async move {
        service.record_view(&view_slug).await;
    });

    let related = match state
        .published
        .related(&post.category, post.id, RELATED_LIMIT)
        .await
    {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!(slug, error = %e, "related lookup failed, serving detail without it");
            Vec::new()
        }
    };

    let localized = localize(&post, lang);
    let reading_time = reading_time_minutes(&localized.content);
    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post: localized,
        related: related.iter().map(|p| localize(p, lang)).collect(),
        reading_time_minutes: reading_time,
    }))
}

/// GET /api/blog/featured
pub async fn featured_posts(
    state: web::Data<AppState>,
    query: web::Query<HighlightQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let limit = query.limit.unwrap_or(DEFAULT_HIGHLIGHT_LIMIT);
    let posts = state.published.featured(limit).await?;
    let posts: Vec<_> = posts.iter().map(|p| localize(p, query.lang)).collect();
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/blog/latest
pub async fn latest_posts(
    state: web::Data<AppState>,
    query: web::Query<HighlightQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let limit = query.limit.unwrap_or(DEFAULT_HIGHLIGHT_LIMIT);
    let posts = state.published.latest(limit).await?;
    let posts: Vec<_> = posts.iter().map(|p| localize(p, query.lang)).collect();
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/blog/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.published.categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /api/blog/tags
pub async fn list_tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.published.tags().await?;
    Ok(HttpResponse::Ok().json(tags))
}

/// POST /api/blog/posts - Protected route
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<NewPublishedPost>,
) -> AppResult<HttpResponse> {
    let post: PublishedPost = state
        .published
        .create(Some(&identity.actor()), body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(post))
}

/// PATCH /api/blog/posts/{id} - Protected route
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<PublishedPatch>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path.into_inner())?;
    let post = state
        .published
        .update(Some(&identity.actor()), id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/blog/posts/{id} - Protected route
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path.into_inner())?;
    state
        .published
        .delete(Some(&identity.actor()), id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
