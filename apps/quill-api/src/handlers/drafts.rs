//! Draft-post handlers for the authoring dashboard. All routes require a
//! bearer token; drafts are never publicly readable.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{DraftFilters, DraftPatch, DraftSort, NewDraft, status_counts};
use quill_shared::dto::{DraftListQuery, DraftListResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/drafts
pub async fn list_drafts(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<DraftListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let defaults = DraftSort::default();
    let sort = DraftSort {
        field: query.sort.unwrap_or(defaults.field),
        order: query.order.unwrap_or(defaults.order),
    };
    let filters = DraftFilters {
        search: query.search,
        status: query.status,
        priority: query.priority,
        category: query.category,
    };

    let drafts = state.drafts.list(sort, &filters).await?;
    // Dashboard tallies cover the whole collection, not the current filter
    let counts = if filters.is_empty() {
        status_counts(&drafts)
    } else {
        let all = state
            .drafts
            .list(DraftSort::default(), &DraftFilters::default())
            .await?;
        status_counts(&all)
    };
    Ok(HttpResponse::Ok().json(DraftListResponse { drafts, counts }))
}

/// GET /api/drafts/{id}
pub async fn get_draft(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let draft = state
        .drafts
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no draft with id {id}")))?;
    Ok(HttpResponse::Ok().json(draft))
}

/// POST /api/drafts
pub async fn create_draft(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<NewDraft>,
) -> AppResult<HttpResponse> {
    let draft = state
        .drafts
        .create(Some(&identity.actor()), body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(draft))
}

/// PATCH /api/drafts/{id}
pub async fn update_draft(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<DraftPatch>,
) -> AppResult<HttpResponse> {
    let draft = state
        .drafts
        .update(Some(&identity.actor()), path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(draft))
}

/// DELETE /api/drafts/{id}
pub async fn delete_draft(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .drafts
        .delete(Some(&identity.actor()), path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/drafts/categories
pub async fn list_categories(
    state: web::Data<AppState>,
    _identity: Identity,
) -> AppResult<HttpResponse> {
    let categories = state.drafts.categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[cfg(test)]
mod tests {
    use quill_core::domain::{Priority, Status, StatusCounts};
    use quill_core::service::Actor;

    use super::*;

    fn identity() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "ana@example.com".to_string(),
        }
    }

    async fn seeded_state() -> web::Data<AppState> {
        let state = AppState::new(None).await;
        let actor = Actor {
            user_id: Uuid::new_v4(),
        };
        for (title, status) in [
            ("a", Status::Draft),
            ("b", Status::Draft),
            ("c", Status::Idea),
            ("d", Status::ReadyToPublish),
        ] {
            state
                .drafts
                .create(
                    Some(&actor),
                    NewDraft {
                        title: title.to_string(),
                        description: String::new(),
                        target_publication_date: None,
                        category: "Dev".to_string(),
                        priority: Priority::Medium,
                        status,
                        author: String::new(),
                    },
                )
                .await
                .unwrap();
        }
        web::Data::new(state)
    }

    async fn body_of(resp: HttpResponse) -> DraftListResponse {
        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn tallies_cover_the_whole_collection_under_a_filter() {
        let state = seeded_state().await;

        let query = web::Query(DraftListQuery {
            status: Some(Status::Draft),
            ..Default::default()
        });
        let resp = list_drafts(state, identity(), query).await.unwrap();
        let body = body_of(resp).await;

        assert_eq!(body.drafts.len(), 2);
        assert!(body.drafts.iter().all(|d| d.status == Status::Draft));
        let expected = StatusCounts {
            total: 4,
            idea: 1,
            outline: 0,
            draft: 2,
            ready: 1,
        };
        assert_eq!(body.counts, expected);
    }

    #[tokio::test]
    async fn unfiltered_listing_tallies_itself() {
        let state = seeded_state().await;

        let resp = list_drafts(state, identity(), web::Query(DraftListQuery::default()))
            .await
            .unwrap();
        let body = body_of(resp).await;

        assert_eq!(body.drafts.len(), 4);
        assert_eq!(body.counts.total, 4);
        assert_eq!(body.counts.draft, 2);
    }
}
