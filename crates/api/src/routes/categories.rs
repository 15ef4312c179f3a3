//! Category registry routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};

use pocketbook_core::category::NewCategory;
use pocketbook_core::ledger::TransactionType;
use pocketbook_shared::types::CategoryId;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthUser;

/// Creates category routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/categories", get(list_categories).post(create_category))
}

/// Optional type filter.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    /// `expense` or `income`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Request body for a user-defined category.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCategoryRequest {
    /// Display name.
    pub name: Option<String>,
    /// `expense` or `income`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Icon name.
    pub icon: Option<String>,
    /// `#RRGGBB` color.
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreatedCategory {
    id: CategoryId,
    message: &'static str,
}

/// GET /api/categories - System defaults plus the caller's own.
async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let kind = query
        .kind
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .map(TransactionType::from_str)
        .transpose()
        .map_err(ApiError::validation)?;

    let categories = state.categories.list_for_user(auth.user_id(), kind).await?;
    Ok(Json(categories))
}

/// POST /api/categories - Create a category owned by the caller.
async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let input = NewCategory {
        name: payload.name,
        kind: payload.kind,
        icon: payload.icon,
        color: payload.color,
    };

    let category = state.categories.create(auth.user_id(), &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedCategory {
            id: category.id,
            message: "Category created",
        }),
    ))
}
