//! Aggregate views over the caller's ledger.

use axum::{Json, Router, extract::State, routing::get};

use pocketbook_core::analytics::{CategoryTotal, MonthlyTotal};

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::AuthUser;

/// Creates analytics routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/analytics/monthly", get(monthly))
        .route("/api/analytics/categories", get(categories))
}

/// GET /api/analytics/monthly - Net total and count per calendar month.
async fn monthly(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<MonthlyTotal>>> {
    Ok(Json(state.analytics.monthly_totals(auth.user_id()).await?))
}

/// GET /api/analytics/categories - Net total and count per category label.
async fn categories(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CategoryTotal>>> {
    Ok(Json(state.analytics.category_totals(auth.user_id()).await?))
}
