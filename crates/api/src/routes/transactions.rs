//! Ledger routes, scoped to the logged-in user.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use pocketbook_core::ledger::TransactionDraft;
use pocketbook_shared::types::TransactionId;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthUser;

/// Creates transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/api/transactions/{id}", delete(delete_transaction))
}

/// Query parameters for listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Maximum number of records; the configured default when absent.
    pub limit: Option<u64>,
}

/// Request body for recording a transaction.
///
/// `amount` is accepted as a JSON string or number.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTransactionRequest {
    /// Amount; its sign is ignored.
    #[serde(default)]
    pub amount: Value,
    /// `expense` or `income`.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub date: Option<String>,
}

impl CreateTransactionRequest {
    fn into_draft(self) -> TransactionDraft {
        let amount = match self.amount {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        };

        TransactionDraft {
            amount,
            transaction_type: self.transaction_type,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}

/// Response for a created resource.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// New record ID.
    pub id: TransactionId,
    /// Human-readable message.
    pub message: &'static str,
}

/// GET /api/transactions - The caller's transactions, newest first.
async fn list_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let transactions = state.ledger.get_by_user(auth.user_id(), query.limit).await?;
    Ok(Json(transactions))
}

/// POST /api/transactions - Record an expense or income.
async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let transaction = state
        .ledger
        .create(auth.user_id(), &payload.into_draft())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: transaction.id,
            message: "Transaction added",
        }),
    ))
}

/// DELETE /api/transactions/{id} - Delete one of the caller's transactions.
///
/// Missing and not-owned records both answer 404.
async fn delete_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    id: Result<Path<TransactionId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;

    if state.ledger.delete(id, auth.user_id()).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Transaction not found"))
    }
}
