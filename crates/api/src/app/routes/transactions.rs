use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use finapi_ledger::LedgerService;

use crate::app::{dto, errors};
use crate::context::CustomerContext;

pub async fn deposit(
    Extension(ledger): Extension<LedgerService>,
    Extension(customer): Extension<CustomerContext>,
    body: Result<Json<dto::DepositRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match ledger.deposit(customer.customer(), body.amount, body.description, Utc::now()) {
        Ok(_) => StatusCode::CREATED.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn withdraw(
    Extension(ledger): Extension<LedgerService>,
    Extension(customer): Extension<CustomerContext>,
    body: Result<Json<dto::WithdrawRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match ledger.withdraw(customer.customer(), body.amount, Utc::now()) {
        Ok(_) => StatusCode::CREATED.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_balance(
    Extension(ledger): Extension<LedgerService>,
    Extension(customer): Extension<CustomerContext>,
) -> axum::response::Response {
    match ledger.balance(customer.customer()) {
        Ok(balance) => {
            tracing::debug!(customer_id = %customer.customer().id(), balance, "balance computed");
            (StatusCode::OK, Json(balance)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
