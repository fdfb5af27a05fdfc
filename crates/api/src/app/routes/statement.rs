use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use finapi_ledger::{LedgerService, parse_statement_date};

use crate::app::{dto, errors};
use crate::context::CustomerContext;

pub async fn get_statement(
    Extension(ledger): Extension<LedgerService>,
    Extension(customer): Extension<CustomerContext>,
) -> axum::response::Response {
    match ledger.statement(customer.customer()) {
        Ok(ops) => (StatusCode::OK, Json(ops)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_statement_by_date(
    Extension(ledger): Extension<LedgerService>,
    Extension(customer): Extension<CustomerContext>,
    query: Result<Query<dto::StatementDateQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return errors::query_rejection_to_response(e),
    };

    let date = query.date.as_deref().and_then(parse_statement_date);
    if date.is_none() {
        tracing::debug!(raw = ?query.date, "statement date missing or unparseable");
    }

    match ledger.statement_by_date(customer.customer(), date) {
        Ok(ops) => (StatusCode::OK, Json(ops)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
