use axum::{
    routing::{get, post},
    Router,
};

use finapi_ledger::LedgerService;

use crate::middleware::{self, IdentityState};

pub mod account;
pub mod statement;
pub mod system;
pub mod transactions;

/// Router for every endpoint.
///
/// Only account creation and the health check skip identity resolution;
/// everything else sits behind [`middleware::resolve_customer`].
pub fn router(ledger: LedgerService) -> Router {
    let identity_scoped = Router::new()
        .route(
            "/account",
            get(account::get_account)
                .put(account::update_account)
                .delete(account::delete_account),
        )
        .route("/statement", get(statement::get_statement))
        .route("/statement/date", get(statement::get_statement_by_date))
        .route("/deposit", post(transactions::deposit))
        .route("/withdraw", post(transactions::withdraw))
        .route("/balance", get(transactions::get_balance))
        .route_layer(axum::middleware::from_fn_with_state(
            IdentityState { ledger },
            middleware::resolve_customer,
        ));

    Router::new()
        .route("/health", get(system::health))
        .route("/account", post(account::create_account))
        .merge(identity_scoped)
}
