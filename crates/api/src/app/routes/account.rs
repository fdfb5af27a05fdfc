use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use finapi_ledger::{LedgerService, TaxId};

use crate::app::{dto, errors};
use crate::context::CustomerContext;

pub async fn create_account(
    Extension(ledger): Extension<LedgerService>,
    body: Result<Json<dto::CreateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match ledger.create_account(TaxId::new(body.cpf), body.name) {
        Ok(_) => StatusCode::CREATED.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_account(
    Extension(ledger): Extension<LedgerService>,
    Extension(customer): Extension<CustomerContext>,
) -> axum::response::Response {
    match ledger.get_account(customer.customer()) {
        Ok(c) => (StatusCode::OK, Json(c)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_account(
    Extension(ledger): Extension<LedgerService>,
    Extension(customer): Extension<CustomerContext>,
    body: Result<Json<dto::UpdateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match ledger.update_account(customer.customer(), body.name) {
        Ok(_) => StatusCode::CREATED.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Responds with the customers that remain after the deletion.
pub async fn delete_account(
    Extension(ledger): Extension<LedgerService>,
    Extension(customer): Extension<CustomerContext>,
) -> axum::response::Response {
    match ledger.delete_account(customer.customer()) {
        Ok(remaining) => (StatusCode::OK, Json(remaining)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delete_and_rename_for_a_replaced_customer_are_rejected() {
        let ledger = LedgerService::new();
        let cpf = TaxId::new("111");
        ledger.create_account(cpf.clone(), "Ana").unwrap();
        let ana = CustomerContext::new(ledger.resolve(&cpf).unwrap());
        ledger.delete_account(ana.customer()).unwrap();
        ledger.create_account(cpf.clone(), "Mallory").unwrap();
        let mallory = ledger.resolve(&cpf).unwrap();

        let res = update_account(
            Extension(ledger.clone()),
            Extension(ana.clone()),
            Ok(Json(dto::UpdateAccountRequest { name: "Ana".into() })),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = delete_account(Extension(ledger.clone()), Extension(ana)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let current = ledger.get_account(&mallory).unwrap();
        assert_eq!(current.name(), "Mallory");
    }
}
