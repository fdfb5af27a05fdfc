use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use finapi_core::{DomainError, DomainResult};
use finapi_ledger::{LedgerService, TaxId};

use crate::app::errors;
use crate::context::CustomerContext;

/// Request header carrying the caller's tax id.
pub const TAX_ID_HEADER: &str = "cpf";

#[derive(Clone)]
pub struct IdentityState {
    pub ledger: LedgerService,
}

/// Resolve the customer named by the `cpf` header before the handler runs.
///
/// Runs ahead of any body or query extraction, so an unknown customer is
/// reported even when the rest of the request is malformed.
pub async fn resolve_customer(
    State(state): State<IdentityState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let tax_id = match extract_tax_id(req.headers()) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let customer = match state.ledger.resolve(&tax_id) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::debug!(error = %e, "identity resolution failed");
            return errors::domain_error_to_response(e);
        }
    };

    req.extensions_mut().insert(CustomerContext::new(customer));

    next.run(req).await
}

fn extract_tax_id(headers: &HeaderMap) -> DomainResult<TaxId> {
    // A missing header behaves like an unknown customer.
    let header = headers.get(TAX_ID_HEADER).ok_or(DomainError::NotFound)?;

    let value = header
        .to_str()
        .map_err(|_| DomainError::validation("cpf header is not valid text"))?;

    Ok(TaxId::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn missing_header_is_not_found() {
        let headers = HeaderMap::new();
        assert_eq!(extract_tax_id(&headers).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn header_value_is_taken_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(TAX_ID_HEADER, HeaderValue::from_static("123.456.789-00"));
        assert_eq!(extract_tax_id(&headers).unwrap(), TaxId::new("123.456.789-00"));
    }

    #[test]
    fn opaque_header_bytes_are_a_validation_error() {
        let mut headers = HeaderMap::new();
        headers.insert(TAX_ID_HEADER, HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap());
        assert!(matches!(
            extract_tax_id(&headers).unwrap_err(),
            DomainError::Validation(_)
        ));
    }
}
