use serde::Deserialize;

use finapi_ledger::Amount;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(alias = "taxId")]
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub description: Option<String>,
    pub amount: Amount,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: Amount,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    /// `YYYY-MM-DD`; absent or unparseable values match no entries.
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_account_accepts_tax_id_alias() {
        let a: CreateAccountRequest =
            serde_json::from_str(r#"{"cpf":"111","name":"Ana"}"#).unwrap();
        let b: CreateAccountRequest =
            serde_json::from_str(r#"{"taxId":"111","name":"Ana"}"#).unwrap();
        assert_eq!(a.cpf, b.cpf);
    }

    #[test]
    fn deposit_description_is_optional() {
        let body: DepositRequest = serde_json::from_str(r#"{"amount":12.5}"#).unwrap();
        assert_eq!(body.amount, 12.5);
        assert!(body.description.is_none());
    }
}
