use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Forbidden: caller is not the registry logic contract")]
    Forbidden {},

    #[error("{kind} {key} not found")]
    NotFound { kind: String, key: String },
}

impl ContractError {
    pub fn schema_not_found(schema_id: u64) -> Self {
        ContractError::NotFound {
            kind: "Schema".to_string(),
            key: schema_id.to_string(),
        }
    }

    pub fn binding_not_found(issuer_did: &str, schema_id: u64) -> Self {
        ContractError::NotFound {
            kind: "Binding".to_string(),
            key: format!("{issuer_did}/{schema_id}"),
        }
    }
}
