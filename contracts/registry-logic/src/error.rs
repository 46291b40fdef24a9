use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("{kind} {key} not found")]
    NotFound { kind: String, key: String },

    #[error("Issuer {issuer_did} already exists")]
    DuplicateKey { issuer_did: String },

    #[error("No contract registered under {contract_name}")]
    UnknownComponent { contract_name: String },

    #[error("Unknown status code {code}")]
    UnknownStatusCode { code: u64 },

    #[error("Status change not allowed")]
    StatusChangeNotAllowed {},
}

impl ContractError {
    pub fn issuer_not_found(issuer_did: &str) -> Self {
        ContractError::NotFound {
            kind: "Issuer".to_string(),
            key: issuer_did.to_string(),
        }
    }

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

// Queries surface registry errors as generic host errors.
impl From<ContractError> for StdError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::Std(err) => err,
            other => StdError::generic_err(other.to_string()),
        }
    }
}
