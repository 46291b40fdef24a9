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

    #[error("Issuer {issuer_did} not found")]
    NotFound { issuer_did: String },

    #[error("Issuer {issuer_did} already exists")]
    DuplicateKey { issuer_did: String },
}
