use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Map;
use registry_shared::issuer::{IssuerExecuteMsg, IssuerResponse};
use registry_shared::schema::{SchemaExecuteMsg, SchemaResponse};
use registry_shared::{IssuerStatus, IssuerStore, SchemaStatus, SchemaStore, StoreContract};

use crate::auth::{is_owner_or_certifier, status_transition_allowed};
use crate::directory;
use crate::error::ContractError;
use crate::msg::{
    BindingView, ConfigResponse, ContractAddressResponse, ContractsResponse, ExecuteMsg,
    InstantiateMsg, IssuerView, QueryMsg, SchemaView, StatusCode, StatusCodesResponse,
};
use crate::state::{Config, CONFIG, ISSUER_STATUSES, SCHEMA_STATUSES};

const CONTRACT_NAME: &str = "crates.io:registry-logic";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        certifier: deps.api.addr_validate(&msg.certifier)?,
    };
    CONFIG.save(deps.storage, &config)?;

    for status in IssuerStatus::ALL {
        ISSUER_STATUSES.save(deps.storage, status.code(), &status.label().to_string())?;
    }
    for status in SchemaStatus::ALL {
        SCHEMA_STATUSES.save(deps.storage, status.code(), &status.label().to_string())?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("certifier", config.certifier))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // codes 1 and 2 mean the same thing for issuers, schemas and bindings
    let active = SchemaStatus::Active.code();
    let deprecated = SchemaStatus::Deprecated.code();

    match msg {
        ExecuteMsg::UpdateContractAddress {
            contract_name,
            address,
        } => execute_update_contract_address(deps, info, contract_name, address),

        ExecuteMsg::AddSchema { schema_data } => execute_add_schema(deps, info, schema_data),
        ExecuteMsg::SetSchemaActive { schema_id } => {
            execute_set_schema_status(deps, info, schema_id, active)
        }
        ExecuteMsg::SetSchemaDeprecated { schema_id } => {
            execute_set_schema_status(deps, info, schema_id, deprecated)
        }
        ExecuteMsg::SetSchemaStatus { schema_id, status } => {
            execute_set_schema_status(deps, info, schema_id, status)
        }

        ExecuteMsg::AddIssuer {
            issuer_did,
            issuer_data,
        } => execute_add_issuer(deps, info, issuer_did, issuer_data),
        ExecuteMsg::SetIssuerData {
            issuer_did,
            issuer_data,
        } => execute_set_issuer_data(deps, info, issuer_did, issuer_data),
        ExecuteMsg::SetIssuerActive { issuer_did } => {
            execute_set_issuer_status(deps, info, issuer_did, active)
        }
        ExecuteMsg::SetIssuerDeprecated { issuer_did } => {
            execute_set_issuer_status(deps, info, issuer_did, deprecated)
        }
        ExecuteMsg::SetIssuerStatus { issuer_did, status } => {
            execute_set_issuer_status(deps, info, issuer_did, status)
        }
        ExecuteMsg::SetIssuerOwner {
            issuer_did,
            new_owner,
        } => execute_set_issuer_owner(deps, info, issuer_did, new_owner),

        ExecuteMsg::BindIssuerSchema {
            issuer_did,
            schema_id,
        } => execute_bind_issuer_schema(deps, info, issuer_did, schema_id),
        ExecuteMsg::SetBindingActive {
            issuer_did,
            schema_id,
        } => execute_set_binding_status(deps, info, issuer_did, schema_id, active),
        ExecuteMsg::SetBindingDeprecated {
            issuer_did,
            schema_id,
        } => execute_set_binding_status(deps, info, issuer_did, schema_id, deprecated),
        ExecuteMsg::SetBindingStatus {
            issuer_did,
            schema_id,
            status,
        } => execute_set_binding_status(deps, info, issuer_did, schema_id, status),
    }
}

/// Validate a requested issuer status against the issuer status table.
fn issuer_status(deps: Deps, code: u64) -> Result<IssuerStatus, ContractError> {
    if !ISSUER_STATUSES.has(deps.storage, code) {
        return Err(ContractError::UnknownStatusCode { code });
    }
    IssuerStatus::from_code(code).ok_or(ContractError::UnknownStatusCode { code })
}

/// Validate a requested schema or binding status against the schema status table.
fn schema_status(deps: Deps, code: u64) -> Result<SchemaStatus, ContractError> {
    if !SCHEMA_STATUSES.has(deps.storage, code) {
        return Err(ContractError::UnknownStatusCode { code });
    }
    SchemaStatus::from_code(code).ok_or(ContractError::UnknownStatusCode { code })
}

fn load_issuer(
    deps: Deps,
    store: &IssuerStore,
    issuer_did: &str,
) -> Result<IssuerResponse, ContractError> {
    if !store.exists(&deps.querier, issuer_did)? {
        return Err(ContractError::issuer_not_found(issuer_did));
    }
    Ok(store.issuer(&deps.querier, issuer_did)?)
}

fn load_schema(
    deps: Deps,
    store: &SchemaStore,
    schema_id: u64,
) -> Result<SchemaResponse, ContractError> {
    if !store.exists(&deps.querier, schema_id)? {
        return Err(ContractError::schema_not_found(schema_id));
    }
    Ok(store.schema(&deps.querier, schema_id)?)
}

/// Status currently recorded for an issuer, as an enum.
fn current_status(issuer: &IssuerResponse) -> Result<IssuerStatus, ContractError> {
    IssuerStatus::from_code(issuer.status).ok_or(ContractError::UnknownStatusCode {
        code: issuer.status,
    })
}

pub fn execute_update_contract_address(
    deps: DepsMut,
    info: MessageInfo,
    contract_name: String,
    address: String,
) -> Result<Response, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    directory::set_address(deps.storage, &info.sender, &contract_name, &address)?;

    Ok(Response::new()
        .add_attribute("method", "update_contract_address")
        .add_attribute("contract_name", contract_name)
        .add_attribute("address", address))
}

pub fn execute_add_schema(
    deps: DepsMut,
    info: MessageInfo,
    schema_data: String,
) -> Result<Response, ContractError> {
    let store = directory::schema_store(deps.storage)?;

    // the store assigns this id when it executes the dispatched add
    let schema_id = store.next_schema_id(&deps.querier)?;
    let msg = store.call(&SchemaExecuteMsg::Add {
        schema_data,
        schema_owner: info.sender.to_string(),
        status: SchemaStatus::Active.code(),
    })?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "add_schema")
        .add_attribute("schema_id", schema_id.to_string())
        .add_attribute("schema_owner", info.sender))
}

pub fn execute_set_schema_status(
    deps: DepsMut,
    info: MessageInfo,
    schema_id: u64,
    status: u64,
) -> Result<Response, ContractError> {
    let requested = schema_status(deps.as_ref(), status)?;
    let store = directory::schema_store(deps.storage)?;
    let schema = load_schema(deps.as_ref(), &store, schema_id)?;

    let config = CONFIG.load(deps.storage)?;
    if !is_owner_or_certifier(&info.sender, &schema.schema_owner, &config.certifier) {
        return Err(ContractError::StatusChangeNotAllowed {});
    }

    let msg = store.call(&SchemaExecuteMsg::ChangeStatus {
        schema_id,
        status: requested.code(),
    })?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "set_schema_status")
        .add_attribute("schema_id", schema_id.to_string())
        .add_attribute("status", requested.label())
        .add_attribute("sender", info.sender))
}

pub fn execute_add_issuer(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    issuer_data: String,
) -> Result<Response, ContractError> {
    let store = directory::issuer_store(deps.storage)?;

    if store.exists(&deps.querier, &issuer_did)? {
        return Err(ContractError::DuplicateKey { issuer_did });
    }

    let msg = store.call(&IssuerExecuteMsg::Add {
        issuer_did: issuer_did.clone(),
        issuer_data,
        issuer_owner: info.sender.to_string(),
        status: IssuerStatus::Active.code(),
    })?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "add_issuer")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("issuer_owner", info.sender))
}

pub fn execute_set_issuer_data(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    issuer_data: String,
) -> Result<Response, ContractError> {
    let store = directory::issuer_store(deps.storage)?;
    let issuer = load_issuer(deps.as_ref(), &store, &issuer_did)?;

    let config = CONFIG.load(deps.storage)?;
    if !is_owner_or_certifier(&info.sender, &issuer.issuer_owner, &config.certifier) {
        return Err(ContractError::StatusChangeNotAllowed {});
    }

    let msg = store.call(&IssuerExecuteMsg::ChangeData {
        issuer_did: issuer_did.clone(),
        issuer_data,
    })?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "set_issuer_data")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("sender", info.sender))
}

pub fn execute_set_issuer_status(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    status: u64,
) -> Result<Response, ContractError> {
    let requested = issuer_status(deps.as_ref(), status)?;
    let store = directory::issuer_store(deps.storage)?;
    let issuer = load_issuer(deps.as_ref(), &store, &issuer_did)?;
    let current = current_status(&issuer)?;

    let config = CONFIG.load(deps.storage)?;
    if !status_transition_allowed(
        &info.sender,
        &issuer.issuer_owner,
        &config.certifier,
        current,
        requested,
    ) {
        return Err(ContractError::StatusChangeNotAllowed {});
    }

    let msg = store.call(&IssuerExecuteMsg::ChangeStatus {
        issuer_did: issuer_did.clone(),
        status: requested.code(),
    })?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "set_issuer_status")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("from", current.label())
        .add_attribute("to", requested.label())
        .add_attribute("sender", info.sender))
}

pub fn execute_set_issuer_owner(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    new_owner: String,
) -> Result<Response, ContractError> {
    let new_owner = deps.api.addr_validate(&new_owner)?;
    let store = directory::issuer_store(deps.storage)?;
    let issuer = load_issuer(deps.as_ref(), &store, &issuer_did)?;

    let config = CONFIG.load(deps.storage)?;
    if !is_owner_or_certifier(&info.sender, &issuer.issuer_owner, &config.certifier) {
        return Err(ContractError::StatusChangeNotAllowed {});
    }

    let msg = store.call(&IssuerExecuteMsg::ChangeOwner {
        issuer_did: issuer_did.clone(),
        new_owner: new_owner.to_string(),
    })?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "set_issuer_owner")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("previous_owner", issuer.issuer_owner)
        .add_attribute("new_owner", new_owner))
}

pub fn execute_bind_issuer_schema(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    schema_id: u64,
) -> Result<Response, ContractError> {
    let issuers = directory::issuer_store(deps.storage)?;
    let schemas = directory::schema_store(deps.storage)?;

    let issuer = load_issuer(deps.as_ref(), &issuers, &issuer_did)?;
    if !schemas.exists(&deps.querier, schema_id)? {
        return Err(ContractError::schema_not_found(schema_id));
    }

    let config = CONFIG.load(deps.storage)?;
    if !is_owner_or_certifier(&info.sender, &issuer.issuer_owner, &config.certifier) {
        return Err(ContractError::StatusChangeNotAllowed {});
    }

    let msg = schemas.call(&SchemaExecuteMsg::Bind {
        issuer_did: issuer_did.clone(),
        schema_id,
        status: SchemaStatus::Active.code(),
    })?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "bind_issuer_schema")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("schema_id", schema_id.to_string())
        .add_attribute("sender", info.sender))
}

/// Binding transitions are judged against the issuer's owner and status, so
/// an issuer in conflict also freezes its bindings for the owner.
pub fn execute_set_binding_status(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    schema_id: u64,
    status: u64,
) -> Result<Response, ContractError> {
    let requested = schema_status(deps.as_ref(), status)?;
    let issuers = directory::issuer_store(deps.storage)?;
    let schemas = directory::schema_store(deps.storage)?;

    let issuer = load_issuer(deps.as_ref(), &issuers, &issuer_did)?;
    let binding = schemas.verify_binding(&deps.querier, &issuer_did, schema_id)?;
    if !binding.binding_exists {
        return Err(ContractError::binding_not_found(&issuer_did, schema_id));
    }
    let current = current_status(&issuer)?;

    let config = CONFIG.load(deps.storage)?;
    if !status_transition_allowed(
        &info.sender,
        &issuer.issuer_owner,
        &config.certifier,
        current,
        requested.into(),
    ) {
        return Err(ContractError::StatusChangeNotAllowed {});
    }

    let msg = schemas.call(&SchemaExecuteMsg::ChangeBindingStatus {
        issuer_did: issuer_did.clone(),
        schema_id,
        status: requested.code(),
    })?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "set_binding_status")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("schema_id", schema_id.to_string())
        .add_attribute("status", requested.label())
        .add_attribute("sender", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetSchema { schema_id } => to_json_binary(&query_schema(deps, schema_id)?),
        QueryMsg::GetIssuer { issuer_did } => to_json_binary(&query_issuer(deps, issuer_did)?),
        QueryMsg::VerifyBinding {
            issuer_did,
            schema_id,
        } => to_json_binary(&query_verify_binding(deps, issuer_did, schema_id)?),
        QueryMsg::ContractAddress { contract_name } => {
            to_json_binary(&query_contract_address(deps, contract_name)?)
        }
        QueryMsg::Contracts {} => to_json_binary(&query_contracts(deps)?),
        QueryMsg::StatusCodes {} => to_json_binary(&query_status_codes(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn status_label(deps: Deps, table: &Map<u64, String>, code: u64) -> StdResult<String> {
    let label = table
        .may_load(deps.storage, code)?
        .ok_or(ContractError::UnknownStatusCode { code })?;
    Ok(label)
}

fn query_schema(deps: Deps, schema_id: u64) -> StdResult<SchemaView> {
    let store = directory::schema_store(deps.storage)?;
    let schema = load_schema(deps, &store, schema_id)?;

    Ok(SchemaView {
        schema_id,
        schema_data: schema.schema_data,
        schema_owner: schema.schema_owner,
        status: status_label(deps, &SCHEMA_STATUSES, schema.status)?,
    })
}

fn query_issuer(deps: Deps, issuer_did: String) -> StdResult<IssuerView> {
    let store = directory::issuer_store(deps.storage)?;
    let issuer = load_issuer(deps, &store, &issuer_did)?;

    Ok(IssuerView {
        issuer_did,
        issuer_data: issuer.issuer_data,
        issuer_owner: issuer.issuer_owner,
        status: status_label(deps, &ISSUER_STATUSES, issuer.status)?,
    })
}

fn query_verify_binding(deps: Deps, issuer_did: String, schema_id: u64) -> StdResult<BindingView> {
    let store = directory::schema_store(deps.storage)?;
    let binding = store.verify_binding(&deps.querier, &issuer_did, schema_id)?;

    let status_label = if binding.binding_exists {
        Some(status_label(deps, &SCHEMA_STATUSES, binding.status)?)
    } else {
        None
    };

    Ok(BindingView {
        binding_exists: binding.binding_exists,
        status: binding.status,
        status_label,
    })
}

fn query_contract_address(deps: Deps, contract_name: String) -> StdResult<ContractAddressResponse> {
    let address = directory::resolve(deps.storage, &contract_name)?;
    Ok(ContractAddressResponse {
        contract_name,
        address,
    })
}

fn query_contracts(deps: Deps) -> StdResult<ContractsResponse> {
    let contracts = directory::entries(deps.storage)?
        .into_iter()
        .map(|(contract_name, address)| ContractAddressResponse {
            contract_name,
            address,
        })
        .collect();

    Ok(ContractsResponse { contracts })
}

fn status_codes(deps: Deps, table: &Map<u64, String>) -> StdResult<Vec<StatusCode>> {
    table
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(code, label)| StatusCode { code, label }))
        .collect()
}

fn query_status_codes(deps: Deps) -> StdResult<StatusCodesResponse> {
    Ok(StatusCodesResponse {
        issuer_statuses: status_codes(deps, &ISSUER_STATUSES)?,
        schema_statuses: status_codes(deps, &SCHEMA_STATUSES)?,
    })
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        certifier: config.certifier,
    })
}
