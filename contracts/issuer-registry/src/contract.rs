use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, ExistsResponse, InstantiateMsg, IssuerResponse, OwnerResponse, QueryMsg,
    StatusResponse, StoreConfigResponse,
};
use crate::state::{Config, Issuer, CONFIG, ISSUERS};

const CONTRACT_NAME: &str = "crates.io:issuer-registry";
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
        registry_logic: deps.api.addr_validate(&msg.registry_logic)?,
        certifier: deps.api.addr_validate(&msg.certifier)?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("registry_logic", config.registry_logic)
        .add_attribute("certifier", config.certifier))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Add {
            issuer_did,
            issuer_data,
            issuer_owner,
            status,
        } => execute_add(deps, info, issuer_did, issuer_data, issuer_owner, status),
        ExecuteMsg::ChangeData {
            issuer_did,
            issuer_data,
        } => execute_change_data(deps, info, issuer_did, issuer_data),
        ExecuteMsg::ChangeStatus { issuer_did, status } => {
            execute_change_status(deps, info, issuer_did, status)
        }
        ExecuteMsg::ChangeOwner {
            issuer_did,
            new_owner,
        } => execute_change_owner(deps, info, issuer_did, new_owner),
        ExecuteMsg::ChangeLogicContractAddress {
            new_logic_contract_address,
        } => execute_change_logic_contract_address(deps, info, new_logic_contract_address),
    }
}

fn ensure_registry_logic(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.registry_logic {
        return Err(ContractError::Forbidden {});
    }
    Ok(())
}

pub fn execute_add(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    issuer_data: String,
    issuer_owner: String,
    status: u64,
) -> Result<Response, ContractError> {
    ensure_registry_logic(deps.as_ref(), &info)?;

    if ISSUERS.has(deps.storage, &issuer_did) {
        return Err(ContractError::DuplicateKey { issuer_did });
    }

    let issuer = Issuer {
        issuer_data,
        issuer_owner: deps.api.addr_validate(&issuer_owner)?,
        status,
    };
    ISSUERS.save(deps.storage, &issuer_did, &issuer)?;

    Ok(Response::new()
        .add_attribute("method", "add")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("issuer_owner", issuer.issuer_owner)
        .add_attribute("status", status.to_string()))
}

/// Load, modify and save an existing issuer.
fn update_issuer<F>(deps: DepsMut, issuer_did: &str, action: F) -> Result<Issuer, ContractError>
where
    F: FnOnce(&mut Issuer),
{
    ISSUERS.update(deps.storage, issuer_did, |maybe_issuer| {
        let mut issuer = maybe_issuer.ok_or_else(|| ContractError::NotFound {
            issuer_did: issuer_did.to_string(),
        })?;
        action(&mut issuer);
        Ok(issuer)
    })
}

pub fn execute_change_data(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    issuer_data: String,
) -> Result<Response, ContractError> {
    ensure_registry_logic(deps.as_ref(), &info)?;

    update_issuer(deps, &issuer_did, |issuer| issuer.issuer_data = issuer_data)?;

    Ok(Response::new()
        .add_attribute("method", "change_data")
        .add_attribute("issuer_did", issuer_did))
}

pub fn execute_change_status(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    status: u64,
) -> Result<Response, ContractError> {
    ensure_registry_logic(deps.as_ref(), &info)?;

    update_issuer(deps, &issuer_did, |issuer| issuer.status = status)?;

    Ok(Response::new()
        .add_attribute("method", "change_status")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("status", status.to_string()))
}

pub fn execute_change_owner(
    deps: DepsMut,
    info: MessageInfo,
    issuer_did: String,
    new_owner: String,
) -> Result<Response, ContractError> {
    ensure_registry_logic(deps.as_ref(), &info)?;

    let new_owner = deps.api.addr_validate(&new_owner)?;
    let owner = new_owner.clone();
    update_issuer(deps, &issuer_did, |issuer| issuer.issuer_owner = owner)?;

    Ok(Response::new()
        .add_attribute("method", "change_owner")
        .add_attribute("issuer_did", issuer_did)
        .add_attribute("new_owner", new_owner))
}

pub fn execute_change_logic_contract_address(
    deps: DepsMut,
    info: MessageInfo,
    new_logic_contract_address: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.certifier {
        return Err(ContractError::Unauthorized {});
    }

    config.registry_logic = deps.api.addr_validate(&new_logic_contract_address)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "change_logic_contract_address")
        .add_attribute("registry_logic", config.registry_logic))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Get { issuer_did } => to_json_binary(&query_issuer(deps, issuer_did)?),
        QueryMsg::GetOwner { issuer_did } => to_json_binary(&query_owner(deps, issuer_did)?),
        QueryMsg::GetStatus { issuer_did } => to_json_binary(&query_status(deps, issuer_did)?),
        QueryMsg::Exists { issuer_did } => to_json_binary(&query_exists(deps, issuer_did)),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

fn load_issuer(deps: Deps, issuer_did: &str) -> StdResult<Issuer> {
    ISSUERS
        .may_load(deps.storage, issuer_did)?
        .ok_or_else(|| StdError::not_found(format!("issuer {issuer_did}")))
}

fn query_issuer(deps: Deps, issuer_did: String) -> StdResult<IssuerResponse> {
    let issuer = load_issuer(deps, &issuer_did)?;

    Ok(IssuerResponse {
        issuer_did,
        issuer_data: issuer.issuer_data,
        issuer_owner: issuer.issuer_owner,
        status: issuer.status,
    })
}

fn query_owner(deps: Deps, issuer_did: String) -> StdResult<OwnerResponse> {
    let issuer = load_issuer(deps, &issuer_did)?;
    Ok(OwnerResponse {
        owner: issuer.issuer_owner,
    })
}

fn query_status(deps: Deps, issuer_did: String) -> StdResult<StatusResponse> {
    let issuer = load_issuer(deps, &issuer_did)?;
    Ok(StatusResponse {
        status: issuer.status,
    })
}

fn query_exists(deps: Deps, issuer_did: String) -> ExistsResponse {
    ExistsResponse {
        exists: ISSUERS.has(deps.storage, &issuer_did),
    }
}

fn query_config(deps: Deps) -> StdResult<StoreConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(StoreConfigResponse {
        registry_logic: config.registry_logic,
        certifier: config.certifier,
    })
}
