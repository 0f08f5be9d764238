use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, HexBinary, MessageInfo,
    Order, StdError, StdResult, Timestamp, WasmMsg,
};
use cw_storage_plus::{Item, Map};
use nois::{NoisCallback, ProxyExecuteMsg};
use utils::types::Response;

/// Randomness published by the fake proxy. Its value is 1 modulo 2 and 2 modulo 3.
pub const DEFAULT_RANDOMNESS: &str =
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa115";

#[cw_serde]
pub struct Config {
    fee: Coin,
    auto_respond: bool,
}

#[cw_serde]
pub struct PendingJob {
    pub requester: Addr,
    pub after: Option<Timestamp>,
}

const CONFIG: Item<Config> = Item::new("config");
const JOBS: Map<String, PendingJob> = Map::new("jobs");

#[cw_serde]
pub struct InstantiateMsg {
    pub fee: Coin,
    /// Answers `GetNextRandomness` in the same transaction
    pub auto_respond: bool,
}

#[cw_serde]
pub enum QueryMsg {
    PendingJobs {},
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, StdError> {
    CONFIG.save(
        deps.storage,
        &Config {
            fee: msg.fee,
            auto_respond: msg.auto_respond,
        },
    )?;
    Ok(Response::new())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, StdError> {
    match msg {
        QueryMsg::PendingJobs {} => to_json_binary(
            &JOBS
                .keys(deps.storage, None, None, Order::Ascending)
                .collect::<StdResult<Vec<String>>>()?,
        ),
    }
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ProxyExecuteMsg,
) -> Result<Response, StdError> {
    let config = CONFIG.load(deps.storage)?;
    if info.funds != vec![config.fee.clone()] {
        return Err(StdError::generic_err("Nois not enough funds sent to proxy"));
    }
    match msg {
        ProxyExecuteMsg::GetNextRandomness { job_id } => {
            if config.auto_respond {
                let randomness = HexBinary::from_hex(DEFAULT_RANDOMNESS)?;
                return Ok(Response::new().add_message(callback_message(
                    &info.sender,
                    job_id,
                    env.block.time,
                    randomness,
                )?));
            }
            register_job(deps, info.sender, job_id, None)
        }
        ProxyExecuteMsg::GetRandomnessAfter { after, job_id } => {
            register_job(deps, info.sender, job_id, Some(after))
        }
    }
}

fn register_job(
    deps: DepsMut,
    requester: Addr,
    job_id: String,
    after: Option<Timestamp>,
) -> Result<Response, StdError> {
    JOBS.save(deps.storage, job_id.clone(), &PendingJob { requester, after })?;
    Ok(Response::new()
        .add_attribute("action", "register_job")
        .add_attribute("job_id", job_id))
}

/// The message the proxy sends back to the requesting contract
pub fn callback_message(
    requester: &Addr,
    job_id: String,
    published: Timestamp,
    randomness: HexBinary,
) -> StdResult<CosmosMsg<sg_std::StargazeMsgWrapper>> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: requester.to_string(),
        msg: to_json_binary(&raffles::msg::ExecuteMsg::NoisReceive {
            callback: NoisCallback {
                job_id,
                published,
                randomness,
            },
        })?,
        funds: vec![],
    }))
}
