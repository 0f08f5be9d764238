#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coin, to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, StdResult,
};

use crate::{
    error::ContractError,
    execute::{
        execute_buy_tickets, execute_cancel_raffle, execute_claim, execute_create_raffle,
        execute_determine_winner, execute_modify_raffle, execute_receive, execute_receive_nois,
        execute_sudo_toggle_lock, execute_toggle_lock, execute_update_config,
        execute_update_randomness, validate_creation_coins, validate_max_tickets,
        validate_minimum_duration,
    },
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query::{
        query_all_raffles, query_all_tickets, query_config, query_raffle_info, query_ticket_count,
    },
    state::{
        Config, CONFIG, MAX_TICKET_NUMBER, MINIMUM_RAFFLE_DURATION, MINIMUM_RAFFLE_TIMEOUT,
        STATIC_RAFFLE_CREATION_FEE,
    },
    utils::validate_fee,
};
use utils::{
    state::{is_valid_name, Locks, SudoMsg, NATIVE_DENOM},
    types::Response,
};

use cw2::set_contract_version;

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let nois_proxy_addr = deps
        .api
        .addr_validate(&msg.nois_proxy_addr)
        .map_err(|_| ContractError::InvalidProxyAddress)?;

    // define the accepted fee coins
    let creation_coins = match msg.creation_coins {
        Some(cc_msg) => cc_msg,
        None => vec![coin(STATIC_RAFFLE_CREATION_FEE, NATIVE_DENOM)],
    };
    validate_creation_coins(&creation_coins)?;

    // fee decimal range
    validate_fee(msg.raffle_fee)?;
    // valid name
    if !is_valid_name(&msg.name) {
        return Err(ContractError::InvalidName {});
    }
    let minimum_raffle_duration = msg
        .minimum_raffle_duration
        .unwrap_or(MINIMUM_RAFFLE_DURATION);
    validate_minimum_duration(minimum_raffle_duration)?;
    let max_tickets_per_raffle = msg.max_ticket_number.unwrap_or(MAX_TICKET_NUMBER);
    validate_max_tickets(max_tickets_per_raffle)?;

    // define internal contract
    let config = Config {
        name: msg.name,
        owner: deps
            .api
            .addr_validate(&msg.owner.unwrap_or_else(|| info.sender.to_string()))?,
        fee_addr: deps
            .api
            .addr_validate(&msg.fee_addr.unwrap_or_else(|| info.sender.to_string()))?,
        last_raffle_id: None,
        minimum_raffle_duration,
        minimum_raffle_timeout: msg
            .minimum_raffle_timeout
            .unwrap_or(MINIMUM_RAFFLE_TIMEOUT),
        max_tickets_per_raffle: Some(max_tickets_per_raffle),
        raffle_fee: msg.raffle_fee,
        locks: Locks {
            lock: false,
            sudo_lock: false,
        },
        nois_proxy_addr,
        nois_proxy_coin: msg.nois_proxy_coin,
        creation_coins,
    };

    CONFIG.save(deps.storage, &config)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "init")
        .add_attribute("contract", "raffle")
        .add_attribute("owner", config.owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateRaffle {
            owner,
            assets,
            raffle_options,
            raffle_ticket_price,
            autocycle,
        } => execute_create_raffle(
            deps,
            env,
            info,
            owner,
            assets,
            raffle_ticket_price,
            raffle_options,
            autocycle,
        ),
        ExecuteMsg::CancelRaffle { raffle_id } => execute_cancel_raffle(deps, env, info, raffle_id),
        ExecuteMsg::ModifyRaffle {
            raffle_id,
            raffle_ticket_price,
            raffle_options,
        } => execute_modify_raffle(
            deps,
            env,
            info,
            raffle_id,
            raffle_ticket_price,
            raffle_options,
        ),
        ExecuteMsg::BuyTicket {
            raffle_id,
            ticket_count,
            sent_assets,
        } => execute_buy_tickets(deps, env, info, raffle_id, ticket_count, sent_assets),
        ExecuteMsg::ReceiveNft(msg) => execute_receive(deps, env, info, msg),
        ExecuteMsg::DetermineWinner { raffle_id } => {
            execute_determine_winner(deps, env, info, raffle_id)
        }
        ExecuteMsg::NoisReceive { callback } => execute_receive_nois(deps, env, info, callback),
        ExecuteMsg::ClaimRaffle { raffle_id } => execute_claim(deps, env, info, raffle_id),
        ExecuteMsg::ToggleLock { lock } => execute_toggle_lock(deps, env, info, lock),
        ExecuteMsg::UpdateConfig {
            name,
            owner,
            fee_addr,
            minimum_raffle_duration,
            minimum_raffle_timeout,
            max_tickets_per_raffle,
            raffle_fee,
            nois_proxy_addr,
            nois_proxy_coin,
            creation_coins,
        } => execute_update_config(
            deps,
            env,
            info,
            name,
            owner,
            fee_addr,
            minimum_raffle_duration,
            minimum_raffle_timeout,
            max_tickets_per_raffle,
            raffle_fee,
            nois_proxy_addr,
            nois_proxy_coin,
            creation_coins,
        ),
        ExecuteMsg::UpdateRandomness { raffle_id } => {
            execute_update_randomness(deps, env, info, raffle_id)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::RaffleInfo { raffle_id } => {
            to_json_binary(&query_raffle_info(deps, env, raffle_id)?)?
        }
        QueryMsg::AllRaffles {
            start_after,
            limit,
            filters,
        } => to_json_binary(&query_all_raffles(deps, env, start_after, limit, filters)?)?,
        QueryMsg::AllTickets {
            raffle_id,
            start_after,
            limit,
        } => to_json_binary(&query_all_tickets(
            deps,
            env,
            raffle_id,
            start_after,
            limit,
        )?)?,
        QueryMsg::TicketCount { owner, raffle_id } => {
            to_json_binary(&query_ticket_count(deps, env, raffle_id, owner)?)?
        }
    };
    Ok(response)
}

// sudo entry point for governance override
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn sudo(deps: DepsMut, env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::ToggleLock { lock } => execute_sudo_toggle_lock(deps, env, lock),
    }
}
