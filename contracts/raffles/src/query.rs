pub mod filters;

use cosmwasm_std::{
    to_json_binary, Addr, Deps, Env, Order, QueryRequest, StdResult, Storage, WasmQuery,
};
use cw721::{Cw721QueryMsg, OwnerOfResponse};
use cw_storage_plus::Bound;
#[cfg(feature = "sg")]
use sg721_base::QueryMsg as Sg721QueryMsg;

use crate::{
    error::ContractError,
    msg::{AllRafflesResponse, ConfigResponse, QueryFilters, RaffleResponse},
    query::filters::{contains_token_filter, owner_filter, state_filter},
    state::{
        get_raffle_state, load_raffle, RaffleInfo, CONFIG, RAFFLE_INFO, TICKET_LEDGER,
        USER_TICKETS,
    },
};

// settings for pagination
const MAX_LIMIT: u32 = 100;
const DEFAULT_LIMIT: u32 = 10;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        name: config.name,
        owner: config.owner,
        fee_addr: config.fee_addr,
        last_raffle_id: config.last_raffle_id.unwrap_or(0),
        minimum_raffle_duration: config.minimum_raffle_duration,
        minimum_raffle_timeout: config.minimum_raffle_timeout,
        max_tickets_per_raffle: config.max_tickets_per_raffle,
        raffle_fee: config.raffle_fee,
        lock: config.locks.lock,
        sudo_lock: config.locks.sudo_lock,
        nois_proxy_addr: config.nois_proxy_addr,
        nois_proxy_coin: config.nois_proxy_coin,
        creation_coins: config.creation_coins,
    })
}

pub fn query_raffle_info(deps: Deps, env: Env, raffle_id: u64) -> StdResult<RaffleResponse> {
    let raffle_info = load_raffle(deps.storage, raffle_id)?;
    Ok(RaffleResponse {
        raffle_id,
        raffle_state: get_raffle_state(&env, &raffle_info),
        raffle_info: Some(raffle_info),
    })
}

/// Raffles in ascending id order, `start_after` excluded.
/// With a `ticket_depositor` filter, only the raffles this address bought tickets for are scanned.
pub fn query_all_raffles(
    deps: Deps,
    env: Env,
    start_after: Option<u64>,
    limit: Option<u32>,
    filters: Option<QueryFilters>,
) -> StdResult<AllRafflesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let filters = filters.unwrap_or_default();

    let candidates: Box<dyn Iterator<Item = StdResult<(u64, RaffleInfo)>> + '_> =
        match &filters.ticket_depositor {
            Some(depositor) => {
                let depositor = deps.api.addr_validate(depositor)?;
                let raffle_ids = USER_TICKETS
                    .prefix(&depositor)
                    .keys(deps.storage, start, None, Order::Ascending)
                    .collect::<StdResult<Vec<u64>>>()?;
                Box::new(raffle_ids.into_iter().map(move |raffle_id| {
                    load_raffle(deps.storage, raffle_id).map(|raffle| (raffle_id, raffle))
                }))
            }
            None => Box::new(RAFFLE_INFO.range(deps.storage, start, None, Order::Ascending)),
        };

    let raffles = candidates
        .filter(|item| match item {
            Ok((_, raffle_info)) => {
                state_filter(&env, raffle_info, &filters)
                    && owner_filter(raffle_info, &filters)
                    && contains_token_filter(raffle_info, &filters)
            }
            Err(_) => true,
        })
        .take(limit)
        .map(|item| {
            item.map(|(raffle_id, raffle_info)| RaffleResponse {
                raffle_id,
                raffle_state: get_raffle_state(&env, &raffle_info),
                raffle_info: Some(raffle_info),
            })
        })
        .collect::<StdResult<Vec<RaffleResponse>>>()?;

    Ok(AllRafflesResponse { raffles })
}

/// Query all ticket owners within a raffle, one entry per ticket in purchase order
pub fn query_all_tickets(
    deps: Deps,
    _env: Env,
    raffle_id: u64,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<String>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let first_slot = match start_after {
        Some(slot) => match slot.checked_add(1) {
            Some(next) => next,
            None => return Ok(vec![]),
        },
        None => 0,
    };
    let start_key = purchase_covering(deps.storage, raffle_id, first_slot)?;

    let mut tickets = vec![];
    for item in TICKET_LEDGER.prefix(raffle_id).range(
        deps.storage,
        Some(Bound::inclusive(start_key)),
        None,
        Order::Ascending,
    ) {
        let (purchase_start, purchase) = item?;
        let from = purchase_start.max(first_slot);
        let to = purchase_start + purchase.count;
        for _ in from..to {
            if tickets.len() == limit {
                return Ok(tickets);
            }
            tickets.push(purchase.buyer.to_string());
        }
    }
    Ok(tickets)
}

// key of the purchase holding `slot`, 0 when the ledger has nothing at or below it
fn purchase_covering(storage: &dyn Storage, raffle_id: u64, slot: u32) -> StdResult<u32> {
    Ok(TICKET_LEDGER
        .prefix(raffle_id)
        .keys(storage, None, Some(Bound::inclusive(slot)), Order::Descending)
        .next()
        .transpose()?
        .unwrap_or(0))
}

/// Query the number of tickets a ticket_depositor bought in a specific raffle, designated by a raffle_id
pub fn query_ticket_count(
    deps: Deps,
    _env: Env,
    raffle_id: u64,
    ticket_depositor: String,
) -> StdResult<u32> {
    Ok(USER_TICKETS
        .may_load(
            deps.storage,
            (&deps.api.addr_validate(&ticket_depositor)?, raffle_id),
        )?
        .unwrap_or(0))
}

pub fn is_nft_owner(
    deps: Deps,
    sender: &Addr,
    nft_address: String,
    token_id: String,
) -> Result<(), ContractError> {
    let owner_response: OwnerOfResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: nft_address,
            msg: to_json_binary(&Cw721QueryMsg::OwnerOf {
                token_id,
                include_expired: None,
            })?,
        }))?;

    if owner_response.owner != *sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

#[cfg(feature = "sg")]
pub fn is_sg721_owner(
    deps: Deps,
    sender: &Addr,
    nft_address: String,
    token_id: String,
) -> Result<(), ContractError> {
    let owner_response: OwnerOfResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: nft_address,
            msg: to_json_binary(&Sg721QueryMsg::OwnerOf {
                token_id,
                include_expired: None,
            })?,
        }))?;

    if owner_response.owner != *sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

#[cfg(not(feature = "sg"))]
pub fn is_sg721_owner(
    deps: Deps,
    sender: &Addr,
    nft_address: String,
    token_id: String,
) -> Result<(), ContractError> {
    is_nft_owner(deps, sender, nft_address, token_id)
}
