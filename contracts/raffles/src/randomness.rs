use cosmwasm_std::{
    to_json_binary, Addr, Coin, Env, HexBinary, Order, Storage, Timestamp, Uint128, Uint256,
    WasmMsg,
};
use cw_storage_plus::Bound;
use nois::ProxyExecuteMsg;
use utils::types::CosmosMsg;

use crate::{
    error::ContractError,
    state::{Config, RandomnessJob, RANDOMNESS_JOBS, RAFFLE_JOB, TICKET_LEDGER},
};

/// `raffle-{id}` for the first request, `raffle-{id}-{attempt}` for the retries
pub fn job_id(raffle_id: u64, attempt: u32) -> String {
    if attempt == 0 {
        format!("raffle-{raffle_id}")
    } else {
        format!("raffle-{raffle_id}-{attempt}")
    }
}

/// The job the raffle is waiting on, if any
pub fn outstanding_job(
    storage: &dyn Storage,
    raffle_id: u64,
) -> Result<Option<(String, RandomnessJob)>, ContractError> {
    let Some(job_id) = RAFFLE_JOB.may_load(storage, raffle_id)? else {
        return Ok(None);
    };
    let job = RANDOMNESS_JOBS.load(storage, &job_id)?;
    Ok(Some((job_id, job)))
}

/// Records a new outstanding job for the raffle and builds the request sent to the nois proxy.
/// With `after` set, the proxy only answers once that time is reached.
pub fn request_randomness(
    storage: &mut dyn Storage,
    env: &Env,
    config: &Config,
    raffle_id: u64,
    attempt: u32,
    after: Option<Timestamp>,
) -> Result<(String, CosmosMsg), ContractError> {
    clear_job(storage, raffle_id)?;

    let job_id = job_id(raffle_id, attempt);
    RANDOMNESS_JOBS.save(
        storage,
        &job_id,
        &RandomnessJob {
            raffle_id,
            pending_since: after.unwrap_or(env.block.time).max(env.block.time),
            attempt,
        },
    )?;
    RAFFLE_JOB.save(storage, raffle_id, &job_id)?;

    // The job id is needed to know what randomness we are referring to upon reception in the callback.
    let msg = match after {
        Some(after) => ProxyExecuteMsg::GetRandomnessAfter {
            after,
            job_id: job_id.clone(),
        },
        None => ProxyExecuteMsg::GetNextRandomness {
            job_id: job_id.clone(),
        },
    };
    let request = WasmMsg::Execute {
        contract_addr: config.nois_proxy_addr.to_string(),
        msg: to_json_binary(&msg)?,
        funds: nois_funds(&config.nois_proxy_coin),
    };
    Ok((job_id, request.into()))
}

fn nois_funds(fee: &Coin) -> Vec<Coin> {
    if fee.amount.is_zero() {
        vec![]
    } else {
        vec![fee.clone()]
    }
}

/// Forgets the job the raffle was waiting on. A callback for it is then rejected.
pub fn clear_job(storage: &mut dyn Storage, raffle_id: u64) -> Result<(), ContractError> {
    if let Some(job_id) = RAFFLE_JOB.may_load(storage, raffle_id)? {
        RANDOMNESS_JOBS.remove(storage, &job_id);
        RAFFLE_JOB.remove(storage, raffle_id);
    }
    Ok(())
}

/// Reads the randomness as a big endian 256 bits integer and reduces it modulo the ticket count.
pub fn winner_slot(randomness: &[u8; 32], number_of_tickets: u32) -> Result<u32, ContractError> {
    if number_of_tickets == 0 {
        return Err(ContractError::ContractBug {});
    }
    let slot = Uint256::from_be_bytes(*randomness) % Uint256::from(number_of_tickets as u128);
    let slot = Uint128::try_from(slot).map_err(|_| ContractError::ContractBug {})?;
    u32::try_from(slot.u128()).map_err(|_| ContractError::ContractBug {})
}

/// The buyer of the purchase covering `slot`.
/// Purchases are keyed by their first slot, so this is the closest key at or below it.
pub fn ticket_owner(
    storage: &dyn Storage,
    raffle_id: u64,
    slot: u32,
) -> Result<Addr, ContractError> {
    TICKET_LEDGER
        .prefix(raffle_id)
        .range(
            storage,
            None,
            Some(Bound::inclusive(slot)),
            Order::Descending,
        )
        .next()
        .transpose()?
        .map(|(_, purchase)| purchase.buyer)
        .ok_or(ContractError::ContractBug {})
}

pub fn pick_winner(
    storage: &dyn Storage,
    raffle_id: u64,
    randomness: &HexBinary,
    number_of_tickets: u32,
) -> Result<Option<Addr>, ContractError> {
    if number_of_tickets == 0 {
        return Ok(None);
    }
    let randomness: [u8; 32] = randomness
        .to_array()
        .map_err(|_| ContractError::InvalidRandomness)?;
    let slot = winner_slot(&randomness, number_of_tickets)?;
    ticket_owner(storage, raffle_id, slot).map(Some)
}
