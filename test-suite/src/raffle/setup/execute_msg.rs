use anyhow::Error as anyhow_error;
use cosmwasm_std::{coin, Addr, HexBinary};
use cw_multi_test::{AppResponse, Executor};
use nois::NoisCallback;
use raffles::{msg::ExecuteMsg as RaffleExecuteMsg, state::RaffleOptionsMsg};
use utils::state::{AssetInfo, NATIVE_DENOM};

use crate::common_setup::{app::StargazeApp, msg::RaffleContracts};

use super::test_msgs::{CreateRaffleParams, DetermineWinnerParams, PurchaseTicketsParams};

// Template for creating raffles
pub fn create_raffle_function(params: CreateRaffleParams) -> Result<AppResponse, anyhow_error> {
    params.app.execute_contract(
        params.owner_addr.clone(),
        params.raffle_contract_addr.clone(),
        &RaffleExecuteMsg::CreateRaffle {
            owner: None,
            assets: params.raffle_nfts,
            raffle_options: RaffleOptionsMsg {
                raffle_start_timestamp: params.raffle_start_timestamp,
                raffle_duration: params.duration,
                max_ticket_number: params.max_tickets,
                max_ticket_per_address: params.max_ticket_per_addr,
                ..Default::default()
            },
            raffle_ticket_price: AssetInfo::coin(params.ticket_price, NATIVE_DENOM),
            autocycle: params.autocycle,
        },
        &params.creation_fee,
    )
}

pub fn buy_tickets_template(params: PurchaseTicketsParams) -> Result<AppResponse, anyhow_error> {
    // every sender buys the same amount of tickets, the first failure is returned
    let mut last_response = None;
    for sender in &params.msg_senders {
        let response = params.app.execute_contract(
            sender.clone(),
            params.raffle_contract_addr.clone(),
            &RaffleExecuteMsg::BuyTicket {
                raffle_id: params.raffle_id,
                ticket_count: params.num_tickets,
                sent_assets: AssetInfo::Coin(params.funds_send[0].clone()),
            },
            &params.funds_send,
        )?;
        last_response = Some(response);
    }
    last_response.ok_or_else(|| anyhow::anyhow!("no ticket buyer"))
}

pub fn determine_winner_template(
    params: DetermineWinnerParams,
) -> Result<AppResponse, anyhow_error> {
    params.app.execute_contract(
        params.sender,
        params.raffle_contract_addr,
        &RaffleExecuteMsg::DetermineWinner {
            raffle_id: params.raffle_id,
        },
        &params.funds_send,
    )
}

/// The nois proxy answering a pending job
pub fn deliver_randomness(
    app: &mut StargazeApp,
    contracts: &RaffleContracts,
    job_id: &str,
    randomness: &str,
) -> Result<AppResponse, anyhow_error> {
    let published = app.block_info().time;
    app.execute_contract(
        contracts.nois.clone(),
        contracts.raffle.clone(),
        &RaffleExecuteMsg::NoisReceive {
            callback: NoisCallback {
                job_id: job_id.to_string(),
                published,
                randomness: HexBinary::from_hex(randomness)?,
            },
        },
        &[],
    )
}

pub fn claim_raffle(
    app: &mut StargazeApp,
    contracts: &RaffleContracts,
    sender: &Addr,
    raffle_id: u64,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        sender.clone(),
        contracts.raffle.clone(),
        &RaffleExecuteMsg::ClaimRaffle { raffle_id },
        &[],
    )
}

pub fn ticket_funds(num_tickets: u32, ticket_price: u128) -> Vec<cosmwasm_std::Coin> {
    vec![coin(ticket_price * num_tickets as u128, NATIVE_DENOM)]
}
