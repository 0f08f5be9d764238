use cosmwasm_std::{Addr, Coin, Timestamp};
use utils::state::AssetInfo;

use crate::common_setup::app::StargazeApp;

pub struct CreateRaffleParams<'a> {
    pub app: &'a mut StargazeApp,
    pub raffle_contract_addr: Addr,
    pub owner_addr: Addr,
    pub creation_fee: Vec<Coin>,
    pub ticket_price: u128,
    pub raffle_nfts: Vec<AssetInfo>,
    pub raffle_start_timestamp: Option<Timestamp>,
    pub duration: Option<u64>,
    pub max_ticket_per_addr: Option<u32>,
    pub max_tickets: Option<u32>,
    pub autocycle: Option<bool>,
}

pub struct PurchaseTicketsParams<'a> {
    pub app: &'a mut StargazeApp,
    pub raffle_contract_addr: Addr,
    pub msg_senders: Vec<Addr>,
    pub raffle_id: u64,
    pub num_tickets: u32,
    pub funds_send: Vec<Coin>,
}

pub struct DetermineWinnerParams<'a> {
    pub app: &'a mut StargazeApp,
    pub raffle_contract_addr: Addr,
    pub sender: Addr,
    pub raffle_id: u64,
    pub funds_send: Vec<Coin>,
}
