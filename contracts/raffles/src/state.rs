use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Decimal, Env, HexBinary, StdResult, Storage, Timestamp};
use cw_storage_plus::{Item, Map};
use utils::state::{AssetInfo, Locks};

pub const CONFIG_KEY: &str = "config";
pub const CONFIG: Item<Config> = Item::new(CONFIG_KEY);
pub const MAX_TICKET_NUMBER: u32 = 100000; // The maximum amount of tickets () that can be in a raffle
pub const MINIMUM_RAFFLE_DURATION: u64 = 1; // default minimum raffle duration, in seconds
pub const MINIMUM_RAFFLE_TIMEOUT: u64 = 120; // default minimum wait for randomness after closing, in seconds
pub const RANDOMNESS_RETRY_WINDOW: u64 = 600; // an outstanding randomness job can be replaced after this many seconds
pub const STATIC_RAFFLE_CREATION_FEE: u128 = 100; // default static tokens required to create raffle

pub const RAFFLE_INFO: Map<u64, RaffleInfo> = Map::new("raffle_info");
/// One entry per purchase, keyed by the first slot it occupies
pub const TICKET_LEDGER: Map<(u64, u32), TicketPurchase> = Map::new("ticket_ledger");
pub const USER_TICKETS: Map<(&Addr, u64), u32> = Map::new("user_tickets");
/// Outstanding randomness requests, keyed by job id
pub const RANDOMNESS_JOBS: Map<&str, RandomnessJob> = Map::new("randomness_jobs");
/// The job currently awaited by each raffle
pub const RAFFLE_JOB: Map<u64, String> = Map::new("raffle_job");

#[cw_serde]
pub struct Config {
    /// The name of the contract
    pub name: String,
    /// The owner address of the contract
    pub owner: Addr,
    /// The address to recieve all fees generated by the contract
    pub fee_addr: Addr,
    /// The most recent raffle id
    pub last_raffle_id: Option<u64>,
    /// The minimum duration, in seconds, in which users can buy raffle tickets
    pub minimum_raffle_duration: u64,
    /// The minimum time, in seconds, the oracle is given after a raffle closes
    pub minimum_raffle_timeout: u64,
    // The maximum number of tickets available in any 1 raffle
    pub max_tickets_per_raffle: Option<u32>,
    /// A % cut of all raffle fee's generated to go to the fee_addr
    pub raffle_fee: Decimal,
    /// locks the contract from new raffles being created and tickets being sold
    pub locks: Locks,
    /// The nois_proxy contract address
    pub nois_proxy_addr: Addr,
    /// The fee paid to the nois_proxy contract for each randomness request
    pub nois_proxy_coin: Coin,
    /// Accepted raffle creation fees, any one of them must be paid
    pub creation_coins: Vec<Coin>,
}

// RAFFLES

pub fn load_raffle(storage: &dyn Storage, raffle_id: u64) -> StdResult<RaffleInfo> {
    RAFFLE_INFO.load(storage, raffle_id)
}

#[cw_serde]
pub struct RaffleInfo {
    pub owner: Addr,                    // owner/admin of the raffle
    pub assets: Vec<AssetInfo>,         // assets being raffled off
    pub raffle_ticket_price: AssetInfo, // cost per ticket
    pub number_of_tickets: u32,         // number of tickets purchased
    pub randomness: Option<HexBinary>,  // randomness seed provided by nois_proxy
    pub winner: Option<Addr>,           // set with the randomness, if any ticket was sold
    pub is_cancelled: bool,
    pub is_claimed: bool,
    pub raffle_options: RaffleOptions,
}

impl RaffleInfo {
    pub fn close_timestamp(&self) -> Timestamp {
        self.raffle_options
            .raffle_start_timestamp
            .plus_seconds(self.raffle_options.raffle_duration)
    }
}

#[cw_serde]
pub struct TicketPurchase {
    pub buyer: Addr,
    pub count: u32,
}

#[cw_serde]
pub struct RandomnessJob {
    pub raffle_id: u64,
    /// earliest time the oracle can answer the request
    pub pending_since: Timestamp,
    pub attempt: u32,
}

#[cw_serde]
pub enum RaffleState {
    Created,
    Started,
    Closed,
    Finished,
    Claimed,
    Cancelled,
}

impl std::fmt::Display for RaffleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RaffleState::Created => write!(f, "created"),
            RaffleState::Started => write!(f, "started"),
            RaffleState::Closed => write!(f, "closed"),
            RaffleState::Finished => write!(f, "finished"),
            RaffleState::Claimed => write!(f, "claimed"),
            RaffleState::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Queries the raffle state
/// This function depends on the block time to return the RaffleState.
/// As actions can only happen in certain time-periods, you have to be careful when testing off-chain
pub fn get_raffle_state(env: &Env, raffle_info: &RaffleInfo) -> RaffleState {
    if raffle_info.is_cancelled {
        RaffleState::Cancelled
    } else if raffle_info.is_claimed {
        RaffleState::Claimed
    } else if env.block.time < raffle_info.raffle_options.raffle_start_timestamp {
        RaffleState::Created
    } else if env.block.time < raffle_info.close_timestamp() {
        RaffleState::Started
    } else if raffle_info.randomness.is_none() {
        RaffleState::Closed
    } else {
        RaffleState::Finished
    }
}

#[cw_serde]
pub struct RaffleOptions {
    pub raffle_start_timestamp: Timestamp, // If not specified, starts immediately
    pub raffle_duration: u64,              // length, in seconds the duration of a raffle
    pub raffle_timeout: u64,               // time given to the oracle after closing, in seconds
    pub comment: Option<String>,           // raffle description
    pub max_ticket_number: Option<u32>,    // max amount of tickets able to be purchased
    pub max_ticket_per_address: Option<u32>, // max amount of tickets able to bought per address
    pub raffle_preview: u32,               // index of the asset displayed first
}

#[cw_serde]
#[derive(Default)]
pub struct RaffleOptionsMsg {
    pub raffle_start_timestamp: Option<Timestamp>,
    pub raffle_duration: Option<u64>,
    pub raffle_timeout: Option<u64>,
    pub comment: Option<String>,
    pub max_ticket_number: Option<u32>,
    pub max_ticket_per_address: Option<u32>,
    pub raffle_preview: Option<u32>,
}

fn preview_index(preview: u32, assets_len: usize) -> u32 {
    if preview as usize >= assets_len {
        0u32
    } else {
        preview
    }
}

fn capped_ticket_number(config: &Config, requested: Option<u32>) -> Option<u32> {
    match (config.max_tickets_per_raffle, requested) {
        (Some(global_max), Some(this_max)) => Some(global_max.min(this_max)),
        (Some(global_max), None) => Some(global_max),
        (None, requested) => requested,
    }
}

impl RaffleOptions {
    /// Minimums are checked by the caller, absent durations default to them
    pub fn new(
        env: &Env,
        assets_len: usize,
        raffle_options: RaffleOptionsMsg,
        config: &Config,
    ) -> Self {
        Self {
            raffle_start_timestamp: raffle_options
                .raffle_start_timestamp
                .unwrap_or(env.block.time)
                .max(env.block.time),
            raffle_duration: raffle_options
                .raffle_duration
                .unwrap_or(config.minimum_raffle_duration),
            raffle_timeout: raffle_options
                .raffle_timeout
                .unwrap_or(config.minimum_raffle_timeout),
            comment: raffle_options.comment,
            max_ticket_number: capped_ticket_number(config, raffle_options.max_ticket_number),
            max_ticket_per_address: raffle_options.max_ticket_per_address,
            raffle_preview: raffle_options
                .raffle_preview
                .map(|preview| preview_index(preview, assets_len))
                .unwrap_or(0u32),
        }
    }

    /// Only the fields set in `raffle_options` are changed.
    /// The start can be moved earlier, but never before the current block.
    pub fn new_from(
        env: &Env,
        current_options: RaffleOptions,
        assets_len: usize,
        raffle_options: RaffleOptionsMsg,
        config: &Config,
    ) -> Self {
        Self {
            raffle_start_timestamp: raffle_options
                .raffle_start_timestamp
                .unwrap_or(current_options.raffle_start_timestamp)
                .max(env.block.time),
            raffle_duration: raffle_options
                .raffle_duration
                .unwrap_or(current_options.raffle_duration),
            raffle_timeout: raffle_options
                .raffle_timeout
                .unwrap_or(current_options.raffle_timeout),
            comment: raffle_options.comment.or(current_options.comment),
            max_ticket_number: capped_ticket_number(
                config,
                raffle_options
                    .max_ticket_number
                    .or(current_options.max_ticket_number),
            ),
            max_ticket_per_address: raffle_options
                .max_ticket_per_address
                .or(current_options.max_ticket_per_address),
            raffle_preview: raffle_options
                .raffle_preview
                .map(|preview| preview_index(preview, assets_len))
                .unwrap_or(current_options.raffle_preview),
        }
    }
}
