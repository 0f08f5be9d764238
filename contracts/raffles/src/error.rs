use thiserror::Error;

use cosmwasm_std::{Coin, CoinsError, StdError};

use crate::state::RaffleState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Coins(#[from] CoinsError),

    #[error("Unauthorized.")]
    Unauthorized,

    #[error("Proxy address is not valid")]
    InvalidProxyAddress,

    #[error("Name is not in the expected format (3-50 UTF-8 bytes)")]
    InvalidName {},

    #[error("Invalid configuration: {0}")]
    ConfigValidation(String),

    #[error("This action is not allowed, the contract is locked")]
    LockedError {},

    #[error("Invalid assets: {0}")]
    InvalidAssets(String),

    #[error("Insufficient funds, expected at least {needed}")]
    InsufficientFunds { needed: Coin },

    #[error("Cannot {action} while the raffle is {status}")]
    WrongState { action: String, status: RaffleState },

    #[error("Too many tickets for this {scope}. Max : {max:?}, Number before purchase : {nb_before:?}, Number after purchase : {nb_after:?}")]
    TicketLimitExceeded {
        scope: String,
        max: u32,
        nb_before: u32,
        nb_after: u32,
    },

    #[error("No outstanding randomness request for job {job_id}")]
    UnknownJob { job_id: String },

    #[error("The raffle duration must be at least {min} seconds")]
    DurationTooShort { min: u64 },

    #[error("The raffle timeout must be at least {min} seconds")]
    TimeoutTooShort { min: u64 },

    #[error("The raffle comment is ({size}) bytes, must be <=  ({max}) bytes")]
    CommentTooLarge { size: u64, max: u64 },

    #[error("Randomness has already been provided to this raffle")]
    RandomnessAlreadyProvided {},

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("Randomness was requested less than {retry_after} seconds ago")]
    RandomnessPending { retry_after: u64 },

    #[error("Key already exists in RaffleInfo")]
    ExistsInRaffleInfo {},

    #[error("An unplanned bug just happened :/")]
    ContractBug {},
}
