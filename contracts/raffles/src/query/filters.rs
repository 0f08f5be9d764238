use cosmwasm_std::Env;

use crate::{
    msg::QueryFilters,
    state::{get_raffle_state, RaffleInfo},
};

pub fn state_filter(env: &Env, raffle_info: &RaffleInfo, filters: &QueryFilters) -> bool {
    match &filters.states {
        Some(states) => states.contains(&get_raffle_state(env, raffle_info).to_string()),
        None => true,
    }
}

pub fn owner_filter(raffle_info: &RaffleInfo, filters: &QueryFilters) -> bool {
    match &filters.owner {
        Some(owner) => raffle_info.owner == owner.clone(),
        None => true,
    }
}

/// Matches a collection address or a coin denom
pub fn contains_token_filter(raffle_info: &RaffleInfo, filters: &QueryFilters) -> bool {
    match &filters.contains_token {
        Some(token) => raffle_info
            .assets
            .iter()
            .any(|asset| asset.token_key() == token.as_str()),
        None => true,
    }
}
