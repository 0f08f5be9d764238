use cosmwasm_std::{Addr, Empty};
use cw721::OwnerOfResponse;
use cw_multi_test::Executor;
use raffles::msg::{AllRafflesResponse, QueryFilters, QueryMsg, RaffleResponse};
use utils::state::AssetInfo;

use crate::common_setup::{
    app::StargazeApp, constants::OWNER_ADDR, msg::RaffleContracts, nois_proxy,
};

pub fn raffle_info(app: &StargazeApp, contracts: &RaffleContracts, raffle_id: u64) -> RaffleResponse {
    app.wrap()
        .query_wasm_smart(
            contracts.raffle.clone(),
            &QueryMsg::RaffleInfo { raffle_id },
        )
        .unwrap()
}

pub fn all_raffles(
    app: &StargazeApp,
    contracts: &RaffleContracts,
    start_after: Option<u64>,
    limit: Option<u32>,
    filters: Option<QueryFilters>,
) -> AllRafflesResponse {
    app.wrap()
        .query_wasm_smart(
            contracts.raffle.clone(),
            &QueryMsg::AllRaffles {
                start_after,
                limit,
                filters,
            },
        )
        .unwrap()
}

pub fn all_tickets(
    app: &StargazeApp,
    contracts: &RaffleContracts,
    raffle_id: u64,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> Vec<String> {
    app.wrap()
        .query_wasm_smart(
            contracts.raffle.clone(),
            &QueryMsg::AllTickets {
                raffle_id,
                start_after,
                limit,
            },
        )
        .unwrap()
}

pub fn ticket_count(
    app: &StargazeApp,
    contracts: &RaffleContracts,
    owner: &Addr,
    raffle_id: u64,
) -> u32 {
    app.wrap()
        .query_wasm_smart(
            contracts.raffle.clone(),
            &QueryMsg::TicketCount {
                owner: owner.to_string(),
                raffle_id,
            },
        )
        .unwrap()
}

/// Jobs the fake proxy received and has not answered
pub fn pending_jobs(app: &StargazeApp, contracts: &RaffleContracts) -> Vec<String> {
    app.wrap()
        .query_wasm_smart(contracts.nois.clone(), &nois_proxy::QueryMsg::PendingJobs {})
        .unwrap()
}

pub fn nft_owner(app: &StargazeApp, contracts: &RaffleContracts, token_id: &str) -> String {
    let res: OwnerOfResponse = app
        .wrap()
        .query_wasm_smart(
            contracts.cw721.clone(),
            &cw721::Cw721QueryMsg::OwnerOf {
                token_id: token_id.to_string(),
                include_expired: None,
            },
        )
        .unwrap();
    res.owner
}

/// Mints `token_id` to `owner` and lets the raffle contract move all of the owner's tokens
pub fn mint_one_token(
    app: &mut StargazeApp,
    contracts: &RaffleContracts,
    owner: &Addr,
    token_id: &str,
) -> AssetInfo {
    app.execute_contract(
        Addr::unchecked(OWNER_ADDR),
        contracts.cw721.clone(),
        &cw721_base::ExecuteMsg::<Option<Empty>, Empty>::Mint {
            token_id: token_id.to_string(),
            owner: owner.to_string(),
            token_uri: None,
            extension: None,
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        owner.clone(),
        contracts.cw721.clone(),
        &cw721_base::ExecuteMsg::<Option<Empty>, Empty>::ApproveAll {
            operator: contracts.raffle.to_string(),
            expires: None,
        },
        &[],
    )
    .unwrap();

    AssetInfo::cw721(contracts.cw721.as_str(), token_id)
}
