use cosmwasm_std::{coin, Addr, Decimal};
use cw_multi_test::Executor;
use raffles::msg::InstantiateMsg;
use utils::state::NATIVE_DENOM;

use super::{
    app::StargazeApp,
    constants::{
        CREATION_FEE_AMNT, NFT_SYMBOL, NOIS_AMOUNT, NOIS_DENOM, OWNER_ADDR, RAFFLE_NAME,
        TREASURY_ADDR,
    },
    contract_boxes::{contract_cw721, contract_fake_nois, contract_raffles, custom_mock_app},
    helpers::setup_block_time,
    msg::{RaffleCodeIds, RaffleContracts},
    nois_proxy,
};

pub struct RaffleSuiteParams {
    /// The fake proxy answers `GetNextRandomness` right away
    pub auto_respond: bool,
    pub raffle_fee: Decimal,
    pub max_ticket_number: Option<u32>,
}

impl Default for RaffleSuiteParams {
    fn default() -> Self {
        Self {
            auto_respond: true,
            raffle_fee: Decimal::percent(0),
            max_ticket_number: None,
        }
    }
}

pub fn proper_raffle_instantiate() -> (StargazeApp, RaffleContracts) {
    raffle_suite(RaffleSuiteParams::default())
}

/// Randomness requests stay pending until the test delivers them
pub fn manual_randomness_instantiate() -> (StargazeApp, RaffleContracts) {
    raffle_suite(RaffleSuiteParams {
        auto_respond: false,
        ..Default::default()
    })
}

pub fn raffle_suite(params: RaffleSuiteParams) -> (StargazeApp, RaffleContracts) {
    let mut app = custom_mock_app();
    let chainid = app.block_info().chain_id.clone();
    setup_block_time(&mut app, 1647032400000000000, Some(10000), &chainid);

    let code_ids = raffle_template_code_ids(&mut app);

    let nois_addr = app
        .instantiate_contract(
            code_ids.nois_code_id,
            Addr::unchecked(OWNER_ADDR),
            &nois_proxy::InstantiateMsg {
                fee: coin(NOIS_AMOUNT, NOIS_DENOM),
                auto_respond: params.auto_respond,
            },
            &[],
            "nois",
            None,
        )
        .unwrap();

    let cw721_addr = app
        .instantiate_contract(
            code_ids.cw721_code_id,
            Addr::unchecked(OWNER_ADDR),
            &cw721_base::InstantiateMsg {
                name: "raffled collection".to_string(),
                symbol: NFT_SYMBOL.to_string(),
                minter: OWNER_ADDR.to_string(),
            },
            &[],
            "cw721",
            None,
        )
        .unwrap();

    let raffle_contract_addr = app
        .instantiate_contract(
            code_ids.raffle_code_id,
            Addr::unchecked(OWNER_ADDR),
            &InstantiateMsg {
                name: RAFFLE_NAME.to_string(),
                nois_proxy_addr: nois_addr.to_string(),
                nois_proxy_coin: coin(NOIS_AMOUNT, NOIS_DENOM),
                owner: Some(OWNER_ADDR.to_string()),
                fee_addr: Some(TREASURY_ADDR.to_owned()),
                minimum_raffle_duration: None,
                minimum_raffle_timeout: None,
                max_ticket_number: params.max_ticket_number,
                raffle_fee: params.raffle_fee,
                creation_coins: vec![
                    coin(CREATION_FEE_AMNT, NATIVE_DENOM),
                    coin(20, "uflix"),
                ]
                .into(),
            },
            &[],
            "raffle",
            Some(OWNER_ADDR.to_string()),
        )
        .unwrap();
    println!("raffle_contract_addr: {raffle_contract_addr}");

    (
        app,
        RaffleContracts {
            raffle: raffle_contract_addr,
            nois: nois_addr,
            cw721: cw721_addr,
        },
    )
}

pub fn raffle_template_code_ids(router: &mut StargazeApp) -> RaffleCodeIds {
    let raffle_code_id = router.store_code(contract_raffles());
    let nois_code_id = router.store_code(contract_fake_nois());
    let cw721_code_id = router.store_code(contract_cw721());
    println!("raffle_code_id: {raffle_code_id}");

    RaffleCodeIds {
        raffle_code_id,
        nois_code_id,
        cw721_code_id,
    }
}
