#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, Addr, Coin};
    use cw_multi_test::Executor;
    use raffles::{
        error::ContractError,
        msg::{ConfigResponse, ExecuteMsg, QueryMsg},
        state::{RaffleOptionsMsg, RaffleState},
    };
    use utils::state::{AssetInfo, NATIVE_DENOM};

    use crate::{
        common_setup::{
            app::StargazeApp,
            constants::{CREATION_FEE_AMNT, NOIS_DENOM, TICKET_PRICE, TREASURY_ADDR},
            helpers::{advance_time, assert_error},
            msg::RaffleContracts,
            setup_accounts_and_block::{setup_accounts, INITIAL_BALANCE},
            setup_raffle::proper_raffle_instantiate,
        },
        raffle::setup::{
            execute_msg::create_raffle_function,
            helpers::{mint_one_token, nft_owner, raffle_info},
            test_msgs::CreateRaffleParams,
        },
    };

    fn raffle_params<'a>(
        app: &'a mut StargazeApp,
        contracts: &RaffleContracts,
        owner: &Addr,
        assets: Vec<AssetInfo>,
        creation_fee: Vec<Coin>,
    ) -> CreateRaffleParams<'a> {
        CreateRaffleParams {
            app,
            raffle_contract_addr: contracts.raffle.clone(),
            owner_addr: owner.clone(),
            creation_fee,
            ticket_price: TICKET_PRICE,
            raffle_nfts: assets,
            raffle_start_timestamp: None,
            duration: Some(100),
            max_ticket_per_addr: None,
            max_tickets: None,
            autocycle: None,
        }
    }

    #[test]
    fn create_nft_raffle() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (owner, _, _) = setup_accounts(&mut app);
        let nft = mint_one_token(&mut app, &contracts, &owner, "0");

        create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![nft.clone()],
            vec![coin(CREATION_FEE_AMNT, NATIVE_DENOM)],
        ))
        .unwrap();

        // the nft is escrowed and the creation fee sent to the treasury
        assert_eq!(nft_owner(&app, &contracts, "0"), contracts.raffle.to_string());
        let treasury = app.wrap().query_balance(TREASURY_ADDR, NATIVE_DENOM).unwrap();
        assert_eq!(treasury, coin(CREATION_FEE_AMNT, NATIVE_DENOM));

        let res = raffle_info(&app, &contracts, 0);
        assert_eq!(res.raffle_state, RaffleState::Started);
        let info = res.raffle_info.unwrap();
        assert_eq!(info.owner, owner);
        assert_eq!(info.assets, vec![nft]);
        assert_eq!(info.number_of_tickets, 0);
        assert_eq!(info.raffle_options.raffle_duration, 100);
        assert_eq!(info.raffle_options.raffle_start_timestamp, app.block_info().time);

        let config: ConfigResponse = app
            .wrap()
            .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Config {})
            .unwrap();
        assert_eq!(config.last_raffle_id, 0);
    }

    #[test]
    fn create_coin_raffle_with_alternative_fee() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (owner, _, _) = setup_accounts(&mut app);
        let nft = mint_one_token(&mut app, &contracts, &owner, "0");

        create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![nft, AssetInfo::coin(1_000, "uflix")],
            vec![coin(CREATION_FEE_AMNT, NATIVE_DENOM), coin(1_000, "uflix")],
        ))
        .unwrap();
        // no ustars attached, the fee is taken in uflix
        create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![AssetInfo::coin(500, NOIS_DENOM)],
            vec![coin(500, NOIS_DENOM), coin(20, "uflix")],
        ))
        .unwrap();

        let raffle_balance = app
            .wrap()
            .query_all_balances(contracts.raffle.clone())
            .unwrap();
        assert_eq!(raffle_balance, vec![coin(1_000, "uflix"), coin(500, NOIS_DENOM)]);
        let treasury = app.wrap().query_all_balances(TREASURY_ADDR).unwrap();
        assert_eq!(treasury, vec![coin(20, "uflix"), coin(CREATION_FEE_AMNT, NATIVE_DENOM)]);
        let owner_balance = app.wrap().query_balance(&owner, "uflix").unwrap();
        assert_eq!(owner_balance, coin(INITIAL_BALANCE - 1_020, "uflix"));
        assert_eq!(
            raffle_info(&app, &contracts, 1).raffle_info.unwrap().assets,
            vec![AssetInfo::coin(500, NOIS_DENOM)]
        );
    }

    #[test]
    fn fee_taken_from_what_the_prizes_leave() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (owner, _, _) = setup_accounts(&mut app);

        // the ustars all go to the prize, the fee falls back to uflix
        create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![AssetInfo::coin(1_000, NATIVE_DENOM)],
            vec![coin(1_000, NATIVE_DENOM), coin(20, "uflix")],
        ))
        .unwrap();

        let raffle_balance = app
            .wrap()
            .query_all_balances(contracts.raffle.clone())
            .unwrap();
        assert_eq!(raffle_balance, vec![coin(1_000, NATIVE_DENOM)]);
        let treasury = app.wrap().query_all_balances(TREASURY_ADDR).unwrap();
        assert_eq!(treasury, vec![coin(20, "uflix")]);

        // enough ustars for both the prize and the preferred fee
        create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![AssetInfo::coin(1_000, NATIVE_DENOM)],
            vec![coin(1_000 + CREATION_FEE_AMNT, NATIVE_DENOM)],
        ))
        .unwrap();
        let treasury = app.wrap().query_all_balances(TREASURY_ADDR).unwrap();
        assert_eq!(treasury, vec![coin(20, "uflix"), coin(CREATION_FEE_AMNT, NATIVE_DENOM)]);

        // the prize alone doesn't pay the fee
        let res = create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![AssetInfo::coin(1_000, NATIVE_DENOM)],
            vec![coin(1_000, NATIVE_DENOM)],
        ));
        assert_error(
            res,
            ContractError::InsufficientFunds {
                needed: coin(CREATION_FEE_AMNT, NATIVE_DENOM),
            }
            .to_string(),
        );
    }

    #[test]
    fn bad_raffle_creation() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (owner, one, _) = setup_accounts(&mut app);
        let nft = mint_one_token(&mut app, &contracts, &owner, "0");

        // no creation fee
        let res = create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![nft.clone()],
            vec![],
        ));
        assert_error(
            res,
            ContractError::InsufficientFunds {
                needed: coin(CREATION_FEE_AMNT, NATIVE_DENOM),
            }
            .to_string(),
        );

        // someone else's nft
        let res = create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &one,
            vec![nft.clone()],
            vec![coin(CREATION_FEE_AMNT, NATIVE_DENOM)],
        ));
        assert_error(res, ContractError::Unauthorized.to_string());

        // the same nft twice
        let res = create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![nft.clone(), nft.clone()],
            vec![coin(CREATION_FEE_AMNT, NATIVE_DENOM)],
        ));
        assert_error(
            res,
            ContractError::InvalidAssets("the same asset can't be raffled twice".to_string())
                .to_string(),
        );

        // nothing to raffle
        let res = create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![],
            vec![coin(CREATION_FEE_AMNT, NATIVE_DENOM)],
        ));
        assert_error(
            res,
            ContractError::InvalidAssets("please include at least one asset".to_string())
                .to_string(),
        );

        // funds left over once the fee is paid
        let res = create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![nft.clone()],
            vec![coin(CREATION_FEE_AMNT + 10, NATIVE_DENOM)],
        ));
        let err = res.unwrap_err().source().unwrap().to_string();
        assert!(err.starts_with("Invalid assets: unexpected funds sent"), "{err}");

        // coin prize not attached
        let res = create_raffle_function(raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![AssetInfo::coin(1_000, "uflix")],
            vec![coin(CREATION_FEE_AMNT, NATIVE_DENOM)],
        ));
        assert_error(
            res,
            ContractError::InsufficientFunds {
                needed: coin(1_000, "uflix"),
            }
            .to_string(),
        );

        // duration below the minimum
        let mut params = raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![nft.clone()],
            vec![coin(CREATION_FEE_AMNT, NATIVE_DENOM)],
        );
        params.duration = Some(0);
        assert_error(
            create_raffle_function(params),
            ContractError::DurationTooShort { min: 1 }.to_string(),
        );

        // tickets must be sold for coins
        let res = app.execute_contract(
            owner.clone(),
            contracts.raffle.clone(),
            &ExecuteMsg::CreateRaffle {
                owner: None,
                assets: vec![nft],
                raffle_options: RaffleOptionsMsg::default(),
                raffle_ticket_price: AssetInfo::coin(0, NATIVE_DENOM),
                autocycle: None,
            },
            &[coin(CREATION_FEE_AMNT, NATIVE_DENOM)],
        );
        assert_error(
            res,
            ContractError::InvalidAssets("the ticket price can't be zero".to_string()).to_string(),
        );
    }

    #[test]
    fn modify_before_start() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (owner, one, _) = setup_accounts(&mut app);
        let nft = mint_one_token(&mut app, &contracts, &owner, "0");
        let start = app.block_info().time.plus_seconds(100);

        let mut params = raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![nft],
            vec![coin(CREATION_FEE_AMNT, NATIVE_DENOM)],
        );
        params.raffle_start_timestamp = Some(start);
        create_raffle_function(params).unwrap();
        assert_eq!(
            raffle_info(&app, &contracts, 0).raffle_state,
            RaffleState::Created
        );

        let modify = ExecuteMsg::ModifyRaffle {
            raffle_id: 0,
            raffle_ticket_price: Some(AssetInfo::coin(10, NATIVE_DENOM)),
            raffle_options: RaffleOptionsMsg {
                comment: Some("new description".to_string()),
                max_ticket_per_address: Some(3),
                ..Default::default()
            },
        };

        // only the raffle owner can modify it
        let res = app.execute_contract(one, contracts.raffle.clone(), &modify, &[]);
        assert_error(res, ContractError::Unauthorized.to_string());

        app.execute_contract(owner.clone(), contracts.raffle.clone(), &modify, &[])
            .unwrap();
        let info = raffle_info(&app, &contracts, 0).raffle_info.unwrap();
        assert_eq!(info.raffle_ticket_price, AssetInfo::coin(10, NATIVE_DENOM));
        assert_eq!(info.raffle_options.comment, Some("new description".to_string()));
        assert_eq!(info.raffle_options.max_ticket_per_address, Some(3));
        assert_eq!(info.raffle_options.raffle_start_timestamp, start);
        assert_eq!(info.raffle_options.raffle_duration, 100);

        // once started, the raffle is frozen
        advance_time(&mut app, 100);
        let res = app.execute_contract(owner, contracts.raffle.clone(), &modify, &[]);
        assert_error(
            res,
            ContractError::WrongState {
                action: "modify".to_string(),
                status: RaffleState::Started,
            }
            .to_string(),
        );
    }

    #[test]
    fn cancel_before_start() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (owner, _, _) = setup_accounts(&mut app);
        let nft = mint_one_token(&mut app, &contracts, &owner, "0");
        let start = app.block_info().time.plus_seconds(100);

        let mut params = raffle_params(
            &mut app,
            &contracts,
            &owner,
            vec![nft, AssetInfo::coin(1_000, "uflix")],
            vec![coin(CREATION_FEE_AMNT, NATIVE_DENOM), coin(1_000, "uflix")],
        );
        params.raffle_start_timestamp = Some(start);
        create_raffle_function(params).unwrap();

        app.execute_contract(
            owner.clone(),
            contracts.raffle.clone(),
            &ExecuteMsg::CancelRaffle { raffle_id: 0 },
            &[],
        )
        .unwrap();

        assert_eq!(
            raffle_info(&app, &contracts, 0).raffle_state,
            RaffleState::Cancelled
        );
        assert_eq!(nft_owner(&app, &contracts, "0"), owner.to_string());
        let owner_balance = app.wrap().query_balance(&owner, "uflix").unwrap();
        assert_eq!(owner_balance, coin(INITIAL_BALANCE, "uflix"));

        // a cancelled raffle stays cancelled
        let res = app.execute_contract(
            owner,
            contracts.raffle.clone(),
            &ExecuteMsg::CancelRaffle { raffle_id: 0 },
            &[],
        );
        assert_error(
            res,
            ContractError::WrongState {
                action: "cancel".to_string(),
                status: RaffleState::Cancelled,
            }
            .to_string(),
        );
    }
}
