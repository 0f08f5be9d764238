#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, Addr};
    use cw_multi_test::{BankSudo, Executor, SudoMsg};
    use raffles::{error::ContractError, msg::ExecuteMsg, state::RaffleState};
    use utils::state::{AssetInfo, NATIVE_DENOM};

    use crate::{
        common_setup::{
            app::StargazeApp,
            constants::{CREATION_FEE_AMNT, NOIS_AMOUNT, NOIS_DENOM, OWNER_ADDR, TICKET_PRICE},
            helpers::{advance_time, assert_error},
            msg::RaffleContracts,
            nois_proxy::DEFAULT_RANDOMNESS,
            setup_accounts_and_block::{setup_accounts, INITIAL_BALANCE},
            setup_raffle::manual_randomness_instantiate,
        },
        raffle::setup::{
            execute_msg::{
                buy_tickets_template, create_raffle_function, deliver_randomness,
                determine_winner_template, ticket_funds,
            },
            helpers::{pending_jobs, raffle_info},
            test_msgs::{CreateRaffleParams, DetermineWinnerParams, PurchaseTicketsParams},
        },
    };

    const EVEN_RANDOMNESS: &str =
        "0000000000000000000000000000000000000000000000000000000000000004";

    /// A closed raffle where `one` bought ticket 0 and `two` bought tickets 1 and 2
    fn closed_raffle(app: &mut StargazeApp, contracts: &RaffleContracts) -> (Addr, Addr) {
        let (owner, one, two) = setup_accounts(app);
        create_raffle_function(CreateRaffleParams {
            app: &mut *app,
            raffle_contract_addr: contracts.raffle.clone(),
            owner_addr: owner,
            creation_fee: vec![coin(CREATION_FEE_AMNT, NATIVE_DENOM), coin(1_000, "uflix")],
            ticket_price: TICKET_PRICE,
            raffle_nfts: vec![AssetInfo::coin(1_000, "uflix")],
            raffle_start_timestamp: None,
            duration: Some(100),
            max_ticket_per_addr: None,
            max_tickets: None,
            autocycle: None,
        })
        .unwrap();
        for (buyer, num_tickets) in [(&one, 1), (&two, 2)] {
            buy_tickets_template(PurchaseTicketsParams {
                app: &mut *app,
                raffle_contract_addr: contracts.raffle.clone(),
                msg_senders: vec![buyer.clone()],
                raffle_id: 0,
                num_tickets,
                funds_send: ticket_funds(num_tickets, TICKET_PRICE),
            })
            .unwrap();
        }
        advance_time(app, 100);
        (one, two)
    }

    fn request(
        app: &mut StargazeApp,
        contracts: &RaffleContracts,
        sender: &Addr,
    ) -> anyhow::Result<cw_multi_test::AppResponse> {
        determine_winner_template(DetermineWinnerParams {
            app,
            raffle_contract_addr: contracts.raffle.clone(),
            sender: sender.clone(),
            raffle_id: 0,
            funds_send: vec![coin(NOIS_AMOUNT, NOIS_DENOM)],
        })
    }

    fn update_randomness(
        app: &mut StargazeApp,
        contracts: &RaffleContracts,
        sender: &str,
    ) -> anyhow::Result<cw_multi_test::AppResponse> {
        app.execute_contract(
            Addr::unchecked(sender),
            contracts.raffle.clone(),
            &ExecuteMsg::UpdateRandomness { raffle_id: 0 },
            &[coin(NOIS_AMOUNT, NOIS_DENOM)],
        )
    }

    #[test]
    fn request_stays_pending_until_delivered() {
        let (mut app, contracts) = manual_randomness_instantiate();
        let (one, two) = closed_raffle(&mut app, &contracts);

        request(&mut app, &contracts, &one).unwrap();
        assert_eq!(pending_jobs(&app, &contracts), vec!["raffle-0"]);

        // a second request does not reach the proxy and gets its fee back
        let res = request(&mut app, &contracts, &two).unwrap();
        let status = res
            .events
            .iter()
            .flat_map(|e| e.attributes.iter())
            .find(|a| a.key == "status")
            .map(|a| a.value.clone());
        assert_eq!(status, Some("pending".to_string()));
        let two_nois = app.wrap().query_balance(&two, NOIS_DENOM).unwrap();
        assert_eq!(two_nois, coin(INITIAL_BALANCE, NOIS_DENOM));
        assert_eq!(pending_jobs(&app, &contracts), vec!["raffle-0"]);

        // slot 4 % 3 = 1 belongs to the second buyer
        deliver_randomness(&mut app, &contracts, "raffle-0", EVEN_RANDOMNESS).unwrap();
        let res = raffle_info(&app, &contracts, 0);
        assert_eq!(res.raffle_state, RaffleState::Finished);
        assert_eq!(res.raffle_info.unwrap().winner, Some(two));
    }

    #[test]
    fn bad_callbacks_leave_the_raffle_untouched() {
        let (mut app, contracts) = manual_randomness_instantiate();
        let (one, _) = closed_raffle(&mut app, &contracts);
        request(&mut app, &contracts, &one).unwrap();

        // only the proxy can deliver randomness
        let published = app.block_info().time;
        let res = app.execute_contract(
            one.clone(),
            contracts.raffle.clone(),
            &ExecuteMsg::NoisReceive {
                callback: nois::NoisCallback {
                    job_id: "raffle-0".to_string(),
                    published,
                    randomness: cosmwasm_std::HexBinary::from_hex(DEFAULT_RANDOMNESS).unwrap(),
                },
            },
            &[],
        );
        assert_error(res, ContractError::Unauthorized.to_string());

        let res = deliver_randomness(&mut app, &contracts, "raffle-7", DEFAULT_RANDOMNESS);
        assert_error(
            res,
            ContractError::UnknownJob {
                job_id: "raffle-7".to_string(),
            }
            .to_string(),
        );

        let res = deliver_randomness(&mut app, &contracts, "raffle-0", "aabbcc");
        assert_error(res, ContractError::InvalidRandomness.to_string());

        let res = raffle_info(&app, &contracts, 0);
        assert_eq!(res.raffle_state, RaffleState::Closed);
        assert_eq!(res.raffle_info.unwrap().randomness, None);

        // the job is consumed by the first valid answer
        deliver_randomness(&mut app, &contracts, "raffle-0", DEFAULT_RANDOMNESS).unwrap();
        let res = deliver_randomness(&mut app, &contracts, "raffle-0", EVEN_RANDOMNESS);
        assert_error(
            res,
            ContractError::UnknownJob {
                job_id: "raffle-0".to_string(),
            }
            .to_string(),
        );
        assert_eq!(
            raffle_info(&app, &contracts, 0)
                .raffle_info
                .unwrap()
                .randomness
                .unwrap()
                .to_hex(),
            DEFAULT_RANDOMNESS
        );
    }

    #[test]
    fn stale_request_can_be_replaced() {
        let (mut app, contracts) = manual_randomness_instantiate();
        let (one, _) = closed_raffle(&mut app, &contracts);
        app.sudo(SudoMsg::Bank(BankSudo::Mint {
            to_address: OWNER_ADDR.to_string(),
            amount: vec![coin(10 * NOIS_AMOUNT, NOIS_DENOM)],
        }))
        .unwrap();

        // nothing requested yet, the admin can start the first job
        update_randomness(&mut app, &contracts, OWNER_ADDR).unwrap();
        assert_eq!(pending_jobs(&app, &contracts), vec!["raffle-0"]);

        let res = update_randomness(&mut app, &contracts, one.as_str());
        assert_error(res, ContractError::Unauthorized.to_string());

        let res = update_randomness(&mut app, &contracts, OWNER_ADDR);
        assert_error(
            res,
            ContractError::RandomnessPending { retry_after: 600 }.to_string(),
        );

        advance_time(&mut app, 600);
        // the replacement fee is forwarded as is, extra funds are refused
        let res = app.execute_contract(
            Addr::unchecked(OWNER_ADDR),
            contracts.raffle.clone(),
            &ExecuteMsg::UpdateRandomness { raffle_id: 0 },
            &[coin(2 * NOIS_AMOUNT, NOIS_DENOM)],
        );
        assert_error(
            res,
            ContractError::InvalidAssets(format!(
                "the oracle fee must be exactly {}",
                coin(NOIS_AMOUNT, NOIS_DENOM)
            ))
            .to_string(),
        );
        update_randomness(&mut app, &contracts, OWNER_ADDR).unwrap();
        assert_eq!(
            pending_jobs(&app, &contracts),
            vec!["raffle-0", "raffle-0-1"]
        );

        // the replaced job is no longer accepted
        let res = deliver_randomness(&mut app, &contracts, "raffle-0", DEFAULT_RANDOMNESS);
        assert_error(
            res,
            ContractError::UnknownJob {
                job_id: "raffle-0".to_string(),
            }
            .to_string(),
        );
        deliver_randomness(&mut app, &contracts, "raffle-0-1", DEFAULT_RANDOMNESS).unwrap();
        assert_eq!(
            raffle_info(&app, &contracts, 0).raffle_state,
            RaffleState::Finished
        );

        let res = update_randomness(&mut app, &contracts, OWNER_ADDR);
        assert_error(
            res,
            ContractError::WrongState {
                action: "update randomness".to_string(),
                status: RaffleState::Finished,
            }
            .to_string(),
        );
    }
}
