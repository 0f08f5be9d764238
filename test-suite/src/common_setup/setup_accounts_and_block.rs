use cosmwasm_std::{coin, Addr};
use cw_multi_test::{BankSudo, SudoMsg};
use utils::state::NATIVE_DENOM;

use super::{app::StargazeApp, constants::NOIS_DENOM};

pub const INITIAL_BALANCE: u128 = 100_000_000_000_000;

fn fund(router: &mut StargazeApp, account: &Addr) {
    router
        .sudo(SudoMsg::Bank({
            BankSudo::Mint {
                to_address: account.to_string(),
                amount: vec![
                    coin(INITIAL_BALANCE, NOIS_DENOM),
                    coin(INITIAL_BALANCE, NATIVE_DENOM),
                    coin(INITIAL_BALANCE, "uflix"),
                ],
            }
        }))
        .unwrap();
}

/// The raffle creator and two ticket buyers
pub fn setup_accounts(router: &mut StargazeApp) -> (Addr, Addr, Addr) {
    let owner = Addr::unchecked("owner");
    let one = Addr::unchecked("buyer-one");
    let two = Addr::unchecked("buyer-two");
    for account in [&owner, &one, &two] {
        fund(router, account);
    }
    (owner, one, two)
}

pub fn setup_raffle_participants(router: &mut StargazeApp) -> (Addr, Addr, Addr, Addr, Addr, Addr) {
    let one = Addr::unchecked("addr-one");
    let two = Addr::unchecked("addr-two");
    let three = Addr::unchecked("addr-three");
    let four = Addr::unchecked("addr-four");
    let five = Addr::unchecked("addr-five");
    let six = Addr::unchecked("addr-six");
    for account in [&one, &two, &three, &four, &five, &six] {
        fund(router, account);
    }

    // check native balances
    let one_native_balance = router.wrap().query_balance(&one, NATIVE_DENOM).unwrap();
    assert_eq!(one_native_balance, coin(INITIAL_BALANCE, NATIVE_DENOM));

    (one, two, three, four, five, six)
}
