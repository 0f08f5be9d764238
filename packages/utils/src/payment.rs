use cosmwasm_std::{Coin, Coins, MessageInfo, StdError, StdResult};

/// Checks the sender attached exactly `expected` and nothing else.
pub fn assert_payment(msg_info: &MessageInfo, expected: &Coin) -> StdResult<Coin> {
    if expected.amount.is_zero() && msg_info.funds.is_empty() {
        return Ok(expected.clone());
    }
    if msg_info.funds.len() != 1 {
        return Err(StdError::generic_err(format!(
            "You need to send exactly one coin for payment, received {:?}",
            msg_info.funds,
        )));
    }
    let sent_coin = &msg_info.funds[0];
    if sent_coin.denom != expected.denom || sent_coin.amount != expected.amount {
        return Err(StdError::generic_err(format!(
            "Invalid payment sent. Expected {}, sent {:?}",
            expected, msg_info.funds
        )));
    }
    Ok(sent_coin.clone())
}

/// Removes `coin` from the remaining `funds`.
/// Fails when the sender did not attach enough of that denom.
pub fn deduct_payment(funds: &mut Coins, coin: &Coin) -> StdResult<()> {
    if funds.amount_of(&coin.denom) < coin.amount {
        return Err(StdError::generic_err(format!(
            "Missing funds, expected {} but only {}{} is left",
            coin,
            funds.amount_of(&coin.denom),
            coin.denom
        )));
    }
    funds.sub(coin.clone())
}

/// Picks the first accepted fee coin the sender can pay in full.
/// Callers pass the funds left once the prizes are reserved.
/// Returns `None` when no fee applies, i.e. the list is empty or one of its coins is free.
pub fn select_fee_coin(funds: &Coins, accepted: &[Coin]) -> StdResult<Option<Coin>> {
    if accepted.is_empty() || accepted.iter().any(|c| c.amount.is_zero()) {
        return Ok(None);
    }
    accepted
        .iter()
        .find(|c| funds.amount_of(&c.denom) >= c.amount)
        .cloned()
        .map(Some)
        .ok_or_else(|| {
            StdError::generic_err(format!(
                "Fee payment missing, expected one of {:?}",
                accepted
            ))
        })
}
