#[cfg(feature = "sg")]
use cosmwasm_std::Empty;
use cosmwasm_std::{
    coins, Addr, BankMsg, Coin, Decimal, MessageInfo, Order, StdError, StdResult, Storage,
    Uint128,
};
use cw721::Cw721ExecuteMsg;
#[cfg(feature = "sg")]
use cw721_base::Extension;
#[cfg(feature = "sg")]
use sg721::ExecuteMsg as Sg721ExecuteMsg;
use utils::{
    payment::assert_payment,
    state::{
        all_elements_unique, into_cosmos_msg, is_valid_comment, AssetInfo, Sg721Token,
        MAX_COMMENT_SIZE,
    },
    types::CosmosMsg,
};

use crate::{
    error::ContractError,
    state::{Config, RaffleInfo, RaffleOptionsMsg, RAFFLE_INFO, TICKET_LEDGER},
};

pub fn is_raffle_owner(
    storage: &dyn Storage,
    raffle_id: u64,
    sender: &Addr,
) -> Result<RaffleInfo, ContractError> {
    let raffle_info = RAFFLE_INFO.load(storage, raffle_id)?;
    if *sender == raffle_info.owner {
        Ok(raffle_info)
    } else {
        Err(ContractError::Unauthorized {})
    }
}

pub fn validate_fee(raffle_fee: Decimal) -> Result<(), ContractError> {
    if raffle_fee >= Decimal::one() {
        return Err(ContractError::ConfigValidation(format!(
            "raffle fee must be lower than 1, got {raffle_fee}"
        )));
    }
    Ok(())
}

/// The oracle fee is forwarded as is, so it must be attached exactly
pub fn assert_oracle_payment(info: &MessageInfo, fee: &Coin) -> Result<(), ContractError> {
    let paid = info
        .funds
        .iter()
        .find(|sent| sent.denom == fee.denom)
        .map(|sent| sent.amount)
        .unwrap_or_default();
    if paid < fee.amount {
        return Err(ContractError::InsufficientFunds {
            needed: fee.clone(),
        });
    }
    assert_payment(info, fee).map_err(|_| {
        ContractError::InvalidAssets(format!("the oracle fee must be exactly {fee}"))
    })?;
    Ok(())
}

/// Tickets are only sold for a non-zero native coin
pub fn validate_ticket_price(raffle_ticket_price: &AssetInfo) -> Result<(), ContractError> {
    match raffle_ticket_price {
        AssetInfo::Coin(coin) if !coin.amount.is_zero() => Ok(()),
        AssetInfo::Coin(_) => Err(ContractError::InvalidAssets(
            "the ticket price can't be zero".to_string(),
        )),
        AssetInfo::Cw721Coin(_) | AssetInfo::Sg721Token(_) => Err(ContractError::InvalidAssets(
            "tickets can only be bought with native coins".to_string(),
        )),
    }
}

pub fn validate_assets(assets: &[AssetInfo]) -> Result<(), ContractError> {
    if assets.is_empty() {
        return Err(ContractError::InvalidAssets(
            "please include at least one asset".to_string(),
        ));
    }
    if !all_elements_unique(assets) {
        return Err(ContractError::InvalidAssets(
            "the same asset can't be raffled twice".to_string(),
        ));
    }
    if assets
        .iter()
        .any(|asset| matches!(asset, AssetInfo::Coin(coin) if coin.amount.is_zero()))
    {
        return Err(ContractError::InvalidAssets(
            "coin prizes can't be empty".to_string(),
        ));
    }
    Ok(())
}

/// Explicit durations below the configured minimums are refused, absent ones default to them
pub fn validate_raffle_options(
    config: &Config,
    raffle_options: &RaffleOptionsMsg,
) -> Result<(), ContractError> {
    if let Some(duration) = raffle_options.raffle_duration {
        if duration < config.minimum_raffle_duration {
            return Err(ContractError::DurationTooShort {
                min: config.minimum_raffle_duration,
            });
        }
    }
    if let Some(timeout) = raffle_options.raffle_timeout {
        if timeout < config.minimum_raffle_timeout {
            return Err(ContractError::TimeoutTooShort {
                min: config.minimum_raffle_timeout,
            });
        }
    }
    if let Some(comment) = &raffle_options.comment {
        if !is_valid_comment(comment) {
            return Err(ContractError::CommentTooLarge {
                size: comment.as_bytes().len() as u64,
                max: MAX_COMMENT_SIZE,
            });
        }
    }
    Ok(())
}

/// Computes the ticket cost for multiple tickets bought together
pub fn ticket_cost(raffle_info: &RaffleInfo, ticket_count: u32) -> Result<Coin, ContractError> {
    match &raffle_info.raffle_ticket_price {
        AssetInfo::Coin(price) => Ok(Coin {
            denom: price.denom.clone(),
            amount: price
                .amount
                .checked_mul(Uint128::from(ticket_count))
                .map_err(StdError::from)?,
        }),
        AssetInfo::Cw721Coin(_) | AssetInfo::Sg721Token(_) => Err(ContractError::InvalidAssets(
            "tickets can only be bought with native coins".to_string(),
        )),
    }
}

/// Treasury cut first, rounded down, the rest goes to the raffle owner
pub fn split_proceeds(total_paid: Uint128, raffle_fee: Decimal) -> (Uint128, Uint128) {
    let treasury_amount = total_paid * raffle_fee;
    (treasury_amount, total_paid - treasury_amount)
}

/// Moves one escrowed asset to `receiver`
pub fn transfer_asset_message(asset: &AssetInfo, receiver: &str) -> StdResult<CosmosMsg> {
    match asset {
        AssetInfo::Cw721Coin(nft) => {
            let message = Cw721ExecuteMsg::TransferNft {
                recipient: receiver.to_string(),
                token_id: nft.token_id.clone(),
            };
            into_cosmos_msg(message, nft.address.clone(), None)
        }
        AssetInfo::Sg721Token(sg721_token) => sg721_transfer_message(sg721_token, receiver),
        AssetInfo::Coin(coin) => Ok(BankMsg::Send {
            to_address: receiver.to_string(),
            amount: vec![coin.clone()],
        }
        .into()),
    }
}

#[cfg(feature = "sg")]
fn sg721_transfer_message(sg721_token: &Sg721Token, receiver: &str) -> StdResult<CosmosMsg> {
    let message = Sg721ExecuteMsg::<Extension, Empty>::TransferNft {
        recipient: receiver.to_string(),
        token_id: sg721_token.token_id.clone(),
    };
    into_cosmos_msg(message, sg721_token.address.clone(), None)
}

// sg721 collections accept the cw721 transfer message
#[cfg(not(feature = "sg"))]
fn sg721_transfer_message(sg721_token: &Sg721Token, receiver: &str) -> StdResult<CosmosMsg> {
    let message = Cw721ExecuteMsg::TransferNft {
        recipient: receiver.to_string(),
        token_id: sg721_token.token_id.clone(),
    };
    into_cosmos_msg(message, sg721_token.address.clone(), None)
}

/// Util to get the messages returning every raffled asset to `receiver`
pub fn get_raffle_asset_messages(
    raffle_info: &RaffleInfo,
    receiver: &Addr,
) -> StdResult<Vec<CosmosMsg>> {
    raffle_info
        .assets
        .iter()
        .map(|asset| transfer_asset_message(asset, receiver.as_str()))
        .collect()
}

/// Util to get the treasury and raffle owner messages once a raffle is claimed (distributes the ticket sales)
pub fn get_raffle_proceeds_messages(
    config: &Config,
    raffle_info: &RaffleInfo,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let total_paid = ticket_cost(raffle_info, raffle_info.number_of_tickets)?;
    let (treasury_amount, owner_amount) = split_proceeds(total_paid.amount, config.raffle_fee);

    let mut messages: Vec<CosmosMsg> = vec![];
    if !treasury_amount.is_zero() {
        messages.push(
            BankMsg::Send {
                to_address: config.fee_addr.to_string(),
                amount: coins(treasury_amount.u128(), total_paid.denom.clone()),
            }
            .into(),
        );
    }
    if !owner_amount.is_zero() {
        messages.push(
            BankMsg::Send {
                to_address: raffle_info.owner.to_string(),
                amount: coins(owner_amount.u128(), total_paid.denom),
            }
            .into(),
        );
    }
    Ok(messages)
}

/// Util to refund every ticket purchase of a cancelled raffle
pub fn get_raffle_refund_messages(
    storage: &dyn Storage,
    raffle_id: u64,
    raffle_info: &RaffleInfo,
) -> Result<Vec<CosmosMsg>, ContractError> {
    TICKET_LEDGER
        .prefix(raffle_id)
        .range(storage, None, None, Order::Ascending)
        .map(|item| -> Result<CosmosMsg, ContractError> {
            let (_, purchase) = item?;
            let refund = ticket_cost(raffle_info, purchase.count)?;
            Ok(BankMsg::Send {
                to_address: purchase.buyer.to_string(),
                amount: vec![refund],
            }
            .into())
        })
        .collect()
}
