use cosmwasm_std::{
    ensure, ensure_eq, from_json, Addr, BankMsg, Coin, Coins, Decimal, DepsMut, Env,
    MessageInfo, StdResult, Storage,
};
use cw721::Cw721ReceiveMsg;
use nois::NoisCallback;
use utils::{
    payment::{deduct_payment, select_fee_coin},
    state::{is_valid_name, AssetInfo, Cw721Coin, Sg721Token},
    types::{CosmosMsg, Response},
};

use crate::{
    error::ContractError,
    msg::ExecuteMsg,
    query::{is_nft_owner, is_sg721_owner},
    randomness::{clear_job, outstanding_job, pick_winner, request_randomness},
    state::{
        get_raffle_state, Config, RaffleInfo, RaffleOptions, RaffleOptionsMsg, RaffleState,
        TicketPurchase, CONFIG, MINIMUM_RAFFLE_DURATION, RAFFLE_INFO, RANDOMNESS_JOBS,
        RANDOMNESS_RETRY_WINDOW, TICKET_LEDGER, USER_TICKETS,
    },
    utils::{
        assert_oracle_payment, get_raffle_asset_messages, get_raffle_proceeds_messages,
        get_raffle_refund_messages, is_raffle_owner, ticket_cost, transfer_asset_message,
        validate_assets, validate_fee, validate_raffle_options, validate_ticket_price,
    },
};

fn wrong_state(action: &str, status: RaffleState) -> ContractError {
    ContractError::WrongState {
        action: action.to_string(),
        status,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn execute_create_raffle(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: Option<String>,
    all_assets: Vec<AssetInfo>,
    raffle_ticket_price: AssetInfo,
    raffle_options: RaffleOptionsMsg,
    autocycle: Option<bool>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure!(!config.locks.is_locked(), ContractError::LockedError {});

    validate_assets(&all_assets)?;
    validate_ticket_price(&raffle_ticket_price)?;
    validate_raffle_options(&config, &raffle_options)?;

    let mut funds = Coins::try_from(info.funds.clone())?;
    let mut messages: Vec<CosmosMsg> = vec![];

    // We escrow all the assets first
    for asset in &all_assets {
        match asset {
            AssetInfo::Cw721Coin(token) => {
                // Before the transfer, verify current NFT owner
                // Otherwise, anyone could raffle a token they were only approved on
                is_nft_owner(
                    deps.as_ref(),
                    &info.sender,
                    token.address.to_string(),
                    token.token_id.to_string(),
                )?;
                messages.push(transfer_asset_message(asset, env.contract.address.as_str())?);
            }
            AssetInfo::Sg721Token(token) => {
                is_sg721_owner(
                    deps.as_ref(),
                    &info.sender,
                    token.address.to_string(),
                    token.token_id.to_string(),
                )?;
                messages.push(transfer_asset_message(asset, env.contract.address.as_str())?);
            }
            // Coin prizes come with the message funds
            AssetInfo::Coin(coin) => deduct_payment(&mut funds, coin)
                .map_err(|_| ContractError::InsufficientFunds {
                    needed: coin.clone(),
                })?,
        }
    }

    let autocycle = autocycle.unwrap_or(false);
    if autocycle {
        deduct_payment(&mut funds, &config.nois_proxy_coin).map_err(|_| {
            ContractError::InsufficientFunds {
                needed: config.nois_proxy_coin.clone(),
            }
        })?;
    }

    // The creation fee is picked among what the prizes leave over
    let creation_fee = select_fee_coin(&funds, &config.creation_coins).map_err(|_| {
        ContractError::InsufficientFunds {
            needed: config.creation_coins.first().cloned().unwrap_or_default(),
        }
    })?;
    if let Some(fee) = creation_fee {
        deduct_payment(&mut funds, &fee)
            .map_err(|_| ContractError::InsufficientFunds { needed: fee.clone() })?;
        messages.push(
            BankMsg::Send {
                to_address: config.fee_addr.to_string(),
                amount: vec![fee],
            }
            .into(),
        );
    }
    ensure!(
        funds.is_empty(),
        ContractError::InvalidAssets(format!("unexpected funds sent: {:?}", funds.to_vec()))
    );

    // Then we create the internal raffle structure
    let owner = match owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender.clone(),
    };
    let (raffle_id, raffle_info) = _create_raffle(
        deps.storage,
        &env,
        &config,
        owner.clone(),
        all_assets,
        raffle_ticket_price,
        raffle_options,
    )?;

    let mut response = Response::new().add_messages(messages);
    if autocycle {
        // The oracle answers on its own once the raffle closes
        let (job_id, request) = request_randomness(
            deps.storage,
            &env,
            &config,
            raffle_id,
            0,
            Some(raffle_info.close_timestamp()),
        )?;
        response = response
            .add_message(request)
            .add_attribute("job_id", job_id);
    }

    Ok(response
        .add_attribute("action", "create_raffle")
        .add_attribute("raffle_id", raffle_id.to_string())
        .add_attribute("owner", owner))
}

pub fn _create_raffle(
    storage: &mut dyn Storage,
    env: &Env,
    config: &Config,
    owner: Addr,
    all_assets: Vec<AssetInfo>,
    raffle_ticket_price: AssetInfo,
    raffle_options: RaffleOptionsMsg,
) -> Result<(u64, RaffleInfo), ContractError> {
    // We start by creating a new raffle_id (simply incremented from the last id)
    let raffle_id: u64 = CONFIG
        .update(storage, |mut c| -> StdResult<_> {
            c.last_raffle_id = c.last_raffle_id.map_or(Some(0), |id| Some(id + 1));
            Ok(c)
        })?
        .last_raffle_id
        .ok_or(ContractError::ContractBug {})?;

    let raffle_options = RaffleOptions::new(env, all_assets.len(), raffle_options, config);
    let raffle_info = RAFFLE_INFO.update(storage, raffle_id, |raffle| match raffle {
        // If the raffle id already exists, the contract is faulty
        // We do not want to overwrite existing data
        Some(_) => Err(ContractError::ExistsInRaffleInfo {}),
        None => Ok(RaffleInfo {
            owner,
            assets: all_assets,
            raffle_ticket_price,
            number_of_tickets: 0u32,
            randomness: None,
            winner: None,
            is_cancelled: false,
            is_claimed: false,
            raffle_options,
        }),
    })?;
    Ok((raffle_id, raffle_info))
}

/// Cancels a raffle
/// Allowed before the raffle starts, or once the oracle missed the raffle timeout.
/// Prizes go back to the owner and every ticket is refunded.
pub fn execute_cancel_raffle(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    raffle_id: u64,
) -> Result<Response, ContractError> {
    let mut raffle_info = is_raffle_owner(deps.storage, raffle_id, &info.sender)?;

    let raffle_state = get_raffle_state(&env, &raffle_info);
    let timed_out = raffle_state == RaffleState::Closed
        && env.block.time
            >= raffle_info
                .close_timestamp()
                .plus_seconds(raffle_info.raffle_options.raffle_timeout);
    if raffle_state != RaffleState::Created && !timed_out {
        return Err(wrong_state("cancel", raffle_state));
    }

    raffle_info.is_cancelled = true;
    RAFFLE_INFO.save(deps.storage, raffle_id, &raffle_info)?;
    // A late callback must not settle a cancelled raffle
    clear_job(deps.storage, raffle_id)?;

    let asset_messages = get_raffle_asset_messages(&raffle_info, &raffle_info.owner)?;
    let refund_messages = get_raffle_refund_messages(deps.storage, raffle_id, &raffle_info)?;
    Ok(Response::new()
        .add_messages(asset_messages)
        .add_messages(refund_messages)
        .add_attribute("action", "cancel_raffle")
        .add_attribute("raffle_id", raffle_id.to_string())
        .add_attribute("refunded_tickets", raffle_info.number_of_tickets.to_string()))
}

/// Modify the raffle characteristics
/// A parameter is only modified if it is specified in the called message
/// If None is provided, nothing changes for the parameter
/// This function is only accessible before the raffle starts
pub fn execute_modify_raffle(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    raffle_id: u64,
    raffle_ticket_price: Option<AssetInfo>,
    raffle_options: RaffleOptionsMsg,
) -> Result<Response, ContractError> {
    let mut raffle_info = is_raffle_owner(deps.storage, raffle_id, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    let raffle_state = get_raffle_state(&env, &raffle_info);
    if raffle_state != RaffleState::Created {
        return Err(wrong_state("modify", raffle_state));
    }
    validate_raffle_options(&config, &raffle_options)?;

    // An autocycle request is bound to the original closing time
    if (raffle_options.raffle_start_timestamp.is_some() || raffle_options.raffle_duration.is_some())
        && outstanding_job(deps.storage, raffle_id)?.is_some()
    {
        return Err(wrong_state("reschedule an autocycle raffle", raffle_state));
    }

    // Then modify the raffle characteristics
    raffle_info.raffle_options = RaffleOptions::new_from(
        &env,
        raffle_info.raffle_options,
        raffle_info.assets.len(),
        raffle_options,
        &config,
    );
    // Then modify the ticket price
    if let Some(raffle_ticket_price) = raffle_ticket_price {
        validate_ticket_price(&raffle_ticket_price)?;
        raffle_info.raffle_ticket_price = raffle_ticket_price;
    }
    RAFFLE_INFO.save(deps.storage, raffle_id, &raffle_info)?;

    Ok(Response::new()
        .add_attribute("action", "modify_raffle")
        .add_attribute("raffle_id", raffle_id.to_string()))
}

/// Buy a ticket for a specific raffle.
///
/// `raffle_id`: The id of the raffle you want to buy a ticket to/
///
/// `sent_assets` : the coin deposited against the raffle tickets.
/// It must be attached to the message and equal `ticket_count` times the ticket price exactly
pub fn execute_buy_tickets(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    raffle_id: u64,
    ticket_count: u32,
    sent_assets: AssetInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure!(!config.locks.is_locked(), ContractError::LockedError {});

    let raffle_info = RAFFLE_INFO.load(deps.storage, raffle_id)?;
    let raffle_state = get_raffle_state(&env, &raffle_info);
    if raffle_state != RaffleState::Started {
        return Err(wrong_state("buy tickets", raffle_state));
    }
    ensure!(
        ticket_count > 0,
        ContractError::InvalidAssets("at least one ticket must be bought".to_string())
    );

    // We first check the sent assets match the raffle price
    let cost = ticket_cost(&raffle_info, ticket_count)?;
    let sent = match sent_assets {
        AssetInfo::Coin(coin) if coin.denom == cost.denom => coin,
        _ => {
            return Err(ContractError::InvalidAssets(format!(
                "tickets for this raffle are paid in {}",
                cost.denom
            )))
        }
    };
    ensure!(
        info.funds == vec![sent.clone()],
        ContractError::InvalidAssets(
            "the attached funds don't match the sent assets".to_string()
        )
    );
    ensure!(
        sent.amount >= cost.amount,
        ContractError::InsufficientFunds { needed: cost }
    );
    ensure!(
        sent.amount == cost.amount,
        ContractError::InvalidAssets(format!("overpaying tickets, expected {cost}"))
    );

    let raffle_info = _buy_tickets(
        deps.storage,
        &env,
        info.sender.clone(),
        raffle_id,
        raffle_info,
        ticket_count,
    )?;

    Ok(Response::new()
        .add_attribute("action", "buy_ticket")
        .add_attribute("raffle_id", raffle_id.to_string())
        .add_attribute("purchaser", info.sender)
        .add_attribute("ticket_count", ticket_count.to_string())
        .add_attribute("total_tickets", raffle_info.number_of_tickets.to_string())
        .add_attribute("timestamp", env.block.time.to_string()))
}

/// Appends a purchase to the ticket ledger once the caps are checked.
/// Payment and raffle state are checked by the caller.
pub fn _buy_tickets(
    storage: &mut dyn Storage,
    env: &Env,
    owner: Addr,
    raffle_id: u64,
    mut raffle_info: RaffleInfo,
    ticket_count: u32,
) -> Result<RaffleInfo, ContractError> {
    // Then we check the user has the right to buy `ticket_count` more tickets
    let current_ticket_count = USER_TICKETS
        .may_load(storage, (&owner, raffle_id))?
        .unwrap_or(0);
    let user_ticket_count = current_ticket_count.saturating_add(ticket_count);
    if let Some(max_ticket_per_address) = raffle_info.raffle_options.max_ticket_per_address {
        if user_ticket_count > max_ticket_per_address {
            return Err(ContractError::TicketLimitExceeded {
                scope: "address".to_string(),
                max: max_ticket_per_address,
                nb_before: current_ticket_count,
                nb_after: user_ticket_count,
            });
        }
    }

    // Then we check there are some ticket left to buy
    let total_ticket_count = raffle_info.number_of_tickets.saturating_add(ticket_count);
    let max_ticket_number = raffle_info.raffle_options.max_ticket_number;
    if let Some(max_ticket_number) = max_ticket_number {
        if total_ticket_count > max_ticket_number {
            return Err(ContractError::TicketLimitExceeded {
                scope: "raffle".to_string(),
                max: max_ticket_number,
                nb_before: raffle_info.number_of_tickets,
                nb_after: total_ticket_count,
            });
        }
    }

    // The purchase occupies the slots right after the ones already sold
    TICKET_LEDGER.save(
        storage,
        (raffle_id, raffle_info.number_of_tickets),
        &TicketPurchase {
            buyer: owner.clone(),
            count: ticket_count,
        },
    )?;
    USER_TICKETS.save(storage, (&owner, raffle_id), &user_ticket_count)?;
    raffle_info.number_of_tickets = total_ticket_count;

    // The raffle closes as soon as the last ticket is sold
    if Some(total_ticket_count) == max_ticket_number {
        raffle_info.raffle_options.raffle_duration = env
            .block
            .time
            .seconds()
            .saturating_sub(raffle_info.raffle_options.raffle_start_timestamp.seconds());
    }

    RAFFLE_INFO.save(storage, raffle_id, &raffle_info)?;
    Ok(raffle_info)
}

/// NFT deposit hook: creates a raffle holding exactly the received token.
/// No coins ride along, so only fee-free creations without autocycle go through here.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    wrapper: Cw721ReceiveMsg,
) -> Result<Response, ContractError> {
    let sender = deps.api.addr_validate(&wrapper.sender)?;
    match from_json(&wrapper.msg)? {
        ExecuteMsg::CreateRaffle {
            owner,
            assets,
            raffle_options,
            raffle_ticket_price,
            autocycle,
        } => {
            let config = CONFIG.load(deps.storage)?;
            ensure!(!config.locks.is_locked(), ContractError::LockedError {});

            // First we make sure the received asset is the one specified in the message
            let received = match assets.as_slice() {
                [AssetInfo::Cw721Coin(Cw721Coin { address, token_id })]
                | [AssetInfo::Sg721Token(Sg721Token { address, token_id })] => {
                    *address == info.sender.as_str() && *token_id == wrapper.token_id
                }
                _ => false,
            };
            ensure!(
                received,
                ContractError::InvalidAssets(
                    "the raffle must only hold the received token".to_string()
                )
            );
            validate_ticket_price(&raffle_ticket_price)?;
            validate_raffle_options(&config, &raffle_options)?;

            if select_fee_coin(&Coins::default(), &config.creation_coins).is_err() {
                return Err(ContractError::InsufficientFunds {
                    needed: config.creation_coins.first().cloned().unwrap_or_default(),
                });
            }
            if autocycle.unwrap_or(false) {
                return Err(ContractError::InsufficientFunds {
                    needed: config.nois_proxy_coin,
                });
            }

            let owner = match owner {
                Some(owner) => deps.api.addr_validate(&owner)?,
                None => sender,
            };
            let (raffle_id, _) = _create_raffle(
                deps.storage,
                &env,
                &config,
                owner.clone(),
                assets,
                raffle_ticket_price,
                raffle_options,
            )?;

            Ok(Response::new()
                .add_attribute("action", "create_raffle")
                .add_attribute("raffle_id", raffle_id.to_string())
                .add_attribute("owner", owner))
        }
        _ => Err(ContractError::Unauthorized {}),
    }
}

/// Asks the nois proxy for the randomness of a closed raffle, paid by the caller.
/// When a request is already in flight, nothing new is sent and any attached funds are returned.
pub fn execute_determine_winner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    raffle_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let raffle_info = RAFFLE_INFO.load(deps.storage, raffle_id)?;

    let raffle_state = get_raffle_state(&env, &raffle_info);
    if raffle_state != RaffleState::Closed {
        return Err(wrong_state("determine the winner", raffle_state));
    }

    if let Some((job_id, _)) = outstanding_job(deps.storage, raffle_id)? {
        let mut response = Response::new();
        if !info.funds.is_empty() {
            response = response.add_message(BankMsg::Send {
                to_address: info.sender.to_string(),
                amount: info.funds,
            });
        }
        return Ok(response
            .add_attribute("action", "determine_winner")
            .add_attribute("raffle_id", raffle_id.to_string())
            .add_attribute("job_id", job_id)
            .add_attribute("status", "pending"));
    }

    assert_oracle_payment(&info, &config.nois_proxy_coin)?;
    let (job_id, request) = request_randomness(deps.storage, &env, &config, raffle_id, 0, None)?;

    Ok(Response::new()
        .add_message(request)
        .add_attribute("action", "determine_winner")
        .add_attribute("raffle_id", raffle_id.to_string())
        .add_attribute("job_id", job_id)
        .add_attribute("status", "requested"))
}

pub fn execute_receive_nois(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    callback: NoisCallback,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness by sending the randomness directly to this contract
    ensure_eq!(
        info.sender,
        config.nois_proxy_addr,
        ContractError::Unauthorized
    );
    let job = RANDOMNESS_JOBS
        .may_load(deps.storage, &callback.job_id)?
        .ok_or_else(|| ContractError::UnknownJob {
            job_id: callback.job_id.clone(),
        })?;
    let raffle_id = job.raffle_id;
    let mut raffle_info = RAFFLE_INFO.load(deps.storage, raffle_id)?;

    let raffle_state = get_raffle_state(&env, &raffle_info);
    if raffle_state != RaffleState::Closed {
        return Err(wrong_state("receive randomness", raffle_state));
    }
    if raffle_info.randomness.is_some() {
        return Err(ContractError::RandomnessAlreadyProvided {});
    }
    callback
        .randomness
        .to_array::<32>()
        .map_err(|_| ContractError::InvalidRandomness)?;

    raffle_info.winner = pick_winner(
        deps.storage,
        raffle_id,
        &callback.randomness,
        raffle_info.number_of_tickets,
    )?;
    raffle_info.randomness = Some(callback.randomness);
    RAFFLE_INFO.save(deps.storage, raffle_id, &raffle_info)?;
    clear_job(deps.storage, raffle_id)?;

    Ok(Response::new()
        .add_attribute("action", "nois_receive")
        .add_attribute("raffle_id", raffle_id.to_string())
        .add_attribute("job_id", callback.job_id)
        .add_attribute(
            "winner",
            raffle_info
                .winner
                .map(|winner| winner.to_string())
                .unwrap_or_else(|| "none".to_string()),
        ))
}

/// Settles a finished raffle. Anyone can trigger it.
/// The prizes go to the winner (back to the owner if no ticket was sold)
/// and the ticket sales are split between the treasury and the raffle owner.
pub fn execute_claim(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    raffle_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut raffle_info = RAFFLE_INFO.load(deps.storage, raffle_id)?;

    // We make sure the raffle is ended, and randomness from nois has been provided.
    let raffle_state = get_raffle_state(&env, &raffle_info);
    if raffle_state != RaffleState::Finished {
        return Err(wrong_state("claim", raffle_state));
    }

    let receiver = raffle_info
        .winner
        .clone()
        .unwrap_or_else(|| raffle_info.owner.clone());
    let asset_messages = get_raffle_asset_messages(&raffle_info, &receiver)?;
    let proceeds_messages = get_raffle_proceeds_messages(&config, &raffle_info)?;

    raffle_info.is_claimed = true;
    RAFFLE_INFO.save(deps.storage, raffle_id, &raffle_info)?;

    Ok(Response::new()
        .add_messages(asset_messages)
        .add_messages(proceeds_messages)
        .add_attribute("action", "claim")
        .add_attribute("raffle_id", raffle_id.to_string())
        .add_attribute("receiver", receiver))
}

/// Replaces a randomness request the oracle never answered.
/// The previous job is forgotten, its callback would be rejected.
pub fn execute_update_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    raffle_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.owner, ContractError::Unauthorized);

    // We check the raffle can receive randomness (good state)
    let raffle_info = RAFFLE_INFO.load(deps.storage, raffle_id)?;
    let raffle_state = get_raffle_state(&env, &raffle_info);
    if raffle_state != RaffleState::Closed {
        return Err(wrong_state("update randomness", raffle_state));
    }

    let attempt = match outstanding_job(deps.storage, raffle_id)? {
        Some((_, job)) => {
            if env.block.time < job.pending_since.plus_seconds(RANDOMNESS_RETRY_WINDOW) {
                return Err(ContractError::RandomnessPending {
                    retry_after: RANDOMNESS_RETRY_WINDOW,
                });
            }
            job.attempt + 1
        }
        None => 0,
    };

    assert_oracle_payment(&info, &config.nois_proxy_coin)?;
    let (job_id, request) =
        request_randomness(deps.storage, &env, &config, raffle_id, attempt, None)?;

    Ok(Response::new()
        .add_message(request)
        .add_attribute("action", "update_randomness")
        .add_attribute("raffle_id", raffle_id.to_string())
        .add_attribute("job_id", job_id))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    name: Option<String>,
    owner: Option<String>,
    fee_addr: Option<String>,
    minimum_raffle_duration: Option<u64>,
    minimum_raffle_timeout: Option<u64>,
    max_tickets_per_raffle: Option<u32>,
    raffle_fee: Option<Decimal>,
    nois_proxy_addr: Option<String>,
    nois_proxy_coin: Option<Coin>,
    creation_coins: Option<Vec<Coin>>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    // ensure msg sender is admin
    ensure_eq!(info.sender, config.owner, ContractError::Unauthorized);

    if let Some(name) = name {
        if !is_valid_name(&name) {
            return Err(ContractError::InvalidName {});
        }
        config.name = name;
    }
    if let Some(owner) = owner {
        config.owner = deps.api.addr_validate(&owner)?;
    }
    if let Some(fee_addr) = fee_addr {
        config.fee_addr = deps.api.addr_validate(&fee_addr)?;
    }
    if let Some(minimum_raffle_duration) = minimum_raffle_duration {
        validate_minimum_duration(minimum_raffle_duration)?;
        config.minimum_raffle_duration = minimum_raffle_duration;
    }
    if let Some(minimum_raffle_timeout) = minimum_raffle_timeout {
        config.minimum_raffle_timeout = minimum_raffle_timeout;
    }
    if let Some(max_tickets_per_raffle) = max_tickets_per_raffle {
        validate_max_tickets(max_tickets_per_raffle)?;
        config.max_tickets_per_raffle = Some(max_tickets_per_raffle);
    }
    if let Some(raffle_fee) = raffle_fee {
        validate_fee(raffle_fee)?;
        config.raffle_fee = raffle_fee;
    }
    if let Some(nois_proxy_addr) = nois_proxy_addr {
        config.nois_proxy_addr = deps
            .api
            .addr_validate(&nois_proxy_addr)
            .map_err(|_| ContractError::InvalidProxyAddress)?;
    }
    if let Some(nois_proxy_coin) = nois_proxy_coin {
        config.nois_proxy_coin = nois_proxy_coin;
    }
    if let Some(creation_coins) = creation_coins {
        validate_creation_coins(&creation_coins)?;
        config.creation_coins = creation_coins;
    }
    // locks and last_raffle_id have their own update paths
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "update_config"))
}

pub fn validate_minimum_duration(minimum_raffle_duration: u64) -> Result<(), ContractError> {
    if minimum_raffle_duration < MINIMUM_RAFFLE_DURATION {
        return Err(ContractError::ConfigValidation(format!(
            "minimum raffle duration must be at least {MINIMUM_RAFFLE_DURATION} second"
        )));
    }
    Ok(())
}

pub fn validate_max_tickets(max_tickets_per_raffle: u32) -> Result<(), ContractError> {
    if max_tickets_per_raffle == 0 {
        return Err(ContractError::ConfigValidation(
            "a raffle must allow at least one ticket".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_creation_coins(creation_coins: &[Coin]) -> Result<(), ContractError> {
    Coins::try_from(creation_coins.to_vec())
        .map_err(|e| ContractError::ConfigValidation(format!("creation coins: {e}")))?;
    Ok(())
}

/// Locking the contract (lock=true) means preventing the creation of new raffles and ticket sales
/// Running raffles can still be settled, claimed and cancelled when a contract is locked
pub fn execute_toggle_lock(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    lock: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    // check the calling address is the authorised multisig
    ensure_eq!(info.sender, config.owner, ContractError::Unauthorized);

    config.locks.lock = lock;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "modify_parameter")
        .add_attribute("parameter", "contract_lock")
        .add_attribute("value", lock.to_string()))
}

pub fn execute_sudo_toggle_lock(
    deps: DepsMut,
    _env: Env,
    lock: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    config.locks.sudo_lock = lock;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "sudo_update_params")
        .add_attribute("parameter", "contract_lock")
        .add_attribute("value", lock.to_string()))
}
