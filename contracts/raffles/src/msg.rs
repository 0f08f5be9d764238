use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Decimal};
use nois::NoisCallback;
use utils::state::AssetInfo;

use crate::state::{RaffleInfo, RaffleOptionsMsg, RaffleState};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub nois_proxy_addr: String,
    pub nois_proxy_coin: Coin,
    pub owner: Option<String>,
    pub fee_addr: Option<String>,
    pub minimum_raffle_duration: Option<u64>,
    pub minimum_raffle_timeout: Option<u64>,
    pub max_ticket_number: Option<u32>,
    pub raffle_fee: Decimal,
    pub creation_coins: Option<Vec<Coin>>,
}

#[cw_serde]
pub enum ExecuteMsg {
    CreateRaffle {
        owner: Option<String>,
        assets: Vec<AssetInfo>,
        raffle_options: RaffleOptionsMsg,
        raffle_ticket_price: AssetInfo,
        /// Registers the randomness request at creation, the caller pays the oracle fee
        autocycle: Option<bool>,
    },
    CancelRaffle {
        raffle_id: u64,
    },
    UpdateConfig {
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
    },
    ModifyRaffle {
        raffle_id: u64,
        raffle_ticket_price: Option<AssetInfo>,
        raffle_options: RaffleOptionsMsg,
    },
    BuyTicket {
        raffle_id: u64,
        ticket_count: u32,
        sent_assets: AssetInfo,
    },
    /// Sent by cw721 collections as `receive_nft`, also accepted as `receive`
    #[serde(alias = "receive")]
    ReceiveNft(cw721::Cw721ReceiveMsg),
    DetermineWinner {
        raffle_id: u64,
    },
    NoisReceive {
        callback: NoisCallback,
    },
    ClaimRaffle {
        raffle_id: u64,
    },
    // Admin messages
    ToggleLock {
        lock: bool,
    },
    UpdateRandomness {
        raffle_id: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(RaffleResponse)]
    RaffleInfo { raffle_id: u64 },
    #[returns(AllRafflesResponse)]
    AllRaffles {
        start_after: Option<u64>,
        limit: Option<u32>,
        filters: Option<QueryFilters>,
    },
    #[returns(Vec<String>)]
    AllTickets {
        raffle_id: u64,
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(u32)]
    TicketCount { owner: String, raffle_id: u64 },
}

#[cw_serde]
#[derive(Default)]
pub struct QueryFilters {
    pub states: Option<Vec<String>>,
    pub owner: Option<String>,
    pub ticket_depositor: Option<String>,
    pub contains_token: Option<String>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub name: String,
    pub owner: Addr,
    pub fee_addr: Addr,
    pub last_raffle_id: u64,
    pub minimum_raffle_duration: u64, // The minimum interval in which users can buy raffle tickets
    pub minimum_raffle_timeout: u64, // The minimum interval during which the oracle can provide randomness
    pub max_tickets_per_raffle: Option<u32>,
    pub raffle_fee: Decimal, // The percentage of the resulting ticket-tokens that will go to the treasury
    pub lock: bool,          // Wether the contract can accept new raffles and ticket sales
    pub sudo_lock: bool,
    pub nois_proxy_addr: Addr,
    pub nois_proxy_coin: Coin,
    pub creation_coins: Vec<Coin>,
}

#[cw_serde]
pub struct RaffleResponse {
    pub raffle_id: u64,
    pub raffle_state: RaffleState,
    pub raffle_info: Option<RaffleInfo>,
}

#[cw_serde]
pub struct AllRafflesResponse {
    pub raffles: Vec<RaffleResponse>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{from_json, to_json_binary, Binary};

    use super::*;

    #[test]
    fn nft_hook_accepts_both_names() {
        let expected = ExecuteMsg::ReceiveNft(cw721::Cw721ReceiveMsg {
            sender: "creator".to_string(),
            token_id: "1".to_string(),
            msg: Binary::default(),
        });
        for name in ["receive_nft", "receive"] {
            let raw = format!(
                r#"{{"{name}":{{"sender":"creator","token_id":"1","msg":""}}}}"#
            );
            let msg: ExecuteMsg = from_json(raw.as_bytes()).unwrap();
            assert_eq!(msg, expected);
        }

        // the canonical name is the one cw721 collections send
        let encoded = to_json_binary(&expected).unwrap();
        assert!(String::from_utf8(encoded.to_vec())
            .unwrap()
            .starts_with(r#"{"receive_nft":"#));
    }
}
