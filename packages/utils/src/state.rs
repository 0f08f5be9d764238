use std::collections::HashSet;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{coin, to_json_binary, Coin, StdResult, WasmMsg};
use serde::Serialize;

use crate::types::CosmosMsg;

pub const MAX_COMMENT_SIZE: u64 = 20_000;
pub const NATIVE_DENOM: &str = "ustars";

// ASSETS
#[cw_serde]
pub struct Cw721Coin {
    pub address: String,
    pub token_id: String,
}

#[cw_serde]
pub struct Sg721Token {
    pub address: String,
    pub token_id: String,
}

/// A prize or a price. Serializes as `{"cw721_coin": ..}`, `{"sg721_token": ..}` or `{"coin": ..}`.
#[cw_serde]
pub enum AssetInfo {
    Cw721Coin(Cw721Coin),
    Sg721Token(Sg721Token),
    Coin(Coin),
}

impl AssetInfo {
    pub fn coin(amount: u128, denom: &str) -> Self {
        AssetInfo::Coin(coin(amount, denom))
    }

    pub fn cw721(address: &str, token_id: &str) -> Self {
        AssetInfo::Cw721Coin(Cw721Coin {
            address: address.to_string(),
            token_id: token_id.to_string(),
        })
    }

    pub fn sg721(address: &str, token_id: &str) -> Self {
        AssetInfo::Sg721Token(Sg721Token {
            address: address.to_string(),
            token_id: token_id.to_string(),
        })
    }

    /// Collection address for NFTs, denom for coins
    pub fn token_key(&self) -> &str {
        match self {
            AssetInfo::Cw721Coin(nft) => &nft.address,
            AssetInfo::Sg721Token(nft) => &nft.address,
            AssetInfo::Coin(coin) => &coin.denom,
        }
    }
}

#[cw_serde]
pub struct Locks {
    /// set by the contract owner
    pub lock: bool,
    /// set by chain governance through the sudo entry point
    pub sudo_lock: bool,
}

impl Locks {
    pub fn is_locked(&self) -> bool {
        self.lock || self.sudo_lock
    }
}

#[cw_serde]
pub enum SudoMsg {
    ToggleLock { lock: bool },
}

pub fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < 3 || bytes.len() > 50 {
        return false;
    }
    true
}

pub fn is_valid_comment(comment: &str) -> bool {
    comment.as_bytes().len() as u64 <= MAX_COMMENT_SIZE
}

/// NFTs are compared by collection and token id, coins by denom only.
pub fn all_elements_unique(assets: &[AssetInfo]) -> bool {
    let mut seen = HashSet::new();
    assets
        .iter()
        .all(|asset| seen.insert(asset_key(asset)))
}

fn asset_key(asset: &AssetInfo) -> String {
    match asset {
        AssetInfo::Cw721Coin(nft) => format!("cw721:{}:{}", nft.address, nft.token_id),
        AssetInfo::Sg721Token(nft) => format!("sg721:{}:{}", nft.address, nft.token_id),
        AssetInfo::Coin(c) => format!("coin:{}", c.denom),
    }
}

pub fn into_cosmos_msg<M: Serialize, T: Into<String>>(
    message: M,
    contract_addr: T,
    funds: Option<Vec<Coin>>,
) -> StdResult<CosmosMsg> {
    let msg = to_json_binary(&message)?;
    let execute = WasmMsg::Execute {
        contract_addr: contract_addr.into(),
        msg,
        funds: funds.unwrap_or_default(),
    };
    Ok(execute.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicated_assets() {
        let nft = AssetInfo::cw721("collection", "1");
        assert!(all_elements_unique(&[nft.clone(), AssetInfo::cw721("collection", "2")]));
        assert!(!all_elements_unique(&[nft.clone(), nft]));
        // one entry per denom
        assert!(!all_elements_unique(&[
            AssetInfo::coin(10, "ustars"),
            AssetInfo::coin(20, "ustars")
        ]));
        // same token id on the two standards
        assert!(all_elements_unique(&[
            AssetInfo::cw721("collection", "1"),
            AssetInfo::sg721("collection", "1")
        ]));
    }

    #[test]
    fn names_and_comments() {
        assert!(!is_valid_name("ab"));
        assert!(is_valid_name("raffle"));
        assert!(!is_valid_name(&"a".repeat(51)));
        assert!(is_valid_comment(&"a".repeat(MAX_COMMENT_SIZE as usize)));
        assert!(!is_valid_comment(&"a".repeat(MAX_COMMENT_SIZE as usize + 1)));
    }
}
