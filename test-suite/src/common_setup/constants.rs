use cosmwasm_std::Decimal;

pub const CREATION_FEE_AMNT: u128 = 50;
pub const NOIS_AMOUNT: u128 = 50;
pub const NOIS_DENOM: &str = "unois";
pub const TICKET_PRICE: u128 = 4;
pub const RAFFLE_TAX: Decimal = Decimal::percent(5);

pub const OWNER_ADDR: &str = "fee";
pub const TREASURY_ADDR: &str = "collector";
pub const RAFFLE_NAME: &str = "raffle contract name";
pub const NFT_SYMBOL: &str = "RAFL";
