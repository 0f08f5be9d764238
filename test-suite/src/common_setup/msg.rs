use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

#[cw_serde]
pub struct RaffleCodeIds {
    pub raffle_code_id: u64,
    pub nois_code_id: u64,
    pub cw721_code_id: u64,
}

#[cw_serde]
pub struct RaffleContracts {
    pub raffle: Addr,
    pub nois: Addr,
    pub cw721: Addr,
}
