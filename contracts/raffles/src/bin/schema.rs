use cosmwasm_schema::write_api;

use raffles::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use utils::state::SudoMsg;

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
        migrate: MigrateMsg,
        sudo: SudoMsg,
    }
}
