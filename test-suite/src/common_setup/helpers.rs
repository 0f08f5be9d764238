use anyhow::Error;
use cosmwasm_std::Timestamp;
use cw_multi_test::AppResponse;

use super::app::StargazeApp;

pub fn setup_block_time(router: &mut StargazeApp, nanos: u64, height: Option<u64>, chain_id: &str) {
    let mut block = router.block_info();
    block.time = Timestamp::from_nanos(nanos);
    if let Some(h) = height {
        block.height = h;
    }
    block.chain_id = chain_id.to_string();
    router.set_block(block);
}

/// Moves the chain forward by `seconds`, one block per call
pub fn advance_time(router: &mut StargazeApp, seconds: u64) {
    let mut block = router.block_info();
    block.time = block.time.plus_seconds(seconds);
    block.height += 1;
    router.set_block(block);
}

pub fn assert_error(res: Result<AppResponse, Error>, expected: String) {
    assert_eq!(res.unwrap_err().source().unwrap().to_string(), expected);
}

/// For errors raised in a sub-message, several contexts deep
pub fn assert_root_error(res: Result<AppResponse, Error>, expected: String) {
    assert_eq!(res.unwrap_err().root_cause().to_string(), expected);
}
