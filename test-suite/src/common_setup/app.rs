use std::ops::{Deref, DerefMut};

use cosmwasm_std::{Empty, Querier, QuerierResult};
use cw_multi_test::{BasicApp, BasicAppBuilder};
use sg_std::StargazeMsgWrapper;

/// Raffle responses carry Stargaze custom messages, the chain module itself is never reached
pub type StargazeBasicApp = BasicApp<StargazeMsgWrapper, Empty>;

pub struct StargazeApp(StargazeBasicApp);

impl Deref for StargazeApp {
    type Target = StargazeBasicApp;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StargazeApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Querier for StargazeApp {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        self.0.raw_query(bin_request)
    }
}

impl StargazeApp {
    pub fn new() -> Self {
        Self(BasicAppBuilder::<StargazeMsgWrapper, Empty>::new_custom().build(|_, _, _| {}))
    }
}

impl Default for StargazeApp {
    fn default() -> Self {
        Self::new()
    }
}
