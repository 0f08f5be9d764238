use cw_multi_test::{Contract, ContractWrapper};
use sg_std::StargazeMsgWrapper;

use super::app::StargazeApp;

pub fn custom_mock_app() -> StargazeApp {
    StargazeApp::default()
}

pub fn contract_raffles() -> Box<dyn Contract<StargazeMsgWrapper>> {
    let contract = ContractWrapper::new(
        raffles::contract::execute,
        raffles::contract::instantiate,
        raffles::contract::query,
    )
    .with_sudo(raffles::contract::sudo)
    .with_migrate(raffles::contract::migrate);
    Box::new(contract)
}

pub fn contract_fake_nois() -> Box<dyn Contract<StargazeMsgWrapper>> {
    let contract = ContractWrapper::new(
        super::nois_proxy::execute,
        super::nois_proxy::instantiate,
        super::nois_proxy::query,
    );
    Box::new(contract)
}

pub fn contract_cw721() -> Box<dyn Contract<StargazeMsgWrapper>> {
    let contract = ContractWrapper::new_with_empty(
        cw721_base::entry::execute,
        cw721_base::entry::instantiate,
        cw721_base::entry::query,
    );
    Box::new(contract)
}
