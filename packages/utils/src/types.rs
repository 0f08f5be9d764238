//! Message types of the target chain.
//! Stargaze contracts answer with `StargazeMsgWrapper` custom messages, vanilla chains with `Empty`.

#[cfg(feature = "sg")]
pub type CustomMsg = sg_std::StargazeMsgWrapper;
#[cfg(not(feature = "sg"))]
pub type CustomMsg = cosmwasm_std::Empty;

pub type Response = cosmwasm_std::Response<CustomMsg>;
pub type CosmosMsg = cosmwasm_std::CosmosMsg<CustomMsg>;
