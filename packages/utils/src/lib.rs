pub mod payment;
pub mod state;
pub mod types;
