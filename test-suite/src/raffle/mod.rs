pub mod setup;
pub mod tests;
