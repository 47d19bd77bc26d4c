pub mod client;
pub mod status;
