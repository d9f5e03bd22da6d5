pub mod gateway;
pub mod transport;
