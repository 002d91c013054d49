use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("At least {required} valid wallet addresses are required, got {got}")]
    TooFewValidAddresses { required: usize, got: usize },

    #[error("No networks selected for analysis")]
    NoNetworksSelected,

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
}
