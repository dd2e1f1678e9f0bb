// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod airdrop;
pub mod claim;
pub mod error;
pub mod http;
pub mod progress;
pub mod scrape;
pub mod store;

pub use airdrop::{Airdrop, AirdropView};
pub use error::RegistryError;
pub use store::AirdropStore;
