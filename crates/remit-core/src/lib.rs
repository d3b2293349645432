//! Core domain types for the RemitAbeg connection & pricing core.
//!
//! This crate provides the fundamental types shared across the system:
//! - `WalletAddress`, `WalletSession`: canonical wallet-connection state
//! - `Balance`, `TokenBalance`: on-chain balance display states
//! - `TransferAmount`: bounded transfer amount for the fee calculator
//! - `Usd`: precision-safe money type

pub mod balance;
pub mod error;
pub mod money;
pub mod session;
pub mod transfer;

pub use balance::{Balance, TokenBalance};
pub use error::{CoreError, Result};
pub use money::Usd;
pub use session::{WalletAddress, WalletSession};
pub use transfer::TransferAmount;
