//! Command-line interface: argument definitions and command
//! implementations.

pub mod args;
pub mod commands;

pub use args::{AddressArgs, Cli, Commands, KeySourceArgs, SignArgs, WalletArg};
