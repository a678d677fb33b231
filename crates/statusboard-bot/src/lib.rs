//! # Status Board Bot
//!
//! Discord bot that keeps a single status board message up to date.
//!
//! This crate wires configuration, logging, the Poise framework and the
//! liveness endpoint together and owns the application lifecycle.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod health;

pub use bot::*;
pub use error::*;
pub use health::*;
