//! # Status Board Commands
//!
//! Discord slash commands for the status board bot, built on Poise.
//!
//! Mutating commands are restricted to the configured admin list. Every
//! command replies privately; mutations are saved and the board message is
//! republished before the reply is sent.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod add_game;
pub mod channel;
pub mod choice;
pub mod framework;
pub mod handlers;
pub mod list_games;
pub mod permissions;
pub mod remove_game;
pub mod selection;
pub mod set_status;
pub mod update_board;

pub use channel::*;
pub use choice::*;
pub use framework::*;
pub use handlers::*;
pub use permissions::*;
pub use selection::*;
