//! # Status Board Config
//!
//! Type-safe configuration for the status board bot.
//!
//! Values come from built-in defaults, an optional YAML file and the process
//! environment, in that order of precedence (later wins).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
