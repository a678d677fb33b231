//! # Status Board
//!
//! The platform-independent core of the status board bot: the tracked
//! status mapping, its JSON persistence, rendering into a display document,
//! and publishing that document through a [`BoardChannel`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod mapping;
pub mod publisher;
pub mod render;
pub mod status;
pub mod store;
pub mod traits;

pub use mapping::*;
pub use publisher::*;
pub use render::*;
pub use status::*;
pub use store::*;
pub use traits::*;
