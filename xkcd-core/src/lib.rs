#![deny(clippy::all)]
#![deny(clippy::pedantic)]

pub use api::*;
pub use comic::*;
pub use errors::*;
pub use index::*;
pub use text::*;

pub mod api;
mod comic;
mod errors;
mod index;
mod text;
