#![cfg_attr(not(test), no_std)]

mod color;
mod error;
mod palette;

#[cfg(feature = "capi")]
mod capi;

pub use smart_leds::RGB8;

pub use crate::color::{PURPLE, WHITE};
pub use crate::error::Error;
pub use crate::palette::{by_name, NAMES, PALETTE_BYTES, PALETTE_SIZE, PURPLE_WHITE, Palette16};

#[cfg(feature = "capi")]
pub use crate::capi::*;
