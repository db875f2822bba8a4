#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use ship::*;
