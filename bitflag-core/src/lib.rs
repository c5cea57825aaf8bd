#![cfg_attr(not(test), no_std)]

//! Bitflag Core - Flag Set Definitions
//!
//! This crate provides the `BitFlag` set type, its ordered member table,
//! the canonical `<value>(<labels>)` rendering and the matching parser.
//! Nothing here performs I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod flags;
pub mod members;
pub mod render;
pub mod validation;

pub use error::*;
pub use flags::BitFlag;
pub use members::{lookup_label, lookup_name, MEMBERS};
#[cfg(feature = "alloc")]
pub use render::{render, render_raw};
pub use validation::{parse_bits, parse_rendered, validate_bits};
