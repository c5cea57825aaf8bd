//! Bitflag - Flag Set Rendering
//!
//! This library wraps the `bitflag-core` definitions with the pieces that
//! need `std`: the command-line front end and logging setup.
//!
//! ## Architecture
//!
//! - **bitflag-core**: the `BitFlag` type, member table, rendering and parsing (no I/O)
//! - **bitflag**: CLI, console output and `tracing` initialization
//!
//! ## Quick Start
//!
//! ```rust
//! use bitflag::{render, BitFlag};
//!
//! let flag = BitFlag::ACTIVE | BitFlag::RECEIVE;
//! assert_eq!(render(flag), "5(Active|Receive)");
//! assert_eq!("5(Active|Receive)".parse::<BitFlag>(), Ok(flag));
//! ```

pub use bitflag_core::{
    // Flag set and members
    BitFlag, MEMBERS, lookup_label, lookup_name,
    // Rendering
    render, render_raw,
    // Parsing and validation
    parse_bits, parse_rendered, validate_bits,
    // Error handling
    FlagError, Result,
};

pub mod cli;
pub mod logging;

pub use cli::{run, Cli, CliError, Commands};
