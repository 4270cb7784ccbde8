//! Board-agnostic core logic for the TapLink composer
//!
//! This crate contains all composer-side application logic that does not
//! depend on specific hardware:
//!
//! - Keypad event definitions and the multi-tap letter table
//! - Shortcut code expansion
//! - Timing configuration
//! - The input state machine (multi-tap disambiguation, mode toggling,
//!   commit and reset handling)
//!
//! Time enters as a caller-supplied monotonic millisecond count, so the
//! whole crate runs and tests on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod composer;
pub mod config;
pub mod keys;
pub mod shortcuts;

pub use composer::{Action, Composer};
pub use config::TimingConfig;
pub use keys::Key;
