//! TapLink Broadcast Link Protocol
//!
//! This crate defines the byte-stream protocol between the composer node
//! (keypad) and the receiver node (display + buzzer). The link is
//! one-directional, unacknowledged, and delivers one byte per write.
//!
//! # Protocol Overview
//!
//! A message is streamed as its characters in order, terminated by a single
//! end-of-message marker:
//! ```text
//! ┌──────┬──────┬─────┬──────┬─────┐
//! │ char │ char │ ... │ char │ '#' │
//! └──────┴──────┴─────┴──────┴─────┘
//! ```
//!
//! There is no length prefix and no checksum. Two byte values are reserved
//! as control markers (`!` reset, `#` end of message); every other byte is
//! message content. Corruption on the link shows up only as a garbled
//! message on the receiver.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod buffer;
pub mod decoder;
pub mod encoder;
pub mod wire;

pub use buffer::MessageBuffer;
pub use decoder::{Reassembler, ReceiverAction};
pub use encoder::frame;
pub use wire::{WireByte, END_OF_MESSAGE, MAX_MESSAGE_LEN, RESET};
