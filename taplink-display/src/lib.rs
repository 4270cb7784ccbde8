//! Shared screen rendering for the TapLink pager nodes
//!
//! Both nodes drive a 128x64 SSD1306 and show the same three screens: a
//! ready banner, the composer status screen (entry mode + buffer), and a
//! received/final message. Rendering targets any monochrome
//! `embedded_graphics::DrawTarget` so the firmware crates share one
//! renderer and host code could draw into a simulator.

#![no_std]
#![deny(unsafe_code)]

pub mod screens;

pub use screens::{draw_screen, Screen};
