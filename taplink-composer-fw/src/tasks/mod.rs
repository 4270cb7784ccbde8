//! Embassy tasks for the composer node

pub mod display;
pub mod input;
pub mod radio;
