//! Auxiliary items.

pub mod buf;
