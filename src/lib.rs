//! playfetch library crate.
//!
//! Renders the current track's album art as colorized ASCII next to a small
//! now-playing panel. The [`ascii`] module is usable on its own: give
//! [`ascii::convert`] an artwork URI and print the returned lines.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod layout;
pub mod media;
pub mod panel;
