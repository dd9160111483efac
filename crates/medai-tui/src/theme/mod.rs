//! Colors and styles for the playground
//!
//! `palette` holds raw RGB constants; `styles` builds semantic styles and
//! blocks on top of them.

pub mod palette;
pub mod styles;
