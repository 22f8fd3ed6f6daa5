// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod anim;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod router;
pub mod sync;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;
