//! Subcommand handlers

pub mod card;
pub mod config;
pub mod set;
pub mod status;
