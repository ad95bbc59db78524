#![forbid(unsafe_code)]

pub mod config;
pub mod errors;
pub mod roster;
pub mod roster_utils;
