//! Command handlers.
//!
//! Each handler owns one subcommand and talks to the database or server
//! adapter directly.

pub mod init_db;
pub mod seed;
pub mod serve;
