#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::{Commands, SeedArgs, ServeArgs};
pub use parser::Cli;
