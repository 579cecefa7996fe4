#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod seed;
pub mod setup;

pub use factory::CoreFactory;

pub use repositories::{
    SqliteAcademicRecordRepository, SqliteDocumentRepository, SqliteTransactionRepository,
    SqliteUserRepository,
};

pub use seed::{DEMO_EMAIL, SeedOutcome, seed_demo_data};

pub use setup::setup_database;
#[cfg(test)]
pub use setup::setup_test_database;
