//! Seed command handler.

use std::path::Path;

use anyhow::Result;
use certdesk_core::PasswordHasher;
use certdesk_core::settings::{DEFAULT_ARGON2_ITERATIONS, DEFAULT_ARGON2_MEMORY_KIB};
use certdesk_db::{CoreFactory, DEMO_EMAIL, SeedOutcome, seed_demo_data, setup_database};

use crate::commands::SeedArgs;

/// Insert the demo account unless the database already has users.
pub async fn execute(args: SeedArgs, database: &Path) -> Result<SeedOutcome> {
    let pool = setup_database(database).await?;
    let repos = CoreFactory::build_repos(pool.clone());

    let hasher = PasswordHasher::new(DEFAULT_ARGON2_MEMORY_KIB, DEFAULT_ARGON2_ITERATIONS)?;
    let outcome = seed_demo_data(&repos, hasher.hash(&args.demo_password)?).await?;
    pool.close().await;

    match outcome {
        SeedOutcome::Seeded { user_id } => {
            println!("Created demo account {DEMO_EMAIL} (id {user_id})");
        }
        SeedOutcome::Skipped => println!("Demo data already present; nothing seeded"),
    }
    Ok(outcome)
}
