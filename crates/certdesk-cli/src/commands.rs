//! Subcommand definitions.

use std::path::PathBuf;
use std::time::Duration;

use certdesk_axum::ServerConfig;
use certdesk_axum::bootstrap::{
    DEFAULT_ASSETS_DIR, DEFAULT_CONVERTER, DEFAULT_CONVERTER_TIMEOUT, DEFAULT_DEMO_PASSWORD,
    DEFAULT_PORT,
};
use certdesk_core::settings::{
    DEFAULT_ACCESS_TOKEN_MINUTES, DEFAULT_REFRESH_TOKEN_DAYS, DEFAULT_VERIFY_BASE_URL,
};
use clap::{ArgAction, Args, Subcommand};

const DEFAULT_CONVERTER_TIMEOUT_SECS: u64 = DEFAULT_CONVERTER_TIMEOUT.as_secs();

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve(ServeArgs),

    /// Insert the demo account if the database has no users
    Seed(SeedArgs),

    /// Create the database schema and exit
    InitDb,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "CERTDESK_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Secret used to sign access and refresh tokens
    #[arg(long, env = "CERTDESK_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    #[arg(long, env = "CERTDESK_ACCESS_TOKEN_MINUTES", default_value_t = DEFAULT_ACCESS_TOKEN_MINUTES)]
    pub access_token_minutes: i64,

    #[arg(long, env = "CERTDESK_REFRESH_TOKEN_DAYS", default_value_t = DEFAULT_REFRESH_TOKEN_DAYS)]
    pub refresh_token_days: i64,

    /// Page the QR code on printed documents links to
    #[arg(long, env = "CERTDESK_VERIFY_BASE_URL", default_value = DEFAULT_VERIFY_BASE_URL)]
    pub verify_base_url: String,

    /// Directory holding logo/logo.png and signature/signature.png
    #[arg(long, env = "CERTDESK_ASSETS_DIR", default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// HTML-to-PDF converter binary
    #[arg(long, env = "CERTDESK_CONVERTER", default_value = DEFAULT_CONVERTER)]
    pub converter: PathBuf,

    /// Seconds before a PDF conversion is abandoned
    #[arg(long, env = "CERTDESK_CONVERTER_TIMEOUT", default_value_t = DEFAULT_CONVERTER_TIMEOUT_SECS)]
    pub converter_timeout: u64,

    /// Allowed CORS origins, comma separated. All origins when omitted.
    #[arg(long, env = "CERTDESK_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Seed the demo account on startup when the database is empty
    #[arg(long, env = "CERTDESK_SEED_DEMO", default_value_t = true, action = ArgAction::Set)]
    pub seed_demo: bool,

    #[arg(long, env = "CERTDESK_DEMO_PASSWORD", default_value = DEFAULT_DEMO_PASSWORD, hide_env_values = true)]
    pub demo_password: String,
}

impl ServeArgs {
    /// Build the server configuration for the given database file.
    pub fn into_config(self, database: PathBuf) -> ServerConfig {
        let mut config = ServerConfig::with_defaults(self.jwt_secret)
            .with_port(self.port)
            .with_database_path(database)
            .with_assets_dir(self.assets_dir)
            .with_converter(self.converter, Duration::from_secs(self.converter_timeout))
            .with_verify_base_url(self.verify_base_url)
            .with_demo_seed(self.seed_demo, self.demo_password);
        config.auth.access_token_minutes = self.access_token_minutes;
        config.auth.refresh_token_days = self.refresh_token_days;

        let origins: Vec<String> = self
            .cors_origins
            .into_iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if origins.is_empty() {
            config
        } else {
            config.with_allowed_origins(origins)
        }
    }
}

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Password for the demo account
    #[arg(long, env = "CERTDESK_DEMO_PASSWORD", default_value = DEFAULT_DEMO_PASSWORD, hide_env_values = true)]
    pub demo_password: String,
}
