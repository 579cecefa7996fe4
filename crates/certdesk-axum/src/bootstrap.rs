//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use certdesk_core::{AppCore, AuthSettings, DocumentSettings};
use certdesk_db::{CoreFactory, SeedOutcome, seed_demo_data, setup_database};
use certdesk_render::{BrandingAssets, HtmlDocumentRenderer, HtmlToPdf, WkhtmltopdfConverter};

pub use certdesk_render::{DEFAULT_CONVERTER, DEFAULT_CONVERTER_TIMEOUT};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_PATH: &str = "./certdesk.db";
pub const DEFAULT_ASSETS_DIR: &str = "./public";
pub const DEFAULT_DEMO_PASSWORD: &str = "password123";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` database file.
    pub database_path: PathBuf,
    pub auth: AuthSettings,
    pub documents: DocumentSettings,
    /// Directory holding `logo/logo.png` and `signature/signature.png`.
    pub assets_dir: PathBuf,
    /// HTML-to-PDF converter binary.
    pub converter: PathBuf,
    pub converter_timeout: Duration,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Seed the demo account when the database has no users.
    pub seed_demo_data: bool,
    pub demo_password: String,
}

impl ServerConfig {
    /// Create config with default paths. The JWT secret has no default.
    pub fn with_defaults(jwt_secret: impl Into<String>) -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            auth: AuthSettings::with_secret(jwt_secret),
            documents: DocumentSettings::with_defaults(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            converter: PathBuf::from(DEFAULT_CONVERTER),
            converter_timeout: DEFAULT_CONVERTER_TIMEOUT,
            cors: CorsConfig::default(),
            seed_demo_data: true,
            demo_password: DEFAULT_DEMO_PASSWORD.to_string(),
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }

    #[must_use]
    pub fn with_assets_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.assets_dir = path.into();
        self
    }

    /// Use a different converter binary and timeout.
    #[must_use]
    pub fn with_converter(mut self, program: impl Into<PathBuf>, timeout: Duration) -> Self {
        self.converter = program.into();
        self.converter_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_verify_base_url(mut self, url: impl Into<String>) -> Self {
        self.documents.verify_base_url = url.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    #[must_use]
    pub fn with_demo_seed(mut self, enabled: bool, password: impl Into<String>) -> Self {
        self.seed_demo_data = enabled;
        self.demo_password = password.into();
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

/// Bootstrap the server with the configured external PDF converter.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let converter = Arc::new(WkhtmltopdfConverter::new(
        config.converter.clone(),
        config.converter_timeout,
    ));
    bootstrap_with_converter(config, converter).await
}

/// Bootstrap the server with a caller-supplied HTML-to-PDF converter.
pub async fn bootstrap_with_converter(
    config: &ServerConfig,
    converter: Arc<dyn HtmlToPdf>,
) -> Result<AxumContext> {
    tracing::info!(
        database_path = %config.database_path.display(),
        assets_dir = %config.assets_dir.display(),
        converter = %config.converter.display(),
        verify_base_url = %config.documents.verify_base_url,
        "Axum bootstrap resolved configuration"
    );

    // 1. Database pool with schema
    let pool = setup_database(&config.database_path).await?;
    let repos = CoreFactory::build_repos(pool);

    // 2. Renderer with branding loaded once
    let assets = BrandingAssets::load(&config.assets_dir);
    let renderer = Arc::new(HtmlDocumentRenderer::new(assets, converter)?);

    // 3. AppCore validates settings
    let core = Arc::new(AppCore::new(
        repos.clone(),
        renderer,
        &config.auth,
        config.documents.clone(),
    )?);

    // 4. Demo data
    if config.seed_demo_data {
        let hash = core.auth().hash_password(&config.demo_password)?;
        if let SeedOutcome::Seeded { user_id } = seed_demo_data(&repos, hash).await? {
            tracing::info!(user_id, "Demo account created");
        }
    }

    Ok(AxumContext { core })
}

/// Start the web server on the configured port.
///
/// Runs until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("certdesk listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
