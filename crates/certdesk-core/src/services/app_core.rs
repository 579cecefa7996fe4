//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, HTTP)
//! receive an `AppCore` instance and use it to access all functionality.

use std::sync::Arc;

use crate::auth::{PasswordHasher, TokenIssuer};
use crate::ports::{CoreError, DocumentRendererPort, Repos};
use crate::settings::{AuthSettings, DocumentSettings};

use super::{AuthService, DocumentService, PaymentService, UserService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let renderer = Arc::new(HtmlDocumentRenderer::new(...));
/// let core = AppCore::new(repos, renderer, auth_settings, DocumentSettings::default())?;
///
/// let pair = core.auth().login("john.doe@example.com", "password123").await?;
/// ```
pub struct AppCore {
    auth: AuthService,
    users: UserService,
    payments: PaymentService,
    documents: DocumentService,
}

impl AppCore {
    /// Validate settings and wire up every service.
    pub fn new(
        repos: Repos,
        renderer: Arc<dyn DocumentRendererPort>,
        auth_settings: &AuthSettings,
        document_settings: DocumentSettings,
    ) -> Result<Self, CoreError> {
        auth_settings.validate()?;
        document_settings.validate()?;

        let hasher = PasswordHasher::from_settings(auth_settings)?;
        let tokens = TokenIssuer::new(auth_settings);

        Ok(Self {
            auth: AuthService::new(repos.users.clone(), hasher.clone(), tokens),
            users: UserService::new(repos.users.clone(), hasher),
            payments: PaymentService::new(
                repos.users.clone(),
                repos.documents.clone(),
                repos.transactions.clone(),
            ),
            documents: DocumentService::new(repos, renderer, document_settings),
        })
    }

    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub const fn users(&self) -> &UserService {
        &self.users
    }

    pub const fn payments(&self) -> &PaymentService {
        &self.payments
    }

    pub const fn documents(&self) -> &DocumentService {
        &self.documents
    }
}
