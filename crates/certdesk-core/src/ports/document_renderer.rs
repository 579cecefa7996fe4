//! Document renderer port definition.
//!
//! Turns a populated certificate or testimonial into PDF bytes. The
//! implementation owns templates, images and the HTML-to-PDF step.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::PrintableDocument;

/// Errors that can occur while rendering a document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("QR code error: {0}")]
    QrCode(String),

    /// The PDF converter could not be started or timed out.
    #[error("PDF converter unavailable: {0}")]
    ConverterUnavailable(String),

    /// The PDF converter ran but failed.
    #[error("PDF conversion failed: {0}")]
    ConversionFailed(String),
}

#[async_trait]
pub trait DocumentRendererPort: Send + Sync {
    /// Render the document to PDF bytes.
    async fn render(&self, document: &PrintableDocument) -> Result<Vec<u8>, RenderError>;
}
