//! `DocumentRendererPort` implementation: template → HTML → PDF.

use std::sync::Arc;

use async_trait::async_trait;
use certdesk_core::{DocumentRendererPort, PrintableDocument, RenderError};

use crate::assets::BrandingAssets;
use crate::pdf::HtmlToPdf;
use crate::qr::qr_svg_data_uri;
use crate::templates::Templates;

pub struct HtmlDocumentRenderer {
    templates: Templates,
    assets: BrandingAssets,
    converter: Arc<dyn HtmlToPdf>,
}

impl HtmlDocumentRenderer {
    pub fn new(assets: BrandingAssets, converter: Arc<dyn HtmlToPdf>) -> Result<Self, RenderError> {
        Ok(Self {
            templates: Templates::new()?,
            assets,
            converter,
        })
    }

    /// Render the HTML page without converting it.
    pub fn render_html(&self, document: &PrintableDocument) -> Result<String, RenderError> {
        let qr_code = qr_svg_data_uri(document.verify_url())?;
        self.templates.render(document, &qr_code, &self.assets)
    }
}

#[async_trait]
impl DocumentRendererPort for HtmlDocumentRenderer {
    async fn render(&self, document: &PrintableDocument) -> Result<Vec<u8>, RenderError> {
        let html = self.render_html(document)?;
        tracing::debug!(
            kind = document.kind().as_str(),
            reference = document.reference(),
            html_len = html.len(),
            "Converting document to PDF"
        );
        self.converter
            .convert(&html, document.kind().is_landscape())
            .await
    }
}
