//! Embedded HTML templates.

use certdesk_core::{DocumentKind, PrintableDocument, RenderError};
use minijinja::Environment;
use serde::Serialize;

use crate::assets::BrandingAssets;

const CERTIFICATE_TEMPLATE: &str = "certificate.html";
const TESTIMONIAL_TEMPLATE: &str = "testimonial.html";

/// Document fields plus the images the page embeds.
#[derive(Serialize)]
struct PageContext<'a, T: Serialize> {
    #[serde(flatten)]
    fields: &'a T,
    qr_code: &'a str,
    logo_path: Option<&'a str>,
    signature_path: Option<&'a str>,
}

/// MiniJinja environment holding both document templates.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(
            CERTIFICATE_TEMPLATE,
            include_str!("../templates/certificate.html"),
        )
        .map_err(template_error)?;
        env.add_template(
            TESTIMONIAL_TEMPLATE,
            include_str!("../templates/testimonial.html"),
        )
        .map_err(template_error)?;
        Ok(Self { env })
    }

    /// Render the HTML page for a document.
    pub fn render(
        &self,
        document: &PrintableDocument,
        qr_code: &str,
        assets: &BrandingAssets,
    ) -> Result<String, RenderError> {
        let logo_path = assets.logo.as_deref();
        let signature_path = assets.signature.as_deref();

        match document {
            PrintableDocument::Certificate(fields) => self.render_page(
                DocumentKind::Certificate,
                &PageContext {
                    fields,
                    qr_code,
                    logo_path,
                    signature_path,
                },
            ),
            PrintableDocument::Testimonial(fields) => self.render_page(
                DocumentKind::Testimonial,
                &PageContext {
                    fields,
                    qr_code,
                    logo_path,
                    signature_path,
                },
            ),
        }
    }

    fn render_page<T: Serialize>(
        &self,
        kind: DocumentKind,
        context: &PageContext<'_, T>,
    ) -> Result<String, RenderError> {
        let name = match kind {
            DocumentKind::Certificate => CERTIFICATE_TEMPLATE,
            DocumentKind::Testimonial => TESTIMONIAL_TEMPLATE,
        };
        self.env
            .get_template(name)
            .and_then(|template| template.render(context))
            .map_err(template_error)
    }
}

fn template_error(e: minijinja::Error) -> RenderError {
    RenderError::Template(e.to_string())
}
