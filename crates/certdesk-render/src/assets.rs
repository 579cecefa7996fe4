//! Branding images embedded into every printed page.

use std::path::Path;

use base64::Engine;

const LOGO_PATH: &str = "logo/logo.png";
const SIGNATURE_PATH: &str = "signature/signature.png";

/// Logo and signature as `data:image/png;base64` URIs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandingAssets {
    pub logo: Option<String>,
    pub signature: Option<String>,
}

impl BrandingAssets {
    /// Load both images from `assets_dir`. A missing or unreadable image is
    /// logged and left out.
    pub fn load(assets_dir: &Path) -> Self {
        Self {
            logo: load_png(&assets_dir.join(LOGO_PATH)),
            signature: load_png(&assets_dir.join(SIGNATURE_PATH)),
        }
    }
}

/// Wrap PNG bytes in a `data:` URI.
pub fn png_data_uri(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

fn load_png(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => {
            tracing::debug!(path = %path.display(), size = bytes.len(), "Loaded branding image");
            Some(png_data_uri(&bytes))
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Branding image unavailable, printing without it");
            None
        }
    }
}
