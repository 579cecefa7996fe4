#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod assets;
pub mod pdf;
pub mod qr;
pub mod renderer;
pub mod templates;

pub use assets::BrandingAssets;
pub use pdf::{DEFAULT_CONVERTER, DEFAULT_CONVERTER_TIMEOUT, HtmlToPdf, WkhtmltopdfConverter};
pub use renderer::HtmlDocumentRenderer;
pub use templates::Templates;
