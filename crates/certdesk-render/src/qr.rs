//! QR codes for the verification link printed on each document.

use base64::Engine;
use certdesk_core::RenderError;
use qrcode::QrCode;
use qrcode::render::svg;

const MIN_SIZE_PX: u32 = 200;

/// Encode `data` as an SVG QR code wrapped in a base64 `data:` URI.
pub fn qr_svg_data_uri(data: &str) -> Result<String, RenderError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| RenderError::QrCode(e.to_string()))?;
    let image = code
        .render::<svg::Color<'_>>()
        .min_dimensions(MIN_SIZE_PX, MIN_SIZE_PX)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(format!(
        "data:image/svg+xml;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(image)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_svg_data_uri() {
        let uri = qr_svg_data_uri("http://localhost:5173/verify?ref=TXN1").unwrap();
        let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();

        let svg = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        let svg = String::from_utf8(svg).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn different_urls_give_different_codes() {
        let a = qr_svg_data_uri("http://localhost/verify?ref=TXN1").unwrap();
        let b = qr_svg_data_uri("http://localhost/verify?ref=TXN2").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let huge = "x".repeat(8000);
        assert!(matches!(qr_svg_data_uri(&huge), Err(RenderError::QrCode(_))));
    }
}
