//! Standalone SVG documents for blobs

// String writing is infallible, so .expect() is safe here
#![allow(clippy::expect_used)]

use crate::path::{Path, SvgNumber};
use crate::style::{BlobStyle, FillType};
use std::fmt::Write;

/// Helper macro for writeln to a String buffer.
/// String writing is infallible, so we use `expect()` with a clear message.
macro_rules! writeln_str {
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).expect("String write is infallible")
    };
}

pub(crate) use writeln_str;

/// Side of the square blob space
pub const BLOB_VIEW_BOX: f64 = 300.0;

/// Stroke width used for outline fills
pub const OUTLINE_STROKE_WIDTH: f64 = 2.0;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render one blob as a standalone SVG document
///
/// The path data is embedded verbatim. Gradient fills reference a single
/// `linearGradient` with id `gradient`.
pub fn blob_svg(path: &Path, style: &BlobStyle) -> String {
    let mut svg = String::new();
    writeln_str!(
        svg,
        r#"<svg xmlns="{}" viewBox="0 0 {} {}">"#,
        SVG_NS,
        SvgNumber(BLOB_VIEW_BOX),
        SvgNumber(BLOB_VIEW_BOX)
    );
    if style.fill == FillType::Gradient {
        writeln_str!(svg, "  <defs>");
        write_gradient(&mut svg, "gradient", style, "    ");
        writeln_str!(svg, "  </defs>");
    }
    writeln_str!(
        svg,
        r#"  <path d="{}" {} />"#,
        path,
        paint_attributes(style, "gradient")
    );
    svg.push_str("</svg>\n");
    svg
}

/// Write a `linearGradient` element for `style` at the given indent
pub(crate) fn write_gradient(out: &mut String, id: &str, style: &BlobStyle, indent: &str) {
    let (x1, y1, x2, y2) = style.gradient_vector();
    writeln_str!(
        out,
        r#"{indent}<linearGradient id="{id}" x1="{}%" y1="{}%" x2="{}%" y2="{}%">"#,
        SvgNumber(x1),
        SvgNumber(y1),
        SvgNumber(x2),
        SvgNumber(y2)
    );
    writeln_str!(
        out,
        r#"{indent}  <stop offset="0%" stop-color="{}" />"#,
        style.color1
    );
    writeln_str!(
        out,
        r#"{indent}  <stop offset="100%" stop-color="{}" />"#,
        style.color2
    );
    writeln_str!(out, "{indent}</linearGradient>");
}

/// `fill`/`stroke` attributes for a path painted with `style`
/// Escape text for use inside a double-quoted XML attribute
pub(crate) fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub(crate) fn paint_attributes(style: &BlobStyle, gradient_id: &str) -> String {
    match style.fill {
        FillType::Gradient => format!(r#"fill="url(#{gradient_id})""#),
        FillType::Solid => format!(r#"fill="{}""#, style.color1),
        FillType::Outline => format!(
            r#"fill="none" stroke="{}" stroke-width="{}""#,
            style.color1,
            SvgNumber(OUTLINE_STROKE_WIDTH)
        ),
    }
}
