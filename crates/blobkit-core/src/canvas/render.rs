//! SVG rendering of a whole canvas

// String writing is infallible, so .expect() is safe here
#![allow(clippy::expect_used)]

use super::{Canvas, PlacedBlob};
use crate::export::{BLOB_VIEW_BOX, paint_attributes, write_gradient, writeln_str, xml_escape};
use crate::path::SvgNumber;
use crate::style::FillType;
use std::fmt::Write;

const BLUR_FILTER_ID: &str = "blob-blur";

impl Canvas {
    /// Render the canvas as an SVG document
    ///
    /// Layers, bottom to top: background, blob group (blurred when
    /// `blur > 0`).
    pub fn to_svg(&self) -> String {
        self.render(None)
    }

    /// Render the canvas with a grain overlay image on top
    ///
    /// `noise_href` is escaped into the `href` attribute, typically the file name of a PNG
    /// written with [`crate::export::export_png`]. The image is stretched
    /// over the canvas with pixelated sampling and screen blending at the
    /// overlay opacity.
    pub fn to_svg_with_noise(&self, noise_href: &str) -> String {
        self.render(Some(noise_href))
    }

    fn render(&self, noise_href: Option<&str>) -> String {
        let mut svg = String::new();
        writeln_str!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height
        );

        let needs_blur = self.blur > 0.0;
        let has_gradients = self
            .blobs
            .iter()
            .any(|b| b.blob.style.fill == FillType::Gradient);

        if needs_blur || has_gradients {
            writeln_str!(svg, "  <defs>");
            if needs_blur {
                writeln_str!(
                    svg,
                    r#"    <filter id="{BLUR_FILTER_ID}" x="-50%" y="-50%" width="200%" height="200%">"#
                );
                writeln_str!(
                    svg,
                    r#"      <feGaussianBlur stdDeviation="{}" />"#,
                    SvgNumber(self.blur)
                );
                writeln_str!(svg, "    </filter>");
            }
            for (i, placed) in self.blobs.iter().enumerate() {
                if placed.blob.style.fill == FillType::Gradient {
                    write_gradient(&mut svg, &gradient_id(i), &placed.blob.style, "    ");
                }
            }
            writeln_str!(svg, "  </defs>");
        }

        writeln_str!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}" />"#,
            self.background
        );

        if needs_blur {
            writeln_str!(svg, r#"  <g filter="url(#{BLUR_FILTER_ID})">"#);
        } else {
            writeln_str!(svg, "  <g>");
        }
        for (i, placed) in self.blobs.iter().enumerate() {
            writeln_str!(svg, r#"    <g transform="{}">"#, transform(placed));
            writeln_str!(
                svg,
                r#"      <path d="{}" {} />"#,
                xml_escape(&placed.blob.path),
                paint_attributes(&placed.blob.style, &gradient_id(i))
            );
            writeln_str!(svg, "    </g>");
        }
        writeln_str!(svg, "  </g>");

        if let Some(href) = noise_href {
            writeln_str!(
                svg,
                r#"  <image href="{}" x="0" y="0" width="{}" height="{}" preserveAspectRatio="none" opacity="{}" style="image-rendering: pixelated; mix-blend-mode: screen" />"#,
                xml_escape(href),
                self.width,
                self.height,
                SvgNumber(self.noise.opacity)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn gradient_id(index: usize) -> String {
    format!("blob-gradient-{index}")
}

/// Place the blob-space centre at `(x, y)`, then rotate and scale about it
fn transform(placed: &PlacedBlob) -> String {
    let half = BLOB_VIEW_BOX / 2.0;
    format!(
        "translate({} {}) rotate({}) scale({} {}) translate({} {})",
        SvgNumber(placed.x),
        SvgNumber(placed.y),
        SvgNumber(placed.rotation),
        SvgNumber(placed.scale * placed.blob.width),
        SvgNumber(placed.scale * placed.blob.height),
        SvgNumber(-half),
        SvgNumber(-half)
    )
}
