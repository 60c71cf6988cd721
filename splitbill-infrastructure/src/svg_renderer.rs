use resvg::usvg::{Options, Tree};
use splitbill_application::{RenderError, SummaryRenderer};
use splitbill_presentation::summary_svg;
use std::sync::{Arc, LazyLock};
use tiny_skia::{Pixmap, Transform};

static OPTIONS: LazyLock<Options> = LazyLock::new(|| {
    let mut fontdb = resvg::usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    tracing::debug!(faces = fontdb.len(), "Loaded system fonts");

    fontdb.set_sans_serif_family("Arial");
    fontdb.set_serif_family("Times New Roman");
    fontdb.set_monospace_family("Courier New");

    Options {
        fontdb: Arc::new(fontdb),
        ..Options::default()
    }
});

/// Rasterizes an SVG document to PNG bytes.
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>, RenderError> {
    let tree =
        Tree::from_str(svg, &OPTIONS).map_err(|err| RenderError::InvalidSvg(err.to_string()))?;
    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::EmptyCanvas)?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
    pixmap
        .encode_png()
        .map_err(|err| RenderError::Encode(err.to_string()))
}

/// Draws summary lines onto a fixed-width white page.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngSummaryRenderer;

impl SummaryRenderer for PngSummaryRenderer {
    fn render(&self, lines: &[String]) -> Result<Vec<u8>, RenderError> {
        let png = svg_to_png(&summary_svg(lines))?;
        tracing::debug!(lines = lines.len(), bytes = png.len(), "Summary image rendered");
        Ok(png)
    }
}
