use std::{borrow::Cow, fmt::Write};

pub(crate) const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

const FONT_SIZE: u32 = 14;
const CELL_PADDING: u32 = 10;
const ROW_HEIGHT: u32 = FONT_SIZE + CELL_PADDING * 2;
const HEADER_BG: &str = "#2d3748";
const HEADER_TEXT: &str = "#ffffff";
const ROW_BG_EVEN: &str = "#ffffff";
const ROW_BG_ODD: &str = "#f1f5f9";
const ROW_TEXT: &str = "#111827";
const BORDER_COLOR: &str = "#cbd5e0";
const CHAR_WIDTH: f32 = 8.0;
const MIN_COLUMN_WIDTH: u32 = 24;
const TABLE_SPACING: u32 = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    fn anchor(self) -> &'static str {
        match self {
            Alignment::Left => "start",
            Alignment::Center => "middle",
            Alignment::Right => "end",
        }
    }

    fn text_x(self, cell_x: u32, cell_width: u32) -> u32 {
        match self {
            Alignment::Left => cell_x,
            Alignment::Center => cell_x + cell_width / 2,
            Alignment::Right => cell_x + cell_width,
        }
    }
}

/// Builds a striped SVG table. Column widths are estimated from text length.
#[derive(Default)]
pub struct SvgTableBuilder<'a> {
    headers: Vec<Cow<'a, str>>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<Cow<'a, str>>>,
}

impl<'a> SvgTableBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, header: impl Into<Cow<'a, str>>, alignment: Alignment) -> Self {
        self.headers.push(header.into());
        self.alignments.push(alignment);
        self
    }

    pub fn row(mut self, cells: impl IntoIterator<Item = Cow<'a, str>>) -> Self {
        self.rows.push(cells.into_iter().collect());
        self
    }

    pub fn build(self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let widths = self.column_widths();
        let total_width = widths.iter().sum::<u32>() + (widths.len() as u32 + 1) * CELL_PADDING;
        let total_height = ROW_HEIGHT * (1 + self.rows.len() as u32) + 2;
        let inner_width = total_width - 2;

        let mut svg = String::with_capacity(1024 + self.rows.len() * 256);
        let _ = writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_width}" height="{total_height}" viewBox="0 0 {total_width} {total_height}">"#
        );
        let _ = writeln!(
            &mut svg,
            r#"<style>text {{ font-family: {FONT_FAMILY}; font-size: {FONT_SIZE}px; }}</style>"#
        );
        let _ = writeln!(
            &mut svg,
            r#"<rect width="{total_width}" height="{total_height}" fill="{BORDER_COLOR}" rx="4" />"#
        );
        let _ = writeln!(
            &mut svg,
            r#"<rect x="1" y="1" width="{inner_width}" height="{ROW_HEIGHT}" fill="{HEADER_BG}" rx="3" />"#
        );
        self.write_cells(&mut svg, &self.headers, &widths, 1, HEADER_TEXT);

        for (idx, row) in self.rows.iter().enumerate() {
            let y = ROW_HEIGHT * (1 + idx as u32) + 1;
            let bg = if idx % 2 == 0 { ROW_BG_EVEN } else { ROW_BG_ODD };
            let _ = writeln!(
                &mut svg,
                r#"<rect x="1" y="{y}" width="{inner_width}" height="{ROW_HEIGHT}" fill="{bg}" />"#
            );
            self.write_cells(&mut svg, row, &widths, y, ROW_TEXT);
        }

        svg.push_str("</svg>");
        svg
    }

    fn column_widths(&self) -> Vec<u32> {
        let mut widths: Vec<u32> = self
            .headers
            .iter()
            .map(|h| estimate_text_width(h))
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(estimate_text_width(cell));
            }
        }
        widths
    }

    fn write_cells(
        &self,
        svg: &mut String,
        cells: &[Cow<'_, str>],
        widths: &[u32],
        y: u32,
        fill: &str,
    ) {
        let baseline = y + ROW_HEIGHT / 2 + FONT_SIZE / 2 - 2;
        let mut x = CELL_PADDING;
        for ((cell, width), alignment) in cells.iter().zip(widths).zip(&self.alignments) {
            let _ = writeln!(
                svg,
                r#"<text x="{}" y="{baseline}" fill="{fill}" text-anchor="{}">{}</text>"#,
                alignment.text_x(x, *width),
                alignment.anchor(),
                escape_xml(cell)
            );
            x += width + CELL_PADDING;
        }
    }
}

fn estimate_text_width(text: &str) -> u32 {
    let width: f32 = text
        .chars()
        .map(|c| if c.is_ascii() { CHAR_WIDTH } else { CHAR_WIDTH * 2.0 })
        .sum();
    (width.ceil() as u32).max(MIN_COLUMN_WIDTH) + CELL_PADDING * 2
}

pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Stacks SVG documents top to bottom, centred horizontally.
///
/// Returns `None` when `svgs` is empty or any document lacks a numeric
/// `width`/`height`.
pub fn combine_svgs_vertically(svgs: &[&str]) -> Option<String> {
    if svgs.is_empty() {
        return None;
    }

    let parts = svgs
        .iter()
        .map(|svg| {
            Some((
                svg_dimension(svg, "width")?,
                svg_dimension(svg, "height")?,
                svg_body(svg)?,
            ))
        })
        .collect::<Option<Vec<_>>>()?;

    let max_width = parts.iter().map(|(width, _, _)| *width).max().unwrap_or(0);
    let total_height = parts.iter().map(|(_, height, _)| *height).sum::<u32>()
        + TABLE_SPACING * (parts.len() as u32 - 1);

    let mut combined = String::with_capacity(svgs.iter().map(|s| s.len()).sum::<usize>() + 512);
    let _ = writeln!(
        &mut combined,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{max_width}" height="{total_height}" viewBox="0 0 {max_width} {total_height}">"#
    );
    let _ = writeln!(
        &mut combined,
        r#"<style>text {{ font-family: {FONT_FAMILY}; font-size: {FONT_SIZE}px; }}</style>"#
    );

    let mut y_offset = 0u32;
    for (width, height, body) in parts {
        let x_offset = (max_width - width) / 2;
        let _ = writeln!(
            &mut combined,
            r#"<g transform="translate({x_offset}, {y_offset})">"#
        );
        combined.push_str(&body);
        combined.push_str("</g>\n");
        y_offset += height + TABLE_SPACING;
    }

    combined.push_str("</svg>");
    Some(combined)
}

fn svg_dimension(svg: &str, attr: &str) -> Option<u32> {
    let pattern = format!("{attr}=\"");
    let start = svg.find(&pattern)? + pattern.len();
    let end = svg[start..].find('"')? + start;
    svg[start..end].parse().ok()
}

/// Inner markup of an SVG document without its `<style>` block.
fn svg_body(svg: &str) -> Option<String> {
    const STYLE_OPEN: &str = "<style>";
    const STYLE_CLOSE: &str = "</style>";

    let start = svg.find('>')? + 1;
    let end = svg.rfind("</svg>")?;
    let body = &svg[start..end];

    match (body.find(STYLE_OPEN), body.find(STYLE_CLOSE)) {
        (Some(open), Some(close)) if open < close => Some(format!(
            "{}{}",
            &body[..open],
            &body[close + STYLE_CLOSE.len()..]
        )),
        _ => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn table_contains_headers_and_cells() {
        let svg = SvgTableBuilder::new()
            .column("Person", Alignment::Left)
            .column("Total", Alignment::Right)
            .row([Cow::Borrowed("Ann"), Cow::Borrowed("11,000")])
            .row([Cow::Borrowed("Bo"), Cow::Borrowed("5,500")])
            .build();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">Person</text>"));
        assert!(svg.contains(">11,000</text>"));
        assert!(svg.contains(r#"text-anchor="end">5,500"#));
        assert!(svg.contains(&format!(r#"height="{}""#, ROW_HEIGHT * 3 + 2)));
    }

    #[test]
    fn table_without_columns_is_empty() {
        assert!(SvgTableBuilder::new().build().is_empty());
    }

    #[rstest]
    #[case::escapes_all("<Fish & 'Chips'>", "&lt;Fish &amp; &#39;Chips&#39;&gt;")]
    #[case::keeps_plain("Burger", "Burger")]
    fn escapes_markup(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_xml(input), expected);
    }

    #[rstest]
    fn combines_documents_vertically() {
        let top = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><style>x</style><text>Items</text></svg>"#;
        let bottom = r#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="60"><text>Totals</text></svg>"#;

        let combined = combine_svgs_vertically(&[top, bottom]).expect("combined svg");

        assert!(combined.contains("Items"));
        assert!(combined.contains("Totals"));
        assert!(combined.contains(r#"width="120""#));
        assert!(combined.contains(r#"height="130""#));
        assert!(combined.contains("translate(10, 0)"));
        assert!(combined.contains("translate(0, 70)"));
        assert!(!combined.contains("<style>x</style>"));
    }

    #[test]
    fn combining_nothing_yields_none() {
        assert!(combine_svgs_vertically(&[]).is_none());
    }
}
