use std::fmt::Write;

use crate::svg_table::{FONT_FAMILY, escape_xml};

pub const SUMMARY_WIDTH: u32 = 900;
pub const SUMMARY_PADDING: u32 = 30;
pub const SUMMARY_LINE_HEIGHT: u32 = 32;
const TITLE_FONT_SIZE: u32 = 22;
const BODY_FONT_SIZE: u32 = 18;
const TEXT_COLOR: &str = "#000000";

/// Height of the summary image for `line_count` lines.
pub fn summary_height(line_count: usize) -> u32 {
    2 * SUMMARY_PADDING + SUMMARY_LINE_HEIGHT * line_count as u32
}

/// Renders summary lines as a white SVG page. The first line is drawn bold
/// as the title; blank lines keep their vertical slot.
pub fn summary_svg(lines: &[String]) -> String {
    let height = summary_height(lines.len());

    let mut svg = String::with_capacity(512 + lines.iter().map(|l| l.len() + 96).sum::<usize>());
    let _ = writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SUMMARY_WIDTH}" height="{height}" viewBox="0 0 {SUMMARY_WIDTH} {height}">"#
    );
    let _ = writeln!(
        &mut svg,
        r#"<style>text {{ font-family: {FONT_FAMILY}; }}</style>"#
    );
    let _ = writeln!(
        &mut svg,
        r##"<rect width="{SUMMARY_WIDTH}" height="{height}" fill="#ffffff" />"##
    );

    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let top = SUMMARY_PADDING + SUMMARY_LINE_HEIGHT * idx as u32;
        let (size, weight) = if idx == 0 {
            (TITLE_FONT_SIZE, "bold")
        } else {
            (BODY_FONT_SIZE, "normal")
        };
        let _ = writeln!(
            &mut svg,
            r#"<text x="{SUMMARY_PADDING}" y="{}" font-size="{size}px" font-weight="{weight}" fill="{TEXT_COLOR}" xml:space="preserve">{}</text>"#,
            top + size,
            escape_xml(line)
        );
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[rstest]
    #[case::empty(0, 60)]
    #[case::single(1, 92)]
    #[case::ten(10, 380)]
    fn height_grows_per_line(#[case] count: usize, #[case] expected: u32) {
        assert_eq!(summary_height(count), expected);
        let svg = summary_svg(&vec![String::from("x"); count]);
        assert!(svg.contains(&format!(r#"height="{expected}""#)));
    }

    #[test]
    fn title_is_bold_and_body_is_regular() {
        let svg = summary_svg(&lines(&["Split Bill Summary", "- Ann: 11,000"]));

        assert!(svg.contains(
            r##"y="52" font-size="22px" font-weight="bold" fill="#000000" xml:space="preserve">Split Bill Summary</text>"##
        ));
        assert!(svg.contains(
            r##"y="80" font-size="18px" font-weight="normal" fill="#000000" xml:space="preserve">- Ann: 11,000</text>"##
        ));
    }

    #[test]
    fn blank_lines_are_not_drawn_and_text_is_escaped() {
        let svg = summary_svg(&lines(&["Title", "", "Fish & Chips <2>"]));

        assert_eq!(svg.matches("<text").count(), 2);
        assert!(svg.contains("Fish &amp; Chips &lt;2&gt;"));
    }
}
