use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_display_width).sum()
}

/// Truncate to at most `max_cells` cells, ending with `…` when anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let budget = max_cells - 1; // one cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Right-pad with spaces up to `cells`. Wider strings come back unchanged.
pub fn pad_to_width(s: &str, cells: usize) -> String {
    let width = display_width(s);
    let mut out = s.to_string();
    out.extend(std::iter::repeat_n(' ', cells.saturating_sub(width)));
    out
}

/// Truncate and pad so the label fills exactly `cells` cells, except where a
/// wide grapheme leaves one cell short.
pub fn fit_to_width(s: &str, cells: usize) -> String {
    pad_to_width(&truncate_to_width(s, cells), cells)
}

/// Control characters count as one cell; the renderer shows them as spaces.
fn grapheme_display_width(g: &str) -> usize {
    if g.chars().any(char::is_control) {
        return 1;
    }
    UnicodeWidthStr::width(g)
}
