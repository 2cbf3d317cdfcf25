use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells
pub fn cell_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Clip `s` to at most `max_cells`, ending in `…` when something was cut
pub fn fit_to_width(s: &str, max_cells: usize) -> String {
    if cell_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = cell_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `offset`, or None at the end
pub fn grapheme_after(s: &str, offset: usize) -> Option<usize> {
    let rest = s.get(offset..)?;
    let first = rest.graphemes(true).next()?;
    Some(offset + first.len())
}

/// Byte offset of the grapheme boundary before `offset`, or None at the start
pub fn grapheme_before(s: &str, offset: usize) -> Option<usize> {
    let head = s.get(..offset)?;
    let last = head.graphemes(true).next_back()?;
    Some(offset - last.len())
}

/// Start of the word to the left of `offset`, skipping whitespace first
pub fn word_start_before(s: &str, offset: usize) -> usize {
    let Some(head) = s.get(..offset) else {
        return 0;
    };
    let mut pos = offset;
    let mut seen_word = false;
    for g in head.graphemes(true).rev() {
        let blank = g.chars().all(char::is_whitespace);
        if blank && seen_word {
            break;
        }
        seen_word |= !blank;
        pos -= g.len();
    }
    pos
}

/// Cells between the start of `s` and byte `offset`
pub fn column_at(s: &str, offset: usize) -> usize {
    cell_width(&s[..offset.min(s.len())])
}
