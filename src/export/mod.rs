//! Plain-text to PDF export.
//!
//! The text is reduced to ASCII first because the built-in PDF fonts only cover
//! that range. Each input line becomes one wrapped block, and the blocks flow
//! onto fixed-margin A4 pages in order. Markdown structure is not interpreted.

mod pdf;

pub use pdf::render_pdf;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

pub const EXPORT_FILENAME: &str = "fitness_plan.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("pdf generation failed: {0}")]
    Pdf(String),
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Row width in thousandths of an em of the body font.
    pub max_width: u32,
    pub rows_per_page: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        // 180 mm text column at 11 pt is about 46 380 units
        Self {
            max_width: 46_000,
            rows_per_page: 53,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub rows: Vec<String>,
}

/// NFKD-decomposes and drops whatever is left outside ASCII, so "é" keeps its "e".
/// Vulgar fractions decompose around U+2044, which is folded to "/" so "½" reads "1/2".
pub fn to_ascii(text: &str) -> String {
    text.nfkd()
        .map(|c| match c {
            '\u{2044}' | '\u{2215}' => '/',
            c => c,
        })
        .filter(char::is_ascii)
        .collect()
}

/// Helvetica advance widths (AFM, 1/1000 em) for printable ASCII.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

fn char_width(c: char) -> u32 {
    match c {
        ' '..='~' => u32::from(HELVETICA_WIDTHS[c as usize - 0x20]),
        // anything unfolded gets a full em so it can only wrap early
        _ => 1000,
    }
}

pub fn text_width(text: &str) -> u32 {
    text.chars().map(char_width).sum()
}

pub fn layout(text: &str, opts: LayoutOptions) -> Vec<Page> {
    let per_page = opts.rows_per_page.max(1);

    let rows: Vec<String> = text
        .lines()
        .flat_map(|line| wrap_line(line.trim_end(), opts.max_width))
        .collect();

    rows.chunks(per_page)
        .map(|chunk| Page {
            rows: chunk.to_vec(),
        })
        .collect()
}

fn wrap_line(line: &str, max_width: u32) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![String::new()];
    }

    let space = char_width(' ');
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in line.split_whitespace() {
        let mut word = word;
        // hard-split words wider than a row, on char boundaries
        while text_width(word) > max_width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let at = split_point(word, max_width);
            let (head, tail) = word.split_at(at);
            out.push(head.to_string());
            word = tail;
        }
        if word.is_empty() {
            continue;
        }
        let width = text_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = width;
        } else if current_width + space + width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space + width;
        } else {
            out.push(std::mem::replace(&mut current, word.to_string()));
            current_width = width;
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Byte index of the longest prefix that fits, never less than one char.
fn split_point(word: &str, max_width: u32) -> usize {
    let mut width = 0;
    for (i, c) in word.char_indices() {
        width += char_width(c);
        if width > max_width {
            return if i == 0 { c.len_utf8() } else { i };
        }
    }
    word.len()
}
