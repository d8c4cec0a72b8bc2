use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use super::{layout, to_ascii, ExportError, LayoutOptions};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const FONT_SIZE: f32 = 11.0;
const LINE_HEIGHT: f32 = 5.0;

pub fn render_pdf(title: &str, text: &str) -> Result<Vec<u8>, ExportError> {
    let ascii = to_ascii(text);
    let pages = layout(&ascii, LayoutOptions::default());
    if pages.is_empty() {
        return Err(ExportError::Empty);
    }

    let (doc, first_page, first_layer) =
        PdfDocument::new(to_ascii(title), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    for (i, page) in pages.iter().enumerate() {
        let (page_idx, layer_idx) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1")
        };
        let layer = doc.get_page(page_idx).get_layer(layer_idx);

        let mut y = PAGE_HEIGHT - MARGIN;
        for row in &page.rows {
            if !row.is_empty() {
                layer.use_text(row.as_str(), FONT_SIZE, Mm(MARGIN), Mm(y), &font);
            }
            y -= LINE_HEIGHT;
        }
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    debug!(pages = pages.len(), bytes = bytes.len(), "pdf rendered");
    Ok(bytes)
}
