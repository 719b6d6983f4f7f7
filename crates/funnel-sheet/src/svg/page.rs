//! Printable pages: four sheets in a 2x2 grid on 11in x 8.5in landscape.

use funnel_core::Character;

use super::SheetTemplate;
use crate::error::{SheetError, SheetResult};

/// Sheets that fit on one page.
pub const SHEETS_PER_PAGE: usize = 4;

/// Page size in user units (hundredths of an inch).
const PAGE_WIDTH: u32 = 1100;
const PAGE_HEIGHT: u32 = 850;

/// Top-left corner of each quadrant, row by row.
const QUADRANTS: [(u32, u32); SHEETS_PER_PAGE] = [
    (0, 0),
    (PAGE_WIDTH / 2, 0),
    (0, PAGE_HEIGHT / 2),
    (PAGE_WIDTH / 2, PAGE_HEIGHT / 2),
];

/// Lay out one to four characters on a single page.
pub fn render_svg_page(template: &SheetTemplate, party: &[Character]) -> SheetResult<String> {
    if party.is_empty() || party.len() > SHEETS_PER_PAGE {
        return Err(SheetError::PageSize {
            count: party.len(),
            max: SHEETS_PER_PAGE,
        });
    }

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"11in\" height=\"8.5in\" viewBox=\"0 0 {PAGE_WIDTH} {PAGE_HEIGHT}\">\n"
    ));
    for (character, (x, y)) in party.iter().zip(QUADRANTS) {
        let content = template.render_content(character)?;
        out.push_str(&format!(
            "  <g class=\"charsheet\" transform=\"translate({x} {y})\">\n"
        ));
        out.push_str(&content);
        out.push_str("\n  </g>\n");
    }
    out.push_str("</svg>\n");
    Ok(out)
}

/// Lay out any number of characters, four to a page.
pub fn render_svg_pages(template: &SheetTemplate, party: &[Character]) -> SheetResult<Vec<String>> {
    if party.is_empty() {
        return Err(SheetError::PageSize {
            count: 0,
            max: SHEETS_PER_PAGE,
        });
    }
    party
        .chunks(SHEETS_PER_PAGE)
        .map(|chunk| render_svg_page(template, chunk))
        .collect()
}
