//! Character sheet rendering for Funnel.
//!
//! Turns generated characters into documents: a plain text dump, Markdown,
//! JSON, single SVG sheets, and printable pages holding four sheets each.

pub mod error;
pub mod export;
pub mod fields;
pub mod svg;

pub use error::{SheetError, SheetResult};
pub use export::{render_json, render_markdown, render_text};
pub use fields::{Half, SheetFields, format_money, format_number, split_list};
pub use svg::{
    SHEETS_PER_PAGE, SheetTemplate, escape_xml, render_svg_page, render_svg_pages,
    render_svg_sheet,
};
