//! SVG character sheets.
//!
//! A sheet template is an SVG document whose `<tspan>` elements carry the
//! slot ids of [`SheetFields`]. Rendering replaces each slot's text with
//! the formatted value. Everything the page layout needs sits inside a
//! single `<g id="content">` group.

pub mod page;

pub use page::{SHEETS_PER_PAGE, render_svg_page, render_svg_pages};

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, BytesText, Event};

use funnel_core::Character;

use crate::error::{SheetError, SheetResult};
use crate::fields::SheetFields;

const BUILTIN: &str = include_str!("../../data/char_sheet_blank.svg");

/// Escape text for use inside an XML element.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

fn xml_error(err: impl std::fmt::Display) -> SheetError {
    SheetError::Xml(err.to_string())
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> SheetResult<()> {
    writer.write_event(event).map_err(xml_error)
}

fn into_string(writer: Writer<Vec<u8>>) -> SheetResult<String> {
    String::from_utf8(writer.into_inner()).map_err(xml_error)
}

/// The unescaped `id` attribute of an element.
fn element_id(start: &BytesStart<'_>) -> SheetResult<Option<String>> {
    match start.try_get_attribute("id").map_err(xml_error)? {
        Some(attr) => Ok(Some(attr.unescape_value().map_err(xml_error)?.into_owned())),
        None => Ok(None),
    }
}

/// The slot id of a `<tspan>`, if it has one.
fn slot_id(start: &BytesStart<'_>) -> SheetResult<Option<String>> {
    if start.local_name().as_ref() != b"tspan" {
        return Ok(None);
    }
    element_id(start)
}

fn is_content(start: &BytesStart<'_>) -> SheetResult<bool> {
    Ok(start.local_name().as_ref() == b"g" && element_id(start)?.as_deref() == Some("content"))
}

/// Slot ids present in `svg`, and whether it has a content group.
fn scan(svg: &str) -> SheetResult<(HashSet<String>, bool)> {
    let mut reader = Reader::from_str(svg);
    let mut slots = HashSet::new();
    let mut content = false;
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(start) | Event::Empty(start) => {
                if let Some(id) = slot_id(&start)? {
                    slots.insert(id);
                }
                content |= is_content(&start)?;
            }
            Event::Eof => return Ok((slots, content)),
            _ => {}
        }
    }
}

/// The `<g id="content">` element, nested groups included, re-serialized.
fn content_group(svg: &str) -> SheetResult<Option<String>> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Vec::new());
    // Open elements below the content group once inside it.
    let mut depth: Option<usize> = None;
    loop {
        let event = reader.read_event().map_err(xml_error)?;
        if matches!(event, Event::Eof) {
            return Ok(None);
        }
        let Some(d) = depth else {
            let opens = match &event {
                Event::Start(start) | Event::Empty(start) => is_content(start)?,
                _ => false,
            };
            match event {
                Event::Start(start) if opens => {
                    write(&mut writer, Event::Start(start))?;
                    depth = Some(0);
                }
                Event::Empty(start) if opens => {
                    write(&mut writer, Event::Empty(start))?;
                    return into_string(writer).map(Some);
                }
                _ => {}
            }
            continue;
        };
        let closes = d == 0 && matches!(event, Event::End(_));
        match event {
            Event::Start(_) => depth = Some(d + 1),
            Event::End(_) if d > 0 => depth = Some(d - 1),
            _ => {}
        }
        write(&mut writer, event)?;
        if closes {
            return into_string(writer).map(Some);
        }
    }
}

/// A validated sheet template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTemplate {
    text: String,
}

impl Default for SheetTemplate {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SheetTemplate {
    /// The sheet shipped with this crate.
    pub fn builtin() -> Self {
        Self {
            text: BUILTIN.to_string(),
        }
    }

    /// Check that `text` is well-formed and has every slot and a content group.
    pub fn parse(text: &str) -> SheetResult<Self> {
        let (slots, content) = scan(text)?;
        if let Some(slot) = SheetFields::SLOTS.iter().find(|s| !slots.contains(**s)) {
            return Err(SheetError::MissingSlot(slot.to_string()));
        }
        if !content {
            return Err(SheetError::MissingContent);
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    /// The template with every slot filled from `fields`.
    ///
    /// A slot's old children are dropped; a self-closing slot is expanded
    /// into a start and end tag around the value.
    pub fn fill(&self, fields: &SheetFields) -> SheetResult<String> {
        let values: HashMap<&str, &str> = fields.slots().into_iter().collect();
        let mut reader = Reader::from_str(&self.text);
        let mut writer = Writer::new(Vec::new());
        // Depth inside a slot whose old children are being dropped.
        let mut skipping: Option<usize> = None;

        loop {
            let event = reader.read_event().map_err(xml_error)?;
            if let Some(depth) = skipping {
                match event {
                    Event::Start(_) => skipping = Some(depth + 1),
                    Event::End(end) if depth == 0 => {
                        write(&mut writer, Event::End(end))?;
                        skipping = None;
                    }
                    Event::End(_) => skipping = Some(depth - 1),
                    Event::Eof => break,
                    _ => {}
                }
                continue;
            }

            let value = match &event {
                Event::Start(start) | Event::Empty(start) => {
                    slot_id(start)?.and_then(|id| values.get(id.as_str()).copied())
                }
                _ => None,
            };
            match (event, value) {
                (Event::Start(start), Some(value)) => {
                    write(&mut writer, Event::Start(start))?;
                    write(&mut writer, Event::Text(BytesText::from_escaped(escape_xml(value))))?;
                    skipping = Some(0);
                }
                (Event::Empty(start), Some(value)) => {
                    let end = start.to_end().into_owned();
                    write(&mut writer, Event::Start(start))?;
                    write(&mut writer, Event::Text(BytesText::from_escaped(escape_xml(value))))?;
                    write(&mut writer, Event::End(end))?;
                }
                (Event::Eof, _) => break,
                (event, _) => write(&mut writer, event)?,
            }
        }

        into_string(writer)
    }

    /// A complete SVG document for one character.
    pub fn render(&self, character: &Character) -> SheetResult<String> {
        self.fill(&SheetFields::from_character(character))
    }

    /// Just the content group for one character, ready to place on a page.
    pub fn render_content(&self, character: &Character) -> SheetResult<String> {
        let svg = self.render(character)?;
        content_group(&svg)?.ok_or(SheetError::MissingContent)
    }
}

/// A complete SVG sheet for one character, using the built-in template.
pub fn render_svg_sheet(character: &Character) -> SheetResult<String> {
    SheetTemplate::builtin().render(character)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(template: &str) -> String {
        let mut fields = SheetFields::default();
        fields.occupation = "Gambler".into();
        fields.str_score = "18".into();
        SheetTemplate::parse(template).unwrap().fill(&fields).unwrap()
    }

    #[test]
    fn builtin_template_is_valid() {
        assert!(SheetTemplate::parse(BUILTIN).is_ok());
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_xml("Fox's <cunning> & \"traps\""),
            "Fox&apos;s &lt;cunning&gt; &amp; &quot;traps&quot;"
        );
    }

    #[test]
    fn fill_replaces_old_text() {
        let template = BUILTIN.replace(
            "<tspan id=\"occupation\"></tspan>",
            "<tspan id=\"occupation\">old <tspan>nested</tspan> text</tspan>",
        );
        let svg = filled(&template);
        assert!(svg.contains("<tspan id=\"occupation\">Gambler</tspan>"));
        assert!(!svg.contains("nested"));
        assert!(svg.contains("<tspan id=\"strScore\">18</tspan>"));
    }

    #[test]
    fn self_closing_slot_is_expanded() {
        let template = BUILTIN.replace(
            "<tspan id=\"occupation\"></tspan>",
            "<tspan id=\"occupation\"/>",
        );
        let svg = filled(&template);
        assert!(svg.contains("<tspan id=\"occupation\">Gambler</tspan>"));
        assert!(svg.contains("<tspan id=\"strScore\">18</tspan>"));
        assert!(SheetTemplate::parse(&svg).is_ok());
    }

    #[test]
    fn fill_escapes_values() {
        let mut fields = SheetFields::default();
        fields.equipment1 = "Salt & <pepper>".into();
        let svg = SheetTemplate::builtin().fill(&fields).unwrap();
        assert!(svg.contains(">Salt &amp; &lt;pepper&gt;</tspan>"));
    }

    #[test]
    fn content_group_handles_nesting() {
        let svg = r#"<svg><g id="content"><g><rect/></g><text/></g><g id="other"/></svg>"#;
        assert_eq!(
            content_group(svg).unwrap().unwrap(),
            r#"<g id="content"><g><rect/></g><text/></g>"#
        );
    }

    #[test]
    fn content_group_ignores_lookalike_elements() {
        let svg = r#"<svg><g id="content"><glyph/><g-x/><g/></g><g id="after"/></svg>"#;
        assert_eq!(
            content_group(svg).unwrap().unwrap(),
            r#"<g id="content"><glyph/><g-x/><g/></g>"#
        );
        assert!(content_group("<svg><glyph id=\"content\"/></svg>").unwrap().is_none());
    }

    #[test]
    fn missing_slot_rejected() {
        let text = BUILTIN.replace("id=\"traits2\"", "id=\"nothing\"");
        let err = SheetTemplate::parse(&text).unwrap_err();
        assert!(matches!(err, SheetError::MissingSlot(slot) if slot == "traits2"));
    }

    #[test]
    fn slot_id_outside_tspan_does_not_count() {
        let text = BUILTIN.replace("<tspan id=\"traits2\"></tspan>", "<rect id=\"traits2\"/>");
        let err = SheetTemplate::parse(&text).unwrap_err();
        assert!(matches!(err, SheetError::MissingSlot(slot) if slot == "traits2"));
    }

    #[test]
    fn missing_content_rejected() {
        let text = BUILTIN.replace("<g id=\"content\"", "<g id=\"body\"");
        assert!(matches!(
            SheetTemplate::parse(&text),
            Err(SheetError::MissingContent)
        ));
    }

    #[test]
    fn malformed_template_rejected() {
        let text = BUILTIN.replace("</text>", "</tspan>");
        assert!(matches!(
            SheetTemplate::parse(&text),
            Err(SheetError::Xml(_))
        ));
    }
}
