//! Integration tests for character sheet rendering.
use funnel_core::{Character, RuleTables};
use funnel_mechanics::{Generator, GeneratorConfig, RngDice};
use funnel_sheet::{
    SheetError, SheetFields, SheetTemplate, render_json, render_markdown, render_svg_page,
    render_svg_pages, render_svg_sheet, render_text,
};

fn party(count: usize, seed: u64) -> Vec<Character> {
    let tables = RuleTables::builtin().unwrap();
    Generator::new(&tables, GeneratorConfig::default())
        .generate_many(count, &mut RngDice::seeded(seed))
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn text_dump_lists_every_character() {
    let party = party(3, 1);
    let text = render_text(&party);
    assert_eq!(text.matches("Strength score: ").count(), 3);
    assert_eq!(text.matches("Armor class: ").count(), 3);
    assert!(text.ends_with('\n'));
}

#[test]
fn markdown_has_a_section_per_character() {
    let party = party(4, 2);
    let md = render_markdown(&party);
    assert!(md.starts_with("# Funnel\n"));
    for (i, c) in party.iter().enumerate() {
        assert!(md.contains(&format!("## {}. {} ({})", i + 1, c.occupation, c.race)));
    }
    assert_eq!(md.matches("| Luck |").count(), 4);
}

#[test]
fn json_round_trips() {
    let party = party(2, 3);
    let json = render_json(&party).unwrap();
    let back: Vec<Character> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, party);
}

#[test]
fn sheet_fills_every_slot() {
    let c = &party(1, 4)[0];
    let svg = render_svg_sheet(c).unwrap();
    let fields = SheetFields::from_character(c);
    assert!(svg.contains(&format!("<tspan id=\"hitPoints\">{}</tspan>", c.hit_points)));
    assert!(svg.contains(&format!(
        "<tspan id=\"strMod\">{}</tspan>",
        fields.str_mod
    )));
    assert!(svg.contains(&format!(
        "<tspan id=\"luckySign1\">{}:</tspan>",
        funnel_sheet::escape_xml(&c.lucky_sign.name)
    )));
    assert!(!svg.contains("<tspan id=\"languages2\"></tspan>"));
}

#[test]
fn page_holds_four_sheets() {
    let party = party(4, 5);
    let page = render_svg_page(&SheetTemplate::builtin(), &party).unwrap();
    assert!(page.contains("width=\"11in\" height=\"8.5in\""));
    assert_eq!(page.matches("class=\"charsheet\"").count(), 4);
    assert!(page.contains("translate(550 425)"));
    assert_eq!(page.matches("<?xml").count(), 1);
}

#[test]
fn page_is_well_formed_xml() {
    let party = party(4, 9);
    let page = render_svg_page(&SheetTemplate::builtin(), &party).unwrap();
    let mut reader = quick_xml::Reader::from_str(&page);
    let mut groups = 0;
    loop {
        match reader.read_event().unwrap() {
            quick_xml::events::Event::Start(e) if e.name().as_ref() == b"g" => groups += 1,
            quick_xml::events::Event::Eof => break,
            _ => {}
        }
    }
    // One wrapper and one content group per sheet, at least.
    assert!(groups >= 8, "{groups}");
    assert!(SheetTemplate::parse(&page).is_ok());
}

#[test]
fn custom_template_with_self_closing_slots() {
    let template = SheetTemplate::builtin();
    let c = &party(1, 10)[0];
    let builtin = template.render(c).unwrap();

    let blank = include_str!("../data/char_sheet_blank.svg");
    let compact = blank.replace("\"></tspan>", "\"/>");
    assert_ne!(compact, blank);
    let custom = SheetTemplate::parse(&compact).unwrap().render(c).unwrap();
    assert_eq!(custom, builtin);
}

#[test]
fn partial_page() {
    let party = party(1, 6);
    let page = render_svg_page(&SheetTemplate::builtin(), &party).unwrap();
    assert_eq!(page.matches("class=\"charsheet\"").count(), 1);
}

#[test]
fn page_rejects_five() {
    let party = party(5, 7);
    let err = render_svg_page(&SheetTemplate::builtin(), &party).unwrap_err();
    assert!(matches!(err, SheetError::PageSize { count: 5, max: 4 }));
}

#[test]
fn pages_split_by_four() {
    let party = party(9, 8);
    let pages = render_svg_pages(&SheetTemplate::builtin(), &party).unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2].matches("class=\"charsheet\"").count(), 1);
}

#[test]
fn no_pages_for_nobody() {
    assert!(render_svg_pages(&SheetTemplate::builtin(), &[]).is_err());
}
