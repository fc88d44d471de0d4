use uidom::{Document, Element, SelectorError, SelectorList};

fn sample() -> Document {
    Document::from_element(
        Element::div()
            .id("root")
            .class("panel")
            .child(
                Element::label()
                    .class("ui-chk")
                    .child(Element::input("checkbox").class("ui-chk__input").checked(true))
                    .text("Autostart"),
            )
            .child(
                Element::div()
                    .class("row")
                    .child(
                        Element::input("radio")
                            .class("ui-radio__input")
                            .name("mode")
                            .value("heat"),
                    )
                    .child(
                        Element::input("radio")
                            .class("ui-radio__input")
                            .name("mode")
                            .value("cool")
                            .disabled(true),
                    ),
            ),
    )
}

fn count(doc: &Document, selector: &str) -> usize {
    doc.select(selector).expect("valid selector").len()
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_supported_syntax() {
    for source in [
        "#root",
        ".panel .ui-chk__input",
        "div > label",
        "input[type=checkbox].ui-chk__input",
        "[data-ui-combo]",
        "input[name=\"mode\"]:checked",
        "input[name='mode']",
        "label, .row",
        "*",
        "  .padded  ",
    ] {
        assert!(SelectorList::parse(source).is_ok(), "failed to parse {source:?}");
    }
}

#[test]
fn test_source_is_trimmed() {
    let selector: SelectorList = "  .a .b ".parse().unwrap();
    assert_eq!(selector.source(), ".a .b");
    assert_eq!(selector.to_string(), ".a .b");
}

#[test]
fn test_parse_errors() {
    assert_eq!(SelectorList::parse(""), Err(SelectorError::Empty));
    assert_eq!(SelectorList::parse("   "), Err(SelectorError::Empty));

    assert!(matches!(
        SelectorList::parse("div >"),
        Err(SelectorError::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        SelectorList::parse("."),
        Err(SelectorError::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        SelectorList::parse("div!"),
        Err(SelectorError::Unexpected {
            found: '!',
            position: 3,
            ..
        })
    ));
    assert!(matches!(
        SelectorList::parse("[type=checkbox"),
        Err(SelectorError::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        SelectorList::parse("div:hover"),
        Err(SelectorError::UnknownPseudo { ref name, .. }) if name == "hover"
    ));
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_type_class_and_attribute() {
    let doc = sample();
    assert_eq!(count(&doc, "input"), 3);
    assert_eq!(count(&doc, "input[type=checkbox].ui-chk__input"), 1);
    assert_eq!(count(&doc, "input[type=range]"), 0);
    assert_eq!(count(&doc, "[name]"), 2);
    assert_eq!(count(&doc, "input[value=\"cool\"]"), 1);
    assert_eq!(count(&doc, "*"), 6);
}

#[test]
fn test_combinators() {
    let doc = sample();
    assert_eq!(count(&doc, "#root > label"), 1);
    assert_eq!(count(&doc, "#root > input"), 0);
    assert_eq!(count(&doc, "#root input"), 3);
    assert_eq!(count(&doc, ".row input"), 2);
    assert_eq!(count(&doc, ".panel > .row > .ui-radio__input"), 2);
}

#[test]
fn test_pseudo_classes() {
    let doc = sample();
    assert_eq!(count(&doc, "input:checked"), 1);
    assert_eq!(count(&doc, "input:disabled"), 1);
    assert_eq!(count(&doc, "input:enabled"), 2);
    // Non-controls are neither enabled nor disabled
    assert_eq!(count(&doc, "div:enabled"), 0);
}

#[test]
fn test_selector_list_in_document_order() {
    let doc = sample();
    let found = doc.select(".row, .ui-chk").unwrap();
    assert_eq!(found.len(), 2);
    assert!(doc.has_class(found[0], "ui-chk"));
    assert!(doc.has_class(found[1], "row"));
}

#[test]
fn test_checked_tracks_live_state() {
    let mut doc = sample();
    let heat = doc.select_first("input[value=heat]").unwrap().unwrap();
    doc.set_checked(heat, true);
    assert_eq!(count(&doc, ".ui-radio__input:checked"), 1);
    assert_eq!(count(&doc, "input:checked"), 2);
}
