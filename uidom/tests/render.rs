use uidom::{Document, Element};

fn html(element: Element) -> String {
    let doc = Document::from_element(element);
    doc.outer_html(doc.document_element().unwrap())
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_attribute_order_and_escaping() {
    let out = html(
        Element::div()
            .data("k", "a\"b")
            .class("x y")
            .id("main")
            .style("width", "40%")
            .text("fish & <chips>"),
    );
    assert_eq!(
        out,
        r#"<div id="main" class="x y" data-k="a&quot;b" style="width: 40%;">fish &amp; &lt;chips&gt;</div>"#
    );
}

#[test]
fn test_void_elements_and_bare_attributes() {
    let out = html(Element::div().child(Element::input("text").disabled(true)));
    assert_eq!(out, r#"<div><input type="text" disabled></div>"#);
}

#[test]
fn test_live_state_is_reflected() {
    let mut doc = Document::from_element(
        Element::div()
            .child(Element::input("checkbox").checked(true))
            .child(Element::input("text").value("old"))
            .child(
                Element::select()
                    .child(Element::option("a", "A").selected(true))
                    .child(Element::option("b", "B")),
            ),
    );
    let root = doc.document_element().unwrap();
    let chk = doc.select_first("[type=checkbox]").unwrap().unwrap();
    let text = doc.select_first("[type=text]").unwrap().unwrap();
    let select = doc.select_first("select").unwrap().unwrap();

    doc.set_checked(chk, false);
    doc.set_value(text, "new");
    doc.set_select_value(select, "b");

    assert_eq!(
        doc.inner_html(root),
        concat!(
            r#"<input type="checkbox">"#,
            r#"<input type="text" value="new">"#,
            r#"<select><option value="a">A</option><option value="b" selected>B</option></select>"#,
        )
    );
}

#[test]
fn test_empty_input_value_is_omitted() {
    let mut doc = Document::from_element(Element::input("text").value("x"));
    let input = doc.document_element().unwrap();
    doc.set_value(input, "");
    assert_eq!(doc.outer_html(input), r#"<input type="text">"#);
}
