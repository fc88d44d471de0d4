use uidom::{Document, Element, NodeId, Page};
use uikit::{KitConfig, groupbox};

fn first(page: &Page, selector: &str) -> NodeId {
    page.select_first(selector).unwrap().unwrap()
}

fn groupbox_el(id: &str, title: &str) -> Element {
    Element::div()
        .id(id)
        .class("ui-groupbox")
        .data("ui-groupbox", "")
        .child(
            Element::div().class("ui-groupbox__header").child(
                Element::div()
                    .class("ui-groupbox__titles")
                    .child(Element::div().class("ui-groupbox__title").text(title)),
            ),
        )
}

fn body(children: Vec<Element>) -> Element {
    Element::div().class("ui-groupbox__body").children(children)
}

fn page() -> Page {
    let mut page = Page::new(Document::from_element(
        Element::div()
            .id("app")
            .child(
                groupbox_el("gb-network", "Network")
                    .data("collapsible", "")
                    .child(body(vec![groupbox_el("gb-inner", "Addressing").child(body(vec![]))])),
            )
            .child(groupbox_el("gb-static", "Static").data("collapsible", "false"))
            .child(groupbox_el("gb-zero", "Zero").data("collapsible", "0")),
    ));
    uikit::install(&mut page, &KitConfig::default()).unwrap();
    page
}

fn header(page: &Page, id: &str) -> NodeId {
    let wrapper = first(page, &format!("#{id}"));
    page.element_children(wrapper)[0]
}

#[test]
fn test_collapsible_from_markup() {
    let page = page();
    assert!(page.has_class(first(&page, "#gb-network"), groupbox::COLLAPSIBLE));
    assert!(!page.has_class(first(&page, "#gb-static"), groupbox::COLLAPSIBLE));
    assert!(!page.has_class(first(&page, "#gb-zero"), groupbox::COLLAPSIBLE));
    assert!(!page.has_class(first(&page, "#gb-inner"), groupbox::COLLAPSIBLE));

    assert_eq!(page.attr(header(&page, "gb-network"), "aria-expanded"), Some("true"));
    assert_eq!(page.attr(header(&page, "gb-static"), "aria-expanded"), None);
}

#[test]
fn test_header_click_toggles() {
    let mut page = page();
    let network = header(&page, "gb-network");

    page.click(network);
    assert!(groupbox::is_collapsed(&page, "#gb-network"));
    assert_eq!(page.attr(network, "aria-expanded"), Some("false"));

    page.click(network);
    assert!(!groupbox::is_collapsed(&page, "#gb-network"));
}

#[test]
fn test_title_click_bubbles_to_header() {
    let mut page = page();
    let title = first(&page, "#gb-network .ui-groupbox__title");
    page.click(title);
    assert!(groupbox::is_collapsed(&page, "#gb-network"));
}

#[test]
fn test_nested_plain_box_does_not_toggle() {
    let mut page = page();
    page.click(header(&page, "gb-inner"));
    assert!(!groupbox::is_collapsed(&page, "#gb-inner"));
    assert!(!groupbox::is_collapsed(&page, "#gb-network"));

    page.click(header(&page, "gb-static"));
    assert!(!groupbox::is_collapsed(&page, "#gb-static"));
}

#[test]
fn test_disabled_box_ignores_clicks() {
    let mut page = page();
    groupbox::set_disabled(&mut page, "#gb-network", true);
    assert!(page.has_class(first(&page, "#gb-network"), groupbox::DISABLED));

    page.click(header(&page, "gb-network"));
    assert!(!groupbox::is_collapsed(&page, "#gb-network"));

    // The API still works
    groupbox::collapse(&mut page, "#gb-network");
    assert!(groupbox::is_collapsed(&page, "#gb-network"));
}

#[test]
fn test_collapse_expand_toggle() {
    let mut page = page();

    groupbox::collapse(&mut page, "#gb-network");
    groupbox::collapse(&mut page, "#gb-network");
    assert!(groupbox::is_collapsed(&page, "#gb-network"));

    groupbox::expand(&mut page, "#gb-network .ui-groupbox__title");
    assert!(!groupbox::is_collapsed(&page, "#gb-network"));

    groupbox::toggle(&mut page, "#gb-network");
    assert!(groupbox::is_collapsed(&page, "#gb-network"));
}

#[test]
fn test_titles() {
    let mut page = page();

    groupbox::set_title(&mut page, "#gb-static", "Static routes");
    assert_eq!(page.text(first(&page, "#gb-static .ui-groupbox__title")), "Static routes");

    groupbox::set_subtitle(&mut page, "#gb-static", "");
    assert!(page.select("#gb-static .ui-groupbox__subtitle").unwrap().is_empty());

    groupbox::set_subtitle(&mut page, "#gb-static", "3 entries");
    let subtitle = first(&page, "#gb-static .ui-groupbox__subtitle");
    assert_eq!(page.text(subtitle), "3 entries");
    assert_eq!(page.parent(subtitle), page.select_first("#gb-static .ui-groupbox__titles").unwrap());

    groupbox::set_subtitle(&mut page, "#gb-static", "");
    assert_eq!(page.text(subtitle), "");
    assert_eq!(page.select("#gb-static .ui-groupbox__subtitle").unwrap().len(), 1);
}
