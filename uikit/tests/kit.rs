use std::time::Duration;

use uidom::{Document, Element, NodeId, Page};
use uikit::{KitConfig, Target, checkbox, combo, groupbox, progress, radio, slider, toggle};

fn panel() -> Element {
    Element::div()
        .id("app")
        .child(
            Element::label()
                .class("ui-chk")
                .id("chk-autostart")
                .child(Element::input("checkbox").class("ui-chk__input").checked(true)),
        )
        .child(
            Element::label()
                .class("ui-toggle")
                .child(Element::input("checkbox").class("ui-toggle__input")),
        )
        .child(
            Element::label().class("ui-radio").child(
                Element::input("radio")
                    .class("ui-radio__input")
                    .name("mode")
                    .value("heat")
                    .checked(true),
            ),
        )
        .child(
            Element::div()
                .class("ui-slider")
                .child(Element::input("range").class("ui-slider__input").value("30"))
                .child(Element::span().class("ui-slider__value")),
        )
        .child(
            Element::div()
                .class("ui-progress")
                .data("ui-progress", "")
                .data("value", "70")
                .child(Element::div().class("ui-progress__bar"))
                .child(Element::span().class("ui-progress__value")),
        )
        .child(
            Element::div()
                .class("ui-combo")
                .data("ui-combo", "")
                .child(
                    Element::select()
                        .class("ui-combo__select")
                        .child(Element::option("tcp", "TCP"))
                        .child(Element::option("udp", "UDP")),
                )
                .child(Element::button().class("ui-combo__value"))
                .child(Element::div().class("ui-combo__dropdown")),
        )
        .child(
            Element::div()
                .class("ui-groupbox")
                .data("ui-groupbox", "")
                .data("collapsible", "true")
                .child(Element::div().class("ui-groupbox__header")),
        )
}

fn installed() -> Page {
    let mut page = Page::new(Document::from_element(panel()));
    uikit::install(&mut page, &KitConfig::default()).unwrap();
    page
}

fn all(page: &Page, selector: &str) -> Vec<NodeId> {
    page.select(selector).unwrap()
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = KitConfig::new();
    assert_eq!(config.loading_demo(), Duration::from_millis(1200));
    assert_eq!(config.indeterminate_placeholder, "…");
    assert_eq!(config.slider_fill, "#2d7dff");
    assert_eq!(config.slider_track, "#3b4252");
}

#[test]
fn test_config_from_partial_toml() {
    let config: KitConfig = toml::from_str(
        r#"
        loading_demo_ms = 300
        slider_fill = "orange"
        "#,
    )
    .unwrap();

    assert_eq!(config.loading_demo(), Duration::from_millis(300));
    assert_eq!(config.slider_fill, "orange");
    assert_eq!(config.slider_track, "#3b4252");
    assert_eq!(config.indeterminate_placeholder, "…");
}

#[test]
fn test_config_from_empty_toml() {
    let config: KitConfig = toml::from_str("").unwrap();
    assert_eq!(config, KitConfig::default());
}

// ============================================================================
// Targets
// ============================================================================

#[test]
fn test_target_resolution() {
    let mut page = installed();
    let wrapper = page.select_first("#chk-autostart").unwrap().unwrap();

    assert_eq!(Target::from("#chk-autostart").resolve(&page), Some(wrapper));
    assert_eq!(Target::from(wrapper).resolve(&page), Some(wrapper));
    assert_eq!(Target::from("#missing").resolve(&page), None);
    assert_eq!(Target::from("label[").resolve(&page), None);
    assert_eq!(Target::from("label").to_string(), "label");

    page.detach(wrapper);
    assert_eq!(Target::from(wrapper).resolve(&page), None);
    assert!(!checkbox::is_checked(&page, wrapper));
}

#[test]
fn test_text_node_target_is_ignored() {
    let mut page = installed();
    let header = page.select_first(".ui-groupbox__header").unwrap().unwrap();
    let text = page.create_text("Network");
    page.append(header, text);

    assert_eq!(Target::from(text).resolve(&page), None);
    groupbox::collapse(&mut page, text);
    assert!(!groupbox::is_collapsed(&page, ".ui-groupbox"));
}

// ============================================================================
// Install
// ============================================================================

#[test]
fn test_install_initialises_every_widget() {
    let page = installed();

    assert!(page.has_class(all(&page, ".ui-chk")[0], checkbox::CHECKED));
    assert!(!page.has_class(all(&page, ".ui-toggle")[0], toggle::ON));
    assert!(page.has_class(all(&page, ".ui-radio")[0], radio::CHECKED));
    assert_eq!(page.text(all(&page, ".ui-slider__value")[0]), "30");
    assert_eq!(page.text(all(&page, ".ui-progress__value")[0]), "70%");
    assert_eq!(all(&page, ".ui-combo__option").len(), 2);
    assert!(page.has_class(all(&page, ".ui-groupbox")[0], groupbox::COLLAPSIBLE));
}

#[test]
fn test_empty_page_installs() {
    let mut page = Page::new(Document::from_element(Element::div()));
    uikit::install(&mut page, &KitConfig::default()).unwrap();
    assert!(page.listener_count() > 0);
}

#[test]
fn test_sync_after_install_changes_nothing() {
    let mut page = installed();
    let once = page.outer_html(page.root());

    for input in all(&page, ".ui-chk__input") {
        checkbox::sync(&mut page, input);
    }
    for input in all(&page, ".ui-toggle__input") {
        toggle::sync(&mut page, input);
    }
    for input in all(&page, ".ui-radio__input") {
        radio::sync(&mut page, input);
    }
    for input in all(&page, ".ui-slider__input") {
        slider::sync(&mut page, input);
    }
    for wrapper in all(&page, ".ui-progress") {
        progress::sync(&mut page, wrapper);
    }
    for wrapper in all(&page, ".ui-combo") {
        combo::refresh(&mut page, wrapper);
    }
    for wrapper in all(&page, ".ui-groupbox") {
        groupbox::sync(&mut page, wrapper);
    }

    assert_eq!(page.outer_html(page.root()), once);
}
