use std::cell::RefCell;
use std::rc::Rc;

use uidom::{Document, Element, EventKind, NodeId, Page};
use uikit::{KitConfig, RadioGroup, checkbox, radio, toggle};

fn first(page: &Page, selector: &str) -> NodeId {
    page.select_first(selector).unwrap().unwrap()
}

fn chk(id: &str, label: &str) -> Element {
    Element::label()
        .id(id)
        .class("ui-chk")
        .child(Element::input("checkbox").class("ui-chk__input"))
        .child(Element::span().class("ui-chk__label").text(label))
}

fn radio_option(name: &str, value: &str, checked: bool) -> Element {
    Element::label()
        .class("ui-radio")
        .child(
            Element::input("radio")
                .class("ui-radio__input")
                .name(name)
                .value(value)
                .checked(checked),
        )
        .child(Element::span().class("ui-radio__label").text(value))
}

fn page() -> Page {
    let mut page = Page::new(Document::from_element(
        Element::div()
            .id("app")
            .child(chk("chk-autostart", "Autostart"))
            .child(chk("chk-reconnect", "Auto-reconnect"))
            .child(
                Element::label()
                    .id("toggle-power")
                    .class("ui-toggle")
                    .child(Element::input("checkbox").class("ui-toggle__input"))
                    .child(Element::span().class("ui-toggle__track")),
            )
            .child(
                Element::div()
                    .id("mode-group")
                    .child(radio_option("mode", "heat", false))
                    .child(radio_option("mode", "cool", true))
                    .child(radio_option("mode", "auto", false)),
            )
            .child(
                Element::div()
                    .id("fan-group")
                    .child(radio_option("fan", "low", true))
                    .child(radio_option("fan", "high", false)),
            ),
    ));
    uikit::install(&mut page, &KitConfig::default()).unwrap();
    page
}

fn count_changes(page: &mut Page, selector: &str) -> Rc<RefCell<usize>> {
    let count = Rc::new(RefCell::new(0));
    let c = Rc::clone(&count);
    page.on(EventKind::Change, selector, move |_, _| *c.borrow_mut() += 1)
        .unwrap();
    count
}

// ============================================================================
// Checkbox
// ============================================================================

#[test]
fn test_checkbox_set_resolves_wrapper_input_and_container() {
    let mut page = page();
    let wrapper = first(&page, "#chk-autostart");
    let input = first(&page, "#chk-autostart .ui-chk__input");

    checkbox::set(&mut page, "#chk-autostart", true);
    assert!(checkbox::is_checked(&page, input));
    assert!(page.has_class(wrapper, checkbox::CHECKED));
    assert_eq!(page.attr(input, "aria-checked"), Some("true"));

    checkbox::set(&mut page, input, false);
    assert!(!checkbox::is_checked(&page, wrapper));
    assert!(!page.has_class(wrapper, checkbox::CHECKED));

    // A container resolves to its first checkbox
    checkbox::set(&mut page, "#app", true);
    assert!(checkbox::is_checked(&page, "#chk-autostart"));
    assert!(!checkbox::is_checked(&page, "#chk-reconnect"));
}

#[test]
fn test_checkbox_indeterminate_excludes_checked() {
    let mut page = page();
    let wrapper = first(&page, "#chk-autostart");
    let input = first(&page, "#chk-autostart .ui-chk__input");

    checkbox::set(&mut page, wrapper, true);
    checkbox::set_indeterminate(&mut page, wrapper, true);
    assert!(!checkbox::is_checked(&page, wrapper));
    assert!(checkbox::is_indeterminate(&page, wrapper));
    assert!(page.has_class(wrapper, checkbox::INDETERMINATE));
    assert!(!page.has_class(wrapper, checkbox::CHECKED));
    assert_eq!(page.attr(input, "aria-checked"), Some("mixed"));

    checkbox::toggle(&mut page, wrapper);
    assert!(checkbox::is_checked(&page, wrapper));
    assert!(!checkbox::is_indeterminate(&page, wrapper));
    assert!(!page.has_class(wrapper, checkbox::INDETERMINATE));
}

#[test]
fn test_checkbox_set_notifies_change() {
    let mut page = page();
    let changes = count_changes(&mut page, "#chk-autostart .ui-chk__input");

    checkbox::set(&mut page, "#chk-autostart", true);
    checkbox::toggle(&mut page, "#chk-autostart");
    assert_eq!(*changes.borrow(), 2);

    // Presentation-only mutations stay quiet
    checkbox::set_indeterminate(&mut page, "#chk-autostart", true);
    checkbox::set_disabled(&mut page, "#chk-autostart", true);
    assert_eq!(*changes.borrow(), 2);
}

#[test]
fn test_checkbox_user_click_syncs_wrapper() {
    let mut page = page();
    let wrapper = first(&page, "#chk-reconnect");
    let input = first(&page, "#chk-reconnect .ui-chk__input");

    page.click(input);
    assert!(page.has_class(wrapper, checkbox::CHECKED));

    checkbox::set_disabled(&mut page, wrapper, true);
    assert!(page.has_class(wrapper, checkbox::DISABLED));
    page.click(input);
    assert!(checkbox::is_checked(&page, wrapper));
}

#[test]
fn test_checkbox_unresolved_is_noop() {
    let mut page = page();
    let before = page.outer_html(page.root());

    checkbox::set(&mut page, "#missing", true);
    checkbox::toggle(&mut page, "div >");
    checkbox::set_disabled(&mut page, "#mode-group .ui-radio", true);

    assert!(!checkbox::is_checked(&page, "#missing"));
    assert!(!checkbox::is_indeterminate(&page, "#missing"));
    assert_eq!(page.outer_html(page.root()), before);
}

#[test]
fn test_checkbox_sync_is_idempotent() {
    let mut page = page();
    checkbox::set_indeterminate(&mut page, "#chk-autostart", true);
    let input = first(&page, "#chk-autostart .ui-chk__input");

    let once = page.outer_html(page.root());
    checkbox::sync(&mut page, input);
    checkbox::sync(&mut page, input);
    assert_eq!(page.outer_html(page.root()), once);
}

// ============================================================================
// Toggle
// ============================================================================

#[test]
fn test_toggle_switch() {
    let mut page = page();
    let wrapper = first(&page, "#toggle-power");
    let input = first(&page, "#toggle-power .ui-toggle__input");
    let changes = count_changes(&mut page, "#toggle-power .ui-toggle__input");

    assert!(!toggle::is_on(&page, wrapper));
    assert_eq!(page.attr(input, "aria-checked"), Some("false"));

    toggle::toggle(&mut page, wrapper);
    assert!(toggle::is_on(&page, wrapper));
    assert!(page.has_class(wrapper, toggle::ON));
    assert_eq!(page.attr(input, "aria-checked"), Some("true"));

    toggle::set(&mut page, input, false);
    assert!(!page.has_class(wrapper, toggle::ON));
    assert_eq!(*changes.borrow(), 2);

    toggle::set_disabled(&mut page, wrapper, true);
    assert!(page.has_class(wrapper, toggle::DISABLED));
    assert!(page.is_disabled(input));
}

#[test]
fn test_toggle_user_click() {
    let mut page = page();
    let input = first(&page, "#toggle-power .ui-toggle__input");
    page.click(input);
    assert!(page.has_class(first(&page, "#toggle-power"), toggle::ON));
}

// ============================================================================
// Radio group
// ============================================================================

fn checked_values(page: &Page, name: &str) -> Vec<String> {
    radio::group_inputs(page, &RadioGroup::name(name))
        .into_iter()
        .filter(|r| page.is_checked(*r))
        .filter_map(|r| page.value(r))
        .collect()
}

fn wrapper_of(page: &Page, value: &str) -> NodeId {
    let input = first(page, &format!(".ui-radio__input[value={value}]"));
    page.parent(input).unwrap()
}

#[test]
fn test_radio_install_syncs_initial_state() {
    let page = page();
    assert!(page.has_class(wrapper_of(&page, "cool"), radio::CHECKED));
    assert!(!page.has_class(wrapper_of(&page, "heat"), radio::CHECKED));
    assert_eq!(
        radio::get_group_value(&page, &RadioGroup::name("mode")).as_deref(),
        Some("cool")
    );
}

#[test]
fn test_radio_set_group_value_checks_exactly_one() {
    let mut page = page();
    let group = RadioGroup::name("mode");

    radio::set_group_value(&mut page, &group, "heat");
    assert_eq!(checked_values(&page, "mode"), ["heat"]);
    assert!(page.has_class(wrapper_of(&page, "heat"), radio::CHECKED));
    assert!(!page.has_class(wrapper_of(&page, "cool"), radio::CHECKED));

    // Other groups are untouched
    assert_eq!(checked_values(&page, "fan"), ["low"]);
}

#[test]
fn test_radio_unknown_value_checks_none() {
    let mut page = page();
    let group = RadioGroup::name("mode");

    radio::set_group_value(&mut page, &group, "turbo");
    assert!(checked_values(&page, "mode").is_empty());
    assert_eq!(radio::get_group_value(&page, &group), None);
    assert!(!page.has_class(wrapper_of(&page, "cool"), radio::CHECKED));
}

#[test]
fn test_radio_group_by_container() {
    let mut page = page();
    let group = RadioGroup::container("#fan-group");

    radio::set_group_value(&mut page, &group, "high");
    assert_eq!(radio::get_group_value(&page, &group).as_deref(), Some("high"));
    assert_eq!(checked_values(&page, "fan"), ["high"]);

    // A container without radios is an empty group
    let empty = RadioGroup::container("#chk-autostart");
    assert!(radio::group_inputs(&page, &empty).is_empty());
    assert_eq!(radio::get_group_value(&page, &empty), None);
}

#[test]
fn test_radio_set_group_value_notifies_checked_radio() {
    let mut page = page();
    let changes = count_changes(&mut page, ".ui-radio__input[value=auto]");
    let all = count_changes(&mut page, ".ui-radio__input");

    radio::set_group_value(&mut page, &RadioGroup::name("mode"), "auto");
    assert_eq!(*changes.borrow(), 1);
    assert_eq!(*all.borrow(), 1);
}

#[test]
fn test_radio_user_click_resyncs_peers() {
    let mut page = page();
    let auto = first(&page, ".ui-radio__input[value=auto]");

    page.click(auto);
    assert!(page.has_class(wrapper_of(&page, "auto"), radio::CHECKED));
    assert!(!page.has_class(wrapper_of(&page, "cool"), radio::CHECKED));
}

#[test]
fn test_radio_set_disabled_on_container() {
    let mut page = page();
    radio::set_disabled(&mut page, "#mode-group", true);

    for value in ["heat", "cool", "auto"] {
        assert!(page.has_class(wrapper_of(&page, value), radio::DISABLED));
    }
    assert!(!page.has_class(wrapper_of(&page, "low"), radio::DISABLED));

    let heat = first(&page, ".ui-radio__input[value=heat]");
    radio::set_disabled(&mut page, heat, false);
    assert!(!page.has_class(wrapper_of(&page, "heat"), radio::DISABLED));
    assert!(page.has_class(wrapper_of(&page, "cool"), radio::DISABLED));
}
