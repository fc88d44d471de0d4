//! Markup of the device control panel.

use uidom::Element;

pub const LOG_PLACEHOLDER: &str = "Log is empty...";
pub const TELEMETRY_PLACEHOLDER: &str = "Waiting for connection...";
pub const TEMP_PLACEHOLDER: &str = "--.- °C";
pub const VOLTAGE_PLACEHOLDER: &str = "--.- V";

pub const INDICATOR_CONNECTED: &str = "app__status-indicator_connected";
pub const INDICATOR_DISCONNECTED: &str = "app__status-indicator_disconnected";

/// Build the whole panel.
pub fn build() -> Element {
    Element::div()
        .id("app")
        .class("app")
        .child(header())
        .child(tabs(
            "tabs-main",
            &[("status", "Status"), ("config", "Configuration"), ("diag", "Diagnostics")],
            vec![status_panel(), config_panel(), diag_panel()],
        ))
}

fn header() -> Element {
    Element::div()
        .class("app__header")
        .child(Element::span().class("app__title").text("Device control"))
        .child(
            Element::span()
                .id("app-status-indicator")
                .class("app__status-indicator")
                .class(INDICATOR_DISCONNECTED)
                .text("Disconnected"),
        )
}

// -------------------------------------------------------------------------
// Tab contents
// -------------------------------------------------------------------------

fn status_panel() -> Element {
    Element::div()
        .child(
            groupbox("gb-readouts", "Readouts", None)
                .child(kv("kv-temp", "Temperature", TEMP_PLACEHOLDER))
                .child(kv("kv-voltage", "Voltage", VOLTAGE_PLACEHOLDER))
                .child(kv("kv-power-state", "Power", "Off"))
                .child(
                    Element::div()
                        .id("telemetry-text")
                        .class("app__telemetry")
                        .text(TELEMETRY_PLACEHOLDER),
                ),
        )
        .child(progress("progress-job", "Idle"))
        .child(
            groupbox("gb-log", "Log", None)
                .child(Element::new("pre").id("log-output").class("app__log").text(LOG_PLACEHOLDER))
                .child(button("btn-log-clear", "Clear log")),
        )
}

fn config_panel() -> Element {
    let connection = groupbox("gb-connection", "Connection", Some("Device link"))
        .data("collapsible", "true")
        .child(line_edit("le-address", "Address", "192.168.0.10", "IPv4 address or hostname"))
        .child(line_edit("le-port", "Port", "502", "Defaults to 502"))
        .child(combo(
            "combo-proto",
            &[("tcp", "TCP"), ("udp", "UDP"), ("serial", "Serial")],
            "tcp",
        ))
        .child(button("btn-connect", "Connect").data("loading-text", "Connecting…"))
        .child(button("btn-disconnect", "Disconnect"));

    let settings = groupbox("gb-settings", "Settings", None)
        .data("collapsible", "true")
        .child(combo(
            "combo-mode",
            &[("normal", "Normal"), ("eco", "Eco"), ("boost", "Boost")],
            "normal",
        ))
        .child(slider("slider-power", 0, 100, 30))
        .child(checkbox("chk-autostart", "Autostart"))
        .child(checkbox("chk-autoreconnect", "Auto-reconnect"))
        .child(toggle("toggle-power", "Power"))
        .child(
            button("btn-apply", "Apply")
                .data("ui-btn-loading", "")
                .data("loading-text", "Applying…"),
        )
        .child(button("btn-reset", "Reset"));

    Element::div().child(connection).child(settings)
}

fn diag_panel() -> Element {
    groupbox("gb-diag", "Diagnostics", None)
        .child(
            Element::div()
                .id("radio-diag-level")
                .child(radio("diag-level", "basic", "Basic", true))
                .child(radio("diag-level", "verbose", "Verbose", false)),
        )
        .child(button("btn-diag-hold", "Hold readouts").data("ui-btn-toggle", ""))
}

// -------------------------------------------------------------------------
// Widget markup
// -------------------------------------------------------------------------

fn tabs(id: &str, tabs: &[(&str, &str)], panels: Vec<Element>) -> Element {
    let bar = tabs.iter().fold(Element::div().class("ui-tabs__bar"), |bar, (tab, label)| {
        bar.child(Element::button().class("ui-tabs__tab").data("tab-id", *tab).text(*label))
    });
    let panels = tabs.iter().zip(panels).map(|((tab, _), content)| {
        Element::div()
            .class("ui-tabs__panel")
            .data("tab-id", *tab)
            .child(content)
    });
    Element::div()
        .id(id)
        .class("ui-tabs")
        .data("ui-tabs", "")
        .child(bar)
        .children(panels.collect::<Vec<_>>())
}

fn groupbox(id: &str, title: &str, subtitle: Option<&str>) -> Element {
    let mut titles = Element::div()
        .class("ui-groupbox__titles")
        .child(Element::div().class("ui-groupbox__title").text(title));
    if let Some(subtitle) = subtitle {
        titles = titles.child(Element::div().class("ui-groupbox__subtitle").text(subtitle));
    }
    Element::div()
        .id(id)
        .class("ui-groupbox")
        .data("ui-groupbox", "")
        .child(Element::div().class("ui-groupbox__header").child(titles))
}

fn kv(id: &str, label: &str, value: &str) -> Element {
    Element::div()
        .class("app__kv")
        .child(Element::span().class("app__kv-label").text(label))
        .child(Element::span().id(id).class("app__kv-value").text(value))
}

fn line_edit(id: &str, label: &str, placeholder: &str, hint: &str) -> Element {
    Element::div()
        .id(id)
        .class("ui-lineedit")
        .data("ui-lineedit", "")
        .child(Element::label().class("ui-lineedit__label").text(label))
        .child(
            Element::input("text")
                .class("ui-lineedit__input")
                .attr("placeholder", placeholder),
        )
        .child(Element::div().class("ui-lineedit__hint").text(hint))
}

fn combo(id: &str, options: &[(&str, &str)], selected: &str) -> Element {
    let select = options
        .iter()
        .fold(Element::select().class("ui-combo__select"), |select, (value, label)| {
            select.child(Element::option(*value, *label).selected(*value == selected))
        });
    Element::div()
        .id(id)
        .class("ui-combo")
        .data("ui-combo", "")
        .child(select)
        .child(Element::button().class("ui-combo__value"))
        .child(Element::div().class("ui-combo__dropdown"))
}

fn slider(id: &str, min: i32, max: i32, value: i32) -> Element {
    Element::div()
        .id(id)
        .class("ui-slider")
        .data("ui-slider", "")
        .child(
            Element::input("range")
                .class("ui-slider__input")
                .attr("min", min.to_string())
                .attr("max", max.to_string())
                .value(value.to_string()),
        )
        .child(Element::span().class("ui-slider__value"))
}

fn checkbox(id: &str, label: &str) -> Element {
    Element::label()
        .id(id)
        .class("ui-chk")
        .child(Element::input("checkbox").class("ui-chk__input"))
        .child(Element::span().class("ui-chk__box"))
        .child(Element::span().class("ui-chk__label").text(label))
}

fn toggle(id: &str, label: &str) -> Element {
    Element::label()
        .id(id)
        .class("ui-toggle")
        .child(Element::input("checkbox").class("ui-toggle__input"))
        .child(Element::span().class("ui-toggle__track"))
        .child(Element::span().class("ui-toggle__label").text(label))
}

fn radio(name: &str, value: &str, label: &str, checked: bool) -> Element {
    Element::label()
        .class("ui-radio")
        .child(
            Element::input("radio")
                .class("ui-radio__input")
                .name(name)
                .value(value)
                .checked(checked),
        )
        .child(Element::span().class("ui-radio__label").text(label))
}

fn progress(id: &str, label: &str) -> Element {
    Element::div()
        .id(id)
        .class("ui-progress")
        .data("ui-progress", "")
        .child(Element::div().class("ui-progress__label").text(label))
        .child(
            Element::div()
                .class("ui-progress__track")
                .child(Element::div().class("ui-progress__bar")),
        )
        .child(Element::span().class("ui-progress__value"))
}

fn button(id: &str, label: &str) -> Element {
    Element::button().id(id).class("ui-btn").text(label)
}
