use std::time::Duration;

use uidom::{NodeId, Page};
use uikit::{button, lineedit, progress, slider};
use uikit_demo::panel::{INDICATOR_CONNECTED, INDICATOR_DISCONNECTED, LOG_PLACEHOLDER};
use uikit_demo::{Controller, DemoConfig, Flow, Session};

fn config() -> DemoConfig {
    DemoConfig {
        telemetry_interval_ms: 1000,
        job_interval_ms: 100,
        job_step: 7.0,
        connect_delay_ms: 700,
        seed: Some(7),
        ..DemoConfig::default()
    }
}

fn setup() -> (Page, Controller) {
    uikit_demo::build_page(&config()).unwrap()
}

fn node(page: &Page, selector: &str) -> NodeId {
    page.select_first(selector).unwrap().unwrap()
}

fn text(page: &Page, selector: &str) -> String {
    page.text(node(page, selector))
}

fn log_text(page: &Page) -> String {
    text(page, "#log-output")
}

fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn connect(page: &mut Page, address: &str) {
    let input = node(page, "#le-address .ui-lineedit__input");
    page.input_text(input, address);
    page.click(node(page, "#btn-connect"));
    page.advance(ms(700));
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn test_initial_state() {
    let (page, controller) = setup();

    assert!(!controller.is_connected());
    assert!(log_text(&page).ends_with("] Demo panel loaded.\n"));
    assert!(!log_text(&page).contains(LOG_PLACEHOLDER));
    assert_eq!(slider::get(&page, "#slider-power"), Some(30.0));
    assert_eq!(progress::get(&page, "#progress-job"), Some(0.0));
    assert_eq!(text(&page, "#kv-power-state"), "Off");
    assert_eq!(text(&page, "#progress-job .ui-progress__value"), "0%");
}

// ============================================================================
// Connection
// ============================================================================

#[test]
fn test_connect_requires_address() {
    let (mut page, controller) = setup();
    page.click(node(&page, "#btn-connect"));

    assert!(lineedit::has_error(&page, "#le-address"));
    assert_eq!(text(&page, "#le-address .ui-lineedit__error-text"), "Address is required");
    assert!(log_text(&page).contains("Error: device address is not set."));
    page.advance(ms(2000));
    assert!(!controller.is_connected());
}

#[test]
fn test_connect_flow() {
    let (mut page, controller) = setup();
    page.click(node(&page, "#btn-connect"));

    let input = node(&page, "#le-address .ui-lineedit__input");
    page.input_text(input, "10.0.0.7");
    page.click(node(&page, "#btn-connect"));

    assert!(!lineedit::has_error(&page, "#le-address"));
    assert_eq!(text(&page, "#le-address .ui-lineedit__hint"), "IPv4 address or hostname");
    assert!(button::is_loading(&page, "#btn-connect"));
    assert_eq!(text(&page, "#btn-connect"), "Connecting…");
    assert!(log_text(&page).contains("Connecting to 10.0.0.7:502 over TCP..."));

    page.advance(ms(699));
    assert!(!controller.is_connected());
    page.advance(ms(1));
    assert!(controller.is_connected());
    assert!(!button::is_loading(&page, "#btn-connect"));
    assert_eq!(text(&page, "#btn-connect"), "Connect");

    let indicator = node(&page, "#app-status-indicator");
    assert!(page.has_class(indicator, INDICATOR_CONNECTED));
    assert!(!page.has_class(indicator, INDICATOR_DISCONNECTED));
    assert_eq!(page.text(indicator), "Connected");
    assert!(log_text(&page).contains("Connection established."));
}

#[test]
fn test_connect_uses_port_and_protocol() {
    let (mut page, _) = setup();
    let port = node(&page, "#le-port .ui-lineedit__input");
    page.input_text(port, "5020");
    uikit::combo::set(&mut page, "#combo-proto", "udp");

    connect(&mut page, "plc.local");
    assert!(log_text(&page).contains("Connecting to plc.local:5020 over UDP..."));
}

#[test]
fn test_telemetry_while_connected() {
    let (mut page, controller) = setup();
    connect(&mut page, "10.0.0.7");
    assert!(controller.telemetry_running());
    assert_eq!(text(&page, "#kv-temp"), "--.- °C");

    page.advance(ms(1000));
    let temp = text(&page, "#kv-temp");
    let temp: f64 = temp.strip_suffix(" °C").unwrap().parse().unwrap();
    assert!((20.0..=40.0).contains(&temp));

    let voltage = text(&page, "#kv-voltage");
    let voltage: f64 = voltage.strip_suffix(" V").unwrap().parse().unwrap();
    assert!((12.0..=12.5).contains(&voltage));

    let summary = text(&page, "#telemetry-text");
    assert!(summary.starts_with("Temp: "));
    assert!(summary.ends_with(", mode: normal"));
}

#[test]
fn test_disconnect_resets_readouts() {
    let (mut page, controller) = setup();
    connect(&mut page, "10.0.0.7");
    page.advance(ms(1000));
    page.click(node(&page, "#btn-apply"));
    page.advance(ms(300));

    page.click(node(&page, "#btn-disconnect"));
    assert!(!controller.is_connected());
    assert!(!controller.telemetry_running());
    assert!(!controller.job_running());
    assert_eq!(progress::get(&page, "#progress-job"), Some(0.0));
    assert_eq!(text(&page, "#kv-temp"), "--.- °C");
    assert_eq!(text(&page, "#kv-voltage"), "--.- V");
    assert_eq!(text(&page, "#telemetry-text"), "Waiting for connection...");
    assert_eq!(text(&page, "#app-status-indicator"), "Disconnected");
    assert!(log_text(&page).contains("Connection closed."));

    // Nothing keeps ticking
    page.advance(ms(5000));
    assert_eq!(progress::get(&page, "#progress-job"), Some(0.0));
    assert_eq!(text(&page, "#kv-temp"), "--.- °C");
}

// ============================================================================
// Settings and job
// ============================================================================

#[test]
fn test_apply_requires_connection() {
    let (mut page, controller) = setup();
    page.click(node(&page, "#btn-apply"));
    assert!(log_text(&page).contains("Cannot apply settings: device is not connected."));
    assert!(!controller.job_running());
}

#[test]
fn test_apply_runs_job_to_completion() {
    let (mut page, controller) = setup();
    connect(&mut page, "10.0.0.7");
    uikit::checkbox::set(&mut page, "#chk-autoreconnect", true);
    uikit::combo::set(&mut page, "#combo-mode", "boost");
    slider::set(&mut page, "#slider-power", 64.6);

    page.click(node(&page, "#btn-apply"));
    assert!(log_text(&page).contains(
        "Applying settings: mode=boost, power=65%, autostart=no, autoreconnect=yes."
    ));
    assert!(controller.job_running());
    assert_eq!(text(&page, "#progress-job .ui-progress__label"), "Current job");
    assert!(button::is_loading(&page, "#btn-apply"));

    page.advance(ms(1400));
    assert_eq!(controller.job_progress(), 98.0);
    assert_eq!(text(&page, "#progress-job .ui-progress__value"), "98%");
    assert!(!log_text(&page).contains("Job completed."));

    page.advance(ms(100));
    assert_eq!(progress::get(&page, "#progress-job"), Some(100.0));
    assert!(!controller.job_running());
    assert!(log_text(&page).ends_with("] Job completed.\n"));

    page.advance(ms(1000));
    assert!(!button::is_loading(&page, "#btn-apply"));
    assert_eq!(progress::get(&page, "#progress-job"), Some(100.0));
}

#[test]
fn test_reset_restores_defaults() {
    let (mut page, _) = setup();
    let address = node(&page, "#le-address .ui-lineedit__input");
    page.input_text(address, "10.0.0.7");
    uikit::combo::set(&mut page, "#combo-mode", "eco");
    slider::set(&mut page, "#slider-power", 90.0);
    uikit::checkbox::set(&mut page, "#chk-autostart", true);

    page.click(node(&page, "#btn-reset"));
    assert_eq!(lineedit::get_value(&page, "#le-address"), "");
    assert_eq!(uikit::combo::get(&page, "#combo-mode").as_deref(), Some("normal"));
    assert_eq!(text(&page, "#combo-mode .ui-combo__value"), "Normal");
    assert_eq!(slider::get(&page, "#slider-power"), Some(30.0));
    assert!(!uikit::checkbox::is_checked(&page, "#chk-autostart"));
    assert!(log_text(&page).contains("Settings reset to defaults."));
}

#[test]
fn test_power_toggle_updates_readout() {
    let (mut page, _) = setup();
    let input = node(&page, "#toggle-power .ui-toggle__input");

    page.click(input);
    assert_eq!(text(&page, "#kv-power-state"), "On");
    assert!(log_text(&page).contains("Device power: on"));

    uikit::toggle::set(&mut page, "#toggle-power", false);
    assert_eq!(text(&page, "#kv-power-state"), "Off");
    assert!(log_text(&page).contains("Device power: off"));
}

#[test]
fn test_clicking_power_label_switches_power() {
    let (mut page, _) = setup();
    page.click(node(&page, "#toggle-power"));
    assert!(uikit::toggle::is_on(&page, "#toggle-power"));
    assert_eq!(text(&page, "#kv-power-state"), "On");
    assert!(log_text(&page).contains("Device power: on"));

    page.click(node(&page, "#toggle-power .ui-toggle__label"));
    assert!(!uikit::toggle::is_on(&page, "#toggle-power"));
    assert_eq!(text(&page, "#kv-power-state"), "Off");
}

#[test]
fn test_tab_changes_are_logged_and_log_clears() {
    let (mut page, _) = setup();
    page.click(node(&page, "#tabs-main .ui-tabs__tab[data-tab-id=diag]"));
    assert!(log_text(&page).contains("Tab switched: diag"));

    page.click(node(&page, "#btn-log-clear"));
    assert_eq!(log_text(&page), LOG_PLACEHOLDER);

    uikit::tabs::set_active(&mut page, "#tabs-main", "config");
    let log = log_text(&page);
    assert!(log.starts_with('['));
    assert!(log.ends_with("] Tab switched: config\n"));
}

// ============================================================================
// Script
// ============================================================================

#[test]
fn test_script_session() {
    let (page, controller) = setup();
    let mut session = Session::new(page, Vec::new());
    let script = "\
# connect and run a job
type #le-address .ui-lineedit__input 192.168.1.20
click #btn-connect
wait 700
show #app-status-indicator
click #btn-apply
wait 1500
show #progress-job .ui-progress__value
frobnicate
quit
show #app-status-indicator
";

    let mut waited = Duration::ZERO;
    for (index, line) in script.lines().enumerate() {
        match session.step(index + 1, line).unwrap() {
            Flow::Continue => {}
            Flow::Wait(duration) => {
                waited += duration;
                session.page_mut().advance(duration);
            }
            Flow::Quit => break,
        }
    }

    assert_eq!(waited, ms(2200));
    assert!(controller.is_connected());
    let (_, out) = session.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "Connected\n100%\nline 9: Unknown command: frobnicate\n");
}
