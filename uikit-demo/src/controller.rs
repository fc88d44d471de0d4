//! Behaviour of the device control panel.
//!
//! There is no real device: connecting waits out a delay, telemetry is
//! random readouts on an interval and a job is a progress bar that fills
//! in fixed steps. All state other than the widgets' own lives in
//! [`State`], shared by the listeners and timers through an `Rc<RefCell>`.
//! No borrow of it is held across a page call that can dispatch events.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uidom::{EventKind, Page, SelectorError, TimerId};
use uikit::{TabChange, button, checkbox, combo, lineedit, progress, slider, tabs, toggle};

use crate::config::DemoConfig;
use crate::panel::{
    INDICATOR_CONNECTED, INDICATOR_DISCONNECTED, LOG_PLACEHOLDER, TELEMETRY_PLACEHOLDER,
    TEMP_PLACEHOLDER, VOLTAGE_PLACEHOLDER,
};

const DEFAULT_PORT: &str = "502";
const DEFAULT_PROTOCOL: &str = "tcp";
const RESET_POWER: f64 = 30.0;

#[derive(Debug, Clone, Copy)]
struct Timing {
    telemetry: Duration,
    job: Duration,
    job_step: f64,
    connect_delay: Duration,
}

#[derive(Debug)]
struct State {
    connected: bool,
    job_progress: f64,
    telemetry: Option<TimerId>,
    job: Option<TimerId>,
    rng: StdRng,
    timing: Timing,
}

type Shared = Rc<RefCell<State>>;

/// Handle to the installed behaviour.
#[derive(Debug, Clone)]
pub struct Controller {
    state: Shared,
}

impl Controller {
    pub fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }

    pub fn job_progress(&self) -> f64 {
        self.state.borrow().job_progress
    }

    pub fn job_running(&self) -> bool {
        self.state.borrow().job.is_some()
    }

    pub fn telemetry_running(&self) -> bool {
        self.state.borrow().telemetry.is_some()
    }
}

// -------------------------------------------------------------------------
// Log
// -------------------------------------------------------------------------

/// Append a timestamped line to `#log-output`.
pub fn log_line(page: &mut Page, message: &str) {
    log::info!("[demo] {message}");
    let Some(output) = page.get_element_by_id("log-output") else {
        return;
    };
    let stamp = chrono::Utc::now().format("%H:%M:%S");
    let line = format!("[{stamp}] {message}\n");
    let previous = page.text(output);
    let text = if previous == LOG_PLACEHOLDER {
        line
    } else {
        previous + &line
    };
    page.set_text(output, text);
}

fn set_text_by_id(page: &mut Page, id: &str, text: &str) {
    if let Some(node) = page.get_element_by_id(id) {
        page.set_text(node, text);
    }
}

fn yes_no(on: bool) -> &'static str {
    if on { "yes" } else { "no" }
}

// -------------------------------------------------------------------------
// Connection
// -------------------------------------------------------------------------

fn set_connected(page: &mut Page, state: &Shared, connected: bool) {
    state.borrow_mut().connected = connected;
    let indicator = page.get_element_by_id("app-status-indicator");

    if connected {
        if let Some(node) = indicator {
            page.remove_class(node, INDICATOR_DISCONNECTED);
            page.add_class(node, INDICATOR_CONNECTED);
            page.set_text(node, "Connected");
        }
        log_line(page, "Connection established.");
        start_telemetry(page, state);
    } else {
        if let Some(node) = indicator {
            page.remove_class(node, INDICATOR_CONNECTED);
            page.add_class(node, INDICATOR_DISCONNECTED);
            page.set_text(node, "Disconnected");
        }
        log_line(page, "Connection closed.");
        stop_telemetry(page, state);
        stop_job(page, state);
        update_job_progress(page, state, 0.0);
    }
}

fn connect(page: &mut Page, state: &Shared) {
    let address = lineedit::get_value(page, "#le-address");
    let port = lineedit::get_value(page, "#le-port");
    let port = if port.is_empty() { DEFAULT_PORT.to_string() } else { port };
    let protocol = combo::get(page, "#combo-proto")
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string());

    if address.is_empty() {
        lineedit::set_error(page, "#le-address", Some("Address is required"));
        log_line(page, "Error: device address is not set.");
        return;
    }
    lineedit::clear_error(page, "#le-address");

    log_line(
        page,
        &format!("Connecting to {address}:{port} over {}...", protocol.to_uppercase()),
    );
    button::set_loading(page, "#btn-connect", true);

    let delay = state.borrow().timing.connect_delay;
    let state = Rc::clone(state);
    page.set_timeout(delay, move |page| {
        button::set_loading(page, "#btn-connect", false);
        set_connected(page, &state, true);
    });
}

// -------------------------------------------------------------------------
// Telemetry
// -------------------------------------------------------------------------

fn start_telemetry(page: &mut Page, state: &Shared) {
    stop_telemetry(page, state);
    let period = state.borrow().timing.telemetry;
    let shared = Rc::clone(state);
    let id = page.set_interval(period, move |page| telemetry_tick(page, &shared));
    state.borrow_mut().telemetry = Some(id);
}

fn telemetry_tick(page: &mut Page, state: &Shared) {
    let (temp, voltage) = {
        let mut state = state.borrow_mut();
        if !state.connected {
            return;
        }
        let temp: f64 = state.rng.random_range(20.0..40.0);
        let voltage: f64 = state.rng.random_range(12.0..12.5);
        (temp, voltage)
    };

    set_text_by_id(page, "kv-temp", &format!("{temp:.1} °C"));
    set_text_by_id(page, "kv-voltage", &format!("{voltage:.2} V"));

    let mode = combo::get(page, "#combo-mode")
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "n/a".to_string());
    set_text_by_id(
        page,
        "telemetry-text",
        &format!("Temp: {temp:.1} °C, U: {voltage:.2} V, mode: {mode}"),
    );
}

fn stop_telemetry(page: &mut Page, state: &Shared) {
    let timer = state.borrow_mut().telemetry.take();
    if let Some(id) = timer {
        page.clear_timer(id);
    }
    set_text_by_id(page, "telemetry-text", TELEMETRY_PLACEHOLDER);
    set_text_by_id(page, "kv-temp", TEMP_PLACEHOLDER);
    set_text_by_id(page, "kv-voltage", VOLTAGE_PLACEHOLDER);
}

// -------------------------------------------------------------------------
// Job
// -------------------------------------------------------------------------

fn update_job_progress(page: &mut Page, state: &Shared, value: f64) {
    state.borrow_mut().job_progress = value;
    progress::set(page, "#progress-job", value);
}

fn start_job(page: &mut Page, state: &Shared) {
    stop_job(page, state);
    update_job_progress(page, state, 0.0);
    progress::set_label(page, "#progress-job", "Current job");

    let period = state.borrow().timing.job;
    let shared = Rc::clone(state);
    let id = page.set_interval(period, move |page| job_tick(page, &shared));
    state.borrow_mut().job = Some(id);
}

fn job_tick(page: &mut Page, state: &Shared) {
    let (connected, next) = {
        let state = state.borrow();
        (state.connected, state.job_progress + state.timing.job_step)
    };
    if !connected {
        stop_job(page, state);
        return;
    }
    if next >= 100.0 {
        update_job_progress(page, state, 100.0);
        log_line(page, "Job completed.");
        stop_job(page, state);
        return;
    }
    update_job_progress(page, state, next);
}

fn stop_job(page: &mut Page, state: &Shared) {
    let timer = state.borrow_mut().job.take();
    if let Some(id) = timer {
        page.clear_timer(id);
    }
}

// -------------------------------------------------------------------------
// Settings
// -------------------------------------------------------------------------

fn apply(page: &mut Page, state: &Shared) {
    if !state.borrow().connected {
        log_line(page, "Cannot apply settings: device is not connected.");
        return;
    }
    let mode = combo::get(page, "#combo-mode").unwrap_or_default();
    let power = slider::get(page, "#slider-power").unwrap_or(0.0);
    let autostart = checkbox::is_checked(page, "#chk-autostart");
    let autoreconnect = checkbox::is_checked(page, "#chk-autoreconnect");

    log_line(
        page,
        &format!(
            "Applying settings: mode={mode}, power={}%, autostart={}, autoreconnect={}.",
            power.round(),
            yes_no(autostart),
            yes_no(autoreconnect),
        ),
    );
    start_job(page, state);
}

fn reset(page: &mut Page) {
    lineedit::set_value(page, "#le-address", "");
    lineedit::set_value(page, "#le-port", "");
    combo::set(page, "#combo-mode", "normal");
    slider::set(page, "#slider-power", RESET_POWER);
    checkbox::set(page, "#chk-autostart", false);
    log_line(page, "Settings reset to defaults.");
}

fn power_changed(page: &mut Page) {
    let on = toggle::is_on(page, "#toggle-power");
    set_text_by_id(page, "kv-power-state", if on { "On" } else { "Off" });
    log_line(page, &format!("Device power: {}", if on { "on" } else { "off" }));
}

// -------------------------------------------------------------------------
// Install
// -------------------------------------------------------------------------

/// Bind the panel behaviour and set the initial values. Widgets must be
/// installed first.
pub fn install(page: &mut Page, config: &DemoConfig) -> Result<Controller, SelectorError> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let state: Shared = Rc::new(RefCell::new(State {
        connected: false,
        job_progress: 0.0,
        telemetry: None,
        job: None,
        rng,
        timing: Timing {
            telemetry: config.telemetry_interval(),
            job: config.job_interval(),
            job_step: config.job_step,
            connect_delay: config.connect_delay(),
        },
    }));

    let shared = Rc::clone(&state);
    page.on(EventKind::Click, "#btn-connect", move |page, _| connect(page, &shared))?;

    let shared = Rc::clone(&state);
    page.on(EventKind::Click, "#btn-disconnect", move |page, _| {
        set_connected(page, &shared, false);
    })?;

    let shared = Rc::clone(&state);
    page.on(EventKind::Click, "#btn-apply", move |page, _| apply(page, &shared))?;

    page.on(EventKind::Click, "#btn-reset", |page, _| reset(page))?;

    page.on(EventKind::Change, "#toggle-power .ui-toggle__input", |page, _| {
        power_changed(page);
    })?;

    page.on(EventKind::Click, "#btn-log-clear", |page, _| {
        set_text_by_id(page, "log-output", LOG_PLACEHOLDER);
    })?;

    page.on(tabs::change_event(), "#tabs-main", |page, cx| {
        // Nested tab widgets bubble through here too
        if cx.target() != cx.current_target() {
            return;
        }
        if let Some(change) = cx.detail::<TabChange>() {
            let message = format!("Tab switched: {}", change.tab_id);
            log_line(page, &message);
        }
    })?;

    slider::set(page, "#slider-power", RESET_POWER);
    update_job_progress(page, &state, 0.0);
    set_text_by_id(page, "kv-power-state", "Off");
    log_line(page, "Demo panel loaded.");

    Ok(Controller { state })
}
