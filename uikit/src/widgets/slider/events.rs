use uidom::{EventKind, NodeId, Page, SelectorError};

use crate::config::KitConfig;
use crate::resolve;

use super::{CONTROL, FILL_KEY, TRACK_KEY, normalize_range, sync};

fn apply_colors(page: &mut Page, input: NodeId, fill: &str, track: &str) {
    if page.data(input, FILL_KEY).is_none() {
        page.set_data(input, FILL_KEY, fill);
    }
    if page.data(input, TRACK_KEY).is_none() {
        page.set_data(input, TRACK_KEY, track);
    }
}

pub fn install(page: &mut Page, config: &KitConfig) -> Result<(), SelectorError> {
    let inputs = resolve::query_all(page, CONTROL);
    for input in &inputs {
        normalize_range(page, *input);
        apply_colors(page, *input, &config.slider_fill, &config.slider_track);
        sync(page, *input);
    }

    for kind in [EventKind::Input, EventKind::Change] {
        let fill = config.slider_fill.clone();
        let track = config.slider_track.clone();
        page.on(kind, CONTROL, move |page, cx| {
            let input = cx.current_target();
            apply_colors(page, input, &fill, &track);
            sync(page, input);
        })?;
    }

    log::info!("[slider] installed ({} instance(s))", inputs.len());
    Ok(())
}
