use uidom::{EventKind, Page, SelectorError};

use crate::config::KitConfig;
use crate::resolve;

use super::{CONTROL, sync};

pub fn install(page: &mut Page, _config: &KitConfig) -> Result<(), SelectorError> {
    let inputs = resolve::query_all(page, CONTROL);
    for input in &inputs {
        sync(page, *input);
    }

    page.on(EventKind::Change, CONTROL, |page, cx| {
        sync(page, cx.current_target());
    })?;

    log::info!("[checkbox] installed ({} instance(s))", inputs.len());
    Ok(())
}
