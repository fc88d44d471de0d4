use uidom::{EventKind, Page, SelectorError};

use crate::config::KitConfig;
use crate::resolve;

use super::{CONTROL, sync, sync_group_of};

pub fn install(page: &mut Page, _config: &KitConfig) -> Result<(), SelectorError> {
    let inputs = resolve::query_all(page, CONTROL);
    for input in &inputs {
        sync(page, *input);
    }

    // Checking one radio silently unchecks its peers, so the whole group
    // is re-synced
    page.on(EventKind::Change, CONTROL, |page, cx| {
        sync_group_of(page, cx.current_target());
    })?;

    log::info!("[radio] installed ({} instance(s))", inputs.len());
    Ok(())
}
