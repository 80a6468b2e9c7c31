//! Summary generation, result modal and clipboard handlers

use formsmith_core::prelude::*;

use crate::result::NoticeState;
use crate::state::{AppState, UiMode};
use crate::summary;

use super::{UpdateAction, UpdateResult};

/// Generate the summary and show it, or raise the "nothing to generate" notice
pub fn handle_generate(state: &mut AppState) -> UpdateResult {
    match summary::generate_output(&state.title, state.fields.as_slice()) {
        Ok(output) => {
            info!(
                "Generated summary with {} lines for {:?}",
                output.line_count(),
                output.title
            );
            state.result.show(output);
            state.ui_mode = UiMode::Result;
        }
        Err(e @ Error::Validation { .. }) => {
            warn!("Generation rejected: {}", e);
            state.notice = Some(NoticeState::no_fields());
            state.ui_mode = UiMode::Notice;
        }
        Err(e) => {
            error!("Generation failed: {}", e);
        }
    }
    UpdateResult::none()
}

pub fn handle_close_result(state: &mut AppState) -> UpdateResult {
    state.result.close();
    if state.ui_mode == UiMode::Result {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}

pub fn handle_reopen_result(state: &mut AppState) -> UpdateResult {
    if state.result.reopen() {
        state.ui_mode = UiMode::Result;
    } else {
        debug!("No generated output to reopen");
    }
    UpdateResult::none()
}

/// Ask the event loop to write the shown output to the clipboard
pub fn handle_copy_result(state: &mut AppState) -> UpdateResult {
    if state.result.copy_pending {
        debug!("Copy already in flight");
        return UpdateResult::none();
    }
    let Some(content) = state.result.content().map(str::to_owned) else {
        return UpdateResult::none();
    };

    let request = state.result.begin_copy();
    UpdateResult::action(UpdateAction::CopyToClipboard { content, request })
}

pub fn handle_clipboard_copied(state: &mut AppState, request: u64) -> UpdateResult {
    if !state.result.is_current_copy(request) {
        trace!("Ignoring completion of superseded copy request {}", request);
        return UpdateResult::none();
    }
    let generation = state.result.mark_copied();
    UpdateResult::action(UpdateAction::ScheduleCopyReset {
        generation,
        after: state.settings.clipboard.ack_duration(),
    })
}

/// Copy failures never interrupt the user; they are only logged
pub fn handle_clipboard_failed(
    state: &mut AppState,
    request: u64,
    error: String,
) -> UpdateResult {
    if !state.result.is_current_copy(request) {
        trace!("Ignoring failure of superseded copy request {}", request);
        return UpdateResult::none();
    }
    error!("Failed to copy summary to clipboard: {}", error);
    state.result.mark_copy_failed(error);
    UpdateResult::none()
}

pub fn handle_copy_ack_expired(state: &mut AppState, generation: u64) -> UpdateResult {
    if !state.result.expire_copied(generation) {
        trace!("Ignoring stale copy acknowledgment {}", generation);
    }
    UpdateResult::none()
}

pub fn handle_dismiss_notice(state: &mut AppState) -> UpdateResult {
    state.notice = None;
    if state.ui_mode == UiMode::Notice {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}
