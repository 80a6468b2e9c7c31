//! Result presentation state: the last generated output, the copy
//! acknowledgment and blocking notices.

use formsmith_core::GeneratedOutput;

/// State behind the result modal
#[derive(Debug, Clone, Default)]
pub struct ResultState {
    /// Most recent output; survives closing the modal
    pub output: Option<GeneratedOutput>,
    /// Whether the modal is currently shown
    pub visible: bool,
    /// "Copied!" acknowledgment is showing
    pub copied: bool,
    /// Bumped on every successful copy so stale reset timers are ignored
    pub copy_generation: u64,
    /// A clipboard write is in flight
    pub copy_pending: bool,
    /// Id of the latest copy request; completions of older requests are ignored
    pub copy_request: u64,
    /// Last clipboard failure, kept for diagnostics only
    pub last_error: Option<String>,
    /// First visible content row
    pub scroll: usize,
    /// Largest useful `scroll`, recorded by the renderer from the wrapped layout
    pub max_scroll: Option<usize>,
}

impl ResultState {
    /// Replace the output and show it
    pub fn show(&mut self, output: GeneratedOutput) {
        self.output = Some(output);
        self.visible = true;
        self.copied = false;
        self.copy_pending = false;
        self.copy_request = self.copy_request.wrapping_add(1);
        self.scroll = 0;
        self.max_scroll = None;
    }

    /// Hide the modal; the output is kept
    pub fn close(&mut self) {
        self.visible = false;
        self.copied = false;
    }

    /// Show the last output again. Returns false when there is none.
    pub fn reopen(&mut self) -> bool {
        if self.output.is_none() {
            return false;
        }
        self.visible = true;
        self.scroll = 0;
        true
    }

    pub fn content(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.content.as_str())
    }

    /// Start a clipboard write of the shown output; returns its request id
    pub fn begin_copy(&mut self) -> u64 {
        self.copy_request = self.copy_request.wrapping_add(1);
        self.copy_pending = true;
        self.copy_request
    }

    /// Whether `request` is the copy of the output currently held
    pub fn is_current_copy(&self, request: u64) -> bool {
        self.copy_pending && request == self.copy_request
    }

    /// Record a successful copy; returns the generation of this acknowledgment
    pub fn mark_copied(&mut self) -> u64 {
        self.copy_pending = false;
        self.copied = true;
        self.last_error = None;
        self.copy_generation = self.copy_generation.wrapping_add(1);
        self.copy_generation
    }

    /// Record a failed copy
    pub fn mark_copy_failed(&mut self, error: impl Into<String>) {
        self.copy_pending = false;
        self.copied = false;
        self.last_error = Some(error.into());
    }

    /// Clear the acknowledgment if `generation` is still current.
    /// Returns true when it was cleared.
    pub fn expire_copied(&mut self, generation: u64) -> bool {
        if self.copied && generation == self.copy_generation {
            self.copied = false;
            true
        } else {
            false
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Scroll towards the end. Before the first render the bound is one
    /// row per content line.
    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.max_scroll.unwrap_or_else(|| {
            self.output
                .as_ref()
                .map(|o| o.line_count().saturating_sub(1))
                .unwrap_or(0)
        });
        self.scroll = (self.scroll + lines).min(max);
    }

    /// Record the scroll bound of the rendered layout and pull `scroll`
    /// back inside it (the terminal may have grown)
    pub fn set_max_scroll(&mut self, max: usize) {
        self.max_scroll = Some(max);
        self.scroll = self.scroll.min(max);
    }
}

/// Blocking notice (e.g. validation failure), dismissed by any key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeState {
    pub title: String,
    pub message: String,
}

impl NoticeState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Notice shown when generation finds no usable field
    pub fn no_fields() -> Self {
        Self::new("Nothing to Generate", "Please enter at least one field.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(content: &str) -> GeneratedOutput {
        GeneratedOutput::new("Professor Summary App", content)
    }

    #[test]
    fn test_close_keeps_output() {
        let mut state = ResultState::default();
        state.show(output("Name: Dr. Smith"));
        state.close();

        assert!(!state.visible);
        assert_eq!(state.content(), Some("Name: Dr. Smith"));
        assert!(state.reopen());
        assert!(state.visible);
    }

    #[test]
    fn test_reopen_without_output() {
        let mut state = ResultState::default();
        assert!(!state.reopen());
        assert!(!state.visible);
    }

    #[test]
    fn test_show_overwrites_and_resets_ack() {
        let mut state = ResultState::default();
        state.show(output("A: 1"));
        state.mark_copied();
        state.show(output("B: 2"));

        assert_eq!(state.content(), Some("B: 2"));
        assert!(!state.copied);
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut state = ResultState::default();
        state.show(output("A: 1"));
        let first = state.mark_copied();
        let second = state.mark_copied();

        assert!(!state.expire_copied(first));
        assert!(state.copied);
        assert!(state.expire_copied(second));
        assert!(!state.copied);
    }

    #[test]
    fn test_copy_failure_is_recorded() {
        let mut state = ResultState::default();
        state.copy_pending = true;
        state.mark_copy_failed("no display");
        assert!(!state.copy_pending);
        assert!(!state.copied);
        assert_eq!(state.last_error.as_deref(), Some("no display"));
    }

    #[test]
    fn test_scroll_is_bounded_by_content() {
        let mut state = ResultState::default();
        state.show(output("A: 1\nB: 2\nC: 3"));
        state.scroll_down(10);
        assert_eq!(state.scroll, 2);
        state.scroll_up(5);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_scroll_uses_rendered_bound() {
        let mut state = ResultState::default();
        state.show(output("Bio: one long line"));
        state.set_max_scroll(4);
        state.scroll_down(10);
        assert_eq!(state.scroll, 4);

        state.set_max_scroll(1);
        assert_eq!(state.scroll, 1);
    }

    #[test]
    fn test_show_forgets_rendered_bound() {
        let mut state = ResultState::default();
        state.show(output("A: 1"));
        state.set_max_scroll(9);
        state.show(output("B: 2"));
        assert_eq!(state.max_scroll, None);
    }

    #[test]
    fn test_new_output_invalidates_copy_request() {
        let mut state = ResultState::default();
        state.show(output("A: 1"));
        let request = state.begin_copy();
        assert!(state.is_current_copy(request));

        state.show(output("B: 2"));

        assert!(!state.is_current_copy(request));
        assert!(!state.copy_pending);
    }

    #[test]
    fn test_no_fields_notice() {
        let notice = NoticeState::no_fields();
        assert_eq!(notice.message, "Please enter at least one field.");
    }
}
