//! State machine behind the "try it live" generation demo.
//!
//! Nothing is generated: after a fixed delay the widget shows the same mock
//! site preview whatever the prompt was.

/// Time between clicking "generate" and the mock result appearing.
pub const GENERATION_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DemoState {
    #[default]
    Idle,
    Generating,
    ResultShown,
}

impl DemoState {
    pub fn is_generating(&self) -> bool {
        matches!(self, DemoState::Generating)
    }

    pub fn shows_result(&self) -> bool {
        matches!(self, DemoState::ResultShown)
    }

    /// Whether the generate button is enabled for `prompt`.
    pub fn can_trigger(&self, prompt: &str) -> bool {
        matches!(self, DemoState::Idle) && !prompt.trim().is_empty()
    }

    /// Start a generation. Returns the delay after which [`complete`]
    /// must be called, or `None` when the trigger was rejected.
    ///
    /// [`complete`]: DemoState::complete
    pub fn trigger(&mut self, prompt: &str) -> Option<u32> {
        if !self.can_trigger(prompt) {
            return None;
        }
        *self = DemoState::Generating;
        Some(GENERATION_DELAY_MS)
    }

    /// Timer callback. Returns `true` when the result was revealed.
    pub fn complete(&mut self) -> bool {
        if !self.is_generating() {
            return false;
        }
        *self = DemoState::ResultShown;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prompt_is_rejected() {
        let mut state = DemoState::Idle;
        assert_eq!(state.trigger(""), None);
        assert_eq!(state.trigger("   \n\t"), None);
        assert_eq!(state, DemoState::Idle);
    }

    #[test]
    fn test_complete_outside_generating_is_noop() {
        let mut state = DemoState::Idle;
        assert!(!state.complete());
        assert_eq!(state, DemoState::Idle);
    }

    #[test]
    fn test_result_is_terminal() {
        let mut state = DemoState::ResultShown;
        assert!(!state.can_trigger("another site"));
        assert_eq!(state.trigger("another site"), None);
        assert!(!state.complete());
        assert_eq!(state, DemoState::ResultShown);
    }
}
