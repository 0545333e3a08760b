// src/state.rs
use std::rc::Rc;

use yew::prelude::*;

use crate::convert::convert;
use crate::error::ConverterError;

/// Outcome of the last Convert click. Error and result are exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Idle,
    Error(String),
    Result(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConverterState {
    pub input: String,
    pub outcome: Outcome,
    /// Set when the last clipboard write was rejected; the result stays visible.
    pub copy_failed: bool,
    pub copied: bool,
    /// Epoch of the copy that last set `copied`; resets from older copies are ignored.
    pub copy_epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConverterAction {
    SetInput(String),
    Convert,
    CopySucceeded { epoch: u64 },
    CopyFailed,
    CopyReset { epoch: u64 },
}

impl ConverterState {
    pub fn output(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Result(url) => Some(url),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<String> {
        if self.copy_failed {
            return Some(ConverterError::ClipboardFailure.to_string());
        }
        match &self.outcome {
            Outcome::Error(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy"
        }
    }

    /// Applies one action. The copied flag only changes on copy actions.
    pub fn apply(&mut self, action: ConverterAction) {
        match action {
            ConverterAction::SetInput(text) => self.input = text,
            ConverterAction::Convert => {
                self.copy_failed = false;
                self.outcome = match convert(&self.input) {
                    Ok(url) => Outcome::Result(url),
                    Err(e) => Outcome::Error(e.to_string()),
                };
            }
            ConverterAction::CopySucceeded { epoch } => {
                self.copied = true;
                self.copy_epoch = epoch;
            }
            ConverterAction::CopyFailed => self.copy_failed = true,
            ConverterAction::CopyReset { epoch } => {
                if epoch == self.copy_epoch {
                    self.copied = false;
                }
            }
        }
    }
}

impl Reducible for ConverterState {
    type Action = ConverterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::Reducible;

    fn with_input(raw: &str) -> ConverterState {
        let mut s = ConverterState::default();
        s.apply(ConverterAction::SetInput(raw.to_string()));
        s
    }

    fn assert_exclusive(s: &ConverterState) {
        assert!(
            !(s.output().is_some() && s.error().is_some()),
            "both output and error set: {s:?}"
        );
    }

    #[test]
    fn starts_idle() {
        let s = ConverterState::default();
        assert_eq!(s.outcome, Outcome::Idle);
        assert_eq!(s.output(), None);
        assert_eq!(s.error(), None);
        assert_eq!(s.copy_label(), "Copy");
    }

    #[test]
    fn set_input_does_not_convert() {
        let s = with_input("https://github.com/alice/myproject");
        assert_eq!(s.outcome, Outcome::Idle);
    }

    #[test]
    fn convert_valid_input() {
        let mut s = with_input("https://github.com/alice/myproject.git");
        s.apply(ConverterAction::Convert);
        assert_eq!(s.output(), Some("https://alice.github.io/myproject"));
        assert_eq!(s.error(), None);
    }

    #[test]
    fn convert_invalid_input() {
        let mut s = with_input("not a url");
        s.apply(ConverterAction::Convert);
        assert_eq!(s.output(), None);
        assert_eq!(
            s.error().as_deref(),
            Some("Please enter a valid GitHub repository URL")
        );
    }

    #[test]
    fn convert_twice_is_stable() {
        let mut s = with_input("https://github.com/alice/myproject");
        s.apply(ConverterAction::Convert);
        let first = s.clone();
        s.apply(ConverterAction::Convert);
        assert_eq!(s, first);
        assert_eq!(s.error(), None);
    }

    #[test]
    fn error_and_output_never_coexist() {
        let mut s = ConverterState::default();
        let inputs = [
            "https://github.com/alice/myproject",
            "garbage",
            "http://github.com/bob/site.git",
            "",
        ];
        for raw in inputs {
            s.apply(ConverterAction::SetInput(raw.to_string()));
            s.apply(ConverterAction::Convert);
            assert_exclusive(&s);
        }
    }

    #[test]
    fn new_convert_clears_previous_error() {
        let mut s = with_input("nope");
        s.apply(ConverterAction::Convert);
        assert!(s.error().is_some());

        s.apply(ConverterAction::SetInput("https://github.com/a/b".to_string()));
        s.apply(ConverterAction::Convert);
        assert_eq!(s.error(), None);
        assert_eq!(s.output(), Some("https://a.github.io/b"));
    }

    #[test]
    fn copy_pulse_sets_and_clears() {
        let mut s = with_input("https://github.com/alice/myproject");
        s.apply(ConverterAction::Convert);

        s.apply(ConverterAction::CopySucceeded { epoch: 1 });
        assert!(s.copied);
        assert_eq!(s.copy_label(), "Copied!");

        s.apply(ConverterAction::CopyReset { epoch: 1 });
        assert!(!s.copied);
        assert_eq!(s.copy_label(), "Copy");
    }

    #[test]
    fn stale_reset_is_ignored() {
        let mut s = ConverterState::default();
        s.apply(ConverterAction::CopySucceeded { epoch: 1 });
        s.apply(ConverterAction::CopySucceeded { epoch: 2 });

        s.apply(ConverterAction::CopyReset { epoch: 1 });
        assert!(s.copied);

        s.apply(ConverterAction::CopyReset { epoch: 2 });
        assert!(!s.copied);
    }

    #[test]
    fn convert_leaves_copied_alone() {
        let mut s = with_input("https://github.com/alice/myproject");
        s.apply(ConverterAction::CopySucceeded { epoch: 3 });
        s.apply(ConverterAction::Convert);
        assert!(s.copied);
    }

    #[test]
    fn clipboard_failure_keeps_output() {
        let mut s = with_input("https://github.com/alice/myproject");
        s.apply(ConverterAction::Convert);
        s.apply(ConverterAction::CopyFailed);
        assert_eq!(s.error().as_deref(), Some("Failed to copy to clipboard"));
        assert_eq!(s.output(), Some("https://alice.github.io/myproject"));
        assert!(!s.copied);
    }

    #[test]
    fn convert_clears_clipboard_failure() {
        let mut s = with_input("https://github.com/alice/myproject");
        s.apply(ConverterAction::Convert);
        s.apply(ConverterAction::CopyFailed);
        s.apply(ConverterAction::Convert);
        assert_eq!(s.error(), None);
        assert_exclusive(&s);
    }

    #[test]
    fn reducer_matches_apply() {
        let s = Rc::new(with_input("https://github.com/alice/myproject"));
        let next = s.clone().reduce(ConverterAction::Convert);
        assert_eq!(next.output(), Some("https://alice.github.io/myproject"));
        // The previous state is left untouched.
        assert_eq!(s.outcome, Outcome::Idle);
    }
}
