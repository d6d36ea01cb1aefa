//! Transient success/error message shown after a signup or unregister.
//!
//! The banner is either hidden or shows exactly one notice. Every notice gets a
//! fresh generation number; a hide timer only clears the notice it was started
//! for, so a stale timer can never hide a newer message.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    last_generation: u64,
}

impl NoticeBoard {
    /// Show a notice, replacing whatever is visible. Returns the generation to
    /// hand to [`NoticeBoard::expire`] once the timer elapses.
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.last_generation += 1;
        self.current = Some(Notice {
            kind,
            text: text.into(),
            generation: self.last_generation,
        });
        self.last_generation
    }

    /// Hide the notice if it is still the one shown for `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.current {
            Some(notice) if notice.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Class list for the message area: `success`, `error`, or `hidden`.
    pub fn css_class(&self) -> &'static str {
        self.current()
            .map(|n| n.kind.css_class())
            .unwrap_or("hidden")
    }

    pub fn text(&self) -> String {
        self.current().map(|n| n.text.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let board = NoticeBoard::default();
        assert!(board.current().is_none());
        assert_eq!(board.css_class(), "hidden");
        assert_eq!(board.text(), "");
    }

    #[test]
    fn showing_then_expiring_hides() {
        let mut board = NoticeBoard::default();
        let generation = board.show(NoticeKind::Success, "Signed up a@b.com for Chess Club");
        assert_eq!(board.css_class(), "success");
        assert_eq!(board.text(), "Signed up a@b.com for Chess Club");

        assert!(board.expire(generation));
        assert_eq!(board.css_class(), "hidden");
        assert!(!board.expire(generation));
    }

    #[test]
    fn newer_notice_replaces_and_survives_stale_timer() {
        let mut board = NoticeBoard::default();
        let first = board.show(NoticeKind::Success, "ok");
        let second = board.show(NoticeKind::Error, "Student already signed up");

        // only one notice, and it is the error
        assert_eq!(board.css_class(), "error");
        assert_eq!(board.current().unwrap().generation, second);

        assert!(!board.expire(first));
        assert_eq!(board.css_class(), "error");

        assert!(board.expire(second));
        assert!(board.current().is_none());
    }
}
