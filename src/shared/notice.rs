//! Dismissable operator notifications attached to a view.

use std::collections::VecDeque;
use std::fmt;

/// Identifier used to dismiss a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub message: String,
}

/// Notices kept per view before the oldest is evicted.
pub const DEFAULT_MAX_NOTICES: usize = 20;

/// Ordered list of live notices, oldest first, bounded at `max_size`.
#[derive(Debug, Clone)]
pub struct Notices {
    items: VecDeque<Notice>,
    max_size: usize,
    next_id: u64,
}

impl Default for Notices {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_NOTICES)
    }
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_size: usize) -> Self {
        let max_size = max_size.max(1);
        Self {
            items: VecDeque::with_capacity(max_size),
            max_size,
            next_id: 0,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Success, message.into())
    }

    pub fn error(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Error, message.into())
    }

    /// Append a notice, evicting the oldest if at capacity.
    fn push(&mut self, level: NoticeLevel, message: String) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        if self.items.len() >= self.max_size {
            self.items.pop_front();
        }
        self.items.push_back(Notice { id, level, message });
        id
    }

    /// Remove one notice. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter().filter(|n| n.level == NoticeLevel::Error)
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.back()
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut notices = Notices::new();
        let a = notices.error("load failed");
        let b = notices.success("deposited");
        assert_eq!(notices.len(), 2);
        assert_eq!(notices.latest().unwrap().id, b);

        assert!(notices.dismiss(a));
        assert!(!notices.dismiss(a));
        assert_eq!(notices.errors().count(), 0);
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss_all() {
        let mut notices = Notices::new();
        let a = notices.error("x");
        notices.dismiss_all();
        let b = notices.error("y");
        assert_ne!(a, b);
        assert!(notices.dismiss(b));
        assert!(notices.is_empty());
    }

    #[test]
    fn test_oldest_notice_is_evicted_at_capacity() {
        let mut notices = Notices::with_capacity(3);
        let first = notices.error("a");
        notices.error("b");
        notices.error("c");
        let newest = notices.success("d");

        assert_eq!(notices.len(), 3);
        assert!(!notices.dismiss(first));
        assert_eq!(notices.latest().unwrap().id, newest);
        let messages: Vec<_> = notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_default_capacity_bounds_growth() {
        let mut notices = Notices::new();
        for i in 0..10_000 {
            notices.error(format!("refresh {} failed", i));
        }
        assert_eq!(notices.len(), DEFAULT_MAX_NOTICES);
        assert_eq!(notices.latest().unwrap().message, "refresh 9999 failed");
    }
}
