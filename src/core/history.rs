//! # History
//!
//! Browser-style back/forward stack of resolved paths. Pushing truncates any
//! forward entries; moving through it never pushes.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new location. Re-pushing the current location is a no-op.
    pub fn push(&mut self, path: &str) {
        if self.current() == Some(path) {
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(path.to_string());
        self.index = self.entries.len() - 1;
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn back(&mut self) -> Option<String> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        self.current().map(str::to_string)
    }

    pub fn forward(&mut self) -> Option<String> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        self.current().map(str::to_string)
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_cannot_move() {
        let mut history = History::new();
        assert!(history.current().is_none());
        assert!(history.back().is_none());
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = History::new();
        history.push("/a");
        history.push("/b");
        history.push("/c");

        assert_eq!(history.back().as_deref(), Some("/b"));
        assert_eq!(history.back().as_deref(), Some("/a"));
        assert!(history.back().is_none());
        assert_eq!(history.forward().as_deref(), Some("/b"));
        assert_eq!(history.current(), Some("/b"));
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = History::new();
        history.push("/a");
        history.push("/b");
        history.push("/c");
        history.back();
        history.back();

        history.push("/d");
        assert_eq!(history.len(), 2);
        assert!(!history.can_go_forward());
        assert_eq!(history.back().as_deref(), Some("/a"));
    }

    #[test]
    fn test_repeated_push_is_collapsed() {
        let mut history = History::new();
        history.push("/a");
        history.push("/a");
        assert_eq!(history.len(), 1);
    }
}
