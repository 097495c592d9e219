//! # useState page
//!
//! A counter whose initial value comes from a lazy initializer (run once per
//! mount, never on re-render), plus a nested record that is only ever replaced,
//! never mutated in place. Setting state to its current value skips the re-render.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use crate::core::view::{BodyLine, View, ViewModule};
use crate::pages::USE_STATE;

const TITLES: &[&str] = &[
    "Professional JavaScript for Web Developers",
    "JavaScript: The Definitive Guide",
    "You Don't Know JS",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherInfo {
    pub author: String,
    pub edition: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub name: String,
    pub other_info: OtherInfo,
}

impl Default for Book {
    fn default() -> Self {
        Self {
            name: TITLES[0].to_string(),
            other_info: OtherInfo {
                author: "Matt Frisbie".to_string(),
                edition: 4,
            },
        }
    }
}

/// Shared across mounts so the page can show how often the initializer ran.
#[derive(Default)]
pub struct UseStateModule {
    initializer_runs: Arc<AtomicUsize>,
}

impl UseStateModule {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewModule for UseStateModule {
    fn name(&self) -> &str {
        USE_STATE
    }

    fn mount(&self) -> Box<dyn View> {
        Box::new(UseStatePage::mount(Arc::clone(&self.initializer_runs)))
    }
}

fn initial_value(runs: &AtomicUsize) -> i64 {
    let total = runs.fetch_add(1, Ordering::SeqCst) + 1;
    debug!("use-state initializer executed ({total} total)");
    0
}

pub struct UseStatePage {
    count: i64,
    book: Book,
    title_index: usize,
    renders: u32,
    initializer_runs: Arc<AtomicUsize>,
}

impl UseStatePage {
    fn mount(initializer_runs: Arc<AtomicUsize>) -> Self {
        Self {
            count: initial_value(&initializer_runs),
            book: Book::default(),
            title_index: 0,
            renders: 1,
            initializer_runs,
        }
    }

    fn set_count(&mut self, next: i64) -> bool {
        if next == self.count {
            return false;
        }
        self.count = next;
        self.renders += 1;
        true
    }

    fn set_book(&mut self, next: Book) -> bool {
        if next == self.book {
            return false;
        }
        self.book = next;
        self.renders += 1;
        true
    }

    fn rename_book(&mut self) -> bool {
        self.title_index = (self.title_index + 1) % TITLES.len();
        let next = Book {
            name: TITLES[self.title_index].to_string(),
            ..self.book.clone()
        };
        self.set_book(next)
    }

    fn bump_edition(&mut self) -> bool {
        let next = Book {
            other_info: OtherInfo {
                edition: self.book.other_info.edition + 1,
                ..self.book.other_info.clone()
            },
            ..self.book.clone()
        };
        self.set_book(next)
    }
}

impl View for UseStatePage {
    fn title(&self) -> String {
        "useState".to_string()
    }

    fn body(&self) -> Vec<BodyLine> {
        vec![
            BodyLine::accent("Counter"),
            BodyLine::normal(format!("  count: {}", self.count)),
            BodyLine::normal(format!("  renders: {}", self.renders)),
            BodyLine::muted(format!(
                "  lazy initializer runs: {} (once per mount)",
                self.initializer_runs.load(Ordering::SeqCst)
            )),
            BodyLine::blank(),
            BodyLine::accent("Nested object"),
            BodyLine::normal(format!(
                "  \"{}\" by {}",
                self.book.name, self.book.other_info.author
            )),
            BodyLine::normal(format!("  (Edition {})", self.book.other_info.edition)),
        ]
    }

    fn hints(&self) -> &'static str {
        "+/- count  = set same value  n rename  v next edition"
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            '+' => self.set_count(self.count + 1),
            '-' => self.set_count(self.count - 1),
            '=' => self.set_count(self.count),
            'n' => self.rename_book(),
            'v' => self.bump_edition(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializer_runs_once_per_mount() {
        let module = UseStateModule::new();
        let mut page = module.mount();
        page.handle_key('+');
        page.handle_key('+');
        assert_eq!(module.initializer_runs.load(Ordering::SeqCst), 1);

        let _second = module.mount();
        assert_eq!(module.initializer_runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_counter_and_same_value_bailout() {
        let mut page = UseStatePage::mount(Arc::new(AtomicUsize::new(0)));
        assert!(page.handle_key('+'));
        assert!(page.handle_key('+'));
        assert!(page.handle_key('-'));
        assert_eq!(page.count, 1);
        assert_eq!(page.renders, 4);

        assert!(!page.handle_key('='));
        assert_eq!(page.renders, 4);
    }

    #[test]
    fn test_nested_update_replaces_only_changed_field() {
        let mut page = UseStatePage::mount(Arc::new(AtomicUsize::new(0)));
        let before = page.book.clone();

        page.handle_key('v');
        assert_eq!(page.book.other_info.edition, before.other_info.edition + 1);
        assert_eq!(page.book.other_info.author, before.other_info.author);
        assert_eq!(page.book.name, before.name);

        page.handle_key('n');
        assert_eq!(page.book.name, TITLES[1]);
        assert_eq!(page.book.other_info.edition, before.other_info.edition + 1);
    }

    #[test]
    fn test_body_mentions_count() {
        let mut page = UseStatePage::mount(Arc::new(AtomicUsize::new(0)));
        page.handle_key('+');
        let body = page.body();
        assert!(body.iter().any(|l| l.text.contains("count: 1")));
        assert!(!page.handle_key('x'));
    }
}
