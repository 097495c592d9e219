//! # useContext page
//!
//! A provider holds a book list and a counter. The child consumes the list
//! only. Without memoization the child re-renders with every provider render;
//! with it, the child re-renders only when the list itself changes.

use crate::core::view::{BodyLine, View, ViewModule};
use crate::pages::USE_CONTEXT;

pub struct UseContextModule;

impl ViewModule for UseContextModule {
    fn name(&self) -> &str {
        USE_CONTEXT
    }

    fn mount(&self) -> Box<dyn View> {
        Box::new(UseContextPage::mount())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BookItem {
    name: &'static str,
    price: u32,
}

const CATALOGUE: &[BookItem] = &[
    BookItem {
        name: "Professional JavaScript for Web Developers",
        price: 17,
    },
    BookItem {
        name: "JavaScript: The Definitive Guide",
        price: 18,
    },
    BookItem {
        name: "You Don't Know JS",
        price: 34,
    },
    BookItem {
        name: "Understanding ECMAScript 6",
        price: 28,
    },
    BookItem {
        name: "Eloquent JavaScript",
        price: 21,
    },
    BookItem {
        name: "JavaScript Patterns",
        price: 25,
    },
];

/// Value published by the provider.
struct BookContext {
    list: Vec<BookItem>,
    /// Bumped whenever `list` is replaced; stands in for reference identity.
    list_version: u32,
    count: u32,
}

pub struct UseContextPage {
    context: BookContext,
    memo: bool,
    parent_renders: u32,
    child_renders: u32,
    /// List version the child last rendered with.
    child_seen_version: Option<u32>,
}

impl UseContextPage {
    fn mount() -> Self {
        let mut page = Self {
            context: BookContext {
                list: CATALOGUE[..4].to_vec(),
                list_version: 0,
                count: 0,
            },
            memo: false,
            parent_renders: 0,
            child_renders: 0,
            child_seen_version: None,
        };
        page.render();
        page
    }

    fn render(&mut self) {
        self.parent_renders += 1;
        let list_changed = self.child_seen_version != Some(self.context.list_version);
        if !self.memo || list_changed {
            self.child_renders += 1;
            self.child_seen_version = Some(self.context.list_version);
        }
    }

    fn add_book(&mut self) -> bool {
        let Some(next) = CATALOGUE.get(self.context.list.len()) else {
            return false;
        };
        let mut list = self.context.list.clone();
        list.push(next.clone());
        self.context.list = list;
        self.context.list_version += 1;
        true
    }
}

impl View for UseContextPage {
    fn title(&self) -> String {
        "useContext".to_string()
    }

    fn body(&self) -> Vec<BodyLine> {
        let mut lines = vec![
            BodyLine::accent("Provider"),
            BodyLine::normal(format!("  count: {}", self.context.count)),
            BodyLine::normal(format!("  provider renders: {}", self.parent_renders)),
            BodyLine::normal(format!(
                "  child memoized: {}",
                if self.memo { "yes" } else { "no" }
            )),
            BodyLine::blank(),
            BodyLine::accent(format!("Child (renders: {})", self.child_renders)),
        ];
        lines.extend(
            self.context
                .list
                .iter()
                .map(|book| BodyLine::normal(format!("  {:<44} ${}", book.name, book.price))),
        );
        lines
    }

    fn hints(&self) -> &'static str {
        "+ bump count  a add book  m toggle memo"
    }

    fn handle_key(&mut self, key: char) -> bool {
        let changed = match key {
            '+' => {
                self.context.count += 1;
                true
            }
            'a' => self.add_book(),
            'm' => {
                self.memo = !self.memo;
                true
            }
            _ => false,
        };
        if changed {
            self.render();
        }
        changed
    }
}
