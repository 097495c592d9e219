//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

use crate::core::route::{RouteEntry, RouteTable};
use crate::core::state::App;
use crate::core::view::{BodyLine, View, ViewError, ViewFactory, ViewFuture, ViewModule};

/// A module whose views just print their name.
pub struct StaticModule {
    name: String,
}

impl StaticModule {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl ViewModule for StaticModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn mount(&self) -> Box<dyn View> {
        Box::new(StaticView {
            name: self.name.clone(),
        })
    }
}

struct StaticView {
    name: String,
}

impl View for StaticView {
    fn title(&self) -> String {
        format!("Static {}", self.name)
    }

    fn body(&self) -> Vec<BodyLine> {
        vec![BodyLine::normal(format!("body of {}", self.name))]
    }
}

/// Factory that resolves immediately.
pub fn instant_factory(name: &str) -> ViewFactory {
    let name = name.to_string();
    Arc::new(move || -> ViewFuture {
        let module: Arc<dyn ViewModule> = Arc::new(StaticModule::new(&name));
        Box::pin(async move { Ok(module) })
    })
}

pub fn instant_entry(path: &str) -> RouteEntry {
    RouteEntry::new(path, path.trim_start_matches('/'), 'x', instant_factory(path))
}

/// Entry whose factory counts its invocations.
pub fn counting_entry(path: &str, calls: Arc<AtomicUsize>) -> RouteEntry {
    let inner = instant_factory(path);
    let factory: ViewFactory = Arc::new(move || -> ViewFuture {
        calls.fetch_add(1, Ordering::SeqCst);
        inner()
    });
    RouteEntry::new(path, path.trim_start_matches('/'), 'x', factory)
}

/// Entry whose factory always fails.
pub fn failing_entry(path: &str, message: &str) -> RouteEntry {
    let message = message.to_string();
    let factory: ViewFactory = Arc::new(move || -> ViewFuture {
        let message = message.clone();
        Box::pin(async move { Err(ViewError::Load(message)) })
    });
    RouteEntry::new(path, path.trim_start_matches('/'), 'x', factory)
}

/// Entry whose factory waits until the returned `Notify` fires.
pub fn gated_entry(path: &str) -> (RouteEntry, Arc<Notify>) {
    let gate = Arc::new(Notify::new());
    let waiter = Arc::clone(&gate);
    let name = path.to_string();
    let factory: ViewFactory = Arc::new(move || -> ViewFuture {
        let waiter = Arc::clone(&waiter);
        let module: Arc<dyn ViewModule> = Arc::new(StaticModule::new(&name));
        Box::pin(async move {
            waiter.notified().await;
            Ok(module)
        })
    });
    (
        RouteEntry::new(path, path.trim_start_matches('/'), 'x', factory),
        gate,
    )
}

/// The three-page table used throughout the tests.
pub fn sample_table() -> RouteTable {
    let entries = [
        ("/use-state", "useState", 'S'),
        ("/use-effect", "useEffect", 'E'),
        ("/use-context", "useContext", 'C'),
    ]
    .into_iter()
    .map(|(path, label, icon)| RouteEntry::new(path, label, icon, instant_factory(path)))
    .collect();
    RouteTable::new(entries).expect("sample table is valid")
}

/// Creates a test App over `sample_table()`.
pub fn test_app() -> App {
    App::new(Arc::new(sample_table()))
}
