//! # Pages
//!
//! Built-in demonstration pages and the catalogue that maps a page name to a
//! deferred factory. Each factory simulates a lazily fetched module: it sleeps
//! for the configured load delay, then hands back the page's `ViewModule`.
//!
//! - `use-state`: counter with a lazy initializer, immutable nested record updates
//! - `use-effect`: dependency-keyed effect with setup/cleanup log
//! - `use-context`: provider/consumer re-render behaviour, with memoization

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::RouteConfig;
use crate::core::view::{ViewFactory, ViewFuture, ViewModule};

pub mod use_context;
pub mod use_effect;
pub mod use_state;

pub const USE_STATE: &str = "use-state";
pub const USE_EFFECT: &str = "use-effect";
pub const USE_CONTEXT: &str = "use-context";

/// Names accepted in `[[routes]] page = "..."`.
pub const PAGE_NAMES: &[&str] = &[USE_STATE, USE_EFFECT, USE_CONTEXT];

/// Deferred factory for a catalogue page, or `None` if the name is unknown.
pub fn page_factory(page: &str, delay: Duration) -> Option<ViewFactory> {
    match page {
        USE_STATE => Some(deferred(delay, use_state::UseStateModule::new)),
        USE_EFFECT => Some(deferred(delay, || use_effect::UseEffectModule)),
        USE_CONTEXT => Some(deferred(delay, || use_context::UseContextModule)),
        _ => None,
    }
}

/// The route list used when the config file declares none.
pub fn builtin_routes() -> Vec<RouteConfig> {
    [
        ("/use-state", "useState", "S", USE_STATE),
        ("/use-effect", "useEffect", "E", USE_EFFECT),
        ("/use-context", "useContext", "C", USE_CONTEXT),
    ]
    .into_iter()
    .map(|(path, label, icon, page)| RouteConfig {
        path: path.to_string(),
        key: Some(path.to_string()),
        label: Some(label.to_string()),
        icon: Some(icon.to_string()),
        page: page.to_string(),
    })
    .collect()
}

fn deferred<M, F>(delay: Duration, make: F) -> ViewFactory
where
    M: ViewModule + 'static,
    F: Fn() -> M + Send + Sync + 'static,
{
    let make = Arc::new(make);
    Arc::new(move || -> ViewFuture {
        let make = Arc::clone(&make);
        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(Arc::new(make()) as Arc<dyn ViewModule>)
        })
    })
}
