//! # View Resolver
//!
//! Turns a route entry into a mounted view, loading its module on demand.
//!
//! ```text
//! request(entry)
//!   ├── module cached      → Ready(view)        (no suspension)
//!   ├── already loading    → Attached           (reuse the in-flight load)
//!   └── otherwise          → Load(request)      (caller spawns `load()`)
//!
//! complete(outcome)
//!   ├── outcome.path == pending.path → Ready(view) / Failed
//!   └── anything else                → Superseded (module still cached)
//! ```
//!
//! Only the most recent request is ever pending. Older loads keep running and
//! their modules are cached when they land, but they can never replace what the
//! latest navigation shows.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::core::route::RouteEntry;
use crate::core::view::{ResolvedView, ViewError, ViewFactory, ViewModule};

/// Deferred loads slower than this fail with `ViewError::Timeout`.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// The navigation currently waiting for its view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingResolve {
    pub path: String,
    pub nav_id: u64,
}

/// Everything a background task needs to load one module.
pub struct LoadRequest {
    pub path: String,
    pub factory: ViewFactory,
    pub timeout: Duration,
}

impl fmt::Debug for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadRequest")
            .field("path", &self.path)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Result of a background load, fed back through `complete()`.
pub struct LoadOutcome {
    pub path: String,
    pub result: Result<Arc<dyn ViewModule>, ViewError>,
}

impl fmt::Debug for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match &self.result {
            Ok(module) => format!("Ok({})", module.name()),
            Err(e) => format!("Err({e})"),
        };
        f.debug_struct("LoadOutcome")
            .field("path", &self.path)
            .field("result", &result)
            .finish()
    }
}

#[derive(Debug)]
pub enum ResolveStep {
    Ready(ResolvedView),
    Load(LoadRequest),
    Attached(PendingResolve),
}

#[derive(Debug)]
pub enum Completion {
    Ready(ResolvedView),
    Failed { path: String, error: ViewError },
    Superseded,
}

pub struct ViewResolver {
    cache: HashMap<String, Arc<dyn ViewModule>>,
    in_flight: HashSet<String>,
    pending: Option<PendingResolve>,
    next_nav_id: u64,
    load_timeout: Duration,
}

impl ViewResolver {
    pub fn new(load_timeout: Duration) -> Self {
        Self {
            cache: HashMap::new(),
            in_flight: HashSet::new(),
            pending: None,
            next_nav_id: 1,
            load_timeout,
        }
    }

    /// Start resolving `entry`. Supersedes whatever was pending before.
    pub fn request(&mut self, entry: &RouteEntry) -> ResolveStep {
        let nav_id = self.next_nav_id;
        self.next_nav_id += 1;

        if let Some(stale) = self.pending.take() {
            debug!(
                "Navigation #{} ({}) superseded by #{} ({})",
                stale.nav_id, stale.path, nav_id, entry.path
            );
        }

        if let Some(module) = self.cache.get(&entry.path) {
            debug!("Cache hit for {} (nav #{})", entry.path, nav_id);
            return ResolveStep::Ready(ResolvedView {
                path: entry.path.clone(),
                nav_id,
                view: module.mount(),
            });
        }

        let pending = PendingResolve {
            path: entry.path.clone(),
            nav_id,
        };
        self.pending = Some(pending.clone());

        if self.in_flight.contains(&entry.path) {
            debug!("Attaching nav #{} to in-flight load of {}", nav_id, entry.path);
            return ResolveStep::Attached(pending);
        }

        info!("Loading view for {} (nav #{})", entry.path, nav_id);
        self.in_flight.insert(entry.path.clone());
        ResolveStep::Load(LoadRequest {
            path: entry.path.clone(),
            factory: Arc::clone(&entry.factory),
            timeout: self.load_timeout,
        })
    }

    /// Accept a finished load. Only the pending navigation gets a view.
    pub fn complete(&mut self, outcome: LoadOutcome) -> Completion {
        let LoadOutcome { path, result } = outcome;
        self.in_flight.remove(&path);

        let is_pending = self.pending.as_ref().is_some_and(|p| p.path == path);

        match result {
            Ok(module) => {
                self.cache.insert(path.clone(), Arc::clone(&module));
                if !is_pending {
                    debug!("Discarding superseded load of {} (module cached)", path);
                    return Completion::Superseded;
                }
                let Some(pending) = self.pending.take() else {
                    return Completion::Superseded;
                };
                info!("View ready for {} (nav #{})", path, pending.nav_id);
                Completion::Ready(ResolvedView {
                    path,
                    nav_id: pending.nav_id,
                    view: module.mount(),
                })
            }
            Err(error) => {
                if !is_pending {
                    debug!("Discarding superseded failure for {}: {}", path, error);
                    return Completion::Superseded;
                }
                self.pending = None;
                warn!("View load failed for {}: {}", path, error);
                Completion::Failed { path, error }
            }
        }
    }

    pub fn pending(&self) -> Option<&PendingResolve> {
        self.pending.as_ref()
    }

    pub fn is_cached(&self, path: &str) -> bool {
        self.cache.contains_key(path)
    }

    pub fn is_loading(&self, path: &str) -> bool {
        self.in_flight.contains(path)
    }
}

impl Default for ViewResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LOAD_TIMEOUT)
    }
}

/// Run a deferred factory to completion, bounded by the request's timeout.
pub async fn load(request: LoadRequest) -> LoadOutcome {
    let LoadRequest {
        path,
        factory,
        timeout,
    } = request;
    let started = std::time::Instant::now();

    let result = match tokio::time::timeout(timeout, factory()).await {
        Ok(result) => result,
        Err(_) => Err(ViewError::Timeout {
            path: path.clone(),
            after: timeout,
        }),
    };

    debug!(
        "Load of {} finished in {}ms (ok={})",
        path,
        started.elapsed().as_millis(),
        result.is_ok()
    );
    LoadOutcome { path, result }
}
