//! # Route Table
//!
//! Static, ordered list of navigable entries. Built once at startup from
//! configuration, validated eagerly, and never mutated afterwards.
//!
//! Table order is menu order. The root path `/` is never an entry: it (and any
//! unknown path) resolves to the default entry, which is the first entry unless
//! configuration names another.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::core::view::ViewFactory;

/// The path every unknown location redirects away from.
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No entry is registered under this path.
    NotFound(String),
    /// Two entries share a path.
    DuplicatePath(String),
    /// Path is not a URL-safe absolute segment.
    InvalidPath(String),
    /// Entry key differs from its path.
    KeyMismatch { path: String, key: String },
    /// Entry names a page the catalogue doesn't know.
    UnknownPage { path: String, page: String },
    /// Configured default route is not registered.
    UnknownDefault(String),
    /// The table has no entries.
    Empty,
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::NotFound(path) => write!(f, "no route registered for {path}"),
            RouteError::DuplicatePath(path) => write!(f, "duplicate route path: {path}"),
            RouteError::InvalidPath(path) => write!(f, "invalid route path: {path:?}"),
            RouteError::KeyMismatch { path, key } => {
                write!(f, "route key {key:?} must equal its path {path:?}")
            }
            RouteError::UnknownPage { path, page } => {
                write!(f, "route {path} names unknown page {page:?}")
            }
            RouteError::UnknownDefault(path) => {
                write!(f, "default route {path} is not registered")
            }
            RouteError::Empty => write!(f, "route table is empty"),
        }
    }
}

impl std::error::Error for RouteError {}

/// A path mapped to a lazily loaded view.
#[derive(Clone)]
pub struct RouteEntry {
    pub path: String,
    /// Stable identity for the menu. Always equal to `path`.
    pub key: String,
    pub label: String,
    /// Glyph shown when the side panel is collapsed.
    pub icon: char,
    pub factory: ViewFactory,
}

impl RouteEntry {
    pub fn new(
        path: impl Into<String>,
        label: impl Into<String>,
        icon: char,
        factory: ViewFactory,
    ) -> Self {
        let path = path.into();
        Self {
            key: path.clone(),
            path,
            label: label.into(),
            icon,
            factory,
        }
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("key", &self.key)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// Outcome of resolving a requested location against the table.
#[derive(Debug, Clone, Copy)]
pub enum Resolution<'a> {
    Matched(&'a RouteEntry),
    /// The requested location was unknown (or root); use the default entry.
    Redirected(&'a RouteEntry),
}

impl<'a> Resolution<'a> {
    pub fn entry(&self) -> &'a RouteEntry {
        match self {
            Resolution::Matched(entry) | Resolution::Redirected(entry) => entry,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Resolution::Redirected(_))
    }
}

#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    default_index: usize,
}

impl RouteTable {
    /// Build a table whose default entry is the first one.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        Self::with_default(entries, None)
    }

    /// Build a table, validating every entry and the default path.
    pub fn with_default(
        entries: Vec<RouteEntry>,
        default_path: Option<&str>,
    ) -> Result<Self, RouteError> {
        if entries.is_empty() {
            return Err(RouteError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_valid_path(&entry.path) {
                return Err(RouteError::InvalidPath(entry.path.clone()));
            }
            if entry.key != entry.path {
                return Err(RouteError::KeyMismatch {
                    path: entry.path.clone(),
                    key: entry.key.clone(),
                });
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(RouteError::DuplicatePath(entry.path.clone()));
            }
        }

        let default_index = match default_path {
            None => 0,
            Some(path) => entries
                .iter()
                .position(|e| e.path == path)
                .ok_or_else(|| RouteError::UnknownDefault(path.to_string()))?,
        };

        debug!(
            "Route table built: {} entries, default {}",
            entries.len(),
            entries[default_index].path
        );

        Ok(Self {
            entries,
            default_index,
        })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn default_entry(&self) -> &RouteEntry {
        &self.entries[self.default_index]
    }

    /// Exact lookup of a registered path.
    pub fn lookup(&self, path: &str) -> Result<&RouteEntry, RouteError> {
        let normalized = normalize_path(path);
        self.entries
            .iter()
            .find(|e| e.path == normalized)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }

    /// Lookup with the fallback rule applied: unknown locations go to the default entry.
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        match self.lookup(path) {
            Ok(entry) => Resolution::Matched(entry),
            Err(_) => Resolution::Redirected(self.default_entry()),
        }
    }
}

/// Strip whitespace, query, fragment, and a trailing slash from a location.
pub fn normalize_path(path: &str) -> &str {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// An entry path is `/` followed by URL-safe segments, none of them empty.
pub fn is_valid_path(path: &str) -> bool {
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    !rest.is_empty()
        && rest.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
        })
}
