//! # Views
//!
//! The rendering boundary between the navigation core and whatever draws it.
//!
//! ```text
//! ViewFactory ──(deferred, async)──▶ ViewModule ──mount()──▶ Box<dyn View>
//!   "lazy import"                      "loaded code"            "mounted page"
//! ```
//!
//! A factory is called at most once per successful load; the resulting module is
//! cached by the resolver. Every navigation mounts a fresh `View` from the module.
//! Views describe their body as plain styled lines so the core never depends on
//! a particular UI toolkit.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

/// Errors produced while acquiring a view module.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    /// The deferred load itself failed.
    Load(String),
    /// The deferred load did not finish in time.
    Timeout { path: String, after: Duration },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Load(msg) => write!(f, "failed to load view: {msg}"),
            ViewError::Timeout { path, after } => {
                write!(f, "loading {path} timed out after {}ms", after.as_millis())
            }
        }
    }
}

impl std::error::Error for ViewError {}

/// Visual emphasis of a body line. The adapter maps tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Accent,
    Muted,
}

/// One line of a view body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyLine {
    pub text: String,
    pub tone: Tone,
}

impl BodyLine {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Normal)
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Accent)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Muted)
    }

    pub fn blank() -> Self {
        Self::new("", Tone::Normal)
    }
}

/// A mounted page. Lives in the content region until the next navigation.
pub trait View: Send {
    /// Heading shown above the body.
    fn title(&self) -> String;

    /// Current body, recomputed every frame.
    fn body(&self) -> Vec<BodyLine>;

    /// Key legend shown at the bottom of the content region.
    fn hints(&self) -> &'static str {
        ""
    }

    /// Handle a typed character. Returns true if the view changed.
    fn handle_key(&mut self, _key: char) -> bool {
        false
    }
}

/// Loaded view code. Cheap to share, mounts any number of view instances.
pub trait ViewModule: Send + Sync {
    fn name(&self) -> &str;

    fn mount(&self) -> Box<dyn View>;
}

/// The future a deferred factory returns.
pub type ViewFuture = BoxFuture<'static, Result<Arc<dyn ViewModule>, ViewError>>;

/// Deferred producer of a view module.
pub type ViewFactory = Arc<dyn Fn() -> ViewFuture + Send + Sync>;

/// A view mounted for a specific navigation.
pub struct ResolvedView {
    pub path: String,
    /// Id of the navigation that produced this view.
    pub nav_id: u64,
    pub view: Box<dyn View>,
}

impl fmt::Debug for ResolvedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedView")
            .field("path", &self.path)
            .field("nav_id", &self.nav_id)
            .field("title", &self.view.title())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_error_display() {
        let err = ViewError::Load("chunk missing".to_string());
        assert_eq!(err.to_string(), "failed to load view: chunk missing");

        let err = ViewError::Timeout {
            path: "/use-state".to_string(),
            after: Duration::from_millis(1500),
        };
        assert_eq!(err.to_string(), "loading /use-state timed out after 1500ms");
    }

    #[test]
    fn test_body_line_constructors() {
        assert_eq!(BodyLine::accent("hi").tone, Tone::Accent);
        assert_eq!(BodyLine::muted("hi").tone, Tone::Muted);
        assert_eq!(BodyLine::blank().text, "");
    }
}
