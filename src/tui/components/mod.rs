//! # TUI Components
//!
//! All UI components of the navigation shell.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `Header`: collapse trigger, current path, status
//! - `ContentPane`: loading placeholder, mounted view, or inline error
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state in `TuiState` and emit events:
//! - `SiderState` / `Sider`: menu cursor; emits `MenuEvent::Select(key)`
//! - `LocationPromptState` / `LocationPrompt`: typed path; emits `LocationEvent`
//!
//! Components never mutate navigation state themselves. They emit events,
//! the shell turns those into `Action`s, and `core::action::update` applies them.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── header.rs     (top bar with collapse trigger)
//! ├── sider.rs      (collapsible side menu)
//! ├── content.rs    (content region)
//! └── location.rs   (go-to-path overlay)
//! ```

pub mod content;
pub mod header;
pub mod location;
pub mod sider;

pub use content::ContentPane;
pub use header::Header;
pub use location::{LocationEvent, LocationPrompt, LocationPromptState};
pub use sider::{MenuEvent, Sider, SiderState};
