//! # Navigation Core
//!
//! Route table, view resolution, and navigation state for the shell.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌──────────────────────────────┐
//!                    │             CORE             │
//!                    │                              │
//!                    │  • RouteTable  (static)      │
//!                    │  • ViewResolver (lazy, LRW)  │
//!                    │  • NavigationState + History │
//!                    │  • selection::sync           │
//!                    │  • Action → update() → Effect│
//!                    │                              │
//!                    │  No terminal. No rendering.  │
//!                    └──────────────┬───────────────┘
//!                                   │
//!                            ┌──────▼─────┐
//!                            │    TUI     │
//!                            │  Adapter   │
//!                            │ (ratatui)  │
//!                            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: `RouteTable` and `RouteEntry`, with the redirect-to-default rule
//! - [`view`]: the rendering boundary (`View`, `ViewModule`, `ViewFactory`)
//! - [`resolver`]: module cache and last-request-wins view resolution
//! - [`navigation`]: `NavigationState`, the only mutable entity
//! - [`selection`]: derives the highlighted menu key from the current path
//! - [`history`]: back/forward stack
//! - [`state`]: the `App` struct, all core state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: layered configuration and route table construction

pub mod action;
pub mod config;
pub mod history;
pub mod navigation;
pub mod resolver;
pub mod route;
pub mod selection;
pub mod state;
pub mod view;
