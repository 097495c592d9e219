use std::collections::BTreeSet;
use std::sync::Arc;

use navshell::core::action::{Action, Effect, update};
use navshell::core::config::{self, CliOverrides, NavConfig, ResolvedConfig};
use navshell::core::resolver::{self, LoadOutcome, LoadRequest};
use navshell::core::route::RouteError;
use navshell::core::state::{App, ContentState};

// ============================================================================
// Helper Functions
// ============================================================================

/// Built-in route table with no simulated latency.
fn instant_config() -> ResolvedConfig {
    let cli = CliOverrides {
        load_delay_ms: Some(0),
        ..Default::default()
    };
    let mut resolved = config::resolve(&NavConfig::default(), &cli);
    resolved.default_route = None;
    resolved
}

fn new_app() -> App {
    let resolved = instant_config();
    let table = config::build_route_table(&resolved).expect("built-in routes are valid");
    App::from_config(Arc::new(table), &resolved)
}

fn expect_load(effect: Effect) -> LoadRequest {
    match effect {
        Effect::LoadView(request) => request,
        other => panic!("expected LoadView, got {other:?}"),
    }
}

async fn finish(request: LoadRequest) -> LoadOutcome {
    resolver::load(request).await
}

fn selected(app: &App) -> BTreeSet<String> {
    app.nav.selected_keys.clone()
}

fn keys(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

fn shown_title(app: &App) -> Option<String> {
    match &app.content {
        ContentState::Ready(resolved) => Some(resolved.view.title()),
        _ => None,
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_root_redirects_to_use_state() {
    let mut app = new_app();
    let request = expect_load(update(&mut app, Action::Navigate("/".to_string())));
    assert_eq!(request.path, "/use-state");
    assert_eq!(selected(&app), keys(&["/use-state"]));

    let outcome = finish(request).await;
    update(&mut app, Action::ViewLoaded(outcome));

    assert_eq!(app.nav.current_path.as_deref(), Some("/use-state"));
    assert_eq!(selected(&app), keys(&["/use-state"]));
    assert_eq!(shown_title(&app).as_deref(), Some("useState"));
}

#[tokio::test]
async fn test_rapid_navigation_last_request_wins() {
    let mut app = new_app();
    let context = expect_load(update(&mut app, Action::Navigate("/use-context".to_string())));
    let effect = expect_load(update(&mut app, Action::Navigate("/use-effect".to_string())));

    // Latest completes first, then the stale one lands
    let effect_done = finish(effect).await;
    let context_done = finish(context).await;
    update(&mut app, Action::ViewLoaded(effect_done));
    update(&mut app, Action::ViewLoaded(context_done));

    assert_eq!(shown_title(&app).as_deref(), Some("useEffect"));
    assert_eq!(selected(&app), keys(&["/use-effect"]));
}

#[tokio::test]
async fn test_rapid_navigation_stale_completion_first() {
    let mut app = new_app();
    let context = expect_load(update(&mut app, Action::Navigate("/use-context".to_string())));
    let effect = expect_load(update(&mut app, Action::Navigate("/use-effect".to_string())));

    update(&mut app, Action::ViewLoaded(finish(context).await));
    assert!(app.content.is_loading());
    assert_eq!(selected(&app), keys(&["/use-effect"]));

    update(&mut app, Action::ViewLoaded(finish(effect).await));
    assert_eq!(shown_title(&app).as_deref(), Some("useEffect"));
    assert_eq!(selected(&app), keys(&["/use-effect"]));

    // The superseded module was cached: revisiting needs no load
    let effect = update(&mut app, Action::Navigate("/use-context".to_string()));
    assert!(matches!(effect, Effect::None));
    assert_eq!(shown_title(&app).as_deref(), Some("useContext"));
}

#[tokio::test]
async fn test_every_registered_path_resolves_to_its_view() {
    let mut app = new_app();
    for (path, title) in [
        ("/use-state", "useState"),
        ("/use-effect", "useEffect"),
        ("/use-context", "useContext"),
    ] {
        if let Effect::LoadView(request) = update(&mut app, Action::Navigate(path.to_string())) {
            update(&mut app, Action::ViewLoaded(finish(request).await));
        }
        assert_eq!(app.nav.current_path.as_deref(), Some(path));
        assert_eq!(selected(&app), keys(&[path]));
        assert_eq!(shown_title(&app).as_deref(), Some(title));
    }
}

#[tokio::test]
async fn test_unknown_direct_entry_redirects() {
    let mut app = new_app();
    let request = expect_load(update(&mut app, Action::Navigate("/use-memo".to_string())));
    assert_eq!(request.path, "/use-state");
    update(&mut app, Action::ViewLoaded(finish(request).await));
    assert_eq!(app.nav.current_path.as_deref(), Some("/use-state"));
    assert!(app.status_message.is_empty());
}

#[tokio::test]
async fn test_cached_revisit_wins_over_load_in_flight() {
    let mut app = new_app();
    let state = expect_load(update(&mut app, Action::Navigate("/use-state".to_string())));
    update(&mut app, Action::ViewLoaded(finish(state).await));

    let effect = expect_load(update(&mut app, Action::Navigate("/use-effect".to_string())));
    // Back on a cached page before the load lands
    let cached = update(&mut app, Action::Navigate("/use-state".to_string()));
    assert!(matches!(cached, Effect::None));

    update(&mut app, Action::ViewLoaded(finish(effect).await));
    assert_eq!(shown_title(&app).as_deref(), Some("useState"));
    assert_eq!(app.nav.current_path.as_deref(), Some("/use-state"));
    assert_eq!(selected(&app), keys(&["/use-state"]));
}

#[tokio::test]
async fn test_toggle_while_loading_keeps_navigation() {
    let mut app = new_app();
    let request = expect_load(update(&mut app, Action::Navigate("/use-effect".to_string())));
    update(&mut app, Action::ToggleCollapse);
    update(&mut app, Action::ToggleCollapse);
    update(&mut app, Action::ToggleCollapse);

    assert!(app.nav.collapsed);
    assert_eq!(selected(&app), keys(&["/use-effect"]));

    update(&mut app, Action::ViewLoaded(finish(request).await));
    assert_eq!(shown_title(&app).as_deref(), Some("useEffect"));
    assert!(app.nav.collapsed);
}

#[tokio::test]
async fn test_view_keys_reach_mounted_page() {
    let mut app = new_app();
    let request = expect_load(update(&mut app, Action::Navigate("/use-state".to_string())));
    update(&mut app, Action::ViewLoaded(finish(request).await));

    update(&mut app, Action::ViewKey('+'));
    update(&mut app, Action::ViewKey('+'));

    let ContentState::Ready(resolved) = &app.content else {
        panic!("expected a mounted view");
    };
    assert!(resolved.view.body().iter().any(|l| l.text.contains("count: 2")));
}

#[tokio::test]
async fn test_remount_after_navigating_away_resets_page_state() {
    let mut app = new_app();
    for path in ["/use-state", "/use-effect"] {
        let request = expect_load(update(&mut app, Action::Navigate(path.to_string())));
        update(&mut app, Action::ViewLoaded(finish(request).await));
        if path == "/use-state" {
            update(&mut app, Action::ViewKey('+'));
        }
    }

    update(&mut app, Action::Back);
    let ContentState::Ready(resolved) = &app.content else {
        panic!("expected a mounted view");
    };
    assert_eq!(resolved.path, "/use-state");
    assert!(resolved.view.body().iter().any(|l| l.text.contains("count: 0")));
}

// ============================================================================
// Startup validation
// ============================================================================

#[test]
fn test_duplicate_configured_path_is_fatal() {
    let toml_str = r#"
[[routes]]
path = "/use-state"
page = "use-state"

[[routes]]
path = "/use-state"
page = "use-effect"
"#;
    let file: NavConfig = toml::from_str(toml_str).unwrap();
    let resolved = config::resolve(&file, &CliOverrides::default());
    assert_eq!(
        config::build_route_table(&resolved).unwrap_err(),
        RouteError::DuplicatePath("/use-state".to_string())
    );
}

#[test]
fn test_configured_default_route() {
    let toml_str = r#"
[general]
default_route = "/use-context"
"#;
    let file: NavConfig = toml::from_str(toml_str).unwrap();
    let mut resolved = config::resolve(&file, &CliOverrides::default());
    // Env can't override what this test is checking
    resolved.default_route = file.general.default_route.clone();
    let table = config::build_route_table(&resolved).unwrap();
    assert_eq!(table.default_entry().path, "/use-context");
    assert_eq!(table.resolve("/").entry().path, "/use-context");
}
