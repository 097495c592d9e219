//! # useEffect page
//!
//! An effect keyed on a single dependency. Every state change re-renders the
//! page; the effect only re-runs (cleanup, then setup) when its dependency
//! changed since the last run.

use std::collections::VecDeque;

use chrono::Local;

use crate::core::view::{BodyLine, Tone, View, ViewModule};
use crate::pages::USE_EFFECT;

const LOG_CAPACITY: usize = 8;

pub struct UseEffectModule;

impl ViewModule for UseEffectModule {
    fn name(&self) -> &str {
        USE_EFFECT
    }

    fn mount(&self) -> Box<dyn View> {
        Box::new(UseEffectPage::mount())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EffectEvent {
    Setup,
    Cleanup,
}

pub struct UseEffectPage {
    count: u32,
    /// State that is not a dependency of the effect.
    unrelated: u32,
    renders: u32,
    /// Dependency value seen by the last effect run.
    last_deps: Option<u32>,
    effect_runs: u32,
    log: VecDeque<(String, EffectEvent, u32)>,
}

impl UseEffectPage {
    fn mount() -> Self {
        let mut page = Self {
            count: 0,
            unrelated: 0,
            renders: 0,
            last_deps: None,
            effect_runs: 0,
            log: VecDeque::with_capacity(LOG_CAPACITY),
        };
        page.render();
        page
    }

    fn render(&mut self) {
        self.renders += 1;
        if self.last_deps == Some(self.count) {
            return;
        }
        if let Some(previous) = self.last_deps {
            self.record(EffectEvent::Cleanup, previous);
        }
        self.record(EffectEvent::Setup, self.count);
        self.last_deps = Some(self.count);
        self.effect_runs += 1;
    }

    fn record(&mut self, event: EffectEvent, deps: u32) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        let stamp = Local::now().format("%H:%M:%S").to_string();
        self.log.push_back((stamp, event, deps));
    }
}

impl View for UseEffectPage {
    fn title(&self) -> String {
        "useEffect".to_string()
    }

    fn body(&self) -> Vec<BodyLine> {
        let mut lines = vec![
            BodyLine::accent("State"),
            BodyLine::normal(format!("  count (dependency): {}", self.count)),
            BodyLine::normal(format!("  other state: {}", self.unrelated)),
            BodyLine::normal(format!("  renders: {}", self.renders)),
            BodyLine::normal(format!("  effect runs: {}", self.effect_runs)),
            BodyLine::blank(),
            BodyLine::accent("Effect log"),
        ];
        lines.extend(self.log.iter().map(|(stamp, event, deps)| {
            let (verb, tone) = match event {
                EffectEvent::Setup => ("setup", Tone::Normal),
                EffectEvent::Cleanup => ("cleanup", Tone::Muted),
            };
            BodyLine::new(format!("  {stamp}  {verb:<7} count={deps}"), tone)
        }));
        lines
    }

    fn hints(&self) -> &'static str {
        "+ change dependency  o change other state  r re-render"
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            '+' => self.count += 1,
            'o' => self.unrelated += 1,
            'r' => {}
            _ => return false,
        }
        self.render();
        true
    }
}
