//! Data-fetch hook owning the generator session.
//!
//! `use_person_api` returns a copyable handle whose reactive accessors feed
//! the view; `generate` runs one fetch cycle against the configured provider.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::model::Person;
use crate::session::Session;

/// Handle over the session signal. `Copy`, so event handlers can capture it
/// without cloning ceremony.
#[derive(Clone, Copy)]
pub struct PersonApi {
    state: RwSignal<Session>,
    api_url: StoredValue<String>,
}

impl PersonApi {
    pub fn current(&self) -> Option<Person> {
        self.state.with(|s| s.current.clone())
    }

    pub fn history(&self) -> Vec<Person> {
        self.state.with(|s| s.history.clone())
    }

    /// Read the history by reference. Lookups that do not need an owned copy
    /// of every entry go through here rather than [`PersonApi::history`].
    pub fn with_history<R>(&self, f: impl FnOnce(&[Person]) -> R) -> R {
        self.state.with(|s| f(&s.history))
    }

    /// The history entry at `index`, if one exists.
    pub fn person_at(&self, index: usize) -> Option<Person> {
        self.with_history(|h| h.get(index).cloned())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    /// Trigger one fetch cycle. A trigger that arrives while a request is in
    /// flight is dropped; there is no cancellation or queueing.
    pub fn generate(self) {
        let started = self.state.try_update(|s| s.begin()).unwrap_or(false);
        if !started {
            return;
        }

        let url = self.api_url.get_value();
        spawn_local(async move {
            let result = api::fetch_person(&url).await;
            if let Err(message) = &result {
                web_sys::console::error_1(&format!("Person fetch failed: {}", message).into());
            }
            self.state.update(|s| s.finish(result));
        });
    }
}

/// Create the hook. When `auto_generate_on_load` is set, one fetch runs from
/// a mount effect.
pub fn use_person_api(config: &AppConfig) -> PersonApi {
    let hook = PersonApi {
        state: RwSignal::new(Session::default()),
        api_url: StoredValue::new(config.api_url.clone()),
    };

    if config.auto_generate_on_load {
        Effect::new(move |_| {
            hook.generate();
        });
    }

    hook
}
