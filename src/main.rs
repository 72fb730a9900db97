mod api;
mod app;
mod components;
mod config;
mod model;
mod person_api;
mod session;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

fn main() {
    leptos::mount::mount_to_body(|| view! { <App config=AppConfig::default() /> });
}
