use leptos::prelude::*;

use crate::components::history_sidebar::HistorySidebar;
use crate::components::profile_card::ProfileCard;
use crate::config::AppConfig;
use crate::model::Person;
use crate::person_api::use_person_api;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = use_person_api(&config);

    // Local to the view: which history entry, if any, overrides the display.
    let (selected, set_selected) = signal(None::<usize>);

    let selected_person = move || -> Option<Person> {
        selected.get().and_then(|index| api.person_at(index))
    };

    // The profile shown is the selected history entry, else the latest fetch.
    let display_person = move || selected_person().or_else(|| api.current());

    let generate_new = move |_| {
        set_selected.set(None);
        api.generate();
    };

    view! {
        <div class="app-layout">
            <HistorySidebar
                history=Signal::derive(move || api.history())
                selected=selected
                on_select=Callback::new(move |index| set_selected.set(Some(index)))
            />

            <main class="content">
                <div class="content-inner">
                    <h1 class="app-title">"Random Person Generator"</h1>

                    <button
                        class="btn btn-primary generate-btn"
                        on:click=generate_new
                        disabled=move || api.loading()
                    >
                        {move || if api.loading() { "Generating..." } else { "Generate New Person" }}
                    </button>

                    {move || {
                        selected_person().map(|person| view! {
                            <div class="viewing-chip-row">
                                <span class="viewing-chip">
                                    {format!("Viewing history: {}", person.name)}
                                </span>
                            </div>
                        })
                    }}

                    {move || {
                        api.error().map(|message| view! {
                            <div class="error-banner">
                                <p>{message}</p>
                            </div>
                        })
                    }}

                    {move || {
                        display_person().map(|person| view! {
                            <ProfileCard person=person />
                        })
                    }}
                </div>
            </main>
        </div>
    }
}
