//! Sidebar listing every profile generated this session.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::model::Person;

/// History list. Rows are keyed by position (profiles have no identity of
/// their own); clicking a row reports its index via `on_select`.
#[component]
pub fn HistorySidebar(
    /// All profiles generated this session, oldest first.
    history: Signal<Vec<Person>>,
    /// Index of the currently selected entry, if any.
    selected: ReadSignal<Option<usize>>,
    /// Called with the index of a clicked entry.
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <aside class="history-sidebar">
            <style>{include_str!("history_sidebar.css")}</style>
            <h2 class="history-title">"History"</h2>

            {move || {
                let entries = history.get();
                if entries.is_empty() {
                    view! { <p class="history-empty">"No history yet"</p> }.into_any()
                } else {
                    view! {
                        <div class="history-list">
                            <For
                                each={move || history.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(index, _)| *index
                                children=move |(index, person)| {
                                    let row_class = move || {
                                        if selected.get() == Some(index) {
                                            "history-item history-item-selected"
                                        } else {
                                            "history-item"
                                        }
                                    };
                                    view! {
                                        <div class=row_class on:click=move |_| on_select.run(index)>
                                            <Avatar person=person.clone() small=true />
                                            <div class="history-item-text">
                                                <p class="history-name">{person.name.clone()}</p>
                                                <p class="history-email">{person.email.clone()}</p>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </aside>
    }
}
