use leptos::prelude::*;

use crate::model::Person;

/// Circular avatar: the profile image when one exists, otherwise the first
/// character of the person's name. Used at thumbnail size in the history
/// sidebar and full size in the profile card.
#[component]
pub fn Avatar(person: Person, #[prop(optional)] small: bool) -> impl IntoView {
    let size_class = if small { "avatar avatar-small" } else { "avatar avatar-large" };

    match person.image.clone() {
        Some(src) => view! {
            <img
                class=size_class
                src=src
                alt=format!("{}'s picture", person.name)
            />
        }
        .into_any(),
        None => view! {
            <div class=format!("{} avatar-fallback", size_class)>{person.initial()}</div>
        }
        .into_any(),
    }
}
