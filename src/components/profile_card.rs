//! Main panel showing the active profile.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::model::{format_birthday, Person};

#[component]
pub fn ProfileCard(person: Person) -> impl IntoView {
    let birthday = format_birthday(&person.birthday);

    view! {
        <div class="profile-card">
            <style>{include_str!("profile_card.css")}</style>
            <div class="profile-body">
                <div class="profile-portrait">
                    <Avatar person=person.clone() />
                </div>
                <div class="profile-details">
                    <h2 class="profile-name">{person.name.clone()}</h2>
                    <div class="profile-grid">
                        <div class="profile-field">
                            <p class="field-label">"Email"</p>
                            <p class="field-value field-breakable">{person.email.clone()}</p>
                        </div>
                        <div class="profile-field">
                            <p class="field-label">"Phone"</p>
                            <p class="field-value">{person.phone.clone()}</p>
                        </div>
                        <div class="profile-field">
                            <p class="field-label">"Birthday"</p>
                            <p class="field-value">{birthday}</p>
                        </div>
                        <div class="profile-field">
                            <p class="field-label">"Password"</p>
                            <p class="field-value field-mono">{person.password.clone()}</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
