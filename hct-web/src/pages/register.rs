//! Register Page - standalone registration form

use leptos::prelude::*;

use crate::components::ProfileCard;
use crate::pages::landing::mount_landing_model;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let model = mount_landing_model();
    let loading = Memo::new(move |_| model.with(|m| m.loading));
    let connected = Memo::new(move |_| model.with(|m| m.session.is_connected()));

    view! {
        <div class="page page-narrow">
            <h1 class="page-title">"Register"</h1>
            {move || {
                if loading.get() {
                    view! { <div class="loading">"Loading..."</div> }.into_any()
                } else if !connected.get() {
                    view! {
                        <p class="muted">"Connect a wallet to register a profile."</p>
                    }.into_any()
                } else {
                    view! { <ProfileCard model=model/> }.into_any()
                }
            }}
        </div>
    }
}
