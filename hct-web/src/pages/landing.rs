//! Landing Page - connected account, profile and token balance

use hct_shared::view_model::LandingModel;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ProfileCard;
use crate::components::profile::LandingState;
use crate::components::ui::{Alert, Card, CardContent, CardHeader, CardTitle};
use crate::services::ethereum::BrowserProvider;
use crate::state::session::{use_contract_config, use_session_context};

/// Build a landing model and start its connect → profile → balance chain.
/// Shared with the register page, which runs the same flow.
pub fn mount_landing_model() -> LandingState {
    let config = use_contract_config();
    let session_ctx = use_session_context();
    let model = RwSignal::new(LandingModel::<BrowserProvider>::new(&config));

    session_ctx.set_connecting();
    spawn_local(async move {
        let provider = BrowserProvider::detect(&config);
        let mut page = model.get_untracked();
        page.init(provider).await;
        session_ctx.set(page.session.clone());
        model.update(|m| m.adopt_loaded(page));
    });

    model
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let model = mount_landing_model();
    let loading = Memo::new(move |_| model.with(|m| m.loading));

    view! {
        {move || {
            if loading.get() {
                view! { <div class="loading">"Loading..."</div> }.into_any()
            } else {
                view! {
                    <div class="page">
                        <h1 class="page-title">"Welcome to Healthcare Token System"</h1>
                        <Alert title="Connected Account">
                            {move || model.with(|m| m.account_label())}
                        </Alert>
                        <div class="grid">
                            <ProfileCard model=model/>
                            <Card>
                                <CardHeader>
                                    <CardTitle>"Token Balance"</CardTitle>
                                </CardHeader>
                                <CardContent>
                                    <p class="balance">{move || model.with(|m| m.balance_label())}</p>
                                    <p class="muted">"Your current Healthcare Token balance"</p>
                                </CardContent>
                            </Card>
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}
