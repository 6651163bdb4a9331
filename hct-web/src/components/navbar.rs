//! Navigation Bar Component

use hct_shared::utils::truncate_address;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let session_ctx = use_session_context();

    let account = move || {
        session_ctx
            .account()
            .map(|address| truncate_address(&address.to_string()))
    };

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/">
                    <span class="nav-title">"Healthcare Token System"</span>
                </A>
                <div class="nav-links">
                    <A href="/"><span class="nav-link">"Home"</span></A>
                    <A href="/appointments"><span class="nav-link">"Appointments"</span></A>
                    <A href="/register"><span class="nav-link">"Register"</span></A>
                    {move || account().map(|short| view! { <span class="nav-account">{short}</span> })}
                </div>
            </div>
        </nav>
    }
}
