//! Healthcare Token System - Leptos Frontend

use hct_shared::config::ContractConfig;
use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{Footer, Navbar};
use crate::pages::{AppointmentsPage, LandingPage, RegisterPage};
use crate::state::session::provide_session_context;

#[component]
pub fn App(config: ContractConfig) -> impl IntoView {
    provide_context(config);
    provide_session_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=LandingPage/>
                        <Route path=path!("/appointments") view=AppointmentsPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page-narrow">
            <div class="card not-found">
                <h1 class="page-title">"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
