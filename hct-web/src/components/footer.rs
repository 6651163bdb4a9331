use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-inner">
                <p>"© 2024 Healthcare Token System. All rights reserved."</p>
                <div class="footer-links">
                    <a href="#">"Privacy Policy"</a>
                    <a href="#">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}
