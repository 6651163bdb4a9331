//! Form and layout primitives
//!
//! Stateless wrappers around plain elements so pages share one look.

use leptos::prelude::*;

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="card">{children()}</div> }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card-header">{children()}</div> }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h2 class="card-title">{children()}</h2> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}

#[component]
pub fn Button(
    children: Children,
    on_click: Callback<()>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let is_disabled = move || disabled.is_some_and(|d| d.get());

    view! {
        <button
            class="btn btn-full"
            disabled=is_disabled
            on:click=move |_| {
                if !is_disabled() {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Input(
    #[prop(into)] id: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <input
            class="input"
            id=id
            type=input_type.unwrap_or_else(|| "text".to_string())
            placeholder=placeholder.unwrap_or_default()
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

#[component]
pub fn Checkbox(
    #[prop(into)] id: String,
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <input
            class="checkbox"
            id=id
            type="checkbox"
            prop:checked=move || checked.get()
            on:change=move |ev| on_change.run(event_target_checked(&ev))
        />
    }
}

#[component]
pub fn Label(#[prop(into)] html_for: String, children: Children) -> impl IntoView {
    view! { <label class="label" for=html_for>{children()}</label> }
}

/// Informational banner with a bold title line.
#[component]
pub fn Alert(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="alert" role="alert">
            <span class="alert-icon">"!"</span>
            <div>
                <h5 class="alert-title">{title}</h5>
                <div class="alert-description">{children()}</div>
            </div>
        </div>
    }
}
