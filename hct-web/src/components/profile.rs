//! Profile card: registered details, or the registration form

use hct_shared::model::UserProfile;
use hct_shared::view_model::LandingModel;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ui::{Button, Card, CardContent, CardHeader, CardTitle, Checkbox, Input, Label};
use crate::services::ethereum::BrowserProvider;
use crate::utils::browser::alert;

pub type LandingState = RwSignal<LandingModel<BrowserProvider>>;

#[component]
pub fn ProfileCard(model: LandingState) -> impl IntoView {
    // Memoized so typing into the form does not rebuild it
    let profile = Memo::new(move |_| model.with(|m| m.profile.clone()));

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"User Profile"</CardTitle>
            </CardHeader>
            <CardContent>
                {move || match profile.get() {
                    Some(profile) => view! { <ProfileDetails profile=profile/> }.into_any(),
                    None => view! { <RegistrationFields model=model/> }.into_any(),
                }}
            </CardContent>
        </Card>
    }
}

#[component]
pub fn ProfileDetails(profile: UserProfile) -> impl IntoView {
    view! {
        <div class="details">
            <p><strong>"Name: "</strong>{profile.name.clone()}</p>
            <p><strong>"Age: "</strong>{profile.age.to_string()}</p>
            <p><strong>"Gender: "</strong>{profile.gender.clone()}</p>
            <p><strong>"Is Doctor: "</strong>{profile.role_label()}</p>
        </div>
    }
}

/// Name/age/gender/doctor inputs bound to the model's form, plus submit.
#[component]
pub fn RegistrationFields(model: LandingState) -> impl IntoView {
    let registering = RwSignal::new(false);

    let name = Signal::derive(move || model.with(|m| m.form.name.clone()));
    let age = Signal::derive(move || model.with(|m| m.form.age.clone()));
    let gender = Signal::derive(move || model.with(|m| m.form.gender.clone()));
    let is_doctor = Signal::derive(move || model.with(|m| m.form.is_doctor));

    let on_register = Callback::new(move |()| {
        let task = match model.with_untracked(|m| m.registration_task()) {
            Ok(task) => task,
            Err(notice) => {
                alert(&notice.message);
                return;
            }
        };
        registering.set(true);
        spawn_local(async move {
            let outcome = task.run().await;
            let notice = outcome.notice.clone();
            // the page may have been left while waiting
            model.try_update(|m| m.apply_registration(outcome));
            registering.set(false);
            alert(&notice.message);
        });
    });

    view! {
        <div class="form">
            <div class="field">
                <Label html_for="name">"Name"</Label>
                <Input
                    id="name"
                    value=name
                    on_input=Callback::new(move |v: String| model.update(|m| m.form.name = v))
                />
            </div>
            <div class="field">
                <Label html_for="age">"Age"</Label>
                <Input
                    id="age"
                    input_type="number"
                    value=age
                    on_input=Callback::new(move |v: String| model.update(|m| m.form.age = v))
                />
            </div>
            <div class="field">
                <Label html_for="gender">"Gender"</Label>
                <Input
                    id="gender"
                    value=gender
                    on_input=Callback::new(move |v: String| model.update(|m| m.form.gender = v))
                />
            </div>
            <div class="field field-inline">
                <Checkbox
                    id="isDoctor"
                    checked=is_doctor
                    on_change=Callback::new(move |v: bool| model.update(|m| m.form.is_doctor = v))
                />
                <Label html_for="isDoctor">"Is Doctor"</Label>
            </div>
            <Button on_click=on_register disabled=Signal::derive(move || registering.get())>
                {move || if registering.get() { "Registering..." } else { "Register" }}
            </Button>
        </div>
    }
}
