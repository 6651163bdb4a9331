//! Appointments Page - the account's appointments and, for patients, booking

use hct_shared::model::Appointment;
use hct_shared::time::format_timestamp;
use hct_shared::view_model::AppointmentsModel;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ui::{Button, Card, CardContent, CardHeader, CardTitle, Input, Label};
use crate::services::ethereum::BrowserProvider;
use crate::state::session::{use_contract_config, use_session_context};
use crate::utils::browser::{alert, utc_offset_minutes_at, utc_offset_minutes_for_local};

type AppointmentsState = RwSignal<AppointmentsModel<BrowserProvider>>;

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let config = use_contract_config();
    let session_ctx = use_session_context();
    let model: AppointmentsState = RwSignal::new(AppointmentsModel::new(&config));

    let appointments = Memo::new(move |_| model.with(|m| m.appointments.clone()));

    session_ctx.set_connecting();
    spawn_local(async move {
        let provider = BrowserProvider::detect(&config);
        let mut page = model.get_untracked();
        page.init(provider).await;
        session_ctx.set(page.session.clone());
        model.update(|m| m.adopt_loaded(page));
    });

    view! {
        <div class="page">
            <h1 class="page-title">"Appointments"</h1>
            <Card>
                <CardHeader>
                    <CardTitle>"Your Appointments"</CardTitle>
                </CardHeader>
                <CardContent>
                    {move || {
                        let appointments = appointments.get();
                        if appointments.is_empty() {
                            view! { <p class="muted">"No appointments found."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="appointment-list">
                                    {appointments
                                        .into_iter()
                                        .map(|appointment| view! { <AppointmentRow appointment=appointment/> })
                                        .collect_view()}
                                </ul>
                            }.into_any()
                        }
                    }}
                </CardContent>
            </Card>
            <Show when=move || model.with(|m| m.can_book())>
                <BookingCard model=model/>
            </Show>
        </div>
    }
}

#[component]
fn AppointmentRow(appointment: Appointment) -> impl IntoView {
    let time = format_timestamp(
        appointment.timestamp,
        utc_offset_minutes_at(appointment.timestamp),
    );

    view! {
        <li class="appointment">
            <p><strong>"Patient: "</strong>{appointment.patient.to_string()}</p>
            <p><strong>"Doctor: "</strong>{appointment.doctor.to_string()}</p>
            <p><strong>"Time: "</strong>{time}</p>
            <p><strong>"Status: "</strong>{appointment.status().to_string()}</p>
        </li>
    }
}

#[component]
fn BookingCard(model: AppointmentsState) -> impl IntoView {
    let booking = RwSignal::new(false);

    let doctor_address = Signal::derive(move || model.with(|m| m.form.doctor_address.clone()));
    let appointment_time = Signal::derive(move || model.with(|m| m.form.appointment_time.clone()));

    let on_book = Callback::new(move |()| {
        let task = model.with_untracked(|m| {
            m.booking_task(utc_offset_minutes_for_local(&m.form.appointment_time))
        });
        let task = match task {
            Ok(task) => task,
            Err(notice) => {
                alert(&notice.message);
                return;
            }
        };
        booking.set(true);
        spawn_local(async move {
            let outcome = task.run().await;
            let notice = outcome.notice.clone();
            // the page may have been left while waiting
            model.try_update(|m| m.apply_booking(outcome));
            booking.set(false);
            alert(&notice.message);
        });
    });

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Book New Appointment"</CardTitle>
            </CardHeader>
            <CardContent>
                <div class="form">
                    <div class="field">
                        <Label html_for="doctorAddress">"Doctor Address"</Label>
                        <Input
                            id="doctorAddress"
                            placeholder="0x..."
                            value=doctor_address
                            on_input=Callback::new(move |v: String| model.update(|m| m.form.doctor_address = v))
                        />
                    </div>
                    <div class="field">
                        <Label html_for="appointmentTime">"Appointment Time"</Label>
                        <Input
                            id="appointmentTime"
                            input_type="datetime-local"
                            value=appointment_time
                            on_input=Callback::new(move |v: String| model.update(|m| m.form.appointment_time = v))
                        />
                    </div>
                    <Button on_click=on_book disabled=Signal::derive(move || booking.get())>
                        {move || if booking.get() { "Booking..." } else { "Book Appointment" }}
                    </Button>
                </div>
            </CardContent>
        </Card>
    }
}
