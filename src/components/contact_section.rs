use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::config;
use crate::widgets::draft::LeadFormDraft;
use crate::widgets::state::Intent;
use crate::widgets::submit::{LeadClient, SubmissionGate, SubmissionStatus};

const SUCCESS_BANNER_MS: u32 = 5_000;

/// Inline contact form used on the landing and contact pages.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let draft = use_state(LeadFormDraft::default);
    let status = use_state(|| SubmissionStatus::Idle);
    // Shared with the request future, so a second click before the next
    // render still sees the request in flight.
    let gate = use_mut_ref(SubmissionGate::default);

    {
        let setter = status.clone();
        let gate = gate.clone();
        use_effect_with_deps(
            move |current| {
                let banner = (*current == SubmissionStatus::Succeeded).then(|| {
                    Timeout::new(SUCCESS_BANNER_MS, move || {
                        gate.borrow_mut().banner_expired();
                        setter.set(gate.borrow().status());
                    })
                });
                move || drop(banner)
            },
            *status,
        );
    }

    let on_intent = {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |intent: Intent| match intent {
            Intent::UpdateField(field, value) => {
                let mut next = (*draft).clone();
                next.set_field(field, value);
                draft.set(next);
            }
            Intent::ToggleService(service) => {
                let mut next = (*draft).clone();
                next.toggle_service(service);
                draft.set(next);
            }
            Intent::Submit => {
                if !gate.borrow_mut().begin(&draft) {
                    return;
                }
                status.set(SubmissionStatus::InFlight);

                let submitted = (*draft).clone();
                let draft = draft.clone();
                let status = status.clone();
                let gate = gate.clone();
                spawn_local(async move {
                    let result = LeadClient::from_config().submit(&submitted).await;
                    let alert = gate.borrow_mut().finish(&result);
                    match alert {
                        None => draft.set(LeadFormDraft::default()),
                        Some(message) => {
                            warn!("Inline contact form failed: {:?}", result);
                            if let Some(window) = window() {
                                let _ = window.alert_with_message(message);
                            }
                        }
                    }
                    status.set(gate.borrow().status());
                });
            }
            Intent::Activate | Intent::Minimize | Intent::Close => {}
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        padding: 8rem 1.5rem;
                        background: #0A0E1A;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .contact-card {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 4rem;
                        background: rgba(5, 8, 16, 0.8);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 2rem;
                    }
                    .contact-card h2 { color: white; text-align: center; font-size: 2.5rem; margin: 0 0 1rem; }
                    .contact-card p.lead { color: #94a3b8; text-align: center; margin-bottom: 3rem; }
                    .contact-success {
                        text-align: center;
                        color: #20c997;
                        padding: 1rem;
                        border: 1px solid rgba(32, 201, 151, 0.3);
                        border-radius: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-direct { display: flex; justify-content: center; gap: 2rem; margin-top: 2.5rem; }
                    .contact-direct a { color: #94a3b8; text-decoration: none; }
                    .contact-direct a:hover { color: white; }
                "#}
            </style>
            <div class="contact-card">
                <h2>{"Ready to Scale?"}</h2>
                <p class="lead">{"Tell us about your goals and we'll build your growth plan."}</p>
                if *status == SubmissionStatus::Succeeded {
                    <div class="contact-success">
                        {"Thanks! We'll be in touch within 24 hours."}
                    </div>
                }
                <LeadForm
                    draft={(*draft).clone()}
                    status={*status}
                    placeholder="Tell us about your current challenges and goals..."
                    on_intent={on_intent}
                />
                <div class="contact-direct">
                    <a href={config::mailto_link()}>{config::CONTACT_EMAIL}</a>
                    <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                </div>
            </div>
        </section>
    }
}
