use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::widgets::draft::{Budget, DraftField, LeadFormDraft, Service, MESSAGE_LIMIT};
use crate::widgets::state::Intent;
use crate::widgets::submit::SubmissionStatus;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub draft: LeadFormDraft,
    pub status: SubmissionStatus,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub on_intent: Callback<Intent>,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let LeadFormProps { draft, status, placeholder, on_intent } = props;
    let submitting = *status == SubmissionStatus::InFlight;

    let onsubmit = {
        let on_intent = on_intent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_intent.emit(Intent::Submit);
        })
    };

    let on_name = {
        let on_intent = on_intent.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_intent.emit(Intent::UpdateField(DraftField::Name, input.value()));
        })
    };

    let on_email = {
        let on_intent = on_intent.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_intent.emit(Intent::UpdateField(DraftField::Email, input.value()));
        })
    };

    let on_budget = {
        let on_intent = on_intent.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_intent.emit(Intent::UpdateField(DraftField::Budget, select.value()));
        })
    };

    let on_message = {
        let on_intent = on_intent.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_intent.emit(Intent::UpdateField(DraftField::Message, area.value()));
        })
    };

    let message_len = draft.message().chars().count();
    let selected_budget = draft.budget.map(|b| b.value()).unwrap_or("");

    html! {
        <form class="lead-form" onsubmit={onsubmit}>
            <label class="lead-field">
                <span>{"Your Name"}</span>
                <input
                    required=true
                    type="text"
                    placeholder="John Smith"
                    value={draft.name.clone()}
                    oninput={on_name}
                />
            </label>

            <label class="lead-field">
                <span>{"Business Email"}</span>
                <input
                    required=true
                    type="email"
                    placeholder="john@company.com"
                    value={draft.email.clone()}
                    oninput={on_email}
                />
                if draft.email.contains('@') {
                    <span class="lead-valid">{"✓"}</span>
                }
            </label>

            <label class="lead-field">
                <span>{"Monthly Budget"}</span>
                <select required=true onchange={on_budget}>
                    <option value="" disabled=true selected={draft.budget.is_none()}>
                        {"Select budget range"}
                    </option>
                    { for Budget::ALL.iter().map(|budget| html! {
                        <option value={budget.value()} selected={selected_budget == budget.value()}>
                            {budget.label()}
                        </option>
                    }) }
                </select>
            </label>

            <div class="lead-field">
                <span>{"Services Needed"}</span>
                <div class="lead-services">
                    { for Service::CATALOG.iter().map(|service| {
                        let service = *service;
                        let active = draft.has_service(service);
                        let onclick = {
                            let on_intent = on_intent.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_intent.emit(Intent::ToggleService(service));
                            })
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("lead-service", active.then(|| "active"))}
                                {onclick}
                            >
                                {service.label()}
                            </button>
                        }
                    }) }
                </div>
            </div>

            <label class="lead-field">
                <span class="lead-message-header">
                    {"Your Goals"}
                    <span class={classes!("lead-counter", (message_len >= MESSAGE_LIMIT).then(|| "full"))}>
                        {format!("{}/{}", message_len, MESSAGE_LIMIT)}
                    </span>
                </span>
                <textarea
                    required=true
                    rows="3"
                    maxlength={MESSAGE_LIMIT.to_string()}
                    placeholder={placeholder.clone()}
                    value={draft.message().to_string()}
                    oninput={on_message}
                />
            </label>

            <button type="submit" class="lead-submit" disabled={submitting}>
                { if submitting { "Sending..." } else { "Book My Free Strategy Call" } }
            </button>
        </form>
    }
}
