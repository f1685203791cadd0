use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::config::{self, MESSAGE_PLACEHOLDERS};
use crate::widgets::state::{Intent, SurfaceView, Visibility};
use crate::widgets::submit::SubmissionStatus;

#[derive(Properties, PartialEq)]
pub struct FloatingContactProps {
    pub view: SurfaceView,
    pub is_mobile: bool,
    pub on_intent: Callback<Intent>,
}

#[function_component(FloatingContact)]
pub fn floating_contact(props: &FloatingContactProps) -> Html {
    let FloatingContactProps { view, is_mobile, on_intent } = props;
    if view.visibility == Visibility::Hidden {
        return html! {};
    }
    let is_open = view.is_open();

    let toggle = {
        let on_intent = on_intent.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_intent.emit(if is_open { Intent::Minimize } else { Intent::Activate });
        })
    };

    let minimize = {
        let on_intent = on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::Minimize))
    };

    let placeholder = MESSAGE_PLACEHOLDERS[view.placeholder % MESSAGE_PLACEHOLDERS.len()];

    html! {
        <>
            <style>
                {r#"
                    .fab-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(5, 8, 16, 0.6);
                        backdrop-filter: blur(4px);
                        z-index: 99990;
                    }
                    .fab-root {
                        position: fixed;
                        bottom: 32px;
                        left: 24px;
                        z-index: 99995;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 16px;
                    }
                    .fab-panel {
                        width: 380px;
                        max-height: calc(100vh - 140px);
                        overflow-y: auto;
                        background: #0A0E1A;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 24px;
                        padding: 24px;
                        box-shadow: 0 24px 80px rgba(0, 0, 0, 0.6);
                        animation: fabIn 0.25s ease-out;
                    }
                    .fab-panel.mobile {
                        width: calc(100vw - 48px);
                    }
                    @keyframes fabIn {
                        from { opacity: 0; transform: translateY(40px) scale(0.95); }
                        to { opacity: 1; transform: translateY(0) scale(1); }
                    }
                    .fab-button {
                        position: relative;
                        width: 72px;
                        height: 72px;
                        border-radius: 50%;
                        border: none;
                        cursor: pointer;
                        background: linear-gradient(135deg, #00C6FF 0%, #7B61FF 100%);
                        color: white;
                        box-shadow: 0 8px 32px rgba(0, 198, 255, 0.45);
                    }
                    .fab-button.open {
                        background: #1f2937;
                    }
                    .fab-badge {
                        position: absolute;
                        top: -8px;
                        right: -8px;
                        background: #20c997;
                        color: #050810;
                        font-size: 9px;
                        font-weight: 900;
                        padding: 2px 8px;
                        border-radius: 9999px;
                    }
                    .fab-arrow {
                        position: absolute;
                        top: 4px;
                        left: 10px;
                        color: #2dd4bf;
                        animation: trendingUp 3s ease-in-out forwards;
                        pointer-events: none;
                    }
                    @keyframes trendingUp {
                        0% { opacity: 0; transform: translateY(6px); }
                        30% { opacity: 1; }
                        100% { opacity: 0; transform: translateY(-18px); }
                    }
                    .fab-success {
                        text-align: center;
                        padding: 32px 8px;
                        color: white;
                    }
                    .fab-links {
                        display: flex;
                        gap: 12px;
                        justify-content: center;
                        margin-top: 16px;
                    }
                    .fab-links a {
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                        font-size: 0.85rem;
                    }
                    .lead-form { display: flex; flex-direction: column; gap: 14px; }
                    .lead-field { display: flex; flex-direction: column; gap: 6px; color: #cbd5e1; font-size: 0.8rem; position: relative; }
                    .lead-field input, .lead-field select, .lead-field textarea {
                        background: rgba(5, 8, 16, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                        padding: 10px 14px;
                        color: white;
                    }
                    .lead-valid { position: absolute; right: 12px; bottom: 10px; color: #20c997; }
                    .lead-services { display: flex; flex-wrap: wrap; gap: 8px; }
                    .lead-service {
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: transparent;
                        color: #cbd5e1;
                        border-radius: 9999px;
                        padding: 6px 12px;
                        cursor: pointer;
                    }
                    .lead-service.active { background: rgba(0, 198, 255, 0.2); border-color: #00C6FF; color: white; }
                    .lead-message-header { display: flex; justify-content: space-between; }
                    .lead-counter.full { color: #f87171; }
                    .lead-submit {
                        border: none;
                        border-radius: 12px;
                        padding: 14px;
                        font-weight: 700;
                        cursor: pointer;
                        background: linear-gradient(90deg, #00C6FF, #7B61FF, #FF4D9D);
                        color: white;
                    }
                    .lead-submit:disabled { opacity: 0.6; cursor: wait; }
                "#}
            </style>

            if is_open {
                <div class="fab-backdrop" onclick={minimize}></div>
            }

            <div class="fab-root">
                if is_open {
                    <div class={classes!("fab-panel", is_mobile.then(|| "mobile"))}>
                        if view.status == SubmissionStatus::Succeeded {
                            <div class="fab-success">
                                <div style="font-size: 48px;">{"🎉"}</div>
                                <h3>{"Request Received!"}</h3>
                                <p>{"We'll reach out within 24 hours to schedule your free strategy call."}</p>
                            </div>
                        } else {
                            <>
                                <h3 style="color: white; margin: 0 0 16px;">{"Free Growth Strategy Call"}</h3>
                                <LeadForm
                                    draft={view.draft.clone().unwrap_or_default()}
                                    status={view.status}
                                    placeholder={placeholder}
                                    on_intent={on_intent.clone()}
                                />
                                <div class="fab-links">
                                    <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                                    <a href={config::mailto_link()}>{"Email"}</a>
                                    <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                                </div>
                            </>
                        }
                    </div>
                }

                <button
                    class={classes!("fab-button", is_open.then(|| "open"))}
                    aria-label={if is_open { "Close contact form" } else { "Open contact form" }}
                    onclick={toggle}
                >
                    if is_open {
                        <span style="font-size: 24px;">{"✕"}</span>
                    } else {
                        <>
                            <div style="font-size: 24px;">{"📊"}</div>
                            <span style="font-size: 8px; font-weight: 700; letter-spacing: 0.1em;">{"STRATEGY"}</span>
                            { for view.arrows.iter().map(|id| html! {
                                <span key={*id} class="fab-arrow">{"↗"}</span>
                            }) }
                            <span class="fab-badge">{"FREE"}</span>
                        </>
                    }
                </button>
            </div>
        </>
    }
}
