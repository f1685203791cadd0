use yew::prelude::*;

use crate::config;
use crate::widgets::state::{FrameStatus, Intent, SurfaceView, Visibility};

#[derive(Properties, PartialEq)]
pub struct VoiceWidgetProps {
    pub view: SurfaceView,
    pub is_mobile: bool,
    pub on_intent: Callback<Intent>,
    pub on_frame_loaded: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    speaking: bool,
    mobile: bool,
    on_intent: Callback<Intent>,
}

#[function_component(WidgetHeader)]
fn widget_header(props: &HeaderProps) -> Html {
    let minimize = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::Minimize))
    };
    let close = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::Close))
    };

    html! {
        <div class={classes!("sofia-header", props.mobile.then(|| "mobile"))}>
            <div class="sofia-avatar">
                {"🤖"}
                <span class="sofia-online-dot"></span>
            </div>
            <div class="sofia-title">
                <div>
                    <span class="sofia-name">{"Sofia"}</span>
                    if props.speaking {
                        <span class="sofia-speak-dots" aria-hidden="true">
                            <span class="sofia-speak-dot"></span>
                            <span class="sofia-speak-dot"></span>
                            <span class="sofia-speak-dot"></span>
                        </span>
                    }
                </div>
                <span class="sofia-subtitle">{"Growth Engine • Trustiify"}</span>
            </div>
            <button class="sofia-control" aria-label="Minimize" onclick={minimize}>{"—"}</button>
            <button class="sofia-control close" aria-label="Close" onclick={close}>{"✕"}</button>
        </div>
    }
}

/// Voice assistant pill, prompt tooltip and embedded assistant panel.
///
/// The frame is created on the first open and then kept in the tree; closing
/// only hides the panel, so the assistant is never loaded twice.
#[function_component(VoiceWidget)]
pub fn voice_widget(props: &VoiceWidgetProps) -> Html {
    let VoiceWidgetProps { view, is_mobile, on_intent, on_frame_loaded } = props;
    if view.visibility == Visibility::Hidden {
        return html! {};
    }
    let is_open = view.is_open();

    let open = {
        let on_intent = on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::Activate))
    };
    let minimize = {
        let on_intent = on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::Minimize))
    };
    let decline = {
        let on_intent = on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::Close))
    };
    let onload = {
        let on_frame_loaded = on_frame_loaded.clone();
        Callback::from(move |_: Event| on_frame_loaded.emit(()))
    };

    let panel_class = classes!(
        "sofia-panel",
        is_mobile.then(|| "mobile"),
        (!is_open).then(|| "concealed"),
    );

    html! {
        <>
            <style>
                {r#"
                    .sofia-panel {
                        position: fixed;
                        bottom: 100px;
                        right: 24px;
                        width: 380px;
                        height: 620px;
                        border-radius: 20px;
                        background: #0A1628;
                        border: 1px solid rgba(0, 198, 255, 0.2);
                        box-shadow: 0 24px 80px rgba(0, 0, 0, 0.6);
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                        z-index: 99998;
                    }
                    .sofia-panel.mobile {
                        inset: 0;
                        width: auto;
                        height: auto;
                        border-radius: 0;
                        z-index: 99999;
                    }
                    .sofia-panel.concealed {
                        display: none;
                    }
                    .sofia-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(4px);
                        z-index: 99996;
                    }
                    .sofia-header {
                        height: 64px;
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        padding: 0 16px;
                        background: linear-gradient(135deg, #0A1628 0%, #0D2040 100%);
                        border-bottom: 1px solid rgba(0, 198, 255, 0.12);
                    }
                    .sofia-header.mobile { height: 72px; }
                    .sofia-avatar {
                        position: relative;
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 20px;
                        background: linear-gradient(135deg, #00C6FF 0%, #0084FF 100%);
                    }
                    .sofia-online-dot {
                        position: absolute;
                        bottom: 1px;
                        right: 1px;
                        width: 9px;
                        height: 9px;
                        border-radius: 50%;
                        background: #00FF87;
                        border: 2px solid #0A1628;
                    }
                    .sofia-title { flex: 1; min-width: 0; }
                    .sofia-name { font-weight: 700; font-size: 15px; color: #FFFFFF; }
                    .sofia-subtitle {
                        font-size: 11px;
                        font-weight: 600;
                        color: #00C6FF;
                        letter-spacing: 0.04em;
                        text-transform: uppercase;
                    }
                    .sofia-control {
                        width: 32px;
                        height: 32px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.07);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: rgba(255, 255, 255, 0.7);
                        cursor: pointer;
                    }
                    .sofia-control.close:hover { background: rgba(239, 68, 68, 0.2); color: #F87171; }
                    .sofia-speak-dots { display: inline-flex; align-items: flex-end; gap: 3px; height: 14px; margin-left: 6px; }
                    .sofia-speak-dot {
                        width: 3px;
                        height: 6px;
                        border-radius: 2px;
                        background: #00C6FF;
                        animation: sofiaSpeak 0.9s ease-in-out infinite;
                    }
                    .sofia-speak-dot:nth-child(2) { height: 10px; animation-delay: 0.18s; }
                    .sofia-speak-dot:nth-child(3) { height: 7px; animation-delay: 0.36s; }
                    @keyframes sofiaSpeak {
                        0%, 100% { transform: scaleY(0.4); opacity: 0.5; }
                        50% { transform: scaleY(1); opacity: 1; }
                    }
                    .sofia-body { flex: 1; position: relative; overflow: hidden; }
                    .sofia-body iframe { width: 100%; height: 100%; border: none; background: #09090b; display: block; }
                    .sofia-fallback {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 12px;
                        padding: 24px;
                        text-align: center;
                        color: #E2E8F0;
                        background: #0A1628;
                    }
                    .sofia-fallback a { color: #00C6FF; }
                    .sofia-tooltip {
                        position: fixed;
                        bottom: 104px;
                        right: 24px;
                        max-width: 240px;
                        display: flex;
                        align-items: flex-start;
                        gap: 10px;
                        padding: 12px 16px;
                        background: #0A1628;
                        border: 1px solid rgba(0, 198, 255, 0.25);
                        border-radius: 14px;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.5);
                        z-index: 99997;
                        color: #E2E8F0;
                        font-size: 13px;
                    }
                    .sofia-tooltip button {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.4);
                        cursor: pointer;
                    }
                    .sofia-pill-wrap {
                        position: fixed;
                        bottom: 32px;
                        right: 24px;
                        z-index: 99997;
                    }
                    .sofia-pulse-ring {
                        position: absolute;
                        inset: -6px;
                        border-radius: 9999px;
                        background: rgba(0, 198, 255, 0.35);
                        animation: sofiaPulse 2s ease-out infinite;
                    }
                    @keyframes sofiaPulse {
                        0% { transform: scale(1); opacity: 0.6; }
                        70% { transform: scale(1.5); opacity: 0; }
                        100% { transform: scale(1.5); opacity: 0; }
                    }
                    .sofia-pill {
                        position: relative;
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        padding: 0 22px;
                        height: 56px;
                        border-radius: 9999px;
                        border: none;
                        cursor: pointer;
                        white-space: nowrap;
                        background: linear-gradient(135deg, #00C6FF 0%, #0084FF 100%);
                        box-shadow: 0 8px 32px rgba(0, 198, 255, 0.45);
                        color: #0A1628;
                        font-weight: 700;
                    }
                "#}
            </style>

            if is_open && *is_mobile {
                <div class="sofia-backdrop" onclick={minimize}></div>
            }

            if is_open || view.frame != FrameStatus::Unloaded {
                <div class={panel_class}>
                    <WidgetHeader speaking={view.speaking} mobile={*is_mobile} on_intent={on_intent.clone()} />
                    <div class="sofia-body">
                        if view.frame != FrameStatus::Unloaded {
                            <iframe
                                src={config::get_voice_url()}
                                allow="microphone; autoplay; clipboard-write"
                                title="Sofia - Trustiify Growth Engine"
                                {onload}
                            />
                        }
                        if view.frame == FrameStatus::TimedOut {
                            <div class="sofia-fallback">
                                <p>{"Sofia is taking longer than usual to connect."}</p>
                                <a href={config::get_voice_url()} target="_blank" rel="noopener noreferrer">
                                    {"Open Sofia in a new tab"}
                                </a>
                            </div>
                        }
                    </div>
                </div>
            }

            if view.tooltip_visible() {
                <div class="sofia-tooltip" role="status">
                    <span style="font-size: 18px;">{"👋"}</span>
                    <p style="margin: 0; flex: 1;">{"Hi! I'm Sofia. Let me help you scale your revenue."}</p>
                    <button aria-label="Dismiss" onclick={decline}>{"✕"}</button>
                </div>
            }

            if !is_open {
                <div class="sofia-pill-wrap">
                    <span class="sofia-pulse-ring" aria-hidden="true"></span>
                    <button class="sofia-pill" aria-label="Talk to Sofia, free strategy call" onclick={open}>
                        <span style="font-size: 20px;">{"🎙️"}</span>
                        <span>{ if *is_mobile { "Talk to Sofia" } else { "Talk to Sofia - Free Strategy Call" } }</span>
                    </button>
                </div>
            }
        </>
    }
}
