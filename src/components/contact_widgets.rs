use std::collections::HashMap;

use gloo_timers::callback::{Interval, Timeout};
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::dom_listener::DomListener;
use crate::components::floating_contact::FloatingContact;
use crate::components::voice_widget::VoiceWidget;
use crate::config::{self, WidgetConfig};
use crate::widgets::hub::{Directive, WidgetHub};
use crate::widgets::state::{Effect, Intent, Listener, Surface, Ticker, Timer};
use crate::widgets::submit::{LeadClient, SubmitError};
use crate::widgets::trigger::{scroll_fraction, TriggerSignal};

pub enum Msg {
    Intent(Surface, Intent),
    Timer(Surface, Timer),
    Tick(Surface, Ticker),
    Signal(Surface, TriggerSignal),
    Escape,
    FrameLoaded(Surface),
    Submitted(Surface, Result<(), SubmitError>),
    AlertClosed(Surface),
    Resized,
}

/// Mounts both contact surfaces and owns every browser resource they use.
///
/// Timer, ticker and listener handles live in maps keyed by surface; removing
/// an entry drops the handle, which cancels the timeout or detaches the
/// listener.
pub struct ContactWidgets {
    hub: WidgetHub,
    client: LeadClient,
    timers: HashMap<(Surface, Timer), Timeout>,
    tickers: HashMap<(Surface, Ticker), Interval>,
    listeners: HashMap<(Surface, Listener), Vec<DomListener>>,
    resize: Option<DomListener>,
    is_mobile: bool,
}

fn viewport_is_mobile() -> bool {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w < config::MOBILE_BREAKPOINT_PX)
        .unwrap_or(false)
}

fn on_contact_page() -> bool {
    window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| path.trim_end_matches('/') == config::CONTACT_PATH)
        .unwrap_or(false)
}

fn current_scroll_fraction() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_fraction(offset, document_height, viewport)
}

impl Component for ContactWidgets {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let resize = DomListener::on_window("resize", move |_| link.send_message(Msg::Resized));

        Self {
            hub: WidgetHub::new(WidgetConfig::default()),
            client: LeadClient::from_config(),
            timers: HashMap::new(),
            tickers: HashMap::new(),
            listeners: HashMap::new(),
            resize,
            is_mobile: viewport_is_mobile(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let directives = self.hub.mount();
            self.apply(ctx, directives);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let directives = match msg {
            Msg::Intent(surface, intent) => self.hub.dispatch(surface, intent),
            Msg::Timer(surface, timer) => {
                self.timers.remove(&(surface, timer));
                if surface == Surface::LeadPanel && timer == Timer::Entrance && on_contact_page() {
                    info!("Contact page already shows the form, keeping floating button hidden");
                    self.hub.suppress(surface)
                } else {
                    self.hub.timer_fired(surface, timer)
                }
            }
            Msg::Tick(surface, ticker) => {
                self.hub.ticked(surface, ticker);
                Vec::new()
            }
            Msg::Signal(surface, signal) => {
                let directives = self.hub.signal(surface, signal);
                if directives.is_empty() {
                    return false;
                }
                directives
            }
            Msg::Escape => self.hub.escape(),
            Msg::FrameLoaded(surface) => self.hub.frame_loaded(surface),
            Msg::Submitted(surface, result) => self.hub.submission_finished(surface, result),
            Msg::AlertClosed(surface) => {
                self.hub.alert_dismissed(surface);
                Vec::new()
            }
            Msg::Resized => {
                let is_mobile = viewport_is_mobile();
                let changed = is_mobile != self.is_mobile;
                self.is_mobile = is_mobile;
                return changed;
            }
        };
        self.apply(ctx, directives);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let lead_intent = ctx
            .link()
            .callback(|intent: Intent| Msg::Intent(Surface::LeadPanel, intent));
        let voice_intent = ctx
            .link()
            .callback(|intent: Intent| Msg::Intent(Surface::VoicePanel, intent));
        let frame_loaded = ctx.link().callback(|_: ()| Msg::FrameLoaded(Surface::VoicePanel));

        html! {
            <>
                <FloatingContact
                    view={self.hub.view(Surface::LeadPanel)}
                    is_mobile={self.is_mobile}
                    on_intent={lead_intent}
                />
                <VoiceWidget
                    view={self.hub.view(Surface::VoicePanel)}
                    is_mobile={self.is_mobile}
                    on_intent={voice_intent}
                    on_frame_loaded={frame_loaded}
                />
            </>
        }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        let directives = self.hub.teardown();
        self.apply(ctx, directives);
        self.timers.clear();
        self.tickers.clear();
        self.listeners.clear();
        self.resize = None;
    }
}

impl ContactWidgets {
    fn apply(&mut self, ctx: &Context<Self>, directives: Vec<Directive>) {
        for Directive { surface, effect } in directives {
            match effect {
                Effect::Arm { timer, after_ms } => {
                    let link = ctx.link().clone();
                    let handle = Timeout::new(after_ms, move || {
                        link.send_message(Msg::Timer(surface, timer));
                    });
                    self.timers.insert((surface, timer), handle);
                }
                Effect::Cancel(timer) => {
                    self.timers.remove(&(surface, timer));
                }
                Effect::Listen(listener) => {
                    let attached = self.attach(ctx, surface, listener);
                    self.listeners.insert((surface, listener), attached);
                }
                Effect::Unlisten(listener) => {
                    self.listeners.remove(&(surface, listener));
                }
                Effect::StartTicker { ticker, every_ms } => {
                    let link = ctx.link().clone();
                    let handle = Interval::new(every_ms, move || {
                        link.send_message(Msg::Tick(surface, ticker));
                    });
                    self.tickers.insert((surface, ticker), handle);
                }
                Effect::StopTicker(ticker) => {
                    self.tickers.remove(&(surface, ticker));
                }
                Effect::LoadFrame => {
                    info!("Embedding {} for {:?}", config::get_voice_url(), surface);
                }
                Effect::Submit(draft) => {
                    let client = self.client.clone();
                    ctx.link().send_future(async move {
                        let result = client.submit(&draft).await;
                        Msg::Submitted(surface, result)
                    });
                }
                Effect::Alert(message) => {
                    if let Some(window) = window() {
                        let _ = window.alert_with_message(message);
                    }
                    ctx.link().send_message(Msg::AlertClosed(surface));
                }
            }
        }
    }

    fn attach(&self, ctx: &Context<Self>, surface: Surface, listener: Listener) -> Vec<DomListener> {
        let mut attached = Vec::new();
        match listener {
            Listener::Triggers => {
                let link = ctx.link().clone();
                attached.extend(DomListener::on_window("scroll", move |_| {
                    link.send_message(Msg::Signal(
                        surface,
                        TriggerSignal::Scroll { fraction: current_scroll_fraction() },
                    ));
                }));

                let link = ctx.link().clone();
                attached.extend(DomListener::on_document("mousemove", move |e| {
                    if let Some(e) = e.dyn_ref::<MouseEvent>() {
                        link.send_message(Msg::Signal(
                            surface,
                            TriggerSignal::Pointer { y: e.client_y() as f64 },
                        ));
                    }
                }));
            }
            Listener::Dismissal => {
                let link = ctx.link().clone();
                attached.extend(DomListener::on_window("keydown", move |e| {
                    if e.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
                        link.send_message(Msg::Escape);
                    }
                }));
            }
        }
        attached
    }
}
