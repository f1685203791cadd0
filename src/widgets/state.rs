use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::config::{SurfaceProfile, MESSAGE_PLACEHOLDERS};
use crate::widgets::draft::{DraftField, LeadFormDraft, Service};
use crate::widgets::emitter::TokenEmitter;
use crate::widgets::submit::{SubmissionStatus, SubmitError};
use crate::widgets::trigger::{TriggerEngine, TriggerSignal};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Surface {
    LeadPanel,
    VoicePanel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Idle,
    Prompted,
    Open,
    Dismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Timer {
    Entrance,
    AutoTrigger,
    TooltipExpiry,
    SuccessWindow,
    FrameTimeout,
    Speaking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Listener {
    /// Scroll and pointer-move listeners feeding the trigger engine.
    Triggers,
    /// Escape key while a panel is open.
    Dismissal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ticker {
    Arrows,
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Unloaded,
    Loading,
    Loaded,
    TimedOut,
}

/// Requests coming from the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    Activate,
    Minimize,
    Close,
    UpdateField(DraftField, String),
    ToggleService(Service),
    Submit,
}

/// Work the driver has to carry out on the machine's behalf.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Arm { timer: Timer, after_ms: u32 },
    Cancel(Timer),
    Listen(Listener),
    Unlisten(Listener),
    StartTicker { ticker: Ticker, every_ms: u32 },
    StopTicker(Ticker),
    LoadFrame,
    Submit(LeadFormDraft),
    Alert(&'static str),
}

/// Render snapshot of one surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceView {
    pub visibility: Visibility,
    pub draft: Option<LeadFormDraft>,
    pub status: SubmissionStatus,
    pub frame: FrameStatus,
    pub speaking: bool,
    pub arrows: Vec<u64>,
    pub placeholder: usize,
}

impl SurfaceView {
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn tooltip_visible(&self) -> bool {
        self.visibility == Visibility::Prompted
    }
}

/// Authoritative visibility and interaction state of one contact surface.
///
/// Every operation is a synchronous state change that reports the timers,
/// listeners and requests it needs as [`Effect`]s. The machine tracks what it
/// has armed, so stale timer expiries are dropped and `teardown` can release
/// everything that is still outstanding.
pub struct SurfaceMachine {
    surface: Surface,
    profile: SurfaceProfile,
    state: Visibility,
    dismissed: bool,
    engine: Option<TriggerEngine>,
    draft: Option<LeadFormDraft>,
    status: SubmissionStatus,
    frame: FrameStatus,
    speaking: bool,
    arrows: Option<TokenEmitter>,
    placeholder: usize,
    armed: BTreeSet<Timer>,
    listening: BTreeSet<Listener>,
    ticking: BTreeSet<Ticker>,
    /// The auto-trigger delay ran out before the surface was revealed.
    elapsed_while_hidden: bool,
    suppressed: bool,
    torn_down: bool,
}

impl SurfaceMachine {
    pub fn new(surface: Surface, profile: SurfaceProfile) -> Self {
        Self {
            surface,
            engine: profile.triggers.clone().map(TriggerEngine::new),
            arrows: profile.arrows.map(|(_, lifespan)| TokenEmitter::new(lifespan)),
            profile,
            state: Visibility::Hidden,
            dismissed: false,
            draft: None,
            status: SubmissionStatus::Idle,
            frame: FrameStatus::Unloaded,
            speaking: false,
            placeholder: 0,
            armed: BTreeSet::new(),
            listening: BTreeSet::new(),
            ticking: BTreeSet::new(),
            elapsed_while_hidden: false,
            suppressed: false,
            torn_down: false,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.state
    }

    pub fn draft(&self) -> Option<&LeadFormDraft> {
        self.draft.as_ref()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn frame(&self) -> FrameStatus {
        self.frame
    }

    pub fn is_armed(&self, timer: Timer) -> bool {
        self.armed.contains(&timer)
    }

    pub fn is_listening(&self, listener: Listener) -> bool {
        self.listening.contains(&listener)
    }

    pub fn is_ticking(&self, ticker: Ticker) -> bool {
        self.ticking.contains(&ticker)
    }

    pub fn view(&self) -> SurfaceView {
        SurfaceView {
            visibility: self.state,
            draft: self.draft.clone(),
            status: self.status,
            frame: self.frame,
            speaking: self.speaking,
            arrows: self
                .arrows
                .as_ref()
                .map(|e| e.tokens().iter().map(|t| t.id).collect())
                .unwrap_or_default(),
            placeholder: self.placeholder,
        }
    }

    pub fn mount(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.torn_down
            || self.suppressed
            || self.state != Visibility::Hidden
            || self.is_armed(Timer::Entrance)
        {
            return fx;
        }
        self.arm(&mut fx, Timer::Entrance, self.profile.entrance_delay_ms);
        if let Some(delay) = self.live_auto_trigger_ms() {
            self.arm(&mut fx, Timer::AutoTrigger, delay);
        }
        fx
    }

    pub fn timer_fired(&mut self, timer: Timer) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.torn_down || !self.armed.remove(&timer) {
            debug!("{:?}: ignoring stale {:?} timer", self.surface, timer);
            return fx;
        }

        match timer {
            Timer::Entrance => {
                if self.state == Visibility::Hidden {
                    self.collapse(&mut fx);
                }
            }
            Timer::AutoTrigger => {
                if self.state == Visibility::Hidden {
                    self.elapsed_while_hidden = true;
                } else {
                    self.evaluate(&mut fx, TriggerSignal::Elapsed);
                }
            }
            Timer::TooltipExpiry => {
                if self.state == Visibility::Prompted {
                    self.set_state(Visibility::Idle);
                }
            }
            Timer::SuccessWindow => {
                if self.state == Visibility::Open {
                    self.leave_open(&mut fx);
                }
            }
            Timer::FrameTimeout => {
                if self.frame == FrameStatus::Loading {
                    warn!("{:?}: embedded frame did not load in time", self.surface);
                    self.frame = FrameStatus::TimedOut;
                }
            }
            Timer::Speaking => {
                if self.state == Visibility::Open {
                    self.speaking = true;
                }
            }
        }
        fx
    }

    pub fn ticked(&mut self, ticker: Ticker) {
        if self.torn_down || !self.is_ticking(ticker) {
            return;
        }
        match ticker {
            Ticker::Arrows => {
                if let Some(emitter) = self.arrows.as_mut() {
                    emitter.tick();
                }
            }
            Ticker::Placeholder => {
                self.placeholder = (self.placeholder + 1) % MESSAGE_PLACEHOLDERS.len();
            }
        }
    }

    pub fn signal(&mut self, signal: TriggerSignal) -> Vec<Effect> {
        let mut fx = Vec::new();
        if !self.torn_down {
            self.evaluate(&mut fx, signal);
        }
        fx
    }

    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.torn_down {
            return fx;
        }

        match intent {
            Intent::Activate => match self.state {
                Visibility::Idle | Visibility::Prompted | Visibility::Dismissed => {
                    self.open(&mut fx)
                }
                Visibility::Hidden | Visibility::Open => {}
            },
            Intent::Minimize => {
                if self.state == Visibility::Open {
                    self.leave_open(&mut fx);
                }
            }
            Intent::Close => match self.state {
                Visibility::Open => {
                    self.dismiss(&mut fx);
                    self.leave_open(&mut fx);
                }
                Visibility::Prompted => {
                    self.dismiss(&mut fx);
                    self.set_state(Visibility::Dismissed);
                }
                _ => {}
            },
            Intent::UpdateField(field, value) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.set_field(field, value);
                }
            }
            Intent::ToggleService(service) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.toggle_service(service);
                }
            }
            Intent::Submit => self.submit(&mut fx),
        }
        fx
    }

    /// Escape key: any open panel collapses.
    pub fn escape(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        if !self.torn_down && self.state == Visibility::Open {
            self.leave_open(&mut fx);
        }
        fx
    }

    pub fn frame_loaded(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        if matches!(self.frame, FrameStatus::Loading | FrameStatus::TimedOut) {
            self.frame = FrameStatus::Loaded;
            self.cancel(&mut fx, Timer::FrameTimeout);
        }
        fx
    }

    pub fn submission_finished(&mut self, result: Result<(), SubmitError>) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.torn_down || self.status != SubmissionStatus::InFlight {
            return fx;
        }

        match result {
            Ok(()) => {
                info!("{:?}: lead submitted", self.surface);
                self.status = SubmissionStatus::Succeeded;
                if let Some(draft) = self.draft.as_mut() {
                    draft.clear();
                }
                self.arm(&mut fx, Timer::SuccessWindow, self.profile.success_window_ms);
            }
            Err(e) => {
                warn!("{:?}: lead submission failed: {}", self.surface, e);
                self.status = SubmissionStatus::Failed;
                fx.push(Effect::Alert(e.user_message()));
            }
        }
        fx
    }

    /// Keeps a surface that has not been revealed yet hidden for good.
    pub fn suppress(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.torn_down || self.state != Visibility::Hidden {
            return fx;
        }
        info!("{:?}: suppressed before entrance", self.surface);
        self.suppressed = true;
        for timer in std::mem::take(&mut self.armed) {
            fx.push(Effect::Cancel(timer));
        }
        fx
    }

    /// The blocking failure alert was closed; the form accepts a new submit.
    pub fn alert_dismissed(&mut self) {
        if self.status == SubmissionStatus::Failed {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Releases every timer, listener and ticker. Later calls are no-ops.
    pub fn teardown(&mut self) -> Vec<Effect> {
        let mut fx = Vec::new();
        if self.torn_down {
            return fx;
        }
        self.torn_down = true;
        for timer in std::mem::take(&mut self.armed) {
            fx.push(Effect::Cancel(timer));
        }
        for listener in std::mem::take(&mut self.listening) {
            fx.push(Effect::Unlisten(listener));
        }
        for ticker in std::mem::take(&mut self.ticking) {
            fx.push(Effect::StopTicker(ticker));
        }
        fx
    }

    fn set_state(&mut self, next: Visibility) {
        if self.state != next {
            debug!("{:?}: {:?} -> {:?}", self.surface, self.state, next);
            self.state = next;
        }
    }

    fn live_auto_trigger_ms(&self) -> Option<u32> {
        self.engine
            .as_ref()
            .filter(|e| e.is_live())
            .map(|e| e.config().auto_trigger_ms)
    }

    fn evaluate(&mut self, fx: &mut Vec<Effect>, signal: TriggerSignal) {
        let state = self.state;
        let fired = match self.engine.as_mut() {
            Some(engine) => engine.evaluate(state, &signal),
            None => false,
        };
        if fired {
            self.release_triggers(fx);
            self.set_state(Visibility::Prompted);
            self.arm(fx, Timer::TooltipExpiry, self.profile.tooltip_ms);
        }
    }

    /// Collapsed resting state: `Idle`, or `Dismissed` once declined.
    fn collapse(&mut self, fx: &mut Vec<Effect>) {
        if self.dismissed {
            self.set_state(Visibility::Dismissed);
        } else {
            self.set_state(Visibility::Idle);
            if std::mem::take(&mut self.elapsed_while_hidden) {
                self.evaluate(fx, TriggerSignal::Elapsed);
            }
            let live = self.live_auto_trigger_ms().filter(|_| self.state == Visibility::Idle);
            if let Some(delay) = live {
                self.listen(fx, Listener::Triggers);
                if !self.is_armed(Timer::AutoTrigger) {
                    self.arm(fx, Timer::AutoTrigger, delay);
                }
            }
        }
        if let Some((every_ms, _)) = self.profile.arrows {
            self.start_ticker(fx, Ticker::Arrows, every_ms);
        }
    }

    fn open(&mut self, fx: &mut Vec<Effect>) {
        self.set_state(Visibility::Open);
        self.cancel(fx, Timer::TooltipExpiry);
        self.release_triggers(fx);
        self.stop_ticker(fx, Ticker::Arrows);
        if let Some(emitter) = self.arrows.as_mut() {
            emitter.clear();
        }
        self.listen(fx, Listener::Dismissal);

        if self.profile.has_form && self.draft.is_none() {
            self.draft = Some(LeadFormDraft::default());
        }
        if self.profile.embeds_frame && self.frame == FrameStatus::Unloaded {
            info!("{:?}: loading embedded frame", self.surface);
            self.frame = FrameStatus::Loading;
            fx.push(Effect::LoadFrame);
            self.arm(fx, Timer::FrameTimeout, self.profile.frame_timeout_ms);
        }
        if let Some(delay) = self.profile.speaking_delay_ms {
            self.arm(fx, Timer::Speaking, delay);
        }
        if let Some(every_ms) = self.profile.placeholder_every_ms {
            self.start_ticker(fx, Ticker::Placeholder, every_ms);
        }
    }

    fn leave_open(&mut self, fx: &mut Vec<Effect>) {
        self.unlisten(fx, Listener::Dismissal);
        self.cancel(fx, Timer::Speaking);
        self.cancel(fx, Timer::SuccessWindow);
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
        }
        self.speaking = false;
        self.stop_ticker(fx, Ticker::Placeholder);
        self.collapse(fx);
    }

    fn dismiss(&mut self, fx: &mut Vec<Effect>) {
        self.dismissed = true;
        if let Some(engine) = self.engine.as_mut() {
            engine.retire();
        }
        self.cancel(fx, Timer::TooltipExpiry);
        self.release_triggers(fx);
    }

    fn release_triggers(&mut self, fx: &mut Vec<Effect>) {
        self.cancel(fx, Timer::AutoTrigger);
        self.unlisten(fx, Listener::Triggers);
    }

    fn submit(&mut self, fx: &mut Vec<Effect>) {
        if self.state != Visibility::Open {
            return;
        }
        if matches!(self.status, SubmissionStatus::InFlight | SubmissionStatus::Succeeded) {
            debug!("{:?}: submit ignored while {:?}", self.surface, self.status);
            return;
        }
        let Some(draft) = self.draft.as_ref() else {
            return;
        };
        if let Err(e) = draft.validate() {
            debug!("{:?}: draft not submitted: {}", self.surface, e);
            return;
        }
        self.status = SubmissionStatus::InFlight;
        fx.push(Effect::Submit(draft.clone()));
    }

    fn arm(&mut self, fx: &mut Vec<Effect>, timer: Timer, after_ms: u32) {
        self.armed.insert(timer);
        fx.push(Effect::Arm { timer, after_ms });
    }

    fn cancel(&mut self, fx: &mut Vec<Effect>, timer: Timer) {
        if self.armed.remove(&timer) {
            fx.push(Effect::Cancel(timer));
        }
    }

    fn listen(&mut self, fx: &mut Vec<Effect>, listener: Listener) {
        if self.listening.insert(listener) {
            fx.push(Effect::Listen(listener));
        }
    }

    fn unlisten(&mut self, fx: &mut Vec<Effect>, listener: Listener) {
        if self.listening.remove(&listener) {
            fx.push(Effect::Unlisten(listener));
        }
    }

    fn start_ticker(&mut self, fx: &mut Vec<Effect>, ticker: Ticker, every_ms: u32) {
        if self.ticking.insert(ticker) {
            fx.push(Effect::StartTicker { ticker, every_ms });
        }
    }

    fn stop_ticker(&mut self, fx: &mut Vec<Effect>, ticker: Ticker) {
        if self.ticking.remove(&ticker) {
            fx.push(Effect::StopTicker(ticker));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::draft::Budget;

    fn voice() -> SurfaceMachine {
        let mut machine = SurfaceMachine::new(Surface::VoicePanel, SurfaceProfile::voice_panel());
        machine.mount();
        machine.timer_fired(Timer::Entrance);
        machine
    }

    fn lead() -> SurfaceMachine {
        let mut machine = SurfaceMachine::new(Surface::LeadPanel, SurfaceProfile::lead_panel());
        machine.mount();
        machine.timer_fired(Timer::Entrance);
        machine
    }

    fn fill(machine: &mut SurfaceMachine) {
        machine.dispatch(Intent::UpdateField(DraftField::Name, "Jane".into()));
        machine.dispatch(Intent::UpdateField(DraftField::Email, "jane@co.com".into()));
        machine.dispatch(Intent::UpdateField(DraftField::Budget, "$1000-$5000".into()));
        machine.dispatch(Intent::ToggleService(Service::TechnicalSeo));
        machine.dispatch(Intent::UpdateField(DraftField::Message, "Help us rank".into()));
    }

    fn submits(fx: &[Effect]) -> usize {
        fx.iter().filter(|e| matches!(e, Effect::Submit(_))).count()
    }

    #[test]
    fn mount_arms_entrance_and_auto_trigger() {
        let mut machine = SurfaceMachine::new(Surface::VoicePanel, SurfaceProfile::voice_panel());
        let fx = machine.mount();
        assert_eq!(
            fx,
            vec![
                Effect::Arm { timer: Timer::Entrance, after_ms: 2_000 },
                Effect::Arm { timer: Timer::AutoTrigger, after_ms: 45_000 },
            ]
        );
        assert_eq!(machine.visibility(), Visibility::Hidden);
        assert!(machine.mount().is_empty());
    }

    #[test]
    fn entrance_reveals_and_starts_listening() {
        let machine = voice();
        assert_eq!(machine.visibility(), Visibility::Idle);
        assert!(machine.is_listening(Listener::Triggers));
        assert!(machine.is_armed(Timer::AutoTrigger));
    }

    #[test]
    fn auto_trigger_prompts_exactly_once() {
        let mut machine = voice();
        machine.timer_fired(Timer::AutoTrigger);
        assert_eq!(machine.visibility(), Visibility::Prompted);
        assert!(!machine.is_listening(Listener::Triggers));

        machine.timer_fired(Timer::TooltipExpiry);
        assert_eq!(machine.visibility(), Visibility::Idle);

        // The engine is spent; nothing re-prompts.
        assert!(machine.signal(TriggerSignal::Pointer { y: 0.0 }).is_empty());
        assert!(machine.timer_fired(Timer::AutoTrigger).is_empty());
        assert_eq!(machine.visibility(), Visibility::Idle);
    }

    #[test]
    fn scroll_prompt_does_not_reverse_and_expires() {
        let mut machine = voice();
        let fx = machine.signal(TriggerSignal::Scroll { fraction: 0.7 });
        assert!(fx.contains(&Effect::Arm { timer: Timer::TooltipExpiry, after_ms: 5_000 }));
        assert_eq!(machine.visibility(), Visibility::Prompted);

        machine.signal(TriggerSignal::Scroll { fraction: 0.0 });
        assert_eq!(machine.visibility(), Visibility::Prompted);

        machine.timer_fired(Timer::TooltipExpiry);
        assert_eq!(machine.visibility(), Visibility::Idle);
    }

    #[test]
    fn dismissal_is_sticky_against_every_signal() {
        let mut machine = voice();
        machine.signal(TriggerSignal::Pointer { y: 5.0 });
        machine.dispatch(Intent::Close);
        assert_eq!(machine.visibility(), Visibility::Dismissed);

        for signal in [
            TriggerSignal::Elapsed,
            TriggerSignal::Scroll { fraction: 1.0 },
            TriggerSignal::Pointer { y: 0.0 },
        ] {
            assert!(machine.signal(signal).is_empty());
            assert_eq!(machine.visibility(), Visibility::Dismissed);
        }
        assert!(machine.timer_fired(Timer::AutoTrigger).is_empty());
    }

    #[test]
    fn dismissed_surface_reopens_but_returns_to_dismissed() {
        let mut machine = voice();
        machine.dispatch(Intent::Activate);
        machine.dispatch(Intent::Close);
        assert_eq!(machine.visibility(), Visibility::Dismissed);

        machine.dispatch(Intent::Activate);
        assert_eq!(machine.visibility(), Visibility::Open);
        let fx = machine.dispatch(Intent::Minimize);
        assert_eq!(machine.visibility(), Visibility::Dismissed);
        assert!(!fx.contains(&Effect::Listen(Listener::Triggers)));
        assert!(!machine.is_armed(Timer::AutoTrigger));
    }

    #[test]
    fn opening_releases_trigger_resources() {
        let mut machine = voice();
        let fx = machine.dispatch(Intent::Activate);
        assert!(fx.contains(&Effect::Cancel(Timer::AutoTrigger)));
        assert!(fx.contains(&Effect::Unlisten(Listener::Triggers)));
        assert!(fx.contains(&Effect::Listen(Listener::Dismissal)));
        assert!(!machine.is_armed(Timer::AutoTrigger));
        assert!(!machine.is_listening(Listener::Triggers));
    }

    #[test]
    fn minimize_rearms_triggers_when_not_yet_fired() {
        let mut machine = voice();
        machine.dispatch(Intent::Activate);
        let fx = machine.dispatch(Intent::Minimize);
        assert_eq!(machine.visibility(), Visibility::Idle);
        assert!(fx.contains(&Effect::Unlisten(Listener::Dismissal)));
        assert!(fx.contains(&Effect::Listen(Listener::Triggers)));
        assert!(fx.contains(&Effect::Arm { timer: Timer::AutoTrigger, after_ms: 45_000 }));
    }

    #[test]
    fn frame_loads_once_across_open_cycles() {
        let mut machine = voice();
        let mut loads = 0;
        for _ in 0..5 {
            loads += machine
                .dispatch(Intent::Activate)
                .iter()
                .filter(|e| **e == Effect::LoadFrame)
                .count();
            machine.dispatch(Intent::Minimize);
        }
        machine.dispatch(Intent::Activate);
        machine.escape();
        assert_eq!(loads, 1);
    }

    #[test]
    fn frame_timeout_marks_fallback_until_load_arrives() {
        let mut machine = voice();
        machine.dispatch(Intent::Activate);
        machine.timer_fired(Timer::FrameTimeout);
        assert_eq!(machine.frame(), FrameStatus::TimedOut);
        machine.frame_loaded();
        assert_eq!(machine.frame(), FrameStatus::Loaded);
    }

    #[test]
    fn frame_load_cancels_timeout() {
        let mut machine = voice();
        machine.dispatch(Intent::Activate);
        let fx = machine.frame_loaded();
        assert_eq!(fx, vec![Effect::Cancel(Timer::FrameTimeout)]);
        assert!(machine.timer_fired(Timer::FrameTimeout).is_empty());
        assert_eq!(machine.frame(), FrameStatus::Loaded);
    }

    #[test]
    fn speaking_pulse_resets_on_minimize() {
        let mut machine = voice();
        machine.dispatch(Intent::Activate);
        machine.timer_fired(Timer::Speaking);
        assert!(machine.view().speaking);
        machine.dispatch(Intent::Minimize);
        assert!(!machine.view().speaking);
    }

    #[test]
    fn escape_collapses_open_panel() {
        let mut machine = lead();
        machine.dispatch(Intent::Activate);
        let fx = machine.escape();
        assert_eq!(machine.visibility(), Visibility::Idle);
        assert!(fx.contains(&Effect::Unlisten(Listener::Dismissal)));
        assert!(machine.escape().is_empty());
    }

    #[test]
    fn double_submit_issues_one_request() {
        let mut machine = lead();
        machine.dispatch(Intent::Activate);
        fill(&mut machine);
        let first = machine.dispatch(Intent::Submit);
        let second = machine.dispatch(Intent::Submit);
        assert_eq!(submits(&first) + submits(&second), 1);
        assert_eq!(machine.status(), SubmissionStatus::InFlight);
    }

    #[test]
    fn invalid_draft_is_not_submitted() {
        let mut machine = lead();
        machine.dispatch(Intent::Activate);
        machine.dispatch(Intent::UpdateField(DraftField::Name, "Jane".into()));
        assert!(machine.dispatch(Intent::Submit).is_empty());
        assert_eq!(machine.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn successful_submit_clears_and_collapses() {
        let mut machine = lead();
        machine.dispatch(Intent::Activate);
        fill(&mut machine);
        let fx = machine.dispatch(Intent::Submit);
        let Some(Effect::Submit(sent)) = fx.into_iter().find(|e| matches!(e, Effect::Submit(_)))
        else {
            panic!("expected a submit effect");
        };
        assert_eq!(sent.budget, Some(Budget::Growth));

        let fx = machine.submission_finished(Ok(()));
        assert_eq!(fx, vec![Effect::Arm { timer: Timer::SuccessWindow, after_ms: 3_000 }]);
        assert_eq!(machine.status(), SubmissionStatus::Succeeded);
        assert_eq!(machine.visibility(), Visibility::Open);
        assert!(machine.draft().is_some_and(LeadFormDraft::is_empty));

        machine.timer_fired(Timer::SuccessWindow);
        assert_eq!(machine.visibility(), Visibility::Idle);
        assert_eq!(machine.status(), SubmissionStatus::Idle);
        assert!(!machine.is_listening(Listener::Dismissal));
    }

    #[test]
    fn minimizing_during_success_window_cancels_it() {
        let mut machine = lead();
        machine.dispatch(Intent::Activate);
        fill(&mut machine);
        machine.dispatch(Intent::Submit);
        machine.submission_finished(Ok(()));

        let fx = machine.dispatch(Intent::Minimize);
        assert!(fx.contains(&Effect::Cancel(Timer::SuccessWindow)));
        assert!(!machine.is_armed(Timer::SuccessWindow));
        assert_eq!(machine.status(), SubmissionStatus::Idle);

        machine.dispatch(Intent::Activate);
        assert_eq!(machine.status(), SubmissionStatus::Idle);

        // A late expiry from the first open must not close the second one.
        assert!(machine.timer_fired(Timer::SuccessWindow).is_empty());
        assert_eq!(machine.visibility(), Visibility::Open);
    }

    #[test]
    fn failed_submit_keeps_draft_for_retry() {
        let mut machine = lead();
        machine.dispatch(Intent::Activate);
        fill(&mut machine);
        machine.dispatch(Intent::Submit);

        let fx = machine.submission_finished(Err(SubmitError::Rejected { status: 500 }));
        assert_eq!(fx, vec![Effect::Alert("Something went wrong. Please try again.")]);
        assert_eq!(machine.status(), SubmissionStatus::Failed);
        assert_eq!(machine.draft().map(|d| d.name.as_str()), Some("Jane"));

        machine.alert_dismissed();
        assert_eq!(machine.status(), SubmissionStatus::Idle);
        assert_eq!(submits(&machine.dispatch(Intent::Submit)), 1);
    }

    #[test]
    fn stale_submission_result_is_ignored() {
        let mut machine = lead();
        machine.dispatch(Intent::Activate);
        assert!(machine.submission_finished(Ok(())).is_empty());
        assert_eq!(machine.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn arrows_tick_only_while_collapsed() {
        let mut machine = lead();
        assert!(machine.is_ticking(Ticker::Arrows));
        machine.ticked(Ticker::Arrows);
        assert_eq!(machine.view().arrows.len(), 1);

        machine.dispatch(Intent::Activate);
        assert!(!machine.is_ticking(Ticker::Arrows));
        assert!(machine.view().arrows.is_empty());
        machine.ticked(Ticker::Arrows);
        assert!(machine.view().arrows.is_empty());

        machine.ticked(Ticker::Placeholder);
        assert_eq!(machine.view().placeholder, 1);
    }

    #[test]
    fn suppressed_surface_never_appears() {
        let mut machine = SurfaceMachine::new(Surface::LeadPanel, SurfaceProfile::lead_panel());
        machine.mount();
        let fx = machine.suppress();
        assert_eq!(fx, vec![Effect::Cancel(Timer::Entrance)]);
        assert!(!machine.is_armed(Timer::Entrance));

        assert!(machine.timer_fired(Timer::Entrance).is_empty());
        assert!(machine.mount().is_empty());
        machine.dispatch(Intent::Activate);
        assert_eq!(machine.visibility(), Visibility::Hidden);
        assert!(machine.teardown().is_empty());
    }

    #[test]
    fn suppress_after_entrance_is_a_no_op() {
        let mut machine = lead();
        assert!(machine.suppress().is_empty());
        assert_eq!(machine.visibility(), Visibility::Idle);
    }

    #[test]
    fn auto_trigger_expiring_while_hidden_prompts_on_entrance() {
        let profile = SurfaceProfile {
            entrance_delay_ms: 60_000,
            ..SurfaceProfile::voice_panel()
        };
        let mut machine = SurfaceMachine::new(Surface::VoicePanel, profile);
        machine.mount();

        assert!(machine.timer_fired(Timer::AutoTrigger).is_empty());
        assert_eq!(machine.visibility(), Visibility::Hidden);

        let fx = machine.timer_fired(Timer::Entrance);
        assert_eq!(machine.visibility(), Visibility::Prompted);
        assert!(fx.contains(&Effect::Arm { timer: Timer::TooltipExpiry, after_ms: 5_000 }));
        assert!(!fx.contains(&Effect::Listen(Listener::Triggers)));
        assert!(!machine.is_armed(Timer::AutoTrigger));
    }

    #[test]
    fn teardown_releases_everything_once() {
        let mut machine = voice();
        machine.dispatch(Intent::Activate);
        let fx = machine.teardown();
        assert!(fx.contains(&Effect::Cancel(Timer::FrameTimeout)));
        assert!(fx.contains(&Effect::Cancel(Timer::Speaking)));
        assert!(fx.contains(&Effect::Unlisten(Listener::Dismissal)));
        assert!(machine.teardown().is_empty());
        assert!(machine.dispatch(Intent::Minimize).is_empty());
        assert!(machine.timer_fired(Timer::Speaking).is_empty());
    }
}
