use log::debug;

use crate::config::WidgetConfig;
use crate::widgets::state::{
    Effect, Intent, Surface, SurfaceMachine, SurfaceView, Ticker, Timer, Visibility,
};
use crate::widgets::submit::SubmitError;
use crate::widgets::trigger::TriggerSignal;

/// An effect addressed to the surface that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub surface: Surface,
    pub effect: Effect,
}

fn tag(surface: Surface, effects: Vec<Effect>) -> Vec<Directive> {
    effects
        .into_iter()
        .map(|effect| Directive { surface, effect })
        .collect()
}

/// Owns both contact surfaces and the policy between them.
pub struct WidgetHub {
    lead: SurfaceMachine,
    voice: SurfaceMachine,
    exclusive: bool,
}

impl WidgetHub {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            lead: SurfaceMachine::new(Surface::LeadPanel, config.lead),
            voice: SurfaceMachine::new(Surface::VoicePanel, config.voice),
            exclusive: config.exclusive_panels,
        }
    }

    pub fn machine(&self, surface: Surface) -> &SurfaceMachine {
        match surface {
            Surface::LeadPanel => &self.lead,
            Surface::VoicePanel => &self.voice,
        }
    }

    fn machine_mut(&mut self, surface: Surface) -> &mut SurfaceMachine {
        match surface {
            Surface::LeadPanel => &mut self.lead,
            Surface::VoicePanel => &mut self.voice,
        }
    }

    fn other(surface: Surface) -> Surface {
        match surface {
            Surface::LeadPanel => Surface::VoicePanel,
            Surface::VoicePanel => Surface::LeadPanel,
        }
    }

    pub fn view(&self, surface: Surface) -> SurfaceView {
        self.machine(surface).view()
    }

    pub fn mount(&mut self) -> Vec<Directive> {
        let mut out = tag(Surface::LeadPanel, self.lead.mount());
        out.extend(tag(Surface::VoicePanel, self.voice.mount()));
        out
    }

    pub fn dispatch(&mut self, surface: Surface, intent: Intent) -> Vec<Directive> {
        let mut out = Vec::new();
        let other = Self::other(surface);
        if intent == Intent::Activate
            && self.exclusive
            && self.machine(surface).visibility() != Visibility::Open
            && self.machine(other).visibility() == Visibility::Open
        {
            debug!("{:?} opening, minimizing {:?}", surface, other);
            out.extend(tag(other, self.machine_mut(other).dispatch(Intent::Minimize)));
        }
        out.extend(tag(surface, self.machine_mut(surface).dispatch(intent)));
        out
    }

    pub fn timer_fired(&mut self, surface: Surface, timer: Timer) -> Vec<Directive> {
        tag(surface, self.machine_mut(surface).timer_fired(timer))
    }

    pub fn suppress(&mut self, surface: Surface) -> Vec<Directive> {
        tag(surface, self.machine_mut(surface).suppress())
    }

    pub fn ticked(&mut self, surface: Surface, ticker: Ticker) {
        self.machine_mut(surface).ticked(ticker);
    }

    pub fn signal(&mut self, surface: Surface, signal: TriggerSignal) -> Vec<Directive> {
        tag(surface, self.machine_mut(surface).signal(signal))
    }

    /// Escape collapses every open panel, whichever surface registered the key.
    pub fn escape(&mut self) -> Vec<Directive> {
        let mut out = tag(Surface::LeadPanel, self.lead.escape());
        out.extend(tag(Surface::VoicePanel, self.voice.escape()));
        out
    }

    pub fn frame_loaded(&mut self, surface: Surface) -> Vec<Directive> {
        tag(surface, self.machine_mut(surface).frame_loaded())
    }

    pub fn submission_finished(
        &mut self,
        surface: Surface,
        result: Result<(), SubmitError>,
    ) -> Vec<Directive> {
        tag(surface, self.machine_mut(surface).submission_finished(result))
    }

    pub fn alert_dismissed(&mut self, surface: Surface) {
        self.machine_mut(surface).alert_dismissed();
    }

    pub fn teardown(&mut self) -> Vec<Directive> {
        let mut out = tag(Surface::LeadPanel, self.lead.teardown());
        out.extend(tag(Surface::VoicePanel, self.voice.teardown()));
        out
    }
}
