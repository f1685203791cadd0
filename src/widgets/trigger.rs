use log::info;

use crate::widgets::state::Visibility;

/// Ambient signal fed to the trigger engine by timers and listeners.
#[derive(Clone, Debug, PartialEq)]
pub enum TriggerSignal {
    /// The auto-trigger delay has elapsed.
    Elapsed,
    /// Scroll offset as a fraction of the scrollable height.
    Scroll { fraction: f64 },
    /// Pointer Y coordinate relative to the viewport top.
    Pointer { y: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TriggerConfig {
    pub auto_trigger_ms: u32,
    pub scroll_threshold: f64,
    pub exit_intent_px: f64,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            auto_trigger_ms: 45_000,
            scroll_threshold: 0.70,
            exit_intent_px: 40.0,
        }
    }
}

/// Decides when a surface should proactively prompt.
///
/// Fires at most once per session. Time, scroll and pointer signals race
/// each other and the first one that qualifies wins. Once the engine has
/// fired or been retired every later signal is ignored.
#[derive(Clone, Debug)]
pub struct TriggerEngine {
    config: TriggerConfig,
    fired: bool,
    retired: bool,
}

impl TriggerEngine {
    pub fn new(config: TriggerConfig) -> Self {
        Self {
            config,
            fired: false,
            retired: false,
        }
    }

    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// True while the engine may still fire, i.e. its timers and listeners
    /// are worth keeping armed.
    pub fn is_live(&self) -> bool {
        !self.fired && !self.retired
    }

    /// Stops the engine for good. Used when the surface is dismissed.
    pub fn retire(&mut self) {
        self.retired = true;
    }

    pub fn evaluate(&mut self, state: Visibility, signal: &TriggerSignal) -> bool {
        if !self.is_live() || state != Visibility::Idle {
            return false;
        }

        let qualifies = match *signal {
            TriggerSignal::Elapsed => true,
            TriggerSignal::Scroll { fraction } => fraction >= self.config.scroll_threshold,
            TriggerSignal::Pointer { y } => y < self.config.exit_intent_px,
        };

        if qualifies {
            info!("Prompt trigger fired on {:?}", signal);
            self.fired = true;
        }
        qualifies
    }
}

/// Scroll offset divided by the scrollable distance. Pages that do not
/// scroll report 0.0.
pub fn scroll_fraction(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TriggerEngine {
        TriggerEngine::new(TriggerConfig::default())
    }

    #[test]
    fn fires_once_per_session() {
        let mut engine = engine();
        assert!(engine.evaluate(Visibility::Idle, &TriggerSignal::Elapsed));
        assert!(!engine.evaluate(Visibility::Idle, &TriggerSignal::Elapsed));
        assert!(!engine.evaluate(Visibility::Idle, &TriggerSignal::Pointer { y: 0.0 }));
        assert!(engine.has_fired());
    }

    #[test]
    fn ignores_signals_outside_idle() {
        let mut engine = engine();
        for state in [
            Visibility::Hidden,
            Visibility::Prompted,
            Visibility::Open,
            Visibility::Dismissed,
        ] {
            assert!(!engine.evaluate(state, &TriggerSignal::Elapsed), "{:?}", state);
        }
        assert!(!engine.has_fired());
    }

    #[test]
    fn scroll_fires_at_threshold() {
        let mut engine = engine();
        assert!(!engine.evaluate(Visibility::Idle, &TriggerSignal::Scroll { fraction: 0.69 }));
        assert!(engine.evaluate(Visibility::Idle, &TriggerSignal::Scroll { fraction: 0.70 }));
    }

    #[test]
    fn pointer_fires_only_near_top_edge() {
        let mut engine = engine();
        assert!(!engine.evaluate(Visibility::Idle, &TriggerSignal::Pointer { y: 40.0 }));
        assert!(!engine.evaluate(Visibility::Idle, &TriggerSignal::Pointer { y: 300.0 }));
        assert!(engine.evaluate(Visibility::Idle, &TriggerSignal::Pointer { y: 12.0 }));
    }

    #[test]
    fn retired_engine_never_fires() {
        let mut engine = engine();
        engine.retire();
        assert!(!engine.is_live());
        assert!(!engine.evaluate(Visibility::Idle, &TriggerSignal::Elapsed));
        assert!(!engine.evaluate(Visibility::Idle, &TriggerSignal::Scroll { fraction: 1.0 }));
    }

    #[test]
    fn scroll_fraction_handles_short_pages() {
        assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(100.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(700.0, 1800.0, 800.0), 0.7);
        assert_eq!(scroll_fraction(5000.0, 1800.0, 800.0), 1.0);
    }
}
