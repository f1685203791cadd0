use crate::widgets::trigger::TriggerConfig;

pub fn get_lead_endpoint() -> &'static str {
    "https://api.web3forms.com/submit"
}

pub fn get_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("")
}

pub fn get_voice_url() -> &'static str {
    "https://ais-pre-vym5ovkvxxtd436maskprc-77562320371.europe-west1.run.app"
}

pub const CONTACT_EMAIL: &str = "ads@trustiify.agency";
pub const WHATSAPP_NUMBER: &str = "19083840281";
pub const INSTAGRAM_URL: &str = "https://instagram.com/trustiify";
pub const WHATSAPP_GREETING: &str =
    "Hi Trustiify! I found you on your website and I'd like to book a strategy call.";

/// Route on which the floating lead button stays hidden.
pub const CONTACT_PATH: &str = "/contact";

/// Rotating hints for the lead panel's message box.
pub const MESSAGE_PLACEHOLDERS: [&str; 3] = [
    "We want to reach 10x ROI...",
    "Our Google Ads are not converting...",
    "We need to rank #1 for our keywords...",
];

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

pub fn mailto_link() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

/// Timing and feature profile of one contact surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceProfile {
    pub entrance_delay_ms: u32,
    /// `None` turns off proactive prompting for the surface.
    pub triggers: Option<TriggerConfig>,
    pub tooltip_ms: u32,
    pub has_form: bool,
    pub embeds_frame: bool,
    pub frame_timeout_ms: u32,
    pub success_window_ms: u32,
    pub speaking_delay_ms: Option<u32>,
    /// Interval and lifespan (in ticks) of the decorative arrow emitter.
    pub arrows: Option<(u32, usize)>,
    pub placeholder_every_ms: Option<u32>,
}

impl SurfaceProfile {
    pub fn lead_panel() -> Self {
        Self {
            entrance_delay_ms: 1_500,
            triggers: None,
            tooltip_ms: 5_000,
            has_form: true,
            embeds_frame: false,
            frame_timeout_ms: 0,
            success_window_ms: 3_000,
            speaking_delay_ms: None,
            arrows: Some((1_500, 2)),
            placeholder_every_ms: Some(3_000),
        }
    }

    pub fn voice_panel() -> Self {
        Self {
            entrance_delay_ms: 2_000,
            triggers: Some(TriggerConfig::default()),
            tooltip_ms: 5_000,
            has_form: false,
            embeds_frame: true,
            frame_timeout_ms: 10_000,
            success_window_ms: 0,
            speaking_delay_ms: Some(1_200),
            arrows: None,
            placeholder_every_ms: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub lead: SurfaceProfile,
    pub voice: SurfaceProfile,
    /// When set, opening one panel minimizes the other.
    pub exclusive_panels: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            lead: SurfaceProfile::lead_panel(),
            voice: SurfaceProfile::voice_panel(),
            exclusive_panels: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_greeting() {
        let link = whatsapp_link();
        assert!(link.starts_with("https://wa.me/19083840281?text=Hi%20Trustiify%21"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn only_voice_panel_prompts_proactively() {
        let config = WidgetConfig::default();
        assert!(config.lead.triggers.is_none());
        assert_eq!(config.voice.triggers, Some(TriggerConfig::default()));
    }
}
