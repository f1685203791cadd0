use yew::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::config;

#[function_component(Contact)]
pub fn contact() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Let's Talk Growth"}</h1>
                <p>
                    {"Prefer a quick chat? Message us on "}
                    <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                    {" or follow along on "}
                    <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    {"."}
                </p>
            </section>
            <ContactSection />
            <style>
                {r#"
                .contact-page { background: #050810; color: white; min-height: 100vh; padding-top: 74px; }
                .contact-hero { text-align: center; padding: 6rem 1.5rem 0; }
                .contact-hero h1 { font-size: 3.5rem; margin: 0 0 1rem; }
                .contact-hero p { color: #94a3b8; }
                .contact-hero a { color: #00C6FF; }
                "#}
            </style>
        </div>
    }
}
