use yew::prelude::*;
use yew_router::components::Link;

use crate::components::contact_section::ContactSection;
use crate::widgets::draft::Service;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
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
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Growth You Can Measure"}</h1>
                    <p class="hero-subtitle">
                        {"Performance marketing, technical SEO and conversion design for brands that want numbers, not noise."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="hero-cta">{"Get Your Free Strategy Call"}</a>
                        <Link<Route> to={Route::Contact} classes="hero-secondary">
                            {"Talk to the team"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section class="services">
                <h2>{"What We Do"}</h2>
                <div class="services-grid">
                    { for Service::CATALOG.iter().map(|service| html! {
                        <div class="service-card">
                            <h3>{service.label()}</h3>
                        </div>
                    }) }
                </div>
            </section>

            <ContactSection />

            <style>
                {r#"
                .landing-page {
                    background: #050810;
                    color: white;
                    min-height: 100vh;
                    padding-top: 74px;
                }
                .hero {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 1.5rem;
                }
                .hero h1 { font-size: 4rem; margin: 0 0 1.5rem; }
                .hero-subtitle { color: #94a3b8; font-size: 1.25rem; max-width: 40rem; margin: 0 auto 2.5rem; }
                .hero-cta-group { display: flex; gap: 1.5rem; justify-content: center; align-items: center; }
                .hero-cta {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #00C6FF, #7B61FF);
                    color: white;
                    font-weight: 700;
                    text-decoration: none;
                }
                .hero-secondary { color: #cbd5e1; text-decoration: none; }
                .services { padding: 6rem 1.5rem; max-width: 72rem; margin: 0 auto; }
                .services h2 { text-align: center; font-size: 2.5rem; }
                .services-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
                .service-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.5rem; }
                    .hero-cta-group { flex-direction: column; }
                }
                "#}
            </style>
        </div>
    }
}
