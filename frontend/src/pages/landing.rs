use crate::components::features_stack::FeaturesStack;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::pricing::PricingSection;
use crate::components::showcase::InteractiveFeatures;
use crate::components::thematic_grid::ThematicGrid;
use yew::prelude::*;

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
    let page_css = r#"
        *, *::before, *::after {
            box-sizing: border-box;
            margin: 0;
        }
        .landing-page {
            min-height: 100vh;
            background: #0A0D12;
            color: #fff;
            overflow: hidden;
            font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", sans-serif;
        }
        .section-pill {
            display: inline-flex;
            border-radius: 9999px;
            border: 1px solid #e5e7eb;
            background: #fff;
            padding: 0.5rem 1rem;
            font-size: 0.875rem;
            color: #4b5563;
            box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        }
        .section-title {
            margin-top: 1.5rem;
            font-size: clamp(2.25rem, 5vw, 3.75rem);
            font-weight: 600;
            letter-spacing: -0.02em;
            line-height: 1.05;
        }
        .gradient-text {
            background: linear-gradient(to right, #d946ef, #38bdf8, #6ee7b7);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
    "#;
    html! {
        <div class="landing-page">
            <style>{page_css}</style>
            <Navbar />
            <main>
                <Hero />
                <FeaturesStack />
                <InteractiveFeatures />
                <ThematicGrid />
                <PricingSection />
            </main>
        </div>
    }
}
