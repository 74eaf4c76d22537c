use crate::components::icons::{ArrowRight, Star};
use crate::content::{Destination, COMMUNITY_MOCKUP};
use yew::prelude::*;

#[function_component]
pub fn Hero() -> Html {
    let hero_css = r#"
        .hero {
            background: #000;
            padding: 6rem 1rem 8rem;
        }
        .hero-inner {
            max-width: 1400px;
            margin: 0 auto;
            display: flex;
            flex-direction: column;
            align-items: center;
            text-align: center;
        }
        .hero-rating {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            margin-bottom: 3.5rem;
            opacity: 0.8;
            font-size: 0.875rem;
            font-weight: 600;
        }
        .focus-headline {
            margin-bottom: 2.5rem;
            font-size: clamp(2.5rem, 7vw, 5.5rem);
            font-weight: 600;
            letter-spacing: -0.03em;
            line-height: 1.02;
        }
        .focus-headline .light {
            color: rgba(255, 255, 255, 0.45);
        }
        .focus-subheadline {
            max-width: 40rem;
            margin-bottom: 3.5rem;
            font-size: 1.125rem;
            color: rgba(255, 255, 255, 0.7);
        }
        .hero-cta-wrap {
            position: relative;
        }
        .hero-cta-glow {
            position: absolute;
            inset: -1rem;
            border-radius: 9999px;
            background: rgba(255, 255, 255, 0.1);
            filter: blur(40px);
            opacity: 0;
            transition: opacity 0.5s;
        }
        .hero-cta-wrap:hover .hero-cta-glow {
            opacity: 1;
        }
        .hero-cta {
            position: relative;
            display: flex;
            align-items: center;
            gap: 0.75rem;
            padding: 1rem 2rem;
            border-radius: 9999px;
            background: #0B0B0B;
            border: 1px solid rgba(255, 255, 255, 0.1);
            color: #fff;
            font-weight: 600;
            text-decoration: none;
            transition: all 0.2s;
        }
        .hero-cta:hover {
            background: #fff;
            color: #000;
        }
        .hero-mockup {
            position: relative;
            margin-top: 7rem;
            width: 100%;
            max-width: 72rem;
        }
        .hero-mockup-glow {
            position: absolute;
            inset: -0.25rem;
            border-radius: 9999px;
            background: linear-gradient(to right, rgba(59, 130, 246, 0.2), rgba(168, 85, 247, 0.2));
            filter: blur(100px);
        }
        .hero-mockup img {
            position: relative;
            z-index: 1;
            width: 100%;
            border-radius: 32px;
            border: 1px solid rgba(255, 255, 255, 0.05);
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
        }
    "#;
    html! {
        <section class="hero">
            <style>{hero_css}</style>
            <div class="hero-inner">
                <div class="hero-rating">
                    <span>{"4.8 sur 5"}</span>
                    <Star size={16} />
                    <span>{"Trustpilot"}</span>
                </div>
                <h1 class="focus-headline">
                    {"Reste concentré "}<span class="light">{"sur l’essentiel"}</span>
                </h1>
                <p class="focus-subheadline">
                    {"FOCUS est une plateforme privée où tu accèdes à des cours clairs et une communauté de créateurs et d'entrepreneurs."}
                </p>
                <div class="hero-cta-wrap">
                    <div class="hero-cta-glow" />
                    <a href={Destination::Checkout.url()} class="hero-cta">
                        {"Rejoindre Focus"}
                        <ArrowRight />
                    </a>
                </div>
                <div class="hero-mockup">
                    <div class="hero-mockup-glow" />
                    <img src={COMMUNITY_MOCKUP} alt="Mockup Focus" />
                </div>
            </div>
        </section>
    }
}
