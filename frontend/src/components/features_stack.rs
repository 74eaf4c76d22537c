use crate::components::icons::ArrowRight;
use crate::content::{FeatureCard, FEATURE_CARDS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StackCardProps {
    pub card: FeatureCard,
}

/// One sticky card: text column on the left, "app window" framed image on the right.
#[function_component]
pub fn StackCard(props: &StackCardProps) -> Html {
    let card = &props.card;
    html! {
        <div class="stack-slot">
            <div class="stack-card">
                <div class="stack-card-glow" />
                <div class="stack-text">
                    <div class="stack-number">{card.id}</div>
                    <div>
                        <h3>{card.title}</h3>
                        <p>{card.description}</p>
                        <a href={card.link.url()} class="stack-cta">
                            {card.cta}
                            <ArrowRight />
                        </a>
                    </div>
                </div>
                <div class="stack-visual">
                    <div class="app-window">
                        <div class="app-window-bar">
                            <span class="dot red" />
                            <span class="dot yellow" />
                            <span class="dot green" />
                            <span class="app-window-title">{card.title}</span>
                        </div>
                        <img src={card.image} alt={card.title} loading="lazy" />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn FeaturesStack() -> Html {
    let stack_css = r#"
        .features-stack {
            background: #fff;
            color: #030712;
            padding: 5rem 0;
        }
        .features-stack-inner {
            max-width: 80rem;
            margin: 0 auto;
            padding: 0 1.5rem;
        }
        .stack-slot {
            position: sticky;
            top: 6rem;
            min-height: 92vh;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .stack-card {
            position: relative;
            overflow: hidden;
            width: 100%;
            min-height: 70vh;
            display: flex;
            gap: 3.5rem;
            align-items: center;
            padding: 3.5rem;
            border-radius: 28px;
            background: #fff;
            border: 1px solid #e5e7eb;
            box-shadow: 0 18px 60px rgba(0, 0, 0, 0.1);
            animation: stack-rise 0.45s ease-out;
        }
        .stack-card-glow {
            position: absolute;
            top: -10rem;
            right: -10rem;
            width: 520px;
            height: 520px;
            border-radius: 50%;
            background: linear-gradient(to bottom right, rgba(186, 230, 253, 0.6), #fff, rgba(167, 243, 208, 0.5));
            filter: blur(64px);
            pointer-events: none;
        }
        .stack-text {
            position: relative;
            z-index: 1;
            flex: 1;
            display: flex;
            gap: 1.5rem;
            align-items: flex-start;
        }
        .stack-number {
            flex-shrink: 0;
            font-size: 3.75rem;
            font-weight: 600;
            color: #0ea5e9;
        }
        .stack-text h3 {
            font-size: clamp(1.5rem, 3vw, 2.25rem);
            font-weight: 600;
            line-height: 1.12;
        }
        .stack-text p {
            margin-top: 1rem;
            max-width: 36rem;
            color: #4b5563;
            font-size: 1.125rem;
            line-height: 1.6;
        }
        .stack-cta {
            margin-top: 2rem;
            display: inline-flex;
            align-items: center;
            gap: 0.75rem;
            border-radius: 9999px;
            border: 1px solid #e5e7eb;
            background: #fff;
            padding: 0.75rem 1.5rem;
            font-size: 0.875rem;
            font-weight: 500;
            color: #030712;
            text-decoration: none;
            transition: all 0.2s;
        }
        .stack-cta:hover {
            transform: translateY(-1px);
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        }
        .stack-visual {
            position: relative;
            z-index: 1;
            flex: 1;
            width: 100%;
        }
        .app-window {
            overflow: hidden;
            border-radius: 1rem;
            border: 1px solid #e5e7eb;
            background: #fff;
            box-shadow: 0 18px 50px rgba(0, 0, 0, 0.12);
            transition: transform 0.7s;
        }
        .app-window:hover {
            transform: scale(1.01);
        }
        .app-window-bar {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.75rem 1rem;
            border-bottom: 1px solid #e5e7eb;
            background: #f9fafb;
        }
        .dot {
            height: 10px;
            width: 10px;
            border-radius: 50%;
        }
        .dot.red { background: #fca5a5; }
        .dot.yellow { background: #fde047; }
        .dot.green { background: #86efac; }
        .app-window-title {
            margin-left: 0.75rem;
            font-size: 0.75rem;
            color: #6b7280;
            white-space: nowrap;
            overflow: hidden;
            text-overflow: ellipsis;
        }
        .app-window img {
            display: block;
            width: 100%;
            height: auto;
        }
        @keyframes stack-rise {
            from { opacity: 0; transform: translateY(18px); }
            to { opacity: 1; transform: none; }
        }
        @media (max-width: 768px) {
            .stack-card {
                flex-direction: column;
                align-items: flex-start;
                padding: 2rem;
                gap: 2.5rem;
            }
        }
    "#;
    html! {
        <section class="features-stack" id="club">
            <style>{stack_css}</style>
            <div class="features-stack-inner">
                <div style="margin-bottom: 5rem;">
                    <div class="section-pill">{"Votre groupe business"}</div>
                    <h2 class="section-title">
                        {"Avec "}<span class="gradient-text">{"Focus"}</span>{" voici"}
                        <br />
                        {"ce que tu obtiens"}
                    </h2>
                </div>
                <div style="position: relative;">
                    { for FEATURE_CARDS.iter().map(|card| html! {
                        <StackCard key={card.id} card={*card} />
                    }) }
                </div>
            </div>
        </section>
    }
}
