use crate::components::icons::{ArrowUpRight, Check, Cross};
use crate::content::{Plan, PlanFeature, PLANS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct FeatureRowProps {
    feature: PlanFeature,
}

#[function_component]
fn FeatureRow(props: &FeatureRowProps) -> Html {
    let feature = props.feature;
    let mark = if feature.included {
        html! { <span class="feature-mark"><Check class="mark-check" /></span> }
    } else {
        html! { <span class="feature-mark muted"><Cross class="mark-cross" /></span> }
    };
    html! {
        <div class={classes!("feature-row", (!feature.included).then_some("excluded"))}>
            <div class="feature-mark-wrap">{mark}</div>
            <div class="feature-text">{feature.text}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub plan: Plan,
    #[prop_or(0)]
    pub position: usize,
}

#[function_component]
pub fn PricingCard(props: &PricingCardProps) -> Html {
    let plan = &props.plan;
    // Staggered reveal, 50ms per card
    let delay = format!("animation-delay: {}ms;", props.position * 50);
    html! {
        <div class={classes!("plan-card", plan.popular.then_some("popular"))} style={delay}>
            if plan.popular {
                <div class="plan-glow" />
            }
            <div class="plan-body">
                <div class="plan-badges">
                    <div class="plan-badge">{plan.badge}</div>
                    if plan.popular {
                        <div class="plan-popular">{"Le plus populaire"}</div>
                    }
                </div>
                <div style="margin-top: 1.5rem;">
                    <h3>{plan.name}</h3>
                    <p class="plan-description">{plan.description}</p>
                </div>
                <div class="plan-price">
                    <div class="plan-amount">{format!("€{}", plan.price)}</div>
                    <div class="plan-period">{"/mois"}</div>
                </div>
                <div class="plan-features">
                    { for plan.features.iter().map(|feature| html! {
                        <FeatureRow key={feature.text} feature={*feature} />
                    }) }
                </div>
                <div style="margin-top: 2.5rem;">
                    <a href={plan.destination().url()} class="plan-cta">
                        {plan.cta}
                        <span class="plan-cta-arrow"><ArrowUpRight /></span>
                    </a>
                    <div class="plan-disclaimer">
                        {"Aucun résultat spécifique n’est garanti. Annulable à tout moment."}
                    </div>
                </div>
            </div>
            <div class="plan-hairline" />
        </div>
    }
}

#[function_component]
pub fn PricingSection() -> Html {
    let pricing_css = r#"
        .pricing {
            background: #fff;
            color: #030712;
            padding: 6rem 0;
        }
        .pricing-inner {
            max-width: 80rem;
            margin: 0 auto;
            padding: 0 1.5rem;
        }
        .pricing-header {
            text-align: center;
        }
        .pricing-header p {
            margin-top: 1.25rem;
            color: #4b5563;
            font-size: 1.125rem;
        }
        .plan-grid {
            margin-top: 4rem;
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 2rem;
        }
        .plan-card {
            position: relative;
            overflow: hidden;
            border-radius: 28px;
            border: 1px solid rgba(229, 231, 235, 0.7);
            background: #fff;
            box-shadow: 0 18px 60px rgba(0, 0, 0, 0.08);
            animation: plan-rise 0.45s ease-out both;
            transition: transform 0.2s;
        }
        .plan-card.popular { border-color: #e5e7eb; }
        .plan-card:hover { transform: translateY(-4px); }
        .plan-glow {
            position: absolute;
            top: -6rem;
            left: 50%;
            transform: translateX(-50%);
            height: 12rem;
            width: 520px;
            border-radius: 9999px;
            background: linear-gradient(to right, rgba(245, 208, 254, 0.7), rgba(186, 230, 253, 0.55), rgba(167, 243, 208, 0.6));
            filter: blur(64px);
            pointer-events: none;
        }
        .plan-body {
            position: relative;
            padding: 2.5rem;
        }
        .plan-badges {
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: 1rem;
        }
        .plan-badge {
            display: inline-flex;
            border-radius: 9999px;
            border: 1px solid #e5e7eb;
            background: #f9fafb;
            padding: 0.25rem 0.75rem;
            font-size: 0.875rem;
            color: #374151;
        }
        .plan-popular {
            display: inline-flex;
            border-radius: 9999px;
            border: 1px solid #e5e7eb;
            background: #fff;
            padding: 0.25rem 0.75rem;
            font-size: 11px;
            font-weight: 500;
            letter-spacing: 0.025em;
            color: #374151;
            box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        }
        .plan-body h3 {
            font-size: 1.875rem;
            font-weight: 600;
            letter-spacing: -0.02em;
        }
        .plan-description {
            margin-top: 0.5rem;
            color: #4b5563;
        }
        .plan-price {
            margin-top: 2rem;
            display: flex;
            align-items: flex-end;
            gap: 0.5rem;
        }
        .plan-amount {
            font-size: 3.75rem;
            font-weight: 600;
            letter-spacing: -0.02em;
        }
        .plan-period {
            padding-bottom: 0.5rem;
            color: #374151;
            font-weight: 500;
        }
        .plan-features {
            margin-top: 2rem;
            display: flex;
            flex-direction: column;
            gap: 1rem;
        }
        .feature-row {
            display: flex;
            align-items: flex-start;
            gap: 0.75rem;
            color: #111827;
        }
        .feature-row.excluded { color: #9ca3af; }
        .feature-mark {
            display: inline-flex;
            height: 1.75rem;
            width: 1.75rem;
            align-items: center;
            justify-content: center;
            border-radius: 50%;
            border: 1px solid #e5e7eb;
            background: #fff;
            box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        }
        .feature-mark.muted { background: #f9fafb; box-shadow: none; }
        .mark-check { color: #030712; }
        .mark-cross { color: #9ca3af; }
        .feature-text {
            font-size: 1rem;
            line-height: 1.6;
        }
        .plan-cta {
            display: inline-flex;
            width: 100%;
            align-items: center;
            justify-content: center;
            gap: 0.75rem;
            border-radius: 1rem;
            border: 1px solid #e5e7eb;
            background: #f9fafb;
            padding: 1rem 1.5rem;
            font-weight: 500;
            color: #030712;
            text-decoration: none;
            transition: all 0.2s;
        }
        .plan-card.popular .plan-cta { background: #fff; }
        .plan-cta:hover {
            background: #fff;
            transform: scale(1.01);
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        }
        .plan-cta-arrow { display: inline-flex; transition: transform 0.2s; }
        .plan-cta:hover .plan-cta-arrow { transform: translate(2px, -2px); }
        .plan-disclaimer {
            margin-top: 1rem;
            text-align: center;
            font-size: 0.75rem;
            color: #6b7280;
        }
        .plan-hairline {
            height: 1px;
            width: 100%;
            background: rgba(229, 231, 235, 0.6);
        }
        @keyframes plan-rise {
            from { opacity: 0; transform: translateY(14px); }
            to { opacity: 1; transform: none; }
        }
        @media (max-width: 768px) {
            .plan-grid { grid-template-columns: 1fr; gap: 1.5rem; }
            .plan-body { padding: 2rem; }
            .plan-amount { font-size: 3rem; }
        }
    "#;
    html! {
        <section class="pricing">
            <style>{pricing_css}</style>
            <div class="pricing-inner">
                <div class="pricing-header">
                    <h2 class="section-title">
                        {"Accédez à FOCUS dès"}
                        <br />
                        {"aujourd’hui"}
                    </h2>
                    <p>{"Accédez à la communauté, aux ressources et aux replays."}</p>
                </div>
                <div class="plan-grid">
                    { for PLANS.iter().enumerate().map(|(position, plan)| html! {
                        <PricingCard key={plan.name} plan={*plan} {position} />
                    }) }
                </div>
            </div>
        </section>
    }
}
