use yew::prelude::*;

use crate::components::animated_text::AnimatedHeading;
use crate::components::splashes::{PurpleSplashes, WhiteSplashes, SPLASH_STYLE};
use crate::engine::stagger::{cascade_delay, card_delay, stagger};

#[derive(Clone, PartialEq)]
pub struct Plan {
    pub kind: &'static str,
    pub price: &'static str,
    pub subscription: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub active: bool,
    pub features: &'static [&'static str],
}

pub const PLANS: [Plan; 3] = [
    Plan {
        kind: "Personal",
        price: "$59",
        subscription: "year",
        description: "Perfect for using in a personal website or a client project.",
        button_text: "Choose Personal",
        active: false,
        features: &[
            "1 User",
            "All UI components",
            "Lifetime access",
            "Free updates",
            "Use on 1 (one) project",
            "3 Months support",
        ],
    },
    Plan {
        kind: "Business",
        price: "$199",
        subscription: "year",
        description: "Perfect for using in a personal website or a client project.",
        button_text: "Choose Business",
        active: true,
        features: &[
            "5 User",
            "All UI components",
            "Lifetime access",
            "Free updates",
            "Use on 3 (Three) project",
            "4 Months support",
        ],
    },
    Plan {
        kind: "Professional",
        price: "$256",
        subscription: "year",
        description: "Perfect for using in a personal website or a client project.",
        button_text: "Choose Professional",
        active: false,
        features: &[
            "Unlimited User",
            "All UI components",
            "Lifetime access",
            "Free updates",
            "Unlimited project",
            "12 Months support",
        ],
    },
];

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub plan: Plan,
    pub index: usize,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let PricingCardProps { plan, index } = props;
    let index = *index;

    html! {
        <div class="pricing-column">
            <div
                class={classes!("pricing-card", plan.active.then(|| "active"))}
                style={format!("animation-delay: {:.2}s;", card_delay(index))}
            >
                <span class="pricing-kind">{ plan.kind }</span>
                <h2 class="pricing-price">
                    { for stagger(plan.price, 0.04).into_iter().map(|g| html! {
                        <span key={g.index} style={g.style()}>{ g.ch.to_string() }</span>
                    }) }
                    <span class="pricing-subscription">{ format!(" / {}", plan.subscription) }</span>
                </h2>
                <p class="pricing-description">{ plan.description }</p>
                <div class="pricing-features">
                    { for plan.features.iter().enumerate().map(|(i, feature)| html! {
                        <p
                            key={i}
                            class="pricing-feature"
                            style={format!("animation-delay: {:.2}s;", cascade_delay(index, i))}
                        >
                            <span class="pricing-check">{"✓"}</span>
                            { *feature }
                        </p>
                    }) }
                </div>
                <a href="/#" class={classes!("pricing-button", plan.active.then(|| "active"))}>
                    { plan.button_text }
                </a>
            </div>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section class="pricing">
            <WhiteSplashes />
            <PurpleSplashes />

            <div class="pricing-header">
                <span class="pricing-eyebrow">{"Pricing Table"}</span>
                <AnimatedHeading tag="h2" class="pricing-heading" text="Our Pricing Plan" />
                <p>
                    {"There are many variations of passages of Lorem Ipsum available but the majority have suffered alteration in some form."}
                </p>
            </div>

            <div class="pricing-row">
                { for PLANS.iter().enumerate().map(|(index, plan)| html! {
                    <PricingCard key={plan.kind} plan={plan.clone()} {index} />
                }) }
            </div>

            <style>
                { SPLASH_STYLE }
                {r#"
                .pricing {
                    position: relative;
                    z-index: 10;
                    overflow: hidden;
                    background: #1a0e1f;
                    padding: 5rem 1rem 3rem;
                }
                .pricing-header {
                    max-width: 510px;
                    margin: 0 auto 60px;
                    text-align: center;
                    color: #9ca3af;
                }
                .pricing-eyebrow {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #818cf8;
                }
                .pricing-heading {
                    font-size: 2.5rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }
                .pricing-heading span {
                    display: inline-block;
                    opacity: 0.7;
                    color: white;
                    animation: highlightPulse 2.5s ease infinite;
                    animation-fill-mode: forwards;
                }
                @keyframes highlightPulse {
                    0% { opacity: 0.7; color: white; transform: translateY(0); }
                    50% { opacity: 1; color: #9b4dff; transform: translateY(-5%); }
                    100% { opacity: 0.7; color: white; transform: translateY(0); }
                }
                .pricing-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                }
                .pricing-column {
                    width: 33.33%;
                    padding: 0 1rem;
                }
                .pricing-card {
                    position: relative;
                    margin-bottom: 2.5rem;
                    border: 2px solid #d1d5db;
                    border-radius: 10px;
                    background: white;
                    padding: 2.5rem 1.5rem;
                    opacity: 0;
                    animation: cardEntrance 0.7s ease-out forwards;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease, transform 0.2s ease-out;
                }
                .pricing-card.active {
                    border-color: #6366f1;
                }
                .pricing-card:hover {
                    border-color: #9b4dff;
                    box-shadow: 0 0 20px rgba(155, 77, 255, 0.4);
                    transform: translateY(-5px);
                }
                @keyframes cardEntrance {
                    0% { opacity: 0; transform: translateY(20px) scale(0.95); }
                    100% { opacity: 1; transform: translateY(0) scale(1); }
                }
                .pricing-kind {
                    display: block;
                    margin-bottom: 0.75rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #6366f1;
                }
                .pricing-price {
                    margin-bottom: 1.25rem;
                    font-size: 42px;
                    font-weight: 700;
                    color: #111827;
                }
                .pricing-price > span:not(.pricing-subscription) {
                    display: inline-block;
                    opacity: 0.7;
                    animation: priceHighlightPulse 2s ease infinite;
                }
                @keyframes priceHighlightPulse {
                    0% { opacity: 0.7; color: #1f2937; transform: translateY(0); }
                    50% { opacity: 1; color: #9b4dff; transform: translateY(-5%); }
                    100% { opacity: 0.7; color: #1f2937; transform: translateY(0); }
                }
                .pricing-subscription {
                    font-size: 1rem;
                    font-weight: 500;
                    color: #4b5563;
                }
                .pricing-description {
                    margin-bottom: 2rem;
                    padding-bottom: 2rem;
                    border-bottom: 1px solid #d1d5db;
                    color: #4b5563;
                }
                .pricing-features {
                    display: flex;
                    flex-direction: column;
                    gap: 14px;
                    margin-bottom: 2.25rem;
                }
                .pricing-feature {
                    color: #4b5563;
                    opacity: 0;
                    animation: listItemFadeInHighlight 0.8s ease-out forwards;
                }
                @keyframes listItemFadeInHighlight {
                    0% { opacity: 0; transform: translateX(-10px); color: #9ca3af; }
                    50% { opacity: 1; transform: translateX(0); color: #9b4dff; }
                    100% { opacity: 1; transform: translateX(0); color: #4b5563; }
                }
                .pricing-check {
                    margin-right: 0.5rem;
                    color: #6366f1;
                }
                .pricing-button {
                    display: block;
                    width: 100%;
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                    text-align: center;
                    font-weight: 500;
                    color: #6366f1;
                    text-decoration: none;
                    box-sizing: border-box;
                    transition: all 0.2s;
                }
                .pricing-button:hover,
                .pricing-button.active {
                    border-color: #6366f1;
                    background: #6366f1;
                    color: white;
                }
                @media (max-width: 1024px) {
                    .pricing-column {
                        width: 50%;
                    }
                }
                @media (max-width: 768px) {
                    .pricing-column {
                        width: 100%;
                    }
                }
                "#}
            </style>
        </section>
    }
}
