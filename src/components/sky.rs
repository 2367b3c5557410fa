//! Page-wide background: falling motes plus an occasional comet.

use yew::prelude::*;

use crate::config::use_effects;
use crate::engine::comet::Comet;
use crate::engine::entropy;
use crate::engine::field::AmbientField;
use crate::engine::scheduler::BrowserScheduler;

#[function_component(FallingStars)]
pub fn falling_stars() -> Html {
    let effects = use_effects();
    let field = {
        let config = effects.field.clone();
        use_mut_ref(move || AmbientField::mount(entropy().as_mut(), &config))
    };

    {
        let field = field.clone();
        use_effect_with_deps(
            move |_| move || field.borrow_mut().unmount(),
            (),
        );
    }

    let field = field.borrow();
    html! {
        <div class="falling-stars" aria-hidden="true">
            { for field.motes().iter().enumerate().map(|(i, mote)| html! {
                <div key={i} class="star" style={mote.style()} />
            }) }
        </div>
    }
}

#[function_component(ShootingStar)]
pub fn shooting_star() -> Html {
    let effects = use_effects();
    let redraw = use_force_update();
    let comet = {
        let config = effects.comet.clone();
        use_mut_ref(move || {
            Comet::new(BrowserScheduler, entropy(), config, move || redraw.force_update())
        })
    };

    let flight = comet.borrow().flight();
    match flight {
        // A fresh key per flight re-creates the element so the animation replays.
        Some(flight) => html! {
            <div
                key={flight.seq}
                class="shooting-star-element"
                style={format!(
                    "left: {:.2}vw; top: {:.2}vh; animation: shooting 1.2s ease-in-out forwards;",
                    flight.left, flight.top
                )}
                aria-hidden="true"
            />
        },
        None => html! {},
    }
}

pub const SKY_STYLE: &str = r#"
    .falling-stars {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        overflow: hidden;
        z-index: 0;
        pointer-events: none;
    }
    .star {
        position: absolute;
        background: #8B5CF6;
        border-radius: 50%;
        opacity: 0.8;
        filter: drop-shadow(0 0 2px #8B5CF6);
        animation-name: fall;
        animation-timing-function: linear;
        animation-iteration-count: infinite;
    }
    @keyframes fall {
        0% {
            transform: translateY(-10px);
            opacity: 0.8;
        }
        100% {
            transform: translateY(110vh);
            opacity: 0;
        }
    }
    .shooting-star-element {
        position: fixed;
        width: 100px;
        height: 2px;
        background: linear-gradient(90deg, #8B5CF6, rgba(139, 92, 246, 0.6), rgba(139, 92, 246, 0));
        border-radius: 9999px;
        filter: drop-shadow(0 0 6px #8B5CF6);
        opacity: 0;
        transform: translateX(0) translateY(0) rotate(45deg);
        pointer-events: none;
        z-index: 0;
    }
    @keyframes shooting {
        0% {
            opacity: 1;
            transform: translateX(0) translateY(0) rotate(45deg);
        }
        100% {
            opacity: 0;
            transform: translateX(120vw) translateY(120vh) rotate(45deg);
        }
    }
"#;
