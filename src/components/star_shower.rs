use yew::prelude::*;

use crate::config::use_effects;
use crate::engine::entropy;
use crate::engine::scheduler::BrowserScheduler;
use crate::engine::shower::{Particle, Shower};

#[derive(Properties, PartialEq)]
pub struct StarShowerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn star_style(star: &Particle) -> String {
    let (dx, dy) = star.displacement();
    format!(
        "left: {:.2}%; top: {:.2}%; --dx: {:.2}vw; --dy: {:.2}vh; animation: starFall {:.2}s linear forwards {:.2}s;",
        star.start.x, star.start.y, dx, dy, star.duration, star.delay
    )
}

/// Card that rains shooting stars while the pointer is over it.
#[function_component(StarShower)]
pub fn star_shower(props: &StarShowerProps) -> Html {
    let effects = use_effects();
    let redraw = use_force_update();
    let shower = {
        let redraw = redraw.clone();
        let config = effects.shower.clone();
        use_mut_ref(move || {
            Shower::new(BrowserScheduler, entropy(), config, move || redraw.force_update())
        })
    };

    let onmouseenter = {
        let shower = shower.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            shower.borrow_mut().start();
            redraw.force_update();
        })
    };
    let onmouseleave = {
        let shower = shower.clone();
        Callback::from(move |_: MouseEvent| {
            shower.borrow_mut().stop();
            redraw.force_update();
        })
    };

    let shower = shower.borrow();
    let hovered = shower.is_active();

    html! {
        <div
            class={classes!("shower-card", hovered.then(|| "hovered"), props.class.clone())}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="shower-sky" aria-hidden="true">
                { for shower.particles().iter().map(|star| html! {
                    <div
                        key={star.id}
                        class={classes!("shower-star", (!hovered).then(|| "fading"))}
                        style={star_style(star)}
                    />
                }) }
            </div>
            <div class="shower-content">
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .shower-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    padding: 1.5rem;
                    background: linear-gradient(to top right, #581c87, #1f2937);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    transition: transform 0.3s ease-in-out, box-shadow 0.3s ease-in-out;
                }
                .shower-card.hovered {
                    transform: scale(1.05);
                    box-shadow: 0 25px 50px -12px rgba(168, 85, 247, 0.5);
                }
                .shower-sky {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                    z-index: 10;
                }
                .shower-star {
                    position: absolute;
                    width: 4px;
                    height: 4px;
                    border-radius: 9999px;
                    background: radial-gradient(circle at center, white 0%, transparent 70%);
                    box-shadow: 0 0 10px 5px rgba(255, 255, 255, 0.7), 0 0 20px 10px rgba(167, 139, 250, 0.5);
                    transition: opacity 0.3s;
                }
                .shower-star.fading {
                    opacity: 0;
                }
                .shower-content {
                    position: relative;
                    z-index: 20;
                    text-align: center;
                }
                @keyframes starFall {
                    0% {
                        transform: translate(0, 0);
                        opacity: 1;
                    }
                    100% {
                        transform: translate(var(--dx), var(--dy));
                        opacity: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::shower::{Edge, Point};

    #[test]
    fn star_style_encodes_travel_as_custom_properties() {
        let star = Particle {
            id: 1,
            edge: Edge::Left,
            start: Point { x: -10.0, y: 40.0 },
            end: Point { x: 110.0, y: 55.0 },
            duration: 2.0,
            delay: 0.25,
        };
        assert_eq!(
            star_style(&star),
            "left: -10.00%; top: 40.00%; --dx: 120.00vw; --dy: 15.00vh; animation: starFall 2.00s linear forwards 0.25s;"
        );
    }
}
