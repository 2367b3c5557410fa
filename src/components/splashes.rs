use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::use_effects;
use crate::engine::parallax::{pointer_offset, Offset, SplashLayer};

/// Size, opacity and blur of each purple splash, front to back.
const PURPLE_LOOKS: [(f64, f64, u32); 3] = [(220.0, 0.2, 14), (140.0, 0.15, 10), (90.0, 0.12, 8)];

/// Floating white blobs; purely CSS-animated.
#[function_component(WhiteSplashes)]
pub fn white_splashes() -> Html {
    let blobs = [
        (100, 20, 10, 0),
        (60, 60, 80, 2),
        (140, 75, 25, 4),
    ];
    html! {
        <>
            { for blobs.iter().map(|(size, top, left, delay)| html! {
                <div
                    class="splash white-splash"
                    style={format!("width: {size}px; height: {size}px; top: {top}%; left: {left}%; animation-delay: {delay}s;")}
                />
            }) }
        </>
    }
}

/// Pairs each look with its multiplier; invalid multipliers drop their layer.
fn purple_layers(multipliers: &[f64]) -> Vec<(SplashLayer, f64, u32)> {
    PURPLE_LOOKS
        .iter()
        .zip(multipliers)
        .filter_map(|((size, opacity, blur), m)| match SplashLayer::centered(*size, *m) {
            Ok(layer) => Some((layer, *opacity, *blur)),
            Err(e) => {
                warn!("Skipping splash layer: {}", e);
                None
            }
        })
        .collect()
}

/// Purple blobs that follow the pointer, each damped by its own multiplier.
#[function_component(PurpleSplashes)]
pub fn purple_splashes() -> Html {
    let effects = use_effects();
    let layers = use_memo(|multipliers| purple_layers(multipliers), effects.splash_multipliers.clone());
    let offset = use_state(Offset::default);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                    // Viewport size is read per event so resizes need no extra listener.
                    if let Some(window) = web_sys::window() {
                        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                        let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                        offset.set(pointer_offset(
                            f64::from(e.client_x()),
                            f64::from(e.client_y()),
                            width,
                            height,
                        ));
                    }
                });
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "mousemove",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <>
            { for layers.iter().enumerate().map(|(i, (layer, opacity, blur))| html! {
                <div
                    class="purple-splash"
                    style={format!(
                        "width: {size}px; height: {size}px; top: {}%; left: {}%; transform: {}; opacity: {opacity}; filter: blur({blur}px); z-index: {};",
                        layer.top,
                        layer.left,
                        layer.transform(*offset),
                        5 - i as i32,
                        size = layer.size,
                    )}
                />
            }) }
        </>
    }
}

pub const SPLASH_STYLE: &str = r#"
    .splash {
        position: absolute;
        border-radius: 50%;
        filter: blur(12px);
        mix-blend-mode: screen;
        pointer-events: none;
        transition: transform 0.1s ease-out;
        opacity: 0.15;
    }
    .white-splash {
        background: white;
        opacity: 0.12;
        filter: blur(10px);
        animation: floatWhite 6s ease-in-out infinite;
    }
    @keyframes floatWhite {
        0%, 100% {
            transform: translateY(0);
            opacity: 0.12;
        }
        50% {
            transform: translateY(-15px);
            opacity: 0.25;
        }
    }
    .purple-splash {
        position: absolute;
        background: #9b4dff;
        border-radius: 50%;
        pointer-events: none;
        mix-blend-mode: screen;
        transition: transform 0.1s ease-out;
    }
"#;
