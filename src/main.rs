use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod engine;
mod components {
    pub mod animated_text;
    pub mod buttons;
    pub mod carousel;
    pub mod fallback_img;
    pub mod sky;
    pub mod slider;
    pub mod splashes;
    pub mod star_shower;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod pricing;
    pub mod services;
    pub mod showcase;
    pub mod testimonials;
}

use components::animated_text::AnimatedLink;
use components::buttons::RoundedButton;
use config::{load_effects, EffectsConfig};
use pages::{home::Home, pricing::Pricing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"404"}</h1>
                    <Link<Route> to={Route::Home} classes="nav-link">{"Back home"}</Link<Route>>
                </main>
            }
        }
    }
}

const NAV_LINKS: [(&str, &str); 6] = [
    ("About", "/#"),
    ("Blog", "/#"),
    ("Portfolio", "/#"),
    ("Careers", "/#"),
    ("Get a Quote", "/pricing"),
    ("Contact", "/#"),
];

const SERVICE_LINKS: [&str; 5] = [
    "Website Development",
    "Mobile App Development",
    "Device Developments",
    "Cloud Development",
    "Game Development",
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let services_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let nav_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let document = window.document();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = document
                            .as_ref()
                            .and_then(|d| d.document_element())
                            .map(|el| el.scroll_top())
                            .unwrap_or(0);
                        is_scrolled.set(scroll_top > 50);
                    }) as Box<dyn FnMut()>);
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        warn!("Could not attach scroll listener");
                    }
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let services_open = services_open.clone();
        use_click_away(nav_ref.clone(), move |_: Event| {
            services_open.set(false);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let services_open = services_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            services_open.set(false);
        })
    };

    let toggle_services = {
        let services_open = services_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            services_open.set(!*services_open);
        })
    };

    let schedule_call = Callback::from(|_: MouseEvent| {
        info!("Schedule a call clicked");
    });

    html! {
        <nav ref={nav_ref} class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-web">{"Web"}</span>
                    <span class="logo-rocket">{"ROCKET"}</span>
                </Link<Route>>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(text, href)| html! {
                        <AnimatedLink key={*text} text={*text} href={*href} />
                    }) }
                </div>

                <RoundedButton
                    class="nav-call"
                    text="Schedule a Call Now"
                    onclick={schedule_call.clone()}
                />

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                <button class="mobile-services-toggle" onclick={toggle_services}>
                    {"Services"}
                    <span class={classes!("chevron", (*services_open).then(|| "open"))}>{"▾"}</span>
                </button>
                {
                    if *services_open {
                        html! {
                            <div class="mobile-services">
                                { for SERVICE_LINKS.iter().map(|service| html! {
                                    <a key={*service} href="/#" onclick={close_menu.clone()}>{ *service }</a>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                { for NAV_LINKS.iter().map(|(text, href)| html! {
                    <a key={*text} class="mobile-link" href={*href} onclick={close_menu.clone()}>{ *text }</a>
                }) }
                <RoundedButton
                    class="nav-call"
                    text="Schedule a Call Now"
                    onclick={schedule_call}
                />
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background-color 0.3s ease;
                }
                .top-nav.scrolled {
                    background-color: rgba(11, 7, 16, 0.9);
                    backdrop-filter: blur(8px);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 800;
                    text-decoration: none;
                    color: white;
                }
                .logo-rocket {
                    color: #a855f7;
                }
                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #e5e7eb;
                    text-decoration: none;
                }
                .nav-link span {
                    display: inline-block;
                    opacity: 0;
                    animation: navReveal 0.4s ease-out forwards;
                }
                @keyframes navReveal {
                    from { opacity: 0; transform: translateY(-6px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .rounded-button {
                    border: none;
                    border-radius: 9999px;
                    padding: 0.75rem 2rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background-color 0.3s;
                }
                .nav-call {
                    background: #9333ea;
                    color: white;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: white;
                }
                .mobile-menu {
                    display: none;
                }
                .not-found {
                    min-height: 60vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: white;
                }
                @media (max-width: 768px) {
                    .nav-links,
                    .nav-content > .nav-call {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                    .mobile-menu.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem 1.5rem 2rem;
                        background: #0b0710;
                    }
                    .mobile-menu a {
                        color: #e5e7eb;
                        text-decoration: none;
                    }
                    .mobile-services-toggle {
                        background: none;
                        border: none;
                        color: #e5e7eb;
                        text-align: left;
                        padding: 0;
                        font-size: 1rem;
                    }
                    .chevron.open {
                        display: inline-block;
                        transform: rotate(180deg);
                    }
                    .mobile-services {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        padding-left: 1rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let effects = use_memo(|_| Rc::new(load_effects()), ());

    html! {
        <ContextProvider<Rc<EffectsConfig>> context={(*effects).clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<EffectsConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging; a second init only means a logger is already set
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
