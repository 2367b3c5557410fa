use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::animated_text::AnimatedHeading;
use crate::components::fallback_img::FallbackImg;
use crate::config::HERO_PLACEHOLDER;
use crate::pages::contact::Contact;
use crate::pages::services::Services;
use crate::pages::showcase::Showcase;
use crate::pages::testimonials::Testimonials;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1517830847971-8848d6139ed2?q=80&w=2940&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

#[derive(Properties, PartialEq)]
pub struct HeroHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub image_url: AttrValue,
    pub image_alt: AttrValue,
}

#[function_component(HeroHeader)]
pub fn hero_header(props: &HeroHeaderProps) -> Html {
    html! {
        <header class="hero">
            <AnimatedHeading
                class="hero-heading"
                text={props.title.clone()}
                delay_increment={0.1}
            />
            <p class="hero-subtitle">{ props.subtitle.clone() }</p>
            <FallbackImg
                class="hero-image"
                src={props.image_url.clone()}
                fallback={HERO_PLACEHOLDER}
                alt={props.image_alt.clone()}
            />
        </header>
    }
}

fn copyright(year: i32) -> String {
    format!("© {} WebROCKET. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-links">
                <a href="/#">{"About"}</a>
                <a href="/#">{"Blog"}</a>
                <a href="/#">{"Careers"}</a>
                <a href="/pricing">{"Pricing"}</a>
            </div>
            <p>{ copyright(Local::now().year()) }</p>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <HeroHeader
                image_url={HERO_IMAGE}
                title="Crafted Works, Bold Results"
                subtitle="Showcasing creative projects that deliver impact and inspire growth."
                image_alt="People working in office with large windows and wooden walls"
            />
            <Showcase />
            <Contact />
            <Testimonials />
            <Services />
            <section class="coming-soon">
                <h2>{"More Facilities are coming soon !"}</h2>
                <p>{"This is where you will get every thing automated without having any overhead."}</p>
            </section>
            <Footer />

            <style>
                {r#"
                .home {
                    background: #0b0710;
                    color: white;
                    padding: 6rem 1.5rem 0;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .hero {
                    text-align: center;
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .hero-heading {
                    font-size: 3.5rem;
                    font-weight: 700;
                    line-height: 1.1;
                }
                .hero-heading span {
                    display: inline-block;
                    opacity: 0;
                    animation: heroReveal 0.6s ease-out forwards;
                }
                @keyframes heroReveal {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-subtitle {
                    margin: 1.5rem auto 2.5rem;
                    max-width: 40rem;
                    color: #d1d5db;
                }
                .hero-image {
                    width: 100%;
                    border-radius: 1.5rem;
                    object-fit: cover;
                    height: 300px;
                }
                .coming-soon {
                    text-align: center;
                    padding: 4rem 1rem;
                    font-size: 1.5rem;
                    color: #c084fc;
                }
                .site-footer {
                    border-top: 1px solid #1f2937;
                    padding: 2rem 0;
                    text-align: center;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 1rem;
                }
                .footer-links a {
                    color: #d1d5db;
                    text-decoration: none;
                }
                @media (max-width: 640px) {
                    .hero-heading {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_given_year() {
        assert_eq!(copyright(2031), "© 2031 WebROCKET. All rights reserved.");
    }
}
