use log::info;
use web_sys::window;
use yew::prelude::*;

use crate::components::animated_text::AnimatedHeading;
use crate::components::buttons::RoundedButton;
use crate::components::fallback_img::FallbackImg;
use crate::components::splashes::{PurpleSplashes, WhiteSplashes, SPLASH_STYLE};
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::engine::image::placeholder;

fn tel_href(phone: &str) -> String {
    format!("tel:{}", phone)
}

fn mail_href(email: &str) -> String {
    format!("mailto:{}", email)
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let call = Callback::from(|_: MouseEvent| {
        info!("Free call requested");
        if let Some(window) = window() {
            let _ = window.location().set_href(&tel_href(CONTACT_PHONE));
        }
    });

    html! {
        <section class="contact">
            <WhiteSplashes />
            <PurpleSplashes />

            <div class="contact-main">
                <FallbackImg
                    class="contact-avatar"
                    src="https://storage.googleapis.com/a1aa/image/889a3ddb-c76e-4589-287f-fc52e2089bbd.jpg"
                    fallback={placeholder(80, "9b4dff", "FFFFFF", "Avatar")}
                    alt="Portrait of a man with glasses and curly hair, circular crop"
                />
                <AnimatedHeading class="animated-highlight-heading" text="Meet the Minds Behind the Magic" />
                <p class="contact-pitch">
                    {"Get a free 30-minute strategy session with our lead designer."}
                </p>
                <RoundedButton text="Do a Free Call" class="contact-call" onclick={call} />
                <p class="contact-alt">{"Prefer Email?"}</p>
                <a class="contact-mail" href={mail_href(CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
            </div>

            <style>
                { SPLASH_STYLE }
                {r#"
                .contact {
                    position: relative;
                    overflow: hidden;
                    min-height: 80vh;
                    background-color: #1a0e1f;
                    border-radius: 1.5rem;
                }
                .contact-main {
                    position: relative;
                    z-index: 10;
                    padding: 5rem 1rem;
                    max-width: 36rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .contact-avatar {
                    width: 80px;
                    height: 80px;
                    border-radius: 9999px;
                    margin: 0 auto 1.5rem;
                    display: block;
                }
                .animated-highlight-heading {
                    font-size: 2.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                    line-height: 1.25;
                }
                .animated-highlight-heading span {
                    opacity: 0.7;
                    display: inline-block;
                    color: white;
                    animation: highlightPulse 2.5s ease infinite;
                    animation-fill-mode: forwards;
                }
                @keyframes highlightPulse {
                    0% { opacity: 0.7; color: white; transform: translateY(0); }
                    50% { opacity: 1; color: #9b4dff; transform: translateY(-5%); }
                    100% { opacity: 0.7; color: white; transform: translateY(0); }
                }
                .contact-pitch {
                    font-size: 0.95rem;
                    margin-bottom: 2rem;
                }
                .contact-call {
                    background: #ec4899;
                    color: black;
                    margin-bottom: 3.5rem;
                }
                .contact-call:hover {
                    background: #db2777;
                }
                .contact-alt {
                    font-size: 0.875rem;
                    margin-bottom: 0.25rem;
                }
                .contact-mail {
                    color: white;
                    font-weight: 600;
                    font-size: 0.875rem;
                    text-decoration: underline;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links_point_at_the_studio() {
        assert_eq!(tel_href(CONTACT_PHONE), "tel:+919506060787");
        assert_eq!(mail_href(CONTACT_EMAIL), "mailto:chris@webrocket.studio");
    }
}
