use yew::prelude::*;

use crate::components::animated_text::AnimatedHeading;
use crate::components::star_shower::StarShower;

const SERVICES: [(&str, &str, &str); 5] = [
    (
        "Website Development",
        "Crafting stunning and responsive websites tailored to your business needs.",
        "Explore Web Solutions",
    ),
    (
        "Mobile App Development",
        "Building intuitive and high-performance mobile applications for iOS and Android.",
        "View Mobile Apps",
    ),
    (
        "Device Developments",
        "Innovating cutting-edge solutions for embedded systems and IoT devices.",
        "Explore IoT Innovations",
    ),
    (
        "Cloud Development",
        "Leveraging cloud technologies for scalable, secure, and robust applications.",
        "Cloud Services",
    ),
    (
        "Game Development",
        "Creating engaging and immersive gaming experiences across various platforms.",
        "Play Our Games",
    ),
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services">
            <AnimatedHeading class="services-heading" text="Our Development Services" />

            <div class="services-grid">
                { for SERVICES.iter().map(|(heading, description, button)| html! {
                    <StarShower key={*heading} class="service-card">
                        <h2 class="service-title">{ *heading }</h2>
                        <p class="service-text">{ *description }</p>
                        <button class="service-button">{ *button }</button>
                    </StarShower>
                }) }
            </div>

            <style>
                {r#"
                .services {
                    padding: 1.5rem;
                    background: linear-gradient(to bottom right, #3b0764, #111827);
                    border-radius: 1.5rem;
                }
                .services-heading {
                    font-size: 3rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .services-heading span {
                    display: inline-block;
                    background: linear-gradient(to right, #e879f9, #a855f7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: highlight 1.5s ease-in-out infinite;
                }
                @keyframes highlight {
                    0% { filter: brightness(100%); }
                    50% { filter: brightness(140%); }
                    100% { filter: brightness(100%); }
                }
                .services-grid {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    animation: fadeIn 0.6s ease-out both;
                }
                @keyframes fadeIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .service-card {
                    width: 100%;
                    max-width: 24rem;
                }
                .service-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                    background: linear-gradient(to right, #c084fc, #d946ef);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .service-text {
                    color: #e5e7eb;
                    margin-bottom: 1.5rem;
                }
                .service-button {
                    background: linear-gradient(to right, #9333ea, #ec4899);
                    color: white;
                    font-weight: 700;
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: transform 0.3s;
                }
                .service-button:hover {
                    transform: scale(1.05);
                }
                "#}
            </style>
        </section>
    }
}
