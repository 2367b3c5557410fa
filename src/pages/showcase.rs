use yew::prelude::*;

use crate::components::animated_text::AnimatedHeading;
use crate::components::fallback_img::FallbackImg;
use crate::components::sky::{FallingStars, ShootingStar, SKY_STYLE};
use crate::engine::image::placeholder;

struct Step {
    title: &'static str,
    description: &'static str,
    src: &'static str,
    alt: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        title: "Plan",
        description: "Defining goals, gathering requirements, and strategizing the project roadmap.",
        src: "https://storage.googleapis.com/a1aa/image/plan.jpg",
        alt: "Illustration of a team planning with a whiteboard and sticky notes.",
    },
    Step {
        title: "Build",
        description: "Developing and iterating on solutions, focusing on robust and scalable architecture.",
        src: "https://storage.googleapis.com/a1aa/image/build.jpg",
        alt: "Illustration of a developer coding on a laptop.",
    },
    Step {
        title: "Deploy",
        description: "Launching and integrating the solution, ensuring seamless delivery and performance.",
        src: "https://storage.googleapis.com/a1aa/image/deploy.jpg",
        alt: "Illustration of a rocket launch, symbolizing deployment.",
    },
];

#[function_component(Showcase)]
pub fn showcase() -> Html {
    html! {
        <section class="showcase">
            <FallingStars />
            <ShootingStar />

            <div class="showcase-content">
                <AnimatedHeading
                    tag="h2"
                    class="heading"
                    text="Explore Our Creative Work and Success Stories"
                />
                <p class="fade-text">
                    {"Browse through a curated selection of our finest projects across industries. Each design showcases our commitment to innovation, strategy, and excellence to elevate brands and deliver measurable results that leave a lasting impression."}
                </p>
                <div class="timeline">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div key={step.title} class="timeline-step">
                            <FallbackImg
                                src={step.src}
                                fallback={placeholder(128, "8B5CF6", "FFFFFF", step.title)}
                                alt={step.alt}
                                style={format!("animation-delay: {:.1}s;", 0.1 * i as f64)}
                            />
                            <h3>{ step.title }</h3>
                            <p>{ step.description }</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                { SKY_STYLE }
                {r#"
                .showcase {
                    position: relative;
                    background: white;
                    color: #0f172a;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    padding: 3rem 1.5rem;
                    margin-bottom: 3rem;
                }
                .showcase-content {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .heading {
                    font-size: 2.25rem;
                    font-weight: 600;
                    line-height: 1.25;
                    user-select: none;
                }
                .heading span {
                    opacity: 0.6;
                    display: inline-block;
                    color: #1e293b;
                    animation: highlightAnim 1.5s ease infinite;
                    animation-fill-mode: forwards;
                }
                @keyframes highlightAnim {
                    0% { opacity: 0.6; color: #1e293b; transform: translateY(0); }
                    50% { opacity: 1; color: #8B5CF6; transform: translateY(-10%); }
                    100% { opacity: 0.6; color: #1e293b; transform: translateY(0); }
                }
                .fade-text {
                    margin-top: 1.5rem;
                    color: #475569;
                    line-height: 1.6;
                    opacity: 0;
                    animation: fadeInText 2s ease forwards;
                    animation-delay: 2.6s;
                }
                @keyframes fadeInText {
                    to { opacity: 1; }
                }
                .timeline {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .timeline-step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 1rem;
                }
                .timeline-step img {
                    width: 8rem;
                    height: 8rem;
                    object-fit: cover;
                    border-radius: 9999px;
                    margin-bottom: 1rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    opacity: 0;
                    animation: timelineStepPopIn 0.5s ease-out forwards;
                }
                @keyframes timelineStepPopIn {
                    0% { transform: translateY(10px); opacity: 0; }
                    100% { transform: translateY(0); opacity: 1; }
                }
                @media (max-width: 640px) {
                    .timeline {
                        grid-template-columns: 1fr;
                    }
                    .heading {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
