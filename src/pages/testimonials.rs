use yew::prelude::*;

use crate::components::carousel::Carousel;

#[derive(Properties, PartialEq)]
pub struct TestimonialProps {
    pub image: AttrValue,
    pub details: AttrValue,
    pub name: AttrValue,
    pub position: AttrValue,
}

#[function_component(SingleTestimonial)]
pub fn single_testimonial(props: &TestimonialProps) -> Html {
    html! {
        <div class="testimonial">
            <div class="testimonial-image">
                <img src={props.image.clone()} alt={props.name.clone()} />
            </div>
            <div class="testimonial-body">
                <img class="testimonial-review" src="https://via.placeholder.com/80x20?text=Review" alt="review" />
                <p class="testimonial-details">{ props.details.clone() }</p>
                <h4>{ props.name.clone() }</h4>
                <p class="testimonial-position">{ props.position.clone() }</p>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <Carousel>
                <SingleTestimonial
                    image="https://via.placeholder.com/300x300.png?text=My+Branding+Hub"
                    details="They built an incredible online presence for our brand. Our engagement skyrocketed within a few months!"
                    name="My Branding Hub"
                    position="Creative Studio"
                />
                <SingleTestimonial
                    image="https://via.placeholder.com/300x300.png?text=Zonkey+Classes"
                    details="Their development support for our EdTech platform has been game-changing. Smooth, scalable, and fast."
                    name="Zonkey Classes"
                    position="Online Learning"
                />
                <SingleTestimonial
                    image="https://via.placeholder.com/300x300.png?text=The+Shade+Store"
                    details="From branding to custom development, they helped us launch a polished online store we’re proud of."
                    name="The Shade Store"
                    position="Interior Retailer"
                />
            </Carousel>

            <style>
                {r#"
                .testimonials {
                    padding: 5rem 0;
                }
                .carousel {
                    position: relative;
                    padding-bottom: 5rem;
                }
                .slider {
                    overflow: hidden;
                }
                .slider-track {
                    display: flex;
                    transition: transform 0.4s ease;
                }
                .slider-slide {
                    flex: 0 0 100%;
                }
                .testimonial {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                    width: 66%;
                    margin: 0 auto;
                }
                .testimonial-image img {
                    width: 100%;
                    max-width: 280px;
                    border-radius: 0.5rem;
                }
                .testimonial-review {
                    margin-bottom: 1.75rem;
                }
                .testimonial-details {
                    font-style: italic;
                    font-size: 1.375rem;
                    line-height: 1.81;
                    color: #d1d5db;
                    margin-bottom: 2.75rem;
                }
                .testimonial h4 {
                    font-size: 1.375rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .testimonial-position {
                    color: #9ca3af;
                }
                .carousel-controls {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    display: flex;
                    justify-content: center;
                    gap: 1.25rem;
                }
                .arrow-button {
                    width: 60px;
                    height: 60px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    border: 1px solid #374151;
                    background: #1f2937;
                    color: white;
                    cursor: pointer;
                }
                .arrow-button:hover {
                    border-color: transparent;
                    filter: drop-shadow(0 4px 3px rgba(0, 0, 0, 0.07));
                }
                @media (max-width: 768px) {
                    .testimonial {
                        flex-direction: column;
                        width: 100%;
                        padding: 0 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
