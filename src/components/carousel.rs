use yew::prelude::*;

use crate::components::slider::{Slider, SliderHandle};
use crate::engine::carousel::CarouselHost;

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Properties, PartialEq)]
struct ArrowProps {
    left: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(ArrowButton)]
fn arrow_button(props: &ArrowProps) -> Html {
    let (class, label, path) = if props.left {
        (
            "prev-arrow",
            "Previous slide",
            "M17.5 9.5H4.15625L9.46875 4.09375C9.75 3.8125 9.75 3.375 9.46875 3.09375C9.1875 2.8125 8.75 2.8125 8.46875 3.09375L2 9.65625C1.71875 9.9375 1.71875 10.375 2 10.6562L8.46875 17.2188C8.59375 17.3438 8.78125 17.4375 8.96875 17.4375C9.15625 17.4375 9.3125 17.375 9.46875 17.25C9.75 16.9687 9.75 16.5313 9.46875 16.25L4.1875 10.9062H17.5C17.875 10.9062 18.1875 10.5937 18.1875 10.2187C18.1875 9.8125 17.875 9.5 17.5 9.5Z",
        )
    } else {
        (
            "next-arrow",
            "Next slide",
            "M18 9.6875L11.5312 3.125C11.25 2.84375 10.8125 2.84375 10.5312 3.125C10.25 3.40625 10.25 3.84375 10.5312 4.125L15.7812 9.46875H2.5C2.125 9.46875 1.8125 9.78125 1.8125 10.1562C1.8125 10.5312 2.125 10.875 2.5 10.875H15.8437L10.5312 16.2813C10.25 16.5625 10.25 17 10.5312 17.2813C10.6562 17.4063 10.8437 17.4688 11.0312 17.4688C11.2187 17.4688 11.4062 17.4062 11.5312 17.25L18 10.6875C18.2812 10.4062 18.2812 9.96875 18 9.6875Z",
        )
    };
    html! {
        <button class={classes!("arrow-button", class)} aria-label={label} onclick={props.onclick.clone()}>
            <svg width="20" height="21" viewBox="0 0 20 21" fill="currentColor" xmlns="http://www.w3.org/2000/svg">
                <path d={path} />
            </svg>
        </button>
    }
}

/// Previous/next arrows over a [`Slider`].
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let host = use_mut_ref(CarouselHost::<SliderHandle>::new);

    let on_ready = {
        let host = host.clone();
        Callback::from(move |handle: SliderHandle| {
            host.borrow_mut().attach(handle);
        })
    };
    let previous = {
        let host = host.clone();
        Callback::from(move |_: MouseEvent| host.borrow().previous())
    };
    let next = Callback::from(move |_: MouseEvent| host.borrow().next());

    html! {
        <div class="carousel">
            <Slider {on_ready}>
                { for props.children.iter() }
            </Slider>
            <div class="carousel-controls">
                <ArrowButton left={true} onclick={previous} />
                <ArrowButton left={false} onclick={next} />
            </div>
        </div>
    }
}
