use yew::prelude::*;

use crate::engine::image::ImageSource;

#[derive(Properties, PartialEq)]
pub struct FallbackImgProps {
    pub src: AttrValue,
    pub fallback: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

/// `<img>` that swaps to `fallback` the first time loading fails. New `src` or
/// `fallback` props start over with a fresh source.
#[function_component(FallbackImg)]
pub fn fallback_img(props: &FallbackImgProps) -> Html {
    let source = {
        let src = props.src.to_string();
        let fallback = props.fallback.to_string();
        use_state(move || ImageSource::new(src, fallback))
    };

    {
        let source = source.clone();
        use_effect_with_deps(
            move |(src, fallback)| {
                if !source.is_for(src, fallback) {
                    source.set(ImageSource::new(src.to_string(), fallback.to_string()));
                }
                || ()
            },
            (props.src.clone(), props.fallback.clone()),
        );
    }

    let onerror = {
        let source = source.clone();
        Callback::from(move |_: Event| {
            let mut next = (*source).clone();
            if next.fail() {
                source.set(next);
            }
        })
    };

    html! {
        <img
            src={source.current().to_string()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            style={props.style.clone()}
            {onerror}
        />
    }
}
