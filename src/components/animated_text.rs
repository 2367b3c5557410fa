use yew::prelude::*;

use crate::engine::stagger::{stagger, Glyph};

#[derive(Properties, PartialEq)]
pub struct AnimatedHeadingProps {
    pub text: AttrValue,
    #[prop_or(0.05)]
    pub delay_increment: f64,
    #[prop_or_else(|| AttrValue::from("h1"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[hook]
fn use_glyphs(text: AttrValue, increment: f64) -> std::rc::Rc<Vec<Glyph>> {
    use_memo(|(text, increment)| stagger(text, *increment), (text, increment))
}

fn glyph_spans(glyphs: &[Glyph]) -> Html {
    glyphs
        .iter()
        .map(|g| {
            html! {
                <span key={g.index} style={g.style()}>{ g.ch.to_string() }</span>
            }
        })
        .collect()
}

/// Heading whose letters reveal one after another.
#[function_component(AnimatedHeading)]
pub fn animated_heading(props: &AnimatedHeadingProps) -> Html {
    let glyphs = use_glyphs(props.text.clone(), props.delay_increment);

    html! {
        <@{props.tag.to_string()} class={props.class.clone()} aria-label={props.text.clone()}>
            { glyph_spans(&glyphs) }
        </@>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedLinkProps {
    pub text: AttrValue,
    pub href: AttrValue,
    #[prop_or(0.05)]
    pub delay_increment: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedLink)]
pub fn animated_link(props: &AnimatedLinkProps) -> Html {
    let glyphs = use_glyphs(props.text.clone(), props.delay_increment);

    html! {
        <a href={props.href.clone()} class={classes!("nav-link", props.class.clone())} aria-label={props.text.clone()}>
            { glyph_spans(&glyphs) }
        </a>
    }
}
