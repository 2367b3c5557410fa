use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoundedButtonProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(RoundedButton)]
pub fn rounded_button(props: &RoundedButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("rounded-button", props.class.clone())}
            onclick={props.onclick.clone()}
        >
            { props.text.clone() }
        </button>
    }
}
