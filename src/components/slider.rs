//! Minimal single-slide slider. It owns the slide index and hands its host a
//! [`SliderHandle`] for driving it.

use std::rc::Rc;

use yew::prelude::*;

use crate::engine::carousel::SlideControl;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideCommand {
    Prev,
    Next,
    Resize(usize),
}

/// Current slide of `len`; stops at both ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideTrack {
    pub index: usize,
    pub len: usize,
}

impl Reducible for SlideTrack {
    type Action = SlideCommand;

    fn reduce(self: Rc<Self>, action: SlideCommand) -> Rc<Self> {
        let (index, len) = match action {
            SlideCommand::Prev => (self.index.saturating_sub(1), self.len),
            SlideCommand::Next => ((self.index + 1).min(self.len.saturating_sub(1)), self.len),
            SlideCommand::Resize(len) => (self.index.min(len.saturating_sub(1)), len),
        };
        if index == self.index && len == self.len {
            return self;
        }
        Rc::new(SlideTrack { index, len })
    }
}

#[derive(Clone)]
pub struct SliderHandle {
    dispatch: UseReducerDispatcher<SlideTrack>,
}

impl SlideControl for SliderHandle {
    fn slide_prev(&self) {
        self.dispatch.dispatch(SlideCommand::Prev);
    }

    fn slide_next(&self) {
        self.dispatch.dispatch(SlideCommand::Next);
    }
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub on_ready: Callback<SliderHandle>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let track = use_reducer(SlideTrack::default);
    let len = props.children.len();

    {
        let dispatch = track.dispatcher();
        use_effect_with_deps(
            move |len| {
                dispatch.dispatch(SlideCommand::Resize(*len));
                || ()
            },
            len,
        );
    }
    {
        let on_ready = props.on_ready.clone();
        let dispatch = track.dispatcher();
        use_effect_with_deps(
            move |_| {
                on_ready.emit(SliderHandle { dispatch });
                || ()
            },
            (),
        );
    }

    html! {
        <div class="slider">
            <div
                class="slider-track"
                style={format!("transform: translateX(-{}%);", track.index * 100)}
            >
                { for props.children.iter().map(|slide| html! {
                    <div class="slider-slide">{ slide }</div>
                }) }
            </div>
        </div>
    }
}
