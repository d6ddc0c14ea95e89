use yew::prelude::*;

use crate::hooks::scramble::use_scramble;

#[derive(Properties, PartialEq)]
pub struct ScrambleTextProps {
    pub text: AttrValue,
}

#[function_component(ScrambleText)]
pub fn scramble_text(props: &ScrambleTextProps) -> Html {
    let frame = use_scramble(&props.text);

    html! {
        <span class="scramble-text" aria-label={props.text.clone()}>{frame}</span>
    }
}
