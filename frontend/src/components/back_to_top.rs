use log::warn;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::dom;
use crate::hooks::scroll::use_scroll_flags;
use crate::motion::transition::{stylesheet, Transition, Trigger};

fn back_to_top_css() -> String {
    stylesheet(
        ".back-to-top",
        &[
            Transition::new("opacity", "0", "1").on(Trigger::Mount).duration(250),
            Transition::new("transform", "scale(0.5)", "scale(1)").on(Trigger::Mount),
        ],
    )
}

pub fn scroll_to_top() {
    if let Err(e) = dom::scroll_to_top() {
        warn!("scroll to top failed: {}", e);
    }
}

/// Floating button shown once the page is scrolled far enough.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_scroll_flags().show_back_to_top;

    if !visible {
        return html! {};
    }

    html! {
        <>
            <style>{back_to_top_css()}</style>
            <button
                class="back-to-top glass"
                aria-label="Scroll to top"
                onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
            >
                <IconView icon={Icon::ArrowUp} />
            </button>
        </>
    }
}
