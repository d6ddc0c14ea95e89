use yew::prelude::*;

pub mod config;
pub mod content;
pub mod dom;
pub mod error;

pub mod motion {
    pub mod parallax;
    pub mod scramble;
    pub mod scroll;
    pub mod transition;
}

pub mod hooks {
    pub mod scramble;
    pub mod scroll;
}

pub mod components {
    pub mod back_to_top;
    pub mod cards;
    pub mod icons;
    pub mod menu_state;
    pub mod mobile_menu;
    pub mod nav;
    pub mod scramble_text;
}

pub mod sections {
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod pricing;
    pub mod showcase;
}

pub mod pages {
    pub mod landing;
}

use hooks::scroll::ScrollProvider;
use pages::landing::Landing;

#[function_component]
pub fn App() -> Html {
    html! {
        <ScrollProvider>
            <Landing />
        </ScrollProvider>
    }
}
