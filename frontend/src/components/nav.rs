use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::back_to_top::scroll_to_top;
use crate::components::icons::{Icon, IconView};
use crate::components::menu_state::{MenuAction, MenuState};
use crate::components::mobile_menu::MobileMenu;
use crate::content::{Brand, Link};
use crate::hooks::scroll::use_scroll_flags;
use crate::motion::transition::{stylesheet, Transition, Trigger};

fn nav_css() -> String {
    stylesheet(
        ".brand-mark",
        &[Transition::new("transform", "scale(1)", "scale(1.1)")
            .on(Trigger::GroupHover(".nav-brand"))
            .duration(200)],
    )
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    #[prop_or_default]
    pub brand: Brand,
    #[prop_or_default]
    pub links: Vec<Link>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_scroll_flags().scrolled;
    let menu = use_reducer(MenuState::default);

    {
        let dispatcher = menu.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(action) = MenuAction::from_key(&e.key()) {
                dispatcher.dispatch(action);
            }
        });
    }

    let open_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| {
            debug!("menu button pressed");
            dispatcher.dispatch(MenuAction::Open);
        })
    };

    let close_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(MenuAction::Close))
    };

    html! {
        <>
            <style>{nav_css()}</style>
            <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
                <div class={classes!("nav-shell", if scrolled { "glass" } else { "transparent" })}>
                    <div class="nav-brand" onclick={Callback::from(|_: MouseEvent| scroll_to_top())}>
                        <div class="brand-mark">
                            <IconView icon={Icon::Zap} size={20} filled={true} />
                        </div>
                        <span class="brand-name">
                            {props.brand.name.clone()}
                            <span class="accent">{props.brand.suffix.clone()}</span>
                        </span>
                    </div>

                    <div class="nav-links">
                        { for props.links.iter().map(|link| html! {
                            <a class="nav-link" href={link.href.clone()}>{link.label.clone()}</a>
                        }) }
                        <button class="sign-in glass">{"Sign In"}</button>
                    </div>

                    <button class="menu-button glass" aria-label="Open Menu" onclick={open_menu}>
                        <IconView icon={Icon::Menu} />
                    </button>
                </div>
            </nav>
            {
                if menu.is_open {
                    html! {
                        <MobileMenu
                            brand={props.brand.clone()}
                            links={props.links.clone()}
                            on_close={close_menu}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
