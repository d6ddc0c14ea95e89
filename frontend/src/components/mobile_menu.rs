use log::{debug, warn};
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{Brand, Link};
use crate::dom::BodyScrollLock;
use crate::motion::transition::{stagger_style, stylesheet, Transition, Trigger};

fn overlay_css() -> String {
    let mut css = stylesheet(
        ".mobile-menu",
        &[
            Transition::new("opacity", "0", "1").on(Trigger::Mount),
            Transition::new("transform", "scale(1.1)", "scale(1)").on(Trigger::Mount),
        ],
    );
    css.push_str(&stylesheet(
        ".mobile-link",
        &[
            Transition::new("opacity", "0", "1").on(Trigger::Mount).duration(400),
            Transition::new("transform", "translateY(20px)", "translateY(0)").on(Trigger::Mount),
        ],
    ));
    css
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    #[prop_or_default]
    pub brand: Brand,
    #[prop_or_default]
    pub links: Vec<Link>,
    pub on_close: Callback<()>,
}

/// Full-screen navigation shown instead of the inline links on small screens.
///
/// Only mounted while open; the page behind it cannot scroll meanwhile.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    use_effect_with_deps(
        |_| {
            debug!("mobile menu opened");
            let lock = match BodyScrollLock::acquire() {
                Ok(lock) => Some(lock),
                Err(e) => {
                    warn!("page stays scrollable behind menu: {}", e);
                    None
                }
            };
            move || {
                drop(lock);
                debug!("mobile menu closed");
            }
        },
        (),
    );

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="mobile-menu" role="dialog" aria-modal="true">
            <style>{overlay_css()}</style>
            <div class="mobile-menu-head">
                <div class="nav-brand">
                    <div class="brand-mark">
                        <IconView icon={Icon::Zap} size={18} filled={true} />
                    </div>
                    <span class="brand-name">{props.brand.name.clone()}</span>
                </div>
                <button class="menu-close glass" aria-label="Close Menu" onclick={close.clone()}>
                    <IconView icon={Icon::X} size={28} />
                </button>
            </div>
            <div class="mobile-links">
                { for props.links.iter().enumerate().map(|(index, link)| html! {
                    <a
                        class="mobile-link"
                        href={link.href.clone()}
                        style={stagger_style(index)}
                        onclick={close.clone()}
                    >
                        {link.label.clone()}
                    </a>
                }) }
            </div>
            <div class="mobile-menu-foot">
                <button class="mobile-cta" onclick={close}>{"Get Started"}</button>
            </div>
        </div>
    }
}
