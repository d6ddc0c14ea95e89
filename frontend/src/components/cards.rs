use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::dom;
use crate::hooks::scroll::use_scroll;
use crate::motion::transition::{stylesheet, Transition, Trigger};

pub fn feature_card_css() -> String {
    let mut css = stylesheet(
        ".feature-card",
        &[Transition::new("transform", "translateY(0)", "translateY(-10px)")],
    );
    css.push_str(&stylesheet(
        ".card-glow",
        &[Transition::new("transform", "scale(1)", "scale(1.5)")
            .on(Trigger::GroupHover(".feature-card"))
            .duration(700)],
    ));
    css.push_str(&stylesheet(
        ".learn-more",
        &[
            Transition::new("gap", "0", "0.5rem").on(Trigger::GroupHover(".feature-card")).duration(200),
            Transition::new("color", "inherit", "var(--gold)")
                .on(Trigger::GroupHover(".feature-card"))
                .duration(200),
        ],
    ));
    css
}

pub fn pricing_card_css() -> String {
    let mut css = stylesheet(
        ".pricing-card",
        &[
            Transition::new("opacity", "0", "1").on(Trigger::Condition("revealed")).duration(600),
            Transition::new("transform", "translateY(30px)", "translateY(0)")
                .on(Trigger::Condition("revealed"))
                .duration(600),
        ],
    );
    css.push_str(&stylesheet(
        ".plan-cta",
        &[Transition::new("transform", "scale(1)", "scale(0.95)").on(Trigger::Press).duration(150)],
    ));
    css
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub description: AttrValue,
    #[prop_or_default]
    pub icon: Icon,
    /// Top border and icon color.
    #[prop_or_default]
    pub accent: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let border = format!("border-top-color: {};", props.accent);
    let tint = format!("color: {};", props.accent);

    html! {
        <div class="feature-card glass" style={border}>
            <div class="card-glow"></div>
            <div class="card-icon glass" style={tint}>
                <IconView icon={props.icon} />
            </div>
            <h3>{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
            <div class="learn-more">
                {"Learn More"}
                <IconView icon={Icon::ChevronRight} size={16} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    #[prop_or_default]
    pub title: AttrValue,
    /// Monthly price without the currency sign.
    #[prop_or_default]
    pub price: AttrValue,
    #[prop_or_default]
    pub features: Vec<AttrValue>,
    #[prop_or_default]
    pub highlighted: bool,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);
    let scroll = use_scroll();

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                if !*revealed {
                    if let Some(element) = node.cast::<Element>() {
                        match dom::is_in_viewport(&element) {
                            Ok(true) => revealed.set(true),
                            Ok(false) => {}
                            Err(e) => {
                                warn!("revealing pricing card without viewport check: {}", e);
                                revealed.set(true);
                            }
                        }
                    }
                }
                || ()
            },
            scroll,
        );
    }

    let frame = if props.highlighted { "rainbow-border" } else { "plain-border" };
    let cta = if props.highlighted { "plan-cta solid" } else { "plan-cta glass" };

    html! {
        <div ref={node} class={classes!("pricing-card", frame, (*revealed).then_some("revealed"))}>
            <div class="pricing-inner glass">
                <div class="pricing-head">
                    <h3>{props.title.clone()}</h3>
                    <div class="price">
                        <span class="amount">{format!("${}", props.price)}</span>
                        <span class="period">{"/mo"}</span>
                    </div>
                </div>
                <ul class="pricing-features">
                    { for props.features.iter().map(|feature| html! {
                        <li>
                            <span class="bullet"><span class="bullet-dot"></span></span>
                            {feature.clone()}
                        </li>
                    }) }
                </ul>
                <button class={cta}>{"Choose Plan"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_card_children_react_to_card_hover() {
        let css = feature_card_css();
        assert!(css.contains(".feature-card:hover .card-glow { transform: scale(1.5); }"));
        assert!(css.contains(".feature-card:hover .learn-more { gap: 0.5rem; }"));
        assert!(css.contains(".feature-card:hover .learn-more { color: var(--gold); }"));
        assert!(!css.contains(".card-glow:hover"));
        assert!(!css.contains(".learn-more:hover"));
    }

    #[test]
    fn pricing_card_fades_in_when_revealed() {
        let css = pricing_card_css();
        assert!(css.contains(".pricing-card.revealed { opacity: 1; }"));
        assert!(css.contains(".pricing-card.revealed { transform: translateY(0); }"));
        assert!(css.contains(".plan-cta:active { transform: scale(0.95); }"));
    }
}
