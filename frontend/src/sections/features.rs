use yew::prelude::*;

use crate::components::cards::{feature_card_css, FeatureCard};
use crate::content::FeatureSection;

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    #[prop_or_default]
    pub content: FeatureSection,
}

/// Bento grid of feature cards; wide cards span two columns.
#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let FeatureSection { title, blurb, cards } = &props.content;

    html! {
        <section id="features" class="features">
            <style>{feature_card_css()}</style>
            <div class="section-head">
                <h2>{title.clone()}</h2>
                <p>{blurb.clone()}</p>
            </div>
            <div class="bento-grid">
                { for cards.iter().map(|card| html! {
                    <div class={classes!("bento-cell", card.wide.then_some("wide"))}>
                        <FeatureCard
                            title={card.title.clone()}
                            description={card.description.clone()}
                            icon={card.icon}
                            accent={card.accent.clone()}
                        />
                    </div>
                }) }
            </div>
        </section>
    }
}
