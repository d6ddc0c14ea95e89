use yew::prelude::*;

use crate::components::cards::{pricing_card_css, PricingCard};
use crate::content::PricingSection;

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    #[prop_or_default]
    pub content: PricingSection,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let PricingSection { title, blurb, tiers } = &props.content;

    html! {
        <section id="pricing" class="pricing">
            <style>{pricing_card_css()}</style>
            <div class="section-head">
                <h2>{title.clone()}</h2>
                <p>{blurb.clone()}</p>
            </div>
            <div class="pricing-grid">
                { for tiers.iter().map(|tier| html! {
                    <PricingCard
                        title={tier.title.clone()}
                        price={tier.price.clone()}
                        features={tier.features.iter().cloned().map(AttrValue::from).collect::<Vec<_>>()}
                        highlighted={tier.highlighted}
                    />
                }) }
            </div>
        </section>
    }
}
