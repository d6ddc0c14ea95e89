use log::warn;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::scramble_text::ScrambleText;
use crate::content::HeroCopy;
use crate::dom;
use crate::motion::parallax::HeroTransform;
use crate::motion::transition::{stylesheet, Transition, Trigger};

fn hero_css() -> String {
    let mut css = stylesheet(
        ".hero-badge",
        &[
            Transition::new("opacity", "0", "1").on(Trigger::Mount).duration(500),
            Transition::new("transform", "translateY(20px)", "translateY(0)").on(Trigger::Mount),
        ],
    );
    css.push_str(&stylesheet(
        ".hero-description",
        &[Transition::new("opacity", "0", "1").on(Trigger::Mount).duration(600).delay(500)],
    ));
    css.push_str(&stylesheet(
        ".hero-cta-primary",
        &[
            Transition::new("transform", "scale(1)", "scale(1.05)").duration(200),
            Transition::new("box-shadow", "0 10px 25px rgba(0, 0, 0, 0.3)", "0 0 30px rgba(234, 179, 8, 0.4)"),
            Transition::new("transform", "scale(1)", "scale(0.95)").on(Trigger::Press),
        ],
    ));
    css.push_str(&stylesheet(
        ".hero-cta-demo",
        &[
            Transition::new("transform", "scale(1)", "scale(1.05)").duration(200),
            Transition::new("background", "rgba(255, 255, 255, 0.05)", "rgba(255, 255, 255, 0.1)"),
            Transition::new("transform", "scale(1)", "scale(0.95)").on(Trigger::Press),
        ],
    ));
    css
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub content: HeroCopy,
    #[prop_or_default]
    pub transform: HeroTransform,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { content, transform } = props;

    let watch_demo = Callback::from(|_: MouseEvent| {
        if let Err(e) = dom::scroll_to_section("demo") {
            warn!("cannot scroll to demo: {}", e);
        }
    });

    html! {
        <section class="hero">
            <style>{hero_css()}</style>
            <div class="hero-content" style={transform.content_style()}>
                <div class="hero-badge glass">
                    <span class="ping">
                        <span class="ping-wave"></span>
                        <span class="ping-dot"></span>
                    </span>
                    {content.badge.clone()}
                </div>

                <h1>
                    <ScrambleText text={content.headline.clone()} />
                    <br />
                    <span class="text-gradient">{content.subline.clone()}</span>
                </h1>

                <p class="hero-description">{content.description.clone()}</p>

                <div class="hero-cta-group">
                    <button class="hero-cta-primary">{content.primary_cta.clone()}</button>
                    <button class="hero-cta-demo glass" onclick={watch_demo}>
                        <IconView icon={Icon::Play} size={20} filled={true} />
                        {content.demo_cta.clone()}
                    </button>
                </div>
            </div>

            <div class="hero-glow" style={transform.decoration_style()}>
                <div class="glow glow-left"></div>
                <div class="glow glow-right"></div>
            </div>
        </section>
    }
}
