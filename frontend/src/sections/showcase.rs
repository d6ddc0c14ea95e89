use yew::prelude::*;

use crate::components::icons::IconView;
use crate::config::SHOWCASE_IMAGE_URL;
use crate::content::Showcase as ShowcaseContent;
use crate::motion::transition::{stylesheet, Transition, Trigger};

fn showcase_css() -> String {
    let mut css = stylesheet(
        ".showcase-frame",
        &[Transition::new(
            "transform",
            "perspective(1000px) rotateY(0deg) rotateX(0deg)",
            "perspective(1000px) rotateY(-10deg) rotateX(5deg)",
        )
        .duration(500)],
    );
    css.push_str(&stylesheet(
        ".showcase-image",
        &[Transition::new("filter", "grayscale(1)", "grayscale(0)")
            .on(Trigger::GroupHover(".showcase-visual"))
            .duration(700)],
    ));
    css
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    #[prop_or_default]
    pub content: ShowcaseContent,
}

#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let content = &props.content;

    html! {
        <section id="demo" class="showcase">
            <style>{showcase_css()}</style>
            <div class="showcase-inner">
                <div class="showcase-copy">
                    <h2>
                        {content.title.clone()}
                        <br />
                        <span class="text-gradient">{content.highlight.clone()}</span>
                    </h2>
                    <div class="showcase-items">
                        { for content.items.iter().map(|item| html! {
                            <div class="showcase-item">
                                <div class="showcase-icon glass"><IconView icon={item.icon} /></div>
                                <div>
                                    <h4>{item.title.clone()}</h4>
                                    <p>{item.text.clone()}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="showcase-visual">
                    <div class="showcase-frame glass">
                        <img class="showcase-image" src={SHOWCASE_IMAGE_URL} alt={content.image_alt.clone()} loading="lazy" />
                    </div>
                    <div class="blob blob-top"></div>
                    <div class="blob blob-bottom"></div>
                </div>
            </div>
        </section>
    }
}
