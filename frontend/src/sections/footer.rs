use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::back_to_top::scroll_to_top;
use crate::components::icons::{Icon, IconView};
use crate::content::{Brand, FooterContent};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub brand: Brand,
    #[prop_or_default]
    pub content: FooterContent,
}

pub fn copyright_line(holder: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, holder)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps { brand, content } = props;
    let year = Utc::now().year();

    html! {
        <footer class="site-footer glass">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="nav-brand" onclick={Callback::from(|_: MouseEvent| scroll_to_top())}>
                        <div class="brand-mark">
                            <IconView icon={Icon::Zap} size={18} />
                        </div>
                        <span class="brand-name">{brand.name.clone()}</span>
                    </div>
                    <p class="footer-tagline">{content.tagline.clone()}</p>
                    <div class="footer-socials">
                        { for content.socials.iter().map(|social| html! {
                            <a class="social-link glass" href={social.href.clone()} aria-label={social.label.clone()}>
                                <IconView icon={social.icon} size={20} />
                            </a>
                        }) }
                    </div>
                </div>

                { for content.groups.iter().map(|group| html! {
                    <div class="footer-group">
                        <h4>{group.title.clone()}</h4>
                        <ul>
                            { for group.links.iter().map(|link| html! {
                                <li><a href={link.href.clone()}>{link.label.clone()}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }

                // No submit handler: the form is a visual stub.
                <div class="footer-group newsletter">
                    <h4>{content.newsletter.title.clone()}</h4>
                    <p>{content.newsletter.blurb.clone()}</p>
                    <div class="newsletter-row">
                        <input type="email" placeholder={content.newsletter.placeholder.clone()} />
                        <button>{content.newsletter.button.clone()}</button>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p class="copyright">{copyright_line(&brand.holder, year)}</p>
                <div class="footer-legal">
                    { for content.legal.iter().map(|link| html! {
                        <a href={link.href.clone()}>{link.label.clone()}</a>
                    }) }
                </div>
                <p class="credit">{"Handcrafted by "}<span class="accent">{content.credit.clone()}</span></p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(
            copyright_line("Aurora UI", 2026),
            "© 2026 Aurora UI. All rights reserved."
        );
    }
}
