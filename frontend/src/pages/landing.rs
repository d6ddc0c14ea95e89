use log::info;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::nav::Navbar;
use crate::content::PageContent;
use crate::hooks::scroll::use_scroll;
use crate::motion::parallax::HeroTransform;
use crate::sections::{features::Features, footer::Footer, hero::Hero, pricing::Pricing, showcase::Showcase};

const PAGE_CSS: &str = r#"
    :root {
        --gold: #facc15;
        --gold-deep: #ca8a04;
        --muted: #9ca3af;
    }
    * { box-sizing: border-box; }
    body {
        margin: 0;
        background: #050505;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        overflow-x: hidden;
    }
    a { color: inherit; text-decoration: none; }
    button { font: inherit; color: inherit; border: none; cursor: pointer; background: none; }
    .landing { position: relative; min-height: 100vh; }
    .glass {
        background: rgba(255, 255, 255, 0.05);
        backdrop-filter: blur(16px);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .text-gradient {
        background: linear-gradient(90deg, #fde047, #facc15, #ca8a04);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .accent { color: var(--gold); }

    .top-nav {
        position: fixed; top: 0; left: 0; right: 0; z-index: 50;
        display: flex; justify-content: center;
        padding: 1rem; transition: top 0.3s;
    }
    .top-nav.scrolled { top: 0.5rem; }
    .nav-shell {
        max-width: 80rem; width: 100%;
        display: flex; align-items: center; justify-content: space-between;
        padding: 0.75rem 1.5rem; border-radius: 1rem;
        transition: all 0.3s;
    }
    .nav-shell.transparent { background: transparent; border-color: transparent; }
    .nav-shell.glass { box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5); backdrop-filter: blur(24px); }
    .nav-brand { display: flex; align-items: center; gap: 0.5rem; cursor: pointer; }
    .brand-mark {
        width: 2.5rem; height: 2.5rem; border-radius: 0.5rem;
        display: flex; align-items: center; justify-content: center;
        background: linear-gradient(45deg, #facc15, #ca8a04); color: #000;
    }
    .brand-name { font-size: 1.25rem; font-weight: 700; letter-spacing: -0.02em; text-transform: uppercase; white-space: nowrap; }
    .nav-links { display: flex; align-items: center; gap: 2rem; }
    .nav-link { font-size: 0.875rem; color: #d1d5db; transition: color 0.2s; }
    .nav-link:hover { color: var(--gold); }
    .sign-in { padding: 0.5rem 1.25rem; border-radius: 9999px; font-size: 0.875rem; font-weight: 600; transition: all 0.2s; }
    .sign-in:hover { background: var(--gold); color: #000; }
    .menu-button { display: none; padding: 0.5rem; border-radius: 0.5rem; }

    .mobile-menu {
        position: fixed; inset: 0; z-index: 100;
        background: rgba(0, 0, 0, 0.95); backdrop-filter: blur(40px);
        display: flex; flex-direction: column; padding: 2rem;
    }
    .mobile-menu-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 4rem; }
    .menu-close { padding: 0.5rem; border-radius: 9999px; }
    .mobile-links { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }
    .mobile-link { font-size: 2.25rem; font-weight: 900; letter-spacing: -0.05em; transition: color 0.2s; }
    .mobile-link:hover { color: var(--gold); }
    .mobile-menu-foot { margin-top: auto; }
    .mobile-cta {
        width: 100%; padding: 1.25rem; border-radius: 1rem;
        background: linear-gradient(90deg, #facc15, #ca8a04); color: #000;
        font-weight: 700; font-size: 1.25rem; box-shadow: 0 0 30px rgba(250, 204, 21, 0.3);
    }

    .hero {
        position: relative; min-height: 100vh; overflow: hidden;
        display: flex; flex-direction: column; align-items: center; justify-content: center;
        padding: 8rem 1.5rem 5rem;
    }
    .hero-content { text-align: center; max-width: 64rem; z-index: 10; }
    .hero-badge {
        display: inline-flex; align-items: center; gap: 0.5rem;
        padding: 0.5rem 1rem; border-radius: 9999px; margin-bottom: 2rem;
        font-size: 0.875rem; color: var(--gold);
    }
    .ping { position: relative; display: flex; width: 0.5rem; height: 0.5rem; }
    .ping-wave {
        position: absolute; inset: 0; border-radius: 9999px; background: var(--gold); opacity: 0.75;
        animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    .ping-dot { position: relative; width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #eab308; }
    @keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }
    .hero h1 { font-size: clamp(3rem, 8vw, 6rem); font-weight: 900; line-height: 1.1; letter-spacing: -0.05em; margin: 0 0 2rem; }
    .scramble-text { font-family: inherit; }
    .hero-description { font-size: 1.25rem; color: var(--muted); max-width: 42rem; margin: 0 auto 3rem; }
    .hero-cta-group { display: flex; gap: 1.5rem; justify-content: center; flex-wrap: wrap; }
    .hero-cta-primary {
        padding: 1.25rem 2.5rem; border-radius: 1rem; font-weight: 700; font-size: 1.125rem; color: #000;
        background: linear-gradient(90deg, #facc15, #ca8a04);
    }
    .hero-cta-demo {
        padding: 1.25rem 2.5rem; border-radius: 1rem; font-weight: 700; font-size: 1.125rem;
        display: flex; align-items: center; gap: 0.5rem;
    }
    .hero-glow { position: absolute; bottom: -25%; width: 100%; height: 100%; pointer-events: none; opacity: 0.2; }
    .glow { position: absolute; width: 800px; height: 800px; border-radius: 9999px; filter: blur(120px); }
    .glow-left { left: 0; background: rgba(202, 138, 4, 0.3); }
    .glow-right { right: 0; background: rgba(250, 204, 21, 0.3); }

    .section-head { text-align: center; margin-bottom: 5rem; }
    .section-head h2 { font-size: clamp(2rem, 5vw, 3rem); font-weight: 700; margin: 0 0 1.5rem; }
    .section-head p { color: var(--muted); font-size: 1.125rem; max-width: 36rem; margin: 0 auto; }

    .features, .pricing, .showcase { padding: 8rem 1.5rem; max-width: 80rem; margin: 0 auto; }
    .bento-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
    .bento-cell.wide { grid-column: span 2; }
    .feature-card {
        position: relative; overflow: hidden; height: 100%;
        display: flex; flex-direction: column; gap: 1rem;
        padding: 2rem; border-radius: 1.5rem; border-top-width: 2px;
    }
    .card-glow {
        position: absolute; right: -2rem; bottom: -2rem; width: 6rem; height: 6rem; border-radius: 9999px;
        background: linear-gradient(135deg, rgba(255, 255, 255, 0.05), transparent); filter: blur(40px);
    }
    .card-icon { width: 3rem; height: 3rem; border-radius: 1rem; display: flex; align-items: center; justify-content: center; }
    .feature-card h3 { font-size: 1.5rem; margin: 0; }
    .feature-card p { color: var(--muted); line-height: 1.6; margin: 0; }
    .learn-more { margin-top: 1rem; display: flex; align-items: center; font-size: 0.875rem; font-weight: 600; }

    .showcase-inner { display: flex; align-items: center; gap: 5rem; }
    .showcase-copy, .showcase-visual { flex: 1; }
    .showcase-copy h2 { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 700; line-height: 1.2; margin: 0 0 2rem; }
    .showcase-items { display: flex; flex-direction: column; gap: 1.5rem; }
    .showcase-item { display: flex; gap: 1rem; align-items: flex-start; }
    .showcase-item h4 { font-size: 1.25rem; margin: 0; }
    .showcase-item p { color: var(--muted); margin: 0.25rem 0 0; }
    .showcase-icon { padding: 0.75rem; border-radius: 0.75rem; color: var(--gold); flex-shrink: 0; }
    .showcase-visual { position: relative; width: 100%; }
    .showcase-frame { position: relative; z-index: 10; padding: 1rem; border-radius: 2rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5); }
    .showcase-image { display: block; width: 100%; border-radius: 1rem; }
    .blob { position: absolute; width: 16rem; height: 16rem; filter: blur(64px); z-index: -1; }
    .blob-top { top: -2.5rem; right: -2.5rem; background: rgba(234, 179, 8, 0.2); }
    .blob-bottom { bottom: -2.5rem; left: -2.5rem; background: rgba(202, 138, 4, 0.2); }

    .pricing-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .plain-border { padding: 1px; border-radius: 1rem; background: rgba(255, 255, 255, 0.1); }
    .rainbow-border {
        padding: 1px; border-radius: 1rem;
        background: linear-gradient(120deg, #fde047, #f97316, #ec4899, #8b5cf6, #facc15);
        background-size: 300% 300%; animation: rainbow 6s linear infinite;
    }
    @keyframes rainbow { 0% { background-position: 0% 50%; } 100% { background-position: 300% 50%; } }
    .pricing-inner { height: 100%; padding: 2.5rem; border-radius: 15px; display: flex; flex-direction: column; background: #0b0b0b; }
    .pricing-head { margin-bottom: 2rem; }
    .pricing-head h3 { font-size: 1.25rem; margin: 0 0 0.5rem; }
    .price { display: flex; align-items: baseline; gap: 0.25rem; }
    .amount { font-size: 2.25rem; font-weight: 800; }
    .period { color: var(--muted); }
    .pricing-features { list-style: none; padding: 0; margin: 0 0 2.5rem; flex-grow: 1; display: flex; flex-direction: column; gap: 1rem; color: #d1d5db; }
    .pricing-features li { display: flex; align-items: center; gap: 0.75rem; }
    .bullet { width: 1.25rem; height: 1.25rem; border-radius: 9999px; background: rgba(234, 179, 8, 0.2); display: flex; align-items: center; justify-content: center; }
    .bullet-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #eab308; }
    .plan-cta { width: 100%; padding: 1rem; border-radius: 0.75rem; font-weight: 700; }
    .plan-cta.solid { background: var(--gold); color: #000; }
    .plan-cta.solid:hover { background: #fde047; }
    .plan-cta.glass:hover { background: rgba(255, 255, 255, 0.1); }

    .site-footer { border-width: 1px 0 0; padding: 5rem 1.5rem 2.5rem; }
    .footer-grid { max-width: 80rem; margin: 0 auto 5rem; display: grid; grid-template-columns: repeat(4, 1fr); gap: 3rem; }
    .footer-tagline { color: var(--muted); line-height: 1.6; margin: 1.5rem 0; }
    .footer-socials { display: flex; gap: 1rem; }
    .social-link { padding: 0.5rem; border-radius: 0.5rem; transition: color 0.2s; }
    .social-link:hover { color: var(--gold); }
    .footer-group h4 { color: var(--gold); font-size: 1.125rem; margin: 0 0 1.5rem; }
    .footer-group ul { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 1rem; color: var(--muted); }
    .footer-group a:hover { color: #fff; }
    .newsletter p { color: var(--muted); font-size: 0.875rem; margin: 0 0 1rem; }
    .newsletter-row { display: flex; gap: 0.5rem; }
    .newsletter-row input {
        width: 100%; padding: 0.75rem 1rem; border-radius: 0.75rem; color: #fff;
        background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1); outline: none;
    }
    .newsletter-row input:focus { border-color: #eab308; }
    .newsletter-row button { padding: 0.75rem 1.25rem; border-radius: 0.75rem; background: var(--gold); color: #000; font-weight: 700; flex-shrink: 0; }
    .footer-bottom {
        max-width: 80rem; margin: 0 auto; padding-top: 2.5rem; border-top: 1px solid rgba(255, 255, 255, 0.05);
        display: flex; justify-content: space-between; align-items: center; gap: 1.5rem;
        font-size: 0.875rem; color: #6b7280;
    }
    .footer-legal { display: flex; gap: 2rem; }
    .footer-legal a:hover { color: #fff; }
    .credit { color: var(--muted); font-weight: 500; }

    .back-to-top {
        position: fixed; right: 2rem; bottom: 2rem; z-index: 60;
        padding: 1rem; border-radius: 9999px; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .back-to-top:hover { background: var(--gold); color: #000; }

    @media (max-width: 768px) {
        .nav-links { display: none; }
        .menu-button { display: block; }
        .bento-grid, .pricing-grid { grid-template-columns: 1fr; }
        .bento-cell.wide { grid-column: auto; }
        .showcase-inner { flex-direction: column; gap: 3rem; }
        .footer-grid { grid-template-columns: 1fr; }
        .footer-bottom { flex-direction: column; }
        .features, .pricing, .showcase { padding: 5rem 1.5rem; }
        .back-to-top { right: 1.5rem; bottom: 1.5rem; }
    }
"#;

/// The whole page, top to bottom. Must sit inside a `ScrollProvider`.
#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_state(|| {
        info!("Loading page content");
        PageContent::load()
    });
    let scroll = use_scroll();
    let transform = HeroTransform::at(scroll.progress);

    html! {
        <div class="landing">
            <style>{PAGE_CSS}</style>
            <Navbar brand={content.brand.clone()} links={content.nav_links.clone()} />
            <Hero content={content.hero.clone()} transform={transform} />
            <Features content={content.features.clone()} />
            <Showcase content={content.showcase.clone()} />
            <Pricing content={content.pricing.clone()} />
            <Footer brand={content.brand.clone()} content={content.footer.clone()} />
            <BackToTop />
        </div>
    }
}
