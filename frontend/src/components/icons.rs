use serde::Deserialize;
use yew::prelude::*;

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Globe,
    Shield,
    Layout,
    Cpu,
    Monitor,
    Layers,
    Zap,
    Twitter,
    Github,
    Linkedin,
    Menu,
    X,
    ChevronRight,
    ArrowUp,
    Play,
    #[default]
    #[serde(other)]
    Blank,
}

enum Shape {
    Path(&'static str),
    Rect(u8, u8, u8, u8, u8),
    Circle(u8, u8, u8),
}

use Shape::*;

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::Globe => &[
                Circle(12, 12, 10),
                Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
                Path("M2 12h20"),
            ],
            Icon::Shield => &[Path(
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            )],
            Icon::Layout => &[Rect(3, 3, 18, 18, 2), Path("M3 9h18"), Path("M9 21V9")],
            Icon::Cpu => &[
                Rect(4, 4, 16, 16, 2),
                Rect(9, 9, 6, 6, 0),
                Path("M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2"),
            ],
            Icon::Monitor => &[Rect(2, 3, 20, 14, 2), Path("M8 21h8"), Path("M12 17v4")],
            Icon::Layers => &[
                Path("m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"),
                Path("m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"),
                Path("m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"),
            ],
            Icon::Zap => &[Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
            Icon::Twitter => &[Path(
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            )],
            Icon::Github => &[
                Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
                Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            Icon::Linkedin => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect(2, 9, 4, 12, 0),
                Circle(4, 4, 2),
            ],
            Icon::Menu => &[Path("M4 6h16M4 12h16M4 18h16")],
            Icon::X => &[Path("M18 6 6 18M6 6l12 12")],
            Icon::ChevronRight => &[Path("m9 18 6-6-6-6")],
            Icon::ArrowUp => &[Path("m5 12 7-7 7 7M12 19V5")],
            Icon::Play => &[Path("M6 3l14 9-14 9V3z")],
            Icon::Blank => &[],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    /// Fill the outline with the current color.
    #[prop_or_default]
    pub filled: bool,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconProps) -> Html {
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.shapes().iter().map(|shape| match shape {
                Path(d) => html! { <path d={*d} /> },
                Rect(x, y, w, h, rx) => html! {
                    <rect x={x.to_string()} y={y.to_string()} width={w.to_string()} height={h.to_string()} rx={rx.to_string()} />
                },
                Circle(cx, cy, r) => html! {
                    <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
                },
            }) }
        </svg>
    }
}
