//! Declarative motion: each effect on the page is a [`Transition`] and
//! [`stylesheet`] turns a selector's transitions into CSS.

use std::borrow::Cow;
use std::fmt::Write;

use crate::config::MENU_STAGGER_MS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Pointer over the element.
    Hover,
    /// Pointer over the enclosing element matching the given selector.
    GroupHover(&'static str),
    /// Element is being pressed.
    Press,
    /// Plays once when the element is inserted.
    Mount,
    /// Active while the element carries the given class.
    Condition(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub property: &'static str,
    pub from: Cow<'static, str>,
    pub to: Cow<'static, str>,
    pub trigger: Trigger,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Transition {
    pub fn new(
        property: &'static str,
        from: impl Into<Cow<'static, str>>,
        to: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            property,
            from: from.into(),
            to: to.into(),
            trigger: Trigger::Hover,
            duration_ms: 300,
            delay_ms: 0,
        }
    }

    pub fn on(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }
}

/// Name of the keyframes generated for a selector's mount transitions.
pub fn keyframes_name(selector: &str) -> String {
    let mut name = String::from("enter");
    for c in selector.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_lowercase());
        } else if !name.ends_with('-') {
            name.push('-');
        }
    }
    name.trim_end_matches('-').to_string()
}

/// CSS for all transitions attached to `selector`.
pub fn stylesheet(selector: &str, transitions: &[Transition]) -> String {
    let mut css = String::new();

    let (mount, stateful): (Vec<&Transition>, Vec<&Transition>) = transitions
        .iter()
        .partition(|t| t.trigger == Trigger::Mount);

    if !stateful.is_empty() {
        let mut seen: Vec<&str> = Vec::new();
        let mut base = Vec::new();
        let mut timing = Vec::new();
        for t in &stateful {
            if seen.contains(&t.property) {
                continue;
            }
            seen.push(t.property);
            base.push(format!("{}: {};", t.property, t.from));
            timing.push(format!(
                "{} {}ms ease {}ms",
                t.property, t.duration_ms, t.delay_ms
            ));
        }
        let _ = writeln!(
            css,
            "{selector} {{ {} transition: {}; }}",
            base.join(" "),
            timing.join(", ")
        );
        for t in &stateful {
            let rule = match t.trigger {
                Trigger::Hover => format!("{selector}:hover"),
                Trigger::GroupHover(group) => format!("{group}:hover {selector}"),
                Trigger::Press => format!("{selector}:active"),
                Trigger::Condition(class) => format!("{selector}.{class}"),
                Trigger::Mount => continue,
            };
            let _ = writeln!(css, "{rule} {{ {}: {}; }}", t.property, t.to);
        }
    }

    if let Some(first) = mount.first() {
        let name = keyframes_name(selector);
        let from: Vec<String> = mount.iter().map(|t| format!("{}: {};", t.property, t.from)).collect();
        let to: Vec<String> = mount.iter().map(|t| format!("{}: {};", t.property, t.to)).collect();
        let _ = writeln!(
            css,
            "@keyframes {name} {{ from {{ {} }} to {{ {} }} }}",
            from.join(" "),
            to.join(" ")
        );
        let _ = writeln!(
            css,
            "{selector} {{ animation: {name} {}ms ease-out {}ms both; }}",
            first.duration_ms, first.delay_ms
        );
    }

    css
}

/// Entrance delay for the `index`th item of a staggered list.
pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * MENU_STAGGER_MS
}

pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}ms;", stagger_delay(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_lift_renders_base_and_hover_rules() {
        let css = stylesheet(
            ".feature-card",
            &[Transition::new("transform", "translateY(0)", "translateY(-10px)")],
        );
        assert!(css.contains(".feature-card { transform: translateY(0); transition: transform 300ms ease 0ms; }"));
        assert!(css.contains(".feature-card:hover { transform: translateY(-10px); }"));
        assert!(!css.contains("@keyframes"));
    }

    #[test]
    fn hover_and_press_share_one_transition_entry() {
        let css = stylesheet(
            ".cta",
            &[
                Transition::new("transform", "scale(1)", "scale(1.05)"),
                Transition::new("transform", "scale(1)", "scale(0.95)").on(Trigger::Press),
            ],
        );
        assert_eq!(css.matches("transition:").count(), 1);
        assert_eq!(css.matches("transform 300ms").count(), 1);
        let hover = css.find(":hover").unwrap();
        let active = css.find(":active").unwrap();
        assert!(hover < active, "press must override hover");
    }

    #[test]
    fn group_hover_keys_on_the_ancestor() {
        let css = stylesheet(
            ".card-glow",
            &[Transition::new("transform", "scale(1)", "scale(1.5)")
                .on(Trigger::GroupHover(".feature-card"))
                .duration(700)],
        );
        assert!(css.contains(".card-glow { transform: scale(1); transition: transform 700ms ease 0ms; }"));
        assert!(css.contains(".feature-card:hover .card-glow { transform: scale(1.5); }"));
        assert!(!css.contains(".card-glow:hover"));
    }

    #[test]
    fn condition_uses_class_selector() {
        let css = stylesheet(
            ".pricing-card",
            &[Transition::new("opacity", "0", "1").on(Trigger::Condition("revealed")).duration(600)],
        );
        assert!(css.contains(".pricing-card.revealed { opacity: 1; }"));
        assert!(css.contains("opacity 600ms ease 0ms"));
    }

    #[test]
    fn mount_transitions_merge_into_one_keyframes_block() {
        let css = stylesheet(
            ".back-to-top",
            &[
                Transition::new("opacity", "0", "1").on(Trigger::Mount).duration(200),
                Transition::new("transform", "scale(0.5)", "scale(1)").on(Trigger::Mount),
            ],
        );
        assert_eq!(css.matches("@keyframes").count(), 1);
        assert!(css.contains(
            "@keyframes enter-back-to-top { from { opacity: 0; transform: scale(0.5); } to { opacity: 1; transform: scale(1); } }"
        ));
        assert!(css.contains(".back-to-top { animation: enter-back-to-top 200ms ease-out 0ms both; }"));
    }

    #[test]
    fn keyframe_names_are_sanitized() {
        assert_eq!(keyframes_name(".mobile-menu .link"), "enter-mobile-menu-link");
        assert_eq!(keyframes_name("#Hero > h1"), "enter-hero-h1");
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 100);
        assert_eq!(stagger_delay(2), 200);
        assert_eq!(stagger_style(3), "animation-delay: 300ms;");
    }
}
