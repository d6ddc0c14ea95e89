use log::Level;

/// Offset in pixels past which the navbar switches to the glass background.
pub const NAV_COMPACT_THRESHOLD: f64 = 20.0;

/// Offset in pixels past which the floating back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;

pub const SCRAMBLE_TICK_MS: u32 = 30;

/// Ticks needed to advance the scramble cursor by one character.
pub const SCRAMBLE_TICKS_PER_CHAR: u32 = 3;

pub const SCRAMBLE_GLYPHS: &str = "!<>-_\\/[]{}—=+*^?#________";

/// Entrance delay added per mobile menu link.
pub const MENU_STAGGER_MS: u32 = 100;

pub const SHOWCASE_IMAGE_URL: &str = "https://picsum.photos/1200/800?random=2&grayscale";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_ordered() {
        assert!(NAV_COMPACT_THRESHOLD < BACK_TO_TOP_THRESHOLD);
    }

    #[test]
    fn glyph_set_has_no_whitespace() {
        assert!(!SCRAMBLE_GLYPHS.is_empty());
        assert!(SCRAMBLE_GLYPHS.chars().all(|c| !c.is_whitespace()));
    }
}
