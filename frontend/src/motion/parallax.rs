/// Piecewise-linear map from `input` to `output`, clamped at both ends.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return if value < in_start { out_start } else { out_end };
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

const SCALE_RANGE: ((f64, f64), (f64, f64)) = ((0.0, 0.2), (1.0, 0.9));
const OPACITY_RANGE: ((f64, f64), (f64, f64)) = ((0.0, 0.15), (1.0, 0.0));
const DRIFT_RANGE: ((f64, f64), (f64, f64)) = ((0.0, 1.0), (0.0, 200.0));

pub fn scale(progress: f64) -> f64 {
    interpolate(progress, SCALE_RANGE.0, SCALE_RANGE.1)
}

pub fn opacity(progress: f64) -> f64 {
    interpolate(progress, OPACITY_RANGE.0, OPACITY_RANGE.1)
}

/// Vertical drift of the hero glow, in pixels.
pub fn translate_y(progress: f64) -> f64 {
    interpolate(progress, DRIFT_RANGE.0, DRIFT_RANGE.1)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub scale: f64,
    pub opacity: f64,
    pub translate_y: f64,
}

impl HeroTransform {
    pub fn at(progress: f64) -> Self {
        Self {
            scale: scale(progress),
            opacity: opacity(progress),
            translate_y: translate_y(progress),
        }
    }

    /// Shrink and fade applied to the hero copy.
    pub fn content_style(&self) -> String {
        format!(
            "transform: scale({:.4}); opacity: {:.4};",
            self.scale, self.opacity
        )
    }

    /// Drift applied to the decorative glow behind the hero.
    pub fn decoration_style(&self) -> String {
        format!("transform: translateY({:.2}px);", self.translate_y)
    }
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self::at(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scale_endpoints_and_clamp() {
        assert!(close(scale(0.0), 1.0));
        assert!(close(scale(0.1), 0.95));
        assert!(close(scale(0.2), 0.9));
        for p in [0.21, 0.5, 0.99, 1.0, 3.0] {
            assert!(close(scale(p), 0.9), "p = {p}");
        }
        assert!(close(scale(-1.0), 1.0));
    }

    #[test]
    fn opacity_fades_out_by_fifteen_percent() {
        assert!(close(opacity(0.0), 1.0));
        assert!(close(opacity(0.075), 0.5));
        assert!(close(opacity(0.15), 0.0));
        assert!(close(opacity(0.6), 0.0));
    }

    #[test]
    fn drift_spans_whole_page() {
        assert!(close(translate_y(0.0), 0.0));
        assert!(close(translate_y(0.5), 100.0));
        assert!(close(translate_y(1.0), 200.0));
        assert!(close(translate_y(1.5), 200.0));
    }

    #[test]
    fn mappings_are_monotonic() {
        let mut prev = HeroTransform::at(0.0);
        for step in 1..=100 {
            let next = HeroTransform::at(step as f64 / 100.0);
            assert!(next.scale <= prev.scale);
            assert!(next.opacity <= prev.opacity);
            assert!(next.translate_y >= prev.translate_y);
            prev = next;
        }
    }

    #[test]
    fn degenerate_input_range_steps() {
        assert_eq!(interpolate(0.4, (0.5, 0.5), (1.0, 2.0)), 1.0);
        assert_eq!(interpolate(0.5, (0.5, 0.5), (1.0, 2.0)), 2.0);
    }

    #[test]
    fn styles_render_css() {
        let transform = HeroTransform::at(0.2);
        assert_eq!(
            transform.content_style(),
            "transform: scale(0.9000); opacity: 0.0000;"
        );
        assert_eq!(transform.decoration_style(), "transform: translateY(40.00px);");
    }
}
