use rand::Rng;

use crate::config::{SCRAMBLE_GLYPHS, SCRAMBLE_TICKS_PER_CHAR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScramblePhase {
    Idle,
    Revealing,
    Complete,
}

/// Character-scramble reveal of a fixed target string.
///
/// The reveal cursor is `ticks / SCRAMBLE_TICKS_PER_CHAR`; positions below its
/// integer part show the real character and the rest show a random glyph.
/// Once the cursor reaches the target length the scrambler is complete and
/// further ticks return the target unchanged.
#[derive(Clone, Debug)]
pub struct Scrambler {
    target: Vec<char>,
    glyphs: Vec<char>,
    ticks: u32,
    phase: ScramblePhase,
}

impl Scrambler {
    pub fn new(target: &str) -> Self {
        Self::with_glyphs(target, SCRAMBLE_GLYPHS)
    }

    pub fn with_glyphs(target: &str, glyphs: &str) -> Self {
        Self {
            target: target.chars().collect(),
            glyphs: glyphs.chars().collect(),
            ticks: 0,
            phase: ScramblePhase::Idle,
        }
    }

    pub fn phase(&self) -> ScramblePhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == ScramblePhase::Complete
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Number of leading characters currently shown as-is.
    pub fn revealed(&self) -> usize {
        if self.is_complete() {
            return self.target.len();
        }
        ((self.ticks / SCRAMBLE_TICKS_PER_CHAR) as usize).min(self.target.len())
    }

    /// Total ticks from start to completion.
    pub fn ticks_to_complete(&self) -> u32 {
        self.target.len() as u32 * SCRAMBLE_TICKS_PER_CHAR
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Leaves `Idle` and returns the first, fully scrambled frame.
    ///
    /// An empty target has nothing to reveal and completes immediately.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> String {
        if self.phase == ScramblePhase::Idle {
            self.phase = if self.ticks >= self.ticks_to_complete() {
                ScramblePhase::Complete
            } else {
                ScramblePhase::Revealing
            };
        }
        self.frame(rng)
    }

    /// Advances the cursor by one tick and returns the new frame.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> String {
        match self.phase {
            ScramblePhase::Idle => return self.start(rng),
            ScramblePhase::Complete => return self.target(),
            ScramblePhase::Revealing => {}
        }
        self.ticks += 1;
        if self.ticks >= self.ticks_to_complete() {
            self.phase = ScramblePhase::Complete;
        }
        self.frame(rng)
    }

    /// Renders the current cursor position.
    pub fn frame<R: Rng>(&self, rng: &mut R) -> String {
        let revealed = self.revealed();
        self.target
            .iter()
            .enumerate()
            .map(|(index, &real)| {
                if index < revealed || self.glyphs.is_empty() {
                    real
                } else {
                    self.glyphs[rng.gen_range(0..self.glyphs.len())]
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TARGET: &str = "The Future is Aurora";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn starts_idle_and_fully_scrambled() {
        let mut rng = rng();
        let mut scrambler = Scrambler::new(TARGET);
        assert_eq!(scrambler.phase(), ScramblePhase::Idle);

        let first = scrambler.start(&mut rng);
        assert_eq!(scrambler.phase(), ScramblePhase::Revealing);
        assert_eq!(first.chars().count(), TARGET.chars().count());
        assert!(first.chars().all(|c| SCRAMBLE_GLYPHS.contains(c)));
    }

    #[test]
    fn completes_after_three_ticks_per_char() {
        let mut rng = rng();
        let mut scrambler = Scrambler::new(TARGET);
        scrambler.start(&mut rng);
        let n = TARGET.chars().count() as u32;

        let mut last = String::new();
        for _ in 0..(3 * n) - 1 {
            last = scrambler.tick(&mut rng);
            assert!(!scrambler.is_complete());
        }
        assert_ne!(last, TARGET);

        assert_eq!(scrambler.tick(&mut rng), TARGET);
        assert!(scrambler.is_complete());
        assert_eq!(scrambler.ticks(), 3 * n);

        // Frozen once complete.
        assert_eq!(scrambler.tick(&mut rng), TARGET);
        assert_eq!(scrambler.ticks(), 3 * n);
    }

    #[test]
    fn revealed_prefix_matches_target_at_every_tick() {
        let mut rng = rng();
        let target: Vec<char> = TARGET.chars().collect();
        let mut scrambler = Scrambler::new(TARGET);
        let mut frame = scrambler.start(&mut rng);
        let mut k = 0u32;

        loop {
            let cut = (k / 3) as usize;
            for (index, c) in frame.chars().enumerate() {
                if index < cut {
                    assert_eq!(c, target[index], "tick {k} index {index}");
                } else if !scrambler.is_complete() {
                    assert!(SCRAMBLE_GLYPHS.contains(c), "tick {k} index {index}");
                }
            }
            if scrambler.is_complete() {
                break;
            }
            frame = scrambler.tick(&mut rng);
            k += 1;
        }
        assert_eq!(frame, TARGET);
    }

    #[test]
    fn cursor_never_moves_backwards() {
        let mut rng = rng();
        let mut scrambler = Scrambler::new("abc");
        scrambler.start(&mut rng);
        let mut prev = scrambler.revealed();
        while !scrambler.is_complete() {
            scrambler.tick(&mut rng);
            assert!(scrambler.revealed() >= prev);
            prev = scrambler.revealed();
        }
        assert_eq!(prev, 3);
    }

    #[test]
    fn empty_target_completes_without_ticking() {
        let mut rng = rng();
        let mut scrambler = Scrambler::new("");
        assert_eq!(scrambler.start(&mut rng), "");
        assert!(scrambler.is_complete());
        assert_eq!(scrambler.ticks(), 0);
    }

    #[test]
    fn multibyte_targets_are_scrambled_per_char() {
        let mut rng = rng();
        let mut scrambler = Scrambler::with_glyphs("héllo—", "#");
        assert_eq!(scrambler.start(&mut rng), "######");
        for _ in 0..3 {
            scrambler.tick(&mut rng);
        }
        assert_eq!(scrambler.frame(&mut rng), "h#####");
    }

    #[test]
    fn ticking_idle_scrambler_starts_it() {
        let mut rng = rng();
        let mut scrambler = Scrambler::new("ok");
        scrambler.tick(&mut rng);
        assert_eq!(scrambler.phase(), ScramblePhase::Revealing);
        assert_eq!(scrambler.ticks(), 0);
    }
}
