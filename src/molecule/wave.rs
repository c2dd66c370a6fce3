//! Height-keyed HSL colour wave.
//!
//! Each atom's hue is `(h * frequency + t * speed) mod 1`, where `h` is its
//! normalized height and `t` the elapsed seconds, so bands of colour roll up
//! the molecule once every `1 / speed` seconds.

use crate::{
    animation::{AttributeBuffer, Clock, FrameAnimator, FrameUpdate},
    options::WaveOptions,
    util::color::hsl_to_rgb,
};

/// Hue in `[0, 1)` for normalized height `h` at `t` seconds.
#[must_use]
pub fn wave_hue(h: f32, t: f32, frequency: f32, speed: f32) -> f32 {
    wrap_unit(h * frequency + t * speed)
}

/// RGB for normalized height `h` at `t` seconds.
#[must_use]
pub fn wave_color(h: f32, t: f32, options: &WaveOptions) -> [f32; 3] {
    hsl_to_rgb(
        wave_hue(h, t, options.frequency, options.speed),
        options.saturation,
        options.lightness,
    )
}

/// `x mod 1` folded into `[0, 1)`.
fn wrap_unit(x: f32) -> f32 {
    let wrapped = x.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Recolours a per-atom colour buffer every tick.
#[derive(Debug, Clone)]
pub struct ColorWave {
    heights: Vec<f32>,
    colors: Option<AttributeBuffer<[f32; 3]>>,
    options: WaveOptions,
}

impl ColorWave {
    /// Wave over `heights` with a colour buffer of matching length.
    #[must_use]
    pub fn new(heights: Vec<f32>, base_color: [f32; 3], options: WaveOptions) -> Self {
        let colors = AttributeBuffer::filled(base_color, heights.len());
        Self {
            heights,
            colors: Some(colors),
            options,
        }
    }

    /// Wave that starts with the given colours, e.g. the loader's element
    /// colours. `None` means the colour attribute is missing and every tick
    /// is a logged no-op.
    ///
    /// Returns `None` if the buffer length differs from the height count.
    #[must_use]
    pub fn with_colors(
        heights: Vec<f32>,
        colors: Option<AttributeBuffer<[f32; 3]>>,
        options: WaveOptions,
    ) -> Option<Self> {
        if colors.as_ref().is_some_and(|c| c.len() != heights.len()) {
            return None;
        }
        Some(Self {
            heights,
            colors,
            options,
        })
    }

    /// Wave with no atoms, used before a structure has loaded.
    #[must_use]
    pub fn empty(options: WaveOptions) -> Self {
        Self::new(Vec::new(), [0.0; 3], options)
    }

    /// Per-atom normalized heights.
    #[must_use]
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// The colour buffer, if present.
    #[must_use]
    pub fn colors(&self) -> Option<&AttributeBuffer<[f32; 3]>> {
        self.colors.as_ref()
    }

    /// Mutable colour buffer, for the consumer's dirty handshake.
    pub fn colors_mut(&mut self) -> Option<&mut AttributeBuffer<[f32; 3]>> {
        self.colors.as_mut()
    }

    /// Current wave parameters.
    #[must_use]
    pub fn options(&self) -> &WaveOptions {
        &self.options
    }

    /// Replace the wave parameters; takes effect on the next tick.
    pub fn set_options(&mut self, options: WaveOptions) {
        self.options = options;
    }
}

impl FrameAnimator for ColorWave {
    fn tick(&mut self, clock: &Clock) -> FrameUpdate {
        if !self.options.enabled || self.heights.is_empty() {
            return FrameUpdate::Unchanged;
        }
        let Some(colors) = self.colors.as_mut() else {
            log::warn!("colour wave: no colour attribute, skipping update");
            return FrameUpdate::Unchanged;
        };

        // Reduce the time term in f64 first so long sessions keep precision
        let phase = (clock.elapsed().as_secs_f64()
            * f64::from(self.options.speed))
        .rem_euclid(1.0) as f32;
        let options = &self.options;
        let heights = &self.heights;
        colors.update(|slots| {
            for (slot, &h) in slots.iter_mut().zip(heights) {
                let hue = wrap_unit(h * options.frequency + phase);
                *slot = hsl_to_rgb(hue, options.saturation, options.lightness);
            }
        });
        FrameUpdate::Dirty
    }

    fn name(&self) -> &'static str {
        "color_wave"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn hue_matches_formula_and_stays_in_unit_range() {
        for &h in &[0.0, 0.25, 0.5, 0.99, 1.0] {
            for &t in &[0.0, 0.3, 1.7, 12.0, 1000.25] {
                let hue = wave_hue(h, t, 0.1, 0.5);
                assert!((0.0..1.0).contains(&hue), "hue {hue} out of range");
                let expected = (h * 0.1 + t * 0.5).rem_euclid(1.0);
                assert_close(hue, expected);
            }
        }
    }

    #[test]
    fn hue_repeats_every_inverse_speed() {
        let speed = 0.5;
        for &h in &[0.1, 0.4, 0.8] {
            for &t in &[0.2, 0.9, 3.3] {
                assert_close(
                    wave_hue(h, t, 0.1, speed),
                    wave_hue(h, t + 1.0 / speed, 0.1, speed),
                );
            }
        }
    }

    #[test]
    fn single_atom_at_two_seconds() {
        let hue = wave_hue(0.5, 2.0, 0.1, 0.5);
        assert_close(hue, 0.05);

        let rgb = wave_color(0.5, 2.0, &WaveOptions::default());
        assert_close(rgb[0], 1.0);
        assert_close(rgb[1], 0.3);
        assert_close(rgb[2], 0.0);
    }

    #[test]
    fn tick_writes_every_slot() {
        let mut wave =
            ColorWave::new(vec![0.0, 0.5, 1.0], [0.0; 3], WaveOptions::default());
        let _ = wave.colors_mut().unwrap().take_dirty();

        let update = wave.tick(&Clock::at_secs(2.0));
        assert!(update.is_dirty());

        let colors = wave.colors().unwrap();
        assert!(colors.is_dirty());
        for (i, &h) in [0.0_f32, 0.5, 1.0].iter().enumerate() {
            let want = wave_color(h, 2.0, &WaveOptions::default());
            let got = colors.get(i).unwrap();
            for c in 0..3 {
                assert_close(got[c], want[c]);
            }
        }
    }

    #[test]
    fn empty_wave_is_inert() {
        let mut wave = ColorWave::empty(WaveOptions::default());
        let update = wave.tick(&Clock::at_secs(5.0));
        assert!(!update.is_dirty());
        assert!(wave.colors().unwrap().is_empty());
    }

    #[test]
    fn missing_colors_skip_without_failing() {
        let mut wave =
            ColorWave::with_colors(vec![0.2, 0.8], None, WaveOptions::default())
                .unwrap();
        for t in [0.0, 1.0, 2.0] {
            assert!(!wave.tick(&Clock::at_secs(t)).is_dirty());
        }
        assert!(wave.colors().is_none());
    }

    #[test]
    fn mismatched_color_buffer_is_rejected() {
        let colors = AttributeBuffer::filled([1.0; 3], 3);
        assert!(ColorWave::with_colors(
            vec![0.5],
            Some(colors),
            WaveOptions::default()
        )
        .is_none());
    }

    #[test]
    fn disabled_wave_keeps_base_colors() {
        let options = WaveOptions {
            enabled: false,
            ..WaveOptions::default()
        };
        let mut wave = ColorWave::new(vec![0.3], [0.6, 0.6, 0.6], options);
        assert!(!wave.tick(&Clock::at_secs(1.0)).is_dirty());
        assert_eq!(wave.colors().unwrap().get(0), Some([0.6, 0.6, 0.6]));
    }
}
