use crate::constants::*;

/// Phase clock behind the liquid SVG distortion. Each frame nudges the
/// turbulence `baseFrequency` around its authored value.
#[derive(Clone, Debug, Default)]
pub struct LiquidDistortion {
    phase: f32,
}

impl LiquidDistortion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) -> (f32, f32) {
        self.phase += LIQUID_PHASE_STEP;
        self.base_frequency()
    }

    pub fn base_frequency(&self) -> (f32, f32) {
        let t = self.phase;
        (
            LIQUID_BASE_FREQ_X + t.sin() * LIQUID_FREQ_SWING,
            LIQUID_BASE_FREQ_Y + (t * 0.7).cos() * LIQUID_FREQ_SWING,
        )
    }

    /// Attribute value, e.g. `"0.0100 0.0250"`.
    pub fn attribute(&self) -> String {
        let (x, y) = self.base_frequency();
        format!("{:.4} {:.4}", x, y)
    }
}
