use crate::core::colour_mapping::colour_map::{ColourMap, ColourMapKind};
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;

/// Four-band RGB palette over integer escape counts.
///
/// Designed around a bound of 127: count 0 is pure red, then linear ramps
/// red→blue over [1,16), blue→green over [16,32), green→red over [32,64)
/// and red fading towards black over [64,bound]. The per-band slopes (16,
/// 16, 8 and 4 channel units per iteration) meet at the band edges, so
/// consecutive counts never differ by more than one ramp step.
#[derive(Debug)]
pub struct BandedGradient {
    max_iterations: u32,
}

impl BandedGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl ColourMap for BandedGradient {
    fn map(&self, result: EscapeResult) -> Result<Colour, ColourMapError> {
        let count = match result {
            EscapeResult::InSet => return Ok(Colour::BLACK),
            EscapeResult::Escaped(count) => count,
        };

        if count >= self.max_iterations {
            return Err(ColourMapError::CountExceedsBound {
                count,
                max_iterations: self.max_iterations,
            });
        }

        let n = count as i32;
        let (r, g, b) = if n == 0 {
            (255, 0, 0)
        } else if n < 16 {
            (16 * (16 - n), 0, 16 * n - 1)
        } else if n < 32 {
            (0, 16 * (n - 16), 16 * (32 - n) - 1)
        } else if n < 64 {
            (8 * (n - 32), 8 * (64 - n) - 1, 0)
        } else {
            // clamped so a bound above 127 darkens to black instead of wrapping
            (255 - (n - 64) * 4, 0, 0)
        };

        Ok(Colour {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        })
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::BandedGradient
    }
}
