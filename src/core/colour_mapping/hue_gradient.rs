use crate::core::colour_mapping::colour_map::{ColourMap, ColourMapKind};
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;

const HUE_PHASE_SHIFT: f64 = 0.5;
const SATURATION: f64 = 0.8;
const BRIGHTNESS: f64 = 0.9;

/// Hue-rotation palette: the escape count maps linearly to a hue in [0,1)
/// offset by half a turn, at fixed saturation and brightness. In-set points
/// get a fixed saturated red.
#[derive(Debug)]
pub struct HueGradient {
    max_iterations: u32,
}

impl HueGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for HueGradient {
    fn map(&self, result: EscapeResult) -> Result<Colour, ColourMapError> {
        let count = match result {
            EscapeResult::InSet => return Ok(Colour::RED),
            EscapeResult::Escaped(count) => count,
        };

        if count >= self.max_iterations {
            return Err(ColourMapError::CountExceedsBound {
                count,
                max_iterations: self.max_iterations,
            });
        }

        let mut hue = HUE_PHASE_SHIFT + f64::from(count) / f64::from(self.max_iterations);
        if hue >= 1.0 {
            hue -= 1.0;
        }

        Ok(hsb_to_rgb(hue, SATURATION, BRIGHTNESS))
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::HueGradient
    }
}

/// Standard HSB→RGB conversion for `hue` in [0,1).
fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Colour {
    let c = brightness * saturation;
    let h_prime = hue * 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = brightness - c;
    Colour {
        r: ((r1 + m) * 255.0) as u8,
        g: ((g1 + m) * 255.0) as u8,
        b: ((b1 + m) * 255.0) as u8,
    }
}
