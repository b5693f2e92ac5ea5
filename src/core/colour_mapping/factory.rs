use crate::core::colour_mapping::banded_gradient::BandedGradient;
use crate::core::colour_mapping::colour_map::{ColourMap, ColourMapKind};
use crate::core::colour_mapping::hue_gradient::HueGradient;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::BandedGradient => Box::new(BandedGradient::new(max_iterations)),
        ColourMapKind::HueGradient => Box::new(HueGradient::new(max_iterations)),
    }
}
