use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;

/// Maps an escape-time result to a displayable colour.
///
/// Implementations are deterministic pure functions; the only error is a
/// contract violation (an escape count at or above the configured bound).
pub trait ColourMap: Send + Sync {
    fn map(&self, result: EscapeResult) -> Result<Colour, ColourMapError>;

    fn kind(&self) -> ColourMapKind;

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ColourMapKind {
    #[default]
    BandedGradient,
    HueGradient,
}

impl ColourMapKind {
    pub const ALL: &'static [ColourMapKind] =
        &[ColourMapKind::BandedGradient, ColourMapKind::HueGradient];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BandedGradient => "Banded gradient",
            Self::HueGradient => "Hue gradient",
        }
    }

    /// The iteration bound each palette was designed around: the banded
    /// ramps cover counts up to 127, the hue rotation spreads over 1000.
    #[must_use]
    pub fn default_max_iterations(&self) -> u32 {
        match self {
            Self::BandedGradient => 127,
            Self::HueGradient => 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourMapKind::ALL.first(), Some(&ColourMapKind::default()));
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourMapKind::ALL.iter().map(|k| k.display_name()).collect();

        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn default_bounds_are_positive() {
        for kind in ColourMapKind::ALL {
            assert!(kind.default_max_iterations() > 0);
        }
    }
}
