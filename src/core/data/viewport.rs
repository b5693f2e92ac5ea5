use crate::core::data::pixel_point::PixelPoint;
use crate::core::data::plane_point::PlanePoint;
use std::error::Error;
use std::fmt;

/// Pan distance in pixels per directional input. Scaled by the current
/// zoom so the on-screen speed stays constant at every depth.
pub const PAN_STEP_PIXELS: f64 = 40.0;

/// Keyboard zoom factor applied to the scale per key press.
pub const KEY_ZOOM_FACTOR: f64 = 0.9;

/// Click zoom halves (or doubles) the visible plane extent.
pub const CLICK_ZOOM_FACTOR: f64 = 0.5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidScale { scale: f64 },
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be positive and finite: {}", scale)
            }
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be non-zero: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// The mapping between screen pixels and complex-plane coordinates.
///
/// Parameterized as centre + scale (plane units per pixel); every derived
/// operation (pan step, keyboard zoom, anchored zoom) is expressed in the
/// same parameterization. Operations consume the value and return the
/// updated one; nothing mutates in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    centre: PlanePoint,
    scale: f64,
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(
        centre: PlanePoint,
        scale: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, ViewportError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale { scale });
        }

        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            centre,
            scale,
            width,
            height,
        })
    }

    /// The classic whole-set view: centred on (-0.7, 0) with the real axis
    /// spanning four plane units.
    pub fn classic(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        let scale = 4.0 / f64::from(width);
        Self::new(PlanePoint { re: -0.7, im: 0.0 }, scale, width, height)
    }

    #[must_use]
    pub fn centre(&self) -> PlanePoint {
        self.centre
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maps a pixel to its complex-plane coordinate.
    #[must_use]
    pub fn plane_point(&self, pixel: PixelPoint) -> PlanePoint {
        PlanePoint {
            re: self.centre.re + (f64::from(pixel.x) - f64::from(self.width) / 2.0) * self.scale,
            im: self.centre.im + (f64::from(pixel.y) - f64::from(self.height) / 2.0) * self.scale,
        }
    }

    #[must_use]
    pub fn pan(self, direction: PanDirection) -> Self {
        let step = PAN_STEP_PIXELS * self.scale;
        let centre = match direction {
            PanDirection::Up => PlanePoint {
                re: self.centre.re,
                im: self.centre.im - step,
            },
            PanDirection::Down => PlanePoint {
                re: self.centre.re,
                im: self.centre.im + step,
            },
            PanDirection::Left => PlanePoint {
                re: self.centre.re - step,
                im: self.centre.im,
            },
            PanDirection::Right => PlanePoint {
                re: self.centre.re + step,
                im: self.centre.im,
            },
        };

        Self { centre, ..self }
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self {
            scale: self.scale * KEY_ZOOM_FACTOR,
            ..self
        }
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self {
            scale: self.scale / KEY_ZOOM_FACTOR,
            ..self
        }
    }

    #[must_use]
    pub fn zoom_in_at(self, pixel: PixelPoint) -> Self {
        self.zoom_at(pixel, CLICK_ZOOM_FACTOR)
    }

    #[must_use]
    pub fn zoom_out_at(self, pixel: PixelPoint) -> Self {
        self.zoom_at(pixel, 1.0 / CLICK_ZOOM_FACTOR)
    }

    /// Rescales while keeping the plane coordinate under `pixel` fixed.
    ///
    /// The anchor is recovered before the scale change and the centre is
    /// recomputed from it with the new scale, so the same pixel maps to the
    /// same plane coordinate afterwards.
    fn zoom_at(self, pixel: PixelPoint, factor: f64) -> Self {
        let anchor = self.plane_point(pixel);
        let scale = self.scale * factor;
        let centre = PlanePoint {
            re: anchor.re - (f64::from(pixel.x) - f64::from(self.width) / 2.0) * scale,
            im: anchor.im - (f64::from(pixel.y) - f64::from(self.height) / 2.0) * scale,
        };

        Self {
            centre,
            scale,
            ..self
        }
    }

    /// New pixel dimensions, same centre and scale.
    pub fn resized(self, width: u32, height: u32) -> Result<Self, ViewportError> {
        Self::new(self.centre, self.scale, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= TOLERANCE,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn test_viewport() -> Viewport {
        Viewport::new(PlanePoint { re: -0.7, im: 0.0 }, 0.004, 1000, 600).unwrap()
    }

    #[test]
    fn test_new_rejects_non_positive_scale() {
        let centre = PlanePoint { re: 0.0, im: 0.0 };

        assert_eq!(
            Viewport::new(centre, 0.0, 100, 100),
            Err(ViewportError::InvalidScale { scale: 0.0 })
        );
        assert_eq!(
            Viewport::new(centre, -0.5, 100, 100),
            Err(ViewportError::InvalidScale { scale: -0.5 })
        );
    }

    #[test]
    fn test_new_rejects_non_finite_scale() {
        let centre = PlanePoint { re: 0.0, im: 0.0 };

        assert!(Viewport::new(centre, f64::NAN, 100, 100).is_err());
        assert!(Viewport::new(centre, f64::INFINITY, 100, 100).is_err());
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        let centre = PlanePoint { re: 0.0, im: 0.0 };

        assert_eq!(
            Viewport::new(centre, 0.004, 0, 100),
            Err(ViewportError::InvalidSize {
                width: 0,
                height: 100
            })
        );
        assert_eq!(
            Viewport::new(centre, 0.004, 100, 0),
            Err(ViewportError::InvalidSize {
                width: 100,
                height: 0
            })
        );
    }

    #[test]
    fn test_classic_view_spans_four_plane_units() {
        let viewport = Viewport::classic(1000, 600).unwrap();

        assert_eq!(viewport.centre(), PlanePoint { re: -0.7, im: 0.0 });
        assert_approx_eq(viewport.scale() * f64::from(viewport.width()), 4.0);
    }

    #[test]
    fn test_centre_pixel_maps_to_centre_coordinate() {
        let viewport = test_viewport();
        let centre = viewport.plane_point(PixelPoint { x: 500, y: 300 });

        assert_approx_eq(centre.re, -0.7);
        assert_approx_eq(centre.im, 0.0);
    }

    #[test]
    fn test_plane_point_is_linear_in_the_pixel() {
        let viewport = test_viewport();
        let origin = viewport.plane_point(PixelPoint { x: 0, y: 0 });
        let one_right = viewport.plane_point(PixelPoint { x: 1, y: 0 });
        let one_down = viewport.plane_point(PixelPoint { x: 0, y: 1 });

        assert_approx_eq(one_right.re - origin.re, viewport.scale());
        assert_approx_eq(one_right.im, origin.im);
        assert_approx_eq(one_down.im - origin.im, viewport.scale());
        assert_approx_eq(one_down.re, origin.re);
    }

    #[test]
    fn test_pan_moves_forty_pixels_worth_of_plane() {
        let viewport = test_viewport();
        let step = PAN_STEP_PIXELS * viewport.scale();

        let up = viewport.pan(PanDirection::Up);
        assert_approx_eq(up.centre().im, viewport.centre().im - step);
        assert_approx_eq(up.centre().re, viewport.centre().re);

        let down = viewport.pan(PanDirection::Down);
        assert_approx_eq(down.centre().im, viewport.centre().im + step);

        let left = viewport.pan(PanDirection::Left);
        assert_approx_eq(left.centre().re, viewport.centre().re - step);

        let right = viewport.pan(PanDirection::Right);
        assert_approx_eq(right.centre().re, viewport.centre().re + step);
    }

    #[test]
    fn test_pan_speed_tracks_zoom_level() {
        let far = test_viewport();
        let near = far.zoom_in().zoom_in().zoom_in();

        let far_step = far.pan(PanDirection::Right).centre().re - far.centre().re;
        let near_step = near.pan(PanDirection::Right).centre().re - near.centre().re;

        // same pixel distance, smaller plane distance when zoomed in
        assert_approx_eq(far_step / far.scale(), near_step / near.scale());
        assert!(near_step.abs() < far_step.abs());
    }

    #[test]
    fn test_keyboard_zoom_round_trip_restores_scale() {
        let viewport = test_viewport();
        let round_trip = viewport.zoom_in().zoom_out();

        assert_approx_eq(round_trip.scale(), viewport.scale());
        assert_eq!(round_trip.centre(), viewport.centre());
    }

    #[test]
    fn test_keyboard_zoom_keeps_centre_fixed() {
        let viewport = test_viewport();

        assert_eq!(viewport.zoom_in().centre(), viewport.centre());
        assert_eq!(viewport.zoom_out().centre(), viewport.centre());
    }

    #[test]
    fn test_zoom_in_at_halves_the_visible_extent() {
        let viewport = test_viewport();
        let zoomed = viewport.zoom_in_at(PixelPoint { x: 250, y: 150 });

        assert_approx_eq(zoomed.scale(), viewport.scale() * 0.5);
    }

    #[test]
    fn test_zoom_at_keeps_the_clicked_coordinate_under_the_cursor() {
        let viewport = test_viewport();
        let cursor = PixelPoint { x: 123, y: 456 };

        let before = viewport.plane_point(cursor);
        let after_in = viewport.zoom_in_at(cursor).plane_point(cursor);
        let after_out = viewport.zoom_out_at(cursor).plane_point(cursor);

        assert_approx_eq(after_in.re, before.re);
        assert_approx_eq(after_in.im, before.im);
        assert_approx_eq(after_out.re, before.re);
        assert_approx_eq(after_out.im, before.im);
    }

    #[test]
    fn test_zoom_at_centre_pixel_leaves_centre_fixed() {
        let viewport = test_viewport();
        let zoomed = viewport.zoom_in_at(PixelPoint { x: 500, y: 300 });

        assert_approx_eq(zoomed.centre().re, viewport.centre().re);
        assert_approx_eq(zoomed.centre().im, viewport.centre().im);
    }

    #[test]
    fn test_zoom_at_round_trip_restores_view() {
        let viewport = test_viewport();
        let cursor = PixelPoint { x: 700, y: 100 };
        let round_trip = viewport.zoom_in_at(cursor).zoom_out_at(cursor);

        assert_approx_eq(round_trip.scale(), viewport.scale());
        assert_approx_eq(round_trip.centre().re, viewport.centre().re);
        assert_approx_eq(round_trip.centre().im, viewport.centre().im);
    }

    #[test]
    fn test_resized_keeps_centre_and_scale() {
        let viewport = test_viewport();
        let resized = viewport.resized(640, 480).unwrap();

        assert_eq!(resized.width(), 640);
        assert_eq!(resized.height(), 480);
        assert_eq!(resized.centre(), viewport.centre());
        assert_eq!(resized.scale(), viewport.scale());
    }

    #[test]
    fn test_resized_rejects_zero_dimensions() {
        let viewport = test_viewport();

        assert!(viewport.resized(0, 480).is_err());
        assert!(viewport.resized(640, 0).is_err());
    }

    #[test]
    fn test_extreme_zoom_still_produces_finite_coordinates() {
        // scale near the bottom of the double range: output degrades to
        // blocky neighbouring pixels mapping to equal coordinates, but the
        // transform stays finite
        let viewport = Viewport::new(PlanePoint { re: -0.7, im: 0.0 }, 1e-300, 1000, 600).unwrap();

        let a = viewport.plane_point(PixelPoint { x: 0, y: 0 });
        let b = viewport.plane_point(PixelPoint { x: 999, y: 599 });

        assert!(a.re.is_finite() && a.im.is_finite());
        assert!(b.re.is_finite() && b.im.is_finite());
    }
}
