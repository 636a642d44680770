use serde::Deserialize;

use crate::core::data::bounds::{Bounds, BoundsError};

/// How a zoom factor is turned into a scale: negative factors divide by their
/// magnitude, everything else multiplies. Dividing (rather than multiplying by
/// the reciprocal) makes `zoom(f)` followed by `zoom(-f)` an exact inverse for
/// most factors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Scale {
    Multiply(f64),
    Divide(f64),
}

impl Scale {
    #[must_use]
    pub fn from_factor(factor: f64) -> Self {
        if factor < 0.0 {
            Self::Divide(factor.abs())
        } else {
            Self::Multiply(factor)
        }
    }

    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Multiply(by) => value * by,
            Self::Divide(by) => value / by,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomPolicy {
    /// Scale each bound around zero. Zooming in drifts the view towards the
    /// origin of the plane.
    #[default]
    Origin,
    /// Scale the spans around the midpoint of the current view.
    #[serde(alias = "center")]
    Centre,
}

impl ZoomPolicy {
    pub fn apply(self, bounds: &Bounds, factor: f64) -> Result<Bounds, BoundsError> {
        let scale = Scale::from_factor(factor);

        match self {
            Self::Origin => bounds.map_each(|value| scale.apply(value)),
            Self::Centre => {
                let centre = bounds.centre();
                let half_width = scale.apply(bounds.width() / 2.0);
                let half_height = scale.apply(bounds.height() / 2.0);

                Bounds::new(
                    centre.re - half_width,
                    centre.re + half_width,
                    centre.im - half_height,
                    centre.im + half_height,
                )
            }
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Centre => "centre",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_from_factor() {
        assert_eq!(Scale::from_factor(1.2), Scale::Multiply(1.2));
        assert_eq!(Scale::from_factor(-2.0), Scale::Divide(2.0));
        assert_eq!(Scale::from_factor(0.0), Scale::Multiply(0.0));
    }

    #[test]
    fn test_origin_policy_scales_every_bound_around_zero() {
        let zoomed = ZoomPolicy::Origin.apply(&Bounds::default(), -2.0).unwrap();

        assert_eq!(zoomed, Bounds::new(-1.0, 1.0, -1.25, 0.75).unwrap());
    }

    #[test]
    fn test_origin_policy_moves_the_centre_towards_zero() {
        let bounds = Bounds::new(1.0, 3.0, 1.0, 3.0).unwrap();

        let zoomed = ZoomPolicy::Origin.apply(&bounds, -2.0).unwrap();

        assert_eq!(zoomed.centre().re, 1.0);
        assert_eq!(zoomed.centre().im, 1.0);
    }

    #[test]
    fn test_centre_policy_keeps_the_centre() {
        let zoomed = ZoomPolicy::Centre.apply(&Bounds::default(), -2.0).unwrap();

        assert_eq!(zoomed, Bounds::new(-1.0, 1.0, -1.5, 0.5).unwrap());
    }

    #[test]
    fn test_zero_factor_collapses_the_bounds() {
        for policy in [ZoomPolicy::Origin, ZoomPolicy::Centre] {
            assert!(matches!(
                policy.apply(&Bounds::default(), 0.0),
                Err(BoundsError::InvalidSize { .. })
            ));
        }
    }
}
