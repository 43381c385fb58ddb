//! Easing curves.
//!
//! An easing curve maps normalized progress in `[0, 1]` to eased progress.
//! Filters that interpolate (normalization, edge shaping) take an [`Easing`],
//! which is either one of the named curves or a caller-supplied [`EasingFn`].

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// Strategy for custom easing curves.
///
/// Any `Fn(f64) -> f64` closure that is `Send + Sync` implements this trait.
pub trait EasingFn: Send + Sync {
    fn ease(&self, t: f64) -> f64;
}

impl<F> EasingFn for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn ease(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Named easing curves plus an escape hatch for custom ones.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Identity.
    #[default]
    Linear,
    /// Quadratic, slow start.
    EaseIn,
    /// Quadratic, slow end.
    EaseOut,
    /// Quadratic, slow start and end.
    EaseInOut,
    /// Cubic, fast start and end with a plateau in the middle.
    InEaseOut,
    /// `t^1.55`, a gentler version of [`Easing::EaseIn`].
    EaseInWeak,
    /// `t^7`.
    EaseInStrong,
    /// Caller-supplied curve. Not serializable.
    #[serde(skip)]
    Custom(Arc<dyn EasingFn>),
}

impl Easing {
    /// Wraps a closure as a custom curve.
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn ease(&self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => -t * (t - 2.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::InEaseOut => {
                let y = 2.0 * t - 1.0;
                0.5 * y * y * y + 0.5
            }
            Self::EaseInWeak => t.powf(1.55),
            Self::EaseInStrong => t.powi(7),
            Self::Custom(f) => f.ease(t),
        }
    }

    /// True only for [`Easing::Linear`]; custom curves are never assumed to be the identity.
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Linear)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::EaseIn => f.write_str("EaseIn"),
            Self::EaseOut => f.write_str("EaseOut"),
            Self::EaseInOut => f.write_str("EaseInOut"),
            Self::InEaseOut => f.write_str("InEaseOut"),
            Self::EaseInWeak => f.write_str("EaseInWeak"),
            Self::EaseInStrong => f.write_str("EaseInStrong"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
