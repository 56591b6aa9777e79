//! Guard rails for motion overrides.
//!
//! Errors reject values that would break an animation outright (a spring with
//! no stiffness never settles, inverted wrap bounds have no valid range).
//! Warnings flag values that run but probably do not look as intended.

use std::fmt;

use thiserror::Error;

use crate::models::MotionFileConfig;

/// Damping ratio below which the smoothed velocity visibly oscillates.
const UNDERDAMPED_RATIO: f32 = 0.5;
/// Widest wrap window (percent) before the duplicated strip can show a seam.
const MAX_WRAP_SPAN: f32 = 50.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("{field} must be a finite number greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be a finite, non-negative number (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("marquee.wrap_min and marquee.wrap_max must be set together")]
    PartialWrapBounds,
    #[error("marquee.wrap_min ({min}) must be below marquee.wrap_max ({max})")]
    InvertedWrapBounds { min: f32, max: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    UnderdampedSpring { ratio: f32 },
    WideWrapSpan { span: f32 },
    ZeroBaseVelocity,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnderdampedSpring { ratio } => write!(
                f,
                "spring damping ratio {ratio:.2} is below {UNDERDAMPED_RATIO}; marquee speed will wobble"
            ),
            ConfigWarning::WideWrapSpan { span } => write!(
                f,
                "wrap span of {span}% exceeds {MAX_WRAP_SPAN}%; raise marquee.min_copies to avoid a visible seam"
            ),
            ConfigWarning::ZeroBaseVelocity => write!(
                f,
                "marquee.base_velocity is 0; rows only move while the page scrolls"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn push(&mut self, warning: ConfigWarning) {
        self.0.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }
}

fn positive_f32(
    field: &'static str,
    value: Option<f32>,
) -> Result<(), ConfigValidationError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => {
            Err(ConfigValidationError::NotPositive {
                field,
                value: v as f64,
            })
        }
        _ => Ok(()),
    }
}

fn non_negative_f32(
    field: &'static str,
    value: Option<f32>,
) -> Result<(), ConfigValidationError> {
    match value {
        Some(v) if !(v.is_finite() && v >= 0.0) => {
            Err(ConfigValidationError::Negative {
                field,
                value: v as f64,
            })
        }
        _ => Ok(()),
    }
}

impl MotionFileConfig {
    /// Apply guard rails; returns the warnings for values that are legal but
    /// suspicious.
    pub fn validate(&self) -> Result<ConfigWarnings, ConfigValidationError> {
        let mut warnings = ConfigWarnings::default();

        let spring = &self.spring;
        positive_f32("spring.stiffness", spring.stiffness)?;
        positive_f32("spring.mass", spring.mass)?;
        non_negative_f32("spring.damping", spring.damping)?;
        if let (Some(stiffness), Some(damping)) =
            (spring.stiffness, spring.damping)
        {
            let mass = spring.mass.unwrap_or(1.0);
            let ratio = damping / (2.0 * (stiffness * mass).sqrt());
            if ratio < UNDERDAMPED_RATIO {
                warnings.push(ConfigWarning::UnderdampedSpring { ratio });
            }
        }

        let marquee = &self.marquee;
        match (marquee.wrap_min, marquee.wrap_max) {
            (Some(min), Some(max)) => {
                if !(min.is_finite() && max.is_finite() && min < max) {
                    return Err(ConfigValidationError::InvertedWrapBounds {
                        min,
                        max,
                    });
                }
                if max - min > MAX_WRAP_SPAN {
                    warnings.push(ConfigWarning::WideWrapSpan {
                        span: max - min,
                    });
                }
            }
            (None, None) => {}
            _ => return Err(ConfigValidationError::PartialWrapBounds),
        }
        positive_f32("marquee.velocity_reference", marquee.velocity_reference)?;
        if let Some(factor) = marquee.factor_at_reference
            && !factor.is_finite()
        {
            return Err(ConfigValidationError::NotFinite {
                field: "marquee.factor_at_reference",
                value: factor as f64,
            });
        }
        if let Some(copies) = marquee.min_copies
            && copies == 0
        {
            return Err(ConfigValidationError::NotPositive {
                field: "marquee.min_copies",
                value: 0.0,
            });
        }
        if let Some(velocity) = marquee.base_velocity {
            if !velocity.is_finite() {
                return Err(ConfigValidationError::NotFinite {
                    field: "marquee.base_velocity",
                    value: velocity as f64,
                });
            }
            if velocity == 0.0 {
                warnings.push(ConfigWarning::ZeroBaseVelocity);
            }
        }

        let stack = &self.stack;
        non_negative_f32("stack.edge_margin", stack.edge_margin)?;
        non_negative_f32("stack.travel", stack.travel)?;
        positive_f32("stack.enter_scale", stack.enter_scale)?;
        positive_f32("stack.exit_scale", stack.exit_scale)?;

        if let Some(period) = self.reels.period_ms
            && period == 0
        {
            return Err(ConfigValidationError::NotPositive {
                field: "reels.period_ms",
                value: 0.0,
            });
        }

        non_negative_f32("navigation.lookahead", self.navigation.lookahead)?;
        non_negative_f32(
            "navigation.scrolled_threshold",
            self.navigation.scrolled_threshold,
        )?;
        non_negative_f32("reveal.margin", self.reveal.margin)?;

        Ok(warnings)
    }
}
