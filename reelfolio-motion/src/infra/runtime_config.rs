//! Runtime configuration for user-adjustable motion constants
//!
//! `RuntimeConfig` holds `Option<T>` overrides; accessors fall back to the
//! compiled constants when a value is not set.

use reelfolio_config::MotionFileConfig;

use crate::domains::marquee::MarqueeConfig;
use crate::domains::stack::StackConfig;
use crate::infra::constants::{marquee, page, stack};
use crate::infra::physics::SpringConfig;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RuntimeConfig {
    // ========== MARQUEE ==========
    pub marquee_base_velocity: Option<f32>,
    pub marquee_wrap: Option<(f32, f32)>,
    pub marquee_velocity_reference: Option<f32>,
    pub marquee_factor_at_reference: Option<f32>,
    pub marquee_min_copies: Option<usize>,

    // ========== SPRING ==========
    pub spring_stiffness: Option<f32>,
    pub spring_damping: Option<f32>,
    pub spring_mass: Option<f32>,

    // ========== STACK ==========
    pub stack_edge_margin: Option<f32>,
    pub stack_travel: Option<f32>,
    pub stack_enter_scale: Option<f32>,
    pub stack_exit_scale: Option<f32>,

    // ========== REELS ==========
    pub reels_period_ms: Option<u64>,
    pub reels_pause_on_hover: Option<bool>,

    // ========== NAVIGATION / REVEAL ==========
    pub nav_lookahead: Option<f32>,
    pub nav_scrolled_threshold: Option<f32>,
    pub reveal_margin: Option<f32>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take overrides from a loaded (and already validated) override file.
    pub fn from_file_config(file: &MotionFileConfig) -> Self {
        let wrap = match (file.marquee.wrap_min, file.marquee.wrap_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        };

        Self {
            marquee_base_velocity: file.marquee.base_velocity,
            marquee_wrap: wrap,
            marquee_velocity_reference: file.marquee.velocity_reference,
            marquee_factor_at_reference: file.marquee.factor_at_reference,
            marquee_min_copies: file.marquee.min_copies,
            spring_stiffness: file.spring.stiffness,
            spring_damping: file.spring.damping,
            spring_mass: file.spring.mass,
            stack_edge_margin: file.stack.edge_margin,
            stack_travel: file.stack.travel,
            stack_enter_scale: file.stack.enter_scale,
            stack_exit_scale: file.stack.exit_scale,
            reels_period_ms: file.reels.period_ms,
            reels_pause_on_hover: file.reels.pause_on_hover,
            nav_lookahead: file.navigation.lookahead,
            nav_scrolled_threshold: file.navigation.scrolled_threshold,
            reveal_margin: file.reveal.margin,
        }
    }

    // ========== MARQUEE ACCESSORS ==========

    /// Drift speed magnitude of the hero rows.
    pub fn marquee_base_velocity(&self) -> f32 {
        self.marquee_base_velocity
            .unwrap_or(marquee::HERO_ROW_VELOCITY)
    }

    pub fn marquee_wrap(&self) -> (f32, f32) {
        self.marquee_wrap
            .unwrap_or((marquee::wrap::MIN, marquee::wrap::MAX))
    }

    pub fn marquee_velocity_reference(&self) -> f32 {
        self.marquee_velocity_reference
            .unwrap_or(marquee::factor::VELOCITY_REFERENCE)
    }

    pub fn marquee_factor_at_reference(&self) -> f32 {
        self.marquee_factor_at_reference
            .unwrap_or(marquee::factor::AT_REFERENCE)
    }

    pub fn marquee_min_copies(&self) -> usize {
        self.marquee_min_copies.unwrap_or(marquee::MIN_COPIES)
    }

    // ========== SPRING ACCESSORS ==========

    pub fn spring_stiffness(&self) -> f32 {
        self.spring_stiffness.unwrap_or(marquee::spring::STIFFNESS)
    }

    pub fn spring_damping(&self) -> f32 {
        self.spring_damping.unwrap_or(marquee::spring::DAMPING)
    }

    pub fn spring_mass(&self) -> f32 {
        self.spring_mass.unwrap_or(marquee::spring::MASS)
    }

    // ========== STACK ACCESSORS ==========

    pub fn stack_edge_margin(&self) -> f32 {
        self.stack_edge_margin.unwrap_or(stack::EDGE_MARGIN)
    }

    pub fn stack_travel(&self) -> f32 {
        self.stack_travel.unwrap_or(stack::TRAVEL)
    }

    pub fn stack_enter_scale(&self) -> f32 {
        self.stack_enter_scale.unwrap_or(stack::ENTER_SCALE)
    }

    pub fn stack_exit_scale(&self) -> f32 {
        self.stack_exit_scale.unwrap_or(stack::EXIT_SCALE)
    }

    // ========== PAGE ACCESSORS ==========

    pub fn reels_period_ms(&self) -> u64 {
        self.reels_period_ms.unwrap_or(page::reels::PERIOD_MS)
    }

    pub fn reels_pause_on_hover(&self) -> bool {
        self.reels_pause_on_hover
            .unwrap_or(page::reels::PAUSE_ON_HOVER)
    }

    pub fn nav_lookahead(&self) -> f32 {
        self.nav_lookahead.unwrap_or(page::navigation::LOOKAHEAD)
    }

    pub fn nav_scrolled_threshold(&self) -> f32 {
        self.nav_scrolled_threshold
            .unwrap_or(page::navigation::SCROLLED_THRESHOLD)
    }

    pub fn reveal_margin(&self) -> f32 {
        self.reveal_margin.unwrap_or(page::reveal::MARGIN)
    }

    // ========== BUNDLES ==========

    pub fn spring_config(&self) -> SpringConfig {
        SpringConfig::new(
            self.spring_stiffness(),
            self.spring_damping(),
            self.spring_mass(),
        )
    }

    /// Marquee settings for a row drifting at `base_velocity`.
    pub fn marquee_config(&self, base_velocity: f32) -> MarqueeConfig {
        let (wrap_min, wrap_max) = self.marquee_wrap();
        MarqueeConfig {
            base_velocity,
            wrap_min,
            wrap_max,
            velocity_reference: self.marquee_velocity_reference(),
            factor_at_reference: self.marquee_factor_at_reference(),
            min_copies: self.marquee_min_copies(),
            spring: self.spring_config(),
        }
    }

    pub fn stack_config(&self) -> StackConfig {
        StackConfig {
            edge_margin: self.stack_edge_margin(),
            travel: self.stack_travel(),
            enter_scale: self.stack_enter_scale(),
            exit_scale: self.stack_exit_scale(),
            active_z_index: stack::ACTIVE_Z_INDEX,
        }
    }
}
