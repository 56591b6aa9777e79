use crate::infra::constants::stack as defaults;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackConfig {
    /// Progress margin on each side of a card window.
    pub edge_margin: f32,
    /// Vertical travel (percent) outside the window.
    pub travel: f32,
    /// Scale before the window.
    pub enter_scale: f32,
    /// Scale after the window.
    pub exit_scale: f32,
    pub active_z_index: i32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            edge_margin: defaults::EDGE_MARGIN,
            travel: defaults::TRAVEL,
            enter_scale: defaults::ENTER_SCALE,
            exit_scale: defaults::EXIT_SCALE,
            active_z_index: defaults::ACTIVE_Z_INDEX,
        }
    }
}
