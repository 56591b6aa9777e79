use super::config::StackConfig;
use crate::infra::interpolate::{ClampPolicy, interpolate};

/// Render state of one card at a given scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub index: usize,
    /// Vertical offset in percent: positive below, negative above.
    pub y_offset: f32,
    pub scale: f32,
    /// 1.0 for the active card, 0.0 for every other.
    pub opacity: f32,
    pub z_index: i32,
    /// Whether the card receives pointer input.
    pub interactive: bool,
    pub is_active: bool,
}

/// Progress window `[i / n, (i + 1) / n]` owned by card `index`.
pub fn card_window(index: usize, card_count: usize) -> (f32, f32) {
    let n = card_count.max(1) as f32;
    (index as f32 / n, (index + 1) as f32 / n)
}

/// Transform of card `index` of `card_count` at `progress`.
pub fn card_transform(
    index: usize,
    card_count: usize,
    progress: f32,
    active_index: usize,
    cfg: &StackConfig,
) -> CardTransform {
    let (start, end) = card_window(index, card_count);
    let window = [start - cfg.edge_margin, start, end, end + cfg.edge_margin];

    let y_offset = interpolate(
        progress,
        &window,
        &[cfg.travel, 0.0, 0.0, -cfg.travel],
        ClampPolicy::Clamp,
    );
    let scale = interpolate(
        progress,
        &window,
        &[cfg.enter_scale, 1.0, 1.0, cfg.exit_scale],
        ClampPolicy::Clamp,
    );

    let is_active = index == active_index;
    CardTransform {
        index,
        y_offset,
        scale,
        opacity: if is_active { 1.0 } else { 0.0 },
        z_index: if is_active { cfg.active_z_index } else { 0 },
        interactive: is_active,
        is_active,
    }
}
