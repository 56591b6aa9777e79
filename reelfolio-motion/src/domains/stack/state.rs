use super::config::StackConfig;
use super::transform::{CardTransform, card_transform};

/// Card owning `progress` among `card_count` cards.
///
/// `floor(progress * n)` clamped to the last card, so progress 1.0 keeps the
/// last card active instead of indexing past it.
pub fn active_index_for(progress: f32, card_count: usize) -> usize {
    let n = card_count.max(1);
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    ((progress * n as f32).floor() as usize).min(n - 1)
}

/// Active card transition between two progress updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveChange {
    pub previous: usize,
    pub current: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollStack {
    cfg: StackConfig,
    card_count: usize,
    progress: f32,
    active_index: usize,
}

impl ScrollStack {
    pub fn new(card_count: usize, cfg: StackConfig) -> Self {
        let card_count = if card_count == 0 {
            log::warn!("scroll stack created without cards; treating as one");
            1
        } else {
            card_count
        };

        Self {
            cfg,
            card_count,
            progress: 0.0,
            active_index: 0,
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn config(&self) -> &StackConfig {
        &self.cfg
    }

    /// Record new scroll progress. Returns the transition when the active
    /// card changed.
    pub fn set_progress(&mut self, progress: f32) -> Option<ActiveChange> {
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        let current = active_index_for(self.progress, self.card_count);
        if current == self.active_index {
            return None;
        }

        let change = ActiveChange {
            previous: self.active_index,
            current,
        };
        log::trace!("scroll stack active card {} -> {}", change.previous, current);
        self.active_index = current;
        Some(change)
    }

    pub fn transform(&self, index: usize) -> CardTransform {
        card_transform(
            index,
            self.card_count,
            self.progress,
            self.active_index,
            &self.cfg,
        )
    }

    pub fn transforms(&self) -> Vec<CardTransform> {
        (0..self.card_count).map(|i| self.transform(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping_for_four_cards() {
        assert_eq!(active_index_for(0.0, 4), 0);
        assert_eq!(active_index_for(0.24, 4), 0);
        assert_eq!(active_index_for(0.26, 4), 1);
        assert_eq!(active_index_for(0.5, 4), 2);
        assert_eq!(active_index_for(0.99, 4), 3);
        assert_eq!(active_index_for(1.0, 4), 3);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(active_index_for(-0.5, 4), 0);
        assert_eq!(active_index_for(1.7, 4), 3);
        assert_eq!(active_index_for(f32::NAN, 4), 0);
        assert_eq!(active_index_for(0.7, 0), 0);
    }

    #[test]
    fn change_reported_only_on_transition() {
        let mut stack = ScrollStack::new(4, StackConfig::default());
        assert_eq!(stack.set_progress(0.1), None);
        assert_eq!(
            stack.set_progress(0.3),
            Some(ActiveChange {
                previous: 0,
                current: 1
            })
        );
        assert_eq!(stack.set_progress(0.4), None);
        assert_eq!(
            stack.set_progress(0.05),
            Some(ActiveChange {
                previous: 1,
                current: 0
            })
        );
    }

    #[test]
    fn empty_stack_behaves_as_single_card() {
        let mut stack = ScrollStack::new(0, StackConfig::default());
        assert_eq!(stack.card_count(), 1);
        assert_eq!(stack.set_progress(1.0), None);
        assert!(stack.transform(0).is_active);
    }
}
