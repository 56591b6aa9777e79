use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reelfolio_motion::domains::stack::{
    MediaPlayback, PlaybackError, ScrollStack, StackConfig, StackMessage, WorkStack,
    active_index_for,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Play(usize),
    Pause(usize),
    Rewind(usize),
}

/// Records calls from every card into one shared log.
#[derive(Debug)]
struct Recorder {
    index: usize,
    log: Rc<RefCell<Vec<Call>>>,
    reject_play: bool,
}

impl MediaPlayback for Recorder {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.log.borrow_mut().push(Call::Play(self.index));
        if self.reject_play {
            Err(PlaybackError::Rejected("autoplay blocked".into()))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push(Call::Pause(self.index));
    }

    fn rewind(&mut self) {
        self.log.borrow_mut().push(Call::Rewind(self.index));
    }
}

fn recorded_stack(
    cards: usize,
    reject_play: bool,
) -> (WorkStack<Recorder>, Rc<RefCell<Vec<Call>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let players = (0..cards)
        .map(|index| Recorder {
            index,
            log: Rc::clone(&log),
            reject_play,
        })
        .collect();
    let work = WorkStack::new(0.0, 1000.0, StackConfig::default(), players);
    (work, log)
}

#[test]
fn index_mapping_examples() {
    assert_eq!(active_index_for(0.24, 4), 0);
    assert_eq!(active_index_for(0.26, 4), 1);
    assert_eq!(active_index_for(0.99, 4), 3);
    assert_eq!(active_index_for(1.0, 4), 3);
}

#[test]
fn exactly_one_card_is_active() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let cards = rng.random_range(1..12);
        let mut stack = ScrollStack::new(cards, StackConfig::default());
        for _ in 0..100 {
            stack.set_progress(rng.random_range(-0.2..1.2));
            let transforms = stack.transforms();
            assert_eq!(transforms.len(), cards);

            let active: Vec<_> = transforms.iter().filter(|t| t.is_active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].index, stack.active_index());
            assert_eq!(active[0].opacity, 1.0);
            assert_eq!(active[0].z_index, 10);
            assert!(
                transforms
                    .iter()
                    .filter(|t| !t.is_active)
                    .all(|t| t.opacity == 0.0 && !t.interactive && t.z_index == 0)
            );
        }
    }
}

#[test]
fn same_progress_gives_same_transforms() {
    let mut stack = ScrollStack::new(4, StackConfig::default());
    stack.set_progress(0.61);
    let first = stack.transforms();
    assert_eq!(stack.set_progress(0.61), None);
    assert_eq!(stack.transforms(), first);
}

#[test]
fn transitions_pause_rewind_then_play() {
    let (mut work, log) = recorded_stack(4, false);
    work.mount();
    assert_eq!(*log.borrow(), vec![Call::Play(0)]);

    // scroll range is 3000 px; 0.3 progress selects card 1
    work.update(StackMessage::Scrolled(900.0));
    work.update(StackMessage::Scrolled(950.0));
    assert_eq!(
        *log.borrow(),
        vec![Call::Play(0), Call::Pause(0), Call::Rewind(0), Call::Play(1)]
    );

    // Jumping back re-activates the first card
    log.borrow_mut().clear();
    work.update(StackMessage::Scrolled(0.0));
    assert_eq!(
        *log.borrow(),
        vec![Call::Pause(1), Call::Rewind(1), Call::Play(0)]
    );
}

#[test]
fn unchanged_activity_makes_no_calls() {
    let (mut work, log) = recorded_stack(3, false);
    work.mount();
    log.borrow_mut().clear();

    for y in [0.0, 100.0, 300.0, 600.0] {
        work.update(StackMessage::Scrolled(y));
    }
    assert!(log.borrow().is_empty());
}

#[test]
fn rejected_playback_does_not_disturb_the_stack() {
    let (mut work, log) = recorded_stack(2, true);
    work.mount();
    work.update(StackMessage::ProgressChanged(0.9));

    assert_eq!(work.active_index(), 1);
    assert_eq!(
        *log.borrow(),
        vec![Call::Play(0), Call::Pause(0), Call::Rewind(0), Call::Play(1)]
    );
}
