//! Host interface
//!
//! The motion core never schedules frames or captures scroll itself. A host
//! (browser bindings, a native UI toolkit, the headless [`ManualHost`])
//! implements [`MotionHost`] and the core composes those three services:
//! frame callbacks, scroll observation and range interpolation.

mod manual;

pub use manual::ManualHost;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::infra::interpolate::{self, ClampPolicy};

/// Page scroll as seen on a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    /// Vertical scroll offset (px).
    pub position: f32,
    /// Signed scroll speed (px/s), positive when scrolling down.
    pub velocity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    /// Time since the previous frame.
    pub delta: Duration,
    /// Time since the host started delivering frames.
    pub elapsed: Duration,
}

impl FrameTick {
    pub fn delta_ms(&self) -> f32 {
        self.delta.as_secs_f32() * 1000.0
    }
}

/// Everything a frame listener receives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameContext {
    pub tick: FrameTick,
    pub scroll: ScrollSample,
}

pub type FrameListener = Box<dyn FnMut(&FrameContext)>;

pub trait MotionHost {
    /// Call `listener` once per rendered frame until the handle is released.
    fn on_frame(&mut self, listener: FrameListener) -> ListenerHandle;

    /// Latest scroll position and velocity.
    fn observe_scroll(&self) -> ScrollSample;

    /// Map `value` through matching breakpoint ranges.
    fn interpolate(
        &self,
        value: f32,
        input: &[f32],
        output: &[f32],
        clamp: ClampPolicy,
    ) -> f32 {
        interpolate::interpolate(value, input, output, clamp)
    }
}

/// Subscription token for a frame listener.
///
/// The listener stays registered while the handle lives; dropping or
/// releasing the handle unsubscribes it before the next frame.
pub struct ListenerHandle {
    id: u64,
    live: Rc<Cell<bool>>,
}

impl ListenerHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn release(self) {
        // Drop does the work
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("id", &self.id)
            .field("live", &self.live.get())
            .finish()
    }
}

struct Registration {
    id: u64,
    live: Rc<Cell<bool>>,
    listener: FrameListener,
}

/// Listener bookkeeping shared by host implementations.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    entries: Vec<Registration>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: FrameListener) -> ListenerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let live = Rc::new(Cell::new(true));
        self.entries.push(Registration {
            id,
            live: Rc::clone(&live),
            listener,
        });
        log::trace!("frame listener {id} registered");
        ListenerHandle { id, live }
    }

    /// Drop released listeners, then call the rest in registration order.
    pub fn dispatch(&mut self, ctx: &FrameContext) {
        self.prune();
        for entry in &mut self.entries {
            (entry.listener)(ctx);
        }
    }

    /// Number of listeners still subscribed.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.live.get()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&mut self) {
        self.entries.retain(|entry| {
            let keep = entry.live.get();
            if !keep {
                log::trace!("frame listener {} released", entry.id);
            }
            keep
        });
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("next_id", &self.next_id)
            .field("live", &self.len())
            .finish()
    }
}
