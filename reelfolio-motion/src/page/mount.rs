//! Attaching a page to a host
//!
//! Each mechanism gets its own frame listener; the returned handles keep
//! them subscribed. Dropping a [`MountedPage`] releases every listener.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::messages::PageMessage;
use super::portfolio::PortfolioPage;
use crate::domains::stack::{MediaPlayback, StackMessage};
use crate::infra::host::{FrameContext, ListenerHandle, MotionHost};

/// Register `on_frame` against shared component state.
///
/// A frame that arrives while the state is already borrowed is skipped.
pub fn mount_component<H, S>(
    host: &mut H,
    state: Rc<RefCell<S>>,
    mut on_frame: impl FnMut(&mut S, &FrameContext) + 'static,
) -> ListenerHandle
where
    H: MotionHost + ?Sized,
    S: 'static,
{
    host.on_frame(Box::new(move |ctx: &FrameContext| match state.try_borrow_mut() {
        Ok(mut state) => on_frame(&mut state, ctx),
        Err(_) => log::warn!("component busy; frame skipped"),
    }))
}

pub struct MountedPage<P> {
    page: Rc<RefCell<PortfolioPage<P>>>,
    handles: Vec<ListenerHandle>,
}

impl<P: MediaPlayback + 'static> PortfolioPage<P> {
    /// Subscribe every mechanism to `host` frames and start the media of
    /// the card active at the current scroll offset.
    pub fn mount<H: MotionHost + ?Sized>(self, host: &mut H) -> MountedPage<P> {
        let page = Rc::new(RefCell::new(self));
        let scroll = host.observe_scroll();

        {
            let mut page = page.borrow_mut();
            page.work_mut()
                .update(StackMessage::Scrolled(scroll.position));
            page.work_mut().mount();
            page.update(PageMessage::NavScrolled(scroll.position));
            page.update(PageMessage::RevealScrolled(scroll.position));
        }

        let handles = vec![
            mount_component(host, Rc::clone(&page), |page, ctx| {
                page.update(PageMessage::HeroFrame {
                    delta: ctx.tick.delta,
                    scroll_velocity: ctx.scroll.velocity,
                });
            }),
            mount_component(host, Rc::clone(&page), |page, ctx| {
                page.update(PageMessage::WorkScrolled(ctx.scroll.position));
            }),
            mount_component(host, Rc::clone(&page), |page, ctx| {
                page.update(PageMessage::ReelsFrame(ctx.tick.delta));
            }),
            mount_component(host, Rc::clone(&page), |page, ctx| {
                page.update(PageMessage::NavScrolled(ctx.scroll.position));
            }),
            mount_component(host, Rc::clone(&page), |page, ctx| {
                page.update(PageMessage::RevealScrolled(ctx.scroll.position));
            }),
        ];
        log::debug!("portfolio page mounted with {} listeners", handles.len());

        MountedPage { page, handles }
    }
}

impl<P: MediaPlayback> MountedPage<P> {
    /// Shared page state, for reading render output between frames.
    pub fn page(&self) -> Rc<RefCell<PortfolioPage<P>>> {
        Rc::clone(&self.page)
    }

    /// Run `f` against the page.
    pub fn with<R>(&self, f: impl FnOnce(&PortfolioPage<P>) -> R) -> R {
        f(&self.page.borrow())
    }

    /// Route input (hover, link clicks) to the page.
    pub fn send(&self, msg: PageMessage) {
        self.page.borrow_mut().update(msg);
    }

    pub fn listener_count(&self) -> usize {
        self.handles.iter().filter(|h| h.is_live()).count()
    }

    /// Release every listener and hand the page state back.
    pub fn unmount(self) -> Rc<RefCell<PortfolioPage<P>>> {
        let MountedPage { page, handles } = self;
        drop(handles);
        log::debug!("portfolio page unmounted");
        page
    }
}

impl<P> fmt::Debug for MountedPage<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedPage")
            .field("handles", &self.handles)
            .finish_non_exhaustive()
    }
}
