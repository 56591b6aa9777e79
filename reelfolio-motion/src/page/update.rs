use super::messages::PageMessage;
use super::portfolio::PortfolioPage;
use crate::domains::marquee::MarqueeMessage;
use crate::domains::navigation::NavMessage;
use crate::domains::reels::ReelMessage;
use crate::domains::stack::{MediaPlayback, StackMessage};

pub fn update<P: MediaPlayback>(page: &mut PortfolioPage<P>, msg: PageMessage) {
    match msg {
        PageMessage::Frame(ctx) => {
            update(
                page,
                PageMessage::HeroFrame {
                    delta: ctx.tick.delta,
                    scroll_velocity: ctx.scroll.velocity,
                },
            );
            update(page, PageMessage::WorkScrolled(ctx.scroll.position));
            update(page, PageMessage::ReelsFrame(ctx.tick.delta));
            update(page, PageMessage::NavScrolled(ctx.scroll.position));
            update(page, PageMessage::RevealScrolled(ctx.scroll.position));
        }
        PageMessage::HeroFrame {
            delta,
            scroll_velocity,
        } => {
            let frame = MarqueeMessage::Frame {
                delta,
                scroll_velocity,
            };
            for row in page.hero_rows_mut() {
                row.update(frame);
            }
        }
        PageMessage::WorkScrolled(scroll_y) => {
            page.work_mut().update(StackMessage::Scrolled(scroll_y));
        }
        PageMessage::ReelsFrame(delta) => {
            page.reels_mut().update(ReelMessage::Frame(delta));
        }
        PageMessage::NavScrolled(scroll_y) => {
            page.nav_mut().update(NavMessage::Scrolled(scroll_y));
        }
        PageMessage::RevealScrolled(scroll_y) => page.reveal_at(scroll_y),
        PageMessage::ReelsHovered(hovered) => {
            page.reels_mut().update(ReelMessage::HoverChanged(hovered));
        }
        PageMessage::NavSelect(id) => {
            page.nav_mut().update(NavMessage::Select(id));
        }
    }
}
