use super::controller::VelocityMarquee;
use super::messages::MarqueeMessage;

pub fn update(marquee: &mut VelocityMarquee, msg: MarqueeMessage) {
    match msg {
        MarqueeMessage::Frame {
            delta,
            scroll_velocity,
        } => {
            marquee.tick(delta, scroll_velocity);
        }
        MarqueeMessage::SetBaseVelocity(velocity) => {
            marquee.set_base_velocity(velocity);
        }
        MarqueeMessage::Reset => marquee.reset(),
    }
}
