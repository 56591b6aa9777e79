use super::messages::StackMessage;
use super::playback::MediaPlayback;
use super::work::WorkStack;

pub fn update<P: MediaPlayback>(work: &mut WorkStack<P>, msg: StackMessage) {
    match msg {
        StackMessage::Scrolled(scroll_y) => {
            let progress = work.region().progress(scroll_y);
            work.set_progress(progress);
        }
        StackMessage::ProgressChanged(progress) => {
            work.set_progress(progress);
        }
        StackMessage::Relayout {
            top,
            viewport_height,
        } => work.relayout(top, viewport_height),
    }
}
