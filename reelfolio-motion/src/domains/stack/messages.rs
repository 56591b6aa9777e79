#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StackMessage {
    /// Page scroll offset changed (px)
    Scrolled(f32),
    /// Host already computed the container progress
    ProgressChanged(f32),
    /// Section moved or the viewport resized
    Relayout { top: f32, viewport_height: f32 },
}
