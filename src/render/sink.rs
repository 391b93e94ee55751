use crate::foundation::core::FrameIndex;
use crate::scene::node::ElementNode;

/// A posed tree together with the frame it was posed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosedFrame {
    /// Action the frame belongs to.
    pub action: String,
    /// Frame index within the action.
    pub frame: FrameIndex,
    /// Base tree with the frame's overlay merged in.
    pub tree: ElementNode,
}

/// Sink for posed frames.
///
/// The player calls `render` once per state change that affects what is on screen, in the order
/// the changes happen. Implementations materialize the tree however they like; the player never
/// reads anything back.
pub trait Renderer {
    /// Consume one posed frame.
    fn render(&mut self, frame: &PosedFrame);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &PosedFrame) {
        (**self).render(frame);
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, frame: &PosedFrame) {
        (**self).render(frame);
    }
}

/// In-memory renderer for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryRenderer {
    frames: Vec<PosedFrame>,
}

impl InMemoryRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame rendered so far, oldest first.
    pub fn frames(&self) -> &[PosedFrame] {
        &self.frames
    }

    /// Most recently rendered frame.
    pub fn last(&self) -> Option<&PosedFrame> {
        self.frames.last()
    }

    /// Frame indices rendered so far, oldest first.
    pub fn frame_indices(&self) -> Vec<FrameIndex> {
        self.frames.iter().map(|f| f.frame).collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Renderer for InMemoryRenderer {
    fn render(&mut self, frame: &PosedFrame) {
        self.frames.push(frame.clone());
    }
}
