use crate::render::crease::CreaseSegment;
use crate::render::tree::RenderNode;

/// One fully built frame handed to a presentation layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// Root of the rebuilt fold tree.
    pub tree: RenderNode,
    /// Crease-pattern overlay segments; empty when the overlay is off.
    pub creases: Vec<CreaseSegment>,
}

/// Presentation seam between the engine and a host renderer.
///
/// The session rebuilds and presents a whole frame per render; sinks must
/// not assume any relationship between consecutive frames.
pub trait RenderSink {
    /// Accept one rebuilt frame.
    fn present(&mut self, frame: &SceneFrame);
}

/// Sink that retains only the most recent frame. Useful as a test double
/// and for hosts that pull rather than push.
#[derive(Debug, Default)]
pub struct LastFrameSink {
    /// Most recently presented frame, if any.
    pub last: Option<SceneFrame>,
}

impl RenderSink for LastFrameSink {
    fn present(&mut self, frame: &SceneFrame) {
        self.last = Some(frame.clone());
    }
}
