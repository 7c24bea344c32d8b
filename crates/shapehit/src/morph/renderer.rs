use super::ease::Transition;
use crate::geom2::Polygon;

/// Host-side shape renderer.
///
/// Owns the live polygon. `transition_to` starts a transition toward `target`;
/// how (and whether) it animates is the implementor's business, but
/// `current` must report the shape the next click should be tested against.
pub trait ShapeRenderer {
    fn current(&self) -> &Polygon;
    fn transition_to(&mut self, target: &Polygon, tr: Transition);
}

/// Renderer that jumps straight to each target.
#[derive(Clone, Debug)]
pub struct SnapRenderer {
    shape: Polygon,
    transitions: usize,
    last: Option<Transition>,
}

impl SnapRenderer {
    pub fn new(shape: Polygon) -> Self {
        Self {
            shape,
            transitions: 0,
            last: None,
        }
    }

    /// Number of `transition_to` calls so far.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    pub fn last_transition(&self) -> Option<Transition> {
        self.last
    }
}

impl ShapeRenderer for SnapRenderer {
    fn current(&self) -> &Polygon {
        &self.shape
    }

    fn transition_to(&mut self, target: &Polygon, tr: Transition) {
        self.shape = target.clone();
        self.transitions += 1;
        self.last = Some(tr);
    }
}
