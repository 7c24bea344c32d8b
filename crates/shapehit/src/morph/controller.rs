use nalgebra::Vector2;

use super::renderer::ShapeRenderer;
use super::table::MorphTable;
use crate::hit::{Decision, HitTester};

/// Click handler: classify against the live shape, then hand the target to the renderer.
#[derive(Debug)]
pub struct MorphController<R> {
    tester: HitTester,
    table: MorphTable,
    renderer: R,
}

impl<R: ShapeRenderer> MorphController<R> {
    /// Trapezoid presets; the renderer's current shape becomes the reset target.
    pub fn new(tester: HitTester, renderer: R) -> Self {
        let table = MorphTable::trapezoid(renderer.current().clone());
        Self::with_table(tester, table, renderer)
    }

    pub fn with_table(tester: HitTester, table: MorphTable, renderer: R) -> Self {
        Self {
            tester,
            table,
            renderer,
        }
    }

    /// Handle a click at `p` in surface-local coordinates.
    pub fn handle_click(&mut self, p: Vector2<f64>) -> Decision {
        let decision = self.tester.classify(p, self.renderer.current());
        let target = self.table.target(decision);
        tracing::debug!(x = p.x, y = p.y, %decision, "click");
        self.renderer.transition_to(target, self.table.transition);
        decision
    }

    /// Handle a click given in client coordinates; `origin` is the surface's top-left corner.
    pub fn handle_client_click(&mut self, client: Vector2<f64>, origin: Vector2<f64>) -> Decision {
        self.handle_click(to_local(client, origin))
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn table(&self) -> &MorphTable {
        &self.table
    }

    pub fn tester(&self) -> &HitTester {
        &self.tester
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// Client to surface-local coordinates.
#[inline]
pub fn to_local(client: Vector2<f64>, origin: Vector2<f64>) -> Vector2<f64> {
    client - origin
}
