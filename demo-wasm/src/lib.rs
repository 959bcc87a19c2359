use mass_spring::{
    DragInput, NoOpStepObserver, Simulation, SimulationConfig, SoftBodyConfig, Vec3,
};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    sim: Simulation<Vec3<f32>>,
    input: DragInput,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(subdivisions: usize, coefficient: f32, dampening: f32) -> Result<ClothDemo, JsError> {
        let body_config = SoftBodyConfig::new()
            .with_subdivisions(subdivisions, subdivisions)
            .with_coefficient(coefficient)
            .with_dampening(dampening);
        let sim = Simulation::new(&body_config, &SimulationConfig::default())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ClothDemo { sim, input: DragInput::default() })
    }

    /// Mouse buttons and the axis modifier, sampled by the page each frame.
    pub fn set_input(&mut self, positive: bool, negative: bool, vertical_axis: bool) {
        self.input = DragInput::new(positive, negative, vertical_axis);
    }

    /// Advance by `frame_delta` seconds; returns the number of physics steps run.
    pub fn update(&mut self, frame_delta: f32) -> usize {
        self.sim.update(frame_delta, self.input, &mut NoOpStepObserver)
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] in row-major order
    pub fn vertices(&self) -> Vec<f32> {
        let verts = self.sim.mesh().vertices();
        let mut out = Vec::with_capacity(verts.len() * 3);
        for v in verts {
            out.push(v.x);
            out.push(v.y);
            out.push(v.z);
        }
        out
    }

    /// Quad index buffer, four indices per cell. Fixed for the demo's lifetime.
    pub fn indices(&self) -> Vec<u32> {
        self.sim.mesh().indices().to_vec()
    }

    pub fn cols(&self) -> usize {
        self.sim.soft_body().cols()
    }

    pub fn rows(&self) -> usize {
        self.sim.soft_body().rows()
    }

    pub fn diverged(&self) -> bool {
        self.sim.has_diverged()
    }
}
