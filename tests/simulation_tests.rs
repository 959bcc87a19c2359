use mass_spring::{
    DragInput, Simulation, SimulationConfig, SoftBodyConfig, StepObserver, Vec, Vec3,
};

#[derive(Default)]
struct Recorder {
    accumulated: usize,
    integrated: usize,
    completed: usize,
    // Every integration must come after the forces of its step were accumulated.
    integrated_before_forces: bool,
}

impl StepObserver for Recorder {
    fn on_forces_accumulated(&mut self) {
        self.accumulated += 1;
    }

    fn on_integrate(&mut self, _index: usize) {
        if self.accumulated == self.completed {
            self.integrated_before_forces = true;
        }
        self.integrated += 1;
    }

    fn on_step_complete(&mut self) {
        self.completed += 1;
    }
}

#[test]
fn observer_sees_both_phases_in_order() {
    let config = SoftBodyConfig::new().with_subdivisions(4, 3);
    let mut sim: Simulation<Vec3<f32>> =
        Simulation::new(&config, &SimulationConfig::default()).unwrap();
    let mut recorder = Recorder::default();

    let steps = sim.update(0.05, DragInput::default(), &mut recorder);

    assert_eq!(steps, 4);
    assert_eq!(recorder.accumulated, 4);
    assert_eq!(recorder.completed, 4);
    assert_eq!(recorder.integrated, 4 * 12);
    assert!(!recorder.integrated_before_forces);
}

#[test]
fn idle_cloth_stays_put() {
    let config = SoftBodyConfig::new()
        .with_extent(2.0, 2.0)
        .with_subdivisions(4, 4);
    let mut sim: Simulation<Vec3<f64>> =
        Simulation::new(&config, &SimulationConfig::default()).unwrap();
    let start = sim.soft_body().positions();

    for _ in 0..60 {
        sim.update(1.0 / 60.0, DragInput::default(), &mut mass_spring::NoOpStepObserver);
    }

    assert_eq!(sim.soft_body().positions(), start);
    assert_eq!(sim.soft_body().kinetic_energy(), 0.0);
}

#[test]
fn vertical_drag_lifts_first_row_more_than_last() {
    let mut sim: Simulation<Vec3<f32>> =
        Simulation::new(&SoftBodyConfig::default(), &SimulationConfig::default()).unwrap();
    let start = sim.soft_body().positions();
    let push_up = DragInput::new(true, false, true);

    for _ in 0..30 {
        sim.update(1.0 / 60.0, push_up, &mut mass_spring::NoOpStepObserver);
    }

    let rows = sim.soft_body().rows();
    let cols = sim.soft_body().cols();
    let lift = |row: usize| sim.soft_body().body(row, cols / 2).position.y - start[row * cols + cols / 2].y;
    assert!(lift(0) > 0.0);
    assert!(lift(0) > lift(rows - 1));
    assert!(sim.mesh().vertices().iter().all(|v| v.is_finite()));
}

#[test]
fn stiff_large_step_diverges_without_panicking() {
    let body_config = SoftBodyConfig::new()
        .with_coefficient(1.0e6)
        .with_dampening(0.0);
    let config = SimulationConfig::new().with_physics_step(0.2).with_drag_magnitude(100.0);
    let mut sim: Simulation<Vec3<f32>> = Simulation::new(&body_config, &config).unwrap();

    for _ in 0..200 {
        sim.step(DragInput::new(true, false, false), &mut mass_spring::NoOpStepObserver);
    }

    assert!(sim.has_diverged());
}
