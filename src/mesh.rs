//! Display-side lattice mesh fed by the simulation.

use crate::float::Float;
use crate::vec::{Planar, Vec};
use alloc::vec::Vec as AllocVec;

/// Receives body positions after each integration, by row-major index.
pub trait PositionSink<V: Vec> {
    fn set_position(&mut self, index: usize, position: V);
}

/// Discards every position.
pub struct NoOpSink;

impl<V: Vec> PositionSink<V> for NoOpSink {
    fn set_position(&mut self, _index: usize, _position: V) {}
}

impl<V: Vec> PositionSink<V> for [V] {
    fn set_position(&mut self, index: usize, position: V) {
        self[index] = position;
    }
}

impl<V: Vec> PositionSink<V> for AllocVec<V> {
    fn set_position(&mut self, index: usize, position: V) {
        self[index] = position;
    }
}

/// A grid of vertices drawn as quads.
///
/// Vertex `(row, col)` lives at `row * cols + col`. The quad index buffer is
/// built once in [`LatticeMesh::new`] and never changes; only vertex
/// positions are rewritten, once per physics step.
pub struct LatticeMesh<V: Vec> {
    vertices: AllocVec<V>,
    indices: AllocVec<u32>,
    rows: usize,
    cols: usize,
}

impl<V: Planar> LatticeMesh<V> {
    /// A `rows × cols` lattice spanning `[0, 1)` on both axes with spacing
    /// `1 / cols` and `1 / rows`. The first physics step overwrites these.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let step_x = V::Scalar::one() / V::Scalar::from_usize(cols);
        let step_y = V::Scalar::one() / V::Scalar::from_usize(rows);

        let mut vertices = AllocVec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                vertices.push(V::from_planar(
                    step_x * V::Scalar::from_usize(col),
                    step_y * V::Scalar::from_usize(row),
                ));
            }
        }

        LatticeMesh { vertices, indices: quad_indices(rows, cols), rows, cols }
    }
}

impl<V: Vec> LatticeMesh<V> {
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex(&self, row: usize, col: usize) -> V {
        self.vertices[row * self.cols + col]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn quad_count(&self) -> usize {
        self.indices.len() / 4
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
}

impl<V: Vec> PositionSink<V> for LatticeMesh<V> {
    fn set_position(&mut self, index: usize, position: V) {
        self.vertices[index] = position;
    }
}

/// Four indices per cell, counter-clockwise from the cell's lower-left
/// corner: `(i, j)`, `(i, j+1)`, `(i+1, j+1)`, `(i+1, j)`.
fn quad_indices(rows: usize, cols: usize) -> AllocVec<u32> {
    let quads = rows.saturating_sub(1) * cols.saturating_sub(1);
    let mut indices = AllocVec::with_capacity(quads * 4);
    for i in 0..rows.saturating_sub(1) {
        for j in 0..cols.saturating_sub(1) {
            let a = (i * cols + j) as u32;
            let b = (i * cols + j + 1) as u32;
            let c = ((i + 1) * cols + j + 1) as u32;
            let d = ((i + 1) * cols + j) as u32;
            indices.extend_from_slice(&[a, b, c, d]);
        }
    }
    indices
}
