use crate::Assignment;
use nalgebra::{Point1, RealField};

/// A one-dimensional mesh, each vertex carrying the region assignment it was generated with
#[derive(Debug)]
pub struct Mesh1d<T: RealField> {
    vertices: Vec<(Point1<T>, Assignment)>,
}

impl<T: Copy + RealField> Mesh1d<T> {
    pub fn from_vertices(vertices: Vec<(Point1<T>, Assignment)>) -> Self {
        Self { vertices }
    }

    pub fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[(Point1<T>, Assignment)] {
        &self.vertices
    }

    pub fn vertices_owned(self) -> Vec<(Point1<T>, Assignment)> {
        self.vertices
    }

    /// The coordinate of every vertex, in order
    pub fn positions(&self) -> impl Iterator<Item = T> + '_ {
        self.vertices.iter().map(|(point, _)| point.x)
    }

    /// Indices of the vertices sitting on a boundary between two regions
    pub fn boundary_indices(&self) -> Vec<usize> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, (_, assignment))| assignment.is_boundary())
            .map(|(index, _)| index)
            .collect()
    }
}
