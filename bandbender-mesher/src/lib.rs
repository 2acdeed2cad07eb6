//! One-dimensional sampling meshes for layered devices
//!
//! A device is a stack of piecewise homogeneous regions laid end to end. The mesh places
//! vertices inside every region and marks each one with an [`Assignment`], so consumers can
//! tell whether a vertex sits in the bulk of a single region or on the boundary between two.

mod generate;
mod mesh;
mod primitives;

pub use generate::*;
pub use mesh::*;
pub use primitives::*;

/// Where a mesh vertex lives relative to the regions of the device
///
/// `Core` vertices lie strictly within a single region. `Boundary` vertices sit on the shared
/// edge of two neighbouring regions, ordered left then right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assignment {
    Core(usize),
    Boundary([usize; 2]),
}

impl Assignment {
    /// The regions which touch the vertex
    pub fn regions(&self) -> &[usize] {
        match self {
            Assignment::Core(region) => std::slice::from_ref(region),
            Assignment::Boundary(regions) => regions,
        }
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, Assignment::Boundary(_))
    }
}
