//! # Profile
//!
//! Stitches the interface solutions of a device into energy against position.
//!
//! Every layer contributes its flat bulk alignment, displaced near each of its edges by the
//! depletion region of the adjacent interface. A profile is built through the `ProfileBuilder`
//!
//! ```ignore
//! let profile = ProfileBuilder::new()
//!     .with_device(&device)
//!     .with_bias(&bias)
//!     .with_number_of_points(1000)
//!     .build()?;
//! ```
//!
//! Interface vertices are sampled twice, once as the limit from the left layer and once as the
//! limit from the right, so band offsets at heterojunctions appear as vertical steps.

mod builder;

pub use builder::*;

use crate::interface::{DepletionRegion, InterfaceSolution};
use bandbender_mesher::{Distance, LineSegment1d};
use nalgebra::{DVector, Point1, RealField};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One of the four energy levels tracked across the device
pub enum Level {
    Conduction,
    Valence,
    Fermi,
    Vacuum,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Conduction,
        Level::Valence,
        Level::Fermi,
        Level::Vacuum,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Level::Conduction => "conduction",
            Level::Valence => "valence",
            Level::Fermi => "fermi",
            Level::Vacuum => "vacuum",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// The four levels at a single point, in eV measured from the equilibrium Fermi level
pub struct Levels<T> {
    pub conduction: T,
    pub valence: T,
    pub fermi: T,
    pub vacuum: T,
}

impl<T: Copy + RealField> Levels<T> {
    pub fn get(&self, level: Level) -> T {
        match level {
            Level::Conduction => self.conduction,
            Level::Valence => self.valence,
            Level::Fermi => self.fermi,
            Level::Vacuum => self.vacuum,
        }
    }

    /// Moves the band levels rigidly by `bands` and the Fermi level by `fermi`
    pub fn shifted(&self, bands: T, fermi: T) -> Self {
        Self {
            conduction: self.conduction + bands,
            valence: self.valence + bands,
            fermi: self.fermi + fermi,
            vacuum: self.vacuum + bands,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A single sample of the profile
pub struct Sample<T> {
    /// Position in nm from the left edge of the device
    pub position: T,
    pub levels: Levels<T>,
}

#[derive(Clone, Debug, PartialEq)]
/// The closed-form description of the levels inside one layer
pub struct LayerSegment<T: RealField> {
    /// The interval occupied by the layer, in nm
    pub region: LineSegment1d<T>,
    /// Flat-band levels in the bulk of the layer
    pub bulk: Levels<T>,
    /// Band bending due to the interface on the left edge
    pub entering_bands: DepletionRegion<T>,
    /// Fermi level bending due to the interface on the left edge
    pub entering_fermi: DepletionRegion<T>,
    /// Band bending due to the interface on the right edge
    pub leaving_bands: DepletionRegion<T>,
    /// Fermi level bending due to the interface on the right edge
    pub leaving_fermi: DepletionRegion<T>,
}

impl<T: Copy + RealField> LayerSegment<T> {
    /// Evaluates the closed form at `position`, which is clamped into the layer
    pub fn levels_at(&self, position: T) -> Levels<T> {
        let from_left = position - self.region.start();
        let from_right = self.region.end() - position;
        let bands = self.entering_bands.offset(from_left) + self.leaving_bands.offset(from_right);
        let fermi = self.entering_fermi.offset(from_left) + self.leaving_fermi.offset(from_right);
        self.bulk.shifted(bands, fermi)
    }
}

#[derive(Clone, Debug)]
/// The sampled band diagram of a device under one bias
///
/// Every array holds one entry per sample, in order of increasing position.
pub struct ProfileResult<T: RealField> {
    pub positions: DVector<T>,
    pub conduction: DVector<T>,
    pub valence: DVector<T>,
    pub fermi: DVector<T>,
    pub vacuum: DVector<T>,
    interfaces: Vec<InterfaceSolution<T>>,
    segments: Vec<LayerSegment<T>>,
}

impl<T: Copy + RealField> ProfileResult<T> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn level(&self, level: Level) -> &DVector<T> {
        match level {
            Level::Conduction => &self.conduction,
            Level::Valence => &self.valence,
            Level::Fermi => &self.fermi,
            Level::Vacuum => &self.vacuum,
        }
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample<T>> + '_ {
        itertools::izip!(
            self.positions.iter(),
            self.conduction.iter(),
            self.valence.iter(),
            self.fermi.iter(),
            self.vacuum.iter()
        )
        .map(|(&position, &conduction, &valence, &fermi, &vacuum)| Sample {
            position,
            levels: Levels {
                conduction,
                valence,
                fermi,
                vacuum,
            },
        })
    }

    /// The interface solutions the profile was stitched from
    pub fn interfaces(&self) -> &[InterfaceSolution<T>] {
        &self.interfaces
    }

    pub fn segments(&self) -> &[LayerSegment<T>] {
        &self.segments
    }

    /// Evaluates the closed form at an arbitrary position, `None` outside the device
    ///
    /// At an interface the layer on the right is used, matching the `[start, end)` layout.
    pub fn levels_at(&self, position: T) -> Option<Levels<T>> {
        let point = Point1::new(position);
        let segment = self
            .segments
            .iter()
            .find(|segment| segment.region.contains(&point))
            .or_else(|| {
                self.segments
                    .last()
                    .filter(|segment| segment.region.distance(&point) == T::zero())
            })?;
        Some(segment.levels_at(position))
    }

    /// The left and right limits of the levels at interface `index`
    pub fn interface_limits(&self, index: usize) -> Option<(Levels<T>, Levels<T>)> {
        let left = self.segments.get(index)?;
        let right = self.segments.get(index + 1)?;
        Some((
            left.levels_at(left.region.end()),
            right.levels_at(right.region.start()),
        ))
    }
}
