// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Bandbender computes electrostatic band diagrams of layered semiconductor and metal stacks
//!
//! # Overview
//! Bandbender takes an ordered stack of layers, each with a band gap, electron affinity, dielectric
//! constant and doping, together with the voltage applied to each layer. It returns the
//! conduction band, valence band, Fermi level and vacuum level as a function of position across
//! the device.
//!
//! Each interface is solved in the full depletion approximation. The depletion widths either
//! side of an interface follow in closed form from charge neutrality and from the step in the
//! vacuum level which the bending has to absorb, giving a parabolic potential in each depletion
//! region and flat bands in the bulk. The local solutions are stitched so the vacuum level is
//! continuous across the whole device. Metals are modelled as degenerate semiconductors with a
//! very large carrier density and dielectric constant.
//!
//! # Usage
//! Bandbender is distributed as a binary crate, and is intended to be run from the command line.
//! To run the software first define a structure in a `.toml` file:
//!
//! ```toml
//! temperature = 300.0
//!
//! [[layers]]
//! material = "Au"
//! thickness = 20.0
//!
//! [[layers]]
//! material = "Si"
//! thickness = 1000.0
//! doping = 1e16
//! voltage = 0.0
//! ```
//!
//! where additional layers can be appended with subsequent `layers` fields. Thicknesses are in nm,
//! doping densities in cm^-3 with negative values for p-type material, and voltages in V.
//!
//! The library can also be used directly
//!
//! ```ignore
//! let info_desk = InfoDesk::with_presets();
//! let device = Device::new(
//!     vec![
//!         info_desk.build_layer("Au", None, 0., 20.)?,
//!         info_desk.build_layer("Si", None, 1e16, 1000.)?,
//!     ],
//!     300.,
//! )?;
//! let profile = device.compute_profile(1000)?;
//! ```

#![warn(missing_docs)]
#![allow(clippy::type_complexity)]

/// The command line global application, tracing and display primitives
pub mod app;

/// Physical constants
pub mod constants;

/// Device, layers and the material registry
pub mod device;

/// Error handling
pub mod error;

/// The full depletion solution at a single interface
pub mod interface;

/// Energy against position across the whole device
pub mod profile;

pub use device::{Bias, Device, InfoDesk, LayerKind, MaterialLayer, MaterialParameters};
pub use error::{DepletionOverflowError, DeviceError, MaterialError, ProfileError};
pub use interface::{BendSign, InterfaceSolution, InterfaceSolver};
pub use profile::{Level, Levels, ProfileBuilder, ProfileResult};
