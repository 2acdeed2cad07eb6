// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Constants
//!
//! Defines physical constants and model parameters used in the simulation

pub const BOLTZMANN: f64 = 1.38064852e-23; // The Boltzmann constant in m^2 kg / s^2 K
pub const ELECTRON_CHARGE: f64 = 1.60217662e-19; // Single electron charge in C
pub const ELECTRON_MASS: f64 = 9.10938356e-31; // Single electron mass
pub const EPSILON_0: f64 = 8.85418782e-12; // Permitivitty of free space in F / m
pub const HBAR: f64 = 1.0545718e-34; // Reduced Planck constant

/// Carrier density assigned to every metal, in cm^-3
pub const METAL_CARRIER_DENSITY: f64 = 1e23;
/// Stand-in for the infinite dielectric constant of a metal
pub const METAL_DIELECTRIC_CONSTANT: f64 = 1e12;

pub const NANOMETRE: f64 = 1e-9; // Metres in a nanometre
pub const PER_CUBIC_CENTIMETRE: f64 = 1e6; // A density of 1 cm^-3 in m^-3
