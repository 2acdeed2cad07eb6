// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Error
//! Errors raised while building layers, solving interfaces and stitching profiles

use miette::Diagnostic;
use nalgebra::RealField;

/// Lossy view of a scalar for error reports
pub(crate) fn as_f64<T: RealField>(value: T) -> f64 {
    value.to_subset().unwrap_or(f64::NAN)
}

#[derive(thiserror::Error, Debug, Diagnostic, PartialEq)]
/// Malformed physical constants, raised when a layer is constructed or looked up
pub enum MaterialError {
    #[error("layer thickness must be positive, got {0} nm")]
    #[diagnostic(code(bandbender::material::thickness))]
    NonPositiveThickness(f64),
    #[error("dielectric constant must be positive, got {0}")]
    #[diagnostic(code(bandbender::material::dielectric))]
    NonPositiveDielectricConstant(f64),
    #[error("band gap must not be negative, got {0} eV")]
    #[diagnostic(code(bandbender::material::bandgap))]
    NegativeBandgap(f64),
    #[error("effective mass must be positive, got {0}")]
    #[diagnostic(code(bandbender::material::mass))]
    NonPositiveEffectiveMass(f64),
    #[error("a semiconductor needs a non-zero carrier density")]
    #[diagnostic(
        code(bandbender::material::doping),
        help("use a positive density for n-type and a negative density for p-type layers")
    )]
    ZeroCarrierDensity,
    #[error("material parameter `{0}` is not finite")]
    #[diagnostic(code(bandbender::material::finite))]
    NotFinite(&'static str),
    #[error("no material named `{0}` in the info desk")]
    #[diagnostic(code(bandbender::material::unknown))]
    Unknown(String),
    #[error("`{0}` is an alloy and needs a composition")]
    #[diagnostic(code(bandbender::material::composition))]
    MissingComposition(String),
    #[error("alloy composition must lie in [0, 1], got {0}")]
    #[diagnostic(code(bandbender::material::composition))]
    Composition(f64),
}

#[derive(thiserror::Error, Debug, Diagnostic, PartialEq)]
#[error(
    "Depletion width of {width:.3} nm at interface {interface} exceeds the {thickness:.3} nm available in layer {layer}"
)]
#[diagnostic(
    code(bandbender::profile::depletion_overflow),
    help("the full depletion approximation is not valid here, thicken the layer or reduce the bias")
)]
/// The depletion region of an interface does not fit inside its layer
pub struct DepletionOverflowError {
    /// Index of the offending interface, interface `i` separates layers `i` and `i + 1`
    pub interface: usize,
    /// Index of the layer that is too thin
    pub layer: usize,
    /// The depletion width required, in nm
    pub width: f64,
    /// The thickness available, in nm
    pub thickness: f64,
}

#[derive(thiserror::Error, Debug, Diagnostic, PartialEq)]
/// Failure to produce a band profile for a device
pub enum ProfileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    DepletionOverflow(#[from] DepletionOverflowError),
    #[error("a device needs at least one layer")]
    #[diagnostic(code(bandbender::profile::empty))]
    EmptyStack,
    #[error("the bias holds {voltages} voltages for {layers} layers")]
    #[diagnostic(code(bandbender::profile::bias))]
    BiasMismatch { voltages: usize, layers: usize },
    #[error("layer index {index} is out of range for a device of {layers} layers")]
    #[diagnostic(code(bandbender::profile::index))]
    LayerIndex { index: usize, layers: usize },
    #[error("temperature must be positive, got {0} K")]
    #[diagnostic(code(bandbender::profile::temperature))]
    Temperature(f64),
}

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Failure to assemble a `Device` from a description
pub enum DeviceError {
    #[error("failed to read the device description: {0}")]
    #[diagnostic(code(bandbender::device::read))]
    Read(#[from] config::ConfigError),
    #[error("layer {index} (`{material}`): {source}")]
    #[diagnostic(code(bandbender::device::layer))]
    Layer {
        index: usize,
        material: String,
        #[source]
        source: MaterialError,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Profile(#[from] ProfileError),
}
