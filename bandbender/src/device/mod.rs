//! Controls the storage and layout of the top-level device structure, the
//! `InfoDesk` registry which yields the material constants of each layer, and the
//! deserialization of device descriptions

/// The material registry and its built-in presets
pub mod info_desk;
/// A single validated layer
mod layer;
/// The deserialization of device descriptions
pub mod reader;

pub use info_desk::{InfoDesk, MaterialParameters};
pub use layer::{LayerKind, MaterialLayer};
pub use reader::{DeviceDescription, LayerDescription};

use crate::error::{as_f64, ProfileError};
use crate::interface::InterfaceSolution;
use crate::profile::{solve_interfaces, ProfileBuilder, ProfileResult};
use bandbender_mesher::LineSegment1d;
use nalgebra::RealField;
use std::ops::Deref;

#[derive(Clone, Debug, PartialEq)]
/// The voltage applied to every layer of a stack, in V
///
/// A bias is the input that varies between runs on a fixed stack, so it is kept apart from the
/// layers themselves.
pub struct Bias<T> {
    voltages: Vec<T>,
}

impl<T: Copy + RealField> Bias<T> {
    /// Every layer grounded
    pub fn zero(number_of_layers: usize) -> Self {
        Self {
            voltages: vec![T::zero(); number_of_layers],
        }
    }

    pub fn from_voltages(voltages: Vec<T>) -> Self {
        Self { voltages }
    }

    pub fn len(&self) -> usize {
        self.voltages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voltages.is_empty()
    }

    pub fn voltages(&self) -> &[T] {
        &self.voltages
    }

    pub fn voltage(&self, layer_index: usize) -> Option<T> {
        self.voltages.get(layer_index).copied()
    }

    pub fn set(&mut self, layer_index: usize, voltage: T) -> Result<(), ProfileError> {
        let layers = self.voltages.len();
        let slot = self
            .voltages
            .get_mut(layer_index)
            .ok_or(ProfileError::LayerIndex {
                index: layer_index,
                layers,
            })?;
        *slot = voltage;
        Ok(())
    }

    /// The voltage on the right of interface `interface` minus that on its left
    ///
    /// Callers must have checked the bias against the device it is applied to.
    pub(crate) fn delta(&self, interface: usize) -> T {
        self.voltages[interface + 1] - self.voltages[interface]
    }

    /// The same bias with every voltage negated
    pub fn reversed(&self) -> Self {
        Self {
            voltages: self.voltages.iter().map(|&voltage| -voltage).collect(),
        }
    }
}

#[derive(Clone, Debug)]
/// An ordered stack of layers held at a common temperature, with the bias currently applied
pub struct Device<T: RealField> {
    layers: Vec<MaterialLayer<T>>,
    bias: Bias<T>,
    /// Temperature in K
    temperature: T,
}

impl<T: Copy + RealField> Deref for Device<T> {
    type Target = [MaterialLayer<T>];

    fn deref(&self) -> &Self::Target {
        &self.layers
    }
}

impl<T: Copy + RealField> Device<T> {
    /// Stacks `layers` left to right with every layer grounded
    pub fn new(layers: Vec<MaterialLayer<T>>, temperature: T) -> Result<Self, ProfileError> {
        if layers.is_empty() {
            return Err(ProfileError::EmptyStack);
        }
        if !(temperature > T::zero() && temperature.is_finite()) {
            return Err(ProfileError::Temperature(as_f64(temperature)));
        }
        Ok(Self {
            bias: Bias::zero(layers.len()),
            layers,
            temperature,
        })
    }

    /// Replaces the bias, which must hold one voltage per layer
    pub fn with_bias(mut self, bias: Bias<T>) -> Result<Self, ProfileError> {
        self.check_bias(&bias)?;
        self.bias = bias;
        Ok(self)
    }

    pub(crate) fn check_bias(&self, bias: &Bias<T>) -> Result<(), ProfileError> {
        if bias.len() != self.layers.len() {
            return Err(ProfileError::BiasMismatch {
                voltages: bias.len(),
                layers: self.layers.len(),
            });
        }
        Ok(())
    }

    pub fn layers(&self) -> &[MaterialLayer<T>] {
        &self.layers
    }

    pub fn bias(&self) -> &Bias<T> {
        &self.bias
    }

    pub fn temperature(&self) -> T {
        self.temperature
    }

    /// Number of interfaces in the stack
    pub fn number_of_interfaces(&self) -> usize {
        self.layers.len() - 1
    }

    /// Total thickness of the stack in nm
    pub fn thickness(&self) -> T {
        self.layers
            .iter()
            .fold(T::zero(), |acc, layer| acc + layer.thickness())
    }

    /// The interval `[start, end)` occupied by each layer, in nm from the left edge of the stack
    pub fn layout(&self) -> Vec<LineSegment1d<T>> {
        let mut start = T::zero();
        self.layers
            .iter()
            .map(|layer| {
                let end = start + layer.thickness();
                let segment = LineSegment1d::from_bounds(start, end);
                start = end;
                segment
            })
            .collect()
    }

    /// Sets the voltage on a single layer, any profile computed before is stale afterwards
    pub fn set_voltage(&mut self, layer_index: usize, voltage: T) -> Result<(), ProfileError> {
        self.bias.set(layer_index, voltage)
    }

    /// Solves every interface under the current bias
    pub fn solve_interfaces(&self) -> Result<Vec<InterfaceSolution<T>>, ProfileError> {
        solve_interfaces(self, &self.bias)
    }

    /// Computes the band profile under the current bias, sampled on roughly `number_of_points`
    /// positions
    pub fn compute_profile(&self, number_of_points: usize) -> Result<ProfileResult<T>, ProfileError> {
        self.compute_profile_with_bias(&self.bias, number_of_points)
    }

    /// Computes the band profile under `bias`, leaving the bias held by the device untouched
    pub fn compute_profile_with_bias(
        &self,
        bias: &Bias<T>,
        number_of_points: usize,
    ) -> Result<ProfileResult<T>, ProfileError> {
        ProfileBuilder::new()
            .with_device(self)
            .with_bias(bias)
            .with_number_of_points(number_of_points)
            .build()
    }
}

#[cfg(test)]
mod test {
    use super::{Bias, Device, MaterialLayer};
    use crate::error::ProfileError;
    use approx::assert_relative_eq;

    fn silicon(doping: f64, thickness: f64) -> MaterialLayer<f64> {
        MaterialLayer::semiconductor(1.12, 4.05, 11.7, doping, thickness).unwrap()
    }

    #[test]
    fn layers_are_laid_out_end_to_end() {
        let device = Device::new(
            vec![silicon(1e16, 100.), silicon(-1e16, 250.), silicon(1e16, 50.)],
            300.,
        )
        .unwrap();
        let layout = device.layout();
        assert_eq!(layout.len(), 3);
        assert_relative_eq!(layout[0].start(), 0.);
        assert_relative_eq!(layout[1].start(), 100.);
        assert_relative_eq!(layout[2].start(), 350.);
        assert_relative_eq!(layout[2].end(), 400.);
        assert_relative_eq!(device.thickness(), 400.);
        assert_eq!(device.number_of_interfaces(), 2);
        assert_eq!(device.len(), 3);
    }

    #[test]
    fn empty_stacks_and_bad_temperatures_are_rejected() {
        assert_eq!(
            Device::<f64>::new(vec![], 300.).unwrap_err(),
            ProfileError::EmptyStack
        );
        assert_eq!(
            Device::new(vec![silicon(1e16, 10.)], 0.).unwrap_err(),
            ProfileError::Temperature(0.)
        );
    }

    #[test]
    fn set_voltage_only_touches_the_bias() {
        let mut device = Device::new(vec![silicon(1e16, 100.), silicon(-1e16, 100.)], 300.).unwrap();
        let layers = device.layers().to_vec();
        device.set_voltage(1, -0.4).unwrap();
        assert_eq!(device.bias().voltages(), &[0., -0.4]);
        assert_eq!(device.layers(), layers.as_slice());
        assert_relative_eq!(device.bias().delta(0), -0.4);
        assert_eq!(
            device.set_voltage(2, 1.),
            Err(ProfileError::LayerIndex { index: 2, layers: 2 })
        );
    }

    #[test]
    fn bias_must_cover_every_layer() {
        let device = Device::new(vec![silicon(1e16, 100.), silicon(-1e16, 100.)], 300.).unwrap();
        assert_eq!(
            device.with_bias(Bias::from_voltages(vec![0.])).unwrap_err(),
            ProfileError::BiasMismatch {
                voltages: 1,
                layers: 2
            }
        );
    }
}
