//! Device descriptions as written by the user
//!
//! A description names each layer's material, which is resolved against an [`InfoDesk`] when the
//! description is turned into a [`Device`]. Any constant of the looked-up material may be
//! overridden per layer.

use super::{Bias, Device, InfoDesk, MaterialLayer};
use crate::error::{DeviceError, MaterialError};
use config::{Config, File, FileFormat};
use nalgebra::RealField;
use serde::{de::DeserializeOwned, Deserialize};
use std::ops::Deref;
use std::path::Path;

#[derive(Debug, Deserialize)]
/// The on-disk form of a device
pub struct DeviceDescription<T> {
    /// Temperature in K, the configured global temperature is used when absent
    pub temperature: Option<T>,
    pub layers: Vec<LayerDescription<T>>,
}

impl<T> Deref for DeviceDescription<T> {
    type Target = Vec<LayerDescription<T>>;

    fn deref(&self) -> &Self::Target {
        &self.layers
    }
}

#[derive(Debug, Deserialize)]
/// The on-disk form of one layer
pub struct LayerDescription<T> {
    /// Identifier of the material in the info desk
    pub material: String,
    /// Thickness in nm
    pub thickness: T,
    /// Carrier density in cm^-3, negative for p-type, ignored for metals
    pub doping: Option<T>,
    /// Applied voltage in V
    pub voltage: Option<T>,
    /// Composition of an alloy
    pub composition: Option<T>,
    pub bandgap: Option<T>,
    #[serde(alias = "work_function")]
    pub electron_affinity: Option<T>,
    pub dielectric_constant: Option<T>,
}

impl<T: Copy + RealField> LayerDescription<T> {
    /// Looks up the material and applies the overrides of this layer
    pub fn resolve(&self, info_desk: &InfoDesk<T>) -> Result<MaterialLayer<T>, MaterialError> {
        let mut parameters = info_desk.get(&self.material, self.composition)?;
        if let Some(bandgap) = self.bandgap {
            parameters.bandgap = bandgap;
        }
        if let Some(electron_affinity) = self.electron_affinity {
            parameters.electron_affinity = electron_affinity;
        }
        if let Some(dielectric_constant) = self.dielectric_constant {
            parameters.dielectric_constant = dielectric_constant;
        }
        MaterialLayer::from_parameters(
            &parameters,
            self.doping.unwrap_or_else(T::zero),
            self.thickness,
        )
    }
}

impl<T: DeserializeOwned> DeviceDescription<T> {
    /// Reads a description from disk, the format is inferred from the file extension
    pub fn build(path: &Path) -> Result<Self, DeviceError> {
        let s = Config::builder().add_source(File::from(path)).build()?;
        Ok(s.try_deserialize()?)
    }

    /// Parses a description held in a TOML string
    pub fn from_toml_str(description: &str) -> Result<Self, DeviceError> {
        let s = Config::builder()
            .add_source(File::from_str(description, FileFormat::Toml))
            .build()?;
        Ok(s.try_deserialize()?)
    }
}

impl<T: Copy + RealField> DeviceDescription<T> {
    /// Resolves every layer and assembles the device with the voltages of the description
    pub fn into_device(
        &self,
        info_desk: &InfoDesk<T>,
        default_temperature: T,
    ) -> Result<Device<T>, DeviceError> {
        let layers = self
            .layers
            .iter()
            .enumerate()
            .map(|(index, layer)| {
                layer
                    .resolve(info_desk)
                    .map_err(|source| DeviceError::Layer {
                        index,
                        material: layer.material.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let bias = Bias::from_voltages(
            self.layers
                .iter()
                .map(|layer| layer.voltage.unwrap_or_else(T::zero))
                .collect(),
        );
        let temperature = self.temperature.unwrap_or(default_temperature);
        Ok(Device::new(layers, temperature)?.with_bias(bias)?)
    }
}

#[cfg(test)]
mod test {
    use super::DeviceDescription;
    use crate::device::{InfoDesk, LayerKind};
    use crate::error::{DeviceError, MaterialError};
    use approx::assert_relative_eq;

    const SCHOTTKY: &str = r#"
        temperature = 77.0

        [[layers]]
        material = "Au"
        thickness = 20.0

        [[layers]]
        material = "Si"
        thickness = 1000.0
        doping = 1e16
        voltage = -0.2
    "#;

    #[test]
    fn descriptions_resolve_against_the_info_desk() {
        let description: DeviceDescription<f64> = DeviceDescription::from_toml_str(SCHOTTKY).unwrap();
        assert_eq!(description.len(), 2);

        let device = description.into_device(&InfoDesk::default(), 300.).unwrap();
        assert_relative_eq!(device.temperature(), 77.);
        assert_eq!(device[0].kind(), LayerKind::Metal);
        assert_relative_eq!(device[1].carrier_density(), 1e16);
        assert_relative_eq!(device.thickness(), 1020.);
        assert_eq!(device.bias().voltages(), &[0., -0.2]);
    }

    #[test]
    fn overrides_replace_preset_constants() {
        let description: DeviceDescription<f64> = DeviceDescription::from_toml_str(
            r#"
            [[layers]]
            material = "Al"
            thickness = 10
            work_function = 4.3

            [[layers]]
            material = "AlGaAs"
            composition = 0.3
            thickness = 200.0
            doping = -1e17
            dielectric_constant = 12.0
            "#,
        )
        .unwrap();
        let device = description.into_device(&InfoDesk::default(), 300.).unwrap();
        assert_relative_eq!(device.temperature(), 300.);
        assert_relative_eq!(device[0].work_function(300.), 4.3);
        assert_relative_eq!(device[1].dielectric_constant(), 12.);
        assert_relative_eq!(device[1].bandgap(), 1.424 + 1.247 * 0.3, epsilon = 1e-12);
    }

    #[test]
    fn bad_layers_are_reported_with_their_index() {
        let description: DeviceDescription<f64> = DeviceDescription::from_toml_str(
            r#"
            [[layers]]
            material = "Si"
            thickness = 100.0
            doping = 1e16

            [[layers]]
            material = "GaAs"
            thickness = 100.0
            "#,
        )
        .unwrap();
        match description.into_device(&InfoDesk::default(), 300.) {
            Err(DeviceError::Layer {
                index,
                material,
                source,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(material, "GaAs");
                assert_eq!(source, MaterialError::ZeroCarrierDensity);
            }
            other => panic!("expected a layer error, got {other:?}"),
        }
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let description = DeviceDescription::<f32>::from_toml_str(
            "[[layers]]\nmaterial = \"Au\"\nthickness = 5.0\n",
        )
        .unwrap();
        assert!(description.temperature.is_none());
        let layer = &description[0];
        assert!(layer.doping.is_none());
        assert!(layer.voltage.is_none());
        assert!(layer.composition.is_none());
        assert!(layer.bandgap.is_none());
        assert!(layer.electron_affinity.is_none());
        assert!(layer.dielectric_constant.is_none());
    }

    #[test]
    fn malformed_descriptions_fail_to_read() {
        let result = DeviceDescription::<f64>::from_toml_str("[[layers]]\nmaterial = \"Si\"\n");
        assert!(matches!(result, Err(DeviceError::Read(_))));
    }
}
