//! A single layer of the device stack and its equilibrium band alignment

use super::info_desk::MaterialParameters;
use crate::constants::{
    BOLTZMANN, ELECTRON_CHARGE, ELECTRON_MASS, EPSILON_0, HBAR, METAL_CARRIER_DENSITY,
    METAL_DIELECTRIC_CONSTANT, PER_CUBIC_CENTIMETRE,
};
use crate::error::{as_f64, MaterialError};
use crate::profile::Levels;
use nalgebra::RealField;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Whether a layer conducts like a metal or a doped semiconductor
pub enum LayerKind {
    /// Zero gap, the band edges sit on the Fermi level
    Metal,
    /// A gapped material with a majority carrier density set by doping
    Semiconductor,
}

#[derive(Clone, Debug, PartialEq)]
/// The physical constants of one layer in the stack
///
/// Metals and semiconductors share this record. A metal is stored as a degenerate semiconductor:
/// zero band gap, the [`METAL_CARRIER_DENSITY`] and the [`METAL_DIELECTRIC_CONSTANT`] sentinel,
/// with the work function held in the electron affinity slot. The interface solver consumes
/// both kinds through the same equations.
pub struct MaterialLayer<T: RealField> {
    kind: LayerKind,
    /// Band gap in eV
    bandgap: T,
    /// Electron affinity in eV, or the work function for a metal
    electron_affinity: T,
    /// Static relative dielectric constant
    dielectric_constant: T,
    /// Carrier density in cm^-3, positive for n-type and negative for p-type
    carrier_density: T,
    /// Thickness in nm
    thickness: T,
    /// Density of states effective masses in units of the free electron mass
    electron_mass: T,
    hole_mass: T,
}

impl<T: Copy + RealField> MaterialLayer<T> {
    /// A metal layer with the given work function in eV and thickness in nm
    pub fn metal(work_function: T, thickness: T) -> Result<Self, MaterialError> {
        Self {
            kind: LayerKind::Metal,
            bandgap: T::zero(),
            electron_affinity: work_function,
            dielectric_constant: T::from_f64(METAL_DIELECTRIC_CONSTANT)
                .expect("Dielectric sentinel must fit in T"),
            carrier_density: T::from_f64(METAL_CARRIER_DENSITY)
                .expect("Metal carrier density must fit in T"),
            thickness,
            electron_mass: T::one(),
            hole_mass: T::one(),
        }
        .validate()
    }

    /// A semiconductor layer with free-electron density of states masses
    ///
    /// `carrier_density` follows the sign convention of the stack: positive for n-type and
    /// negative for p-type doping, in cm^-3.
    pub fn semiconductor(
        bandgap: T,
        electron_affinity: T,
        dielectric_constant: T,
        carrier_density: T,
        thickness: T,
    ) -> Result<Self, MaterialError> {
        Self {
            kind: LayerKind::Semiconductor,
            bandgap,
            electron_affinity,
            dielectric_constant,
            carrier_density,
            thickness,
            electron_mass: T::one(),
            hole_mass: T::one(),
        }
        .validate()
    }

    /// Builds a layer from registry parameters, the carrier density is ignored for metals
    pub fn from_parameters(
        parameters: &MaterialParameters<T>,
        carrier_density: T,
        thickness: T,
    ) -> Result<Self, MaterialError> {
        match parameters.kind {
            LayerKind::Metal => Self::metal(parameters.electron_affinity, thickness),
            LayerKind::Semiconductor => Self::semiconductor(
                parameters.bandgap,
                parameters.electron_affinity,
                parameters.dielectric_constant,
                carrier_density,
                thickness,
            )?
            .with_effective_masses(parameters.electron_mass, parameters.hole_mass),
        }
    }

    /// Replaces the density of states masses, in units of the free electron mass
    pub fn with_effective_masses(self, electron_mass: T, hole_mass: T) -> Result<Self, MaterialError> {
        Self {
            electron_mass,
            hole_mass,
            ..self
        }
        .validate()
    }

    fn validate(self) -> Result<Self, MaterialError> {
        for (name, value) in [
            ("bandgap", self.bandgap),
            ("electron_affinity", self.electron_affinity),
            ("dielectric_constant", self.dielectric_constant),
            ("carrier_density", self.carrier_density),
            ("thickness", self.thickness),
            ("electron_mass", self.electron_mass),
            ("hole_mass", self.hole_mass),
        ] {
            if !value.is_finite() {
                return Err(MaterialError::NotFinite(name));
            }
        }
        if self.thickness <= T::zero() {
            return Err(MaterialError::NonPositiveThickness(as_f64(self.thickness)));
        }
        if self.dielectric_constant <= T::zero() {
            return Err(MaterialError::NonPositiveDielectricConstant(as_f64(
                self.dielectric_constant,
            )));
        }
        if self.bandgap < T::zero() {
            return Err(MaterialError::NegativeBandgap(as_f64(self.bandgap)));
        }
        if self.kind == LayerKind::Semiconductor && self.carrier_density == T::zero() {
            return Err(MaterialError::ZeroCarrierDensity);
        }
        for mass in [self.electron_mass, self.hole_mass] {
            if mass <= T::zero() {
                return Err(MaterialError::NonPositiveEffectiveMass(as_f64(mass)));
            }
        }
        Ok(self)
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn is_metal(&self) -> bool {
        self.kind == LayerKind::Metal
    }

    pub fn bandgap(&self) -> T {
        self.bandgap
    }

    pub fn electron_affinity(&self) -> T {
        self.electron_affinity
    }

    pub fn dielectric_constant(&self) -> T {
        self.dielectric_constant
    }

    pub fn carrier_density(&self) -> T {
        self.carrier_density
    }

    pub fn thickness(&self) -> T {
        self.thickness
    }

    /// The electron and hole density of states masses
    pub fn effective_masses(&self) -> [T; 2] {
        [self.electron_mass, self.hole_mass]
    }

    /// Absolute permittivity in F / m
    pub(crate) fn permittivity(&self) -> T {
        self.dielectric_constant * T::from_f64(EPSILON_0).expect("Permittivity must fit in T")
    }

    /// Magnitude of the majority carrier density in m^-3
    pub(crate) fn majority_density(&self) -> T {
        self.carrier_density.abs()
            * T::from_f64(PER_CUBIC_CENTIMETRE).expect("Unit conversion must fit in T")
    }

    /// Distance from the Fermi level up to the conduction band edge in the bulk, in eV
    ///
    /// Non-degenerate statistics: `kT ln(N_c / n)` for n-type material and
    /// `E_g - kT ln(N_v / p)` for p-type. A metal has its band edges on the Fermi level.
    pub fn conduction_offset(&self, temperature: T) -> T {
        match self.kind {
            LayerKind::Metal => T::zero(),
            LayerKind::Semiconductor => {
                let thermal_energy = thermal_energy(temperature);
                if self.carrier_density > T::zero() {
                    let n_c = effective_density_of_states(self.electron_mass, temperature);
                    thermal_energy * (n_c / self.carrier_density).ln()
                } else {
                    let n_v = effective_density_of_states(self.hole_mass, temperature);
                    self.bandgap - thermal_energy * (n_v / self.carrier_density.abs()).ln()
                }
            }
        }
    }

    /// Energy separating the vacuum level from the Fermi level in the bulk, in eV
    pub fn work_function(&self, temperature: T) -> T {
        self.electron_affinity + self.conduction_offset(temperature)
    }

    /// Flat-band levels deep in the bulk of the layer when it is held at `voltage`
    ///
    /// Energies are measured from the equilibrium Fermi level, a positive voltage pulls every
    /// level in the layer down by `qV`.
    pub fn bulk_levels(&self, temperature: T, voltage: T) -> Levels<T> {
        let fermi = -voltage;
        let conduction = fermi + self.conduction_offset(temperature);
        Levels {
            conduction,
            valence: conduction - self.bandgap,
            fermi,
            vacuum: conduction + self.electron_affinity,
        }
    }
}

/// `kT` in eV
fn thermal_energy<T: Copy + RealField>(temperature: T) -> T {
    temperature
        * T::from_f64(BOLTZMANN / ELECTRON_CHARGE).expect("Boltzmann constant must fit in T")
}

/// `m_0 k / 2 pi hbar^2`, scaled so the density of states comes out in cm^-3
fn density_of_states_prefactor() -> f64 {
    ELECTRON_MASS * BOLTZMANN
        / (2. * std::f64::consts::PI * HBAR * HBAR)
        / PER_CUBIC_CENTIMETRE.powf(2. / 3.)
}

/// Effective density of states `2 (m kT / 2 pi hbar^2)^(3/2)` in cm^-3
#[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
fn effective_density_of_states<T: Copy + RealField>(mass: T, temperature: T) -> T {
    let prefactor = T::from_f64(density_of_states_prefactor())
        .expect("Density of states prefactor must fit in T");
    2.0 * (prefactor * mass * temperature).powf(1.5)
}
