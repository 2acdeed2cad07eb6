//! The material registry
//!
//! An `InfoDesk` maps material identifiers to the constants needed to build a
//! [`MaterialLayer`](super::MaterialLayer). It is an ordinary value: callers build one, extend it
//! with their own materials if they need to, and pass it by reference wherever layers are
//! resolved. Nothing in the crate consults a global table.

mod materials;

use super::{LayerKind, MaterialLayer};
use crate::error::{as_f64, MaterialError};
use nalgebra::RealField;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
/// The thickness- and doping-independent constants of a material
pub struct MaterialParameters<T> {
    /// Metal or semiconductor
    pub kind: LayerKind,
    /// Band gap in eV, zero for metals
    pub bandgap: T,
    /// Electron affinity in eV, for metals the work function
    pub electron_affinity: T,
    /// Static relative dielectric constant, ignored for metals
    pub dielectric_constant: T,
    /// Density of states electron mass in units of the free electron mass
    pub electron_mass: T,
    /// Density of states hole mass in units of the free electron mass
    pub hole_mass: T,
}

impl<T: Copy + RealField> MaterialParameters<T> {
    /// Parameters of a metal with the given work function in eV
    pub fn metal(work_function: T) -> Self {
        Self {
            kind: LayerKind::Metal,
            bandgap: T::zero(),
            electron_affinity: work_function,
            dielectric_constant: T::one(),
            electron_mass: T::one(),
            hole_mass: T::one(),
        }
    }

    /// Parameters of a semiconductor
    pub fn semiconductor(
        bandgap: T,
        electron_affinity: T,
        dielectric_constant: T,
        electron_mass: T,
        hole_mass: T,
    ) -> Self {
        Self {
            kind: LayerKind::Semiconductor,
            bandgap,
            electron_affinity,
            dielectric_constant,
            electron_mass,
            hole_mass,
        }
    }
}

#[derive(Clone, Debug)]
enum Entry<T> {
    Fixed(MaterialParameters<T>),
    /// A ternary alloy, parameterised by its composition in `[0, 1]`
    Alloy(fn(T) -> MaterialParameters<T>),
}

#[derive(Clone, Debug)]
/// A read-only lookup table from material identifier to material constants
pub struct InfoDesk<T> {
    materials: BTreeMap<String, Entry<T>>,
}

impl<T: Copy + RealField> Default for InfoDesk<T> {
    fn default() -> Self {
        Self::with_presets()
    }
}

impl<T: Copy + RealField> InfoDesk<T> {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            materials: BTreeMap::new(),
        }
    }

    /// A registry holding every built-in semiconductor, alloy and metal
    pub fn with_presets() -> Self {
        let mut info_desk = Self::new();
        for (name, parameters) in materials::semiconductors() {
            info_desk.insert(name, parameters);
        }
        for (name, alloy) in materials::alloys() {
            info_desk.insert_alloy(name, alloy);
        }
        for (name, work_function) in materials::METAL_WORK_FUNCTIONS {
            info_desk.insert(
                name,
                MaterialParameters::metal(
                    T::from_f64(work_function).expect("Work function must fit in T"),
                ),
            );
        }
        info_desk
    }

    /// Registers a material, returning the parameters it replaced if the name was taken
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        parameters: MaterialParameters<T>,
    ) -> Option<MaterialParameters<T>> {
        match self.materials.insert(name.into(), Entry::Fixed(parameters)) {
            Some(Entry::Fixed(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Registers an alloy whose parameters depend on composition
    pub fn insert_alloy(&mut self, name: impl Into<String>, alloy: fn(T) -> MaterialParameters<T>) {
        self.materials.insert(name.into(), Entry::Alloy(alloy));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// Every registered identifier in lexical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    pub fn is_alloy(&self, name: &str) -> bool {
        matches!(self.materials.get(name), Some(Entry::Alloy(_)))
    }

    /// Looks up the constants of `name`
    ///
    /// Alloys need a `composition`, which is ignored for fixed materials.
    pub fn get(&self, name: &str, composition: Option<T>) -> Result<MaterialParameters<T>, MaterialError> {
        match self.materials.get(name) {
            None => Err(MaterialError::Unknown(name.to_owned())),
            Some(Entry::Fixed(parameters)) => Ok(parameters.clone()),
            Some(Entry::Alloy(alloy)) => {
                let x = composition.ok_or_else(|| MaterialError::MissingComposition(name.to_owned()))?;
                if !(x >= T::zero() && x <= T::one()) {
                    return Err(MaterialError::Composition(as_f64(x)));
                }
                Ok(alloy(x))
            }
        }
    }

    /// Resolves `name` and builds a validated layer from it
    pub fn build_layer(
        &self,
        name: &str,
        composition: Option<T>,
        carrier_density: T,
        thickness: T,
    ) -> Result<MaterialLayer<T>, MaterialError> {
        let parameters = self.get(name, composition)?;
        MaterialLayer::from_parameters(&parameters, carrier_density, thickness)
    }
}
