//! Built-in material constants
//!
//! Semiconductor data follow the Ioffe NSM archive (https://www.ioffe.ru/SVA/NSM/Semicond/),
//! metal work functions are the low end of the tabulated ranges for polycrystalline samples.

use super::MaterialParameters;
use nalgebra::RealField;

/// Work functions in eV
pub(crate) const METAL_WORK_FUNCTIONS: [(&str, f64); 26] = [
    ("Ag", 4.26),
    ("Al", 4.06),
    ("As", 3.75),
    ("Au", 5.10),
    ("B", 4.45),
    ("C", 5.0),
    ("Ca", 2.87),
    ("Cd", 4.08),
    ("Cu", 4.53),
    ("Fe", 4.67),
    ("Ga", 4.32),
    ("In", 4.09),
    ("K", 2.29),
    ("Li", 2.9),
    ("Mg", 3.66),
    ("Mn", 4.1),
    ("Na", 2.36),
    ("Pb", 4.25),
    ("Pd", 5.22),
    ("Pt", 5.12),
    ("Sb", 4.55),
    ("Se", 5.9),
    ("Sn", 4.42),
    ("Te", 4.95),
    ("Ti", 4.33),
    ("Zn", 3.63),
];

pub(crate) fn semiconductors<T: Copy + RealField>() -> Vec<(&'static str, MaterialParameters<T>)> {
    vec![
        ("Si", MaterialParameters::si()),
        ("GaAs", MaterialParameters::gaas()),
        ("Ge", MaterialParameters::ge()),
        ("GaP", MaterialParameters::gap()),
        ("InAs", MaterialParameters::inas()),
        ("GaSb", MaterialParameters::gasb()),
        ("InSb", MaterialParameters::insb()),
        ("InP", MaterialParameters::inp()),
        ("AlN", MaterialParameters::aln()),
        ("InN", MaterialParameters::inn()),
        ("GaN", MaterialParameters::gan()),
    ]
}

pub(crate) fn alloys<T: Copy + RealField>() -> Vec<(&'static str, fn(T) -> MaterialParameters<T>)> {
    vec![(
        "AlGaAs",
        MaterialParameters::algaas as fn(T) -> MaterialParameters<T>,
    )]
}

/// Density of states mass of `valleys` equivalent ellipsoidal minima
#[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
fn electron_mass<T: Copy + RealField>(valleys: T, longitudinal: T, transverse: T) -> T {
    (valleys * valleys * longitudinal * transverse * transverse).powf(1. / 3.)
}

/// Density of states mass of degenerate heavy and light hole bands
#[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
fn hole_mass<T: Copy + RealField>(heavy: T, light: T) -> T {
    (heavy.powf(1.5) + light.powf(1.5)).powf(2. / 3.)
}

impl<T: Copy + RealField> MaterialParameters<T> {
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn si() -> Self {
        Self::semiconductor(
            1.12,
            4.05,
            11.7,
            electron_mass(6.0, 0.98, 0.19),
            hole_mass(0.49, 0.16),
        )
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn gaas() -> Self {
        Self::semiconductor(
            1.424,
            4.07,
            12.9,
            electron_mass(1.0, 0.063, 0.063),
            hole_mass(0.51, 0.082),
        )
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn ge() -> Self {
        Self::semiconductor(
            0.661,
            4.0,
            16.2,
            electron_mass(4.0, 1.6, 0.08),
            hole_mass(0.33, 0.043),
        )
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn gap() -> Self {
        Self::semiconductor(
            2.26,
            3.8,
            11.1,
            electron_mass(3.0, 1.12, 0.22),
            hole_mass(0.79, 0.14),
        )
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn inas() -> Self {
        Self::semiconductor(
            0.354,
            4.9,
            12.3,
            electron_mass(1.0, 0.023, 0.023),
            hole_mass(0.41, 0.026),
        )
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn gasb() -> Self {
        Self::semiconductor(
            0.726,
            4.06,
            15.7,
            electron_mass(1.0, 0.041, 0.041),
            hole_mass(0.4, 0.05),
        )
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn insb() -> Self {
        Self::semiconductor(
            0.17,
            4.59,
            16.7,
            electron_mass(1.0, 0.014, 0.014),
            hole_mass(0.43, 0.015),
        )
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn inp() -> Self {
        Self::semiconductor(
            1.344,
            4.38,
            12.5,
            electron_mass(1.0, 0.08, 0.08),
            hole_mass(0.6, 0.089),
        )
    }

    // The nitrides only have density of states masses tabulated
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn aln() -> Self {
        Self::semiconductor(6.1, 0.6, 9.14, 0.4, 7.26)
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn inn() -> Self {
        Self::semiconductor(1.97, 4.7, 8.4, 0.12, 1.65)
    }

    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn gan() -> Self {
        Self::semiconductor(3.2, 4.1, 8.9, 0.2, 1.5)
    }

    /// Al(x) Ga(1-x) As, direct below x = 0.45 and indirect above
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    fn algaas(x: T) -> Self {
        let direct = x < 0.45;
        let light = x < 0.41;
        Self::semiconductor(
            if direct {
                1.424 + 1.247 * x
            } else {
                1.9 + 0.125 * x + 0.143 * x * x
            },
            if direct { 4.07 - 1.1 * x } else { 3.64 - 0.14 * x },
            12.9 - 2.84 * x,
            if light {
                (0.063 + 0.083 * x).powf(1.5)
            } else {
                (0.85 - 0.14 * x).powf(1.5)
            },
            if light {
                (0.51 + 0.25 * x).powf(1.5)
            } else {
                (0.85 - 0.14 * x).powf(1.5)
            },
        )
    }
}
