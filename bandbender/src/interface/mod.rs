//! # Interface
//!
//! Solves the electrostatics of a single boundary between two adjacent layers in the
//! full depletion approximation.
//!
//! Two families of levels are treated independently. The band levels (conduction, valence
//! and vacuum) must absorb the step `V_bi - V` between the bulk vacuum levels of the two layers,
//! where `V_bi` is the work function difference and `V` the bias across the interface. The Fermi
//! level absorbs only the bias, it is solved with the same closed form and `V_bi = 0`. Only the
//! band widths are bounded by the layers: a Fermi level solution too wide for its layers
//! collapses to an abrupt step at the interface.
//!
//! ```ignore
//! let solution = InterfaceSolver::new(0, &metal, &silicon, 300.).solve(0.)?;
//! let (x1, x2) = (solution.x1(), solution.x2());
//! ```

mod junction;

pub use junction::*;

use crate::device::MaterialLayer;
use crate::error::{as_f64, DepletionOverflowError};
use nalgebra::RealField;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Direction of band bending crossing an interface from left to right
pub enum BendSign {
    /// Energy levels bend upward
    Negative,
    /// Flat band
    Flat,
    /// Energy levels bend downward
    Positive,
}

impl BendSign {
    fn of<T: RealField>(value: T) -> Self {
        if value > T::zero() {
            BendSign::Positive
        } else if value < T::zero() {
            BendSign::Negative
        } else {
            BendSign::Flat
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            BendSign::Negative => BendSign::Positive,
            BendSign::Flat => BendSign::Flat,
            BendSign::Positive => BendSign::Negative,
        }
    }
}

impl std::fmt::Display for BendSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BendSign::Negative => write!(f, "upward"),
            BendSign::Flat => write!(f, "flat"),
            BendSign::Positive => write!(f, "downward"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// The solved electrostatics of interface `index`, between layers `index` and `index + 1`
pub struct InterfaceSolution<T> {
    pub index: usize,
    /// Work function of the right layer minus that of the left, in V
    pub built_in_potential: T,
    /// Voltage on the right layer minus voltage on the left, in V
    pub applied_delta: T,
    /// Depletion regions shared by the conduction, valence and vacuum levels
    pub bands: Junction<T>,
    /// Depletion regions of the Fermi level, abrupt when they would not fit in the layers
    pub fermi: Junction<T>,
}

impl<T: Copy + RealField> InterfaceSolution<T> {
    /// Band depletion width into the left layer in nm
    pub fn x1(&self) -> T {
        self.bands.left.width()
    }

    /// Band depletion width into the right layer in nm
    pub fn x2(&self) -> T {
        self.bands.right.width()
    }

    /// `sign(V - V_bi)`, positive when the levels bend down from left to right
    pub fn bend_sign(&self) -> BendSign {
        BendSign::of(self.applied_delta - self.built_in_potential)
    }

    pub fn is_flat_band(&self) -> bool {
        self.bend_sign() == BendSign::Flat
    }
}

/// Solves the interface between two adjacent layers
///
/// The solver borrows the layers and holds no other state, so solving is a pure function of the
/// layers, the temperature and the bias across the interface.
pub struct InterfaceSolver<'a, T: RealField> {
    index: usize,
    left: &'a MaterialLayer<T>,
    right: &'a MaterialLayer<T>,
    temperature: T,
}

impl<'a, T: Copy + RealField> InterfaceSolver<'a, T> {
    pub fn new(
        index: usize,
        left: &'a MaterialLayer<T>,
        right: &'a MaterialLayer<T>,
        temperature: T,
    ) -> Self {
        Self {
            index,
            left,
            right,
            temperature,
        }
    }

    /// The equilibrium step in vacuum level from the left bulk to the right bulk, in V
    pub fn built_in_potential(&self) -> T {
        self.right.work_function(self.temperature) - self.left.work_function(self.temperature)
    }

    /// Solves for the depletion regions under `applied_delta`, the voltage on the right layer
    /// minus the voltage on the left
    ///
    /// Fails if a band depletion region needs more room than the layer it extends into.
    #[tracing::instrument(name = "Interface solve", level = "debug", skip(self), fields(interface = self.index))]
    pub fn solve(&self, applied_delta: T) -> Result<InterfaceSolution<T>, DepletionOverflowError> {
        let built_in_potential = self.built_in_potential();
        let bands = Junction::between(self.left, self.right, built_in_potential - applied_delta);
        self.check_fit(self.index, bands.left.width(), self.left)?;
        self.check_fit(self.index + 1, bands.right.width(), self.right)?;

        let mut fermi = Junction::between(self.left, self.right, -applied_delta);
        if fermi.left.width() > self.left.thickness() || fermi.right.width() > self.right.thickness()
        {
            tracing::debug!("Fermi level depletion does not fit, stepping abruptly");
            fermi = Junction::abrupt(-applied_delta);
        }

        tracing::debug!(
            "V_bi = {:.4} V, x1 = {:.3} nm, x2 = {:.3} nm",
            as_f64(built_in_potential),
            as_f64(bands.left.width()),
            as_f64(bands.right.width())
        );

        Ok(InterfaceSolution {
            index: self.index,
            built_in_potential,
            applied_delta,
            bands,
            fermi,
        })
    }

    fn check_fit(
        &self,
        layer: usize,
        width: T,
        material: &MaterialLayer<T>,
    ) -> Result<(), DepletionOverflowError> {
        if width > material.thickness() {
            return Err(DepletionOverflowError {
                interface: self.index,
                layer,
                width: as_f64(width),
                thickness: as_f64(material.thickness()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{BendSign, InterfaceSolver};
    use crate::device::MaterialLayer;
    use approx::assert_relative_eq;

    fn silicon(doping: f64, thickness: f64) -> MaterialLayer<f64> {
        MaterialLayer::semiconductor(1.12, 4.05, 11.7, doping, thickness).unwrap()
    }

    #[test]
    fn flat_band_when_bias_cancels_the_built_in_potential() {
        let (n, p) = (silicon(1e17, 1e3), silicon(-1e17, 1e3));
        let solver = InterfaceSolver::new(0, &n, &p, 300.);
        let built_in = solver.built_in_potential();
        assert!(built_in > 0.5);

        let solution = solver.solve(built_in).unwrap();
        assert_eq!(solution.bend_sign(), BendSign::Flat);
        assert!(solution.is_flat_band());
        assert_relative_eq!(solution.x1(), 0.);
        assert_relative_eq!(solution.x2(), 0.);
    }

    #[test]
    fn symmetric_homojunction_depletes_equally() {
        let (left, right) = (silicon(1e16, 1e3), silicon(1e16, 1e3));
        let solver = InterfaceSolver::new(0, &left, &right, 300.);
        assert_relative_eq!(solver.built_in_potential(), 0.);

        let rest = solver.solve(0.).unwrap();
        assert_relative_eq!(rest.x1(), rest.x2());
        assert_eq!(rest.bend_sign(), BendSign::Flat);

        let biased = solver.solve(0.3).unwrap();
        assert_relative_eq!(biased.x1(), biased.x2(), max_relative = 1e-12);
        assert_relative_eq!(biased.fermi.left.width(), biased.x1(), max_relative = 1e-12);
        assert!(biased.x1() > 0.);
    }

    #[test]
    fn charge_balances_across_the_interface() {
        let (n, p) = (silicon(3e15, 5e3), silicon(-2e17, 5e3));
        let solution = InterfaceSolver::new(0, &n, &p, 300.).solve(-0.2).unwrap();
        assert_relative_eq!(3e15 * solution.x1(), 2e17 * solution.x2(), max_relative = 1e-9);
        assert!(solution.x1() > solution.x2());
    }

    #[test]
    fn reflecting_the_bias_about_the_built_in_potential_flips_the_sign() {
        let (n, p) = (silicon(1e16, 2e3), silicon(-1e16, 2e3));
        let solver = InterfaceSolver::new(3, &n, &p, 300.);
        let built_in = solver.built_in_potential();

        let forward = solver.solve(built_in + 0.25).unwrap();
        let reverse = solver.solve(built_in - 0.25).unwrap();
        assert_eq!(forward.bend_sign(), BendSign::Positive);
        assert_eq!(reverse.bend_sign(), forward.bend_sign().flipped());
        assert_relative_eq!(forward.x1(), reverse.x1(), max_relative = 1e-12);
        assert_relative_eq!(
            forward.bands.right.shift(),
            -reverse.bands.right.shift(),
            max_relative = 1e-12
        );
        assert_eq!(forward.index, 3);
    }

    #[test]
    fn metals_collapse_to_an_abrupt_step() {
        let (gold, aluminium) = (
            MaterialLayer::metal(5.1f64, 10.).unwrap(),
            MaterialLayer::metal(4.06, 10.).unwrap(),
        );
        let solution = InterfaceSolver::new(0, &gold, &aluminium, 300.)
            .solve(0.)
            .unwrap();
        assert_relative_eq!(solution.built_in_potential, -1.04, epsilon = 1e-12);
        assert_eq!(solution.bend_sign(), BendSign::Positive);
        assert_relative_eq!(solution.x1(), 0.);
        assert_relative_eq!(solution.x2(), 0.);
        assert_relative_eq!(solution.bands.step, -1.04, epsilon = 1e-12);
    }

    #[test]
    fn schottky_contact_only_depletes_the_semiconductor() {
        let silicon = silicon(1e16, 1e3);
        let metal = MaterialLayer::metal(silicon.work_function(300.) - 0.5, 50.).unwrap();
        let solution = InterfaceSolver::new(0, &metal, &silicon, 300.)
            .solve(0.)
            .unwrap();
        assert_relative_eq!(solution.built_in_potential, 0.5, epsilon = 1e-12);
        assert!(solution.x1() < 1e-3);
        assert!(solution.x2() > 200.);
        assert_relative_eq!(solution.bands.right.shift(), -0.5, epsilon = 1e-9);
        assert!(solution.bands.is_continuous());
    }

    #[test]
    fn thin_layers_overflow() {
        let (metal, thin) = (MaterialLayer::metal(4.5f64, 100.).unwrap(), silicon(1e16, 10.));
        let error = InterfaceSolver::new(1, &metal, &thin, 300.)
            .solve(0.5)
            .unwrap_err();
        assert_eq!(error.interface, 1);
        assert_eq!(error.layer, 2);
        assert!(error.width > error.thickness);
        assert_relative_eq!(error.thickness, 10.);
    }

    #[test]
    fn thin_layers_at_flat_band_stay_flat() {
        // The Fermi level has to step by V_bi, which 10 nm layers cannot hold
        let (n, p) = (silicon(1e16, 10.), silicon(-1e16, 10.));
        let solver = InterfaceSolver::new(0, &n, &p, 300.);
        let built_in = solver.built_in_potential();

        let solution = solver.solve(built_in).unwrap();
        assert_eq!(solution.bend_sign(), BendSign::Flat);
        assert_eq!(solution.x1(), 0.);
        assert_eq!(solution.x2(), 0.);
        assert!(solution.fermi.left.is_flat());
        assert!(solution.fermi.right.is_flat());
        assert_relative_eq!(solution.fermi.step, -built_in);
    }

    #[test]
    fn fermi_level_bends_when_it_fits() {
        let (n, p) = (silicon(1e16, 1e3), silicon(-1e16, 1e3));
        let solver = InterfaceSolver::new(0, &n, &p, 300.);
        let solution = solver.solve(solver.built_in_potential()).unwrap();
        assert!(solution.fermi.left.width() > 10.);
        assert!(solution.fermi.is_continuous());
    }
}
