//! Closed-form depletion regions either side of a single abrupt junction

use crate::constants::{ELECTRON_CHARGE, NANOMETRE};
use crate::device::MaterialLayer;
use nalgebra::RealField;

#[derive(Clone, Copy, Debug, PartialEq)]
/// The band bending on one side of a junction
///
/// Inside the region a level is displaced from its bulk value by the parabola
/// `shift * ((width - d) / width)^2` where `d` is the distance from the junction. The parabola
/// meets the bulk with zero slope at `d = width`, beyond which the level is flat.
pub struct DepletionRegion<T> {
    /// Extent into the layer in nm
    width: T,
    /// Signed displacement of the level at the junction itself, in eV
    shift: T,
}

impl<T: Copy + RealField> DepletionRegion<T> {
    /// A region which does not bend at all
    pub fn flat() -> Self {
        Self {
            width: T::zero(),
            shift: T::zero(),
        }
    }

    pub fn width(&self) -> T {
        self.width
    }

    pub fn shift(&self) -> T {
        self.shift
    }

    pub fn is_flat(&self) -> bool {
        self.width == T::zero()
    }

    /// Displacement from the bulk level at `distance` nm from the junction
    pub fn offset(&self, distance: T) -> T {
        if self.width <= T::zero() || distance >= self.width {
            return T::zero();
        }
        let fraction = (self.width - distance.max(T::zero())) / self.width;
        self.shift * fraction * fraction
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// The pair of depletion regions which absorb an energy step across a junction
pub struct Junction<T> {
    /// The region extending into the layer on the left of the junction
    pub left: DepletionRegion<T>,
    /// The region extending into the layer on the right of the junction
    pub right: DepletionRegion<T>,
    /// Bulk level on the right minus bulk level on the left, in eV
    pub step: T,
}

impl<T: Copy + RealField> Junction<T> {
    /// Solves the full depletion problem for an energy `step` between the bulk of `left` and
    /// the bulk of `right`
    ///
    /// The widths follow from charge neutrality `n_a x_1 = n_b x_2` and from requiring the
    /// two parabolic drops `q n x^2 / 2 eps` to sum to `|step|`. The level rises towards the
    /// junction on the left and falls away from it on the right when `step` is positive.
    ///
    /// Two metals screen any step within a vanishing length, their contact is an abrupt step.
    #[numeric_literals::replace_float_literals(T::from_f64(literal).unwrap())]
    pub fn between(left: &MaterialLayer<T>, right: &MaterialLayer<T>, step: T) -> Self {
        if step == T::zero() || (left.is_metal() && right.is_metal()) {
            return Self::abrupt(step);
        }
        let charge = T::from_f64(ELECTRON_CHARGE).expect("Electron charge must fit in T");
        let nanometre = T::from_f64(NANOMETRE).expect("Nanometre must fit in T");

        let (eps_a, eps_b) = (left.permittivity(), right.permittivity());
        let (n_a, n_b) = (left.majority_density(), right.majority_density());
        let magnitude = step.abs();
        let screening = eps_a * n_a + eps_b * n_b;

        let common = 2. * eps_a * eps_b * magnitude / (charge * screening);
        let x1 = (common * n_b / n_a).sqrt() / nanometre;
        let x2 = (common * n_a / n_b).sqrt() / nanometre;

        // q n x^2 / 2 eps, reduced so the two sides sum to |step| exactly
        let drop_a = magnitude * eps_b * n_b / screening;
        let drop_b = magnitude * eps_a * n_a / screening;

        let sign = step.signum();
        Self {
            left: DepletionRegion {
                width: x1,
                shift: sign * drop_a,
            },
            right: DepletionRegion {
                width: x2,
                shift: -sign * drop_b,
            },
            step,
        }
    }

    /// A step with no bending either side
    pub fn abrupt(step: T) -> Self {
        Self {
            left: DepletionRegion::flat(),
            right: DepletionRegion::flat(),
            step,
        }
    }

    /// Whether the bulk levels meet at the junction without a discontinuity
    pub fn is_continuous(&self) -> bool {
        self.step == T::zero() || !(self.left.is_flat() && self.right.is_flat())
    }

    /// The level at the junction, measured from the bulk level on the left
    pub fn junction_level(&self) -> T {
        self.left.shift
    }
}

#[cfg(test)]
mod test {
    use super::{DepletionRegion, Junction};
    use crate::device::MaterialLayer;
    use approx::assert_relative_eq;
    use rand::Rng;

    fn silicon(doping: f64) -> MaterialLayer<f64> {
        MaterialLayer::semiconductor(1.12, 4.05, 11.7, doping, 1e4).unwrap()
    }

    #[test]
    fn region_is_parabolic_and_meets_the_bulk_smoothly() {
        let region = DepletionRegion {
            width: 10f64,
            shift: -0.4,
        };
        assert_relative_eq!(region.offset(0.), -0.4);
        assert_relative_eq!(region.offset(5.), -0.1);
        assert_relative_eq!(region.offset(10.), 0.);
        assert_relative_eq!(region.offset(25.), 0.);
        assert_relative_eq!(DepletionRegion::<f64>::flat().offset(0.), 0.);
    }

    #[test]
    fn textbook_one_sided_width() {
        // A metal on 1e16 cm^-3 silicon supporting 0.5 V depletes ~254 nm of the semiconductor
        let metal = MaterialLayer::metal(4.5f64, 100.).unwrap();
        let junction = Junction::between(&metal, &silicon(1e16), 0.5);
        assert_relative_eq!(junction.right.width(), 254., max_relative = 0.01);
        assert!(junction.left.width() < 1e-3);
        assert_relative_eq!(junction.right.shift(), -0.5, epsilon = 1e-9);
    }

    #[test]
    fn drops_absorb_the_whole_step() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let left = silicon(10f64.powf(rng.gen_range(14.0..19.0)));
            let right = silicon(-(10f64.powf(rng.gen_range(14.0..19.0))));
            let step = rng.gen_range(-1.5..1.5);
            let junction = Junction::between(&left, &right, step);
            assert_relative_eq!(
                junction.left.shift() - junction.right.shift(),
                step,
                epsilon = 1e-12
            );
            assert_relative_eq!(
                left.carrier_density().abs() * junction.left.width(),
                right.carrier_density().abs() * junction.right.width(),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn zero_step_is_flat() {
        let junction = Junction::between(&silicon(1e16), &silicon(-1e17), 0.);
        assert!(junction.left.is_flat());
        assert!(junction.right.is_flat());
        assert_relative_eq!(junction.junction_level(), 0.);
        assert!(junction.is_continuous());
    }

    #[test]
    fn metal_contacts_are_abrupt() {
        let gold = MaterialLayer::metal(5.1f64, 10.).unwrap();
        let aluminium = MaterialLayer::metal(4.06, 10.).unwrap();
        let junction = Junction::between(&gold, &aluminium, -1.04);
        assert!(junction.left.is_flat());
        assert!(junction.right.is_flat());
        assert!(!junction.is_continuous());
        assert_relative_eq!(junction.step, -1.04);
    }
}
