use super::{LayerSegment, ProfileResult};
use crate::device::{Bias, Device};
use crate::error::{as_f64, DepletionOverflowError, ProfileError};
use crate::interface::{DepletionRegion, InterfaceSolution, InterfaceSolver, Junction};
use bandbender_mesher::{create_line_segment_mesh_1d_from_regions, distribute_cells, Assignment};
use nalgebra::{DVector, RealField};

/// Number of samples used when none is configured
pub const DEFAULT_NUMBER_OF_POINTS: usize = 1000;

/// Builder for a `ProfileResult` from a reference to a `Device` and the `Bias` applied to it
pub struct ProfileBuilder<RefDevice, RefBias> {
    device: RefDevice,
    bias: RefBias,
    number_of_points: usize,
}

impl Default for ProfileBuilder<(), ()> {
    fn default() -> Self {
        Self {
            device: (),
            bias: (),
            number_of_points: DEFAULT_NUMBER_OF_POINTS,
        }
    }
}

impl ProfileBuilder<(), ()> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<RefDevice, RefBias> ProfileBuilder<RefDevice, RefBias> {
    /// Attach the device to profile
    pub fn with_device<D>(self, device: &D) -> ProfileBuilder<&D, RefBias> {
        ProfileBuilder {
            device,
            bias: self.bias,
            number_of_points: self.number_of_points,
        }
    }

    /// Attach the voltages applied to each layer
    pub fn with_bias<B>(self, bias: &B) -> ProfileBuilder<RefDevice, &B> {
        ProfileBuilder {
            device: self.device,
            bias,
            number_of_points: self.number_of_points,
        }
    }

    /// The approximate number of distinct positions sampled across the device
    pub fn with_number_of_points(self, number_of_points: usize) -> Self {
        Self {
            number_of_points,
            ..self
        }
    }
}

impl<T: Copy + RealField> ProfileBuilder<&Device<T>, &Bias<T>> {
    /// Solves every interface and samples the stitched profile
    ///
    /// Nothing is returned unless every depletion region fits inside its layer.
    #[tracing::instrument(name = "Profile Builder", level = "info", skip(self))]
    pub fn build(self) -> Result<ProfileResult<T>, ProfileError> {
        let interfaces = solve_interfaces(self.device, self.bias)?;
        let segments = segments(self.device, self.bias, &interfaces);

        let layout = self.device.layout();
        let cells = distribute_cells(
            &layout,
            self.number_of_points
                .saturating_sub(1)
                .max(self.device.layers().len()),
        );
        let mesh = create_line_segment_mesh_1d_from_regions(&layout, &cells);

        let capacity = mesh.num_nodes() + interfaces.len();
        let mut positions = Vec::with_capacity(capacity);
        let mut levels = Vec::with_capacity(capacity);
        for (point, assignment) in mesh.vertices() {
            // Left limit then right limit at interfaces
            for &region in assignment.regions() {
                positions.push(point.x);
                levels.push(segments[region].levels_at(point.x));
            }
            if let Assignment::Boundary([left, _]) = assignment {
                tracing::trace!("Interface {left} sampled at {:.3} nm", as_f64(point.x));
            }
        }

        tracing::info!(
            "Sampled {} points across {} layers",
            positions.len(),
            segments.len()
        );

        Ok(ProfileResult {
            conduction: DVector::from_iterator(levels.len(), levels.iter().map(|l| l.conduction)),
            valence: DVector::from_iterator(levels.len(), levels.iter().map(|l| l.valence)),
            fermi: DVector::from_iterator(levels.len(), levels.iter().map(|l| l.fermi)),
            vacuum: DVector::from_iterator(levels.len(), levels.iter().map(|l| l.vacuum)),
            positions: DVector::from_vec(positions),
            interfaces,
            segments,
        })
    }
}

/// Solves each interface of `device` under `bias`, left to right
///
/// Besides the per-interface checks an interior layer is rejected when the band depletion
/// regions entering from both of its edges overlap. Overlapping Fermi level regions collapse to
/// abrupt steps at both interfaces instead.
pub(crate) fn solve_interfaces<T: Copy + RealField>(
    device: &Device<T>,
    bias: &Bias<T>,
) -> Result<Vec<InterfaceSolution<T>>, ProfileError> {
    device.check_bias(bias)?;
    let temperature = device.temperature();
    let mut interfaces = device
        .layers()
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            InterfaceSolver::new(index, &pair[0], &pair[1], temperature).solve(bias.delta(index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for layer in 1..device.len().saturating_sub(1) {
        let thickness = device[layer].thickness();
        let (before, after) = interfaces.split_at_mut(layer);
        let (entering, leaving) = (&mut before[layer - 1], &mut after[0]);

        let width = entering.bands.right.width() + leaving.bands.left.width();
        if width > thickness {
            return Err(DepletionOverflowError {
                interface: leaving.index,
                layer,
                width: as_f64(width),
                thickness: as_f64(thickness),
            }
            .into());
        }
        if entering.fermi.right.width() + leaving.fermi.left.width() > thickness {
            entering.fermi = Junction::abrupt(-entering.applied_delta);
            leaving.fermi = Junction::abrupt(-leaving.applied_delta);
        }
    }
    Ok(interfaces)
}

fn segments<T: Copy + RealField>(
    device: &Device<T>,
    bias: &Bias<T>,
    interfaces: &[InterfaceSolution<T>],
) -> Vec<LayerSegment<T>> {
    let temperature = device.temperature();
    device
        .layers()
        .iter()
        .zip(device.layout())
        .enumerate()
        .map(|(index, (layer, region))| {
            let entering = index.checked_sub(1).and_then(|i| interfaces.get(i));
            let leaving = interfaces.get(index);
            LayerSegment {
                region,
                bulk: layer.bulk_levels(temperature, bias.voltages()[index]),
                entering_bands: entering.map_or_else(DepletionRegion::flat, |s| s.bands.right),
                entering_fermi: entering.map_or_else(DepletionRegion::flat, |s| s.fermi.right),
                leaving_bands: leaving.map_or_else(DepletionRegion::flat, |s| s.bands.left),
                leaving_fermi: leaving.map_or_else(DepletionRegion::flat, |s| s.fermi.left),
            }
        })
        .collect()
}
