use crate::mesh::Mesh1d;
use crate::primitives::LineSegment1d;
use crate::Assignment;
use nalgebra::{Point1, RealField};

/// Meshes a single region with `cells` equal elements, every vertex assigned to `region`
pub fn create_line_segment_mesh_1d<T>(
    segment: &LineSegment1d<T>,
    cells: usize,
    region: usize,
) -> Mesh1d<T>
where
    T: Copy + RealField,
{
    if cells == 0 {
        return Mesh1d::from_vertices(Vec::new());
    }
    let start = segment.start();
    let width = segment.end() - start;
    let cells_as_t = T::from_usize(cells).expect("Must be able to fit usize in T");

    let mut vertices = Vec::with_capacity(cells + 1);
    for i in 0..cells {
        let i_as_t = T::from_usize(i).expect("Must be able to fit usize in T");
        vertices.push((
            Point1::new(start + width * i_as_t / cells_as_t),
            Assignment::Core(region),
        ));
    }
    // The last vertex is pinned to the segment end so neighbouring regions share it exactly
    vertices.push((Point1::new(segment.end()), Assignment::Core(region)));

    Mesh1d::from_vertices(vertices)
}

/// Meshes a stack of contiguous regions
///
/// Each region is meshed on its own, then the vertex shared by two neighbours is kept once
/// and re-assigned as a `Boundary` between them.
pub fn create_line_segment_mesh_1d_from_regions<T>(
    regions: &[LineSegment1d<T>],
    cells_per_region: &[usize],
) -> Mesh1d<T>
where
    T: Copy + RealField,
{
    assert_eq!(regions.len(), cells_per_region.len());

    let meshes = regions
        .iter()
        .zip(cells_per_region.iter())
        .enumerate()
        .map(|(region, (segment, &cells))| create_line_segment_mesh_1d(segment, cells, region))
        .collect();

    Mesh1d::dedup(meshes)
}

/// Shares `total_cells` between the regions in proportion to their width
///
/// Every region receives at least one cell, so thin layers are never skipped.
pub fn distribute_cells<T>(regions: &[LineSegment1d<T>], total_cells: usize) -> Vec<usize>
where
    T: Copy + RealField,
{
    let total_width = regions
        .iter()
        .fold(T::zero(), |acc, segment| acc + segment.diameter());
    if total_width <= T::zero() {
        return vec![1; regions.len()];
    }
    let total_cells_as_t = T::from_usize(total_cells).expect("Must be able to fit usize in T");
    regions
        .iter()
        .map(|segment| {
            let share = (segment.diameter() / total_width * total_cells_as_t).round();
            share.to_subset().map(|cells: f64| cells as usize).unwrap_or(0).max(1)
        })
        .collect()
}

impl<T> Mesh1d<T>
where
    T: Copy + RealField,
{
    fn dedup(meshes: Vec<Mesh1d<T>>) -> Mesh1d<T> {
        let mut vertices: Vec<(Point1<T>, Assignment)> = Vec::new();
        for mesh in meshes {
            let mut incoming = mesh.vertices_owned().into_iter();
            if let (Some((_, Assignment::Core(left))), Some((_, Assignment::Core(right)))) =
                (vertices.last().copied(), incoming.clone().next())
            {
                // Drop the repeated first vertex of the incoming region and mark the shared one
                incoming.next();
                if let Some(last) = vertices.last_mut() {
                    last.1 = Assignment::Boundary([left, right]);
                }
            }
            vertices.extend(incoming);
        }
        Mesh1d::from_vertices(vertices)
    }
}

#[cfg(test)]
mod test {
    use super::{create_line_segment_mesh_1d_from_regions, distribute_cells};
    use crate::{Assignment, LineSegment1d};
    use approx::assert_relative_eq;

    fn stack(widths: &[f64]) -> Vec<LineSegment1d<f64>> {
        let mut left = 0f64;
        widths
            .iter()
            .map(|width| {
                let segment = LineSegment1d::from_bounds(left, left + width);
                left += width;
                segment
            })
            .collect()
    }

    #[test]
    fn mesh_from_regions_eliminates_repeated_vertices() {
        let regions = stack(&[2., 5., 10., 20.]);
        let mesh = create_line_segment_mesh_1d_from_regions(&regions, &[10, 10, 10, 10]);

        assert_eq!(mesh.num_nodes(), 41);
        let delta: Vec<f64> = mesh
            .vertices()
            .windows(2)
            .map(|vertices| (vertices[0].0.x - vertices[1].0.x).abs())
            .collect();
        assert!(delta.iter().all(|&x| x > 0.001));
    }

    #[test]
    fn region_edges_are_boundary_vertices() {
        let regions = stack(&[1., 3., 2.]);
        let mesh = create_line_segment_mesh_1d_from_regions(&regions, &[4, 4, 4]);

        let boundaries = mesh.boundary_indices();
        assert_eq!(boundaries, vec![4, 8]);
        assert_eq!(mesh.vertices()[4].1, Assignment::Boundary([0, 1]));
        assert_eq!(mesh.vertices()[8].1, Assignment::Boundary([1, 2]));
        assert_relative_eq!(mesh.vertices()[4].0.x, 1.);
        assert_relative_eq!(mesh.vertices()[8].0.x, 4.);
        assert_eq!(mesh.vertices()[0].1, Assignment::Core(0));
        assert_eq!(mesh.vertices()[12].1, Assignment::Core(2));
    }

    #[test]
    fn cells_are_shared_in_proportion_to_width() {
        let regions = stack(&[10., 30., 0.01]);
        let cells = distribute_cells(&regions, 100);
        assert_eq!(cells, vec![25, 75, 1]);
    }
}
