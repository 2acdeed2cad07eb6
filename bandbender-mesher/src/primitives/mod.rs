use nalgebra::{Point1, RealField};

pub trait Distance<T: RealField, Point> {
    fn distance(&self, point: &Point) -> T;
}

/// A closed-open interval `[start, end)` on the device axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment1d<T>
where
    T: RealField,
{
    vertices: [Point1<T>; 2],
}

impl<T> LineSegment1d<T>
where
    T: Copy + RealField,
{
    pub fn from_vertices(vertices: &[Point1<T>; 2]) -> Self {
        Self {
            vertices: vertices.to_owned(),
        }
    }

    pub fn from_bounds(start: T, end: T) -> Self {
        Self::from_vertices(&[Point1::new(start), Point1::new(end)])
    }

    pub fn start(&self) -> T {
        self.vertices[0].x
    }

    pub fn end(&self) -> T {
        self.vertices[1].x
    }

    pub fn midpoint(&self) -> Point1<T> {
        Point1::new((self.vertices[0].x + self.vertices[1].x) / (T::one() + T::one()))
    }

    pub fn diameter(&self) -> T {
        (self.vertices[0].x - self.vertices[1].x).abs()
    }

    pub fn contains(&self, point: &Point1<T>) -> bool {
        point.x >= self.start() && point.x < self.end()
    }
}

impl<T> Distance<T, Point1<T>> for LineSegment1d<T>
where
    T: Copy + RealField,
{
    /// Zero inside the segment, otherwise the gap to the nearest end
    fn distance(&self, point: &Point1<T>) -> T {
        T::max(
            T::max(self.start() - point.x, point.x - self.end()),
            T::zero(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::{Distance, LineSegment1d};
    use approx::assert_relative_eq;
    use nalgebra::Point1;

    #[test]
    fn segment_is_closed_on_the_left_and_open_on_the_right() {
        let segment = LineSegment1d::from_bounds(1f64, 3f64);
        assert!(segment.contains(&Point1::new(1.)));
        assert!(segment.contains(&Point1::new(2.999)));
        assert!(!segment.contains(&Point1::new(3.)));
        assert_relative_eq!(segment.diameter(), 2.);
        assert_relative_eq!(segment.midpoint().x, 2.);
    }

    #[test]
    fn distance_vanishes_inside_and_grows_outside() {
        let segment = LineSegment1d::from_bounds(0f64, 10f64);
        assert_relative_eq!(segment.distance(&Point1::new(4.)), 0.);
        assert_relative_eq!(segment.distance(&Point1::new(-2.)), 2.);
        assert_relative_eq!(segment.distance(&Point1::new(13.)), 3.);
    }
}
