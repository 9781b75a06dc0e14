use crate::airfoil::Airfoil;
use crate::errors::MeshError;
use ncollide2d::na::Point2;

/// Rotate a section point about the origin by `alpha` radians, clockwise for positive angles:
/// `x' = x cos(a) + z sin(a)`, `z' = -x sin(a) + z cos(a)`.
pub fn rotate(p: &Point2<f64>, alpha: f64) -> Point2<f64> {
    let (s, c) = alpha.sin_cos();
    Point2::new(p.x * c + p.y * s, -p.x * s + p.y * c)
}

/// The closed outline of an airfoil section. Vertices run along the upper surface from the
/// leading edge to the trailing edge and then back along the lower surface, stopping one station
/// short of the leading edge. The loop closes implicitly from the last vertex back to the first.
///
/// The leading and trailing edge points are shared by both surfaces and appear only once, so an
/// outline built from `Ni` stations has exactly `2 * Ni - 2` vertices.
#[derive(Debug, Clone)]
pub struct Profile2 {
    points: Vec<Point2<f64>>,
    stations: usize,
}

impl Profile2 {
    pub fn from_airfoil(airfoil: &Airfoil) -> Result<Profile2, MeshError> {
        let stations = airfoil.stations.len();
        if stations < 3 {
            return Err(MeshError::InvalidParameter(format!(
                "an outline needs at least 3 chord stations, got {}",
                stations
            )));
        }

        let mut points = airfoil.upper();
        let lower = airfoil.lower();
        points.extend(lower[1..stations - 1].iter().rev());

        if points.len() != 2 * stations - 2 {
            return Err(MeshError::DegenerateGeometry(format!(
                "merged outline has {} vertices, expected {}",
                points.len(),
                2 * stations - 2
            )));
        }

        Ok(Profile2 { points, stations })
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of chord stations the outline was built from (Ni)
    pub fn stations(&self) -> usize {
        self.stations
    }

    /// The upper surface, leading edge to trailing edge
    pub fn upper(&self) -> &[Point2<f64>] {
        &self.points[..self.stations]
    }

    /// The lower surface interior points, trailing edge side first
    pub fn lower(&self) -> &[Point2<f64>] {
        &self.points[self.stations..]
    }

    pub fn rotated(&self, alpha: f64) -> Profile2 {
        Profile2 {
            points: self.points.iter().map(|p| rotate(p, alpha)).collect(),
            stations: self.stations,
        }
    }

    /// Difference between the largest and smallest x coordinate of the outline
    pub fn x_extent(&self) -> f64 {
        let (lo, hi) = self
            .points
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
        hi - lo
    }
}
