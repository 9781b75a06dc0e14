use ncollide2d::na::Point2;

pub mod generate;
pub mod naca;
pub mod profile;

/// One cosine spaced station along the chord. Points are in the airfoil section plane, where the
/// `x` component runs along the chord and the `y` component is the thickness direction (the `z`
/// axis once the section is lifted into 3D).
#[derive(Debug, Clone)]
pub struct ChordStation {
    pub x: f64,
    pub half_thickness: f64,
    pub theta: f64,
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl ChordStation {
    /// Build a station by offsetting the camber point perpendicular to the camber line by the
    /// local half thickness on each side.
    pub fn new(x: f64, camber_z: f64, half_thickness: f64, theta: f64) -> ChordStation {
        let (sin_t, cos_t) = theta.sin_cos();
        ChordStation {
            x,
            half_thickness,
            theta,
            camber: Point2::new(x, camber_z),
            upper: Point2::new(x - half_thickness * sin_t, camber_z + half_thickness * cos_t),
            lower: Point2::new(x + half_thickness * sin_t, camber_z - half_thickness * cos_t),
        }
    }

    fn rotated(&self, alpha: f64) -> ChordStation {
        ChordStation {
            camber: profile::rotate(&self.camber, alpha),
            upper: profile::rotate(&self.upper, alpha),
            lower: profile::rotate(&self.lower, alpha),
            ..self.clone()
        }
    }
}

/// Upper and lower surface curves of an airfoil, both ordered from the leading edge to the
/// trailing edge.
#[derive(Debug, Clone)]
pub struct Airfoil {
    pub stations: Vec<ChordStation>,
}

impl Airfoil {
    pub fn from_stations(stations: Vec<ChordStation>) -> Airfoil {
        Airfoil { stations }
    }

    pub fn upper(&self) -> Vec<Point2<f64>> {
        self.stations.iter().map(|s| s.upper).collect()
    }

    pub fn lower(&self) -> Vec<Point2<f64>> {
        self.stations.iter().map(|s| s.lower).collect()
    }

    /// Rotate every surface point about the origin by the angle of attack (radians). A positive
    /// angle turns the section clockwise, pitching the nose up relative to a flow along +x.
    pub fn rotated(&self, alpha: f64) -> Airfoil {
        Airfoil {
            stations: self.stations.iter().map(|s| s.rotated(alpha)).collect(),
        }
    }
}
