use crate::airfoil::naca::NacaCode;
use crate::airfoil::{Airfoil, ChordStation};
use std::f64::consts::PI;

/// Half-cosine spaced chord positions. The angle beta runs uniformly over [0, pi] and maps to
/// `x = c * (1 - cos(beta)) / 2`, which clusters stations at the leading and trailing edges where
/// the surface curvature is highest. The first and last positions are exactly 0 and `chord_len`.
pub fn cosine_spacing(n: usize, chord_len: f64) -> Vec<f64> {
    if n < 2 {
        return vec![0.0; n];
    }
    let last = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let beta = PI * i as f64 / last;
            chord_len * (0.5 * (1.0 - beta.cos()))
        })
        .collect()
}

/// An AirfoilGenerator is an entity which can generate the position and slope of the mean camber
/// line and the airfoil half thickness at positions along the chord. This provides the information
/// necessary to compute the airfoil surfaces.
///
/// All `x` arguments are distances from the leading edge, between 0.0 and `chord_len()`.
pub trait AirfoilGenerator {
    fn chord_len(&self) -> f64;

    /// Height of the camber line above the chord line
    fn camber_line(&self, x: f64) -> f64;

    /// Angle of the camber line relative to the chord, `atan(dz_c/dx)`
    fn camber_slope(&self, x: f64) -> f64;

    /// Half of the airfoil thickness, measured perpendicular to the camber line
    fn thickness(&self, x: f64) -> f64;

    fn station_at(&self, x: f64) -> ChordStation {
        ChordStation::new(x, self.camber_line(x), self.thickness(x), self.camber_slope(x))
    }

    /// Generate `n` cosine spaced stations from the leading edge to the trailing edge
    fn generate(&self, n: usize) -> Airfoil {
        let stations = cosine_spacing(n, self.chord_len())
            .into_iter()
            .map(|x| self.station_at(x))
            .collect();
        Airfoil::from_stations(stations)
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
///
/// The last thickness coefficient is -0.1036 instead of the published -0.1015. The published
/// polynomial leaves a finite trailing edge thickness of about 0.13% of the chord; the corrected
/// one closes the trailing edge to a sharp point, which the merged outline relies on to share a
/// single trailing edge vertex between both surfaces. Strictly speaking the result is therefore no
/// longer a proper NACA section.
pub struct Naca4Digit {
    t: f64,
    chord_len: f64,
    m: f64,
    p: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    ///
    /// * `chord_len` - the actual length of the airfoil chord
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4
    pub fn new(t_max: f64, chord_len: f64, max_camber: f64, max_camber_chord: f64) -> Naca4Digit {
        Naca4Digit {
            t: t_max,
            chord_len,
            m: max_camber,
            p: max_camber_chord,
        }
    }

    pub fn from_code(code: &NacaCode, chord_len: f64) -> Naca4Digit {
        Naca4Digit::new(code.t(), chord_len, code.m(), code.p())
    }

    // A zero camber position has no camber line (the front branch divides by p^2), so such codes
    // are built as symmetric sections.
    fn is_cambered(&self) -> bool {
        self.p > 0.0 && self.m != 0.0
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn chord_len(&self) -> f64 {
        self.chord_len
    }

    fn camber_line(&self, x: f64) -> f64 {
        if !self.is_cambered() {
            return 0.0;
        }

        let c = self.chord_len;
        let xc = x / c;
        if x < self.p * c {
            (self.m * x / self.p.powi(2)) * (2.0 * self.p - xc)
        } else {
            (self.m * (c - x) / (1.0 - self.p).powi(2)) * (1.0 + xc - 2.0 * self.p)
        }
    }

    fn camber_slope(&self, x: f64) -> f64 {
        if !self.is_cambered() {
            return 0.0;
        }

        let xc = x / self.chord_len;
        if x < self.p * self.chord_len {
            ((self.m / self.p.powi(2)) * (2.0 * self.p - 2.0 * xc)).atan()
        } else {
            ((self.m / (1.0 - self.p).powi(2)) * (2.0 * self.p - 2.0 * xc)).atan()
        }
    }

    fn thickness(&self, x: f64) -> f64 {
        let xc = x / self.chord_len;
        (self.t * self.chord_len / 0.2)
            * (0.2969 * xc.sqrt()
                + -0.1260 * xc
                + -0.3516 * xc.powi(2)
                + 0.2843 * xc.powi(3)
                + -0.1036 * xc.powi(4))
    }
}
