//! Watertight STL solids of NACA 4-digit airfoils for CFD angle of attack sweeps.
//!
//! The pipeline runs cosine spaced chord stations through the NACA camber and thickness
//! polynomials, rotates the section to the angle of attack, merges the surfaces into one closed
//! outline, extrudes it along the span and writes the triangulated solid as ASCII STL.

use log::{debug, info, warn};
use std::path::Path;

pub mod airfoil;
pub mod case;
pub mod config;
pub mod errors;
pub mod mesh;
pub mod stl;
pub mod sweep;

use airfoil::generate::{AirfoilGenerator, Naca4Digit};
use airfoil::naca::NacaCode;
use airfoil::profile::Profile2;
pub use config::MeshConfig;
pub use errors::{MeshError, Result};
use mesh::Mesh3;

/// Counts describing a mesh that was written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshSummary {
    pub vertices: usize,
    pub facets: usize,
}

/// Build the closed section outline of `code` at `alpha_deg` degrees angle of attack
pub fn generate_profile(code: &NacaCode, alpha_deg: f64, config: &MeshConfig) -> Result<Profile2> {
    if !alpha_deg.is_finite() {
        return Err(MeshError::InvalidParameter(format!(
            "angle of attack must be finite, got {}",
            alpha_deg
        )));
    }
    config.validate()?;
    if alpha_deg.abs() > 30.0 {
        warn!(
            "angle of attack {} deg is far outside the usual sweep range",
            alpha_deg
        );
    }
    if config.points < 50 {
        warn!(
            "only {} chord stations, the end cap strip may fold on coarse outlines",
            config.points
        );
    }

    let airfoil = Naca4Digit::from_code(code, config.chord)
        .generate(config.points)
        .rotated(alpha_deg.to_radians());
    debug!(
        "NACA {}: {} stations, m={} p={} t={}",
        code,
        airfoil.stations.len(),
        code.m(),
        code.p(),
        code.t()
    );

    Profile2::from_airfoil(&airfoil)
}

/// Generate the extruded solid of `code` at `alpha_deg` degrees angle of attack
pub fn generate_mesh(code: &NacaCode, alpha_deg: f64, config: &MeshConfig) -> Result<Mesh3> {
    let profile = generate_profile(code, alpha_deg, config)?;
    debug!("outline has {} vertices", profile.len());

    let mesh = Mesh3::extrude(&profile, config.span);
    debug!(
        "extruded to {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.triangles.len()
    );
    Ok(mesh)
}

/// Generate the solid of `code` at `alpha_deg` and write it to `path`. Either the whole mesh is
/// written or the file is left untouched.
pub fn write_airfoil_stl(
    path: &Path,
    code: &NacaCode,
    alpha_deg: f64,
    config: &MeshConfig,
) -> Result<MeshSummary> {
    let mesh = generate_mesh(code, alpha_deg, config)?;
    let facets = mesh.facets()?;
    stl::write_stl_file(path, &config.solid_name, &facets)?;

    let summary = MeshSummary {
        vertices: mesh.vertices.len(),
        facets: facets.len(),
    };
    info!(
        "NACA {} at {} deg: {} vertices, {} facets written to {}",
        code,
        alpha_deg,
        summary.vertices,
        summary.facets,
        path.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn code(s: &str) -> NacaCode {
        s.parse().unwrap()
    }

    #[test]
    fn non_finite_alpha_is_rejected() {
        let r = generate_mesh(&code("0012"), f64::NAN, &MeshConfig::default());
        assert!(matches!(r, Err(MeshError::InvalidParameter(_))));
        let r = generate_mesh(&code("0012"), f64::INFINITY, &MeshConfig::default());
        assert!(matches!(r, Err(MeshError::InvalidParameter(_))));
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let config = MeshConfig::default().points(1);
        let r = generate_mesh(&code("0012"), 0.0, &config);
        assert!(matches!(r, Err(MeshError::InvalidParameter(_))));
    }

    #[test]
    fn naca_0012_default_mesh() {
        let mesh = generate_mesh(&code("0012"), 0.0, &MeshConfig::default()).unwrap();
        assert_eq!(mesh.vertices.len(), 3996);
        assert_eq!(mesh.triangles.len(), 2 * 1996 + 2 * 1998);
        let max_z = mesh.vertices.iter().map(|v| v.z.abs()).fold(0.0, f64::max);
        assert_abs_diff_eq!(max_z, 0.06, epsilon = 1e-4);
        let max_y = mesh.vertices.iter().map(|v| v.y.abs()).fold(0.0, f64::max);
        assert_eq!(max_y, 1.0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn naca_2412_at_five_degrees_is_rotated_clockwise() {
        let config = MeshConfig::default().points(400);
        let level = generate_profile(&code("2412"), 0.0, &config).unwrap();
        let pitched = generate_profile(&code("2412"), 5.0, &config).unwrap();

        let expected = level.rotated(5f64.to_radians());
        for (a, b) in expected.points().iter().zip(pitched.points()) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        }

        // the trailing edge drops below the chord line for positive alpha
        let te = pitched.upper().last().unwrap();
        assert_relative_eq!(te.y, -(5f64.to_radians().sin()), epsilon = 1e-9);
    }

    #[test]
    fn camber_lifts_the_upper_surface() {
        let config = MeshConfig::default().points(400);
        let profile = generate_profile(&code("2412"), 0.0, &config).unwrap();
        let mean = |pts: &[ncollide2d::na::Point2<f64>]| {
            pts.iter().map(|p| p.y).sum::<f64>() / pts.len() as f64
        };
        let upper = mean(profile.upper());
        let lower = mean(profile.lower());
        assert!(upper > lower);
        assert!(upper > -lower);
    }

    #[test]
    fn chord_scales_the_outline() {
        let config = MeshConfig::default().points(200).chord(2.5);
        let profile = generate_profile(&code("0012"), 0.0, &config).unwrap();
        assert_relative_eq!(profile.x_extent(), 2.5, epsilon = 1e-12);
    }
}
