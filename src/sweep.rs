use crate::airfoil::naca::NacaCode;
use crate::config::MeshConfig;
use crate::errors::MeshError;
use crate::write_airfoil_stl;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

const SWEEP_TOL: f64 = 1e-9;

/// Upper bound on the number of angles in one sweep
pub const MAX_SWEEP_ANGLES: usize = 100_000;

/// Round an angle to the nearest 1e-9 degree, removing the noise of repeated step additions
fn snap_angle(alpha: f64) -> f64 {
    let snapped = (alpha * 1e9).round() / 1e9;
    if snapped == 0.0 {
        0.0
    } else {
        snapped
    }
}

/// An inclusive sequence of angles of attack in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaSweep {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl AlphaSweep {
    /// Create a sweep from `start` to `stop` inclusive. The step must be non-zero and point from
    /// start towards stop.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<AlphaSweep, MeshError> {
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return Err(MeshError::InvalidParameter(format!(
                "sweep bounds must be finite, got {} {} {}",
                start, stop, step
            )));
        }
        if step == 0.0 {
            return Err(MeshError::InvalidParameter(
                "sweep step must not be zero".to_string(),
            ));
        }
        if (stop - start) * step < 0.0 {
            return Err(MeshError::InvalidParameter(format!(
                "step {} does not lead from {} to {}",
                step, start, stop
            )));
        }
        let count = ((stop - start) / step + SWEEP_TOL).floor() + 1.0;
        if !(count <= MAX_SWEEP_ANGLES as f64) {
            return Err(MeshError::InvalidParameter(format!(
                "sweep from {} to {} by {} has more than {} angles",
                start, stop, step, MAX_SWEEP_ANGLES
            )));
        }
        Ok(AlphaSweep { start, stop, step })
    }

    pub fn single(alpha: f64) -> Result<AlphaSweep, MeshError> {
        AlphaSweep::new(alpha, alpha, 1.0)
    }

    pub fn len(&self) -> usize {
        ((self.stop - self.start) / self.step + SWEEP_TOL).floor() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn angles(&self) -> Vec<f64> {
        (0..self.len())
            .map(|k| snap_angle(self.start + k as f64 * self.step))
            .collect()
    }
}

/// Directory name of one sweep point, e.g. `NACA0012_a4` or `NACA2412_a-2.5`
pub fn case_dir_name(code: &NacaCode, alpha: f64) -> String {
    format!("NACA{}_a{}", code, snap_angle(alpha))
}

/// Where the mesh of one sweep point goes, relative to the sweep root. The CFD case reads its
/// geometry from `constant/triSurface`.
pub fn mesh_path(root: &Path, code: &NacaCode, alpha: f64, config: &MeshConfig) -> PathBuf {
    root.join(case_dir_name(code, alpha))
        .join("constant")
        .join("triSurface")
        .join(format!("{}.stl", config.solid_name))
}

/// Write one mesh per angle of the sweep, each into its own case directory below `root`. Stops
/// at the first failure.
pub fn run_sweep(
    root: &Path,
    code: &NacaCode,
    sweep: &AlphaSweep,
    config: &MeshConfig,
) -> Result<Vec<PathBuf>, MeshError> {
    config.validate()?;
    let angles = sweep.angles();
    info!(
        "sweeping NACA {} over {} angles from {} to {} deg",
        code,
        angles.len(),
        sweep.start,
        sweep.stop
    );

    let mut written = Vec::with_capacity(angles.len());
    for alpha in angles {
        let path = mesh_path(root, code, alpha, config);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| MeshError::io(dir, e))?;
        }
        write_airfoil_stl(&path, code, alpha, config)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(0.0, 10.0, 1.0, 11)]
    #[test_case(0.0, 10.0, 3.0, 4)]
    #[test_case(10.0, 0.0, -2.5, 5)]
    #[test_case(4.0, 4.0, 1.0, 1)]
    #[test_case(0.0, 1.0, 0.1, 11)]
    fn sweep_lengths(start: f64, stop: f64, step: f64, n: usize) {
        let sweep = AlphaSweep::new(start, stop, step).unwrap();
        assert_eq!(sweep.len(), n);
        let angles = sweep.angles();
        assert_eq!(angles.len(), n);
        assert_eq!(angles[0], start);
    }

    #[test]
    fn fractional_steps_reach_the_end() {
        let angles = AlphaSweep::new(0.0, 1.0, 0.1).unwrap().angles();
        assert_eq!(*angles.last().unwrap(), 1.0);
        assert_relative_eq!(angles[3], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn oversized_sweeps_are_rejected() {
        assert!(matches!(
            AlphaSweep::new(0.0, 1e300, 1e-300),
            Err(MeshError::InvalidParameter(_))
        ));
        assert!(AlphaSweep::new(0.0, 1e6, 1.0).is_err());

        let largest = AlphaSweep::new(0.0, (MAX_SWEEP_ANGLES - 1) as f64, 1.0).unwrap();
        assert_eq!(largest.len(), MAX_SWEEP_ANGLES);
        assert!(!largest.is_empty());
    }

    #[test]
    fn tenth_degree_steps_give_clean_names() {
        let code: NacaCode = "0012".parse().unwrap();
        let names: Vec<String> = AlphaSweep::new(0.0, 1.0, 0.1)
            .unwrap()
            .angles()
            .into_iter()
            .map(|a| case_dir_name(&code, a))
            .collect();
        assert_eq!(names[3], "NACA0012_a0.3");
        assert_eq!(names[6], "NACA0012_a0.6");
        assert_eq!(names[7], "NACA0012_a0.7");
        assert_eq!(names[10], "NACA0012_a1");
        assert!(names.iter().all(|n| n.len() <= "NACA0012_a0.3".len()));
    }

    #[test_case(0.0, 10.0, 0.0 ; "zero step")]
    #[test_case(0.0, 10.0, -1.0 ; "wrong direction")]
    #[test_case(0.0, f64::NAN, 1.0 ; "nan stop")]
    fn invalid_sweeps(start: f64, stop: f64, step: f64) {
        assert!(matches!(
            AlphaSweep::new(start, stop, step),
            Err(MeshError::InvalidParameter(_))
        ));
    }

    #[test_case(4.0, "NACA0012_a4")]
    #[test_case(-2.5, "NACA0012_a-2.5")]
    #[test_case(0.0, "NACA0012_a0")]
    #[test_case(-0.0, "NACA0012_a0")]
    fn case_dir_names(alpha: f64, expected: &str) {
        let code: NacaCode = "0012".parse().unwrap();
        assert_eq!(case_dir_name(&code, alpha), expected);
    }

    #[test]
    fn mesh_path_layout() {
        let code: NacaCode = "2412".parse().unwrap();
        let path = mesh_path(Path::new("runs"), &code, 5.0, &MeshConfig::default());
        assert_eq!(
            path,
            Path::new("runs/NACA2412_a5/constant/triSurface/airfoil.stl")
        );
    }
}
