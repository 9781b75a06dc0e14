use crate::airfoil::profile::Profile2;
use crate::errors::MeshError;
use ncollide2d::na::{Point3, Vector3};

pub mod validate;

use validate::EdgeReport;

/// Relative collinearity threshold below which a triangle is treated as collapsed
const DEGENERATE_TOL: f64 = 1e-12;

/// Triangulate the end cap of an outline of `n` vertices built from `stations` chord stations.
///
/// The cap is a strip anchored at the leading edge: the first triangle is `[1, 2, n]`, then the
/// upper surface vertices walk forward while the matching lower surface vertices walk backward from
/// the end. This is not a general polygon triangulation, it relies on the outline being close to
/// monotonic in x, so heavily cambered or very coarse sections can fold over.
///
/// Indices are one-based, exactly `n - 2` triangles are returned.
pub fn cap_triangulation(stations: usize, n: usize) -> Vec<[usize; 3]> {
    let mut tri = Vec::with_capacity(n.saturating_sub(2));
    tri.push([1, 2, n]);
    for i in 2..stations {
        tri.push([i, i + 1, n - i + 2]);
    }
    for i in stations + 1..n {
        tri.push([i, i + 1, n - i + 2]);
    }
    tri
}

/// A single oriented triangle with its unit normal
#[derive(Debug, Clone)]
pub struct Facet {
    pub normal: Vector3<f64>,
    pub vertices: [Point3<f64>; 3],
}

/// A closed triangulated solid formed by extruding an airfoil outline along the span (y) axis.
#[derive(Debug, Clone)]
pub struct Mesh3 {
    pub vertices: Vec<Point3<f64>>,
    pub triangles: Vec<[usize; 3]>,
}

impl Mesh3 {
    /// Extrude the outline into two copies at `y = +span/2` (vertices `0..n`) and `y = -span/2`
    /// (vertices `n..2n`), close both ends with caps and join the copies with a side wall. All
    /// triangles wind so that their normals face out of the solid.
    pub fn extrude(profile: &Profile2, span: f64) -> Mesh3 {
        let n = profile.len();
        let half = span / 2.0;

        let mut vertices = Vec::with_capacity(2 * n);
        vertices.extend(profile.points().iter().map(|p| Point3::new(p.x, half, p.y)));
        vertices.extend(profile.points().iter().map(|p| Point3::new(p.x, -half, p.y)));

        let cap = cap_triangulation(profile.stations(), n);
        let mut tri = Vec::with_capacity(2 * (n - 2) + 2 * n);
        tri.extend(cap.iter().copied());

        // The far cap faces the other way, so the first two indices are swapped
        tri.extend(cap.iter().map(|t| [t[1] + n, t[0] + n, t[2] + n]));

        for i in 1..n {
            tri.push([i, n + i, i + 1]);
        }
        tri.push([n, 2 * n, 1]);

        for i in n + 1..2 * n {
            tri.push([i, i + 1, i - n + 1]);
        }
        tri.push([2 * n, n + 1, 1]);

        let triangles = tri
            .into_iter()
            .map(|t| [t[0] - 1, t[1] - 1, t[2] - 1])
            .collect();

        Mesh3 {
            vertices,
            triangles,
        }
    }

    /// Compute the oriented unit normal of every triangle. Fails on the first triangle whose
    /// edges are collinear or whose coordinates are not finite, instead of producing a NaN normal.
    pub fn facets(&self) -> Result<Vec<Facet>, MeshError> {
        self.triangles
            .iter()
            .enumerate()
            .map(|(k, t)| {
                let vertices = [
                    self.vertices[t[0]],
                    self.vertices[t[1]],
                    self.vertices[t[2]],
                ];
                let normal = facet_normal(&vertices).ok_or_else(|| {
                    MeshError::DegenerateGeometry(format!(
                        "triangle {} ({}, {}, {}) has no defined normal",
                        k, t[0], t[1], t[2]
                    ))
                })?;
                Ok(Facet { normal, vertices })
            })
            .collect()
    }

    pub fn centroid(&self) -> Point3<f64> {
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.coords);
        Point3::from(sum / self.vertices.len().max(1) as f64)
    }

    /// Enclosed volume by the divergence theorem. Positive when the triangles wind outward.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|t| {
                let a = self.vertices[t[0]].coords;
                let b = self.vertices[t[1]].coords;
                let c = self.vertices[t[2]].coords;
                a.dot(&b.cross(&c))
            })
            .sum::<f64>()
            / 6.0
    }

    pub fn edge_report(&self) -> EdgeReport {
        EdgeReport::from_triangles(&self.triangles)
    }

    /// Check that the mesh is a closed, consistently oriented surface with outward normals
    pub fn validate(&self) -> Result<(), MeshError> {
        let report = self.edge_report();
        if !report.is_closed() {
            return Err(MeshError::DegenerateGeometry(format!(
                "mesh is not closed, {} edges are not shared by exactly two triangles",
                report.open_edges().len()
            )));
        }
        if !report.is_consistently_oriented() {
            return Err(MeshError::DegenerateGeometry(
                "mesh triangles are not consistently oriented".to_string(),
            ));
        }
        let volume = self.signed_volume();
        if !(volume > 0.0) {
            return Err(MeshError::DegenerateGeometry(format!(
                "mesh encloses a non-positive volume ({:e})",
                volume
            )));
        }
        Ok(())
    }
}

/// Normalized `(B - A) x (C - A)`, or `None` for a collapsed triangle
fn facet_normal(v: &[Point3<f64>; 3]) -> Option<Vector3<f64>> {
    let ab = v[1] - v[0];
    let ac = v[2] - v[0];
    let n = ab.cross(&ac);
    let len = n.norm();
    let scale = ab.norm() * ac.norm();
    if !len.is_finite() || !scale.is_finite() || len <= DEGENERATE_TOL * scale {
        None
    } else {
        Some(n / len)
    }
}
