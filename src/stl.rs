//! ASCII facet (STL) output.
//!
//! Numbers are written the way C's `%.6e` writes them, with a signed exponent of at least two
//! digits, so the files are byte-for-byte what other tools in a CFD toolchain produce and expect.

use crate::errors::MeshError;
use crate::mesh::Facet;
use ncollide2d::na::{Point3, Vector3};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Format a number in scientific notation with `precision` decimals and a C style exponent,
/// e.g. `1.000000e+00` or `-2.500000e-03`.
pub fn format_exp(value: f64, precision: usize) -> String {
    let s = format!("{:.*e}", precision, value);
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => format!(
                "{}e{}{:02}",
                mantissa,
                if e < 0 { '-' } else { '+' },
                e.abs()
            ),
            Err(_) => s,
        },
        None => s,
    }
}

fn write_triple<W: Write>(w: &mut W, prefix: &str, x: f64, y: f64, z: f64) -> io::Result<()> {
    writeln!(
        w,
        "{}{} {} {}",
        prefix,
        format_exp(x, 6),
        format_exp(y, 6),
        format_exp(z, 6)
    )
}

fn write_vector<W: Write>(w: &mut W, prefix: &str, v: &Vector3<f64>) -> io::Result<()> {
    write_triple(w, prefix, v.x, v.y, v.z)
}

fn write_point<W: Write>(w: &mut W, prefix: &str, p: &Point3<f64>) -> io::Result<()> {
    write_triple(w, prefix, p.x, p.y, p.z)
}

/// Write a complete ASCII solid named `name` containing one facet block per facet
pub fn write_stl<W: Write>(w: &mut W, name: &str, facets: &[Facet]) -> io::Result<()> {
    writeln!(w, "solid {}", name)?;
    for f in facets {
        write_vector(w, "  facet normal ", &f.normal)?;
        writeln!(w, "    outer loop")?;
        for v in f.vertices.iter() {
            write_point(w, "      vertex ", v)?;
        }
        writeln!(w, "    endloop")?;
        writeln!(w, "  endfacet")?;
    }
    writeln!(w, "endsolid {}", name)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the solid to `path`. The content goes to a temporary file beside the target first and is
/// renamed into place only once everything is flushed, so a failure never leaves a truncated mesh
/// at `path`.
pub fn write_stl_file(path: &Path, name: &str, facets: &[Facet]) -> Result<(), MeshError> {
    let tmp = temp_path(path);
    let result = write_synced(&tmp, name, facets).and_then(|_| fs::rename(&tmp, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(MeshError::io(path, e));
    }
    Ok(())
}

fn write_synced(path: &Path, name: &str, facets: &[Facet]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_stl(&mut writer, name, facets)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}
