//! VTK PolyData XML writer (`.vtp`, ascii data arrays).
//!
//! The document holds a single piece: a `Points` block with one
//! three-component `Float32` array, and a `Polys` block with the flat
//! `connectivity` array plus the `offsets` array marking where each polygon
//! ends inside it. Indices are 0-based.

use std::io::Write;
use std::path::Path;

use config::constants::COORDINATE_PRECISION;
use sphere_mesh::Mesh;

use crate::error::ExportResult;
use crate::write_file;

/// Indentation of values inside a `DataArray` element.
const VALUE_INDENT: &str = "          ";

/// Save a mesh to a VTP file.
///
/// # Errors
///
/// Returns [`crate::ExportError::Io`] carrying `path` if the file cannot be
/// written.
///
/// # Example
///
/// ```no_run
/// use mesh_export::write_vtp;
/// use sphere_mesh::generate_sphere_mesh;
///
/// let mesh = generate_sphere_mesh(10_000).unwrap();
/// write_vtp(&mesh, "sphere.vtp").unwrap();
/// ```
pub fn write_vtp<P: AsRef<Path>>(mesh: &Mesh, path: P) -> ExportResult<()> {
    write_file(path.as_ref(), |writer| encode_vtp(mesh, writer))
}

/// Encode a mesh as a VTK PolyData XML document into any writer.
pub fn encode_vtp<W: Write>(mesh: &Mesh, mut writer: W) -> ExportResult<()> {
    writeln!(writer, r#"<?xml version="1.0"?>"#)?;
    writeln!(
        writer,
        r#"<VTKFile type="PolyData" version="1.0" byte_order="LittleEndian">"#
    )?;
    writeln!(writer, "  <PolyData>")?;
    writeln!(
        writer,
        r#"    <Piece NumberOfPoints="{}" NumberOfPolys="{}">"#,
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;

    writeln!(writer, "      <Points>")?;
    writeln!(
        writer,
        r#"        <DataArray type="Float32" NumberOfComponents="3" format="ascii">"#
    )?;
    for v in mesh.vertices() {
        writeln!(
            writer,
            "{VALUE_INDENT}{:.prec$} {:.prec$} {:.prec$}",
            v.x,
            v.y,
            v.z,
            prec = COORDINATE_PRECISION
        )?;
    }
    writeln!(writer, "        </DataArray>")?;
    writeln!(writer, "      </Points>")?;

    writeln!(writer, "      <Polys>")?;
    writeln!(
        writer,
        r#"        <DataArray type="Int32" Name="connectivity" format="ascii">"#
    )?;
    for &[a, b, c] in mesh.triangles() {
        writeln!(writer, "{VALUE_INDENT}{a} {b} {c}")?;
    }
    writeln!(writer, "        </DataArray>")?;

    writeln!(
        writer,
        r#"        <DataArray type="Int32" Name="offsets" format="ascii">"#
    )?;
    let mut offset: u64 = 0;
    for tri in mesh.triangles() {
        offset += tri.len() as u64;
        writeln!(writer, "{VALUE_INDENT}{offset}")?;
    }
    writeln!(writer, "        </DataArray>")?;
    writeln!(writer, "      </Polys>")?;

    writeln!(writer, "    </Piece>")?;
    writeln!(writer, "  </PolyData>")?;
    writeln!(writer, "</VTKFile>")?;

    Ok(())
}
