//! Binary STL triangle sink: an 80-byte zero header, a
//! little-endian `u32` triangle count, then per triangle four
//! little-endian float triples (normal, v0, v1, v2) and a zero 16-bit
//! attribute word — byte-exact with the reference source's `write_to_stl`.

use std::io::{Read, Write};

use triangulate_geometry::{Triangulation, Vec3};

use crate::error::{Error, Result};

const HEADER_LEN: usize = 80;

fn write_vec3<W: Write>(writer: &mut W, v: Vec3) -> Result<()> {
    writer.write_all(&v.x.to_le_bytes())?;
    writer.write_all(&v.y.to_le_bytes())?;
    writer.write_all(&v.z.to_le_bytes())?;
    Ok(())
}

/// Writes `triangulation` as binary STL.
pub fn write_stl<W: Write>(writer: &mut W, triangulation: &Triangulation) -> Result<()> {
    writer.write_all(&[0u8; HEADER_LEN])?;

    let count: u32 = triangulation.len().try_into().map_err(|_| {
        Error::StlWrite(format!(
            "triangle count {} exceeds u32 range",
            triangulation.len()
        ))
    })?;
    writer.write_all(&count.to_le_bytes())?;

    for triangle in triangulation.triangles() {
        write_vec3(writer, triangle.face_data.normal)?;
        write_vec3(writer, triangle.v0)?;
        write_vec3(writer, triangle.v1)?;
        write_vec3(writer, triangle.v2)?;
        writer.write_all(&[0u8; 2])?;
    }

    Ok(())
}

/// One record read back from a binary STL file: normal plus the three
/// corner positions. Binary STL carries no per-triangle color, so this is
/// deliberately lighter than [`triangulate_geometry::TriangleRaw`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StlTriangle {
    pub normal: Vec3,
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
}

fn read_vec3<R: Read>(reader: &mut R) -> Result<Vec3> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    let x = f32::from_le_bytes(buf);
    reader.read_exact(&mut buf)?;
    let y = f32::from_le_bytes(buf);
    reader.read_exact(&mut buf)?;
    let z = f32::from_le_bytes(buf);
    Ok(Vec3::new(x, y, z))
}

/// Reads a binary STL file back into its triangle records.
pub fn read_stl<R: Read>(mut reader: R) -> Result<Vec<StlTriangle>> {
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;

    let mut count_buf = [0u8; 4];
    reader.read_exact(&mut count_buf)?;
    let count = u32::from_le_bytes(count_buf);

    let mut triangles = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let normal = read_vec3(&mut reader)?;
        let v0 = read_vec3(&mut reader)?;
        let v1 = read_vec3(&mut reader)?;
        let v2 = read_vec3(&mut reader)?;
        let mut attribute = [0u8; 2];
        reader.read_exact(&mut attribute)?;
        triangles.push(StlTriangle { normal, v0, v1, v2 });
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use triangulate_geometry::{Color, FaceData, TriangleRaw};

    #[test]
    fn round_trips_triangle_positions_and_normal() {
        let mut tri = Triangulation::new();
        tri.push(TriangleRaw::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            FaceData::new(Color::WHITE, Vec3::new(0.0, 0.0, 1.0)),
        ))
        .unwrap();

        let mut bytes = Vec::new();
        write_stl(&mut bytes, &tri).unwrap();

        assert_eq!(bytes.len(), HEADER_LEN + 4 + 50);

        let read_back = read_stl(bytes.as_slice()).unwrap();
        assert_eq!(read_back.len(), 1);
        assert_eq!(read_back[0].normal, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(read_back[0].v0, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(read_back[0].v1, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(read_back[0].v2, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn header_is_eighty_zero_bytes() {
        let tri = Triangulation::new();
        let mut bytes = Vec::new();
        write_stl(&mut bytes, &tri).unwrap();
        assert!(bytes[..HEADER_LEN].iter().all(|&b| b == 0));
        assert_eq!(u32::from_le_bytes(bytes[HEADER_LEN..HEADER_LEN + 4].try_into().unwrap()), 0);
    }
}
