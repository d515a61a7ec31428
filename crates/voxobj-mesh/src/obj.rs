use std::io::{self, Write};

use voxobj_scene::Block;

use crate::constants::{CORNERS, NORMALS, TEX_COORDS, VERTICES_PER_BLOCK, face_triangles};
use crate::face::Face;
use crate::occlusion::{OcclusionQuery, OcclusionStrategy};

/// Lines written once before any geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjHeader {
    pub comment: String,
    pub mtllib: String,
}

impl Default for ObjHeader {
    fn default() -> Self {
        Self {
            comment: "Minecraft Scene".to_string(),
            mtllib: "Resources/minecraftMats.mtl".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjStats {
    pub blocks: usize,
    pub vertices: usize,
    pub faces: usize,
    pub triangles: usize,
    pub material_switches: usize,
}

/// Streams an OBJ document. Vertices go out as blocks arrive; faces are
/// written in a second pass once the whole block list is known.
pub struct ObjWriter<W: Write> {
    out: W,
    stats: ObjStats,
}

impl<W: Write> ObjWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            stats: ObjStats::default(),
        }
    }

    pub fn stats(&self) -> ObjStats {
        self.stats
    }

    pub fn write_header(&mut self, header: &ObjHeader) -> io::Result<()> {
        write!(self.out, "#{}\n\n", header.comment)?;
        write!(self.out, "mtllib {}\n\n", header.mtllib)?;
        for [x, y, z] in NORMALS {
            writeln!(self.out, "vn {x:.4} {y:.4} {z:.4}")?;
        }
        for [u, v] in TEX_COORDS {
            writeln!(self.out, "vt {u:.4} {v:.4}")?;
        }
        writeln!(self.out)
    }

    /// Writes the eight corners of `block`. Call once per block, in list order.
    pub fn write_block_vertices(&mut self, block: &Block) -> io::Result<()> {
        let p = block.position;
        for [dx, dy, dz] in CORNERS {
            let (x, y, z) = (p.x + dx as f32, p.y + dy as f32, p.z + dz as f32);
            writeln!(self.out, "v {x:.4} {y:.4} {z:.4}")?;
        }
        self.stats.blocks += 1;
        self.stats.vertices += VERTICES_PER_BLOCK;
        Ok(())
    }

    /// Writes every visible face. `blocks` must be the same list, in the same
    /// order, whose vertices were written.
    pub fn write_faces(&mut self, blocks: &[Block], occlusion: &dyn OcclusionQuery) -> io::Result<()> {
        let mut previous_material: Option<&str> = None;
        for (i, block) in blocks.iter().enumerate() {
            let material = block.material_name();
            if previous_material != Some(material) {
                write!(self.out, "\nusemtl {material}\n")?;
                self.stats.material_switches += 1;
                previous_material = Some(material);
            }
            let visible = occlusion.occluded_faces(i).complement();
            let base = i * VERTICES_PER_BLOCK;
            for face in Face::EMIT_ORDER.into_iter().filter(|f| visible.contains(*f)) {
                self.write_face(base, face)?;
            }
        }
        log::debug!(
            "{} face(s) over {} block(s), {} material switch(es)",
            self.stats.faces,
            blocks.len(),
            self.stats.material_switches
        );
        Ok(())
    }

    fn write_face(&mut self, base: usize, face: Face) -> io::Result<()> {
        let n = face.normal_index();
        for tri in face_triangles(face) {
            let [(v0, t0), (v1, t1), (v2, t2)] = tri;
            writeln!(
                self.out,
                "f {}/{t0}/{n} {}/{t1}/{n} {}/{t2}/{n}",
                base + v0 as usize,
                base + v1 as usize,
                base + v2 as usize,
            )?;
            self.stats.triangles += 1;
        }
        self.stats.faces += 1;
        Ok(())
    }

    /// Flushes and hands back the sink.
    pub fn finish(mut self) -> io::Result<(W, ObjStats)> {
        self.out.flush()?;
        Ok((self.out, self.stats))
    }
}

/// Writes a complete document for blocks that are already in hand.
pub fn write_scene<W: Write>(
    out: W,
    header: &ObjHeader,
    blocks: &[Block],
    strategy: OcclusionStrategy,
) -> io::Result<(W, ObjStats)> {
    let mut writer = ObjWriter::new(out);
    writer.write_header(header)?;
    for b in blocks {
        writer.write_block_vertices(b)?;
    }
    let occlusion = strategy.build(blocks);
    writer.write_faces(blocks, occlusion.as_ref())?;
    writer.finish()
}
