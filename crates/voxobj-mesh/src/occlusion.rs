use hashbrown::HashSet;
use serde::Deserialize;
use voxobj_geom::{UNIT_EPSILON, Vec3};
use voxobj_scene::Block;

use crate::face::{Face, FaceSet};

/// Order in which neighbor offsets are tested; a neighbor matches at most one.
const TEST_ORDER: [Face; 6] = [
    Face::Left,
    Face::Right,
    Face::Bottom,
    Face::Top,
    Face::Front,
    Face::Back,
];

/// Answers which faces of a block touch an opaque neighbor.
pub trait OcclusionQuery {
    /// Faces of block `index` that are hidden. Always empty for transparent blocks.
    fn occluded_faces(&self, index: usize) -> FaceSet;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcclusionStrategy {
    /// Every block against every other block.
    Exhaustive,
    /// Hash lookups on block positions.
    #[default]
    Indexed,
}

impl OcclusionStrategy {
    pub fn build<'a>(self, blocks: &'a [Block]) -> Box<dyn OcclusionQuery + 'a> {
        match self {
            OcclusionStrategy::Exhaustive => Box::new(ExhaustiveOcclusion::new(blocks)),
            OcclusionStrategy::Indexed => Box::new(IndexedOcclusion::new(blocks)),
        }
    }
}

/// Quadratic scan comparing float positions with a small tolerance.
pub struct ExhaustiveOcclusion<'a> {
    blocks: &'a [Block],
}

impl<'a> ExhaustiveOcclusion<'a> {
    pub fn new(blocks: &'a [Block]) -> Self {
        Self { blocks }
    }
}

impl OcclusionQuery for ExhaustiveOcclusion<'_> {
    fn occluded_faces(&self, index: usize) -> FaceSet {
        let mut out = FaceSet::EMPTY;
        let Some(candidate) = self.blocks.get(index) else {
            return out;
        };
        if !candidate.is_opaque {
            return out;
        }
        for other in self.blocks.iter().filter(|b| b.is_opaque) {
            let rel = other.position - candidate.position;
            if let Some(face) = TEST_ORDER
                .into_iter()
                .find(|f| rel.approx_eq(f.offset(), UNIT_EPSILON))
            {
                out.insert(face);
            }
        }
        out
    }
}

/// Set of opaque block positions; each face is one hash probe.
///
/// Keys are the `f32` positions, not the integer cells, so cells that
/// collapse onto the same float (beyond 2^24) behave exactly as they do in
/// [`ExhaustiveOcclusion`].
pub struct IndexedOcclusion<'a> {
    blocks: &'a [Block],
    opaque_positions: HashSet<[u32; 3]>,
}

impl<'a> IndexedOcclusion<'a> {
    pub fn new(blocks: &'a [Block]) -> Self {
        let opaque_positions = blocks
            .iter()
            .filter(|b| b.is_opaque)
            .map(|b| position_key(b.position))
            .collect();
        Self {
            blocks,
            opaque_positions,
        }
    }
}

impl OcclusionQuery for IndexedOcclusion<'_> {
    fn occluded_faces(&self, index: usize) -> FaceSet {
        let mut out = FaceSet::EMPTY;
        let Some(candidate) = self.blocks.get(index) else {
            return out;
        };
        if !candidate.is_opaque {
            return out;
        }
        let p = candidate.position;
        for face in TEST_ORDER {
            let (dx, dy, dz) = face.delta();
            let neighbor = match (step(p.x, dx), step(p.y, dy), step(p.z, dz)) {
                (Some(x), Some(y), Some(z)) => Vec3::new(x, y, z),
                _ => continue,
            };
            if self.opaque_positions.contains(&position_key(neighbor)) {
                out.insert(face);
            }
        }
        out
    }
}

/// `v + d` when the sum is exactly representable as `f32`. A float
/// difference of two integral positions is a unit only when the exact
/// difference is, so a rounded sum can never name a real neighbor.
fn step(v: f32, d: i32) -> Option<f32> {
    let exact = f64::from(v) + f64::from(d);
    let rounded = exact as f32;
    (f64::from(rounded) == exact).then_some(rounded)
}

fn position_key(p: Vec3) -> [u32; 3] {
    // `+ 0.0` folds -0.0 into 0.0
    [(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits(), (p.z + 0.0).to_bits()]
}
