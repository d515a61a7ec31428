//! Fixed tables of the OBJ layout. Changing any entry changes the output bytes.

use crate::face::Face;

pub const VERTICES_PER_BLOCK: usize = 8;

/// `vn` entries in header order: +Z, -Z, +Y, -Y, +X, -X.
pub const NORMALS: [[f32; 3]; 6] = [
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
];

/// `vt` entries in header order.
pub const TEX_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

/// Unit-cube corner offsets; position `i` is local vertex `i + 1`.
pub const CORNERS: [[i32; 3]; VERTICES_PER_BLOCK] = [
    [0, 0, 0],
    [0, 0, 1],
    [0, 1, 0],
    [0, 1, 1],
    [1, 0, 0],
    [1, 0, 1],
    [1, 1, 0],
    [1, 1, 1],
];

/// One face corner: 1-based local vertex and 1-based `vt` index.
pub type Corner = (u32, u32);

/// Two triangles per face. Winding and per-corner uv are part of the format.
pub const fn face_triangles(face: Face) -> [[Corner; 3]; 2] {
    match face {
        Face::Left => [[(1, 3), (7, 2), (5, 4)], [(1, 3), (3, 1), (7, 2)]],
        Face::Front => [[(1, 4), (4, 1), (3, 2)], [(1, 4), (2, 3), (4, 1)]],
        Face::Top => [[(3, 3), (8, 2), (7, 4)], [(3, 3), (4, 1), (8, 2)]],
        Face::Back => [[(5, 3), (7, 1), (8, 2)], [(5, 3), (8, 2), (6, 4)]],
        Face::Bottom => [[(1, 1), (5, 2), (6, 4)], [(1, 1), (6, 4), (2, 3)]],
        Face::Right => [[(2, 4), (6, 3), (8, 1)], [(2, 4), (8, 1), (4, 2)]],
    }
}
