//! Face-culled OBJ meshing for block scenes.
#![forbid(unsafe_code)]

pub mod constants;
pub mod face;
pub mod obj;
pub mod occlusion;

pub use face::{Face, FaceSet};
pub use obj::{ObjHeader, ObjStats, ObjWriter, write_scene};
pub use occlusion::{ExhaustiveOcclusion, IndexedOcclusion, OcclusionQuery, OcclusionStrategy};
