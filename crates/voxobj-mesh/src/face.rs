use voxobj_geom::Vec3;

/// The six axis-aligned sides of a block, in output axis order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Front = 0,
    Back = 1,
    Left = 2,
    Right = 3,
    Top = 4,
    Bottom = 5,
}

impl Face {
    /// Order in which faces are written for each block.
    pub const EMIT_ORDER: [Face; 6] = [
        Face::Left,
        Face::Front,
        Face::Top,
        Face::Back,
        Face::Bottom,
        Face::Right,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        match i {
            0 => Some(Face::Front),
            1 => Some(Face::Back),
            2 => Some(Face::Left),
            3 => Some(Face::Right),
            4 => Some(Face::Top),
            5 => Some(Face::Bottom),
            _ => None,
        }
    }

    /// Returns the integer grid delta `(dx,dy,dz)` of the neighbor across this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::Left => (0, 0, -1),
            Face::Right => (0, 0, 1),
            Face::Bottom => (0, -1, 0),
            Face::Top => (0, 1, 0),
            Face::Front => (-1, 0, 0),
            Face::Back => (1, 0, 0),
        }
    }

    #[inline]
    pub fn offset(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::from_ints(dx, dy, dz)
    }

    /// 1-based index into the `vn` table written in the OBJ header.
    #[inline]
    pub fn normal_index(self) -> u32 {
        match self {
            Face::Right => 1,
            Face::Left => 2,
            Face::Top => 3,
            Face::Bottom => 4,
            Face::Back => 5,
            Face::Front => 6,
        }
    }
}

/// A set of faces packed into six bits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FaceSet(u8);

impl FaceSet {
    pub const EMPTY: FaceSet = FaceSet(0);
    pub const ALL: FaceSet = FaceSet(0b11_1111);

    #[inline]
    pub fn insert(&mut self, face: Face) {
        self.0 |= 1 << face.index();
    }

    #[inline]
    pub fn contains(self, face: Face) -> bool {
        self.0 & (1 << face.index()) != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Faces not in this set.
    #[inline]
    pub fn complement(self) -> FaceSet {
        FaceSet(!self.0 & Self::ALL.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Face> {
        (0..6)
            .filter_map(Face::from_index)
            .filter(move |f| self.contains(*f))
    }
}

impl FromIterator<Face> for FaceSet {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        let mut set = FaceSet::EMPTY;
        for f in iter {
            set.insert(f);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for i in 0..6 {
            assert_eq!(Face::from_index(i).map(Face::index), Some(i));
        }
        assert_eq!(Face::from_index(6), None);
    }

    #[test]
    fn opposite_faces_cancel() {
        let pairs = [
            (Face::Left, Face::Right),
            (Face::Top, Face::Bottom),
            (Face::Front, Face::Back),
        ];
        for (a, b) in pairs {
            assert_eq!(a.offset() + b.offset(), Vec3::ZERO);
        }
    }

    #[test]
    fn face_set_ops() {
        let mut s = FaceSet::EMPTY;
        assert!(s.is_empty());
        s.insert(Face::Top);
        s.insert(Face::Top);
        s.insert(Face::Left);
        assert_eq!(s.len(), 2);
        assert!(s.contains(Face::Top) && s.contains(Face::Left));
        assert!(!s.contains(Face::Bottom));
        assert_eq!(s.complement().len(), 4);
        assert!(!s.complement().contains(Face::Top) && s.complement().contains(Face::Bottom));
        assert_eq!(FaceSet::EMPTY.complement(), FaceSet::ALL);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![Face::Left, Face::Top]);
        assert_eq!(Face::EMIT_ORDER.into_iter().collect::<FaceSet>(), FaceSet::ALL);
    }

    #[test]
    fn normal_indices_are_a_permutation() {
        let mut seen = [false; 6];
        for f in Face::EMIT_ORDER {
            seen[(f.normal_index() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
