use voxobj_geom::Vec3;

/// One unit cube of the scene, in output axis order.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// Material name: the layer name with its first character capitalized.
    pub layer_name: String,
    pub is_opaque: bool,
    /// Integer origin of the cube.
    pub cell: [i32; 3],
    /// `cell` lifted to float space; adjacency tests compare these.
    pub position: Vec3,
}

impl Block {
    /// Builds a block from an already-reordered cell and a material name.
    pub fn new(layer_name: impl Into<String>, is_opaque: bool, cell: [i32; 3]) -> Self {
        let [x, y, z] = cell;
        Self {
            layer_name: layer_name.into(),
            is_opaque,
            cell,
            position: Vec3::from_ints(x, y, z),
        }
    }

    /// Builds a block from a raw layer name and an input `[a, b, c]` triple.
    /// Input axes map to output axes as `x = b, y = c, z = a`.
    pub fn from_input(raw_layer: &str, is_opaque: bool, input: [i32; 3]) -> Self {
        let [a, b, c] = input;
        Self::new(capitalize_first(raw_layer), is_opaque, [b, c, a])
    }

    #[inline]
    pub fn material_name(&self) -> &str {
        &self.layer_name
    }
}

/// A layer group as accepted by the parser. `positions` holds only the
/// entries that passed validation, in input axis order.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub name: String,
    pub opaque: bool,
    pub positions: Vec<[i32; 3]>,
}

/// Upper-cases the first character of `name`, leaving the rest untouched.
/// Non-ASCII first characters use Unicode case mapping, so a single
/// character may expand (e.g. `ß` becomes `SS`).
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
