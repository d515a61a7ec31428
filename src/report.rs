use std::collections::BTreeMap;
use std::io::{self, Write};

use clap::ValueEnum;
use voxobj_scene::Block;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// One line per block
    Blocks,
    /// Block count per layer
    Layers,
}

pub fn write_report(out: &mut impl Write, kind: ReportKind, blocks: &[Block]) -> io::Result<()> {
    writeln!(out, "\nReport:")?;
    match kind {
        ReportKind::Blocks => {
            for (id, b) in blocks.iter().enumerate() {
                let p = b.position;
                writeln!(
                    out,
                    "id: {id}\tlayer: {}\topaque: {}\tposition: {:.4}, {:.4}, {:.4}",
                    b.layer_name, b.is_opaque, p.x, p.y, p.z
                )?;
            }
        }
        ReportKind::Layers => {
            for (id, (name, count)) in layer_counts(blocks).into_iter().enumerate() {
                writeln!(out, "id: {id}\tlayer name: {name}\tnr of blocks: {count}")?;
            }
        }
    }
    writeln!(out)
}

/// Blocks per material name, sorted by name.
pub fn layer_counts(blocks: &[Block]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for b in blocks {
        *counts.entry(b.layer_name.as_str()).or_insert(0) += 1;
    }
    counts
}
