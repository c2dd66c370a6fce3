//! Flat attribute arrays handed over by a structure loader, and the packed
//! instance layouts built from them.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::error::VizError;

/// What a structure loader produces: flat xyz positions, optional flat rgb
/// colours, and bonds as atom index pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoleculeData {
    /// xyz triples, one per atom.
    pub positions: Vec<f32>,
    /// rgb triples, one per atom, when the loader colours by element.
    pub colors: Option<Vec<f32>>,
    /// Bonded atom index pairs.
    pub bonds: Vec<[u32; 2]>,
}

/// Checked, per-atom view of a [`MoleculeData`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMolecule {
    /// Atom centres.
    pub positions: Vec<Vec3>,
    /// Atom colours, if the loader supplied them.
    pub colors: Option<Vec<[f32; 3]>>,
    /// Bonds with both indices in range.
    pub bonds: Vec<[u32; 2]>,
}

impl MoleculeData {
    /// Number of atoms described by the position array.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Check array shapes and bond indices and unflatten the arrays.
    pub fn validate(self) -> Result<ValidatedMolecule, VizError> {
        if self.positions.len() % 3 != 0 {
            return Err(VizError::InvalidData(format!(
                "position array length {} is not a multiple of 3",
                self.positions.len()
            )));
        }
        let atom_count = self.atom_count();

        if let Some(colors) = &self.colors {
            if colors.len() != self.positions.len() {
                return Err(VizError::InvalidData(format!(
                    "{} colour components for {atom_count} atoms",
                    colors.len()
                )));
            }
        }

        if let Some(bad) = self
            .bonds
            .iter()
            .find(|[a, b]| *a as usize >= atom_count || *b as usize >= atom_count)
        {
            return Err(VizError::InvalidData(format!(
                "bond {}-{} out of range for {atom_count} atoms",
                bad[0], bad[1]
            )));
        }

        let positions = self
            .positions
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        let colors = self
            .colors
            .map(|c| c.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect());

        Ok(ValidatedMolecule {
            positions,
            colors,
            bonds: self.bonds,
        })
    }
}

/// Per-atom sphere instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct AtomInstance {
    /// Sphere centre.
    pub position: [f32; 3],
    /// Sphere radius.
    pub radius: f32,
}

/// Per-bond cylinder instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BondSegment {
    /// Centre of the first atom.
    pub start: [f32; 3],
    /// Cylinder radius.
    pub radius: f32,
    /// Centre of the second atom.
    pub end: [f32; 3],
    /// Bond length, precomputed for the cylinder scale.
    pub length: f32,
}

impl BondSegment {
    /// Cylinder between two atom centres.
    #[must_use]
    pub fn between(start: Vec3, end: Vec3, radius: f32) -> Self {
        Self {
            start: start.to_array(),
            radius,
            end: end.to_array(),
            length: start.distance(end),
        }
    }

    /// Midpoint of the cylinder.
    #[must_use]
    pub fn midpoint(&self) -> Vec3 {
        (Vec3::from(self.start) + Vec3::from(self.end)) * 0.5
    }
}

/// Translate `positions` so their centroid is at the origin.
pub fn center_positions(positions: &mut [Vec3]) {
    if positions.is_empty() {
        return;
    }
    let centroid =
        positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
    for p in positions {
        *p -= centroid;
    }
}
