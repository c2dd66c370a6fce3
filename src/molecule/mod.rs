//! Molecular scene: atoms recoloured by a height-keyed colour wave while the
//! whole structure spins.
//!
//! The scene starts in [`LoadState::Loading`] with no atoms and ticks as a
//! no-op until a loader hands over a [`MoleculeData`] through
//! [`MoleculeScene::finish_load`]. A failed load is terminal: the scene stays
//! empty and reports the failure through [`MoleculeScene::status_text`].

mod data;
mod extent;
mod spin;
mod wave;

use glam::{Mat4, Vec3};

pub use data::{
    center_positions, AtomInstance, BondSegment, MoleculeData,
    ValidatedMolecule,
};
pub use extent::HeightExtent;
pub use spin::Spin;
pub use wave::{wave_color, wave_hue, ColorWave};

use crate::{
    animation::{AttributeBuffer, Clock, FrameAnimator, FrameUpdate},
    camera::OrbitCamera,
    error::VizError,
    options::Options,
};

/// Where the scene is in its one-shot load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the loader; the scene is empty.
    Loading,
    /// Structure loaded.
    Ready {
        /// Atom count.
        atoms: usize,
        /// Bond count.
        bonds: usize,
    },
    /// Load failed; the scene stays empty for the rest of the session.
    Failed(String),
}

/// Owns everything the molecular viewer animates.
pub struct MoleculeScene {
    options: Options,
    state: LoadState,
    atoms: AttributeBuffer<AtomInstance>,
    bonds: AttributeBuffer<BondSegment>,
    extent: Option<HeightExtent>,
    wave: ColorWave,
    spin: Spin,
    camera: OrbitCamera,
}

impl MoleculeScene {
    /// Empty scene waiting for a structure.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            options: options.clone(),
            state: LoadState::Loading,
            atoms: AttributeBuffer::new(Vec::new()),
            bonds: AttributeBuffer::new(Vec::new()),
            extent: None,
            wave: ColorWave::empty(options.wave.clone()),
            spin: Spin::new(options.molecule.rotation_speed),
            camera: OrbitCamera::new(&options.camera),
        }
    }

    /// Hand over the loader's result. Only the first call has any effect.
    pub fn finish_load(&mut self, result: Result<MoleculeData, VizError>) {
        if self.state != LoadState::Loading {
            log::warn!("ignoring structure delivered after load completed");
            return;
        }
        match result.and_then(MoleculeData::validate) {
            Ok(molecule) => self.populate(molecule),
            Err(e) => {
                log::error!("failed to load structure: {e}");
                self.state = LoadState::Failed(e.to_string());
            }
        }
    }

    fn populate(&mut self, molecule: ValidatedMolecule) {
        let ValidatedMolecule {
            mut positions,
            colors,
            bonds,
        } = molecule;
        let opts = &self.options.molecule;

        if opts.center_on_load {
            center_positions(&mut positions);
        }

        let extent = HeightExtent::from_positions(&positions);
        let heights = extent.map_or_else(Vec::new, |e| {
            e.normalized_heights(&positions)
        });
        let colors = colors.unwrap_or_else(|| vec![opts.base_color; positions.len()]);

        let atoms = positions
            .iter()
            .map(|p| AtomInstance {
                position: p.to_array(),
                radius: opts.atom_radius,
            })
            .collect();
        let segments = bonds
            .iter()
            .map(|&[a, b]| {
                BondSegment::between(
                    positions[a as usize],
                    positions[b as usize],
                    opts.bond_radius,
                )
            })
            .collect();

        self.wave = ColorWave::with_colors(
            heights,
            Some(AttributeBuffer::new(colors)),
            self.options.wave.clone(),
        )
        .unwrap_or_else(|| ColorWave::empty(self.options.wave.clone()));
        self.atoms = AttributeBuffer::new(atoms);
        self.bonds = AttributeBuffer::new(segments);
        self.extent = extent;
        self.camera.fit_to_positions(&positions);
        self.state = LoadState::Ready {
            atoms: positions.len(),
            bonds: bonds.len(),
        };
        log::debug!(
            "structure loaded: {} atoms, {} bonds",
            positions.len(),
            bonds.len()
        );
    }

    /// Current load state.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// One-line status for a host status element.
    #[must_use]
    pub fn status_text(&self) -> String {
        match &self.state {
            LoadState::Loading => "Loading structure...".to_owned(),
            LoadState::Ready { atoms, bonds } => {
                format!("Loaded {atoms} atoms, {bonds} bonds")
            }
            LoadState::Failed(msg) => format!("Failed to load structure: {msg}"),
        }
    }

    /// Atom sphere instances, in atom order.
    #[must_use]
    pub fn atoms(&self) -> &AttributeBuffer<AtomInstance> {
        &self.atoms
    }

    /// Mutable atom buffer, for the consumer's dirty handshake.
    pub fn atoms_mut(&mut self) -> &mut AttributeBuffer<AtomInstance> {
        &mut self.atoms
    }

    /// Bond cylinder instances.
    #[must_use]
    pub fn bonds(&self) -> &AttributeBuffer<BondSegment> {
        &self.bonds
    }

    /// Mutable bond buffer, for the consumer's dirty handshake.
    pub fn bonds_mut(&mut self) -> &mut AttributeBuffer<BondSegment> {
        &mut self.bonds
    }

    /// Per-atom colours, in atom order.
    #[must_use]
    pub fn colors(&self) -> Option<&AttributeBuffer<[f32; 3]>> {
        self.wave.colors()
    }

    /// Mutable colour buffer, for the consumer's dirty handshake.
    pub fn colors_mut(&mut self) -> Option<&mut AttributeBuffer<[f32; 3]>> {
        self.wave.colors_mut()
    }

    /// Y extent computed at load time.
    #[must_use]
    pub fn extent(&self) -> Option<HeightExtent> {
        self.extent
    }

    /// The colour-wave animator.
    #[must_use]
    pub fn wave(&self) -> &ColorWave {
        &self.wave
    }

    /// The spin animator.
    #[must_use]
    pub fn spin(&self) -> &Spin {
        &self.spin
    }

    /// Parent transform applied to every atom and bond.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        self.spin.matrix()
    }

    /// World-space atom centres after the spin.
    #[must_use]
    pub fn world_positions(&self) -> Vec<Vec3> {
        let rotation = self.spin.rotation();
        self.atoms
            .as_slice()
            .iter()
            .map(|a| rotation * Vec3::from(a.position))
            .collect()
    }

    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Mutable orbit camera, for pointer input.
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Number of loaded atoms.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

impl FrameAnimator for MoleculeScene {
    fn tick(&mut self, clock: &Clock) -> FrameUpdate {
        if self.atoms.is_empty() {
            return FrameUpdate::Unchanged;
        }
        let spun = self.spin.tick(clock);
        spun.merge(self.wave.tick(clock))
    }

    fn name(&self) -> &'static str {
        "molecule"
    }
}
