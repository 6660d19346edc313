//! # ttm-event
//!
//! Typed per-event physics-object model for the ttH→multilepton analysis,
//! plus the flat-column ingestion contract that turns per-event parallel
//! attribute arrays into object collections.
//!
//! Objects are constructed once per event and are read-only afterwards;
//! nothing in this crate retains cross-event state.
//!
//! ## Example
//!
//! ```
//! use ttm_event::{Particle, RecoLepton, MuonVars};
//!
//! let mu = RecoLepton::muon(
//!     Particle::new(25.0, 1.1, 0.4, 0.106),
//!     -13,
//!     Default::default(),
//!     MuonVars { passes_loose_id_pog: true, ..Default::default() },
//! );
//! assert!(mu.is_muon() && !mu.is_electron());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod columns;
pub mod gen;
pub mod hadtau;
pub mod jet;
pub mod lepton;
pub mod particle;
pub mod reader;

pub use columns::{
    ElectronColumns, GenParticleColumns, HadTauColumns, JetColumns, LeptonColumns, MuonColumns,
    MAX_OBJECTS,
};
pub use gen::{GenHadTau, GenJet, GenLepton, GenParticle};
pub use hadtau::RecoHadTau;
pub use jet::{GenMatch, RecoJet};
pub use lepton::{ElectronVars, LeptonFlavor, LeptonVars, MuonVars, RecoLepton, MVA_TTH_WP};
pub use particle::Particle;
pub use reader::{
    column_name, read_gen_hadtaus, read_gen_jets, read_gen_leptons, ElectronReader, HadTauReader,
    JetReader, MuonReader, TableRegistry,
};
