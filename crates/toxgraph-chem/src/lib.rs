//! Toxgraph Chem - SMILES parsing and molecular graph construction.
//!
//! Pure Rust, no RDKit or OpenBabel. A SMILES string is scanned and parsed
//! into a [`Molecule`] (atoms + bonds with perceived properties), then turned
//! into a [`MolGraph`]: a node-feature matrix and a symmetric directed edge
//! list, ready to feed into a graph neural network.
//!
//! # Example
//! ```
//! use toxgraph_chem::MolGraph;
//!
//! let graph = MolGraph::from_smiles("CCO").unwrap(); // ethanol
//! assert_eq!(graph.num_nodes(), 3);
//! assert_eq!(graph.num_edges(), 4); // 2 bonds, both directions
//! ```
//!
//! Unparseable input is a typed [`SmilesError`], never a panic:
//! ```
//! use toxgraph_chem::MolGraph;
//!
//! assert!(MolGraph::from_smiles("not_a_smiles").is_err());
//! ```

pub mod elements;
pub mod error;
pub mod graph;
pub mod molecule;
pub mod smiles;

pub use error::{Result, SmilesError};
pub use graph::{MolGraph, ATOM_FEATURE_DIM};
pub use molecule::{Atom, Bond, BondKind, Molecule};
