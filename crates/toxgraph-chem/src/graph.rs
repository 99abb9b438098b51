//! Molecular graphs: node features plus a symmetric directed edge list.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::molecule::Molecule;

/// Width of every node feature row:
/// atomic number, degree, implicit valence, formal charge, aromaticity.
pub const ATOM_FEATURE_DIM: usize = 5;

/// A molecule as a graph, ready for batching.
///
/// Every chemical bond contributes both directed arcs, so a molecule with
/// M bonds has 2M edges. A molecule with zero bonds still has a
/// well-defined (empty) edge list so downstream batching stays uniform.
/// Immutable once built, apart from attaching a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MolGraph {
    features: Vec<[f32; ATOM_FEATURE_DIM]>,
    edges: Vec<(u32, u32)>,
    /// Binary toxicity label, if known.
    pub label: Option<u8>,
}

impl MolGraph {
    /// Build a graph from a SMILES string.
    ///
    /// Unparseable input yields an error; callers treat that as "no graph"
    /// and skip the molecule.
    pub fn from_smiles(smiles: &str) -> Result<Self> {
        let mol = Molecule::parse(smiles)?;

        let features = mol
            .atoms()
            .iter()
            .map(|atom| {
                [
                    f32::from(atom.atomic_num),
                    f32::from(atom.degree),
                    f32::from(atom.implicit_h),
                    f32::from(atom.formal_charge),
                    f32::from(u8::from(atom.aromatic)),
                ]
            })
            .collect();

        let mut edges = Vec::with_capacity(mol.num_bonds() * 2);
        for bond in mol.bonds() {
            let (a, b) = (bond.a as u32, bond.b as u32);
            edges.push((a, b));
            edges.push((b, a));
        }

        Ok(Self {
            features,
            edges,
            label: None,
        })
    }

    pub fn with_label(mut self, label: u8) -> Self {
        self.label = Some(label);
        self
    }

    pub fn num_nodes(&self) -> usize {
        self.features.len()
    }

    /// Number of directed edges (twice the bond count).
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// One feature row per atom, each exactly [`ATOM_FEATURE_DIM`] wide.
    pub fn features(&self) -> &[[f32; ATOM_FEATURE_DIM]] {
        &self.features
    }

    /// Directed edges as (source, target) node indices.
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ethanol_shapes() {
        // CCO: 3 atoms, 2 bonds -> 3x5 features, 2x4 edge structure
        let graph = MolGraph::from_smiles("CCO").unwrap();
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.features()[0], [6.0, 1.0, 3.0, 0.0, 0.0]);
        assert_eq!(graph.features()[1], [6.0, 2.0, 2.0, 0.0, 0.0]);
        assert_eq!(graph.features()[2], [8.0, 1.0, 1.0, 0.0, 0.0]);
        assert_eq!(graph.edges(), &[(0, 1), (1, 0), (1, 2), (2, 1)]);
    }

    #[test]
    fn every_edge_has_its_reverse() {
        let graph = MolGraph::from_smiles("CC(=O)Oc1ccccc1C(=O)O").unwrap(); // aspirin
        assert_eq!(graph.num_nodes(), 13);
        assert_eq!(graph.num_edges(), 26);
        for &(a, b) in graph.edges() {
            assert!(graph.edges().contains(&(b, a)));
        }
    }

    #[test]
    fn zero_bond_molecule_has_empty_edge_list() {
        let graph = MolGraph::from_smiles("[NH4+]").unwrap();
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.features()[0], [7.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn aromatic_flag_set() {
        let graph = MolGraph::from_smiles("c1ccccc1").unwrap();
        for row in graph.features() {
            assert_eq!(row[4], 1.0);
        }
    }

    #[test]
    fn disconnected_salt_components() {
        let graph = MolGraph::from_smiles("CCO.[Na+]").unwrap();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_edges(), 4);
    }

    #[test]
    fn unparseable_is_no_graph_not_a_crash() {
        assert!(MolGraph::from_smiles("not_a_smiles").is_err());
        assert!(MolGraph::from_smiles("").is_err());
        assert!(MolGraph::from_smiles("C1CC").is_err());
    }

    #[test]
    fn label_attachment() {
        let graph = MolGraph::from_smiles("CCO").unwrap().with_label(1);
        assert_eq!(graph.label, Some(1));
    }
}
