//! Batching molecular graphs into tensors.

use candle_core::{Device, Tensor};
use toxgraph_chem::{MolGraph, ATOM_FEATURE_DIM};

use crate::error::{GnnError, Result};

/// A disjoint union of molecule graphs.
///
/// Node features of all graphs are stacked, edge indices are shifted by each
/// graph's node offset, and `assignment` maps every node back to its graph
/// so pooling can run vectorized over variable-sized graphs. Built fresh per
/// training or evaluation step.
pub struct Batch {
    /// Node features, shape `(total_nodes, ATOM_FEATURE_DIM)`, F32.
    pub x: Tensor,
    /// Directed edges, shape `(2, total_edges)`, U32. Row 0 holds sources,
    /// row 1 targets. Zero-bond molecules contribute nothing but keep the
    /// 2-row shape intact.
    pub edge_index: Tensor,
    /// Node-to-graph assignment, shape `(total_nodes,)`, U32.
    pub assignment: Tensor,
    /// Per-graph binary labels, shape `(num_graphs,)`, U32.
    pub labels: Tensor,
    /// Per-graph node counts, shape `(num_graphs, 1)`, F32, for mean pooling.
    pub counts: Tensor,
    pub num_graphs: usize,
}

impl Batch {
    /// Collate labeled graphs into one batch on the given device.
    pub fn from_graphs(graphs: &[&MolGraph], device: &Device) -> Result<Self> {
        if graphs.is_empty() {
            return Err(GnnError::Data(
                "cannot build a batch from zero graphs".to_string(),
            ));
        }

        let total_nodes: usize = graphs.iter().map(|g| g.num_nodes()).sum();
        let total_edges: usize = graphs.iter().map(|g| g.num_edges()).sum();

        let mut features = Vec::with_capacity(total_nodes * ATOM_FEATURE_DIM);
        let mut sources = Vec::with_capacity(total_edges);
        let mut targets = Vec::with_capacity(total_edges);
        let mut assignment = Vec::with_capacity(total_nodes);
        let mut labels = Vec::with_capacity(graphs.len());
        let mut counts = Vec::with_capacity(graphs.len());

        let mut offset = 0u32;
        for (graph_idx, graph) in graphs.iter().enumerate() {
            let label = graph.label.ok_or_else(|| {
                GnnError::Data(format!("graph {graph_idx} in batch has no label"))
            })?;

            for row in graph.features() {
                features.extend_from_slice(row);
            }
            for &(a, b) in graph.edges() {
                sources.push(a + offset);
                targets.push(b + offset);
            }
            assignment.extend(std::iter::repeat(graph_idx as u32).take(graph.num_nodes()));
            labels.push(u32::from(label));
            counts.push(graph.num_nodes() as f32);
            offset += graph.num_nodes() as u32;
        }

        let x = Tensor::from_vec(features, (total_nodes, ATOM_FEATURE_DIM), device)?;
        let mut edge_flat = sources;
        edge_flat.append(&mut targets);
        let edge_index = Tensor::from_vec(edge_flat, (2, total_edges), device)?;
        let assignment = Tensor::from_vec(assignment, total_nodes, device)?;
        let num_graphs = graphs.len();
        let labels = Tensor::from_vec(labels, num_graphs, device)?;
        let counts = Tensor::from_vec(counts, (num_graphs, 1), device)?;

        Ok(Self {
            x,
            edge_index,
            assignment,
            labels,
            counts,
            num_graphs,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.x.dims()[0]
    }

    pub fn num_edges(&self) -> usize {
        self.edge_index.dims()[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(smiles: &str, label: u8) -> MolGraph {
        MolGraph::from_smiles(smiles).unwrap().with_label(label)
    }

    #[test]
    fn batch_shapes_and_offsets() {
        let ethanol = labeled("CCO", 0); // 3 nodes, 4 edges
        let benzene = labeled("c1ccccc1", 1); // 6 nodes, 12 edges
        let batch =
            Batch::from_graphs(&[&ethanol, &benzene], &Device::Cpu).unwrap();

        assert_eq!(batch.num_graphs, 2);
        assert_eq!(batch.x.dims(), &[9, ATOM_FEATURE_DIM]);
        assert_eq!(batch.edge_index.dims(), &[2, 16]);
        assert_eq!(
            batch.assignment.to_vec1::<u32>().unwrap(),
            vec![0, 0, 0, 1, 1, 1, 1, 1, 1]
        );
        assert_eq!(batch.labels.to_vec1::<u32>().unwrap(), vec![0, 1]);

        // benzene's edges must all point at nodes 3..9
        let sources = batch.edge_index.get(0).unwrap().to_vec1::<u32>().unwrap();
        assert!(sources[4..].iter().all(|&s| (3..9).contains(&s)));
    }

    #[test]
    fn zero_bond_graph_keeps_edge_shape() {
        let ion = labeled("[NH4+]", 0);
        let batch = Batch::from_graphs(&[&ion], &Device::Cpu).unwrap();
        assert_eq!(batch.edge_index.dims(), &[2, 0]);
        assert_eq!(batch.num_nodes(), 1);
    }

    #[test]
    fn unlabeled_graph_rejected() {
        let graph = MolGraph::from_smiles("CCO").unwrap();
        assert!(Batch::from_graphs(&[&graph], &Device::Cpu).is_err());
    }

    #[test]
    fn empty_batch_rejected() {
        assert!(Batch::from_graphs(&[], &Device::Cpu).is_err());
    }
}
