//! Pooling node representations into per-graph vectors.

use candle_core::Tensor;

/// Mean-pool node features per graph.
///
/// # Arguments
/// * `nodes` - Tensor of shape (total_nodes, hidden_dim)
/// * `assignment` - U32 tensor of shape (total_nodes,) mapping nodes to graphs
/// * `counts` - F32 tensor of shape (num_graphs, 1) with per-graph node counts
///
/// # Returns
/// Tensor of shape (num_graphs, hidden_dim)
pub fn mean_pool(
    nodes: &Tensor,
    assignment: &Tensor,
    counts: &Tensor,
    num_graphs: usize,
) -> candle_core::Result<Tensor> {
    let (_, hidden_dim) = nodes.dims2()?;

    // Scatter-sum node rows into their graph slots
    let sums = Tensor::zeros((num_graphs, hidden_dim), nodes.dtype(), nodes.device())?
        .index_add(assignment, nodes, 0)?;

    // Divide by node counts (clamped to avoid division by zero)
    let denom = counts.clamp(1e-9f32, f32::MAX)?;
    sums.broadcast_div(&denom)
}
