//! Loading labeled molecule graphs from Tox21-style CSV files.

use std::path::Path;

use tracing::{debug, info};
use toxgraph_chem::MolGraph;

use crate::error::{GnnError, Result};

/// Load a CSV with at least a `smiles` column and the named binary target
/// column into labeled graphs, preserving file order.
///
/// Rows are dropped when the label is missing (empty or NaN) or carries the
/// `-1` "not tested" sentinel, and when the SMILES cannot be parsed; bad
/// molecules are skipped, everything else is fatal.
pub fn load_tox21_csv<P: AsRef<Path>>(path: P, target_column: &str) -> Result<Vec<MolGraph>> {
    let mut reader = csv::Reader::from_path(&path)?;
    let headers = reader.headers()?.clone();

    let smiles_idx = headers
        .iter()
        .position(|h| h == "smiles")
        .ok_or_else(|| GnnError::Data("CSV has no 'smiles' column".to_string()))?;
    let target_idx = headers
        .iter()
        .position(|h| h == target_column)
        .ok_or_else(|| {
            GnnError::Data(format!("target column '{target_column}' not found in CSV"))
        })?;

    let mut graphs = Vec::new();
    let mut unlabeled = 0usize;
    let mut unparseable = 0usize;

    for record in reader.records() {
        let record = record?;
        let raw_label = record
            .get(target_idx)
            .ok_or_else(|| GnnError::Data(format!("missing field at index {target_idx}")))?;
        let Some(label) = parse_label(raw_label) else {
            unlabeled += 1;
            continue;
        };

        let smiles = record
            .get(smiles_idx)
            .ok_or_else(|| GnnError::Data(format!("missing field at index {smiles_idx}")))?;
        match MolGraph::from_smiles(smiles) {
            Ok(graph) => graphs.push(graph.with_label(label)),
            Err(e) => {
                debug!("skipping unparseable SMILES '{smiles}': {e}");
                unparseable += 1;
            }
        }
    }

    info!(
        "loaded {} labeled graphs for '{target_column}' ({unlabeled} unlabeled, \
         {unparseable} unparseable rows skipped)",
        graphs.len()
    );
    Ok(graphs)
}

/// `-1` is the "missing/excluded" sentinel; empty and NaN also mean no label.
/// Anything else is thresholded at zero, matching the 0/1 encoding.
fn parse_label(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    if value.is_nan() || value == -1.0 {
        return None;
    }
    Some(u8::from(value != 0.0))
}

/// Fixed prefix/suffix split in input order - not randomized, not stratified.
pub fn prefix_split(graphs: Vec<MolGraph>, train_fraction: f64) -> (Vec<MolGraph>, Vec<MolGraph>) {
    let train_size = (train_fraction * graphs.len() as f64) as usize;
    let mut train = graphs;
    let eval = train.split_off(train_size.min(train.len()));
    (train, eval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_and_filters_rows() {
        let file = write_csv(
            "smiles,NR-AR\n\
             CCO,0\n\
             c1ccccc1,1\n\
             CCN,-1\n\
             CCC,\n\
             not_a_smiles,1\n\
             CCCl,1.0\n",
        );

        let graphs = load_tox21_csv(file.path(), "NR-AR").unwrap();
        assert_eq!(graphs.len(), 3);
        assert_eq!(graphs[0].label, Some(0));
        assert_eq!(graphs[1].label, Some(1));
        assert_eq!(graphs[2].label, Some(1));
        // order preserved: ethanol first
        assert_eq!(graphs[0].num_nodes(), 3);
    }

    #[test]
    fn missing_columns_are_fatal() {
        let no_smiles = write_csv("mol,NR-AR\nCCO,1\n");
        assert!(load_tox21_csv(no_smiles.path(), "NR-AR").is_err());

        let no_target = write_csv("smiles,NR-AR\nCCO,1\n");
        assert!(load_tox21_csv(no_target.path(), "NR-ER").is_err());
    }

    #[test]
    fn label_parsing() {
        assert_eq!(parse_label("0"), Some(0));
        assert_eq!(parse_label("1"), Some(1));
        assert_eq!(parse_label("1.0"), Some(1));
        assert_eq!(parse_label("-1"), None);
        assert_eq!(parse_label(""), None);
        assert_eq!(parse_label("  "), None);
        assert_eq!(parse_label("NaN"), None);
        assert_eq!(parse_label("abc"), None);
    }

    #[test]
    fn split_is_prefix_suffix() {
        let graphs: Vec<MolGraph> = (0..10)
            .map(|i| {
                MolGraph::from_smiles("CCO")
                    .unwrap()
                    .with_label(u8::from(i >= 8))
            })
            .collect();
        let (train, eval) = prefix_split(graphs, 0.8);
        assert_eq!(train.len(), 8);
        assert_eq!(eval.len(), 2);
        assert!(train.iter().all(|g| g.label == Some(0)));
        assert!(eval.iter().all(|g| g.label == Some(1)));
    }
}
