use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::as_graph::{AsGraph, ASN};
use crate::error::BgpSimError;

/// Loads an ROV ASN list: one integer per non-empty line. Non-numeric
/// lines are skipped with a warning. For each parsed ASN, creates the node
/// if absent and replaces its policy with an ROV policy bound to it.
pub fn load(graph: &mut AsGraph, path: &Path) -> Result<(), BgpSimError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<ASN>() {
            Ok(asn) => graph.enforce_rov(asn),
            Err(_) => warn!("ROV ASN file {}: skipping malformed line {}", path.display(), lineno + 1),
        }
    }

    Ok(())
}
