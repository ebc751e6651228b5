use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::as_graph::{AsGraph, ASN};
use crate::error::BgpSimError;

/// Loads a CAIDA-style relationships file: one edge per non-empty line,
/// three pipe-delimited fields `as1|as2|rel` where `rel` is `-1`
/// (`as1` provider of `as2`) or `0` (peer/peer). Malformed lines are
/// skipped with a warning. Multiple files may be loaded in sequence;
/// semantics are union-of-edges.
pub fn load(graph: &mut AsGraph, path: &Path) -> Result<(), BgpSimError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() < 3 {
            warn!("relationships file {}: skipping malformed line {}", path.display(), lineno + 1);
            continue;
        }

        let (as1, as2, rel) = match (
            parts[0].trim().parse::<ASN>(),
            parts[1].trim().parse::<ASN>(),
            parts[2].trim().parse::<i32>(),
        ) {
            (Ok(a), Ok(b), Ok(r)) => (a, b, r),
            _ => {
                warn!("relationships file {}: skipping malformed line {}", path.display(), lineno + 1);
                continue;
            }
        };

        match rel {
            -1 => graph.add_provider_customer_edge(as1, as2),
            0 => graph.add_peer_edge(as1, as2),
            other => warn!(
                "relationships file {}: unknown relationship code {} on line {}",
                path.display(),
                other,
                lineno + 1
            ),
        }
    }

    Ok(())
}
