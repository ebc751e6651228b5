use std::path::Path;

use log::warn;

use crate::announcement::Announcement;
use crate::as_graph::{AsGraph, ASN};
use crate::error::BgpSimError;
use crate::shared::Relationship;

/// Loads seed announcements from a CSV whose header row is discarded. Each
/// subsequent row is `seed_asn,prefix,rov_invalid`, where `rov_invalid` is
/// "True"/"False" (case-insensitive; anything other than a case-insensitive
/// "true" is treated as `false`). Empty lines are skipped. A row whose
/// `seed_asn` cannot be parsed is skipped with a warning rather than
/// aborting the whole load.
///
/// Submits each announcement via the node's policy `receive`. The caller
/// is responsible for running `AsGraph::process_all_received` once after
/// all rows have been seeded.
pub fn load(graph: &mut AsGraph, path: &Path) -> Result<(), BgpSimError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    for (rowno, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let seed_asn = match record.get(0).and_then(|f| f.trim().parse::<ASN>().ok()) {
            Some(asn) => asn,
            None => {
                warn!("seed announcements file {}: skipping malformed row {}", path.display(), rowno + 2);
                continue;
            }
        };
        let prefix = record.get(1).unwrap_or("").trim().to_string();
        let rov_invalid = record
            .get(2)
            .map(|f| f.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let ann = Announcement::new(
            prefix.clone(),
            vec![seed_asn],
            seed_asn,
            Relationship::Origin,
            rov_invalid,
        );

        let node = graph.get_or_create(seed_asn);
        node.policy.receive(prefix, ann, Relationship::Origin);
    }

    Ok(())
}
