use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};

use crate::as_graph::AsGraph;
use crate::error::BgpSimError;

/// Writes the RIB CSV: header `asn,prefix,as_path`, rows sorted ascending
/// by `asn` then by `prefix` (lexicographic byte order). `as_path` is
/// always double-quoted; the quotes are baked into the pre-formatted
/// field string (via `QuoteStyle::Never`) since only that one field must
/// be quoted -- the default "quote only if needed" policy would leave an
/// unquoted `(42,)` untouched.
pub fn write(graph: &AsGraph, path: &Path) -> Result<(), BgpSimError> {
    let mut rows = graph.collect_rib_rows();
    rows.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    let file = File::create(path)?;
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(file);

    wtr.write_record(["asn", "prefix", "as_path"])?;
    for (asn, prefix, as_path) in rows {
        wtr.write_record(&[asn.to_string(), prefix, format!("\"{}\"", as_path)])?;
    }
    wtr.flush()?;
    Ok(())
}
