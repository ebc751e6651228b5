pub mod bgp;
pub mod rov;

pub use bgp::BgpPolicy;
pub use rov::RovPolicy;

use crate::announcement::{Announcement, Prefix};
use crate::as_graph::ASN;
use crate::shared::Relationship;

/// Capability set every AS policy must implement. One instance is owned per
/// `AsNode`.
pub trait Policy {
    fn asn(&self) -> ASN;

    /// Enqueue an incoming announcement learned under `rel`. Must not
    /// mutate the RIB.
    fn receive(&mut self, prefix: Prefix, ann: Announcement, rel: Relationship);

    /// Drain the queue, apply selection, update the RIB.
    fn process_received(&mut self);

    /// For each current RIB entry exportable to neighbor-category `to`
    /// under the Gao-Rexford rule, return a copy with `next_hop_asn` set to
    /// the owner's ASN. `AsGraph` fans this out to the matching neighbor
    /// set and calls `receive` on each target with the mirrored
    /// relationship.
    fn export(&self, to: Relationship) -> Vec<(Prefix, Announcement)>;

    /// Append one `(asn, prefix, as_path_string)` per RIB entry.
    fn dump_rib_rows(&self, rows: &mut Vec<(ASN, Prefix, String)>);

    fn local_rib(&self) -> &std::collections::HashMap<Prefix, Announcement>;
}
