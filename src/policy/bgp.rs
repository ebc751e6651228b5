use std::collections::HashMap;

use crate::announcement::{Announcement, Prefix};
use crate::as_graph::ASN;
use crate::policy::Policy;
use crate::shared::Relationship;

/// True iff `a` beats `b` under the preference order: higher relationship
/// ordinal, then shorter AS path, then lower next-hop ASN. Strict total
/// order on distinct announcements for a given prefix, so selection never
/// depends on arrival order.
pub fn is_better(a: &Announcement, b: &Announcement) -> bool {
    if a.rel != b.rel {
        return a.rel > b.rel;
    }
    if a.as_path.len() != b.as_path.len() {
        return a.as_path.len() < b.as_path.len();
    }
    a.next_hop_asn < b.next_hop_asn
}

/// Gao-Rexford export rule: routes learned from a customer (or
/// self-originated) may be exported to anyone; routes learned from a peer
/// or provider may only be exported to customers.
pub fn exportable(learned_from: Relationship, to: Relationship) -> bool {
    match to {
        Relationship::Customer => true,
        Relationship::Peer | Relationship::Provider => {
            matches!(learned_from, Relationship::Customer | Relationship::Origin)
        }
        // Not a real wire direction -- `Relationship` is reused for both
        // "how learned" and "who to export to"; the driver never invokes this.
        Relationship::Origin => false,
    }
}

/// Default BGP receive/select/export behavior.
pub struct BgpPolicy {
    asn: ASN,
    local_rib: HashMap<Prefix, Announcement>,
    recv_q: HashMap<Prefix, Vec<(Announcement, Relationship)>>,
}

impl BgpPolicy {
    pub fn new(asn: ASN) -> Self {
        BgpPolicy {
            asn,
            local_rib: HashMap::new(),
            recv_q: HashMap::new(),
        }
    }
}

impl Policy for BgpPolicy {
    fn asn(&self) -> ASN {
        self.asn
    }

    fn receive(&mut self, prefix: Prefix, ann: Announcement, rel: Relationship) {
        self.recv_q.entry(prefix).or_default().push((ann, rel));
    }

    fn process_received(&mut self) {
        for (prefix, queued) in self.recv_q.drain() {
            for (mut cand, rel) in queued {
                // Loop prevention: never accept a non-origin route that
                // already contains our own ASN.
                if rel != Relationship::Origin && cand.as_path.contains(&self.asn) {
                    continue;
                }
                if rel != Relationship::Origin {
                    cand.as_path.insert(0, self.asn);
                }
                cand.rel = rel;
                cand.next_hop_asn = self.asn;

                match self.local_rib.get(&prefix) {
                    None => {
                        self.local_rib.insert(prefix.clone(), cand);
                    }
                    Some(current) => {
                        if is_better(&cand, current) {
                            self.local_rib.insert(prefix.clone(), cand);
                        }
                    }
                }
            }
        }
    }

    fn export(&self, to: Relationship) -> Vec<(Prefix, Announcement)> {
        self.local_rib
            .iter()
            .filter(|(_, ann)| exportable(ann.rel, to))
            .map(|(prefix, ann)| {
                let mut out = ann.clone();
                out.next_hop_asn = self.asn;
                (prefix.clone(), out)
            })
            .collect()
    }

    fn dump_rib_rows(&self, rows: &mut Vec<(ASN, Prefix, String)>) {
        for (prefix, ann) in &self.local_rib {
            rows.push((self.asn, prefix.clone(), ann.as_path_string()));
        }
    }

    fn local_rib(&self) -> &HashMap<Prefix, Announcement> {
        &self.local_rib
    }
}
