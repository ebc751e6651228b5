use std::collections::HashMap;

use crate::announcement::{Announcement, Prefix};
use crate::as_graph::ASN;
use crate::policy::bgp::BgpPolicy;
use crate::policy::Policy;
use crate::shared::Relationship;

/// `BgpPolicy` composed behind an ingress filter: every method delegates to
/// the inner policy except `receive`, which drops the announcement when
/// `ann.rov_invalid` is true and otherwise delegates.
pub struct RovPolicy {
    inner: BgpPolicy,
}

impl RovPolicy {
    pub fn new(asn: ASN) -> Self {
        RovPolicy {
            inner: BgpPolicy::new(asn),
        }
    }
}

impl Policy for RovPolicy {
    fn asn(&self) -> ASN {
        self.inner.asn()
    }

    fn receive(&mut self, prefix: Prefix, ann: Announcement, rel: Relationship) {
        if ann.rov_invalid {
            return;
        }
        self.inner.receive(prefix, ann, rel);
    }

    fn process_received(&mut self) {
        self.inner.process_received();
    }

    fn export(&self, to: Relationship) -> Vec<(Prefix, Announcement)> {
        self.inner.export(to)
    }

    fn dump_rib_rows(&self, rows: &mut Vec<(ASN, Prefix, String)>) {
        self.inner.dump_rib_rows(rows);
    }

    fn local_rib(&self) -> &HashMap<Prefix, Announcement> {
        self.inner.local_rib()
    }
}
