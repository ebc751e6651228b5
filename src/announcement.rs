use crate::as_graph::ASN;
use crate::shared::Relationship;

/// Prefixes are opaque, non-empty strings treated as exact keys -- no
/// CIDR/longest-match semantics.
pub type Prefix = String;

/// An immutable-by-convention route record carried between ASes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub prefix: Prefix,
    /// Newest-hop first.
    pub as_path: Vec<ASN>,
    pub next_hop_asn: ASN,
    pub rel: Relationship,
    /// Set at seeding time, consulted only by `RovPolicy` on ingress.
    pub rov_invalid: bool,
}

impl Announcement {
    pub fn new(
        prefix: Prefix,
        as_path: Vec<ASN>,
        next_hop_asn: ASN,
        rel: Relationship,
        rov_invalid: bool,
    ) -> Self {
        Announcement {
            prefix,
            as_path,
            next_hop_asn,
            rel,
            rov_invalid,
        }
    }

    pub fn origin(&self) -> ASN {
        self.as_path.last().copied().unwrap_or(self.next_hop_asn)
    }

    /// Renders `as_path` for the RIB CSV: `"(a, b, c)"` for length >= 2, and
    /// `"(a,)"` (trailing comma) for length 1.
    pub fn as_path_string(&self) -> String {
        match self.as_path.as_slice() {
            [] => "()".to_string(),
            [only] => format!("({},)", only),
            path => {
                let joined = path
                    .iter()
                    .map(|asn| asn.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({})", joined)
            }
        }
    }
}
