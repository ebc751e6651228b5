use std::fmt;

/// How an AS learned a route. Variants are declared in ascending preference
/// order so the derived `Ord` *is* the first tie-break axis of route
/// selection -- no separate numeric mapping function is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Relationship {
    Provider = 0,
    Peer = 1,
    Customer = 2,
    Origin = 3,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Relationship::Provider => "PROVIDER",
            Relationship::Peer => "PEER",
            Relationship::Customer => "CUSTOMER",
            Relationship::Origin => "ORIGIN",
        };
        write!(f, "{}", s)
    }
}
