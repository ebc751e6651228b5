pub mod announcement;
pub mod as_graph;
pub mod error;
pub mod io;
pub mod policy;
pub mod shared;

pub use announcement::{Announcement, Prefix};
pub use as_graph::{AsGraph, AsNode, ASN};
pub use error::BgpSimError;
pub use policy::{BgpPolicy, Policy, RovPolicy};
pub use shared::Relationship;
