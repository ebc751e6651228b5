pub mod relationships;
pub mod rib_writer;
pub mod rov;
pub mod seed;
