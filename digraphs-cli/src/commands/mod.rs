pub mod common;
pub mod convert;
pub mod info;
pub mod order;
pub mod scc;
