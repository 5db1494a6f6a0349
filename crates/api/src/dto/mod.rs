pub mod debug;

pub use debug::{RecursiveDomainsResponse, RecursiveRecordsResponse};
