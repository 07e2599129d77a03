mod ingest;
mod store;

pub use ingest::{LIST_SEPARATOR, load_catalog, read_catalog, split_list};
pub use store::Catalog;
