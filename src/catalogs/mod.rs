//! On-disk star catalog formats.

pub mod starmap;

pub use starmap::{decode_catalog, encode_catalog, load_catalog_from_file, write_catalog};
