pub mod zips;

pub use zips::{load_zip_tables, scan_archives};
