mod pdf_scanner;

pub use pdf_scanner::{scan_pdfs, ScanError};
