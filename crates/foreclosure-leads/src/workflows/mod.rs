pub mod court_import;
pub mod leads;
