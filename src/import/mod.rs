mod json_import;

pub(crate) use json_import::{sample_records, JsonImporter};
