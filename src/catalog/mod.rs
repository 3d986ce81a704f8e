pub(crate) mod duplicate;
pub(crate) mod instances;
pub(crate) mod json;
pub(crate) mod source;
