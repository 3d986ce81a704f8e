pub(crate) mod asset;
pub(crate) mod input;
pub(crate) mod instance;
pub(crate) mod project;
