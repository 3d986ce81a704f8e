pub(crate) mod archive;
pub(crate) mod manifest;
pub(crate) mod orchestrator;
