pub(crate) mod flat;
pub(crate) mod layered;
pub(crate) mod output;
pub(crate) mod psd;
pub(crate) mod raster;
pub(crate) mod surface;
pub(crate) mod text;
pub(crate) mod variant;
