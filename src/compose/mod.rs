pub(crate) mod builder;
pub(crate) mod layer;
pub(crate) mod matcher;
pub(crate) mod naming;
pub(crate) mod overrides;
pub(crate) mod variants;
pub(crate) mod zorder;
