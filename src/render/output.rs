use crate::compose::naming::ExportFormat;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Encoded document produced by a renderer.
pub struct RenderedOutput {
    /// Document format of `bytes`.
    pub format: ExportFormat,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
}
