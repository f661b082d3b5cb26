use crate::render::RenderList;

/// A surface that paints a viewer's [`RenderList`].
///
/// Backends receive already escaped markup for the response content; they
/// must not escape it again.
pub trait RenderBackend {
    /// Human readable backend name, used in log lines.
    fn name(&self) -> &str;

    /// Paint the given render list.
    fn render(&mut self, list: &RenderList) -> anyhow::Result<()>;
}
