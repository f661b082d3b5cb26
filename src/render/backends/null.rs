use crate::render::backend::RenderBackend;
use crate::render::RenderList;
use anyhow::Result;

/// Null backend renderer that does not perform any rendering.
#[derive(Debug, Default)]
pub struct NullBackend {
    /// Number of frames "rendered" so far.
    frame_id: u64,
}

impl NullBackend {
    /// Creates a new instance of the null backend.
    pub fn new() -> Self {
        Self { frame_id: 0 }
    }

    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }
}

impl RenderBackend for NullBackend {
    fn name(&self) -> &str {
        "NullBackend"
    }

    fn render(&mut self, _list: &RenderList) -> Result<()> {
        self.frame_id = self.frame_id.wrapping_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_frames() {
        let mut backend = NullBackend::new();
        assert_eq!(backend.name(), "NullBackend");
        backend.render(&RenderList::new()).unwrap();
        backend.render(&RenderList::new()).unwrap();
        assert_eq!(backend.frame_id(), 2);
    }
}
