use crate::core::types::Measurement;
use crate::error::{ChartError, ChartResult};
use crate::scene::node::SceneNode;
use crate::scene::svg_writer::write_svg;

/// Contract implemented by any drawing surface hosting a chart.
///
/// A surface resolves and measures its target container, then receives the
/// finished scene root. Committing replaces the previously committed root
/// wholesale, which is what makes repeated `init()` calls idempotent.
pub trait Surface {
    /// Pixel size of the target container.
    ///
    /// Fails with `MissingContainer` when the container cannot be resolved.
    fn container_size(&self) -> ChartResult<Measurement>;

    /// Replaces the surface's committed scene root.
    fn commit(&mut self, root: SceneNode) -> ChartResult<()>;
}

/// Headless in-memory surface.
///
/// It keeps the committed tree accessible so geometry can be asserted on
/// without a display environment, the counterpart of a validating no-op
/// backend.
#[derive(Debug)]
pub struct MemorySurface {
    size: Option<Measurement>,
    root: Option<SceneNode>,
    commit_count: usize,
}

impl MemorySurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Some(Measurement::new(width, height)),
            root: None,
            commit_count: 0,
        }
    }

    /// Surface whose container never resolves; every measurement fails with
    /// `MissingContainer`. Used to exercise the error path.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            size: None,
            root: None,
            commit_count: 0,
        }
    }

    #[must_use]
    pub fn root(&self) -> Option<&SceneNode> {
        self.root.as_ref()
    }

    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commit_count
    }
}

impl Surface for MemorySurface {
    fn container_size(&self) -> ChartResult<Measurement> {
        self.size.ok_or(ChartError::MissingContainer)
    }

    fn commit(&mut self, root: SceneNode) -> ChartResult<()> {
        self.root = Some(root);
        self.commit_count += 1;
        Ok(())
    }
}

/// Surface that serializes each committed scene to SVG markup.
#[derive(Debug)]
pub struct SvgDocumentSurface {
    size: Measurement,
    markup: Option<String>,
}

impl SvgDocumentSurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Measurement::new(width, height),
            markup: None,
        }
    }

    /// Markup of the last committed scene, if any commit happened yet.
    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }
}

impl Surface for SvgDocumentSurface {
    fn container_size(&self) -> ChartResult<Measurement> {
        Ok(self.size)
    }

    fn commit(&mut self, root: SceneNode) -> ChartResult<()> {
        self.markup = Some(write_svg(&root));
        Ok(())
    }
}
