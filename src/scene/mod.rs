mod node;
mod surface;
mod svg_writer;

pub use node::{NodeKind, SceneNode};
pub use surface::{MemorySurface, Surface, SvgDocumentSurface};
pub use svg_writer::write_svg;
