//! # Treescope
//!
//! A dispatch-and-compose engine that lets a tree-rendering pipeline be
//! selectively overridden by user-supplied visualization logic.
//!
//! The enclosing renderer calls [`use_visualizer_if_present`] once per node.
//! The currently installed [visualizer](visualize::VisualizerFn) may decline
//! (ordinary rendering proceeds), substitute or augment the node's output
//! with a rich visualization, or install a different visualizer for the
//! node's subtree. Substituted output stays faithful in round-trip mode:
//! plain text output always reproduces the ordinary rendering, with a
//! comment noting what was hidden.

pub mod error;
pub mod lowering;
pub mod rendering;
pub mod visualize;

pub use error::VisualizationError;
pub use lowering::{force_pair, force_rendering, maybe_defer_rendering, DeferredPart};
pub use rendering::{
    ExpandState, RenderMode, RenderableAndLineAnnotations, RenderablePart, Style,
};
pub use visualize::{
    use_visualizer_if_present, ActiveVisualizer, DisplayObject, HtmlDisplay, NodeRenderer,
    NodeValue, ReprHtml, ScopedVisualizer, VisualizationResult, VisualizerFn,
};

#[cfg(test)]
mod tests;
