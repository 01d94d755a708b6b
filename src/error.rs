//! Render-time error taxonomy.
//!
//! Nothing here propagates: every variant is lowered to an error-styled
//! inline fragment at the offending node so the rest of the tree keeps
//! rendering.

use crate::rendering::builders::{error_color, text};
use crate::rendering::parts::RenderablePart;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualizationError {
    /// The visualizer produced something other than the recognized variants.
    #[error("<Visualizer returned an invalid value {0}; expected IPythonVisualization, CustomTreescopeVisualization, ChildAutovisualizer, or None>")]
    InvalidResult(String),

    /// An `IPythonVisualization` display object without HTML capability, or
    /// whose extraction produced nothing.
    #[error("<Visualization carries an invalid display object {0}>")]
    InvalidDisplayObject(String),
}

impl VisualizationError {
    /// The inline, error-styled fragment shown in place of the node's
    /// visualization.
    pub fn to_part(&self) -> RenderablePart {
        error_color(text(self.to_string()))
    }
}
