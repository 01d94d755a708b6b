//! The visualization override resolver.
//!
//! Called by the enclosing renderer once per node. Consults the active
//! visualizer, interprets its result, and either declines (the caller renders
//! the node normally) or produces a composed fragment that stays faithful in
//! round-trip mode while showing the visualization interactively.

use crate::error::VisualizationError;
use crate::lowering::maybe_defer_rendering;
use crate::rendering::builders::*;
use crate::rendering::parts::{ExpandState, RenderableAndLineAnnotations};
use crate::visualize::context::ActiveVisualizer;
use crate::visualize::types::{
    no_op_visualizer, short_type_name, to_html, DisplayObject, NodeValue, VisualizationResult,
};
use tracing::{debug, trace};

/// The enclosing renderer's callback for rendering a node ordinarily.
pub type NodeRenderer<'a> =
    dyn FnMut(&dyn NodeValue, Option<&str>) -> RenderableAndLineAnnotations + 'a;

/// Runs the active visualizer for `node` and interprets its result.
///
/// Returns `None` when the visualizer declines; the caller must then perform
/// ordinary rendering itself. Every recognized failure is recovered into an
/// inline error fragment so sibling nodes keep rendering.
pub fn use_visualizer_if_present(
    active: &ActiveVisualizer,
    node: &dyn NodeValue,
    path: Option<&str>,
    node_renderer: &mut NodeRenderer<'_>,
) -> Option<RenderableAndLineAnnotations> {
    let visualizer = active.get();
    match (*visualizer)(node, path) {
        VisualizationResult::NoOverride => {
            trace!(?path, "visualizer declined; rendering normally");
            None
        }

        VisualizationResult::IPythonVisualization {
            display_object,
            replace,
        } => {
            trace!(?path, replace, "visualizer supplied a display object");
            let ordinary = render_without_visualization(active, node, path, node_renderer);
            let visualization = display_object_rendering(display_object, path);
            if replace {
                let container = visualization_container(node, path, visualization);
                Some(conditioned_on_mode(ordinary, container))
            } else {
                Some(attached_to_ordinary(ordinary, visualization))
            }
        }

        VisualizationResult::CustomTreescopeVisualization { rendering } => {
            trace!(?path, "visualizer supplied a custom rendering");
            let ordinary = render_without_visualization(active, node, path, node_renderer);
            Some(conditioned_on_mode(ordinary, rendering))
        }

        VisualizationResult::ChildAutovisualizer { autovisualizer } => {
            // The substitution covers the entire subtree rendered by this
            // call, not just immediate children.
            trace!(?path, "installing child autovisualizer for subtree");
            let _scope = active.set_scoped(autovisualizer);
            Some(node_renderer(node, path))
        }

        VisualizationResult::Invalid { repr } => {
            let error = VisualizationError::InvalidResult(repr);
            debug!(?path, %error, "recovered invalid visualizer result");
            Some(build_one_line_tree_node(error.to_part(), path))
        }
    }
}

/// Ordinary rendering with visualization disabled, for the round-trip
/// fallback. The no-op install is scoped so recursion below this node does
/// not re-trigger the active visualizer.
fn render_without_visualization(
    active: &ActiveVisualizer,
    node: &dyn NodeValue,
    path: Option<&str>,
    node_renderer: &mut NodeRenderer<'_>,
) -> RenderableAndLineAnnotations {
    let _scope = active.set_scoped(no_op_visualizer());
    node_renderer(node, path)
}

/// Lowers a display object to a fragment. HTML-capable objects get a
/// deferred rendering so extraction cost is paid when the display surface
/// forces it; anything else is an immediate inline error.
fn display_object_rendering(
    display_object: Box<dyn DisplayObject>,
    path: Option<&str>,
) -> RenderableAndLineAnnotations {
    if display_object.as_repr_html().is_some() {
        let deferred = maybe_defer_rendering(
            move || match to_html(display_object.as_ref()) {
                Some(html) => embedded_iframe(
                    html,
                    abbreviation_color(text("<rich HTML visualization>")),
                ),
                None => {
                    let error = VisualizationError::InvalidDisplayObject(format!(
                        "{:?}",
                        display_object
                    ));
                    debug!(%error, "HTML extraction produced nothing");
                    error.to_part()
                }
            },
            || text("<rich HTML visualization loading...>"),
        );
        RenderableAndLineAnnotations::new(deferred)
    } else {
        let error =
            VisualizationError::InvalidDisplayObject(format!("{:?}", display_object));
        debug!(?path, %error, "display object has no HTML capability");
        build_one_line_tree_node(error.to_part(), path)
    }
}

/// Wraps a visualization in a foldable container labeled with the node's
/// type name, initially expanded.
fn visualization_container(
    node: &dyn NodeValue,
    path: Option<&str>,
    visualization: RenderableAndLineAnnotations,
) -> RenderableAndLineAnnotations {
    build_custom_foldable_tree_node(
        abbreviation_color(text(format!(
            "<Visualization of {}",
            short_type_name(node.type_name())
        ))),
        siblings(vec![
            fold_condition(
                None,
                Some(siblings(vec![
                    abbreviation_color(text(":")),
                    indented_children(vec![visualization]),
                ])),
            ),
            abbreviation_color(text(">")),
        ]),
        path,
        ExpandState::Expanded,
    )
}

/// Full-substitution composition: round-trip mode keeps the ordinary output
/// plus a trailing note that the visualization is hidden; interactive mode
/// shows the replacement. Body and annotations branch independently.
fn conditioned_on_mode(
    ordinary: RenderableAndLineAnnotations,
    replacement: RenderableAndLineAnnotations,
) -> RenderableAndLineAnnotations {
    let in_roundtrip = with_extra_annotations(
        ordinary,
        vec![comment_color(text("  # Visualization hidden in roundtrip mode"))],
    );
    RenderableAndLineAnnotations {
        renderable: roundtrip_condition(in_roundtrip.renderable, replacement.renderable),
        annotations: roundtrip_condition(in_roundtrip.annotations, replacement.annotations),
    }
}

/// Side-by-side composition: the visualization floats next to the ordinary
/// output in an outlined box, visible in both modes.
fn attached_to_ordinary(
    ordinary: RenderableAndLineAnnotations,
    visualization: RenderableAndLineAnnotations,
) -> RenderableAndLineAnnotations {
    let floating = RenderableAndLineAnnotations::new(floating_annotation_with_separate_focus(
        in_outlined_box(visualization.renderable),
    ));
    siblings_with_annotations(vec![ordinary, floating])
}
