use crate::rendering::parts::*;

/// Literal text fragment
pub fn text(s: impl Into<String>) -> RenderablePart {
    RenderablePart::Text(s.into())
}

/// Fragment that renders as nothing
pub fn empty_part() -> RenderablePart {
    RenderablePart::Empty
}

pub fn error_color(part: RenderablePart) -> RenderablePart {
    RenderablePart::Styled(Style::Error, Box::new(part))
}

pub fn comment_color(part: RenderablePart) -> RenderablePart {
    RenderablePart::Styled(Style::Comment, Box::new(part))
}

pub fn abbreviation_color(part: RenderablePart) -> RenderablePart {
    RenderablePart::Styled(Style::Abbreviation, Box::new(part))
}

/// Concatenates fragments onto one logical line
pub fn siblings(parts: Vec<RenderablePart>) -> RenderablePart {
    RenderablePart::Siblings(parts)
}

/// Branches on the fold state of the nearest enclosing foldable node.
/// Either branch may be omitted; a missing branch renders as nothing.
pub fn fold_condition(
    collapsed: Option<RenderablePart>,
    expanded: Option<RenderablePart>,
) -> RenderablePart {
    RenderablePart::FoldCondition {
        collapsed: Box::new(collapsed.unwrap_or(RenderablePart::Empty)),
        expanded: Box::new(expanded.unwrap_or(RenderablePart::Empty)),
    }
}

/// Branches on the presentation mode
pub fn roundtrip_condition(
    roundtrip: RenderablePart,
    not_roundtrip: RenderablePart,
) -> RenderablePart {
    RenderablePart::RoundtripCondition {
        roundtrip: Box::new(roundtrip),
        not_roundtrip: Box::new(not_roundtrip),
    }
}

/// Indents child fragments one level below the current line
pub fn indented_children(children: Vec<RenderableAndLineAnnotations>) -> RenderablePart {
    RenderablePart::IndentedChildren(children)
}

/// Builds a tree node that always renders on a single line
pub fn build_one_line_tree_node(
    line: RenderablePart,
    path: Option<&str>,
) -> RenderableAndLineAnnotations {
    RenderableAndLineAnnotations::new(RenderablePart::OneLineNode {
        line: Box::new(line),
        path: path.map(str::to_owned),
    })
}

/// Builds a foldable tree node with an explicit initial fold state
pub fn build_custom_foldable_tree_node(
    label: RenderablePart,
    contents: RenderablePart,
    path: Option<&str>,
    expand_state: ExpandState,
) -> RenderableAndLineAnnotations {
    RenderableAndLineAnnotations::new(RenderablePart::FoldableNode {
        label: Box::new(label),
        contents: Box::new(contents),
        path: path.map(str::to_owned),
        expand_state,
    })
}

/// Wraps a fragment as a floating annotation that keeps its own focus,
/// separate from the node it is attached to
pub fn floating_annotation_with_separate_focus(part: RenderablePart) -> RenderablePart {
    RenderablePart::FloatingAnnotation(Box::new(part))
}

pub fn in_outlined_box(part: RenderablePart) -> RenderablePart {
    RenderablePart::OutlinedBox(Box::new(part))
}

/// Embeds rich HTML content, with a fallback fragment for text-only surfaces
pub fn embedded_iframe(embedded_html: String, fallback_in_text_mode: RenderablePart) -> RenderablePart {
    RenderablePart::EmbeddedHtml {
        html: embedded_html,
        fallback: Box::new(fallback_in_text_mode),
    }
}

/// Concatenates several (renderable, annotations) pairs, keeping renderables
/// and annotations in their separate streams
pub fn siblings_with_annotations(
    parts: Vec<RenderableAndLineAnnotations>,
) -> RenderableAndLineAnnotations {
    let mut renderables = Vec::with_capacity(parts.len());
    let mut annotations = Vec::with_capacity(parts.len());
    for part in parts {
        renderables.push(part.renderable);
        annotations.push(part.annotations);
    }
    RenderableAndLineAnnotations {
        renderable: RenderablePart::Siblings(renderables),
        annotations: RenderablePart::Siblings(annotations),
    }
}

/// Appends extra end-of-line annotations to an existing pair
pub fn with_extra_annotations(
    main: RenderableAndLineAnnotations,
    extra_annotations: Vec<RenderablePart>,
) -> RenderableAndLineAnnotations {
    let mut annotations = vec![main.annotations];
    annotations.extend(extra_annotations);
    RenderableAndLineAnnotations {
        renderable: main.renderable,
        annotations: RenderablePart::Siblings(annotations),
    }
}
