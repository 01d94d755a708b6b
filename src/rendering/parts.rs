use crate::lowering::DeferredPart;
use std::rc::Rc;

/// Semantic text styles understood by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Inline render-time error messages
    Error,
    /// Trailing comments such as roundtrip-mode notes
    Comment,
    /// Abbreviated/structural punctuation around visualizations
    Abbreviation,
}

/// Initial fold state of a foldable tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandState {
    Collapsed,
    Expanded,
}

/// A renderable fragment of the output tree.
///
/// Fragments are plain data; how they appear is decided by the presentation
/// layer (see `rendering::text` for the plain-text lowering). Construction
/// goes through the helpers in `rendering::builders`.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderablePart {
    /// Renders as nothing in every mode
    Empty,
    /// Literal text
    Text(String),
    /// Style applied to an inner fragment
    Styled(Style, Box<RenderablePart>),
    /// Fragments rendered in sequence on the same logical line
    Siblings(Vec<RenderablePart>),
    /// Chooses a branch based on the enclosing node's fold state
    FoldCondition {
        collapsed: Box<RenderablePart>,
        expanded: Box<RenderablePart>,
    },
    /// Chooses a branch based on the presentation mode
    RoundtripCondition {
        roundtrip: Box<RenderablePart>,
        not_roundtrip: Box<RenderablePart>,
    },
    /// Child fragments indented one level below the current line
    IndentedChildren(Vec<RenderableAndLineAnnotations>),
    /// A node that can be folded shut or expanded open
    FoldableNode {
        label: Box<RenderablePart>,
        contents: Box<RenderablePart>,
        path: Option<String>,
        expand_state: ExpandState,
    },
    /// A node that always occupies a single line
    OneLineNode {
        line: Box<RenderablePart>,
        path: Option<String>,
    },
    /// An annotation that floats next to the node it belongs to and can be
    /// focused independently of it
    FloatingAnnotation(Box<RenderablePart>),
    /// Contents drawn inside an outlined box
    OutlinedBox(Box<RenderablePart>),
    /// Rich HTML content with a plain-text fallback for text surfaces
    EmbeddedHtml {
        html: String,
        fallback: Box<RenderablePart>,
    },
    /// Content produced lazily; shows a placeholder until forced
    Deferred(Rc<DeferredPart>),
}

/// A fragment paired with annotations that belong at the end of its line.
///
/// Annotations travel separately so that a parent can collect them after its
/// own punctuation (trailing commas and the like) without re-walking the
/// renderable body.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableAndLineAnnotations {
    pub renderable: RenderablePart,
    pub annotations: RenderablePart,
}

impl RenderableAndLineAnnotations {
    pub fn new(renderable: RenderablePart) -> Self {
        Self {
            renderable,
            annotations: RenderablePart::Empty,
        }
    }
}

impl From<RenderablePart> for RenderableAndLineAnnotations {
    fn from(renderable: RenderablePart) -> Self {
        Self::new(renderable)
    }
}
