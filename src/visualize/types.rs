use crate::rendering::parts::RenderableAndLineAnnotations;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A value being rendered. Opaque to the visualization layer beyond its
/// debug representation and type name; the enclosing renderer downcasts
/// through `as_any` to recurse into concrete structures.
pub trait NodeValue: fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// Fully qualified type name of the underlying value
    fn type_name(&self) -> &'static str;
}

impl<T: fmt::Debug + Any> NodeValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Strips module paths from a type name, inside generic arguments too,
/// e.g. `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::new();
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
    out
}

/// A user-pluggable visualizer: maps a node and its path to an override
/// instruction. Must be referentially stable within one render pass.
pub type VisualizerFn = dyn Fn(&dyn NodeValue, Option<&str>) -> VisualizationResult;

/// The default visualizer, which never overrides anything.
pub fn no_op_visualizer() -> Rc<VisualizerFn> {
    Rc::new(|_node, _path| VisualizationResult::NoOverride)
}

/// What a visualizer may ask the renderer to do for one node.
pub enum VisualizationResult {
    /// Defer entirely to ordinary rendering
    NoOverride,
    /// Show a rich display object; `replace` controls whether ordinary
    /// rendering is substituted or augmented
    IPythonVisualization {
        display_object: Box<dyn DisplayObject>,
        replace: bool,
    },
    /// A pre-built fragment supplied by the visualizer; always replaces
    /// ordinary rendering
    CustomTreescopeVisualization {
        rendering: RenderableAndLineAnnotations,
    },
    /// Install a different visualizer for the recursive render of this
    /// node's subtree
    ChildAutovisualizer { autovisualizer: Rc<VisualizerFn> },
    /// Anything a visualizer produced that is none of the above; carries the
    /// offending value's repr and renders as an inline error
    Invalid { repr: String },
}

impl fmt::Debug for VisualizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOverride => f.write_str("NoOverride"),
            Self::IPythonVisualization {
                display_object,
                replace,
            } => f
                .debug_struct("IPythonVisualization")
                .field("display_object", display_object)
                .field("replace", replace)
                .finish(),
            Self::CustomTreescopeVisualization { rendering } => f
                .debug_struct("CustomTreescopeVisualization")
                .field("rendering", rendering)
                .finish(),
            Self::ChildAutovisualizer { .. } => {
                f.debug_struct("ChildAutovisualizer").finish_non_exhaustive()
            }
            Self::Invalid { repr } => f.debug_struct("Invalid").field("repr", repr).finish(),
        }
    }
}

/// Capability for objects that can produce an HTML rendering of themselves.
pub trait ReprHtml {
    /// HTML markup for this object, or `None` if none is available right now
    fn repr_html(&self) -> Option<String>;
}

/// An object handed to `IPythonVisualization`. HTML-capable objects override
/// `as_repr_html`; everything else is reported as an invalid display object.
pub trait DisplayObject: fmt::Debug {
    fn as_repr_html(&self) -> Option<&dyn ReprHtml> {
        None
    }
}

/// Extracts HTML from a display object. Empty extraction counts as absent;
/// markup validity is the object's own contract and is not checked here.
pub fn to_html(obj: &dyn DisplayObject) -> Option<String> {
    let html = obj.as_repr_html()?.repr_html()?;
    if html.is_empty() {
        None
    } else {
        Some(html)
    }
}

/// A ready-made HTML-capable display object wrapping a markup string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDisplay {
    pub html: String,
}

impl HtmlDisplay {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl ReprHtml for HtmlDisplay {
    fn repr_html(&self) -> Option<String> {
        Some(self.html.clone())
    }
}

impl DisplayObject for HtmlDisplay {
    fn as_repr_html(&self) -> Option<&dyn ReprHtml> {
        Some(self)
    }
}

// Plain values are valid display objects without any HTML capability; they
// surface as invalid-display-object errors with their debug repr.
macro_rules! opaque_display_object {
    ($($ty:ty),* $(,)?) => {
        $(impl DisplayObject for $ty {})*
    };
}

opaque_display_object!(i8, i16, i32, i64, i128, isize);
opaque_display_object!(u8, u16, u32, u64, u128, usize);
opaque_display_object!(f32, f64, bool, char, String, &'static str);
