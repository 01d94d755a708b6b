//! Deferred production of expensive fragment content.
//!
//! A deferred fragment holds a placeholder to show immediately and a thunk
//! that produces the real content. The display surface decides when (or
//! whether) to force the thunk; tree construction never blocks on it.

use crate::rendering::parts::{RenderablePart, RenderableAndLineAnnotations};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Thunk = Box<dyn FnOnce() -> RenderablePart>;

/// A lazily produced fragment: placeholder now, real content on `force`.
pub struct DeferredPart {
    placeholder: RenderablePart,
    thunk: RefCell<Option<Thunk>>,
    resolved: RefCell<Option<RenderablePart>>,
}

impl DeferredPart {
    pub fn new(thunk: impl FnOnce() -> RenderablePart + 'static, placeholder: RenderablePart) -> Rc<Self> {
        Rc::new(Self {
            placeholder,
            thunk: RefCell::new(Some(Box::new(thunk))),
            resolved: RefCell::new(None),
        })
    }

    /// Runs the thunk if it has not run yet and returns the produced content.
    /// Forcing twice returns the cached content without re-running the thunk.
    pub fn force(&self) -> RenderablePart {
        if let Some(resolved) = self.resolved.borrow().as_ref() {
            return resolved.clone();
        }
        // The thunk is present exactly when `resolved` is empty.
        let produced = match self.thunk.borrow_mut().take() {
            Some(thunk) => thunk(),
            None => RenderablePart::Empty,
        };
        *self.resolved.borrow_mut() = Some(produced.clone());
        produced
    }

    /// The content to show right now: resolved content if forced, the
    /// placeholder otherwise.
    pub fn visible(&self) -> RenderablePart {
        match self.resolved.borrow().as_ref() {
            Some(resolved) => resolved.clone(),
            None => self.placeholder.clone(),
        }
    }

    pub fn is_forced(&self) -> bool {
        self.resolved.borrow().is_some()
    }
}

impl fmt::Debug for DeferredPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredPart")
            .field("placeholder", &self.placeholder)
            .field("resolved", &self.resolved.borrow())
            .finish_non_exhaustive()
    }
}

/// Equality over observable state; the pending thunk is not comparable.
impl PartialEq for DeferredPart {
    fn eq(&self, other: &Self) -> bool {
        self.placeholder == other.placeholder && *self.resolved.borrow() == *other.resolved.borrow()
    }
}

/// Wraps expensive rendering work behind a placeholder. The returned fragment
/// shows `placeholder_thunk`'s output until the host forces the real thunk.
pub fn maybe_defer_rendering(
    thunk: impl FnOnce() -> RenderablePart + 'static,
    placeholder_thunk: impl FnOnce() -> RenderablePart,
) -> RenderablePart {
    RenderablePart::Deferred(DeferredPart::new(thunk, placeholder_thunk()))
}

/// Forces every deferred cell reachable from `part`. Display-surface helper
/// for hosts that materialize the whole tree at once.
pub fn force_rendering(part: &RenderablePart) {
    match part {
        RenderablePart::Deferred(cell) => {
            let produced = cell.force();
            force_rendering(&produced);
        }
        RenderablePart::Empty | RenderablePart::Text(_) => {}
        RenderablePart::Styled(_, inner)
        | RenderablePart::FloatingAnnotation(inner)
        | RenderablePart::OutlinedBox(inner) => force_rendering(inner),
        RenderablePart::Siblings(parts) => {
            for part in parts {
                force_rendering(part);
            }
        }
        RenderablePart::FoldCondition {
            collapsed,
            expanded,
        } => {
            force_rendering(collapsed);
            force_rendering(expanded);
        }
        RenderablePart::RoundtripCondition {
            roundtrip,
            not_roundtrip,
        } => {
            force_rendering(roundtrip);
            force_rendering(not_roundtrip);
        }
        RenderablePart::IndentedChildren(children) => {
            for child in children {
                force_pair(child);
            }
        }
        RenderablePart::FoldableNode {
            label, contents, ..
        } => {
            force_rendering(label);
            force_rendering(contents);
        }
        RenderablePart::OneLineNode { line, .. } => force_rendering(line),
        RenderablePart::EmbeddedHtml { fallback, .. } => force_rendering(fallback),
    }
}

/// Forces every deferred cell in a fragment and its annotations.
pub fn force_pair(pair: &RenderableAndLineAnnotations) {
    force_rendering(&pair.renderable);
    force_rendering(&pair.annotations);
}
