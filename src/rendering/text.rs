use crate::rendering::parts::*;

/// Presentation mode selected by the display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Rich interactive display; foldable nodes honor their fold state
    Interactive,
    /// Plain re-parseable text; visualizations fall back to ordinary output
    Roundtrip,
}

/// Lowers a fragment tree to plain text in the given mode
pub fn render_to_text(part: &RenderablePart, mode: RenderMode) -> String {
    let mut renderer = TextRenderer::new(mode);
    renderer.walk(part, 0, true);
    renderer.output
}

/// Lowers a fragment and its end-of-line annotations together
pub fn render_pair(pair: &RenderableAndLineAnnotations, mode: RenderMode) -> String {
    let mut renderer = TextRenderer::new(mode);
    renderer.walk(&pair.renderable, 0, true);
    renderer.walk(&pair.annotations, 0, true);
    renderer.output
}

struct TextRenderer {
    mode: RenderMode,
    output: String,
}

impl TextRenderer {
    fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            output: String::new(),
        }
    }

    fn indent(depth: usize) -> String {
        "  ".repeat(depth)
    }

    /// `expanded` is the fold state of the nearest enclosing foldable node;
    /// the root counts as expanded.
    fn walk(&mut self, part: &RenderablePart, depth: usize, expanded: bool) {
        match part {
            RenderablePart::Empty => {}
            RenderablePart::Text(s) => self.output.push_str(s),
            // Styles are presentation hints; plain text drops them.
            RenderablePart::Styled(_, inner) => self.walk(inner, depth, expanded),
            RenderablePart::Siblings(parts) => {
                for part in parts {
                    self.walk(part, depth, expanded);
                }
            }
            RenderablePart::FoldCondition {
                collapsed,
                expanded: expanded_branch,
            } => {
                if expanded {
                    self.walk(expanded_branch, depth, expanded);
                } else {
                    self.walk(collapsed, depth, expanded);
                }
            }
            RenderablePart::RoundtripCondition {
                roundtrip,
                not_roundtrip,
            } => match self.mode {
                RenderMode::Roundtrip => self.walk(roundtrip, depth, expanded),
                RenderMode::Interactive => self.walk(not_roundtrip, depth, expanded),
            },
            RenderablePart::IndentedChildren(children) => {
                for child in children {
                    self.output.push('\n');
                    self.output.push_str(&Self::indent(depth + 1));
                    self.walk(&child.renderable, depth + 1, expanded);
                    self.walk(&child.annotations, depth + 1, expanded);
                }
                self.output.push('\n');
                self.output.push_str(&Self::indent(depth));
            }
            RenderablePart::FoldableNode {
                label,
                contents,
                expand_state,
                ..
            } => {
                let expanded = matches!(expand_state, ExpandState::Expanded);
                self.walk(label, depth, expanded);
                self.walk(contents, depth, expanded);
            }
            RenderablePart::OneLineNode { line, .. } => self.walk(line, depth, expanded),
            RenderablePart::FloatingAnnotation(inner) => {
                self.output.push(' ');
                self.walk(inner, depth, expanded);
            }
            RenderablePart::OutlinedBox(inner) => {
                self.output.push('[');
                self.walk(inner, depth, expanded);
                self.output.push(']');
            }
            RenderablePart::EmbeddedHtml { fallback, .. } => {
                // Text surfaces cannot host HTML in either mode.
                self.walk(fallback, depth, expanded);
            }
            RenderablePart::Deferred(cell) => {
                let visible = cell.visible();
                self.walk(&visible, depth, expanded);
            }
        }
    }
}
