use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

mod context_tests {
    use super::*;
    use crate::visualize::{ActiveVisualizer, NodeValue, VisualizationResult};

    fn tagged(tag: &'static str) -> Rc<crate::visualize::VisualizerFn> {
        Rc::new(move |_node: &dyn NodeValue, _path| VisualizationResult::Invalid {
            repr: tag.to_string(),
        })
    }

    fn active_tag(active: &ActiveVisualizer) -> String {
        match (*active.get())(&0i32, None) {
            VisualizationResult::Invalid { repr } => repr,
            VisualizationResult::NoOverride => "default".to_string(),
            other => panic!("unexpected result from probe visualizer: {:?}", other),
        }
    }

    #[test]
    fn starts_with_the_default_visualizer() {
        let active = ActiveVisualizer::new();
        assert_eq!(active_tag(&active), "default");
        assert_eq!(active.depth(), 1);
    }

    #[test]
    fn scoped_installs_nest_lifo() {
        let active = ActiveVisualizer::new();
        {
            let _outer = active.set_scoped(tagged("outer"));
            assert_eq!(active_tag(&active), "outer");
            {
                let _inner = active.set_scoped(tagged("inner"));
                assert_eq!(active_tag(&active), "inner");
            }
            assert_eq!(active_tag(&active), "outer");
        }
        assert_eq!(active_tag(&active), "default");
    }

    #[test]
    fn scoped_install_restores_on_panic() {
        let active = ActiveVisualizer::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _scope = active.set_scoped(tagged("doomed"));
            panic!("visualizer body failed");
        }));
        assert!(result.is_err());
        assert_eq!(active_tag(&active), "default");
        assert_eq!(active.depth(), 1);
    }

    #[test]
    fn with_visualizer_installs_above_the_default() {
        let active = ActiveVisualizer::with_visualizer(tagged("installed"));
        assert_eq!(active_tag(&active), "installed");
        assert_eq!(active.depth(), 2);
    }
}

mod type_name_tests {
    use crate::visualize::short_type_name;

    #[test]
    fn strips_module_paths() {
        assert_eq!(short_type_name("alloc::string::String"), "String");
        assert_eq!(short_type_name("i32"), "i32");
    }

    #[test]
    fn strips_paths_inside_generic_arguments() {
        assert_eq!(
            short_type_name("alloc::vec::Vec<alloc::string::String>"),
            "Vec<String>"
        );
        assert_eq!(
            short_type_name("std::collections::HashMap<i32, serde_json::value::Value>"),
            "HashMap<i32, Value>"
        );
    }
}

mod display_object_tests {
    use crate::visualize::{to_html, DisplayObject, HtmlDisplay};

    #[test]
    fn html_display_extracts_its_markup() {
        let obj = HtmlDisplay::new("<b>hi</b>");
        assert_eq!(to_html(&obj), Some("<b>hi</b>".to_string()));
    }

    #[test]
    fn empty_extraction_counts_as_absent() {
        let obj = HtmlDisplay::new("");
        assert_eq!(to_html(&obj), None);
    }

    #[test]
    fn plain_values_have_no_html_capability() {
        let obj: &dyn DisplayObject = &7i32;
        assert!(obj.as_repr_html().is_none());
        assert_eq!(to_html(obj), None);
    }
}

mod deferred_tests {
    use super::*;
    use crate::lowering::{force_rendering, maybe_defer_rendering, DeferredPart};
    use crate::rendering::{render_to_text, text, RenderMode, RenderablePart};

    #[test]
    fn shows_placeholder_until_forced() {
        let cell = DeferredPart::new(|| text("real content"), text("loading..."));
        assert!(!cell.is_forced());
        assert_eq!(cell.visible(), text("loading..."));

        assert_eq!(cell.force(), text("real content"));
        assert!(cell.is_forced());
        assert_eq!(cell.visible(), text("real content"));
    }

    #[test]
    fn forcing_twice_runs_the_thunk_once() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let cell = DeferredPart::new(
            move || {
                counter.set(counter.get() + 1);
                text("produced")
            },
            text("pending"),
        );
        cell.force();
        cell.force();
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn force_rendering_reaches_nested_cells() {
        let deferred = maybe_defer_rendering(|| text("inner"), || text("placeholder"));
        let tree = RenderablePart::Siblings(vec![text("prefix "), deferred]);
        assert_eq!(
            render_to_text(&tree, RenderMode::Interactive),
            "prefix placeholder"
        );

        force_rendering(&tree);
        assert_eq!(
            render_to_text(&tree, RenderMode::Interactive),
            "prefix inner"
        );
    }
}

mod rendering_tests {
    use crate::rendering::*;

    #[test]
    fn roundtrip_condition_selects_by_mode() {
        let part = roundtrip_condition(text("plain"), text("fancy"));
        assert_eq!(render_to_text(&part, RenderMode::Roundtrip), "plain");
        assert_eq!(render_to_text(&part, RenderMode::Interactive), "fancy");
    }

    #[test]
    fn fold_condition_follows_the_enclosing_fold_state() {
        let node = |state| {
            build_custom_foldable_tree_node(
                text("label"),
                fold_condition(Some(text(" (folded)")), Some(text(" (open)"))),
                None,
                state,
            )
        };
        assert_eq!(
            render_pair(&node(ExpandState::Expanded), RenderMode::Interactive),
            "label (open)"
        );
        assert_eq!(
            render_pair(&node(ExpandState::Collapsed), RenderMode::Interactive),
            "label (folded)"
        );
    }

    #[test]
    fn embedded_html_falls_back_in_text_rendering() {
        let part = embedded_iframe("<svg/>".to_string(), text("<rich HTML visualization>"));
        assert_eq!(
            render_to_text(&part, RenderMode::Interactive),
            "<rich HTML visualization>"
        );
    }

    #[test]
    fn extra_annotations_render_after_the_body() {
        let pair = with_extra_annotations(
            build_one_line_tree_node(text("value"), None),
            vec![comment_color(text("  # note"))],
        );
        assert_eq!(
            render_pair(&pair, RenderMode::Roundtrip),
            "value  # note"
        );
    }

    #[test]
    fn indented_children_nest_by_depth() {
        let pair = build_custom_foldable_tree_node(
            text("parent"),
            siblings(vec![
                fold_condition(
                    None,
                    Some(indented_children(vec![build_one_line_tree_node(
                        text("child"),
                        None,
                    )])),
                ),
                text("end"),
            ]),
            None,
            ExpandState::Expanded,
        );
        assert_eq!(
            render_pair(&pair, RenderMode::Interactive),
            "parent\n  child\nend"
        );
    }
}

mod error_tests {
    use crate::error::VisualizationError;
    use crate::rendering::{RenderablePart, Style};

    #[test]
    fn invalid_result_names_the_accepted_variants() {
        let message = VisualizationError::InvalidResult("42".to_string()).to_string();
        assert!(message.contains("42"));
        assert!(message.contains(
            "expected IPythonVisualization, CustomTreescopeVisualization, \
             ChildAutovisualizer, or None"
        ));
    }

    #[test]
    fn errors_lower_to_error_styled_fragments() {
        let part = VisualizationError::InvalidDisplayObject("7".to_string()).to_part();
        match part {
            RenderablePart::Styled(Style::Error, inner) => match *inner {
                RenderablePart::Text(message) => {
                    assert!(message.contains("invalid display object"));
                    assert!(message.contains('7'));
                }
                other => panic!("expected text inside the error style, got {:?}", other),
            },
            other => panic!("expected an error-styled fragment, got {:?}", other),
        }
    }
}
