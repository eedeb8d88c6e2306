use super::{dedent, locate_unwrap_target, UnwrapTarget};
use crate::parse::SourceParser;
use crate::span::TextSpan;
use crate::wrap::WrapKind;

fn locate(text: &str) -> Option<UnwrapTarget> {
    let mut parser = SourceParser::python().unwrap();
    locate_unwrap_target(&mut parser, text)
}

fn span_of(text: &str, needle: &str) -> TextSpan {
    let start = text.find(needle).unwrap();
    TextSpan::new(start, start + needle.len())
}

#[test]
fn test_locates_content_value() {
    let text = "Control(\n    content=Text(\"hi\"),\n)";
    assert_eq!(
        locate(text),
        Some(UnwrapTarget {
            span: span_of(text, "Text(\"hi\")"),
            kind: WrapKind::Content,
        })
    );
}

#[test]
fn test_locates_sole_controls_element() {
    let text = "Control(\n    controls=[\n        Text(\"hi\"),\n    ]\n)";
    assert_eq!(
        locate(text),
        Some(UnwrapTarget {
            span: span_of(text, "Text(\"hi\")"),
            kind: WrapKind::Controls,
        })
    );
}

#[test]
fn test_content_span_covers_whole_value() {
    let text = "Control(content=Text(\"a\").with_x(1))";
    let target = locate(text).unwrap();
    assert_eq!(target.span, span_of(text, "Text(\"a\").with_x(1)"));
}

#[test]
fn test_refuses_controls_with_several_elements() {
    assert_eq!(locate("Control(controls=[Text(\"a\"), Text(\"b\")])"), None);
}

#[test]
fn test_refuses_empty_controls() {
    assert_eq!(locate("Control(controls=[])"), None);
}

#[test]
fn test_comment_in_controls_is_not_an_element() {
    let text = "Column(\n    controls=[\n        # header\n        Text(\"a\"),\n    ],\n)";
    let target = locate(text).unwrap();
    assert_eq!(target.span, span_of(text, "Text(\"a\")"));
}

#[test]
fn test_comment_before_first_argument() {
    let text = "Control(\n    # note\n    content=Text(\"a\"),\n)";
    let target = locate(text).unwrap();
    assert_eq!(target.kind, WrapKind::Content);
    assert_eq!(target.span, span_of(text, "Text(\"a\")"));
}

#[test]
fn test_ignores_keyword_arguments_of_nested_calls() {
    let text = "Control(\n    on_click=handler(content=other()),\n    content=Text(\"a\"),\n)";
    let target = locate(text).unwrap();
    assert_eq!(target.kind, WrapKind::Content);
    assert_eq!(target.span, span_of(text, "Text(\"a\")"));
}

#[test]
fn test_positional_argument_first_locks_wrapper_depth() {
    let text = "Card(Text(\"x\", size=1), content=Text(\"a\"))";
    let target = locate(text).unwrap();
    assert_eq!(target.kind, WrapKind::Content);
    assert_eq!(target.span, span_of(text, "Text(\"a\")"));
}

#[test]
fn test_positional_argument_before_controls() {
    let text = "Column(header(title=\"x\", content=a()), controls=[Text(\"b\")])";
    let target = locate(text).unwrap();
    assert_eq!(target.kind, WrapKind::Controls);
    assert_eq!(target.span, span_of(text, "Text(\"b\")"));
}

#[test]
fn test_keyword_arguments_inside_positional_argument_are_ignored() {
    assert_eq!(locate("Row(Column(controls=[Text(\"a\")]))"), None);
    assert_eq!(locate("Row(Column(content=Text(\"a\")))"), None);
}

#[test]
fn test_first_matching_argument_wins() {
    let text = "Stack(content=Text(\"a\"), controls=[Text(\"b\")])";
    let target = locate(text).unwrap();
    assert_eq!(target.kind, WrapKind::Content);
    assert_eq!(target.span, span_of(text, "Text(\"a\")"));
}

#[test]
fn test_content_after_ambiguous_controls() {
    let text = "Stack(controls=[a(), b()], content=Text(\"c\"))";
    let target = locate(text).unwrap();
    assert_eq!(target.kind, WrapKind::Content);
    assert_eq!(target.span, span_of(text, "Text(\"c\")"));
}

#[test]
fn test_no_wrapper_arguments() {
    assert_eq!(locate("Text(\"hi\", size=12)"), None);
    assert_eq!(locate("Text(\"hi\")"), None);
}

#[test]
fn test_dedent_strips_one_level_per_kind() {
    let text = "Text(\n        \"hi\",\n    )";
    assert_eq!(
        dedent(text, "    ", WrapKind::Content),
        "Text(\n    \"hi\",\n)"
    );
    let text = "Text(\n            \"hi\",\n        )";
    assert_eq!(
        dedent(text, "    ", WrapKind::Controls),
        "Text(\n    \"hi\",\n)"
    );
}

#[test]
fn test_dedent_leaves_shallow_lines() {
    let text = "Text(\n  \"\"\"doc\nstring\"\"\",\n    )";
    assert_eq!(
        dedent(text, "    ", WrapKind::Content),
        "Text(\n  \"\"\"doc\nstring\"\"\",\n)"
    );
}
