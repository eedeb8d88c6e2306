use super::{Action, Refactorer};
use crate::document::{Buffer, Document, IndentationPreference};
use crate::error::RefactorError;
use crate::span::TextSpan;
use crate::wrap::WrapKind;

fn refactorer() -> Refactorer {
    Refactorer::python("Control").unwrap()
}

fn caret_on(text: &str, needle: &str) -> Buffer {
    let offset = text.find(needle).unwrap();
    Buffer::new(text, IndentationPreference::default()).with_selection(TextSpan::caret(offset))
}

#[test]
fn test_content_wrap_then_unwrap() {
    let mut doc = caret_on("Text(\"hi\")", "Text");
    let mut refactorer = refactorer();

    let applied = refactorer.wrap(&mut doc, WrapKind::Content).unwrap();
    assert_eq!(doc.text(), "Control(\n    content=Text(\"hi\"),\n)");
    assert_eq!(applied.selection, TextSpan::new(0, 7));
    assert_eq!(doc.text_in(doc.selection()), Some("Control"));

    refactorer.unwrap(&mut doc).unwrap();
    assert_eq!(doc.text(), "Text(\"hi\")");
    assert_eq!(doc.text_in(doc.selection()), Some("Text(\"hi\")"));
}

#[test]
fn test_controls_wrap_then_unwrap() {
    let mut doc = caret_on("Text(\"hi\")", "Text");
    let mut refactorer = refactorer();

    refactorer.wrap(&mut doc, WrapKind::Controls).unwrap();
    assert_eq!(
        doc.text(),
        "Control(\n    controls=[\n        Text(\"hi\"),\n    ]\n)"
    );

    refactorer.unwrap(&mut doc).unwrap();
    assert_eq!(doc.text(), "Text(\"hi\")");
}

#[test]
fn test_wrap_unwrap_wrap_is_stable() {
    let original = "page.add(\n    Text(\n        \"hi\",\n    ),\n)\n";
    let wrapped = "page.add(\n    Control(\n        content=Text(\n            \"hi\",\n        ),\n    ),\n)\n";
    let mut doc = caret_on(original, "Text");
    let mut refactorer = refactorer();

    refactorer.wrap(&mut doc, WrapKind::Content).unwrap();
    assert_eq!(doc.text(), wrapped);

    refactorer.unwrap(&mut doc).unwrap();
    assert_eq!(doc.text(), original);

    refactorer.wrap(&mut doc, WrapKind::Content).unwrap();
    assert_eq!(doc.text(), wrapped);
}

#[test]
fn test_controls_round_trip_with_base_indentation() {
    let original = "def view(page):\n    page.add(Text(\n        \"hi\",\n    ))\n";
    let mut doc = caret_on(original, "Text");
    let mut refactorer = refactorer();

    refactorer.wrap(&mut doc, WrapKind::Controls).unwrap();
    assert_eq!(
        doc.text(),
        "def view(page):\n    page.add(Control(\n        controls=[\n            Text(\n                \"hi\",\n            ),\n        ]\n    ))\n"
    );

    refactorer.unwrap(&mut doc).unwrap();
    assert_eq!(doc.text(), original);
}

#[test]
fn test_controls_unwrap_refused_for_several_elements() {
    let text = "Control(controls=[Text(\"a\"), Text(\"b\")])";
    let mut doc = caret_on(text, "Control");
    let mut refactorer = refactorer();

    assert_eq!(
        refactorer.unwrap(&mut doc),
        Err(RefactorError::AmbiguousUnwrap)
    );
    assert_eq!(doc.text(), text);
}

#[test]
fn test_unwrap_without_call_content_is_refused() {
    let text = "Control(content=label)";
    let mut doc = caret_on(text, "Control");
    let mut refactorer = refactorer();

    assert_eq!(
        refactorer.unwrap(&mut doc),
        Err(RefactorError::AmbiguousUnwrap)
    );
    assert_eq!(doc.text(), text);
}

#[test]
fn test_unwrap_refused_when_call_is_only_part_of_the_value() {
    let mut refactorer = refactorer();
    for text in [
        "Control(\n    content=Text(\"a\").with_x(1),\n)",
        "Control(content=items(1)[0])",
    ] {
        let mut doc = caret_on(text, "Control");
        assert_eq!(
            refactorer.unwrap(&mut doc),
            Err(RefactorError::AmbiguousUnwrap)
        );
        assert_eq!(doc.text(), text);
    }
}

#[test]
fn test_unwrap_chained_value_inside_controls() {
    let text = "Control(\n    controls=[\n        Text(\"a\").with_x(1),\n    ]\n)";
    let mut doc = caret_on(text, "Control");
    assert_eq!(
        refactorer().unwrap(&mut doc),
        Err(RefactorError::AmbiguousUnwrap)
    );
    assert_eq!(doc.text(), text);
}

#[test]
fn test_unwrap_with_positional_argument_first() {
    let text = "Card(\n    Text(\"x\", size=1),\n    content=Text(\"a\"),\n)";
    let mut doc = caret_on(text, "Card");
    refactorer().unwrap(&mut doc).unwrap();
    assert_eq!(doc.text(), "Text(\"a\")");
}

#[test]
fn test_unwrap_ignores_controls_of_positional_argument() {
    let text = "Row(Column(controls=[Text(\"a\")]))";
    let mut doc = caret_on(text, "Row");
    assert_eq!(
        refactorer().unwrap(&mut doc),
        Err(RefactorError::AmbiguousUnwrap)
    );
    assert_eq!(doc.text(), text);
}

#[test]
fn test_wrap_multi_selection_in_controls() {
    let text = "Column(\n    controls=[\n        Text(\"a\"),\n        Text(\"b\"),\n    ],\n)";
    let start = text.find("Text").unwrap();
    let end = text.rfind("),").unwrap() + 2;
    let mut doc = Buffer::new(text, IndentationPreference::default())
        .with_selection(TextSpan::new(start, end));
    let mut refactorer = refactorer();

    assert_eq!(refactorer.actions(&doc), vec![Action::WrapControls]);
    refactorer.wrap(&mut doc, WrapKind::Controls).unwrap();
    assert_eq!(
        doc.text(),
        "Column(\n    controls=[\n        Control(\n            controls=[\n                Text(\"a\"),\n                Text(\"b\"),\n            ]\n        ),\n    ],\n)"
    );
}

#[test]
fn test_selection_whitespace_is_trimmed() {
    let text = "Row(\n    controls=[\n        a(),\n        b(),\n    ],\n)";
    let start = text.find("        a()").unwrap();
    let end = text.find("    ],").unwrap();
    let mut doc = Buffer::new(text, IndentationPreference::default())
        .with_selection(TextSpan::new(start, end));
    let mut refactorer = refactorer();

    let applied = refactorer.wrap(&mut doc, WrapKind::Controls).unwrap();
    assert_eq!(applied.span.start, text.find("a()").unwrap());
    assert!(doc.text().ends_with("            ]\n        ),\n    ],\n)"));
}

#[test]
fn test_malformed_selection_leaves_document_untouched() {
    let text = "bar(1, baz(2";
    let mut doc = Buffer::new(text, IndentationPreference::default())
        .with_selection(TextSpan::new(0, text.len()));
    let mut refactorer = refactorer();

    assert!(refactorer.wrap(&mut doc, WrapKind::Controls).is_err());
    assert_eq!(doc.text(), text);
    assert!(refactorer.actions(&doc).is_empty());
}

#[test]
fn test_actions_for_single_call() {
    let doc = caret_on("page.add(Text(\"hi\"))", "Text");
    assert_eq!(
        refactorer().actions(&doc),
        vec![Action::WrapContent, Action::WrapControls]
    );
}

#[test]
fn test_actions_for_wrapper() {
    let doc = caret_on("Control(\n    content=Text(\"hi\"),\n)", "Control");
    assert_eq!(
        refactorer().actions(&doc),
        vec![
            Action::WrapContent,
            Action::WrapControls,
            Action::RemoveWrapper
        ]
    );
}

#[test]
fn test_no_actions_without_target() {
    let doc = caret_on("x = 1\n", "1");
    assert!(refactorer().actions(&doc).is_empty());
}

#[test]
fn test_tab_indented_document() {
    let text = "if True:\n\tpage.add(Text(\"hi\"))\n";
    let mut doc = Buffer::new(
        text,
        IndentationPreference {
            uses_spaces: false,
            width: 4,
        },
    )
    .with_selection(TextSpan::caret(text.find("Text").unwrap()));
    let mut refactorer = Refactorer::python("Container").unwrap();

    refactorer.wrap(&mut doc, WrapKind::Content).unwrap();
    assert_eq!(
        doc.text(),
        "if True:\n\tpage.add(Container(\n\t\tcontent=Text(\"hi\"),\n\t))\n"
    );
    refactorer.unwrap(&mut doc).unwrap();
    assert_eq!(doc.text(), text);
}

#[test]
fn test_rejected_edit_is_reported() {
    struct ReadOnly(Buffer);

    impl Document for ReadOnly {
        fn text(&self) -> &str {
            self.0.text()
        }
        fn indentation(&self) -> IndentationPreference {
            self.0.indentation()
        }
        fn selection(&self) -> TextSpan {
            self.0.selection()
        }
        fn apply_edit(&mut self, _span: TextSpan, _new_text: &str) -> bool {
            false
        }
        fn set_selection(&mut self, span: TextSpan) {
            self.0.set_selection(span);
        }
    }

    let mut doc = ReadOnly(caret_on("Text(\"hi\")", "Text"));
    assert_eq!(
        refactorer().wrap(&mut doc, WrapKind::Content),
        Err(RefactorError::EditRejected)
    );
    assert_eq!(doc.selection(), TextSpan::caret(0));
}
