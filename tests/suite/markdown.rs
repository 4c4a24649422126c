//! Markdown rendering and image-directive stripping.

use ratatui::style::Style;

use dossier::markdown::{render_markdown, strip_image_directives};

use crate::common::lines_to_text;

#[test]
fn strips_single_directive_mid_sentence() {
    let input = "Sales rose sharply. ![chart](http://host/plot.png) Growth continued.";
    assert_eq!(
        strip_image_directives(input),
        "Sales rose sharply.  Growth continued."
    );
}

#[test]
fn strips_multiple_directives() {
    let input = "![a](one.png)text![b](two.png)";
    assert_eq!(strip_image_directives(input), "text");
}

#[test]
fn tolerates_nested_brackets_and_parens() {
    let input = "x ![alt [inner]](path(1).png) y";
    assert_eq!(strip_image_directives(input), "x  y");
}

#[test]
fn incomplete_directives_are_kept_whole() {
    for input in ["![dangling](no close", "![no paren] after", "text ![", "!"] {
        assert_eq!(strip_image_directives(input), input, "input: {input:?}");
    }
}

#[test]
fn plain_text_passes_through_unchanged() {
    let input = "No images here, just 100% text (with parens) [and brackets].";
    assert_eq!(strip_image_directives(input), input);
}

#[test]
fn renders_headings_and_paragraphs() {
    let lines = render_markdown("# Title\n\nBody text.", Style::default());
    let text = lines_to_text(&lines);
    assert!(text.contains("Title"));
    assert!(text.contains("Body text."));
}

#[test]
fn renders_list_markers() {
    let text = lines_to_text(&render_markdown("- alpha\n- beta", Style::default()));
    assert!(text.contains("• alpha"));
    assert!(text.contains("• beta"));

    let numbered = lines_to_text(&render_markdown("1. one\n2. two", Style::default()));
    assert!(numbered.contains("1. one"));
    assert!(numbered.contains("2. two"));
}

#[test]
fn renders_fenced_code_blocks() {
    let text = lines_to_text(&render_markdown(
        "```python\ndf.head()\n```",
        Style::default(),
    ));
    assert!(text.contains("df.head()"));
}

#[test]
fn joins_table_cells_per_row() {
    let text = lines_to_text(&render_markdown(
        "| Region | Sales |\n| --- | --- |\n| EU | 42 |",
        Style::default(),
    ));
    assert!(text.contains("Region │ Sales"));
    assert!(text.contains("EU │ 42"));
}

#[test]
fn image_alt_text_is_not_emitted() {
    let text = lines_to_text(&render_markdown(
        "before ![hidden alt](chart.png) after",
        Style::default(),
    ));
    assert!(!text.contains("hidden alt"));
    assert!(text.contains("before"));
    assert!(text.contains("after"));
}

#[test]
fn links_keep_text_and_show_target() {
    let text = lines_to_text(&render_markdown(
        "see [the docs](https://example.com)",
        Style::default(),
    ));
    assert!(text.contains("the docs"));
    assert!(text.contains("(https://example.com)"));
}
