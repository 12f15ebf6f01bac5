use insta::assert_snapshot;
use markpass_convert::convert;

#[test]
fn level_three_heading_matches_once() {
    let html = convert("### H3");
    assert_eq!(html, "<h3>H3</h3>");
    assert_eq!(html.matches("<h3>").count(), 1);
    assert!(!html.contains("<h1>"));
    assert!(!html.contains("<h2>"));
}

#[test]
fn four_hashes_are_plain_text() {
    assert_eq!(convert("#### Deep"), "<p>\n#### Deep\n</p>");
}

#[test]
fn ordered_list_items_are_not_wrapped() {
    assert_eq!(convert("1. one\n2. two"), "<li>one</li>\n<li>two</li>");
}

#[test]
fn separator_row_is_just_another_row() {
    assert_eq!(
        convert("| A | B |\n|---|---|\n| 1 | 2 |"),
        "<table><tr><th>A</th><th>B</th></tr><tr><td>---</td><td>---</td></tr><tr><td>1</td><td>2</td></tr></table>"
    );
}

#[test]
fn blockquote() {
    assert_eq!(
        convert("> quoted *words*"),
        "<blockquote>quoted <em>words</em></blockquote>"
    );
}

#[test]
fn horizontal_rule_between_paragraphs() {
    assert_eq!(
        convert("above\n---\nbelow"),
        "<p>\nabove\n</p>\n<hr>\n<p>\nbelow\n</p>"
    );
}

#[test]
fn single_line_fenced_code() {
    assert_eq!(
        convert("```let x = 1;```"),
        "<pre><code>let x = 1;</code></pre>"
    );
}

#[test]
fn multi_line_fenced_code_leaks_into_paragraphs() {
    // Only the opening line carries a block tag; the rest is wrapped like prose.
    assert_snapshot!(convert("```\nlet x = 1;\n```"), @r"
<pre><code>
<p>
let x = 1;
</code></pre>
</p>
");
}

#[test]
fn list_then_paragraph() {
    assert_eq!(
        convert("- a\n- b\nafter"),
        "<ul><li>a</li><li>b</li></ul>\n<p>\nafter\n</p>"
    );
}

#[test]
fn blank_line_splits_lists() {
    assert_eq!(
        convert("- a\n\n- b"),
        "<ul><li>a</li></ul>\n<ul><li>b</li></ul>"
    );
}

#[test]
fn crlf_table_keeps_its_header_row() {
    assert_eq!(
        convert("|A|B|\r\n|1|2|"),
        "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>"
    );
}

#[test]
fn crlf_horizontal_rule_and_heading() {
    assert_eq!(
        convert("# Title\r\nabove\r\n---\r\nbelow"),
        "<h1>Title</h1>\n<p>\nabove\n</p>\n<hr>\n<p>\nbelow\n</p>"
    );
}

#[test]
fn crlf_list_items_do_not_capture_carriage_returns() {
    assert_eq!(
        convert("- a\r\n- b\r\n"),
        "<ul><li>a</li><li>b</li></ul>"
    );
}
