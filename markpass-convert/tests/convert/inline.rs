use markpass_convert::convert;

#[test]
fn bold_runs_before_italic() {
    let html = convert("**bold** and *italic*");
    assert_eq!(html, "<p>\n<strong>bold</strong> and <em>italic</em>\n</p>");
}

#[test]
fn bold_containing_italic() {
    assert_eq!(
        convert("**very *much* so**"),
        "<p>\n<strong>very <em>much</em> so</strong>\n</p>"
    );
}

#[test]
fn odd_asterisk_is_left_as_text() {
    assert_eq!(convert("2 * 3 = 6"), "<p>\n2 * 3 = 6\n</p>");
}

#[test]
fn emphasis_does_not_cross_lines() {
    assert_eq!(convert("*open\nclose*"), "<p>\n*open\nclose*\n</p>");
}

#[test]
fn image_with_empty_alt() {
    assert_eq!(
        convert("![](pic.png)"),
        "<img src=\"pic.png\" alt=\"\">"
    );
}

#[test]
fn adjacent_links() {
    assert_eq!(
        convert("[a](1)[b](2)"),
        "<p>\n<a href=\"1\">a</a><a href=\"2\">b</a>\n</p>"
    );
}

#[test]
fn inline_code() {
    assert_eq!(
        convert("Run `make test` first"),
        "<p>\nRun <code>make test</code> first\n</p>"
    );
}

#[test]
fn markdown_inside_inline_code_is_still_rewritten() {
    // Emphasis runs before code, so code spans get no protection.
    assert_eq!(
        convert("`a *b* c`"),
        "<code>a <em>b</em> c</code>"
    );
}

#[test]
fn unmatched_backticks_fall_through() {
    assert_eq!(convert("```oops"), "<p>\n```oops\n</p>");
}
