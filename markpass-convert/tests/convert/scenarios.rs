use insta::assert_snapshot;
use markpass_convert::convert;

#[test]
fn plain_text_is_one_paragraph() {
    assert_eq!(convert("Hello world"), "<p>\nHello world\n</p>");
}

#[test]
fn heading_followed_by_paragraph() {
    let html = convert("# Title\n\nBody text.");
    assert!(html.starts_with("<h1>Title</h1>\n"));
    assert!(html.ends_with("<p>\nBody text.\n</p>"));
}

#[test]
fn link_and_image_on_one_line() {
    let html = convert("[Site](http://x.io) and ![alt](http://x.io/i.png)");
    assert!(html.contains("<a href=\"http://x.io\">Site</a>"));
    assert!(html.contains("<img src=\"http://x.io/i.png\" alt=\"alt\">"));
    assert!(!html.contains("!<a"));
}

#[test]
fn two_row_table() {
    assert_eq!(
        convert("|A|B|\n|1|2|"),
        "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>"
    );
}

#[test]
fn iframe_between_paragraphs() {
    let source = "Before\n<iframe src=\"http://x.io/v\"></iframe>\nAfter";
    assert_eq!(
        convert(source),
        "<p>\nBefore\n</p>\n<iframe src=\"http://x.io/v\"></iframe>\n<p>\nAfter\n</p>"
    );
}

#[test]
fn dash_list() {
    assert_eq!(convert("- one\n- two"), "<ul><li>one</li><li>two</li></ul>");
}

#[test]
fn article_snapshot() {
    let source = "# Release notes\n\
                  \n\
                  We shipped **three** things:\n\
                  \n\
                  - faster *sync*\n\
                  - a [changelog](https://x.io/log)\n\
                  - `--dry-run`\n\
                  \n\
                  > Thanks to everyone who tested.\n\
                  \n\
                  ---\n\
                  <figure><img src=\"team.png\"><figcaption>The team</figcaption></figure>\n\
                  Questions? Ask on the forum.";

    assert_snapshot!(convert(source), @r#"
<h1>Release notes</h1>
<p>
We shipped <strong>three</strong> things:
</p>
<ul><li>faster <em>sync</em></li><li>a <a href="https://x.io/log">changelog</a></li><li><code>--dry-run</code></li></ul>
<blockquote>Thanks to everyone who tested.</blockquote>
<hr>
<figure><img src="team.png"><figcaption>The team</figcaption></figure>
<p>
Questions? Ask on the forum.
</p>
"#);
}

#[test]
fn converting_twice_is_not_a_no_op() {
    let once = convert("Hello world");
    let twice = convert(&once);
    assert_ne!(once, twice);
    assert_eq!(twice, "<p>\n<p>\nHello world\n</p>\n</p>");
}
