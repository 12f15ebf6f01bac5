use markpass_convert::convert;

#[test]
fn markdown_inside_a_container_is_untouched() {
    let source = "<div class=\"note\">\n**not bold** and [not](a-link)\n</div>";
    assert_eq!(convert(source), source);
}

#[test]
fn markup_around_a_container_is_still_converted() {
    assert_eq!(
        convert("## Clip\n<figure><iframe src=\"v\"></iframe></figure>\n*after*"),
        "<h2>Clip</h2>\n<figure><iframe src=\"v\"></iframe></figure>\n<p>\n<em>after</em>\n</p>"
    );
}

#[test]
fn asterisks_in_image_attributes_survive() {
    assert_eq!(
        convert("<img src=\"a*b*.png\"> and *this*"),
        "<p>\n<img src=\"a*b*.png\"> and <em>this</em>\n</p>"
    );
}

#[test]
fn iframe_query_string_is_not_emphasized() {
    let embed = "<iframe src=\"https://x.io/embed?a=*b*&c=[d](e)\"></iframe>";
    assert_eq!(convert(embed), embed);
}

#[test]
fn video_keeps_its_nested_source_tags() {
    let source = "<video controls>\n<source src=\"m.mp4\" type=\"video/mp4\">\n</video>";
    assert_eq!(convert(source), source);
}

#[test]
fn upper_case_tags_are_recognized() {
    let source = "<IFRAME SRC=\"x\"></IFRAME>";
    assert_eq!(convert(source), source);
}

#[test]
fn nested_divs_close_early() {
    // The outer div's closing tag is left over as loose text.
    assert_eq!(
        convert("<div>a<div>b</div>c</div>"),
        "<p>\n<div>a<div>b</div>c</div>\n</p>"
    );
}

#[test]
fn unrecognized_html_is_passed_through_unsanitized() {
    assert_eq!(
        convert("<script>alert(1)</script>"),
        "<p>\n<script>alert(1)</script>\n</p>"
    );
}

#[test]
fn void_tag_inline_with_text() {
    assert_eq!(
        convert("line one<br>line two"),
        "<p>\nline one<br>line two\n</p>"
    );
}

#[test]
fn container_nested_in_an_iframe_survives() {
    let source = "<iframe src=\"a\"><div>x</div></iframe>";
    assert_eq!(convert(source), source);
}

#[test]
fn container_nested_in_a_video_survives() {
    let source = "Intro\n<video controls><figure>*still*</figure></video>\nOutro";
    assert_eq!(
        convert(source),
        "<p>\nIntro\n</p>\n<video controls><figure>*still*</figure></video>\n<p>\nOutro\n</p>"
    );
}
