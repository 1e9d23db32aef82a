//! Depth scanning over awkward markup.

use pagefix_blocks::{Fingerprint, TagKind, TagScanner, find_element_end};
use rstest::rstest;

#[rstest]
#[case::flat("<div></div>tail", Some(11))]
#[case::nested("<div><div><div></div></div></div>tail", Some(33))]
#[case::siblings("<div><div></div><div></div></div>", Some(33))]
#[case::uppercase("<DIV><Div></DIV></div>", Some(22))]
#[case::similar_names("<div><divider></divider></div>", Some(30))]
#[case::quoted_gt(r#"<div title="a>b"><div></div></div>"#, Some(34))]
#[case::commented_close("<div><!-- </div> --></div>", Some(26))]
#[case::unclosed("<div><div></div>", None)]
#[case::comment_hides_close("<div><!-- </div> -->", None)]
fn test_element_end(#[case] html: &str, #[case] end: Option<usize>) {
    assert_eq!(find_element_end(html, 0, "div"), end.map(|e| 0..e));
}

#[test]
fn test_scan_starts_mid_document() {
    let html = "<div>outer<div class=\"x\">inner</div></div>";
    let start = html.find("<div class").unwrap();

    let span = find_element_end(html, start, "div").unwrap();

    assert_eq!(&html[span], "<div class=\"x\">inner</div>");
}

#[test]
fn test_scanner_ignores_other_elements() {
    let html = "<section><div><span></span></div></section>";
    let kinds: Vec<_> = TagScanner::new(html, "div").map(|e| e.kind).collect();
    assert_eq!(kinds, vec![TagKind::Open, TagKind::Close]);
}

#[rstest]
#[case::exact("py-20 bg-gradient-to-br from-gray-50 to-gray-100 border-t-2 border-primary", true)]
#[case::reordered("border-primary py-20 to-gray-100 from-gray-50 bg-gradient-to-br border-t-2", true)]
#[case::extra_classes("relative py-20 bg-gradient-to-br from-gray-50 to-gray-100 border-t-2 border-primary", true)]
#[case::missing_one("py-20 bg-gradient-to-br from-gray-50 to-gray-100 border-t-2", false)]
fn test_fingerprint_class_sets(#[case] classes: &str, #[case] expected: bool) {
    let html = format!(r#"<p>x</p><div class="{classes}"></div>"#);
    assert_eq!(Fingerprint::default().find(&html).is_some(), expected);
}
