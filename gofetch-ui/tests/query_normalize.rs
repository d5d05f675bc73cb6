use gofetch_ui::query::{encode_component, Query};

#[test]
fn trims_surrounding_whitespace() {
    let q = Query::parse("  rust tutorial \t\n").expect("non-empty");
    assert_eq!(q.as_str(), "rust tutorial");
}

#[test]
fn blank_input_is_not_a_query() {
    assert_eq!(Query::parse(""), None);
    assert_eq!(Query::parse("   "), None);
    assert_eq!(Query::parse("\t\r\n \u{3000}"), None);
}

#[test]
fn byte_order_mark_is_whitespace_but_next_line_is_not() {
    assert_eq!(Query::parse("\u{FEFF}"), None);
    assert_eq!(Query::parse("\u{FEFF}cat\u{FEFF}").expect("non-empty").as_str(), "cat");
    let q = Query::parse("\u{85}").expect("U+0085 is query text");
    assert_eq!(q.as_str(), "\u{85}");
    assert_eq!(q.encoded(), "%C2%85");
}

#[test]
fn interior_whitespace_is_preserved() {
    let q = Query::parse("a   b").expect("non-empty");
    assert_eq!(q.as_str(), "a   b");
    assert_eq!(q.encoded(), "a%20%20%20b");
}

#[test]
fn encoding_matches_uri_component_rules() {
    assert_eq!(encode_component("cat"), "cat");
    assert_eq!(encode_component("c++ & c#"), "c%2B%2B%20%26%20c%23");
    assert_eq!(encode_component("100%"), "100%25");
    assert_eq!(encode_component("日本"), "%E6%97%A5%E6%9C%AC");
}
