use gofetch_api::response::parse_body;
use gofetch_api::{Envelope, SearchResponse, SearchResultItem};

#[test]
fn bare_list_decodes_as_legacy() {
    let resp = parse_body(br#"[{"url":"/a","title":"A","score":0.9}]"#)
        .expect("valid json")
        .expect("present");
    assert_eq!(
        resp,
        SearchResponse::Legacy(vec![SearchResultItem {
            url: "/a".into(),
            title: "A".into(),
            score: Some(0.9),
        }])
    );
}

#[test]
fn envelope_decodes_as_paginated() {
    let resp = parse_body(br#"{"total":42,"data":[{"url":"/a","title":"A"}]}"#)
        .expect("valid json")
        .expect("present");
    match resp {
        SearchResponse::Paginated(Envelope { total, data }) => {
            assert_eq!(total, 42);
            let data = data.expect("data present");
            assert_eq!(data.len(), 1);
            assert_eq!(data[0].score, None);
        }
        other => panic!("expected paginated, got {:?}", other),
    }
}

#[test]
fn null_body_is_absent() {
    assert_eq!(parse_body(b"null").expect("valid json"), None);
}

#[test]
fn envelope_without_data_is_empty() {
    let resp = parse_body(br#"{"total":3}"#).expect("valid json").expect("present");
    assert!(resp.is_empty());
    let resp = parse_body(br#"{"total":3,"data":null}"#).expect("valid json").expect("present");
    assert!(resp.is_empty());
}

#[test]
fn missing_fields_degrade_to_empty_strings() {
    let resp = parse_body(br#"[{"score":1.5}]"#).expect("valid json").expect("present");
    let item = &resp.items()[0];
    assert_eq!(item.url, "");
    assert_eq!(item.title, "");
}

#[test]
fn null_fields_do_not_sink_the_other_records() {
    let resp = parse_body(
        br#"[{"url":"/a","title":null,"score":0.5},{"url":"/b","title":"B","score":0.1}]"#,
    )
    .expect("valid json")
    .expect("present");
    let items = resp.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].url, "/a");
    assert_eq!(items[0].title, "");
    assert_eq!(items[1].title, "B");

    let resp = parse_body(br#"{"total":1,"data":[{"url":null,"title":"A"}]}"#)
        .expect("valid json")
        .expect("present");
    assert_eq!(resp.items()[0].url, "");
}

#[test]
fn scalar_body_is_a_parse_error() {
    assert!(parse_body(b"\"oops\"").is_err());
    assert!(parse_body(b"not json").is_err());
}
