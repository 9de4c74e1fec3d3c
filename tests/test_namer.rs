use rstest::rstest;
use tagnamer::{Document, Namer};

fn apply(xml: &str, tags: &[&str], treat_missing: bool, start: i64) -> String {
    let namer = Namer::new(tags.iter().copied(), treat_missing, start);
    let mut doc = Document::parse(xml).unwrap();
    namer.assign(&mut doc);
    doc.serialize_to_string().unwrap()
}

#[test]
fn test_only_named_elements_when_flag_off() {
    // the first crosstab has no name attribute and the flag is off, so
    // only the second one is renamed
    assert_eq!(
        apply(
            r#"<root><crosstab/><crosstab name="x"/><other/></root>"#,
            &["crosstab"],
            false,
            1
        ),
        r#"<root><crosstab/><crosstab name="crosstab 1"/><other/></root>"#
    );
}

#[test]
fn test_all_matching_elements_when_flag_on() {
    assert_eq!(
        apply(
            r#"<root><crosstab/><crosstab name="x"/><other/></root>"#,
            &["crosstab"],
            true,
            1
        ),
        r#"<root><crosstab name="crosstab 1"/><crosstab name="crosstab 2"/><other/></root>"#
    );
}

#[rstest]
#[case(5, r#"<root><image name="image 5"/><image name="image 6"/></root>"#)]
#[case(0, r#"<root><image name="image 0"/><image name="image 1"/></root>"#)]
#[case(-1, r#"<root><image name="image -1"/><image name="image 0"/></root>"#)]
fn test_start_counting_from(#[case] start: i64, #[case] expected: &str) {
    assert_eq!(
        apply(
            r#"<root><image/><image/></root>"#,
            &["image"],
            true,
            start
        ),
        expected
    );
}

#[test]
fn test_counters_are_per_tag() {
    assert_eq!(
        apply(
            r#"<root><image/><text/><image/><text/></root>"#,
            &["image", "text"],
            true,
            1
        ),
        concat!(
            r#"<root><image name="image 1"/><text name="text 1"/>"#,
            r#"<image name="image 2"/><text name="text 2"/></root>"#
        )
    );
}

#[test]
fn test_counters_follow_document_order() {
    // pre-order: outer table, nested table, nested image, sibling table
    assert_eq!(
        apply(
            r#"<table><table><image/></table><table/></table>"#,
            &["table", "image"],
            true,
            1
        ),
        concat!(
            r#"<table name="table 1"><table name="table 2">"#,
            r#"<image name="image 1"/></table><table name="table 3"/></table>"#
        )
    );
}

#[test]
fn test_document_element_is_eligible() {
    assert_eq!(
        apply(r#"<table/>"#, &["table"], true, 1),
        r#"<table name="table 1"/>"#
    );
}

#[test]
fn test_other_attributes_and_position_are_kept() {
    // overwriting name keeps its place among the other attributes
    assert_eq!(
        apply(
            r#"<root><image a="1" name="old" b="2"/></root>"#,
            &["image"],
            false,
            1
        ),
        r#"<root><image a="1" name="image 1" b="2"/></root>"#
    );
}

#[test]
fn test_ineligible_elements_untouched() {
    let xml = r#"<root><other name="keep" a="1"/><image/></root>"#;
    assert_eq!(apply(xml, &["image"], false, 1), xml);
}

#[test]
fn test_prefixed_tags_match_literally() {
    assert_eq!(
        apply(
            r#"<root xmlns:x="http://example.com"><x:img/></root>"#,
            &["x:img"],
            true,
            1
        ),
        r#"<root xmlns:x="http://example.com"><x:img name="x:img 1"/></root>"#
    );
}

#[test]
fn test_assign_returns_count() {
    let namer = Namer::new(["image"], true, 1);
    let mut doc = Document::parse(r#"<root><image/><other/><image/></root>"#).unwrap();
    assert_eq!(namer.assign(&mut doc), 2);
}

#[test]
fn test_rerun_reassigns_names() {
    // a name attribute, once assigned, makes the element eligible even
    // with the flag off, so a second pass renumbers from the start
    let namer = Namer::new(["image"], false, 1);
    let mut doc = Document::parse(r#"<root><image name="x"/><image name="y"/></root>"#).unwrap();
    namer.assign(&mut doc);
    let first = doc.serialize_to_string().unwrap();

    let mut doc = Document::parse(&first).unwrap();
    namer.assign(&mut doc);
    assert_eq!(doc.serialize_to_string().unwrap(), first);
}

#[test]
fn test_counters_reset_between_documents() {
    let namer = Namer::new(["image"], true, 1);
    for _ in 0..2 {
        let mut doc = Document::parse(r#"<root><image/></root>"#).unwrap();
        namer.assign(&mut doc);
        assert_eq!(
            doc.serialize_to_string().unwrap(),
            r#"<root><image name="image 1"/></root>"#
        );
    }
}
