use super::*;

#[test]
fn transport_form_is_a_json_string_array() {
    let mut record = WireRecord::new("e1");
    record.push_cell("1388880000000");
    record.push_cell("Holiday");
    record.push_cell("");
    assert_eq!(
        record.to_wire_string(),
        r#"["e1","1388880000000","Holiday",""]"#
    );
}

#[test]
fn delimiter_bearing_content_survives() {
    let mut record = WireRecord::new("e|1");
    record.push_cell("1");
    record.push_cell(r#"a "quoted", [bracketed] | piped cell"#);
    let wire = record.to_wire_string();
    let back = WireRecord::parse(&wire).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.cells()[2], r#"a "quoted", [bracketed] | piped cell"#);
}

#[test]
fn parse_rejects_non_arrays() {
    assert!(WireRecord::parse("{}").is_err());
    assert!(WireRecord::parse("[1,2]").is_err());
    assert!(WireRecord::parse("").is_err());
}

#[test]
fn parse_requires_id_and_start_cells() {
    let err = WireRecord::parse(r#"["only-id"]"#).unwrap_err();
    assert!(err.to_string().contains("expected at least id and start"));
}

#[test]
fn id_is_the_first_cell() {
    let record = WireRecord::from_cells(vec!["e9".into(), "5".into()]);
    assert_eq!(record.id(), "e9");
}
