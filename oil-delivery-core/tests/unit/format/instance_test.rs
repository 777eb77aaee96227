use super::*;
use crate::helpers::models::*;

#[test]
fn can_read_written_instance() {
    let instance = create_example_instance();
    let mut buffer = BufWriter::new(Vec::new());

    serialize_instance(&instance, &mut buffer).expect("cannot serialize");
    let bytes = buffer.into_inner().expect("cannot flush");
    let actual = deserialize_instance(BufReader::new(bytes.as_slice()), true).expect("cannot deserialize");

    assert_eq!(actual, instance);
}

#[test]
fn can_report_malformed_json() {
    let errors = deserialize_instance(BufReader::new("{ not a json".as_bytes()), false).expect_err("no error");

    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().starts_with("cannot deserialize instance"));
}

#[test]
fn can_report_all_validation_errors() {
    let json = r#"{ "periodCount": 1, "gasStations": [{ "id": 1, "demandValues": [] }], "vehicles": [] }"#;

    let errors = deserialize_instance(BufReader::new(json.as_bytes()), false).expect_err("no error");

    assert_eq!(errors.len(), 3);
}
