use super::*;
use crate::helpers::models::*;

fn write_solution(submission: &Submission, solution: &Solution) -> String {
    let mut buffer = BufWriter::new(Vec::new());
    serialize_solution(&mut buffer, submission, solution).expect("cannot serialize");

    String::from_utf8(buffer.into_inner().expect("cannot flush")).expect("not utf8")
}

#[test]
fn can_write_submission_as_first_line() {
    let submission = Submission::new("author", "constructive", "instance.json", 1.5, 4);
    let solution = create_test_solution(vec![vec![(0, vec![(0, 0, 10)])]]);

    let content = write_solution(&submission, &solution);
    let first_line = content.lines().next().expect("empty file");

    assert!(!first_line.is_empty());
    let header: Submission = serde_json::from_str(first_line).expect("cannot read header");
    assert_eq!(header, submission);
    assert!(content.contains("\"vehicleDeliveries\""));
    assert!(content.contains("\"stationId\""));
}

#[test]
fn can_read_written_solution_skipping_submission() {
    let submission = Submission::new("author", "random", "instance.json", 0.25, 1);
    let solution = create_test_solution(vec![vec![(0, vec![(0, 1, 5), (1, 2, 3)])], vec![(0, vec![])]]);
    let content = write_solution(&submission, &solution);

    let actual_solution = deserialize_solution(BufReader::new(content.as_bytes())).expect("cannot read solution");
    let actual_submission = deserialize_submission(BufReader::new(content.as_bytes())).expect("cannot read header");

    assert_eq!(actual_solution, solution);
    assert_eq!(actual_submission, submission);
}

#[test]
fn can_report_malformed_solution() {
    let content = "{}\n{ \"deliveries\": 42 }";

    let result = deserialize_solution(BufReader::new(content.as_bytes()));

    assert!(result.is_err_and(|err| err.to_string().starts_with("cannot deserialize solution")));
}
