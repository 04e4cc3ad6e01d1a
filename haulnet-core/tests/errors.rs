//! Error code and display stability checks.

use haulnet_core::{NetworkError, NetworkErrorCode};
use rstest::rstest;

fn unknown_node() -> NetworkError {
    NetworkError::UnknownNode {
        node: "7".to_owned(),
    }
}

fn unreachable() -> NetworkError {
    NetworkError::Unreachable {
        src: "1".to_owned(),
        dest: "4".to_owned(),
    }
}

fn invalid_edge() -> NetworkError {
    NetworkError::InvalidEdge {
        left: "1".to_owned(),
        right: "2".to_owned(),
        power: -3.0,
        distance: 1.0,
    }
}

fn not_found() -> NetworkError {
    NetworkError::NotFound {
        src: "1".to_owned(),
        dest: "4".to_owned(),
        budget: 3.0,
    }
}

#[rstest]
#[case(unknown_node(), NetworkErrorCode::UnknownNode, "UNKNOWN_NODE")]
#[case(unreachable(), NetworkErrorCode::Unreachable, "UNREACHABLE")]
#[case(invalid_edge(), NetworkErrorCode::InvalidEdge, "INVALID_EDGE")]
#[case(not_found(), NetworkErrorCode::NotFound, "NOT_FOUND")]
fn returns_expected_code(
    #[case] error: NetworkError,
    #[case] expected: NetworkErrorCode,
    #[case] symbol: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), symbol);
    assert_eq!(expected.to_string(), symbol);
}

#[rstest]
#[case(unknown_node(), "node `7` is not present in the graph")]
#[case(unreachable(), "no path connects `1` and `4` at any power")]
#[case(
    invalid_edge(),
    "edge (1, 2) has invalid weights: power -3, distance 1"
)]
#[case(not_found(), "no path connects `1` and `4` within power budget 3")]
fn renders_a_stable_message(#[case] error: NetworkError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}
