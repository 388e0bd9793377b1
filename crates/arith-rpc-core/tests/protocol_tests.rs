//! Integration tests for the request-body-in, response-body-out protocol.
//!
//! These go through the public API only: a body is encoded the way a client
//! would, handed to the dispatcher, and the reply is decoded again.

use arith_rpc_core::codec::{
    decode_call, decode_response, encode_call, encode_fault, encode_success,
};
use arith_rpc_core::dispatcher::{execute, handle_request_body};
use arith_rpc_core::{Call, Response};
use proptest::collection::vec;
use proptest::prelude::*;

const INVALID_ARGUMENTS: &str = "Unexpected arguments for the requested method type.";
const DIVIDE_BY_ZERO: &str = "Divide by zero";
const UNSUPPORTED_TYPE: &str = "A param was requested that is not of type i4, this is not supported.";

/// Send a call through the full encode/dispatch/decode path.
fn round_trip(name: &str, args: &[i32]) -> Response {
    let reply = handle_request_body(&encode_call(name, args));
    decode_response(&reply).expect("dispatcher always replies with a valid envelope")
}

proptest! {
    #[test]
    fn test_call_encoding_round_trips(
        name in "[A-Za-z_][A-Za-z0-9_.]{0,31}",
        args in vec(any::<i32>(), 1..64)
    ) {
        let decoded = decode_call(&encode_call(&name, &args)).unwrap();
        prop_assert_eq!(decoded, Call::new(name, args));
    }

    #[test]
    fn test_success_encoding_round_trips(value in any::<i32>()) {
        prop_assert_eq!(
            decode_response(&encode_success(value)).unwrap(),
            Response::Success(value)
        );
    }

    #[test]
    fn test_fault_encoding_round_trips(code in any::<i32>(), message in any::<String>()) {
        prop_assert_eq!(
            decode_response(&encode_fault(code, &message)).unwrap(),
            Response::fault(code, message.clone())
        );
    }
}

#[test]
fn test_arithmetic_results() {
    assert_eq!(round_trip("add", &[]), Response::Success(0));
    assert_eq!(round_trip("add", &[1, 2, 3, 4, 5]), Response::Success(15));
    assert_eq!(round_trip("add", &[2, 4]), Response::Success(6));
    assert_eq!(round_trip("multiply", &[3, 4]), Response::Success(12));
    assert_eq!(round_trip("multiply", &[1, 2, 3, 4, 5]), Response::Success(120));
    assert_eq!(round_trip("subtract", &[12, 6]), Response::Success(6));
    assert_eq!(round_trip("divide", &[10, 5]), Response::Success(2));
    assert_eq!(round_trip("modulo", &[10, 5]), Response::Success(0));
}

#[test]
fn test_divide_by_zero_faults() {
    for n in [0, 1, -1, 10, i32::MAX, i32::MIN] {
        assert_eq!(round_trip("divide", &[n, 0]), Response::fault(1, DIVIDE_BY_ZERO));
    }
    assert_eq!(round_trip("modulo", &[10, 0]), Response::fault(1, DIVIDE_BY_ZERO));
}

#[test]
fn test_unknown_operation_and_wrong_arity_share_a_fault() {
    let expected = Response::fault(1, INVALID_ARGUMENTS);
    assert_eq!(round_trip("subtract", &[1, 2, 3]), expected);
    assert_eq!(round_trip("divide", &[]), expected);
    assert_eq!(round_trip("unknown_op", &[1]), expected);
    assert_eq!(execute(&Call::new("unknown_op", vec![1])), expected);
}

#[test]
fn test_non_i4_param_faults_with_code_3() {
    for value in [
        "<string>1</string>",
        "<boolean>1</boolean>",
        "<double>1.0</double>",
        "<int>1</int>",
        "1",
    ] {
        let body = format!(
            "<?xml version=\"1.0\"?><methodCall><methodName>add</methodName><params>\
             <param><value><i4>1</i4></value></param>\
             <param><value>{}</value></param></params></methodCall>",
            value
        );
        let reply = decode_response(&handle_request_body(&body)).unwrap();
        assert_eq!(reply, Response::fault(3, UNSUPPORTED_TYPE), "param {}", value);
    }
}

#[test]
fn test_type_fault_checked_before_method_name() {
    let body = "<methodCall><methodName>unknown_op</methodName><params>\
                <param><value><string>x</string></value></param></params></methodCall>";
    assert_eq!(
        decode_response(&handle_request_body(body)).unwrap(),
        Response::fault(3, UNSUPPORTED_TYPE)
    );
}

#[test]
fn test_unparseable_body_still_gets_fault_envelope() {
    for body in ["", "garbage", "<methodCall>", "<methodResponse/>"] {
        match decode_response(&handle_request_body(body)).unwrap() {
            Response::Fault { code, message } => {
                assert_eq!(code, 2);
                assert!(!message.is_empty());
            }
            other => panic!("expected fault for {:?}, got {:?}", body, other),
        }
    }
}

#[test]
fn test_empty_call_round_trips() {
    assert_eq!(decode_call(&encode_call("add", &[])).unwrap(), Call::new("add", vec![]));
}
