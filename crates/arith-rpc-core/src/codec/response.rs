//! `methodResponse` envelopes.

use super::tree::{parse_document, XmlElement};
use super::{decode_int_value, int_value, TAG_STRING};
use crate::error::{Result, RpcError};
use crate::types::Response;

const FAULT_CODE_MEMBER: &str = "faultCode";
const FAULT_STRING_MEMBER: &str = "faultString";

pub fn encode_success(value: i32) -> String {
    XmlElement::new("methodResponse")
        .child(XmlElement::new("params").child(XmlElement::new("param").child(int_value(value))))
        .to_document()
}

/// Encode a fault; `faultCode` is always written before `faultString`.
pub fn encode_fault(code: i32, message: &str) -> String {
    let member = |name: &str, value: XmlElement| {
        XmlElement::new("member")
            .child(XmlElement::with_text("name", name))
            .child(value)
    };

    let fault_struct = XmlElement::new("struct")
        .child(member(FAULT_CODE_MEMBER, int_value(code)))
        .child(member(
            FAULT_STRING_MEMBER,
            XmlElement::new("value").child(XmlElement::with_text(TAG_STRING, message)),
        ));

    XmlElement::new("methodResponse")
        .child(XmlElement::new("fault").child(XmlElement::new("value").child(fault_struct)))
        .to_document()
}

pub fn encode_response(response: &Response) -> String {
    match response {
        Response::Success(value) => encode_success(*value),
        Response::Fault { code, message } => encode_fault(*code, message),
    }
}

/// Decode a `methodResponse`.
///
/// A `<fault>` wins over `<params>` if both are present. Fault members are
/// looked up by name, so their order does not matter. A success whose value is
/// missing its type tag or carries more than one is
/// [`RpcError::UnsupportedType`]; any other missing structure is
/// [`RpcError::Parse`].
pub fn decode_response(xml: &str) -> Result<Response> {
    let root = parse_document(xml)?;
    if root.name != "methodResponse" {
        return Err(RpcError::parse(format!(
            "expected <methodResponse> root, found <{}>",
            root.name
        )));
    }

    if let Some(fault) = root.first_child("fault") {
        return decode_fault(fault);
    }

    let value = root
        .first_child("params")
        .and_then(|params| params.first_child("param"))
        .and_then(|param| param.first_child("value"))
        .ok_or_else(|| RpcError::parse("response has neither <fault> nor params/param/value"))?;

    Ok(Response::Success(decode_int_value(value)?))
}

fn decode_fault(fault: &XmlElement) -> Result<Response> {
    let fault_struct = fault
        .first_child("value")
        .and_then(|value| value.first_child("struct"))
        .ok_or_else(|| RpcError::parse("<fault> has no value/struct"))?;

    let mut code = None;
    let mut message = None;
    for member in fault_struct.children_named("member") {
        let (Some(name), Some(value)) = (member.first_child("name"), member.first_child("value"))
        else {
            continue;
        };
        match name.text.trim() {
            FAULT_CODE_MEMBER => {
                let parsed = decode_int_value(value)
                    .map_err(|_| RpcError::parse("faultCode is not an i4"))?;
                code = Some(parsed);
            }
            FAULT_STRING_MEMBER => message = Some(string_value(value)),
            _ => {}
        }
    }

    match (code, message) {
        (Some(code), Some(message)) => Ok(Response::Fault { code, message }),
        _ => Err(RpcError::parse(
            "fault struct is missing faultCode or faultString",
        )),
    }
}

/// `<value><string>s</string></value>`, or bare `<value>s</value>` which
/// XML-RPC also reads as a string.
fn string_value(value: &XmlElement) -> String {
    match value.first_child(TAG_STRING) {
        Some(string) => string.text.clone(),
        None => value.text.clone(),
    }
}
