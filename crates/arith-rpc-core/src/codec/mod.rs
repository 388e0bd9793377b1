//! XML-RPC wire codec.
//!
//! Pure functions between [`Call`](crate::Call)/[`Response`](crate::Response)
//! values and the envelope format:
//!
//! ```text
//! <methodCall><methodName>add</methodName>
//!   <params><param><value><i4>1</i4></value></param>...</params></methodCall>
//! <methodResponse><params><param><value><i4>R</i4></value></param></params></methodResponse>
//! <methodResponse><fault><value><struct>
//!   <member><name>faultCode</name><value><i4>C</i4></value></member>
//!   <member><name>faultString</name><value><string>M</string></value></member>
//! </struct></value></fault></methodResponse>
//! ```
//!
//! Only the `i4` and `string` type tags are understood. Nothing here holds
//! state, so every function is safe to call from any number of tasks.

mod call;
mod response;
mod tree;

pub use call::{decode_call, encode_call};
pub use response::{decode_response, encode_fault, encode_response, encode_success};

use crate::error::{Result, RpcError};
use tree::XmlElement;

pub(crate) const TAG_I4: &str = "i4";
pub(crate) const TAG_STRING: &str = "string";

/// `<value><i4>n</i4></value>`
fn int_value(n: i32) -> XmlElement {
    XmlElement::new("value").child(XmlElement::with_text(TAG_I4, n.to_string()))
}

/// Read the int32 out of a `<value>` that must hold exactly one `<i4>`.
fn decode_int_value(value: &XmlElement) -> Result<i32> {
    match value.children.as_slice() {
        [typed] if typed.name == TAG_I4 => typed
            .text
            .trim()
            .parse::<i32>()
            .map_err(|_| RpcError::unsupported_type(format!("i4 '{}'", typed.text.trim()))),
        [typed] => Err(RpcError::unsupported_type(typed.name.clone())),
        [] => Err(RpcError::unsupported_type("untyped value")),
        _ => Err(RpcError::unsupported_type("multiple type tags")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Call, Response};

    #[test]
    fn test_call_round_trip() {
        let cases = [
            Call::new("add", vec![1, 2, 3, 4, 5]),
            Call::new("subtract", vec![i32::MIN, i32::MAX]),
            Call::new("multiply", vec![]),
        ];
        for call in cases {
            let xml = encode_call(&call.name, &call.args);
            assert_eq!(decode_call(&xml).unwrap(), call);
        }
    }

    #[test]
    fn test_response_round_trip() {
        for value in [0, -7, i32::MAX, i32::MIN] {
            assert_eq!(
                decode_response(&encode_success(value)).unwrap(),
                Response::Success(value)
            );
        }

        let faults = [
            (1, "Divide by zero"),
            (-32000, ""),
            (3, "  <tags> & \"quotes\" 'kept'  "),
            (i32::MIN, "multi\nline"),
        ];
        for (code, message) in faults {
            assert_eq!(
                decode_response(&encode_fault(code, message)).unwrap(),
                Response::fault(code, message)
            );
        }
    }

    #[test]
    fn test_decode_int_value_rejects_other_types() {
        let value =
            |inner: &str| tree::parse_document(&format!("<value>{}</value>", inner)).unwrap();

        assert_eq!(decode_int_value(&value("<i4> 42 </i4>")).unwrap(), 42);
        for bad in [
            "<string>42</string>",
            "<int>42</int>",
            "<double>4.2</double>",
            "42",
            "<i4>1</i4><i4>2</i4>",
            "<i4>forty-two</i4>",
            "<i4>2147483648</i4>",
        ] {
            let err = decode_int_value(&value(bad)).unwrap_err();
            assert!(
                matches!(err, RpcError::UnsupportedType { .. }),
                "expected type fault for {}",
                bad
            );
        }
    }
}
