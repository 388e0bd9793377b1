//! `methodCall` envelopes.

use super::tree::{parse_document, XmlElement};
use super::{decode_int_value, int_value};
use crate::error::{Result, RpcError};
use crate::types::Call;

/// Encode a call with one `<param>` per argument, in argument order.
pub fn encode_call(name: &str, args: &[i32]) -> String {
    let params = args.iter().fold(XmlElement::new("params"), |params, arg| {
        params.child(XmlElement::new("param").child(int_value(*arg)))
    });

    XmlElement::new("methodCall")
        .child(XmlElement::with_text("methodName", name))
        .child(params)
        .to_document()
}

/// Decode a `methodCall` into a typed [`Call`].
///
/// Structural problems (no `methodCall` root, missing or repeated
/// `methodName`/`params`) are [`RpcError::Parse`]. A `<param>` that does not
/// hold exactly one `<value><i4>` is [`RpcError::UnsupportedType`], so type
/// errors are caught here rather than at dispatch.
pub fn decode_call(xml: &str) -> Result<Call> {
    let root = parse_document(xml)?;
    if root.name != "methodCall" {
        return Err(RpcError::parse(format!(
            "expected <methodCall> root, found <{}>",
            root.name
        )));
    }

    let name = root.only_child("methodName")?.text.trim().to_string();
    if name.is_empty() {
        return Err(RpcError::parse("<methodName> is empty"));
    }

    let args = root
        .only_child("params")?
        .children_named("param")
        .map(decode_param)
        .collect::<Result<Vec<i32>>>()?;

    Ok(Call { name, args })
}

fn decode_param(param: &XmlElement) -> Result<i32> {
    let value = param
        .only_child("value")
        .map_err(|_| RpcError::unsupported_type("param without a single value"))?;
    decode_int_value(value)
}
