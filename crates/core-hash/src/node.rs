//! Shallow and deep node digests.

use std::cmp::Ordering;

use core_grammar::{BBOX_QUANT_STEP, Node};
use core_text::hash_hex;

use crate::{HashOptions, bbox::bbox_string, bbox::quantize};

fn bit(flag: bool) -> char {
    if flag { '1' } else { '0' }
}

fn push_truncated(rec: &mut String, value: &str) {
    rec.extend(value.chars().take(16));
}

/// Digest of a node's own signals, ignoring children.
///
/// The record is assembled in a fixed field order
/// (`r|b|i|v[|e][|s][|t][|n][|z]`), so presence of an optional field is the
/// only thing that can change its shape.
pub fn hash_node_shallow(node: &Node, opts: &HashOptions) -> String {
    let q = quantize(&node.bbox, BBOX_QUANT_STEP);
    let mut rec = String::with_capacity(96);
    rec.push_str("r:");
    rec.push_str(node.role.as_tag());
    rec.push_str("|b:");
    rec.push_str(&bbox_string(&q, 3));
    rec.push_str("|i:");
    rec.push(bit(node.interactive));
    rec.push_str("|v:");
    rec.push(bit(node.visible));
    if let Some(enabled) = node.enabled {
        rec.push_str("|e:");
        rec.push(bit(enabled));
    }
    if let Some(semantic) = &node.semantic {
        rec.push_str("|s:");
        rec.push_str(semantic);
    }
    if opts.include_text
        && let Some(hash) = node.text.as_ref().and_then(|t| t.hash.as_deref())
    {
        rec.push_str("|t:");
        push_truncated(&mut rec, hash);
    }
    if opts.include_name
        && let Some(hash) = &node.name_hash
    {
        rec.push_str("|n:");
        push_truncated(&mut rec, hash);
    }
    if opts.include_z
        && let Some(z) = node.z
    {
        rec.push_str("|z:");
        rec.push_str(&z.to_string());
    }
    hash_hex(&rec)
}

/// Canonical sibling order: quantized `y` first, with values within one
/// quantization step treated as the same row, then quantized `x`. Equal keys
/// keep input order (the sort is stable).
fn canonical_order<'a>(children: &'a [Node]) -> Vec<&'a Node> {
    let mut ordered: Vec<&Node> = children.iter().collect();
    ordered.sort_by(|a, b| {
        let qa = quantize(&a.bbox, BBOX_QUANT_STEP);
        let qb = quantize(&b.bbox, BBOX_QUANT_STEP);
        if (qa.y() - qb.y()).abs() <= BBOX_QUANT_STEP {
            qa.x().partial_cmp(&qb.x()).unwrap_or(Ordering::Equal)
        } else {
            qa.y().partial_cmp(&qb.y()).unwrap_or(Ordering::Equal)
        }
    });
    ordered
}

/// Digest of a node including all descendants, over the canonical sibling
/// order. A leaf's deep hash is its shallow hash.
pub fn hash_node_deep(node: &Node, opts: &HashOptions) -> String {
    let shallow = hash_node_shallow(node, opts);
    let children = node.children();
    if children.is_empty() {
        return shallow;
    }
    let mut rec = shallow;
    rec.push_str("|c:[");
    for (i, child) in canonical_order(children).into_iter().enumerate() {
        if i > 0 {
            rec.push(',');
        }
        rec.push_str(&hash_node_deep(child, opts));
    }
    rec.push(']');
    hash_hex(&rec)
}
