//! Checked access to feature nodes.
//!
//! Every helper re-queries node presence and access mode immediately before
//! touching the node. Access modes are dynamic (a node can flip to read-only
//! when the device starts streaming, or be absent on another firmware), so no
//! result of an earlier check is ever reused.
//!
//! The helpers only gate and type-check; what to do about a failure (degrade
//! with a logged fallback, or abort the surrounding step) is decided at each
//! call site.

use crate::traits::{CameraError, NodeTree, NodeValue, Result};

/// Read a node's current value after checking presence and readability.
pub fn try_read<N: NodeTree>(nodes: &N, name: &str) -> Result<NodeValue> {
    let mode = nodes.access_mode(name);
    if !mode.present() {
        return Err(CameraError::NodeUnavailable(name.to_owned()));
    }
    if !mode.readable() {
        return Err(CameraError::NodeNotReadable(name.to_owned()));
    }
    nodes.read(name)
}

/// Write a node's value after checking presence and writability.
pub fn try_write<N: NodeTree>(nodes: &N, name: &str, value: NodeValue) -> Result<()> {
    let mode = nodes.access_mode(name);
    if !mode.present() {
        return Err(CameraError::NodeUnavailable(name.to_owned()));
    }
    if !mode.writable() {
        return Err(CameraError::NodeNotWritable(name.to_owned()));
    }
    nodes.write(name, value)
}

/// Execute a command node after checking presence and writability.
pub fn try_execute<N: NodeTree>(nodes: &N, name: &str) -> Result<()> {
    let mode = nodes.access_mode(name);
    if !mode.present() {
        return Err(CameraError::NodeUnavailable(name.to_owned()));
    }
    if !mode.writable() {
        return Err(CameraError::NodeNotWritable(name.to_owned()));
    }
    nodes.execute(name)
}

/// Read an integer node, rejecting other categories.
pub fn try_read_int<N: NodeTree>(nodes: &N, name: &str) -> Result<i64> {
    match try_read(nodes, name)? {
        NodeValue::Integer(value) => Ok(value),
        _ => Err(type_mismatch(name, "integer")),
    }
}

/// Read a floating-point node, rejecting other categories.
pub fn try_read_float<N: NodeTree>(nodes: &N, name: &str) -> Result<f64> {
    match try_read(nodes, name)? {
        NodeValue::Float(value) => Ok(value),
        _ => Err(type_mismatch(name, "float")),
    }
}

/// Read an enumeration node's current symbolic entry.
pub fn try_read_enum<N: NodeTree>(nodes: &N, name: &str) -> Result<String> {
    match try_read(nodes, name)? {
        NodeValue::Enumeration(entry) => Ok(entry),
        _ => Err(type_mismatch(name, "enumeration")),
    }
}

/// Select an enumeration entry by symbolic name.
pub fn try_write_enum<N: NodeTree>(nodes: &N, name: &str, entry: &str) -> Result<()> {
    try_write(nodes, name, NodeValue::Enumeration(entry.to_owned()))
}

/// Write an integer node.
pub fn try_write_int<N: NodeTree>(nodes: &N, name: &str, value: i64) -> Result<()> {
    try_write(nodes, name, NodeValue::Integer(value))
}

/// Write a floating-point node.
pub fn try_write_float<N: NodeTree>(nodes: &N, name: &str, value: f64) -> Result<()> {
    try_write(nodes, name, NodeValue::Float(value))
}

/// Write a boolean node.
pub fn try_write_bool<N: NodeTree>(nodes: &N, name: &str, value: bool) -> Result<()> {
    try_write(nodes, name, NodeValue::Boolean(value))
}

fn type_mismatch(node: &str, expected: &'static str) -> CameraError {
    CameraError::TypeMismatch {
        node: node.to_owned(),
        expected,
    }
}
