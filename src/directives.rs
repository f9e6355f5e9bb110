//! Names and text fragments of the Vue template dialect the pass emits.

/// Directive attached to the first branch of a conditional chain.
pub const V_IF: &str = "v-if";
/// Directive attached to every `else if` continuation branch.
pub const V_ELSE_IF: &str = "v-else-if";
/// Valueless directive attached to a final `else` branch.
pub const V_ELSE: &str = "v-else";
/// Directive attached to a lowered `each` loop.
pub const V_FOR: &str = "v-for";
/// Bound key attribute emitted next to `v-for` when the loop's index
/// variable is named `key`, compared without regard to ASCII case.
pub const KEY_BINDING: &str = ":key";
/// Loop index variable name that triggers the [`KEY_BINDING`] shorthand.
pub const KEY_VARIABLE: &str = "key";
/// Element used to wrap branch bodies that cannot receive a directive
/// directly. Vue renders `<template>` as its children, with no element of
/// its own.
pub const TEMPLATE_TAG: &str = "template";

/// True for directives that claim exclusive control of an element. A node
/// already carrying one of these cannot take a second; the caller wraps it
/// instead.
pub fn is_control_directive(name: &str) -> bool {
    matches!(name, V_IF | V_ELSE_IF | V_ELSE | V_FOR)
}

/// Wraps expression source in mustache delimiters for runtime evaluation by
/// the Vue renderer.
pub fn mustache(expr: &str) -> String {
    format!("{{{{{expr}}}}}")
}
