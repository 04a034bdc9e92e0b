//! Compile-time tests for `#[derive(EmptyCheck)]`.
//!
//! Values the checker cannot classify are rejected by the compiler, so the
//! failure cases here are the compile-time side of the runtime panics.

#[test]
fn test_derive_pass() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/record_pass.rs");
    t.pass("tests/ui/capability_pass.rs");
}

#[test]
fn test_derive_fail() {
    // Rejected by the derive itself
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/not_a_record_fail.rs");
    t.compile_fail("tests/ui/attribute_fail.rs");
}

#[test]
fn test_unclassifiable_fail() {
    // Rejected by trait bounds on the generated and public API
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/root_not_record_fail.rs");
    t.compile_fail("tests/ui/field_not_inspect_fail.rs");
}
