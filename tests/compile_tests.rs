//! Compile tests for the public macros.
//!
//! These tests verify that `compose!`, `part!`, `parts!` and the derive
//! macros expand correctly in a downstream crate that only sees the
//! exported paths.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#[test]
fn macro_expansion_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.pass("tests/ui/pass_*.rs");

    if cfg!(feature = "derive") {
        test_cases.pass("tests/ui/derive_*.rs");
    }
}
