//! Behaviour that intentionally differs between the adapters.

pub mod common;
use common::*;

#[test]
#[cfg(feature = "backend-stdlib")]
fn test_stdlib_engine_constructs() {
    let tc = TestConfig {
        backend: Backend::Stdlib,
    };
    // Lookbehind.
    tc.compile(r"(?<=\$)\d+")
        .match1f("cost $42")
        .test_eq("42");
    // Input boundary anchors.
    tc.compile(r"\Aabc\z").test_succeeds("abc");
    tc.compile(r"\Aabc\z").test_fails("xabc");
    tc.compilef(r"\Aabc\z", "m").test_fails("abc\nabc");
    // Atomic groups give back nothing.
    tc.compile(r"(?>a+)ab").test_fails("aaab");
    tc.compile(r"(?>a+)b").test_succeeds("aaab");
}

#[test]
#[cfg(all(feature = "backend-native", feature = "backend-stdlib"))]
fn test_pre_and_post_match_tokens() {
    let native = TestConfig {
        backend: Backend::Native,
    };
    let stdlib = TestConfig {
        backend: Backend::Stdlib,
    };
    native
        .compile("-")
        .replace1("a-b", "<$'|$`>")
        .test_eq("a<b|a>b");
    assert!(stdlib.compile("-").replace("a-b", "<$'|$`>").is_err());
}

#[test]
#[cfg(all(feature = "backend-native", feature = "backend-stdlib"))]
fn test_named_reference_syntax() {
    let pattern = r"(?<k>\w+)=(?<v>\w+)";
    let native = TestConfig {
        backend: Backend::Native,
    };
    let stdlib = TestConfig {
        backend: Backend::Stdlib,
    };
    native
        .compile(pattern)
        .replace1("a=1", "$<v>=$<k>")
        .test_eq("1=a");
    stdlib
        .compile(pattern)
        .replace1("a=1", "${v}=${k}")
        .test_eq("1=a");
    // Each backend treats the other's syntax its own way.
    native
        .compile(pattern)
        .replace1("a=1", "${v}")
        .test_eq("${v}");
    assert!(stdlib.compile(pattern).replace("a=1", "$<v>").is_err());
}

#[test]
#[cfg(all(feature = "backend-native", feature = "backend-stdlib"))]
fn test_split_differences() {
    let native = TestConfig {
        backend: Backend::Native,
    };
    let stdlib = TestConfig {
        backend: Backend::Stdlib,
    };
    // Captures are spliced in by one adapter only.
    native
        .compile(r"(-)")
        .split1("a-b")
        .test_eq(vec!["a", "-", "b"]);
    stdlib
        .compile(r"(-)")
        .split1("a-b")
        .test_eq(vec!["a", "b"]);
    // Splitting on an empty-matching pattern is not normalised.
    native
        .compile("(?:)")
        .split1("ab")
        .test_eq(vec!["a", "b"]);
    stdlib
        .compile("(?:)")
        .split1("ab")
        .test_eq(vec!["a", "b", ""]);
}

#[test]
#[cfg(all(feature = "backend-native", feature = "backend-stdlib"))]
fn test_multiline_carriage_return() {
    let native = TestConfig {
        backend: Backend::Native,
    };
    let stdlib = TestConfig {
        backend: Backend::Stdlib,
    };
    native.compilef("^b", "m").test_succeeds("a\rb");
    stdlib.compilef("^b", "m").test_fails("a\rb");
    // Both agree on line feeds.
    native.compilef("^b", "m").test_succeeds("a\nb");
    stdlib.compilef("^b", "m").test_succeeds("a\nb");
}
