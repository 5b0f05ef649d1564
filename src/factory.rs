//! Build-time choice of the adapter behind the free functions.
//!
//! Exactly one factory is selected by `cfg`; nothing here branches at
//! runtime. The native adapter wins whenever `backend-native` is enabled.

use crate::api::RegExpFactory;
use crate::error::Error;

/// The factory selected for this build.
#[cfg(feature = "backend-native")]
pub type SelectedFactory = crate::native::NativeFactory;

/// The factory selected for this build.
#[cfg(all(feature = "backend-stdlib", not(feature = "backend-native")))]
pub type SelectedFactory = crate::stdlib::StdFactory;

/// The regex type produced by [`compile`] in this build.
pub type DefaultRegExp = <SelectedFactory as RegExpFactory>::RegExp;

/// Compile `pattern` with no flags using the selected adapter.
#[inline]
pub fn compile(pattern: &str) -> Result<DefaultRegExp, Error> {
    SelectedFactory::compile(pattern)
}

/// Compile `pattern` with `flags` using the selected adapter.
#[inline]
pub fn compile_with_flags(pattern: &str, flags: &str) -> Result<DefaultRegExp, Error> {
    SelectedFactory::compile_with_flags(pattern, flags)
}

/// Escape `input` so that a pattern compiled from the result matches
/// `input` literally, using the selected adapter's rules.
#[inline]
pub fn quote(input: &str) -> String {
    SelectedFactory::quote(input)
}
