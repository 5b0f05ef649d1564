#![allow(clippy::uninlined_format_args)]

use regexp_shared::{Error, MatchResult, RegExp};
use std::ops::{Deref, DerefMut};

/// Format a MatchResult by inserting commas between all capture groups.
fn format_match(m: &MatchResult) -> String {
    let mut result = m.matched().to_string();
    for cg in m.groups().skip(1) {
        result.push(',');
        if let Some(cg) = cg {
            result.push_str(cg)
        }
    }
    result
}

pub trait StringTestHelpers {
    /// "Fluent" style helper for testing that a String is equal to a str.
    fn test_eq(&self, s: &str);
}

impl StringTestHelpers for String {
    #[track_caller]
    fn test_eq(&self, rhs: &str) {
        assert_eq!(self.as_str(), rhs)
    }
}

pub trait VecTestHelpers {
    /// "Fluent" style helper for testing that a Vec<String> is equal to a
    /// Vec<&str>.
    fn test_eq(&self, rhs: Vec<&str>);
}

impl VecTestHelpers for Vec<String> {
    #[track_caller]
    fn test_eq(&self, rhs: Vec<&str>) {
        assert_eq!(*self, rhs)
    }
}

/// A compiled regex which remembers its TestConfig.
#[derive(Debug)]
pub struct TestCompiledRegex {
    re: Box<dyn RegExp>,
    pub tc: TestConfig,
}

impl Deref for TestCompiledRegex {
    type Target = dyn RegExp;

    fn deref(&self) -> &Self::Target {
        self.re.as_ref()
    }
}

impl DerefMut for TestCompiledRegex {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.re.as_mut()
    }
}

impl TestCompiledRegex {
    /// Exec against \p input and return the match.
    #[track_caller]
    pub fn exec1(&mut self, input: &str) -> MatchResult {
        let tc = self.tc;
        match self.re.exec(input) {
            Ok(Some(m)) => m,
            Ok(None) => panic!("{:?}: /{}/ failed to match {}", tc, self.source(), input),
            Err(err) => panic!("{:?}: /{}/ errored on {}: {}", tc, self.source(), input, err),
        }
    }

    /// Exec against \p input, returning the match and its groups joined
    /// with commas.
    #[track_caller]
    pub fn match1f(&mut self, input: &str) -> String {
        format_match(&self.exec1(input))
    }

    /// Exec against \p input, returning the groups as a vector.
    #[track_caller]
    pub fn match1_vec(&mut self, input: &str) -> Vec<Option<String>> {
        self.exec1(input)
            .groups()
            .map(|g| g.map(str::to_owned))
            .collect()
    }

    #[track_caller]
    pub fn test_fails(&mut self, input: &str) {
        let tc = self.tc;
        assert!(
            !self.re.test(input).unwrap(),
            "{:?}: /{}/ should not have matched {}",
            tc,
            self.source(),
            input
        );
    }

    #[track_caller]
    pub fn test_succeeds(&mut self, input: &str) {
        let tc = self.tc;
        assert!(
            self.re.test(input).unwrap(),
            "{:?}: /{}/ should have matched {}",
            tc,
            self.source(),
            input
        );
    }

    /// Walk every match with the cursor. The regex must be global.
    /// Empty matches move the cursor along by one byte-sized step.
    #[track_caller]
    pub fn match_all(&mut self, input: &str) -> Vec<String> {
        assert!(self.global(), "match_all needs a global regex");
        self.set_last_index(0);
        let mut result = Vec::new();
        while let Some(m) = self.re.exec(input).unwrap() {
            if m.matched().is_empty() {
                let next = self.last_index() + 1;
                self.set_last_index(next);
            }
            result.push(m.matched().to_owned());
        }
        result
    }

    #[track_caller]
    pub fn replace1(&mut self, input: &str, replacement: &str) -> String {
        let tc = self.tc;
        match self.re.replace(input, replacement) {
            Ok(s) => s,
            Err(err) => panic!("{:?}: replace with {} failed: {}", tc, replacement, err),
        }
    }

    #[track_caller]
    pub fn split1(&self, input: &str) -> Vec<String> {
        self.re.split(input).unwrap().into_vec()
    }

    #[track_caller]
    pub fn split_limit(&self, input: &str, limit: usize) -> Vec<String> {
        self.re.split_with_limit(input, limit).unwrap().into_vec()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Backend {
    Native,
    Stdlib,
}

#[derive(Debug, Copy, Clone)]
pub struct TestConfig {
    pub backend: Backend,
}

impl TestConfig {
    pub fn try_compile(&self, pattern: &str, flags: &str) -> Result<Box<dyn RegExp>, Error> {
        match self.backend {
            #[cfg(feature = "backend-native")]
            Backend::Native => regexp_shared::native::NativeRegExp::compile(pattern, flags)
                .map(|re| Box::new(re) as Box<dyn RegExp>),
            #[cfg(feature = "backend-stdlib")]
            Backend::Stdlib => regexp_shared::stdlib::StdRegExp::compile(pattern, flags)
                .map(|re| Box::new(re) as Box<dyn RegExp>),
            #[allow(unreachable_patterns)]
            _ => unreachable!("backend {:?} is not enabled", self.backend),
        }
    }

    #[track_caller]
    pub fn compile(&self, pattern: &str) -> TestCompiledRegex {
        self.compilef(pattern, "")
    }

    #[track_caller]
    pub fn compilef(&self, pattern: &str, flags_str: &str) -> TestCompiledRegex {
        match self.try_compile(pattern, flags_str) {
            Ok(re) => TestCompiledRegex { re, tc: *self },
            Err(err) => panic!("{:?}: failed to compile /{}/{}: {}", self, pattern, flags_str, err),
        }
    }

    pub fn quote(&self, input: &str) -> String {
        match self.backend {
            #[cfg(feature = "backend-native")]
            Backend::Native => regexp_shared::native::NativeRegExp::quote(input),
            #[cfg(feature = "backend-stdlib")]
            Backend::Stdlib => regexp_shared::stdlib::StdRegExp::quote(input),
            #[allow(unreachable_patterns)]
            _ => unreachable!("backend {:?} is not enabled", self.backend),
        }
    }
}

/// The backends enabled in this build.
pub fn backends() -> Vec<Backend> {
    let mut result = Vec::new();
    if cfg!(feature = "backend-native") {
        result.push(Backend::Native);
    }
    if cfg!(feature = "backend-stdlib") {
        result.push(Backend::Stdlib);
    }
    result
}

/// Run \p func once per enabled backend.
pub fn test_with_configs<F>(func: F)
where
    F: Fn(TestConfig),
{
    for backend in backends() {
        func(TestConfig { backend });
    }
}
