//! The stdlib adapter: host-library regex semantics on top of fancy-regex.
//!
//! The engine brings lookbehind, atomic groups, possessive quantifiers,
//! `\A`/`\z` and class intersection. Replacement templates follow the
//! host-library rules, which reject the pre-match and post-match tokens.

use crate::api::{MatchResult, RegExp, RegExpFactory, SplitResult};
use crate::error::Error;
use crate::flags::Flags;
use crate::replacement::{substitute, Template};
use crate::util::{advance_char, ceil_char_boundary};
use core::fmt;
use fancy_regex::{Regex, RegexBuilder};
use log::{debug, trace, warn};
use std::sync::Arc;

/// Flags understood by the stdlib adapter.
pub const ACCEPTED_FLAGS: &str = "gim";

/// How many backtracking steps a single search may take before failing
/// with [`Error::Backend`].
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// A regex compiled by the host-library style engine.
#[derive(Debug, Clone)]
pub struct StdRegExp {
    re: Regex,
    source: String,
    flags: Flags,
    last_index: usize,
}

impl StdRegExp {
    /// Compile `pattern` with `flags` (any of "gim", each at most once).
    pub fn compile(pattern: &str, flags: &str) -> Result<Self, Error> {
        Self::with_backtrack_limit(pattern, flags, DEFAULT_BACKTRACK_LIMIT)
    }

    /// Compile `pattern` with `flags`, bounding backtracking per search.
    pub fn with_backtrack_limit(pattern: &str, flags: &str, limit: usize) -> Result<Self, Error> {
        let flags = Flags::parse(pattern, flags, ACCEPTED_FLAGS)?;
        let mut inline = String::new();
        if flags.ignore_case {
            inline.push('i');
        }
        if flags.multiline {
            inline.push('m');
        }
        let engine_pattern = if inline.is_empty() {
            pattern.to_owned()
        } else {
            format!("(?{}){}", inline, pattern)
        };
        let re = RegexBuilder::new(&engine_pattern)
            .backtrack_limit(limit)
            .build()
            .map_err(|err| Error::pattern(pattern, err.to_string()))?;
        debug!("stdlib: compiled /{}/{}", pattern, flags);
        Ok(Self {
            re,
            source: pattern.to_owned(),
            flags,
            last_index: 0,
        })
    }

    /// Escape `input` with the engine's own escaping.
    #[inline]
    pub fn quote(input: &str) -> String {
        fancy_regex::escape(input).into_owned()
    }

    /// First match starting at or after `start`.
    fn match_at(&self, input: &Arc<str>, start: usize) -> Result<Option<MatchResult>, Error> {
        let caps = self.re.captures_from_pos(input, start).map_err(|err| {
            warn!("stdlib: /{}/ failed at {}: {}", self.source, start, err);
            Error::Backend(err.to_string())
        })?;
        Ok(caps.map(|caps| {
            let text = |i: usize| caps.get(i).map(|m| m.as_str().to_owned());
            let groups = (0..caps.len()).map(text).collect();
            let named = self
                .re
                .capture_names()
                .enumerate()
                .filter_map(|(i, name)| name.map(|name| (name.to_owned(), text(i))))
                .collect();
            let index = caps.get(0).map_or(start, |m| m.start());
            MatchResult::new(Arc::clone(input), index, groups, named)
        }))
    }

    fn group_names(&self) -> Vec<&str> {
        self.re.capture_names().flatten().collect()
    }

    /// Matches from the start of `input`, each search resuming where the
    /// previous match ended, or one character later after an empty match.
    /// At most `max` matches are collected.
    fn find_all(&self, input: &Arc<str>, max: usize) -> Result<Vec<MatchResult>, Error> {
        let mut result = Vec::new();
        let mut pos = 0;
        while pos <= input.len() && result.len() < max {
            let m = match self.match_at(input, pos)? {
                Some(m) => m,
                None => break,
            };
            pos = if m.matched().is_empty() {
                advance_char(input, m.end())
            } else {
                m.end()
            };
            result.push(m);
        }
        Ok(result)
    }
}

impl RegExp for StdRegExp {
    fn exec(&mut self, input: &str) -> Result<Option<MatchResult>, Error> {
        let global = self.flags.global;
        let start = if global { self.last_index } else { 0 };
        let found = if start > input.len() {
            None
        } else {
            self.match_at(&Arc::from(input), ceil_char_boundary(input, start))?
        };
        if global {
            self.last_index = match &found {
                Some(m) => m.end(),
                None => {
                    trace!("stdlib: no match from {}, cursor reset", start);
                    0
                }
            };
        }
        Ok(found)
    }

    fn replace(&mut self, input: &str, replacement: &str) -> Result<String, Error> {
        let template =
            Template::parse_host(replacement, self.re.captures_len() - 1, &self.group_names())?;
        let max = if self.flags.global { usize::MAX } else { 1 };
        let matches = self.find_all(&Arc::from(input), max)?;
        trace!("stdlib: replacing {} match(es)", matches.len());
        Ok(substitute(input, &matches, &template))
    }

    fn split_with_limit(&self, input: &str, limit: usize) -> Result<SplitResult, Error> {
        let mut pieces: Vec<String> = if self.source.is_empty() {
            input.chars().take(limit).map(String::from).collect()
        } else {
            self.split_all(input)?
        };
        pieces.truncate(limit);
        Ok(SplitResult::new(pieces))
    }

    #[inline]
    fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    fn flags(&self) -> Flags {
        self.flags
    }

    #[inline]
    fn last_index(&self) -> usize {
        self.last_index
    }

    #[inline]
    fn set_last_index(&mut self, last_index: usize) {
        self.last_index = last_index;
    }
}

impl StdRegExp {
    /// Unlimited host-library split: captures are not spliced in, trailing
    /// empty pieces are kept, and a zero-width match at the very start does
    /// not produce a leading empty piece.
    fn split_all(&self, input: &str) -> Result<Vec<String>, Error> {
        let shared: Arc<str> = Arc::from(input);
        let mut pieces = Vec::new();
        let mut index = 0;
        for m in self.find_all(&shared, usize::MAX)? {
            if index == 0 && m.index() == 0 && m.matched().is_empty() {
                continue;
            }
            pieces.push(input[index..m.index()].to_owned());
            index = m.end();
        }
        if index == 0 {
            return Ok(vec![input.to_owned()]);
        }
        pieces.push(input[index..].to_owned());
        Ok(pieces)
    }
}

impl fmt::Display for StdRegExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Factory compiling every pattern with [`StdRegExp`].
#[derive(Debug, Copy, Clone, Default)]
pub struct StdFactory;

impl RegExpFactory for StdFactory {
    type RegExp = StdRegExp;

    #[inline]
    fn compile_with_flags(pattern: &str, flags: &str) -> Result<StdRegExp, Error> {
        StdRegExp::compile(pattern, flags)
    }

    #[inline]
    fn quote(input: &str) -> String {
        StdRegExp::quote(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_flags_do_not_leak_into_source() {
        let mut re = StdRegExp::compile("^b", "im").unwrap();
        assert_eq!(re.source(), "^b");
        assert_eq!(re.to_string(), "/^b/im");
        assert!(re.test("a\nB").unwrap());
    }

    #[test]
    fn native_only_flags_are_rejected() {
        assert!(matches!(
            StdRegExp::compile("a", "s"),
            Err(Error::InvalidPattern { .. })
        ));
    }

    #[test]
    fn backtrack_limit_surfaces_as_backend_error() {
        let mut re = StdRegExp::with_backtrack_limit(r"(a*)*\1b", "", 100).unwrap();
        let input = "a".repeat(28);
        assert!(matches!(re.exec(&input), Err(Error::Backend(_))));
    }
}
