//! The native adapter: JavaScript `RegExp` semantics on top of regress.
//!
//! Every operation delegates the matching itself to [`regress::Regex`] and
//! only repackages its matches. `replace` and `split` follow
//! `String.prototype.replace` and `RegExp.prototype[@@split]`.

use crate::api::{MatchResult, RegExp, RegExpFactory, SplitResult};
use crate::error::Error;
use crate::flags::Flags;
use crate::replacement::{substitute, Template};
use crate::util::{advance_char, ceil_char_boundary};
use core::fmt;
use log::{debug, trace};
use regress::Regex;
use std::sync::{Arc, LazyLock};

/// Flags understood by the native adapter.
pub const ACCEPTED_FLAGS: &str = "gimsu";

// Metacharacters escaped by `quote`. '-' goes last so it stays literal.
static QUOTE_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.?*+^$\[\]\\(){}|-]").expect("invalid constant regex pattern")
});

/// A regex compiled by the EcmaScript engine.
#[derive(Debug, Clone)]
pub struct NativeRegExp {
    re: Regex,
    source: String,
    flags: Flags,
    last_index: usize,
}

impl NativeRegExp {
    /// Compile `pattern` with `flags` (any of "gimsu", each at most once).
    pub fn compile(pattern: &str, flags: &str) -> Result<Self, Error> {
        let flags = Flags::parse(pattern, flags, ACCEPTED_FLAGS)?;
        // The engine has no notion of 'g'; the cursor lives here.
        let engine_flags = Flags {
            global: false,
            ..flags
        }
        .to_string();
        let re = Regex::with_flags(pattern, engine_flags.as_str())
            .map_err(|err| Error::pattern(pattern, err.to_string()))?;
        debug!("native: compiled /{}/{}", pattern, flags);
        Ok(Self {
            re,
            source: pattern.to_owned(),
            flags,
            last_index: 0,
        })
    }

    /// Escape every regex metacharacter in `input` with a backslash.
    pub fn quote(input: &str) -> String {
        let mut result = String::with_capacity(input.len());
        let mut last = 0;
        for m in QUOTE_META.find_iter(input) {
            result.push_str(&input[last..m.start()]);
            result.push('\\');
            result.push_str(&input[m.range()]);
            last = m.end();
        }
        result.push_str(&input[last..]);
        result
    }

    /// First match starting at or after `start`.
    fn find_at(&self, input: &str, start: usize) -> Option<regress::Match> {
        self.re.find_from(input, start).next()
    }

    /// Every match in `input`, stepping one character past empty matches.
    fn find_all(&self, input: &Arc<str>) -> Vec<MatchResult> {
        let mut result = Vec::new();
        let mut pos = 0;
        while pos <= input.len() {
            let m = match self.find_at(input, pos) {
                Some(m) => m,
                None => break,
            };
            pos = if m.start() == m.end() {
                advance_char(input, m.end())
            } else {
                m.end()
            };
            result.push(to_match_result(&m, input));
        }
        result
    }
}

fn to_match_result(m: &regress::Match, input: &Arc<str>) -> MatchResult {
    let text = |r: Option<crate::Range>| r.map(|r| input[r].to_owned());
    let groups = m.groups().map(text).collect();
    let named = m
        .named_groups()
        .map(|(name, r)| (name.to_owned(), text(r)))
        .collect();
    MatchResult::new(Arc::clone(input), m.start(), groups, named)
}

impl RegExp for NativeRegExp {
    fn exec(&mut self, input: &str) -> Result<Option<MatchResult>, Error> {
        let global = self.flags.global;
        let start = if global { self.last_index } else { 0 };
        let found = if start > input.len() {
            None
        } else {
            self.find_at(input, ceil_char_boundary(input, start))
        };
        match found {
            Some(m) => {
                if global {
                    self.last_index = m.end();
                }
                Ok(Some(to_match_result(&m, &Arc::from(input))))
            }
            None => {
                if global {
                    trace!("native: no match from {}, cursor reset", start);
                    self.last_index = 0;
                }
                Ok(None)
            }
        }
    }

    fn replace(&mut self, input: &str, replacement: &str) -> Result<String, Error> {
        let shared: Arc<str> = Arc::from(input);
        let matches = if self.flags.global {
            self.last_index = 0;
            self.find_all(&shared)
        } else {
            self.find_at(input, 0)
                .map(|m| to_match_result(&m, &shared))
                .into_iter()
                .collect()
        };
        let first = match matches.first() {
            Some(first) => first,
            None => return Ok(input.to_owned()),
        };
        let template = Template::parse_ecma(
            replacement,
            first.group_count() - 1,
            first.has_named_groups(),
        );
        trace!("native: replacing {} match(es)", matches.len());
        Ok(substitute(input, &matches, &template))
    }

    fn split_with_limit(&self, input: &str, limit: usize) -> Result<SplitResult, Error> {
        let mut pieces = Vec::new();
        if limit == 0 {
            return Ok(SplitResult::new(pieces));
        }
        if input.is_empty() {
            if self.find_at(input, 0).is_none() {
                pieces.push(String::new());
            }
            return Ok(SplitResult::new(pieces));
        }

        let size = input.len();
        // p: start of the current piece. q: where to look for the next separator.
        let mut p = 0;
        let mut q = 0;
        while q < size {
            let m = match self.find_at(input, q) {
                Some(m) if m.start() < size => m,
                _ => break,
            };
            let e = m.end().min(size);
            if e == p {
                // Empty separator at the start of the piece.
                q = advance_char(input, m.start());
                continue;
            }
            pieces.push(input[p..m.start()].to_owned());
            if pieces.len() == limit {
                return Ok(SplitResult::new(pieces));
            }
            p = e;
            for cap in &m.captures {
                pieces.push(cap.clone().map(|r| input[r].to_owned()).unwrap_or_default());
                if pieces.len() == limit {
                    return Ok(SplitResult::new(pieces));
                }
            }
            q = p;
        }
        pieces.push(input[p..].to_owned());
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

impl fmt::Display for NativeRegExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// Factory compiling every pattern with [`NativeRegExp`].
#[derive(Debug, Copy, Clone, Default)]
pub struct NativeFactory;

impl RegExpFactory for NativeFactory {
    type RegExp = NativeRegExp;

    #[inline]
    fn compile_with_flags(pattern: &str, flags: &str) -> Result<NativeRegExp, Error> {
        NativeRegExp::compile(pattern, flags)
    }

    #[inline]
    fn quote(input: &str) -> String {
        NativeRegExp::quote(input)
    }
}
