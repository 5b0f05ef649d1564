use crate::error::Error;
use crate::flags::Flags;
use core::fmt;
use core::ops::Index;
use std::sync::Arc;

/// Range is used to express the extent of a match, as byte indexes into the
/// input string.
pub type Range = core::ops::Range<usize>;

/// The contract shared by both adapters.
///
/// A RegExp owns one compiled pattern and the cursor used by global
/// matching. Every method that may move the cursor takes `&mut self`.
pub trait RegExp: fmt::Debug {
    /// Searches `input` for the next match.
    ///
    /// A non-global regex always searches from the start and leaves the
    /// cursor alone. A global regex searches from [`last_index`], moves the
    /// cursor to the end of the match on success, and resets it to 0 when
    /// nothing is found.
    ///
    /// [`last_index`]: RegExp::last_index
    fn exec(&mut self, input: &str) -> Result<Option<MatchResult>, Error>;

    /// Returns whether `input` matches, with the same cursor side effects as
    /// [`exec`](RegExp::exec).
    #[inline]
    fn test(&mut self, input: &str) -> Result<bool, Error> {
        Ok(self.exec(input)?.is_some())
    }

    /// Replaces the first match (or every match, if global) of the regex in
    /// `input` with the expansion of `replacement`.
    fn replace(&mut self, input: &str, replacement: &str) -> Result<String, Error>;

    /// Splits `input` around matches of the regex.
    #[inline]
    fn split(&self, input: &str) -> Result<SplitResult, Error> {
        self.split_with_limit(input, usize::MAX)
    }

    /// Splits `input` around matches of the regex, returning at most `limit`
    /// pieces.
    fn split_with_limit(&self, input: &str, limit: usize) -> Result<SplitResult, Error>;

    /// The pattern this regex was compiled from.
    fn source(&self) -> &str;

    /// The flags this regex was compiled with.
    fn flags(&self) -> Flags;

    #[inline]
    fn global(&self) -> bool {
        self.flags().global
    }

    #[inline]
    fn ignore_case(&self) -> bool {
        self.flags().ignore_case
    }

    #[inline]
    fn multiline(&self) -> bool {
        self.flags().multiline
    }

    /// The byte offset at which the next global search starts.
    fn last_index(&self) -> usize;

    /// Move the cursor. Offsets inside a character are rounded up to the
    /// next character when searching.
    fn set_last_index(&mut self, last_index: usize);
}

/// A static entry point which compiles patterns with one adapter.
pub trait RegExpFactory {
    type RegExp: RegExp;

    /// Compile `pattern` with no flags.
    #[inline]
    fn compile(pattern: &str) -> Result<Self::RegExp, Error> {
        Self::compile_with_flags(pattern, "")
    }

    /// Compile `pattern` with `flags`, e.g. "gi".
    fn compile_with_flags(pattern: &str, flags: &str) -> Result<Self::RegExp, Error>;

    /// Escape `input` so that it matches itself literally.
    fn quote(input: &str) -> String;
}

/// A MatchResult is one successful `exec`: the matched text, its capture
/// groups, where it was found and what was searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    // Index 0 is the total match and is always present.
    groups: Vec<Option<String>>,

    // Named groups in pattern order.
    named: Vec<(String, Option<String>)>,

    index: usize,

    // Shared between every match produced by one call.
    input: Arc<str>,
}

impl MatchResult {
    pub(crate) fn new(
        input: Arc<str>,
        index: usize,
        groups: Vec<Option<String>>,
        named: Vec<(String, Option<String>)>,
    ) -> Self {
        debug_assert!(
            matches!(groups.first(), Some(Some(_))),
            "Total match must be present"
        );
        Self {
            groups,
            named,
            index,
            input,
        }
    }

    /// Access a group by index. Index 0 is the total match, index 1 is the
    /// first capture group.
    ///
    /// Returns None for an index past the last group and for a group that
    /// did not participate in the match. Some backends report the latter
    /// as an empty string instead, so callers should not distinguish the two.
    #[inline]
    pub fn group(&self, idx: usize) -> Option<&str> {
        self.groups.get(idx)?.as_deref()
    }

    /// Access a named group by name.
    #[inline]
    pub fn named_group(&self, name: &str) -> Option<&str> {
        self.named
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether the regex declared a group called `name`.
    #[inline]
    pub fn has_named_group(&self, name: &str) -> bool {
        self.named.iter().any(|(n, _)| n == name)
    }

    /// Whether the regex declared any named groups.
    #[inline]
    pub fn has_named_groups(&self) -> bool {
        !self.named.is_empty()
    }

    /// The number of groups, counting the total match. Always at least 1.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// The byte offset of the match in [`input`](MatchResult::input).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The byte offset just past the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.index + self.matched().len()
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.index..self.end()
    }

    /// The string that was searched.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The total match.
    #[inline]
    pub fn matched(&self) -> &str {
        self.group(0).unwrap_or_default()
    }

    /// Iterate over all groups, starting with the total match.
    #[inline]
    pub fn groups(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.groups.iter().map(|g| g.as_deref())
    }
}

/// The pieces produced by a split. Pieces may be overwritten in place but
/// the result cannot grow or shrink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    pieces: Vec<String>,
}

impl SplitResult {
    pub(crate) fn new(pieces: Vec<String>) -> Self {
        Self { pieces }
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.pieces.get(idx).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Overwrite the piece at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn set(&mut self, idx: usize, value: impl Into<String>) {
        self.pieces[idx] = value.into();
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.pieces.iter().map(String::as_str)
    }

    #[inline]
    pub fn into_vec(self) -> Vec<String> {
        self.pieces
    }
}

impl Index<usize> for SplitResult {
    type Output = str;

    #[inline]
    fn index(&self, idx: usize) -> &str {
        &self.pieces[idx]
    }
}

impl IntoIterator for SplitResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.into_iter()
    }
}
