use crate::error::Error;
use core::fmt;

/// Flags a [`RegExp`](crate::RegExp) was compiled with.
/// The default flags are non-global, case-sensitive and not multiline.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// If set, `exec` walks successive matches through the cursor and
    /// `replace` replaces every match.
    /// Equivalent to the 'g' flag in JavaScript.
    pub global: bool,

    /// If set, make the regex case-insensitive.
    /// Equivalent to the 'i' flag in JavaScript.
    pub ignore_case: bool,

    /// If set, ^ and $ match at line separators, not just the input boundaries.
    /// Equivalent to the 'm' flag in JavaScript.
    pub multiline: bool,

    /// If set, . matches at line separators as well as any other character.
    /// Equivalent to the 's' flag in JavaScript. Native backend only.
    pub dot_all: bool,

    /// If set, the regex is interpreted as a Unicode regex.
    /// Equivalent to the 'u' flag in JavaScript. Native backend only.
    pub unicode: bool,
}

impl Flags {
    /// Parse `flags`, accepting only the characters in `accepted`.
    /// Unknown and repeated flags are rejected; the error names `pattern`.
    pub(crate) fn parse(pattern: &str, flags: &str, accepted: &str) -> Result<Self, Error> {
        let mut result = Self::default();
        for c in flags.chars() {
            if !accepted.contains(c) {
                return Err(Error::pattern(
                    pattern,
                    format!("unknown flag '{}' in \"{}\"", c, flags),
                ));
            }
            let slot = match c {
                'g' => &mut result.global,
                'i' => &mut result.ignore_case,
                'm' => &mut result.multiline,
                's' => &mut result.dot_all,
                'u' => &mut result.unicode,
                _ => unreachable!("accepted flags are a subset of gimsu"),
            };
            if *slot {
                return Err(Error::pattern(
                    pattern,
                    format!("duplicate flag '{}' in \"{}\"", c, flags),
                ));
            }
            *slot = true;
        }
        Ok(result)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.global {
            f.write_str("g")?;
        }
        if self.ignore_case {
            f.write_str("i")?;
        }
        if self.multiline {
            f.write_str("m")?;
        }
        if self.dot_all {
            f.write_str("s")?;
        }
        if self.unicode {
            f.write_str("u")?;
        }
        Ok(())
    }
}
