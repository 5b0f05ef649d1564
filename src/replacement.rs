//! Replacement templates.
//!
//! A template is parsed once per `replace` call into a list of pieces and
//! then expanded against every match. The two backends tokenize templates
//! differently; see [`Template::parse_ecma`] and [`Template::parse_host`].

use crate::api::MatchResult;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    /// Capture group by index; 0 is the total match.
    Group(usize),
    Named(String),
    /// The input before the match.
    Prefix,
    /// The input after the match.
    Suffix,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    fn push_literal(&mut self, s: &str) {
        if let Some(Piece::Literal(last)) = self.pieces.last_mut() {
            last.push_str(s);
        } else {
            self.pieces.push(Piece::Literal(s.to_owned()));
        }
    }

    fn push_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.push_literal(c.encode_utf8(&mut buf));
    }

    /// Parse `template` using the EcmaScript GetSubstitution rules.
    /// `group_count` counts capture groups only (not the total match).
    /// Anything that is not a recognised token is kept literally, so this
    /// never fails.
    pub fn parse_ecma(template: &str, group_count: usize, has_names: bool) -> Self {
        let mut result = Self::default();
        let mut rest = template;
        while let Some(dollar) = rest.find('$') {
            result.push_literal(&rest[..dollar]);
            let after = &rest[dollar + 1..];
            let mut chars = after.chars();
            let consumed = match chars.next() {
                Some('$') => {
                    result.push_char('$');
                    1
                }
                Some('&') => {
                    result.pieces.push(Piece::Group(0));
                    1
                }
                Some('`') => {
                    result.pieces.push(Piece::Prefix);
                    1
                }
                Some('\'') => {
                    result.pieces.push(Piece::Suffix);
                    1
                }
                Some(d1) if d1.is_ascii_digit() => {
                    let n1 = digit(d1);
                    let two = chars
                        .next()
                        .filter(char::is_ascii_digit)
                        .map(|d2| n1 * 10 + digit(d2));
                    match two {
                        Some(nn) if nn >= 1 && nn <= group_count => {
                            result.pieces.push(Piece::Group(nn));
                            2
                        }
                        _ if n1 >= 1 && n1 <= group_count => {
                            result.pieces.push(Piece::Group(n1));
                            1
                        }
                        _ => {
                            result.push_char('$');
                            0
                        }
                    }
                }
                Some('<') if has_names => match after[1..].find('>') {
                    Some(close) => {
                        let name = &after[1..close + 1];
                        result.pieces.push(Piece::Named(name.to_owned()));
                        close + 2
                    }
                    None => {
                        result.push_literal("$<");
                        1
                    }
                },
                _ => {
                    result.push_char('$');
                    0
                }
            };
            rest = &after[consumed..];
        }
        result.push_literal(rest);
        result
    }

    /// Parse `template` using host-library rules: `$n` is greedy over
    /// digits while the group exists, `${name}` names a group, `$$` and `$&`
    /// are accepted, backslash is literal. Every other use of `$` is an
    /// error, as is a reference to a group that does not exist.
    pub fn parse_host(template: &str, group_count: usize, names: &[&str]) -> Result<Self, Error> {
        let mut result = Self::default();
        let mut rest = template;
        while let Some(dollar) = rest.find('$') {
            result.push_literal(&rest[..dollar]);
            let after = &rest[dollar + 1..];
            let consumed = match after.chars().next() {
                Some('$') => {
                    result.push_char('$');
                    1
                }
                Some('&') => {
                    result.pieces.push(Piece::Group(0));
                    1
                }
                Some(c @ '`') | Some(c @ '\'') => {
                    return Err(Error::replacement(
                        template,
                        format!("${} is not supported by this backend", c),
                    ));
                }
                Some(d) if d.is_ascii_digit() => {
                    let mut group = digit(d);
                    if group > group_count {
                        return Err(Error::replacement(
                            template,
                            format!("no group {}", group),
                        ));
                    }
                    let mut len = 1;
                    for d in after[1..].chars().take_while(char::is_ascii_digit) {
                        let wider = group * 10 + digit(d);
                        if wider > group_count {
                            break;
                        }
                        group = wider;
                        len += 1;
                    }
                    result.pieces.push(Piece::Group(group));
                    len
                }
                Some('{') => {
                    let close = after.find('}').ok_or_else(|| {
                        Error::replacement(template, "named group reference is missing a '}'")
                    })?;
                    let name = &after[1..close];
                    if !names.contains(&name) {
                        return Err(Error::replacement(
                            template,
                            format!("no group with name {{{}}}", name),
                        ));
                    }
                    result.pieces.push(Piece::Named(name.to_owned()));
                    close + 1
                }
                Some(_) => {
                    return Err(Error::replacement(template, "illegal group reference"));
                }
                None => {
                    return Err(Error::replacement(
                        template,
                        "illegal group reference: group index is missing",
                    ));
                }
            };
            rest = &after[consumed..];
        }
        result.push_literal(rest);
        Ok(result)
    }

    /// Append the expansion of this template for `m` to `dst`.
    /// Groups that did not participate expand to nothing.
    pub fn expand(&self, m: &MatchResult, dst: &mut String) {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => dst.push_str(s),
                Piece::Group(idx) => dst.push_str(m.group(*idx).unwrap_or_default()),
                Piece::Named(name) => dst.push_str(m.named_group(name).unwrap_or_default()),
                Piece::Prefix => dst.push_str(&m.input()[..m.index()]),
                Piece::Suffix => dst.push_str(&m.input()[m.end()..]),
            }
        }
    }
}

#[inline]
fn digit(c: char) -> usize {
    c.to_digit(10).unwrap_or_default() as usize
}

/// Replace `matches` (ordered, non-overlapping, all against `input`) with the
/// expansion of `template`.
pub fn substitute(input: &str, matches: &[MatchResult], template: &Template) -> String {
    let mut result = String::with_capacity(input.len());
    let mut last = 0;
    for m in matches {
        result.push_str(&input[last..m.index()]);
        template.expand(m, &mut result);
        last = m.end();
    }
    result.push_str(&input[last..]);
    result
}
