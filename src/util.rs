/// Round `pos` up to the nearest char boundary of `text`.
/// Positions past the end are returned unchanged.
#[inline]
pub fn ceil_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos;
    while pos < text.len() && !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

/// Return the position one character after `pos`. Used to step over empty
/// matches. At or past the end this is simply `pos + 1`.
#[inline]
pub fn advance_char(text: &str, pos: usize) -> usize {
    match text.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(c) => pos + c.len_utf8(),
        None => pos + 1,
    }
}
