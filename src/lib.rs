/*!

# regexp-shared - one RegExp API, two engines

This crate exposes a single, JavaScript-flavoured regular expression API
(`compile`, `exec`, `test`, `replace`, `split`, flag getters and the
`lastIndex` cursor) on top of one of two engines:

- the **native** adapter wraps [regress](https://docs.rs/regress), an
  EcmaScript engine, and follows JavaScript `RegExp` semantics;
- the **stdlib** adapter wraps [fancy-regex](https://docs.rs/fancy-regex), a
  general purpose backtracking engine, and follows host-library semantics
  where the two disagree.

Which adapter backs the free [`compile`] and [`quote`] functions is decided
at build time through Cargo features; there is no runtime switch.

# Example: test if a string contains a match

```rust
use regexp_shared::RegExp;
let mut re = regexp_shared::compile(r"\d{4}").unwrap();
assert!(re.test("2020-20-05").unwrap());
```

# Example: walking matches with the global flag

```rust
use regexp_shared::RegExp;
let mut re = regexp_shared::compile_with_flags(r"o", "g").unwrap();
let mut seen = Vec::new();
while let Some(m) = re.exec("foo boo").unwrap() {
    seen.push(m.index());
}
assert_eq!(seen, vec![1, 2, 5, 6]);
assert_eq!(re.last_index(), 0);
```

# Example: replacing and splitting

```rust
use regexp_shared::RegExp;
let mut re = regexp_shared::compile(r"(\d+)-(\d+)-(\d+)").unwrap();
assert_eq!(re.replace("2024-01-02", "$3/$2/$1").unwrap(), "02/01/2024");

let re = regexp_shared::compile(",").unwrap();
let pieces = re.split_with_limit("a,b,c", 2).unwrap();
assert_eq!(pieces.into_vec(), vec!["a", "b"]);
```

# Backend differences

The two engines do not accept the same syntax, and a handful of results
are genuinely backend dependent:

- lookbehind, atomic groups, possessive quantifiers, `\A`/`\z` and class
  intersection are engine constructs of the stdlib adapter;
- the pre-match and post-match replacement tokens `` $` `` and `$'` are
  only understood by the native adapter. The stdlib adapter fails with
  [`Error::InvalidReplacement`];
- splitting with a pattern that can match the empty string is not
  normalised between the adapters;
- with the `m` flag the native adapter treats `\r` as a line terminator for
  `^` and `$`, while the stdlib adapter only breaks lines at `\n`;
- an optional group that did not participate may be reported as absent or
  as an empty string. Treat both the same.

All positions (`MatchResult::index`, `last_index`) are UTF-8 byte offsets.

# Crate features

- **backend-native** (default). Enables [`native`]. Selected by the factory
  whenever it is enabled.
- **backend-stdlib** (default). Enables [`stdlib`]. Selected by the factory
  only when `backend-native` is disabled.

*/

#![warn(clippy::all)]

#[cfg(not(any(feature = "backend-native", feature = "backend-stdlib")))]
compile_error!("regexp-shared needs at least one of `backend-native` or `backend-stdlib`");

pub use crate::api::*;
pub use crate::error::Error;
pub use crate::factory::*;
pub use crate::flags::Flags;

mod api;
mod error;
mod factory;
mod flags;
mod replacement;
mod util;

#[cfg(feature = "backend-native")]
pub mod native;

#[cfg(feature = "backend-stdlib")]
pub mod stdlib;
