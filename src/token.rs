use winnow::combinator::separated_pair;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{rest, take_until};

/// `before SEP after`, splitting at the first `separator`. `after` keeps any
/// later occurrences verbatim.
fn split_at<'s>(
    separator: &'s str,
) -> impl Parser<&'s str, (&'s str, &'s str), ErrMode<ContextError>> {
    separated_pair(take_until(0.., separator), separator, rest)
}

/// Split `input` at the first occurrence of `separator`.
pub(crate) fn split_once_on<'s>(input: &'s str, separator: &'s str) -> Option<(&'s str, &'s str)> {
    if separator.is_empty() {
        return None;
    }
    split_at(separator).parse(input).ok()
}
