// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Masking of matched spans

use std::borrow::Cow;
use std::iter;

/// Incrementally rebuilds a text with matched spans masked.
///
/// Both engines feed spans in ascending, non-overlapping order; anything else
/// is clipped by [`mask`](SpanMasker::mask). The output buffer is only
/// allocated on the first masked span.
pub struct SpanMasker<'t> {
    chars: &'t [char],
    substitute: char,
    cursor: usize,
    output: Option<String>,
}

impl<'t> SpanMasker<'t> {
    pub fn new(chars: &'t [char], substitute: char) -> Self {
        Self {
            chars,
            substitute,
            cursor: 0,
            output: None,
        }
    }

    /// Copy the unmatched gap since the last span, then mask `len` characters
    /// starting at `start`.
    ///
    /// A span is clipped to the part past the previous span and inside the
    /// text; a span with nothing left after clipping is ignored.
    pub fn mask(&mut self, start: usize, len: usize) {
        let chars = self.chars;
        let end = start.saturating_add(len).min(chars.len());
        if end <= self.cursor || start >= end {
            return;
        }
        let start = start.max(self.cursor);

        let output = self
            .output
            .get_or_insert_with(|| String::with_capacity(chars.len()));

        output.extend(&chars[self.cursor..start]);
        output.extend(iter::repeat(self.substitute).take(end - start));
        self.cursor = end;
    }

    /// Append the trailing unmatched suffix and return the result
    pub fn finish<'a>(self, original: &'a str) -> Cow<'a, str> {
        match self.output {
            // Zero-copy when nothing was masked
            None => Cow::Borrowed(original),
            Some(mut output) => {
                output.extend(&self.chars[self.cursor..]);
                Cow::Owned(output)
            }
        }
    }
}
