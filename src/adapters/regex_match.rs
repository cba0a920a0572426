use std::ops::Range;
use std::rc::Rc;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::sequence::Sequence;
use crate::source::Source;

/// One match of a pattern, detached from the text it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexMatch {
    start: usize,
    end: usize,
    groups: Vec<Option<String>>,
}

impl RegexMatch {
    fn from_captures(captures: &Captures<'_>) -> Self {
        let whole = captures.get(0);
        Self {
            start: whole.map_or(0, |m| m.start()),
            end: whole.map_or(0, |m| m.end()),
            groups: captures
                .iter()
                .map(|group| group.map(|m| m.as_str().to_owned()))
                .collect(),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text.
    pub fn as_str(&self) -> &str {
        self.get(0).unwrap_or("")
    }

    /// Capture group `i`, where group 0 is the whole match. `None` if the
    /// group does not exist or did not participate in the match.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.groups.get(i).and_then(|group| group.as_deref())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Cursor over the successive matches of a pattern.
pub struct RegexMatches {
    regex: Regex,
    text: Rc<str>,
    position: usize,
    last_start: Option<usize>,
    done: bool,
}

impl RegexMatches {
    pub(crate) fn new(regex: Regex, text: Rc<str>) -> Self {
        Self {
            regex,
            text,
            position: 0,
            last_start: None,
            done: false,
        }
    }
}

impl Iterator for RegexMatches {
    type Item = RegexMatch;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(captures) = self.regex.captures_at(&self.text, self.position) else {
            self.done = true;
            return None;
        };
        let whole = captures.get(0)?;

        // An empty match leaves the search position where it was
        if self.last_start == Some(whole.start()) {
            tracing::debug!(position = whole.start(), "match did not advance, stopping");
            self.done = true;
            return None;
        }

        self.last_start = Some(whole.start());
        self.position = whole.end();
        Some(RegexMatch::from_captures(&captures))
    }
}

/// A repeatable sequence of the matches of `regex` in `text`, in order.
///
/// Scanning resumes where the previous match ended and stops as soon as a
/// match starts at the same position as the one before it, so patterns
/// able to match the empty string always terminate.
///
/// # Examples
///
/// ```
/// use gensequence::sequence_from_regex_match;
/// use regex::Regex;
///
/// let words = sequence_from_regex_match(&Regex::new(r"\w+").unwrap(), "one two three")
///     .map(|m| m.as_str().to_owned());
///
/// assert_eq!(words.to_vec(), vec!["one", "two", "three"]);
/// ```
pub fn sequence_from_regex_match(regex: &Regex, text: impl Into<String>) -> Sequence<RegexMatch> {
    let regex = regex.clone();
    let text: Rc<str> = text.into().into();
    Sequence::new(Source::factory(move || {
        RegexMatches::new(regex.clone(), Rc::clone(&text))
    }))
}

/// Like [`sequence_from_regex_match`], compiling `pattern` first.
pub fn sequence_from_pattern(pattern: &str, text: impl Into<String>) -> Result<Sequence<RegexMatch>> {
    let regex = Regex::new(pattern)?;
    Ok(sequence_from_regex_match(&regex, text))
}
