use std::ops::Range;

/// A maximal run of text sharing redaction status, produced by [tokenize].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub redacted: bool,
}

impl Segment {
    pub fn plain<S: Into<String>>(text: S) -> Segment {
        Segment {
            text: text.into(),
            redacted: false,
        }
    }

    pub fn redacted<S: Into<String>>(text: S) -> Segment {
        Segment {
            text: text.into(),
            redacted: true,
        }
    }

    /// Whether the text is a non-empty run of whitespace
    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }
}

const OPEN_TAG: &str = "<redact>";
const CLOSE_TAG: &str = "</redact>";

const OPEN_LEN: usize = OPEN_TAG.len();
const CLOSE_LEN: usize = CLOSE_TAG.len();

/// Find `needle` in `haystack` at or after byte offset `from`, comparing
/// ASCII case-insensitively. Scans every byte offset, so overlapping
/// candidates (e.g. `]]` inside `]]]`) are all considered. Safe on UTF-8
/// because an ASCII needle can only match at character boundaries.
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if haystack.len() < needle.len() || from > haystack.len() - needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// A matched redaction marker: the byte range of the whole marker and the
/// byte range of the concealed inner text.
struct MarkerSpan {
    outer: Range<usize>,
    inner: Range<usize>,
}

/// Locate `<redact>…</redact>` spans: for each case-insensitive opening tag,
/// the nearest subsequent closing tag wins (non-greedy). The inner text may
/// be empty and may span newlines. An opener with no closer ends the scan;
/// its text falls through as plain content.
fn tag_spans(text: &str) -> Vec<MarkerSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(open) = find_ci(text, OPEN_TAG, pos) {
        let inner_start = open + OPEN_LEN;
        match find_ci(text, CLOSE_TAG, inner_start) {
            Some(close) => {
                let end = close + CLOSE_LEN;
                spans.push(MarkerSpan {
                    outer: open..end,
                    inner: inner_start..close,
                });
                pos = end;
            }
            None => break,
        }
    }
    spans
}

/// Locate legacy `[[…]]` spans. The inner text must be at least one
/// character long, and the nearest closing `]]` at least one byte past the
/// opener wins, mirroring a non-greedy `\[\[(.+?)\]\]` match.
fn bracket_spans(text: &str) -> Vec<MarkerSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(open) = find_ci(text, "[[", pos) {
        let inner_start = open + 2;
        match find_ci(text, "]]", inner_start + 1) {
            Some(close) => {
                let end = close + 2;
                spans.push(MarkerSpan {
                    outer: open..end,
                    inner: inner_start..close,
                });
                pos = end;
            }
            None => break,
        }
    }
    spans
}

/// Split a text string into alternating plain/redacted segments.
///
/// If the text contains a (case-insensitive) `<redact>` marker anywhere,
/// tag-delimited matching is used for the whole string; otherwise the legacy
/// `[[…]]` bracket syntax applies. The two are never mixed: bracket markers
/// in a string that also contains a tag marker are left as plain text.
///
/// Empty input yields a single empty plain segment, never an empty vec —
/// callers rely on this to render a blank line placeholder. Segments cover
/// the input in order with only the marker delimiters dropped; for input
/// containing no well-formed marker, concatenating the segment texts
/// reproduces the input exactly.
pub fn tokenize(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return vec![Segment::plain("")];
    }

    let spans = if find_ci(text, OPEN_TAG, 0).is_some() {
        tag_spans(text)
    } else {
        bracket_spans(text)
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for span in spans {
        if span.outer.start > last {
            segments.push(Segment::plain(&text[last..span.outer.start]));
        }
        segments.push(Segment::redacted(&text[span.inner]));
        last = span.outer.end;
    }
    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }
    if segments.is_empty() {
        segments.push(Segment::plain(text));
    }
    segments
}

/// Subdivide segments at whitespace boundaries, keeping each whitespace run
/// as its own segment so exact spacing survives wrapping. Zero-length parts
/// are discarded; the redaction flag is inherited unchanged; order is
/// preserved. Whitespace is Unicode `White_Space` (so NBSP splits too).
pub fn split_pieces(segments: &[Segment]) -> Vec<Segment> {
    let mut pieces = Vec::new();
    for segment in segments {
        let mut run_start = 0;
        let mut run_is_ws: Option<bool> = None;
        for (i, ch) in segment.text.char_indices() {
            let ws = ch.is_whitespace();
            match run_is_ws {
                Some(previous) if previous != ws => {
                    pieces.push(Segment {
                        text: segment.text[run_start..i].to_string(),
                        redacted: segment.redacted,
                    });
                    run_start = i;
                    run_is_ws = Some(ws);
                }
                Some(_) => {}
                None => run_is_ws = Some(ws),
            }
        }
        if run_is_ws.is_some() {
            pieces.push(Segment {
                text: segment.text[run_start..].to_string(),
                redacted: segment.redacted,
            });
        }
    }
    pieces
}

fn snap_to_char_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Wrap the selected byte range of `value` in a `<redact>…</redact>` marker,
/// or insert a `<redact>REDACTED</redact>` placeholder when the selection is
/// empty. Returns the new string and the byte range covering exactly the
/// inner content, so an editor can reposition its selection there.
///
/// Out-of-range or mid-character indices are snapped down to the nearest
/// valid boundary rather than failing.
pub fn redact_selection(value: &str, selection: Range<usize>) -> (String, Range<usize>) {
    let start = snap_to_char_boundary(value, selection.start);
    let end = snap_to_char_boundary(value, selection.end.max(start));

    let selected = &value[start..end];
    let insert = if selected.is_empty() {
        format!("{OPEN_TAG}REDACTED{CLOSE_TAG}")
    } else {
        format!("{OPEN_TAG}{selected}{CLOSE_TAG}")
    };

    let mut out = String::with_capacity(value.len() + OPEN_LEN + CLOSE_LEN + 8);
    out.push_str(&value[..start]);
    out.push_str(&insert);
    out.push_str(&value[end..]);

    let inner = (start + OPEN_LEN)..(start + insert.len() - CLOSE_LEN);
    (out, inner)
}
