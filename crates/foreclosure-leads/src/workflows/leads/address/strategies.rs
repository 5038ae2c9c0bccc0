use super::Jurisdiction;

/// Street-type tokens that end the street portion of an address.
const STREET_SUFFIXES: &[&str] = &[
    "ST", "STREET", "AVE", "AVENUE", "RD", "ROAD", "DR", "DRIVE", "LN", "LANE", "CT", "COURT",
    "CIR", "CIRCLE", "BLVD", "PL", "WAY", "TER", "PIKE", "TRL", "HWY", "PKWY",
];

/// A glued city must leave at least this many letters behind the suffix.
const MIN_GLUED_CITY_LEN: usize = 3;

/// Ordered best-effort ways of separating street from city in the text before the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitStrategy {
    LineBreak,
    SuffixWord,
    SuffixGlued,
    CaseTransition,
}

impl SplitStrategy {
    pub(crate) const CHAIN: [SplitStrategy; 4] = [
        SplitStrategy::LineBreak,
        SplitStrategy::SuffixWord,
        SplitStrategy::SuffixGlued,
        SplitStrategy::CaseTransition,
    ];

    fn apply(self, segment: &str, jurisdiction: &Jurisdiction) -> Option<(String, String)> {
        match self {
            SplitStrategy::LineBreak => split_on_line_break(segment),
            SplitStrategy::SuffixWord => split_after_suffix_word(&single_line(segment)),
            SplitStrategy::SuffixGlued => {
                split_after_glued_suffix(&single_line(segment), jurisdiction)
            }
            SplitStrategy::CaseTransition => split_on_case_transition(&single_line(segment)),
        }
    }
}

/// Runs the chain and falls back to "everything is street" when nothing matches.
pub(crate) fn split_street_city(
    segment: &str,
    jurisdiction: &Jurisdiction,
) -> (String, String, Option<SplitStrategy>) {
    let segment = segment
        .trim_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string();
    if segment.is_empty() {
        return (String::new(), String::new(), None);
    }

    for strategy in SplitStrategy::CHAIN {
        if let Some((street, city)) = strategy.apply(&segment, jurisdiction) {
            return (street, city, Some(strategy));
        }
    }

    (single_line(&segment), String::new(), None)
}

fn single_line(segment: &str) -> String {
    segment.replace('\n', " ")
}

fn split_on_line_break(segment: &str) -> Option<(String, String)> {
    let lines: Vec<&str> = segment
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return None;
    }

    Some((lines[0].to_string(), lines[1..].join(" ")))
}

fn is_suffix(token: &str) -> bool {
    let bare = token.trim_matches(|c: char| c == ',' || c == '.');
    STREET_SUFFIXES
        .iter()
        .any(|suffix| suffix.eq_ignore_ascii_case(bare))
}

/// Byte spans of whitespace separated tokens.
fn token_spans(segment: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (idx, ch) in segment.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(begin)) => {
                spans.push((begin, idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(begin) = start {
        spans.push((begin, segment.len()));
    }
    spans
}

/// A whole-word suffix ends the street even if nothing follows it.
fn split_after_suffix_word(segment: &str) -> Option<(String, String)> {
    let spans = token_spans(segment);
    spans
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .find(|(_, (start, end))| is_suffix(&segment[*start..*end]))
        .map(|(_, (_, end))| {
            (
                segment[..*end].to_string(),
                segment[*end..].to_string(),
            )
        })
}

/// Handles "WAYSCHWENKSVILLE": a suffix with the city glued straight onto it.
/// The glued remainder must open with a known municipality, so "PLACE" never becomes "PL" + "ACE".
fn split_after_glued_suffix(segment: &str, jurisdiction: &Jurisdiction) -> Option<(String, String)> {
    let spans = token_spans(segment);
    for (start, end) in spans.iter().skip(2).rev() {
        let token = &segment[*start..*end];
        let best = STREET_SUFFIXES
            .iter()
            .filter(|suffix| {
                token.is_char_boundary(suffix.len())
                    && token[..suffix.len()].eq_ignore_ascii_case(suffix)
            })
            .filter(|suffix| {
                let rest = token[suffix.len()..].trim_end_matches([',', '.']);
                rest.len() >= MIN_GLUED_CITY_LEN && rest.chars().all(|c| c.is_ascii_alphabetic())
            })
            .filter(|suffix| {
                jurisdiction.leads_with_municipality(&segment[start + suffix.len()..])
            })
            .max_by_key(|suffix| suffix.len());

        if let Some(suffix) = best {
            let split_at = start + suffix.len();
            return Some((
                segment[..split_at].to_string(),
                segment[split_at..].to_string(),
            ));
        }
    }
    None
}

/// Last point where a lowercase letter runs straight into an uppercase one.
fn split_on_case_transition(segment: &str) -> Option<(String, String)> {
    let chars: Vec<(usize, char)> = segment.char_indices().collect();
    chars
        .windows(2)
        .rev()
        .find(|pair| pair[0].1.is_lowercase() && pair[1].1.is_uppercase())
        .map(|pair| {
            let split_at = pair[1].0;
            (
                segment[..split_at].to_string(),
                segment[split_at..].to_string(),
            )
        })
}
