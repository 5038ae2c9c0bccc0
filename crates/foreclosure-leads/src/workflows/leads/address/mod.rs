//! Best-effort extraction of street, city, state and ZIP from listing text.
//!
//! Court listings concatenate address parts inconsistently, so parsing is a
//! chain of heuristics rather than a grammar. Failure is never an error: the
//! worst case is an empty address carrying the jurisdiction's default state.

mod municipalities;
mod strategies;

use super::domain::PropertyAddress;
use regex::Regex;
use std::sync::OnceLock;

/// The county of interest and the states its listings may reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jurisdiction {
    pub name: String,
    pub valid_states: Vec<String>,
    pub default_state: String,
    municipalities: Vec<String>,
}

impl Jurisdiction {
    pub fn new(
        name: impl Into<String>,
        valid_states: &[&str],
        default_state: &str,
        municipalities: &[&str],
    ) -> Self {
        let mut municipalities: Vec<String> = municipalities
            .iter()
            .map(|name| collapse_whitespace(name).to_ascii_uppercase())
            .collect();
        // "LOWER MERION" has to be tried before "MERION".
        municipalities.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        municipalities.dedup();

        Self {
            name: name.into(),
            valid_states: valid_states
                .iter()
                .map(|state| state.to_ascii_uppercase())
                .collect(),
            default_state: default_state.to_ascii_uppercase(),
            municipalities,
        }
    }

    pub fn montgomery_county_pa() -> Self {
        Self::new(
            "Montgomery County, PA",
            &["PA", "NJ"],
            "PA",
            municipalities::MONTGOMERY_COUNTY_PA,
        )
    }

    /// Longest known municipality contained in `city`, compared case-insensitively.
    pub fn match_municipality(&self, city: &str) -> Option<&str> {
        let city = collapse_whitespace(city).to_ascii_uppercase();
        if city.is_empty() {
            return None;
        }
        self.municipalities
            .iter()
            .find(|name| city.contains(name.as_str()))
            .map(String::as_str)
    }

    /// Whether `text` opens with a whole municipality name.
    pub(crate) fn leads_with_municipality(&self, text: &str) -> bool {
        let text = clean_component(text).to_ascii_uppercase();
        self.municipalities.iter().any(|name| {
            text.strip_prefix(name.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(' '))
        })
    }
}

impl Default for Jurisdiction {
    fn default() -> Self {
        Self::montgomery_county_pa()
    }
}

/// Parser bound to one jurisdiction's state list and municipality table.
#[derive(Debug, Clone)]
pub struct AddressParser {
    jurisdiction: Jurisdiction,
    state_token: Option<Regex>,
}

struct StateAnchor {
    start: usize,
    state: String,
    zip: String,
}

impl AddressParser {
    pub fn new(jurisdiction: Jurisdiction) -> Self {
        let alternation = jurisdiction
            .valid_states
            .iter()
            .map(|state| regex::escape(state))
            .collect::<Vec<_>>()
            .join("|");
        // No valid states means every address takes the default state.
        let state_token = if alternation.is_empty() {
            None
        } else {
            Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).ok()
        };

        Self {
            jurisdiction,
            state_token,
        }
    }

    pub fn jurisdiction(&self) -> &Jurisdiction {
        &self.jurisdiction
    }

    pub fn parse(&self, raw: &str) -> PropertyAddress {
        self.parse_with_default(raw, &self.jurisdiction.default_state)
    }

    pub fn parse_with_default(&self, raw: &str, default_state: &str) -> PropertyAddress {
        let text = strip_country(primary_alias(&raw.replace("\r\n", "\n").replace('\r', "\n")));
        if text.trim().is_empty() {
            return PropertyAddress::empty(default_state);
        }

        let (before, state, zip) = match self.locate_state(&text) {
            Some(anchor) => (&text[..anchor.start], anchor.state, anchor.zip),
            None => (text.as_str(), default_state.to_ascii_uppercase(), String::new()),
        };

        let (street, city, _) = strategies::split_street_city(before, &self.jurisdiction);
        let street = clean_component(&street);
        let city = clean_component(&city);
        let county_municipality = self
            .jurisdiction
            .match_municipality(&city)
            .map(str::to_string);

        PropertyAddress {
            street,
            city,
            state,
            zip,
            in_target_county: county_municipality.is_some(),
            county_municipality,
        }
    }

    /// Prefers the last state token followed by a ZIP, else the last bare state token.
    fn locate_state(&self, text: &str) -> Option<StateAnchor> {
        let state_token = self.state_token.as_ref()?;
        let mut bare: Option<StateAnchor> = None;
        let mut with_zip: Option<StateAnchor> = None;

        for found in state_token.find_iter(text) {
            let anchor = StateAnchor {
                start: found.start(),
                state: found.as_str().to_ascii_uppercase(),
                zip: zip_after(&text[found.end()..]).unwrap_or_default(),
            };
            if anchor.zip.is_empty() {
                bare = Some(anchor);
            } else {
                with_zip = Some(anchor);
            }
        }

        with_zip.or(bare)
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new(Jurisdiction::default())
    }
}

/// Parses against the default jurisdiction, substituting `default_state` when no state is found.
pub fn parse_address(raw: &str, default_state: &str) -> PropertyAddress {
    static DEFAULT_PARSER: OnceLock<AddressParser> = OnceLock::new();
    DEFAULT_PARSER
        .get_or_init(AddressParser::default)
        .parse_with_default(raw, default_state)
}

/// Five digits right after the state; a `-####` extension is dropped, a sixth digit voids the match.
fn zip_after(rest: &str) -> Option<String> {
    static ZIP: OnceLock<Regex> = OnceLock::new();
    let zip = ZIP.get_or_init(|| {
        Regex::new(r"^[\s,.]*(\d{5})(?:-\d{4})?").expect("static pattern compiles")
    });

    let captures = zip.captures(rest)?;
    let whole = captures.get(0)?;
    if rest[whole.end()..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
    {
        return None;
    }
    captures.get(1).map(|digits| digits.as_str().to_string())
}

/// Keeps only the first of several "A/K/A" aliases.
fn primary_alias(text: &str) -> String {
    static AKA: OnceLock<Regex> = OnceLock::new();
    let aka = AKA.get_or_init(|| Regex::new(r"(?i)\bA/K/A\b").expect("static pattern compiles"));
    match aka.find(text) {
        Some(found) => text[..found.start()].to_string(),
        None => text.to_string(),
    }
}

fn strip_country(text: String) -> String {
    static COUNTRY: OnceLock<Regex> = OnceLock::new();
    let country = COUNTRY.get_or_init(|| {
        Regex::new(r"(?i)[\s,]*\b(?:UNITED STATES(?: OF AMERICA)?|USA)\s*$")
            .expect("static pattern compiles")
    });
    country.replace(&text, "").into_owned()
}

fn clean_component(value: &str) -> String {
    collapse_whitespace(&value.replace(',', " "))
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
