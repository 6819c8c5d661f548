//! Mapping between [`Criteria`] and the address-bar query string.

use std::borrow::Cow;

use crate::{ConsultationMode, Criteria, SortKey};

pub const PARAM_QUERY: &str = "query";
pub const PARAM_CONSULTATION_TYPE: &str = "consultationType";
pub const PARAM_SPECIALTY: &str = "specialty";
pub const PARAM_SORT_BY: &str = "sortBy";

const OWNED_PARAMS: [&str; 4] = [
    PARAM_QUERY,
    PARAM_CONSULTATION_TYPE,
    PARAM_SPECIALTY,
    PARAM_SORT_BY,
];

/// How a criteria change is written to browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Overwrite the current entry (filter and sort changes).
    Replace,
    /// Add a new entry (search submission), so "back" steps through searches.
    Push,
}

/// Read criteria from a query string, with or without the leading `?`.
///
/// Repeated `consultationType` and `specialty` parameters accumulate; for
/// `query` and `sortBy` the first occurrence wins. Unknown consultation types
/// and sort keys are ignored.
pub fn criteria_from_query(query_string: &str) -> Criteria {
    let mut criteria = Criteria::default();
    let mut query_seen = false;
    let mut sort_seen = false;

    for (key, value) in parse_pairs(query_string) {
        match key.as_str() {
            PARAM_CONSULTATION_TYPE => {
                if let Some(mode) = ConsultationMode::from_label(&value) {
                    criteria.consultation_types.insert(mode);
                }
            }
            PARAM_SPECIALTY => {
                criteria.specialties.insert(value);
            }
            PARAM_SORT_BY if !sort_seen => {
                sort_seen = true;
                criteria.sort_by = SortKey::parse(&value);
            }
            PARAM_QUERY if !query_seen => {
                query_seen = true;
                criteria.query = value;
            }
            _ => {}
        }
    }

    criteria
}

/// Rewrite the criteria parameters of `existing`, keeping every unrelated
/// parameter verbatim and in place.
///
/// List-valued parameters are replaced, never merged. The result carries no
/// leading `?`.
pub fn query_from_criteria(criteria: &Criteria, existing: &str) -> String {
    let mut pairs = unrelated_pairs(existing);

    if !criteria.query.is_empty() {
        pairs.push(encode_pair(PARAM_QUERY, &criteria.query));
    }
    for mode in &criteria.consultation_types {
        pairs.push(encode_pair(PARAM_CONSULTATION_TYPE, mode.label()));
    }
    for specialty in &criteria.specialties {
        pairs.push(encode_pair(PARAM_SPECIALTY, specialty));
    }
    if let Some(sort) = criteria.sort_by {
        pairs.push(encode_pair(PARAM_SORT_BY, sort.as_str()));
    }

    pairs.join("&")
}

fn unrelated_pairs(existing: &str) -> Vec<String> {
    raw_pairs(existing)
        .filter(|raw| {
            let key = decoded_key(raw);
            !OWNED_PARAMS.contains(&key.as_str())
        })
        .map(str::to_string)
        .collect()
}

fn raw_pairs(query_string: &str) -> impl Iterator<Item = &str> {
    query_string
        .strip_prefix('?')
        .unwrap_or(query_string)
        .split('&')
        .filter(|raw| !raw.is_empty())
}

fn parse_pairs(query_string: &str) -> impl Iterator<Item = (String, String)> + '_ {
    raw_pairs(query_string).map(|raw| {
        let (key, value) = raw.split_once('=').unwrap_or((raw, ""));
        (form_decode(key), form_decode(value))
    })
}

fn decoded_key(raw: &str) -> String {
    let key = raw.split_once('=').map(|(key, _)| key).unwrap_or(raw);
    form_decode(key)
}

fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", form_encode(key), form_encode(value))
}

/// `application/x-www-form-urlencoded` decoding: `+` is a space.
fn form_decode(component: &str) -> String {
    let spaced: Cow<'_, str> = if component.contains('+') {
        Cow::Owned(component.replace('+', " "))
    } else {
        Cow::Borrowed(component)
    };

    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

fn form_encode(component: &str) -> String {
    urlencoding::encode(component).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plus_and_percent_escapes() {
        assert_eq!(form_decode("Dr.+A%26B"), "Dr. A&B");
        assert_eq!(form_decode("%E2%82%B9"), "₹");
    }

    #[test]
    fn malformed_escape_falls_back_to_raw_text() {
        assert_eq!(form_decode("100%"), "100%");
    }

    #[test]
    fn encodes_spaces_as_plus() {
        assert_eq!(form_encode("In Clinic"), "In+Clinic");
        assert_eq!(form_encode("a+b"), "a%2Bb");
    }
}
