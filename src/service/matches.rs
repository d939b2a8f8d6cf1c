use std::collections::{HashMap, HashSet};

use crate::model::{HeaderMatch, QueryParamMatch};

use super::{FieldPath, ValidationError, ViolationKind};

/// Header names collide case-insensitively and are reported in canonical
/// `Header-Name` form.
pub(crate) fn validate_header_matches(
    matches: &[HeaderMatch],
    path: &FieldPath,
) -> Vec<ValidationError> {
    duplicate_match_keys(
        matches.iter().map(|m| m.name.as_str()),
        path,
        |name| name.to_ascii_lowercase(),
        canonical_header_name,
        "cannot match the same header multiple times in the same rule",
    )
}

/// Query parameter names collide case-sensitively; `q` and `Q` are two
/// different parameters. The asymmetry with headers is intentional.
pub(crate) fn validate_query_param_matches(
    matches: &[QueryParamMatch],
    path: &FieldPath,
) -> Vec<ValidationError> {
    duplicate_match_keys(
        matches.iter().map(|m| m.name.as_str()),
        path,
        str::to_string,
        str::to_string,
        "cannot match the same query parameter multiple times in the same rule",
    )
}

/// Shared duplicate scan over a match block's key names. Identity is
/// parameterized by `fold`, and the reported form of a duplicated key by
/// `display` (applied to the folded key). Emits one error per distinct
/// duplicated key, at the block's path, in first-occurrence order.
fn duplicate_match_keys<'a>(
    names: impl Iterator<Item = &'a str> + Clone,
    path: &FieldPath,
    fold: fn(&str) -> String,
    display: fn(&str) -> String,
    message: &str,
) -> Vec<ValidationError> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for name in names.clone() {
        *counts.entry(fold(name)).or_insert(0) += 1;
    }

    let mut errs = Vec::new();
    let mut reported: HashSet<String> = HashSet::new();
    for name in names {
        let key = fold(name);
        if counts[&key] > 1 && reported.insert(key.clone()) {
            errs.push(ValidationError::new(
                ViolationKind::DuplicateMatchKey,
                path.clone(),
                display(&key),
                message,
            ));
        }
    }

    errs
}

/// Conventional HTTP header capitalization: the first letter and every
/// letter following a `-` upper-cased, the rest lower-cased. Names with
/// characters outside the token set are returned untouched.
pub(crate) fn canonical_header_name(name: &str) -> String {
    if !name.chars().all(is_token_char) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for ch in name.chars() {
        if upper {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
        upper = ch == '-';
    }
    out
}

fn is_token_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(ch)
}
