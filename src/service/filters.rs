use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::model::{FilterKind, HeaderModifier, RouteFilter};

use super::{FieldPath, ValidationError, ViolationKind};

/// Checks one filter list (a rule's own filters or a backend ref's) for
/// kind-level conflicts, and each header-modifier filter in it for
/// per-header action conflicts. `path` locates the list's owner, e.g.
/// `spec.rules[0]` or `spec.rules[0].backendRefs[1]`.
pub(crate) fn validate_rule_filters(
    filters: &[RouteFilter],
    path: &FieldPath,
) -> Vec<ValidationError> {
    let mut errs = Vec::new();
    let mut counts: HashMap<FilterKind, usize> = HashMap::new();

    for (i, filter) in filters.iter().enumerate() {
        *counts.entry(filter.kind()).or_insert(0) += 1;
        match filter {
            RouteFilter::RequestHeaderModifier {
                request_header_modifier,
            } => {
                errs.extend(validate_header_modifier(
                    request_header_modifier,
                    &path.child("filters").index(i).child("requestHeaderModifier"),
                ));
            }
            RouteFilter::ResponseHeaderModifier {
                response_header_modifier,
            } => {
                errs.extend(validate_header_modifier(
                    response_header_modifier,
                    &path.child("filters").index(i).child("responseHeaderModifier"),
                ));
            }
            _ => {}
        }
    }

    // A presence test, not a per-pair test: however many of each are
    // present, one filter list gets at most one of these.
    if counts.get(&FilterKind::RequestRedirect).copied().unwrap_or(0) > 0
        && counts.get(&FilterKind::UrlRewrite).copied().unwrap_or(0) > 0
    {
        errs.push(ValidationError::new(
            ViolationKind::MutuallyExclusiveFilterKinds,
            path.child("filters"),
            FilterKind::RequestRedirect.as_str(),
            "may specify either RequestRedirect or URLRewrite, but not both",
        ));
    }

    errs
}

/// Checks one header-modifier filter for headers targeted by more than one
/// action across its `add`, `set` and `remove` lists, in that order.
///
/// Per lower-cased name this is a two-state machine: the first occurrence
/// arms it, the second fires exactly one error at the list it occurred in,
/// and any later occurrence is silent. One error per conflicting header,
/// no matter how the repeats are distributed.
pub(crate) fn validate_header_modifier(
    modifier: &HeaderModifier,
    path: &FieldPath,
) -> Vec<ValidationError> {
    let mut errs = Vec::new();
    let mut single_action: HashMap<String, bool> = HashMap::new();

    for action in &modifier.add {
        note_action(
            &mut single_action,
            &action.name,
            &path.child("add"),
            format!("{}: {}", action.name, action.value),
            &mut errs,
        );
    }
    for action in &modifier.set {
        note_action(
            &mut single_action,
            &action.name,
            &path.child("set"),
            format!("{}: {}", action.name, action.value),
            &mut errs,
        );
    }
    for name in &modifier.remove {
        note_action(
            &mut single_action,
            name,
            &path.child("remove"),
            name.clone(),
            &mut errs,
        );
    }

    errs
}

fn note_action(
    single_action: &mut HashMap<String, bool>,
    name: &str,
    list_path: &FieldPath,
    shown: String,
    errs: &mut Vec<ValidationError>,
) {
    match single_action.entry(name.to_ascii_lowercase()) {
        Entry::Vacant(slot) => {
            slot.insert(true);
        }
        Entry::Occupied(mut slot) => {
            if *slot.get() {
                slot.insert(false);
                errs.push(ValidationError::new(
                    ViolationKind::ConflictingHeaderAction,
                    list_path.clone(),
                    shown,
                    "cannot specify multiple actions for header",
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        FilterKind, HeaderModifier, HeaderValue, RequestRedirect, RouteFilter, UrlRewrite,
    };
    use crate::service::{FieldPath, ViolationKind};

    use super::{validate_header_modifier, validate_rule_filters};

    fn header(name: &str, value: &str) -> HeaderValue {
        HeaderValue {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn rule_path() -> FieldPath {
        FieldPath::new("spec").child("rules").index(0)
    }

    #[test]
    fn redirect_and_rewrite_in_one_list_conflict_once() {
        let filters = vec![
            RouteFilter::RequestRedirect {
                request_redirect: RequestRedirect::default(),
            },
            RouteFilter::UrlRewrite {
                url_rewrite: UrlRewrite::default(),
            },
            RouteFilter::RequestRedirect {
                request_redirect: RequestRedirect::default(),
            },
        ];

        let errs = validate_rule_filters(&filters, &rule_path());
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, ViolationKind::MutuallyExclusiveFilterKinds);
        assert_eq!(
            errs[0].to_string(),
            "spec.rules[0].filters: Invalid value: \"RequestRedirect\": may specify either RequestRedirect or URLRewrite, but not both",
        );
    }

    #[test]
    fn redirect_alone_is_fine_even_in_multiples() {
        let filters = vec![
            RouteFilter::RequestRedirect {
                request_redirect: RequestRedirect::default(),
            },
            RouteFilter::RequestRedirect {
                request_redirect: RequestRedirect::default(),
            },
        ];
        assert!(validate_rule_filters(&filters, &rule_path()).is_empty());
    }

    #[test]
    fn header_modifier_errors_carry_the_filter_index() {
        let filters = vec![RouteFilter::ResponseHeaderModifier {
            response_header_modifier: HeaderModifier {
                add: vec![header("x-example", "blueberry")],
                set: vec![header("x-example", "turnip")],
                remove: vec![],
            },
        }];

        let errs = validate_rule_filters(&filters, &rule_path());
        assert_eq!(errs.len(), 1);
        assert_eq!(
            errs[0].path.to_string(),
            "spec.rules[0].filters[0].responseHeaderModifier.set",
        );
    }

    #[test]
    fn overlap_between_add_and_set_reports_each_header_once() {
        let modifier = HeaderModifier {
            add: vec![
                header("x-fruit", "apple"),
                header("x-vegetable", "carrot"),
                header("x-grain", "rye"),
            ],
            set: vec![
                header("x-fruit", "watermelon"),
                header("x-grain", "wheat"),
                header("x-spice", "coriander"),
            ],
            remove: vec![],
        };

        let errs = validate_header_modifier(&modifier, &FieldPath::new("f"));
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].value, "x-fruit: watermelon");
        assert_eq!(errs[1].value, "x-grain: wheat");
        assert!(errs.iter().all(|e| e.kind == ViolationKind::ConflictingHeaderAction));
        assert!(errs.iter().all(|e| e.path.to_string() == "f.set"));
    }

    #[test]
    fn conflicting_names_fold_case() {
        let modifier = HeaderModifier {
            add: vec![header("x-fruit", "apple")],
            set: vec![header("X-Fruit", "watermelon")],
            remove: vec![],
        };

        let errs = validate_header_modifier(&modifier, &FieldPath::new("f"));
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn duplicate_within_a_single_list_still_counts() {
        let modifier = HeaderModifier {
            add: vec![header("x-fruit", "apple"), header("x-fruit", "plum")],
            set: vec![],
            remove: vec![],
        };

        let errs = validate_header_modifier(&modifier, &FieldPath::new("f"));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path.to_string(), "f.add");
    }

    #[test]
    fn third_and_later_occurrences_stay_silent() {
        let modifier = HeaderModifier {
            add: vec![header("x-fruit", "apple"), header("x-fruit", "plum")],
            set: vec![header("x-fruit", "watermelon")],
            remove: vec!["x-fruit".to_string()],
        };

        let errs = validate_header_modifier(&modifier, &FieldPath::new("f"));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path.to_string(), "f.add");
    }

    #[test]
    fn remove_conflicts_show_the_bare_name() {
        let modifier = HeaderModifier {
            add: vec![],
            set: vec![header("x-trace", "on")],
            remove: vec!["X-Trace".to_string()],
        };

        let errs = validate_header_modifier(&modifier, &FieldPath::new("f"));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].value, "X-Trace");
        assert_eq!(errs[0].path.to_string(), "f.remove");
    }

    #[test]
    fn filter_kind_wire_names() {
        assert_eq!(FilterKind::UrlRewrite.as_str(), "URLRewrite");
        assert_eq!(FilterKind::RequestRedirect.as_str(), "RequestRedirect");
    }
}
