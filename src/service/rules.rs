use crate::model::{HttpRoute, HttpRouteSpec};

use super::filters::validate_rule_filters;
use super::matches::{validate_header_matches, validate_query_param_matches};
use super::{FieldPath, ParentRefValidator, ValidationError};

/// Validates a whole route document rooted at `spec`.
pub fn validate_route(
    route: &HttpRoute,
    parent_refs: &dyn ParentRefValidator,
) -> Vec<ValidationError> {
    validate_route_spec(&route.spec, &FieldPath::new("spec"), parent_refs)
}

/// Runs every consistency check over every rule and returns the complete
/// violation list in discovery order. Nothing short-circuits: a finding in
/// one rule never suppresses findings in another, and the parent-ref
/// collaborator always runs last, exactly once.
pub fn validate_route_spec(
    spec: &HttpRouteSpec,
    path: &FieldPath,
    parent_refs: &dyn ParentRefValidator,
) -> Vec<ValidationError> {
    let mut errs = Vec::new();

    for (i, rule) in spec.rules.iter().enumerate() {
        let rule_path = path.child("rules").index(i);
        errs.extend(validate_rule_filters(&rule.filters, &rule_path));

        for (j, backend_ref) in rule.backend_refs.iter().enumerate() {
            errs.extend(validate_rule_filters(
                &backend_ref.filters,
                &rule_path.child("backendRefs").index(j),
            ));
        }

        for (j, route_match) in rule.matches.iter().enumerate() {
            let match_path = rule_path.child("matches").index(j);
            if !route_match.headers.is_empty() {
                errs.extend(validate_header_matches(
                    &route_match.headers,
                    &match_path.child("headers"),
                ));
            }
            if !route_match.query_params.is_empty() {
                errs.extend(validate_query_param_matches(
                    &route_match.query_params,
                    &match_path.child("queryParams"),
                ));
            }
        }
    }

    errs.extend(parent_refs.validate_parent_refs(&spec.parent_refs, path));
    errs
}
