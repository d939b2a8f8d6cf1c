use serde::{Deserialize, Serialize};

/// A declarative HTTP route document as submitted to the control plane.
/// Envelope fields other than `spec` (apiVersion, metadata, ...) are not
/// interpreted here and are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpRoute {
    pub spec: HttpRouteSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRouteSpec {
    #[serde(default)]
    pub parent_refs: Vec<ParentRef>,
    #[serde(default)]
    pub hostnames: Vec<String>,
    #[serde(default)]
    pub rules: Vec<RouteRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRule {
    #[serde(default)]
    pub matches: Vec<RouteMatch>,
    #[serde(default)]
    pub filters: Vec<RouteFilter>,
    #[serde(default)]
    pub backend_refs: Vec<BackendRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMatch {
    #[serde(default)]
    pub path: Option<PathMatch>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub headers: Vec<HeaderMatch>,
    #[serde(default)]
    pub query_params: Vec<QueryParamMatch>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathMatch {
    #[serde(default, rename = "type")]
    pub match_type: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Header names are matched case-insensitively; see the duplicate-key
/// checks in `service::matches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderMatch {
    #[serde(default, rename = "type")]
    pub match_type: Option<String>,
    pub name: String,
    pub value: String,
}

/// Query parameter names are matched case-sensitively, unlike headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryParamMatch {
    #[serde(default, rename = "type")]
    pub match_type: Option<String>,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRef {
    pub name: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub weight: Option<i32>,
    #[serde(default)]
    pub filters: Vec<RouteFilter>,
}

/// Reference to a parent a route wants to attach to. Opaque to this crate;
/// cross-reference uniqueness is the parent-ref collaborator's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRef {
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    pub name: String,
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

/// A request/response transformation attached to a rule or a backend ref.
/// Closed set of kinds, tagged on the wire by `type`; the payload field
/// present must match the tag. Payloads of the non-header kinds are carried
/// but not interpreted by the consistency checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RouteFilter {
    RequestHeaderModifier {
        #[serde(rename = "requestHeaderModifier")]
        request_header_modifier: HeaderModifier,
    },
    ResponseHeaderModifier {
        #[serde(rename = "responseHeaderModifier")]
        response_header_modifier: HeaderModifier,
    },
    RequestRedirect {
        #[serde(rename = "requestRedirect")]
        request_redirect: RequestRedirect,
    },
    #[serde(rename = "URLRewrite")]
    UrlRewrite {
        #[serde(rename = "urlRewrite")]
        url_rewrite: UrlRewrite,
    },
    RequestMirror {
        #[serde(rename = "requestMirror")]
        request_mirror: RequestMirror,
    },
    ExtensionRef {
        #[serde(rename = "extensionRef")]
        extension_ref: ExtensionRef,
    },
}

impl RouteFilter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Self::RequestHeaderModifier { .. } => FilterKind::RequestHeaderModifier,
            Self::ResponseHeaderModifier { .. } => FilterKind::ResponseHeaderModifier,
            Self::RequestRedirect { .. } => FilterKind::RequestRedirect,
            Self::UrlRewrite { .. } => FilterKind::UrlRewrite,
            Self::RequestMirror { .. } => FilterKind::RequestMirror,
            Self::ExtensionRef { .. } => FilterKind::ExtensionRef,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    RequestHeaderModifier,
    ResponseHeaderModifier,
    RequestRedirect,
    UrlRewrite,
    RequestMirror,
    ExtensionRef,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestHeaderModifier => "RequestHeaderModifier",
            Self::ResponseHeaderModifier => "ResponseHeaderModifier",
            Self::RequestRedirect => "RequestRedirect",
            Self::UrlRewrite => "URLRewrite",
            Self::RequestMirror => "RequestMirror",
            Self::ExtensionRef => "ExtensionRef",
        }
    }
}

/// Three independent action lists applied to request or response headers.
/// `add` and `set` carry name/value pairs, `remove` carries names only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderModifier {
    #[serde(default)]
    pub add: Vec<HeaderValue>,
    #[serde(default)]
    pub set: Vec<HeaderValue>,
    #[serde(default)]
    pub remove: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRedirect {
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub path: Option<PathModifier>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub status_code: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRewrite {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub path: Option<PathModifier>,
}

/// Path rewrite carried by redirect and rewrite filters. Consistency
/// between `kind` and the populated replacement field is not checked here;
/// that check lives with the schema layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathModifier {
    #[serde(rename = "type")]
    pub kind: PathModifierKind,
    #[serde(default)]
    pub replace_full_path: Option<String>,
    #[serde(default)]
    pub replace_prefix_match: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathModifierKind {
    ReplaceFullPath,
    ReplacePrefixMatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMirror {
    pub backend_ref: BackendObjectReference,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendObjectReference {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionRef {
    #[serde(default)]
    pub group: String,
    pub kind: String,
    pub name: String,
}
