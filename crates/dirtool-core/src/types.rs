//! Endpoint descriptor types
//!
//! Every Directory API operation is described by a static [`Endpoint`] row:
//! HTTP method, path template, declared parameters, an optional body codec
//! and a response decoder. The dispatcher interprets these rows; there is no
//! per-endpoint handler code anywhere in the workspace.

use serde_json::Value;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    fn as_lower_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::Delete => "delete",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

/// Coarse JSON type of a declared parameter, used for the published input
/// schema. Validation beyond required-presence only applies to path
/// parameters, which must be strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamType {
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Object => "object",
            ParamType::Array => "array",
        }
    }
}

/// A declared parameter: a path segment, a query parameter or a body field.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub ty: ParamType,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self { name, ty: ParamType::String, description }
    }

    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self { name, ty: ParamType::Number, description }
    }

    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self { name, ty: ParamType::Boolean, description }
    }

    pub const fn object(name: &'static str, description: &'static str) -> Self {
        Self { name, ty: ParamType::Object, description }
    }

    pub const fn array(name: &'static str, description: &'static str) -> Self {
        Self { name, ty: ParamType::Array, description }
    }
}

/// Typed body construction for POST/PUT/PATCH endpoints.
///
/// `fields` is the advertised field list for the input schema. `encode`
/// round-trips the full argument bag through the endpoint's typed model:
/// fields the model does not know are dropped silently, which makes the
/// resulting body deterministic and the drop idempotent. Values present
/// under a known field name but with the wrong JSON type make the encode
/// fail.
#[derive(Debug, Clone, Copy)]
pub struct BodyCodec {
    /// Model name, for diagnostics only.
    pub model: &'static str,
    pub fields: &'static [ParamSpec],
    pub encode: fn(&Value) -> Result<Value, serde_json::Error>,
}

/// One REST operation of the Directory API.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub method: Method,
    /// Path template relative to the base URL, e.g.
    /// `/admin/directory/v1/users/{userKey}`.
    pub path: &'static str,
    pub description: &'static str,
    /// Required path parameters, in template order. Values must be strings.
    pub path_params: &'static [ParamSpec],
    /// Optional query parameters, appended in declaration order.
    pub query_params: &'static [ParamSpec],
    pub body: Option<&'static BodyCodec>,
    /// Typed response decoder: pretty JSON on success, `None` when the body
    /// does not decode (the dispatcher then passes the raw text through).
    pub decode: fn(&str) -> Option<String>,
}

impl Endpoint {
    /// The published tool name, derived from method and path template.
    pub fn tool_name(&self) -> String {
        derive_tool_name(self.method, self.path)
    }
}

/// Derive a tool name from an HTTP method and a path template.
///
/// The lowercase method is followed by the path with `/` and `:` turned
/// into `_` and the braces of path parameters stripped, e.g.
/// `GET /admin/directory/v1/users/{userKey}` becomes
/// `get_admin_directory_v1_users_userKey`.
pub fn derive_tool_name(method: Method, path: &str) -> String {
    let mut name = String::with_capacity(method.as_str().len() + path.len());
    name.push_str(method.as_lower_str());
    for ch in path.chars() {
        match ch {
            '/' | ':' => name.push('_'),
            '{' | '}' => {}
            other => name.push(other),
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name_simple_path() {
        assert_eq!(
            derive_tool_name(Method::Get, "/admin/directory/v1/users"),
            "get_admin_directory_v1_users"
        );
    }

    #[test]
    fn test_tool_name_with_path_params() {
        assert_eq!(
            derive_tool_name(Method::Get, "/admin/directory/v1/users/{userKey}"),
            "get_admin_directory_v1_users_userKey"
        );
        assert_eq!(
            derive_tool_name(
                Method::Delete,
                "/admin/directory/v1/groups/{groupKey}/members/{memberKey}"
            ),
            "delete_admin_directory_v1_groups_groupKey_members_memberKey"
        );
    }

    #[test]
    fn test_tool_name_with_custom_verb() {
        assert_eq!(
            derive_tool_name(
                Method::Post,
                "/admin/directory/v1/customer/{customerId}/devices/chromeos:batchChangeStatus"
            ),
            "post_admin_directory_v1_customer_customerId_devices_chromeos_batchChangeStatus"
        );
    }

    #[test]
    fn test_method_body_expectations() {
        assert!(Method::Post.has_body());
        assert!(Method::Put.has_body());
        assert!(Method::Patch.has_body());
        assert!(!Method::Get.has_body());
        assert!(!Method::Delete.has_body());
    }
}
