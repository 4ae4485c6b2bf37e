//! Static catalog of all Admin SDK Directory API endpoints.
//!
//! Each resource module contributes a slice of [`Endpoint`] rows; the
//! [`Catalog`] indexes them by derived tool name. The catalog is built once
//! and shared for the lifetime of the process.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use dirtool_core::Endpoint;

mod channels;
mod codecs;
mod credentials;
mod customers;
mod devices;
mod domains;
mod groups;
mod orgunits;
mod printing;
mod resources;
mod roles;
mod schemas;
mod users;

const GROUPS: &[&[Endpoint]] = &[
    users::ENDPOINTS,
    credentials::ENDPOINTS,
    groups::ENDPOINTS,
    orgunits::ENDPOINTS,
    devices::ENDPOINTS,
    customers::ENDPOINTS,
    printing::ENDPOINTS,
    domains::ENDPOINTS,
    roles::ENDPOINTS,
    schemas::ENDPOINTS,
    resources::ENDPOINTS,
    channels::ENDPOINTS,
];

/// Lookup table from tool name to endpoint descriptor.
pub struct Catalog {
    by_name: HashMap<String, &'static Endpoint>,
}

impl Catalog {
    fn build() -> Self {
        let mut by_name = HashMap::new();
        for endpoint in all_endpoints() {
            by_name.insert(endpoint.tool_name(), endpoint);
        }
        Self { by_name }
    }

    pub fn get(&self, tool_name: &str) -> Option<&'static Endpoint> {
        self.by_name.get(tool_name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// The process-wide catalog.
pub fn catalog() -> &'static Catalog {
    static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::build);
    &CATALOG
}

/// All endpoints in declaration order (stable across runs, grouped by
/// resource).
pub fn all_endpoints() -> impl Iterator<Item = &'static Endpoint> {
    GROUPS.iter().flat_map(|group| group.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirtool_core::Method;
    use std::collections::HashSet;

    /// Path parameter names as they appear in the template, in order.
    fn template_params(path: &str) -> Vec<&str> {
        let mut params = Vec::new();
        let mut rest = path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let end = after.find('}').expect("unbalanced brace in path template");
            params.push(&after[..end]);
            rest = &after[end + 1..];
        }
        params
    }

    #[test]
    fn test_catalog_has_every_endpoint() {
        assert_eq!(all_endpoints().count(), 123);
        assert_eq!(catalog().len(), 123);
    }

    #[test]
    fn test_tool_names_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in all_endpoints() {
            let name = endpoint.tool_name();
            assert!(seen.insert(name.clone()), "duplicate tool name: {name}");
        }
    }

    #[test]
    fn test_path_params_match_template() {
        for endpoint in all_endpoints() {
            let declared: Vec<&str> = endpoint.path_params.iter().map(|p| p.name).collect();
            assert_eq!(
                template_params(endpoint.path),
                declared,
                "path parameter mismatch for {}",
                endpoint.path
            );
        }
    }

    #[test]
    fn test_known_tool_names_resolve() {
        let catalog = catalog();
        for name in [
            "get_admin_directory_v1_users",
            "post_admin_directory_v1_users",
            "get_admin_directory_v1_users_userKey",
            "delete_admin_directory_v1_groups_groupKey_members_memberKey",
            "post_admin_directory_v1_customer_customerId_devices_chromeos_batchChangeStatus",
            "post_admin_directory_v1_customer_customerId_devices_chromeos_deviceId_issueCommand",
            "get_admin_directory_v1_customer_customerId_devices_chromeos_deviceId_commands_commandId",
            "post_admin_directory_v1_parent_chrome_printServers",
            "patch_admin_directory_v1_name",
            "post_admin_directory_v1_users_userKey_twoStepVerification_turnOff",
            "post_admin_directory_v1_channels_stop",
            "get_admin_directory_v1_customer_customer_roles_ALL_privileges",
            "patch_admin_directory_v1_users_userKey_photos_thumbnail",
        ] {
            assert!(catalog.get(name).is_some(), "missing tool: {name}");
        }
        assert!(catalog.get("no_such_tool").is_none());
    }

    #[test]
    fn test_read_endpoints_have_no_body() {
        for endpoint in all_endpoints() {
            if matches!(endpoint.method, Method::Get | Method::Delete) {
                assert!(
                    endpoint.body.is_none(),
                    "{} {} should not declare a body",
                    endpoint.method.as_str(),
                    endpoint.path
                );
            }
        }
    }

    #[test]
    fn test_bodyless_writes_are_the_known_exceptions() {
        // POST endpoints without a request schema send no body at all.
        let bodyless: Vec<String> = all_endpoints()
            .filter(|e| e.method.has_body() && e.body.is_none())
            .map(|e| e.tool_name())
            .collect();
        assert_eq!(
            bodyless,
            [
                "post_admin_directory_v1_users_userKey_signOut",
                "post_admin_directory_v1_users_userKey_verificationCodes_generate",
                "post_admin_directory_v1_users_userKey_verificationCodes_invalidate",
                "post_admin_directory_v1_users_userKey_twoStepVerification_turnOff",
            ]
        );
    }

    #[test]
    fn test_body_codecs_declare_fields() {
        for endpoint in all_endpoints() {
            if let Some(codec) = endpoint.body {
                assert!(
                    !codec.fields.is_empty(),
                    "empty field list for {} body ({})",
                    endpoint.path,
                    codec.model
                );
            }
        }
    }

    #[test]
    fn test_descriptions_are_present() {
        for endpoint in all_endpoints() {
            assert!(!endpoint.description.is_empty(), "{} has no description", endpoint.path);
        }
    }
}
