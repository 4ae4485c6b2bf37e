//! Roles, role assignments and privileges.

use dirtool_core::models;
use dirtool_core::render::{decode_pretty, decode_untyped};
use dirtool_core::{Endpoint, Method, ParamSpec};

use crate::codecs;

const CUSTOMER: &[ParamSpec] =
    &[ParamSpec::string("customer", "Immutable ID of the Google Workspace account.")];

const CUSTOMER_AND_ROLE: &[ParamSpec] = &[
    ParamSpec::string("customer", "Immutable ID of the Google Workspace account."),
    ParamSpec::string("roleId", "Immutable ID of the role."),
];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/roles",
        description: "Retrieves a paginated list of all the roles in a domain.",
        path_params: CUSTOMER,
        query_params: &[
            ParamSpec::number("maxResults", "Maximum number of results to return."),
            ParamSpec::string("pageToken", "Token to specify the next page in the list."),
        ],
        body: None,
        decode: decode_pretty::<models::Roles>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customer}/roles",
        description: "Creates a role.",
        path_params: CUSTOMER,
        query_params: &[],
        body: Some(&codecs::ROLE),
        decode: decode_pretty::<models::Role>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/roles/{roleId}",
        description: "Retrieves a role.",
        path_params: CUSTOMER_AND_ROLE,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Role>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/customer/{customer}/roles/{roleId}",
        description: "Updates a role.",
        path_params: CUSTOMER_AND_ROLE,
        query_params: &[],
        body: Some(&codecs::ROLE),
        decode: decode_pretty::<models::Role>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/customer/{customer}/roles/{roleId}",
        description: "Patches a role.",
        path_params: CUSTOMER_AND_ROLE,
        query_params: &[],
        body: Some(&codecs::ROLE),
        decode: decode_pretty::<models::Role>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/customer/{customer}/roles/{roleId}",
        description: "Deletes a role.",
        path_params: CUSTOMER_AND_ROLE,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/roleassignments",
        description: "Retrieves a paginated list of all roleAssignments.",
        path_params: CUSTOMER,
        query_params: &[
            ParamSpec::boolean(
                "includeIndirectRoleAssignments",
                "Whether to fetch indirect role assignments as well as direct ones.",
            ),
            ParamSpec::number("maxResults", "Maximum number of results to return."),
            ParamSpec::string("pageToken", "Token to specify the next page in the list."),
            ParamSpec::string("roleId", "Immutable ID of a role to filter by."),
            ParamSpec::string("userKey", "The primary email address, alias or unique user or group ID."),
        ],
        body: None,
        decode: decode_pretty::<models::RoleAssignments>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customer}/roleassignments",
        description: "Creates a role assignment.",
        path_params: CUSTOMER,
        query_params: &[],
        body: Some(&codecs::ROLE_ASSIGNMENT),
        decode: decode_pretty::<models::RoleAssignment>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/roleassignments/{roleAssignmentId}",
        description: "Retrieves a role assignment.",
        path_params: &[
            ParamSpec::string("customer", "Immutable ID of the Google Workspace account."),
            ParamSpec::string("roleAssignmentId", "Immutable ID of the role assignment."),
        ],
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::RoleAssignment>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/customer/{customer}/roleassignments/{roleAssignmentId}",
        description: "Deletes a role assignment.",
        path_params: &[
            ParamSpec::string("customer", "Immutable ID of the Google Workspace account."),
            ParamSpec::string("roleAssignmentId", "Immutable ID of the role assignment."),
        ],
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/roles/ALL/privileges",
        description: "Retrieves a paginated list of all privileges for a customer.",
        path_params: CUSTOMER,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Privileges>,
    },
];
