//! Groups, group aliases and group members.

use dirtool_core::models;
use dirtool_core::render::{decode_pretty, decode_untyped};
use dirtool_core::{Endpoint, Method, ParamSpec};

use crate::codecs;

const GROUP_KEY: &[ParamSpec] =
    &[ParamSpec::string("groupKey", "Identifies the group: email address, alias or unique ID.")];

const GROUP_AND_MEMBER_KEY: &[ParamSpec] = &[
    ParamSpec::string("groupKey", "Identifies the group: email address, alias or unique ID."),
    ParamSpec::string("memberKey", "Identifies the member: email address, alias or unique ID."),
];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/groups",
        description: "Retrieves all groups of a domain or of a user given a userKey (paginated).",
        path_params: &[],
        query_params: &[
            ParamSpec::string(
                "customer",
                "The unique ID for the customer's Google Workspace account.",
            ),
            ParamSpec::string("domain", "The domain name."),
            ParamSpec::number("maxResults", "Maximum number of results to return."),
            ParamSpec::string("orderBy", "Column to use for sorting results."),
            ParamSpec::string("pageToken", "Token to specify next page in the list."),
            ParamSpec::string("query", "Query string search."),
            ParamSpec::string("sortOrder", "Whether to return results in ascending or descending order."),
            ParamSpec::string("userKey", "Email or immutable ID of a user to list groups for."),
        ],
        body: None,
        decode: decode_pretty::<models::Groups>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/groups",
        description: "Creates a group.",
        path_params: &[],
        query_params: &[],
        body: Some(&codecs::GROUP),
        decode: decode_pretty::<models::Group>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/groups/{groupKey}",
        description: "Retrieves a group's properties.",
        path_params: GROUP_KEY,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Group>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/groups/{groupKey}",
        description: "Updates a group's properties.",
        path_params: GROUP_KEY,
        query_params: &[],
        body: Some(&codecs::GROUP),
        decode: decode_pretty::<models::Group>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/groups/{groupKey}",
        description: "Updates a group's properties using patch semantics.",
        path_params: GROUP_KEY,
        query_params: &[],
        body: Some(&codecs::GROUP),
        decode: decode_pretty::<models::Group>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/groups/{groupKey}",
        description: "Deletes a group.",
        path_params: GROUP_KEY,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/groups/{groupKey}/aliases",
        description: "Lists all aliases for a group.",
        path_params: GROUP_KEY,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Aliases>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/groups/{groupKey}/aliases",
        description: "Adds an alias for the group.",
        path_params: GROUP_KEY,
        query_params: &[],
        body: Some(&codecs::GROUP_ALIAS),
        decode: decode_pretty::<models::GroupAlias>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/groups/{groupKey}/aliases/{alias}",
        description: "Removes an alias.",
        path_params: &[
            ParamSpec::string("groupKey", "Identifies the group: email address, alias or unique ID."),
            ParamSpec::string("alias", "The alias to be removed."),
        ],
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/groups/{groupKey}/members",
        description: "Retrieves a paginated list of all members in a group.",
        path_params: GROUP_KEY,
        query_params: &[
            ParamSpec::boolean("includeDerivedMembership", "Whether to list indirect memberships."),
            ParamSpec::number("maxResults", "Maximum number of results to return."),
            ParamSpec::string("pageToken", "Token to specify next page in the list."),
            ParamSpec::string("roles", "Comma-separated list of member roles to filter by."),
        ],
        body: None,
        decode: decode_pretty::<models::Members>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/groups/{groupKey}/members",
        description: "Adds a user to the specified group.",
        path_params: GROUP_KEY,
        query_params: &[],
        body: Some(&codecs::MEMBER),
        decode: decode_pretty::<models::Member>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/groups/{groupKey}/members/{memberKey}",
        description: "Retrieves a group member's properties.",
        path_params: GROUP_AND_MEMBER_KEY,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Member>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/groups/{groupKey}/members/{memberKey}",
        description: "Updates the membership of a user in the specified group.",
        path_params: GROUP_AND_MEMBER_KEY,
        query_params: &[],
        body: Some(&codecs::MEMBER),
        decode: decode_pretty::<models::Member>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/groups/{groupKey}/members/{memberKey}",
        description: "Updates the membership properties of a user using patch semantics.",
        path_params: GROUP_AND_MEMBER_KEY,
        query_params: &[],
        body: Some(&codecs::MEMBER),
        decode: decode_pretty::<models::Member>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/groups/{groupKey}/members/{memberKey}",
        description: "Removes a member from a group.",
        path_params: GROUP_AND_MEMBER_KEY,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/groups/{groupKey}/hasMember/{memberKey}",
        description: "Checks whether the given user is a member of the group.",
        path_params: GROUP_AND_MEMBER_KEY,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::MembersHasMember>,
    },
];
