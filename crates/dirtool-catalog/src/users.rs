//! Users, user aliases and user photos.

use dirtool_core::models;
use dirtool_core::render::{decode_pretty, decode_untyped};
use dirtool_core::{Endpoint, Method, ParamSpec};

use crate::codecs;

/// `users.list` and `users.watch` take the same query parameters.
const LIST_QUERY: &[ParamSpec] = &[
    ParamSpec::string("customFieldMask", "A comma-separated list of schema names."),
    ParamSpec::string("customer", "The unique ID for the customer's Google Workspace account."),
    ParamSpec::string("domain", "The domain name."),
    ParamSpec::string("event", "Event on which subscription is intended (if subscribing)."),
    ParamSpec::number("maxResults", "Maximum number of results to return."),
    ParamSpec::string("orderBy", "Property to use for sorting results."),
    ParamSpec::string("pageToken", "Token to specify next page in the list."),
    ParamSpec::string("projection", "What subset of fields to fetch for this user."),
    ParamSpec::string("query", "Query string for searching user fields."),
    ParamSpec::string("showDeleted", "If set to `true`, retrieves the list of deleted users."),
    ParamSpec::string("sortOrder", "Whether to return results in ascending or descending order."),
    ParamSpec::string("viewType", "Whether to fetch the administrator-only or public view."),
];

const GET_QUERY: &[ParamSpec] = &[
    ParamSpec::string("customFieldMask", "A comma-separated list of schema names."),
    ParamSpec::string("projection", "What subset of fields to fetch for this user."),
    ParamSpec::string("viewType", "Whether to fetch the administrator-only or public view."),
];

const USER_KEY: &[ParamSpec] =
    &[ParamSpec::string("userKey", "Identifies the user: primary email, alias or unique ID.")];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/users",
        description: "Retrieves a paginated list of either deleted users or all users in a domain.",
        path_params: &[],
        query_params: LIST_QUERY,
        body: None,
        decode: decode_pretty::<models::Users>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/users",
        description: "Creates a user.",
        path_params: &[],
        query_params: &[ParamSpec::boolean(
            "resolveConflictAccount",
            "Whether to resolve a conflicting unmanaged account.",
        )],
        body: Some(&codecs::USER),
        decode: decode_pretty::<models::User>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/users/{userKey}",
        description: "Retrieves a user.",
        path_params: USER_KEY,
        query_params: GET_QUERY,
        body: None,
        decode: decode_pretty::<models::User>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/users/{userKey}",
        description: "Updates a user.",
        path_params: USER_KEY,
        query_params: &[],
        body: Some(&codecs::USER),
        decode: decode_pretty::<models::User>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/users/{userKey}",
        description: "Updates a user using patch semantics.",
        path_params: USER_KEY,
        query_params: &[],
        body: Some(&codecs::USER),
        decode: decode_pretty::<models::User>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/users/{userKey}",
        description: "Deletes a user.",
        path_params: USER_KEY,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/users/{userKey}/makeAdmin",
        description: "Makes a user a super administrator.",
        path_params: USER_KEY,
        query_params: &[],
        body: Some(&codecs::USER_MAKE_ADMIN),
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/users/{userKey}/undelete",
        description: "Undeletes a deleted user.",
        path_params: &[ParamSpec::string("userKey", "The immutable id of the user.")],
        query_params: &[],
        body: Some(&codecs::USER_UNDELETE),
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/users/{userKey}/signOut",
        description: "Signs a user out of all web and device sessions and resets their cookies.",
        path_params: USER_KEY,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/users/watch",
        description: "Watches for changes in users list.",
        path_params: &[],
        query_params: LIST_QUERY,
        body: Some(&codecs::CHANNEL),
        decode: decode_pretty::<models::Channel>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/users/{userKey}/aliases",
        description: "Lists all aliases for a user.",
        path_params: USER_KEY,
        query_params: &[ParamSpec::string("event", "Events to watch for.")],
        body: None,
        decode: decode_pretty::<models::Aliases>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/users/{userKey}/aliases",
        description: "Adds an alias.",
        path_params: USER_KEY,
        query_params: &[],
        body: Some(&codecs::USER_ALIAS),
        decode: decode_pretty::<models::UserAlias>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/users/{userKey}/aliases/watch",
        description: "Watches for changes in users list.",
        path_params: USER_KEY,
        query_params: &[ParamSpec::string("event", "Events to watch for.")],
        body: Some(&codecs::CHANNEL),
        decode: decode_pretty::<models::Channel>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/users/{userKey}/aliases/{alias}",
        description: "Removes an alias.",
        path_params: &[
            ParamSpec::string("userKey", "Identifies the user: primary email, alias or unique ID."),
            ParamSpec::string("alias", "The alias to be removed."),
        ],
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/users/{userKey}/photos/thumbnail",
        description: "Retrieves the user's photo.",
        path_params: USER_KEY,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::UserPhoto>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/users/{userKey}/photos/thumbnail",
        description: "Adds a photo for the user.",
        path_params: USER_KEY,
        query_params: &[],
        body: Some(&codecs::USER_PHOTO),
        decode: decode_pretty::<models::UserPhoto>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/users/{userKey}/photos/thumbnail",
        description: "Adds a photo for the user using patch semantics.",
        path_params: USER_KEY,
        query_params: &[],
        body: Some(&codecs::USER_PHOTO),
        decode: decode_pretty::<models::UserPhoto>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/users/{userKey}/photos/thumbnail",
        description: "Removes the user's photo.",
        path_params: USER_KEY,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
];
