//! Per-user credentials: application-specific passwords, OAuth tokens,
//! backup verification codes and two-step verification.

use dirtool_core::models;
use dirtool_core::render::{decode_pretty, decode_untyped};
use dirtool_core::{Endpoint, Method, ParamSpec};

const USER_KEY: &[ParamSpec] =
    &[ParamSpec::string("userKey", "Identifies the user: primary email, alias or unique ID.")];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/users/{userKey}/asps",
        description: "Lists the ASPs issued by a user.",
        path_params: USER_KEY,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Asps>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/users/{userKey}/asps/{codeId}",
        description: "Gets information about an ASP issued by a user.",
        path_params: &[
            ParamSpec::string("userKey", "Identifies the user: primary email, alias or unique ID."),
            ParamSpec::string("codeId", "The unique ID of the ASP."),
        ],
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Asp>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/users/{userKey}/asps/{codeId}",
        description: "Deletes an ASP issued by a user.",
        path_params: &[
            ParamSpec::string("userKey", "Identifies the user: primary email, alias or unique ID."),
            ParamSpec::string("codeId", "The unique ID of the ASP to be deleted."),
        ],
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/users/{userKey}/tokens",
        description: "Returns the set of tokens specified user has issued to 3rd party apps.",
        path_params: USER_KEY,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Tokens>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/users/{userKey}/tokens/{clientId}",
        description: "Gets information about an access token issued by a user.",
        path_params: &[
            ParamSpec::string("userKey", "Identifies the user: primary email, alias or unique ID."),
            ParamSpec::string("clientId", "The Client ID of the application the token is for."),
        ],
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Token>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/users/{userKey}/tokens/{clientId}",
        description: "Deletes all access tokens issued by a user for an application.",
        path_params: &[
            ParamSpec::string("userKey", "Identifies the user: primary email, alias or unique ID."),
            ParamSpec::string("clientId", "The Client ID of the application the token is for."),
        ],
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/users/{userKey}/verificationCodes",
        description: "Returns the current set of valid backup verification codes for a user.",
        path_params: USER_KEY,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::VerificationCodes>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/users/{userKey}/verificationCodes/generate",
        description: "Generates new backup verification codes for the user.",
        path_params: &[ParamSpec::string("userKey", "Email or immutable ID of the user.")],
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/users/{userKey}/verificationCodes/invalidate",
        description: "Invalidates the current backup verification codes for the user.",
        path_params: &[ParamSpec::string("userKey", "Email or immutable ID of the user.")],
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/users/{userKey}/twoStepVerification/turnOff",
        description: "Turns off 2-Step Verification for user.",
        path_params: USER_KEY,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
];
