//! Organizational units.

use dirtool_core::models;
use dirtool_core::render::{decode_pretty, decode_untyped};
use dirtool_core::{Endpoint, Method, ParamSpec};

use crate::codecs;

const CUSTOMER_ID: &[ParamSpec] = &[ParamSpec::string(
    "customerId",
    "The unique ID for the customer's Google Workspace account, or `my_customer`.",
)];

const CUSTOMER_AND_PATH: &[ParamSpec] = &[
    ParamSpec::string(
        "customerId",
        "The unique ID for the customer's Google Workspace account, or `my_customer`.",
    ),
    ParamSpec::string("orgUnitPath", "The full path of the organizational unit or its unique ID."),
];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customerId}/orgunits",
        description: "Retrieves a list of all organizational units for an account.",
        path_params: CUSTOMER_ID,
        query_params: &[
            ParamSpec::string("orgUnitPath", "The full path to the organizational unit."),
            ParamSpec::string("type", "Whether to return all sub-organizations or just immediate children."),
        ],
        body: None,
        decode: decode_pretty::<models::OrgUnits>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customerId}/orgunits",
        description: "Adds an organizational unit.",
        path_params: CUSTOMER_ID,
        query_params: &[],
        body: Some(&codecs::ORG_UNIT),
        decode: decode_pretty::<models::OrgUnit>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customerId}/orgunits/{orgUnitPath}",
        description: "Retrieves an organizational unit.",
        path_params: CUSTOMER_AND_PATH,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::OrgUnit>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/customer/{customerId}/orgunits/{orgUnitPath}",
        description: "Updates an organizational unit.",
        path_params: CUSTOMER_AND_PATH,
        query_params: &[],
        body: Some(&codecs::ORG_UNIT),
        decode: decode_pretty::<models::OrgUnit>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/customer/{customerId}/orgunits/{orgUnitPath}",
        description: "Updates an organizational unit using patch semantics.",
        path_params: CUSTOMER_AND_PATH,
        query_params: &[],
        body: Some(&codecs::ORG_UNIT),
        decode: decode_pretty::<models::OrgUnit>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/customer/{customerId}/orgunits/{orgUnitPath}",
        description: "Removes an organizational unit.",
        path_params: CUSTOMER_AND_PATH,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
];
