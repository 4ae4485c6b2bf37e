//! Custom user schemas.

use dirtool_core::models;
use dirtool_core::render::{decode_pretty, decode_untyped};
use dirtool_core::{Endpoint, Method, ParamSpec};

use crate::codecs;

const CUSTOMER_ID: &[ParamSpec] =
    &[ParamSpec::string("customerId", "Immutable ID of the Google Workspace account.")];

const CUSTOMER_AND_SCHEMA: &[ParamSpec] = &[
    ParamSpec::string("customerId", "Immutable ID of the Google Workspace account."),
    ParamSpec::string("schemaKey", "Name or immutable ID of the schema."),
];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customerId}/schemas",
        description: "Retrieves all schemas for a customer.",
        path_params: CUSTOMER_ID,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Schemas>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customerId}/schemas",
        description: "Creates a schema.",
        path_params: CUSTOMER_ID,
        query_params: &[],
        body: Some(&codecs::SCHEMA),
        decode: decode_pretty::<models::Schema>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customerId}/schemas/{schemaKey}",
        description: "Retrieves a schema.",
        path_params: CUSTOMER_AND_SCHEMA,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Schema>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/customer/{customerId}/schemas/{schemaKey}",
        description: "Updates a schema.",
        path_params: CUSTOMER_AND_SCHEMA,
        query_params: &[],
        body: Some(&codecs::SCHEMA),
        decode: decode_pretty::<models::Schema>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/customer/{customerId}/schemas/{schemaKey}",
        description: "Patches a schema.",
        path_params: CUSTOMER_AND_SCHEMA,
        query_params: &[],
        body: Some(&codecs::SCHEMA),
        decode: decode_pretty::<models::Schema>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/customer/{customerId}/schemas/{schemaKey}",
        description: "Deletes a schema.",
        path_params: CUSTOMER_AND_SCHEMA,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
];
