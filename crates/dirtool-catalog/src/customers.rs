//! Customer account settings.

use dirtool_core::models;
use dirtool_core::render::decode_pretty;
use dirtool_core::{Endpoint, Method, ParamSpec};

use crate::codecs;

const CUSTOMER_KEY: &[ParamSpec] =
    &[ParamSpec::string("customerKey", "ID of the customer to be retrieved or updated.")];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customers/{customerKey}",
        description: "Retrieves a customer.",
        path_params: CUSTOMER_KEY,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Customer>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/customers/{customerKey}",
        description: "Updates a customer.",
        path_params: CUSTOMER_KEY,
        query_params: &[],
        body: Some(&codecs::CUSTOMER),
        decode: decode_pretty::<models::Customer>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/customers/{customerKey}",
        description: "Patches a customer.",
        path_params: CUSTOMER_KEY,
        query_params: &[],
        body: Some(&codecs::CUSTOMER),
        decode: decode_pretty::<models::Customer>,
    },
];
