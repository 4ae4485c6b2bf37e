//! Domains and domain aliases.

use dirtool_core::models;
use dirtool_core::render::{decode_pretty, decode_untyped};
use dirtool_core::{Endpoint, Method, ParamSpec};

use crate::codecs;

const CUSTOMER: &[ParamSpec] =
    &[ParamSpec::string("customer", "Immutable ID of the Google Workspace account.")];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/domains",
        description: "Lists the domains of the customer.",
        path_params: CUSTOMER,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::DomainsList>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customer}/domains",
        description: "Inserts a domain of the customer.",
        path_params: CUSTOMER,
        query_params: &[],
        body: Some(&codecs::DOMAINS),
        decode: decode_pretty::<models::Domains>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/domains/{domainName}",
        description: "Retrieves a domain of the customer.",
        path_params: &[
            ParamSpec::string("customer", "Immutable ID of the Google Workspace account."),
            ParamSpec::string("domainName", "Name of domain to be retrieved."),
        ],
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Domains>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/customer/{customer}/domains/{domainName}",
        description: "Deletes a domain of the customer.",
        path_params: &[
            ParamSpec::string("customer", "Immutable ID of the Google Workspace account."),
            ParamSpec::string("domainName", "Name of domain to be deleted."),
        ],
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/domainaliases",
        description: "Lists the domain aliases of the customer.",
        path_params: CUSTOMER,
        query_params: &[ParamSpec::string(
            "parentDomainName",
            "Name of the parent domain for which domain aliases are to be fetched.",
        )],
        body: None,
        decode: decode_pretty::<models::DomainAliases>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customer}/domainaliases",
        description: "Inserts a domain alias of the customer.",
        path_params: CUSTOMER,
        query_params: &[],
        body: Some(&codecs::DOMAIN_ALIAS),
        decode: decode_pretty::<models::DomainAlias>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/domainaliases/{domainAliasName}",
        description: "Retrieves a domain alias of the customer.",
        path_params: &[
            ParamSpec::string("customer", "Immutable ID of the Google Workspace account."),
            ParamSpec::string("domainAliasName", "Name of domain alias to be retrieved."),
        ],
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::DomainAlias>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/customer/{customer}/domainaliases/{domainAliasName}",
        description: "Deletes a domain alias of the customer.",
        path_params: &[
            ParamSpec::string("customer", "Immutable ID of the Google Workspace account."),
            ParamSpec::string("domainAliasName", "Name of domain alias to be deleted."),
        ],
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
];
