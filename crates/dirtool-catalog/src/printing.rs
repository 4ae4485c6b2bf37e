//! Chrome printers and print servers.
//!
//! These endpoints use resource-name style paths: `parent` is
//! `customers/{id}` and `name` is the full resource name such as
//! `customers/{id}/chrome/printServers/{server_id}`.

use dirtool_core::models;
use dirtool_core::render::{decode_pretty, decode_untyped};
use dirtool_core::{Endpoint, Method, ParamSpec};

use crate::codecs;

const PARENT: &[ParamSpec] = &[ParamSpec::string(
    "parent",
    "The name of the customer's Google Workspace account. Format: `customers/{id}`.",
)];

const NAME: &[ParamSpec] =
    &[ParamSpec::string("name", "The resource name, e.g. `customers/{id}/chrome/printServers/{server_id}`.")];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/{parent}/chrome/printers",
        description: "List printers configs.",
        path_params: PARENT,
        query_params: &[
            ParamSpec::string("filter", "Search query following the Cloud Search query syntax."),
            ParamSpec::string("orderBy", "The order to sort results by."),
            ParamSpec::string("orgUnitId", "Organization Unit that we want to list the printers for."),
            ParamSpec::number("pageSize", "The maximum number of objects to return."),
            ParamSpec::string("pageToken", "A page token received from a previous call."),
        ],
        body: None,
        decode: decode_pretty::<models::ListPrintersResponse>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/{parent}/chrome/printers",
        description: "Creates a printer under given Organization Unit.",
        path_params: PARENT,
        query_params: &[],
        body: Some(&codecs::PRINTER),
        decode: decode_pretty::<models::Printer>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/{parent}/chrome/printers:batchCreatePrinters",
        description: "Creates printers under given Organization Unit.",
        path_params: PARENT,
        query_params: &[],
        body: Some(&codecs::BATCH_CREATE_PRINTERS),
        decode: decode_pretty::<models::BatchCreatePrintersResponse>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/{parent}/chrome/printers:batchDeletePrinters",
        description: "Deletes printers in batch.",
        path_params: PARENT,
        query_params: &[],
        body: Some(&codecs::BATCH_DELETE_PRINTERS),
        decode: decode_pretty::<models::BatchDeletePrintersResponse>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/{parent}/chrome/printers:listPrinterModels",
        description: "Lists the supported printer models.",
        path_params: PARENT,
        query_params: &[
            ParamSpec::string("filter", "Filer to list only models by a given manufacturer."),
            ParamSpec::number("pageSize", "The maximum number of objects to return."),
            ParamSpec::string("pageToken", "A page token received from a previous call."),
        ],
        body: None,
        decode: decode_pretty::<models::ListPrinterModelsResponse>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/{parent}/chrome/printServers",
        description: "Lists print server configurations.",
        path_params: PARENT,
        query_params: &[
            ParamSpec::string("filter", "Search query in Cloud Search query syntax."),
            ParamSpec::string("orderBy", "Sort order for results."),
            ParamSpec::string("orgUnitId", "If set, only print servers owned by this OU are returned."),
            ParamSpec::number("pageSize", "The maximum number of objects to return."),
            ParamSpec::string("pageToken", "A generated token to paginate results."),
        ],
        body: None,
        decode: decode_pretty::<models::ListPrintServersResponse>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/{parent}/chrome/printServers",
        description: "Creates a print server.",
        path_params: PARENT,
        query_params: &[],
        body: Some(&codecs::PRINT_SERVER),
        decode: decode_pretty::<models::PrintServer>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/{parent}/chrome/printServers:batchCreatePrintServers",
        description: "Creates multiple print servers.",
        path_params: PARENT,
        query_params: &[],
        body: Some(&codecs::BATCH_CREATE_PRINT_SERVERS),
        decode: decode_pretty::<models::BatchCreatePrintServersResponse>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/{parent}/chrome/printServers:batchDeletePrintServers",
        description: "Deletes multiple print servers.",
        path_params: PARENT,
        query_params: &[],
        body: Some(&codecs::BATCH_DELETE_PRINT_SERVERS),
        decode: decode_pretty::<models::BatchDeletePrintServersResponse>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/{name}",
        description: "Returns a print server's configuration.",
        path_params: NAME,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::PrintServer>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/{name}",
        description: "Updates a print server's configuration.",
        path_params: NAME,
        query_params: &[ParamSpec::string("updateMask", "The list of fields to update.")],
        body: Some(&codecs::PRINT_SERVER),
        decode: decode_pretty::<models::PrintServer>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/{name}",
        description: "Deletes a print server.",
        path_params: NAME,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
];
