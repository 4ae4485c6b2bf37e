//! Calendar resources: buildings, calendars and features.

use dirtool_core::models;
use dirtool_core::render::{decode_pretty, decode_untyped};
use dirtool_core::{Endpoint, Method, ParamSpec};

use crate::codecs;

const CUSTOMER: &[ParamSpec] = &[ParamSpec::string(
    "customer",
    "The unique ID for the customer's Google Workspace account, or `my_customer`.",
)];

const CUSTOMER_AND_BUILDING: &[ParamSpec] = &[
    ParamSpec::string(
        "customer",
        "The unique ID for the customer's Google Workspace account, or `my_customer`.",
    ),
    ParamSpec::string("buildingId", "The unique ID of the building."),
];

const CUSTOMER_AND_CALENDAR: &[ParamSpec] = &[
    ParamSpec::string(
        "customer",
        "The unique ID for the customer's Google Workspace account, or `my_customer`.",
    ),
    ParamSpec::string("calendarResourceId", "The unique ID of the calendar resource."),
];

const CUSTOMER_AND_FEATURE: &[ParamSpec] = &[
    ParamSpec::string(
        "customer",
        "The unique ID for the customer's Google Workspace account, or `my_customer`.",
    ),
    ParamSpec::string("featureKey", "The unique ID of the feature."),
];

const COORDINATES_SOURCE: &[ParamSpec] =
    &[ParamSpec::string("coordinatesSource", "Source from which the building coordinates are derived.")];

const PAGING: &[ParamSpec] = &[
    ParamSpec::number("maxResults", "Maximum number of results to return."),
    ParamSpec::string("pageToken", "Token to specify the next page in the list."),
];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/resources/buildings",
        description: "Retrieves a list of buildings for an account.",
        path_params: CUSTOMER,
        query_params: PAGING,
        body: None,
        decode: decode_pretty::<models::Buildings>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customer}/resources/buildings",
        description: "Inserts a building.",
        path_params: CUSTOMER,
        query_params: COORDINATES_SOURCE,
        body: Some(&codecs::BUILDING),
        decode: decode_pretty::<models::Building>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/resources/buildings/{buildingId}",
        description: "Retrieves a building.",
        path_params: CUSTOMER_AND_BUILDING,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Building>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/customer/{customer}/resources/buildings/{buildingId}",
        description: "Updates a building.",
        path_params: CUSTOMER_AND_BUILDING,
        query_params: COORDINATES_SOURCE,
        body: Some(&codecs::BUILDING),
        decode: decode_pretty::<models::Building>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/customer/{customer}/resources/buildings/{buildingId}",
        description: "Patches a building.",
        path_params: CUSTOMER_AND_BUILDING,
        query_params: COORDINATES_SOURCE,
        body: Some(&codecs::BUILDING),
        decode: decode_pretty::<models::Building>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/customer/{customer}/resources/buildings/{buildingId}",
        description: "Deletes a building.",
        path_params: CUSTOMER_AND_BUILDING,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/resources/calendars",
        description: "Retrieves a list of calendar resources for an account.",
        path_params: CUSTOMER,
        query_params: &[
            ParamSpec::number("maxResults", "Maximum number of results to return."),
            ParamSpec::string("orderBy", "Field(s) to sort results by."),
            ParamSpec::string("pageToken", "Token to specify the next page in the list."),
            ParamSpec::string("query", "String query used to filter results."),
        ],
        body: None,
        decode: decode_pretty::<models::CalendarResources>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customer}/resources/calendars",
        description: "Inserts a calendar resource.",
        path_params: CUSTOMER,
        query_params: &[],
        body: Some(&codecs::CALENDAR_RESOURCE),
        decode: decode_pretty::<models::CalendarResource>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/resources/calendars/{calendarResourceId}",
        description: "Retrieves a calendar resource.",
        path_params: CUSTOMER_AND_CALENDAR,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::CalendarResource>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/customer/{customer}/resources/calendars/{calendarResourceId}",
        description: "Updates a calendar resource.",
        path_params: CUSTOMER_AND_CALENDAR,
        query_params: &[],
        body: Some(&codecs::CALENDAR_RESOURCE),
        decode: decode_pretty::<models::CalendarResource>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/customer/{customer}/resources/calendars/{calendarResourceId}",
        description: "Patches a calendar resource.",
        path_params: CUSTOMER_AND_CALENDAR,
        query_params: &[],
        body: Some(&codecs::CALENDAR_RESOURCE),
        decode: decode_pretty::<models::CalendarResource>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/customer/{customer}/resources/calendars/{calendarResourceId}",
        description: "Deletes a calendar resource.",
        path_params: CUSTOMER_AND_CALENDAR,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/resources/features",
        description: "Retrieves a list of features for an account.",
        path_params: CUSTOMER,
        query_params: PAGING,
        body: None,
        decode: decode_pretty::<models::Features>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customer}/resources/features",
        description: "Inserts a feature.",
        path_params: CUSTOMER,
        query_params: &[],
        body: Some(&codecs::FEATURE),
        decode: decode_pretty::<models::Feature>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customer}/resources/features/{featureKey}",
        description: "Retrieves a feature.",
        path_params: CUSTOMER_AND_FEATURE,
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::Feature>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/customer/{customer}/resources/features/{featureKey}",
        description: "Updates a feature.",
        path_params: CUSTOMER_AND_FEATURE,
        query_params: &[],
        body: Some(&codecs::FEATURE),
        decode: decode_pretty::<models::Feature>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/customer/{customer}/resources/features/{featureKey}",
        description: "Patches a feature.",
        path_params: CUSTOMER_AND_FEATURE,
        query_params: &[],
        body: Some(&codecs::FEATURE),
        decode: decode_pretty::<models::Feature>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/customer/{customer}/resources/features/{featureKey}",
        description: "Deletes a feature.",
        path_params: CUSTOMER_AND_FEATURE,
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customer}/resources/features/{oldName}/rename",
        description: "Renames a feature.",
        path_params: &[
            ParamSpec::string(
                "customer",
                "The unique ID for the customer's Google Workspace account, or `my_customer`.",
            ),
            ParamSpec::string("oldName", "The unique ID of the feature to rename."),
        ],
        query_params: &[],
        body: Some(&codecs::FEATURE_RENAME),
        decode: decode_untyped,
    },
];
