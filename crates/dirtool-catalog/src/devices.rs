//! Chrome OS devices, remote commands and mobile devices.

use dirtool_core::models;
use dirtool_core::render::{decode_pretty, decode_untyped};
use dirtool_core::{Endpoint, Method, ParamSpec};

use crate::codecs;

const CUSTOMER_ID: &[ParamSpec] = &[ParamSpec::string(
    "customerId",
    "The unique ID for the customer's Google Workspace account, or `my_customer`.",
)];

const CUSTOMER_AND_DEVICE: &[ParamSpec] = &[
    ParamSpec::string(
        "customerId",
        "The unique ID for the customer's Google Workspace account, or `my_customer`.",
    ),
    ParamSpec::string("deviceId", "The unique ID of the device."),
];

const PROJECTION: &[ParamSpec] =
    &[ParamSpec::string("projection", "Determines whether the response contains the full list of properties.")];

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customerId}/devices/chromeos",
        description: "Retrieves a paginated list of Chrome OS devices within an account.",
        path_params: CUSTOMER_ID,
        query_params: &[
            ParamSpec::boolean("includeChildOrgunits", "Also return devices from child org units."),
            ParamSpec::number("maxResults", "Maximum number of results to return."),
            ParamSpec::string("orderBy", "Device property to use for sorting results."),
            ParamSpec::string("orgUnitPath", "The full path of the organizational unit or its unique ID."),
            ParamSpec::string("pageToken", "Token to specify next page in the list."),
            ParamSpec::string("projection", "Restrict information returned to a set of selected fields."),
            ParamSpec::string("query", "Search string."),
            ParamSpec::string("sortOrder", "Whether to return results in ascending or descending order."),
        ],
        body: None,
        decode: decode_pretty::<models::ChromeOsDevices>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customerId}/devices/chromeos/{deviceId}",
        description: "Retrieves a Chrome OS device's properties.",
        path_params: CUSTOMER_AND_DEVICE,
        query_params: PROJECTION,
        body: None,
        decode: decode_pretty::<models::ChromeOsDevice>,
    },
    Endpoint {
        method: Method::Put,
        path: "/admin/directory/v1/customer/{customerId}/devices/chromeos/{deviceId}",
        description: "Updates a device's updatable properties.",
        path_params: CUSTOMER_AND_DEVICE,
        query_params: PROJECTION,
        body: Some(&codecs::CHROME_OS_DEVICE),
        decode: decode_pretty::<models::ChromeOsDevice>,
    },
    Endpoint {
        method: Method::Patch,
        path: "/admin/directory/v1/customer/{customerId}/devices/chromeos/{deviceId}",
        description: "Updates a device's updatable properties using patch semantics.",
        path_params: CUSTOMER_AND_DEVICE,
        query_params: PROJECTION,
        body: Some(&codecs::CHROME_OS_DEVICE),
        decode: decode_pretty::<models::ChromeOsDevice>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customerId}/devices/chromeos/{resourceId}/action",
        description: "Takes an action that affects a Chrome OS Device, such as deprovisioning.",
        path_params: &[
            ParamSpec::string(
                "customerId",
                "The unique ID for the customer's Google Workspace account, or `my_customer`.",
            ),
            ParamSpec::string("resourceId", "The unique ID of the device."),
        ],
        query_params: &[],
        body: Some(&codecs::CHROME_OS_DEVICE_ACTION),
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customerId}/devices/chromeos/moveDevicesToOu",
        description: "Moves or inserts multiple Chrome OS devices to an organizational unit.",
        path_params: CUSTOMER_ID,
        query_params: &[ParamSpec::string(
            "orgUnitPath",
            "Full path of the target organizational unit or its ID.",
        )],
        body: Some(&codecs::CHROME_OS_MOVE_DEVICES_TO_OU),
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customerId}/devices/chromeos:batchChangeStatus",
        description: "Changes the status of a batch of Chrome OS devices.",
        path_params: &[ParamSpec::string("customerId", "Immutable ID of the Google Workspace account.")],
        query_params: &[],
        body: Some(&codecs::BATCH_CHANGE_CHROME_OS_DEVICE_STATUS),
        decode: decode_pretty::<models::BatchChangeChromeOsDeviceStatusResponse>,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customerId}/devices/chromeos/{deviceId}:issueCommand",
        description: "Issues a command for the device to execute.",
        path_params: CUSTOMER_AND_DEVICE,
        query_params: &[],
        body: Some(&codecs::ISSUE_COMMAND),
        decode: decode_pretty::<models::DirectoryChromeosdevicesIssueCommandResponse>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customerId}/devices/chromeos/{deviceId}/commands/{commandId}",
        description: "Gets command data for a specific command issued to the device.",
        path_params: &[
            ParamSpec::string("customerId", "Immutable ID of the Google Workspace account."),
            ParamSpec::string("deviceId", "Immutable ID of Chrome OS Device."),
            ParamSpec::string("commandId", "Immutable ID of Chrome OS Device Command."),
        ],
        query_params: &[],
        body: None,
        decode: decode_pretty::<models::DirectoryChromeosdevicesCommand>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customerId}/devices/mobile",
        description: "Retrieves a paginated list of all user-owned mobile devices for an account.",
        path_params: CUSTOMER_ID,
        query_params: &[
            ParamSpec::number("maxResults", "Maximum number of results to return."),
            ParamSpec::string("orderBy", "Device property to use for sorting results."),
            ParamSpec::string("pageToken", "Token to specify next page in the list."),
            ParamSpec::string("projection", "Restrict information returned to a set of selected fields."),
            ParamSpec::string("query", "Search string."),
            ParamSpec::string("sortOrder", "Whether to return results in ascending or descending order."),
        ],
        body: None,
        decode: decode_pretty::<models::MobileDevices>,
    },
    Endpoint {
        method: Method::Get,
        path: "/admin/directory/v1/customer/{customerId}/devices/mobile/{resourceId}",
        description: "Retrieves a mobile device's properties.",
        path_params: &[
            ParamSpec::string(
                "customerId",
                "The unique ID for the customer's Google Workspace account, or `my_customer`.",
            ),
            ParamSpec::string("resourceId", "The unique ID the API service uses to identify the mobile device."),
        ],
        query_params: PROJECTION,
        body: None,
        decode: decode_pretty::<models::MobileDevice>,
    },
    Endpoint {
        method: Method::Delete,
        path: "/admin/directory/v1/customer/{customerId}/devices/mobile/{resourceId}",
        description: "Removes a mobile device.",
        path_params: &[
            ParamSpec::string(
                "customerId",
                "The unique ID for the customer's Google Workspace account, or `my_customer`.",
            ),
            ParamSpec::string("resourceId", "The unique ID the API service uses to identify the mobile device."),
        ],
        query_params: &[],
        body: None,
        decode: decode_untyped,
    },
    Endpoint {
        method: Method::Post,
        path: "/admin/directory/v1/customer/{customerId}/devices/mobile/{resourceId}/action",
        description: "Takes an action that affects a mobile device, such as a remote wipe.",
        path_params: &[
            ParamSpec::string(
                "customerId",
                "The unique ID for the customer's Google Workspace account, or `my_customer`.",
            ),
            ParamSpec::string("resourceId", "The unique ID the API service uses to identify the mobile device."),
        ],
        query_params: &[],
        body: Some(&codecs::MOBILE_DEVICE_ACTION),
        decode: decode_untyped,
    },
];
