//! Body codecs, one per request model.
//!
//! A codec pairs the advertised field list of a write endpoint with the
//! typed round trip that builds the request body. Field names and JSON
//! types mirror the Directory API request schemas; loosely-typed schema
//! fields are advertised as strings.

use dirtool_core::models;
use dirtool_core::render::encode_body;
use dirtool_core::{BodyCodec, ParamSpec};

pub(crate) static USER: BodyCodec = BodyCodec {
    model: "User",
    fields: &[
        ParamSpec::string("organizations", "The user's organizations."),
        ParamSpec::string("kind", ""),
        ParamSpec::string("websites", "The user's websites."),
        ParamSpec::string("languages", "The user's languages."),
        ParamSpec::string("phones", "The user's phone numbers."),
        ParamSpec::string("etag", ""),
        ParamSpec::string("thumbnailPhotoEtag", ""),
        ParamSpec::string("emails", "The user's email addresses."),
        ParamSpec::string("id", "The unique ID for the user."),
        ParamSpec::boolean("ipWhitelisted", ""),
        ParamSpec::boolean("includeInGlobalAddressList", ""),
        ParamSpec::boolean("isAdmin", "Whether the user has super administrator privileges."),
        ParamSpec::array("nonEditableAliases", ""),
        ParamSpec::boolean("isEnrolledIn2Sv", ""),
        ParamSpec::boolean("archived", "Whether the user is archived."),
        ParamSpec::string("notes", "Notes for the user."),
        ParamSpec::string("sshPublicKeys", "A list of SSH public keys."),
        ParamSpec::string("addresses", "The user's addresses."),
        ParamSpec::string("recoveryEmail", "Recovery email of the user."),
        ParamSpec::string("customerId", "The customer ID to retrieve all account users."),
        ParamSpec::string("suspensionReason", ""),
        ParamSpec::boolean("isEnforcedIn2Sv", ""),
        ParamSpec::boolean("suspended", "Indicates if the user is suspended."),
        ParamSpec::boolean("isDelegatedAdmin", ""),
        ParamSpec::boolean("changePasswordAtNextLogin", ""),
        ParamSpec::string("password", "Stores the password for the user account."),
        ParamSpec::string("ims", "The list of the user's Instant Messenger accounts."),
        ParamSpec::string("thumbnailPhotoUrl", ""),
        ParamSpec::string("creationTime", ""),
        ParamSpec::string("lastLoginTime", ""),
        ParamSpec::string("locations", "The user's locations."),
        ParamSpec::object("customSchemas", "Custom fields of the user, keyed by schema name."),
        ParamSpec::string("orgUnitPath", "The full path of the parent organization."),
        ParamSpec::string("keywords", "The list of the user's keywords."),
        ParamSpec::string("recoveryPhone", "Recovery phone of the user."),
        ParamSpec::string("hashFunction", "Stores the hash format of the password property."),
        ParamSpec::string("deletionTime", ""),
        ParamSpec::object("name", "Holds the given and family names of the user."),
        ParamSpec::string("externalIds", "The list of external IDs for the user."),
        ParamSpec::boolean("agreedToTerms", ""),
        ParamSpec::array("aliases", "The list of the user's alias email addresses."),
        ParamSpec::string("relations", "The list of the user's relationships to other users."),
        ParamSpec::string("primaryEmail", "The user's primary email address."),
        ParamSpec::string("gender", "The user's gender."),
        ParamSpec::string("posixAccounts", "The list of POSIX account information."),
        ParamSpec::boolean("isMailboxSetup", ""),
    ],
    encode: encode_body::<models::User>,
};

pub(crate) static USER_ALIAS: BodyCodec = BodyCodec {
    model: "UserAlias",
    fields: &[
        ParamSpec::string("kind", ""),
        ParamSpec::string("primaryEmail", "The user's primary email address."),
        ParamSpec::string("alias", "The alias email address."),
        ParamSpec::string("etag", ""),
        ParamSpec::string("id", "The unique ID for the user."),
    ],
    encode: encode_body::<models::UserAlias>,
};

pub(crate) static GROUP_ALIAS: BodyCodec = BodyCodec {
    model: "GroupAlias",
    fields: &[
        ParamSpec::string("etag", ""),
        ParamSpec::string("id", "The unique ID of the group."),
        ParamSpec::string("kind", ""),
        ParamSpec::string("primaryEmail", "The primary email address of the group."),
        ParamSpec::string("alias", "The alias email address."),
    ],
    encode: encode_body::<models::GroupAlias>,
};

pub(crate) static USER_PHOTO: BodyCodec = BodyCodec {
    model: "UserPhoto",
    fields: &[
        ParamSpec::string("etag", ""),
        ParamSpec::number("height", "Height of the photo in pixels."),
        ParamSpec::string("id", "The ID the API uses to uniquely identify the user."),
        ParamSpec::string("kind", ""),
        ParamSpec::string("mimeType", "The MIME type of the photo."),
        ParamSpec::string("photoData", "The user photo's upload data in web-safe Base64 format."),
        ParamSpec::string("primaryEmail", "The user's primary email address."),
        ParamSpec::number("width", "Width of the photo in pixels."),
    ],
    encode: encode_body::<models::UserPhoto>,
};

pub(crate) static USER_MAKE_ADMIN: BodyCodec = BodyCodec {
    model: "UserMakeAdmin",
    fields: &[ParamSpec::boolean("status", "Indicates the administrator status of the user.")],
    encode: encode_body::<models::UserMakeAdmin>,
};

pub(crate) static USER_UNDELETE: BodyCodec = BodyCodec {
    model: "UserUndelete",
    fields: &[ParamSpec::string("orgUnitPath", "OrgUnit of the undeleted user.")],
    encode: encode_body::<models::UserUndelete>,
};

pub(crate) static CHANNEL: BodyCodec = BodyCodec {
    model: "Channel",
    fields: &[
        ParamSpec::string("resourceId", "An opaque ID that identifies the watched resource."),
        ParamSpec::string("token", "An arbitrary string delivered with each notification."),
        ParamSpec::string("type", "The type of delivery mechanism used for this channel."),
        ParamSpec::string("kind", ""),
        ParamSpec::string("address", "The address where notifications are delivered."),
        ParamSpec::object("params", "Additional parameters controlling delivery behavior."),
        ParamSpec::boolean("payload", "A Boolean value to indicate whether payload is wanted."),
        ParamSpec::string("resourceUri", "A version-specific identifier for the watched resource."),
        ParamSpec::string("expiration", "Date and time of notification channel expiration."),
        ParamSpec::string("id", "A UUID or similar unique string that identifies this channel."),
    ],
    encode: encode_body::<models::Channel>,
};

pub(crate) static GROUP: BodyCodec = BodyCodec {
    model: "Group",
    fields: &[
        ParamSpec::string("name", "The group's display name."),
        ParamSpec::string("id", "The unique ID of the group."),
        ParamSpec::boolean("adminCreated", ""),
        ParamSpec::string("description", "An extended description of the group."),
        ParamSpec::string("etag", ""),
        ParamSpec::string("kind", ""),
        ParamSpec::string("directMembersCount", ""),
        ParamSpec::array("nonEditableAliases", ""),
        ParamSpec::array("aliases", ""),
        ParamSpec::string("email", "The group's email address."),
    ],
    encode: encode_body::<models::Group>,
};

pub(crate) static MEMBER: BodyCodec = BodyCodec {
    model: "Member",
    fields: &[
        ParamSpec::string("id", "The unique ID of the group member."),
        ParamSpec::string("kind", ""),
        ParamSpec::string("role", "The member's role in a group."),
        ParamSpec::string("status", "Status of member."),
        ParamSpec::string("type", "The type of group member."),
        ParamSpec::string("delivery_settings", "Defines mail delivery preferences of member."),
        ParamSpec::string("email", "The member's email address."),
        ParamSpec::string("etag", ""),
    ],
    encode: encode_body::<models::Member>,
};

pub(crate) static ORG_UNIT: BodyCodec = BodyCodec {
    model: "OrgUnit",
    fields: &[
        ParamSpec::string("orgUnitId", "The unique ID of the organizational unit."),
        ParamSpec::string("parentOrgUnitId", "The unique ID of the parent organizational unit."),
        ParamSpec::string("description", "Description of the organizational unit."),
        ParamSpec::boolean("blockInheritance", ""),
        ParamSpec::string("etag", ""),
        ParamSpec::string("kind", ""),
        ParamSpec::string("orgUnitPath", "The full path to the organizational unit."),
        ParamSpec::string("name", "The organizational unit's path name."),
        ParamSpec::string("parentOrgUnitPath", "The organizational unit's parent path."),
    ],
    encode: encode_body::<models::OrgUnit>,
};

pub(crate) static CHROME_OS_DEVICE: BodyCodec = BodyCodec {
    model: "ChromeOsDevice",
    fields: &[
        ParamSpec::string("platformVersion", "The Chrome device's platform version."),
        ParamSpec::string("manufactureDate", "The date the device was manufactured."),
        ParamSpec::string("deviceLicenseType", ""),
        ParamSpec::array("recentUsers", "A list of recent device users, in descending order."),
        ParamSpec::object("tpmVersionInfo", "Trusted Platform Module (TPM)."),
        ParamSpec::string("firstEnrollmentTime", ""),
        ParamSpec::string("firmwareVersion", "The Chrome device's firmware version."),
        ParamSpec::array("deviceFiles", "A list of device files to download."),
        ParamSpec::string("status", "The status of the device."),
        ParamSpec::string("meid", "The Mobile Equipment Identifier (MEID)."),
        ParamSpec::string("osVersion", "The Chrome device's operating system version."),
        ParamSpec::string("supportEndDate", ""),
        ParamSpec::string("model", "The device's model information."),
        ParamSpec::array("activeTimeRanges", "A list of active time ranges."),
        ParamSpec::array("cpuInfo", "Information regarding CPU specs in the device."),
        ParamSpec::string("dockMacAddress", "Built-in MAC address for the docking station."),
        ParamSpec::string("lastDeprovisionTimestamp", ""),
        ParamSpec::string("serialNumber", "The Chrome device serial number."),
        ParamSpec::string("etag", ""),
        ParamSpec::string("macAddress", "The device's wireless MAC address."),
        ParamSpec::string("systemRamTotal", "Total RAM on the device in bytes."),
        ParamSpec::string("annotatedUser", "The user of the device as noted by the administrator."),
        ParamSpec::string("autoUpdateExpiration", ""),
        ParamSpec::string("orgUnitPath", "The full parent path of the organizational unit."),
        ParamSpec::array("diskVolumeReports", "Reports of disk space and other info."),
        ParamSpec::string("deviceId", "The unique ID of the Chrome device."),
        ParamSpec::string("orderNumber", "The device's order number."),
        ParamSpec::array("lastKnownNetwork", "Contains last known network."),
        ParamSpec::string("notes", "Notes about this device added by the administrator."),
        ParamSpec::string("lastEnrollmentTime", ""),
        ParamSpec::array("systemRamFreeReports", "Reports of amounts of available RAM memory."),
        ParamSpec::string("ethernetMacAddress", "The device's MAC address on the ethernet network."),
        ParamSpec::string("deprovisionReason", "Deprovision reason."),
        ParamSpec::string("kind", ""),
        ParamSpec::array("cpuStatusReports", "Reports of CPU utilization and temperature."),
        ParamSpec::string("ethernetMacAddress0", "MAC address used by the internal ethernet port."),
        ParamSpec::boolean("willAutoRenew", ""),
        ParamSpec::string("orgUnitId", "The unique ID of the organizational unit."),
        ParamSpec::string("bootMode", "The boot mode for the device."),
        ParamSpec::string("lastSync", ""),
        ParamSpec::object("osUpdateStatus", "The status of the OS updates for the device."),
        ParamSpec::array("screenshotFiles", "A list of screenshot files to download."),
        ParamSpec::string("annotatedLocation", "The address or location of the device."),
        ParamSpec::string("annotatedAssetId", "The asset identifier as noted by an administrator."),
    ],
    encode: encode_body::<models::ChromeOsDevice>,
};

pub(crate) static CHROME_OS_DEVICE_ACTION: BodyCodec = BodyCodec {
    model: "ChromeOsDeviceAction",
    fields: &[
        ParamSpec::string("action", "Action to be taken on the Chrome OS device."),
        ParamSpec::string("deprovisionReason", "Only used when the action is `deprovision`."),
    ],
    encode: encode_body::<models::ChromeOsDeviceAction>,
};

pub(crate) static CHROME_OS_MOVE_DEVICES_TO_OU: BodyCodec = BodyCodec {
    model: "ChromeOsMoveDevicesToOu",
    fields: &[ParamSpec::array("deviceIds", "Chrome OS devices to be moved to OU.")],
    encode: encode_body::<models::ChromeOsMoveDevicesToOu>,
};

pub(crate) static BATCH_CHANGE_CHROME_OS_DEVICE_STATUS: BodyCodec = BodyCodec {
    model: "BatchChangeChromeOsDeviceStatusRequest",
    fields: &[
        ParamSpec::string("changeChromeOsDeviceStatusAction", "The action to take on the devices."),
        ParamSpec::string("deprovisionReason", "Only used when the action is `deprovision`."),
        ParamSpec::array("deviceIds", "List of the IDs of the Chrome OS devices to change."),
    ],
    encode: encode_body::<models::BatchChangeChromeOsDeviceStatusRequest>,
};

pub(crate) static ISSUE_COMMAND: BodyCodec = BodyCodec {
    model: "DirectoryChromeosdevicesIssueCommandRequest",
    fields: &[
        ParamSpec::string("commandType", "The type of command."),
        ParamSpec::string("payload", "The payload for the command, only used by some commands."),
    ],
    encode: encode_body::<models::DirectoryChromeosdevicesIssueCommandRequest>,
};

pub(crate) static MOBILE_DEVICE_ACTION: BodyCodec = BodyCodec {
    model: "MobileDeviceAction",
    fields: &[ParamSpec::string("action", "The action to be performed on the device.")],
    encode: encode_body::<models::MobileDeviceAction>,
};

pub(crate) static CUSTOMER: BodyCodec = BodyCodec {
    model: "Customer",
    fields: &[
        ParamSpec::string("customerCreationTime", ""),
        ParamSpec::string("customerDomain", "The customer's primary domain name string."),
        ParamSpec::string("phoneNumber", "The customer's contact phone number, in E.164 format."),
        ParamSpec::string("alternateEmail", "The customer's secondary contact email address."),
        ParamSpec::string("etag", ""),
        ParamSpec::string("kind", ""),
        ParamSpec::string("id", "The unique ID for the customer's Google Workspace account."),
        ParamSpec::string("language", "The customer's ISO 639-2 language code."),
        ParamSpec::object("postalAddress", "The customer's postal address information."),
    ],
    encode: encode_body::<models::Customer>,
};

pub(crate) static PRINTER: BodyCodec = BodyCodec {
    model: "Printer",
    fields: &[
        ParamSpec::array("auxiliaryMessages", "Auxiliary messages about the printer."),
        ParamSpec::string("displayName", "Name of printer."),
        ParamSpec::string("name", "The resource name of the printer."),
        ParamSpec::string("uri", "Printer URI."),
        ParamSpec::string("createTime", "Time when printer was created."),
        ParamSpec::string("description", "Description of printer."),
        ParamSpec::string("id", "Id of the printer."),
        ParamSpec::string("makeAndModel", "Make and model of printer."),
        ParamSpec::boolean("useDriverlessConfig", "Use IPP Everywhere instead of a driver."),
        ParamSpec::string("orgUnitId", "Organization Unit that owns this printer."),
    ],
    encode: encode_body::<models::Printer>,
};

pub(crate) static BATCH_CREATE_PRINTERS: BodyCodec = BodyCodec {
    model: "BatchCreatePrintersRequest",
    fields: &[ParamSpec::array("requests", "A list of Printers to be created.")],
    encode: encode_body::<models::BatchCreatePrintersRequest>,
};

pub(crate) static BATCH_DELETE_PRINTERS: BodyCodec = BodyCodec {
    model: "BatchDeletePrintersRequest",
    fields: &[ParamSpec::array("printerIds", "A list of Printer ids that should be deleted.")],
    encode: encode_body::<models::BatchDeletePrintersRequest>,
};

pub(crate) static PRINT_SERVER: BodyCodec = BodyCodec {
    model: "PrintServer",
    fields: &[
        ParamSpec::string("orgUnitId", "ID of the organization unit that owns this print server."),
        ParamSpec::string("uri", "URI of the print server."),
        ParamSpec::string("createTime", "Time when the print server was created."),
        ParamSpec::string("description", "Editable description of the print server."),
        ParamSpec::string("displayName", "Editable display name of the print server."),
        ParamSpec::string("id", "Immutable ID of the print server."),
        ParamSpec::string("name", "The resource name of the print server."),
    ],
    encode: encode_body::<models::PrintServer>,
};

pub(crate) static BATCH_CREATE_PRINT_SERVERS: BodyCodec = BodyCodec {
    model: "BatchCreatePrintServersRequest",
    fields: &[ParamSpec::array("requests", "A list of print servers to be created.")],
    encode: encode_body::<models::BatchCreatePrintServersRequest>,
};

pub(crate) static BATCH_DELETE_PRINT_SERVERS: BodyCodec = BodyCodec {
    model: "BatchDeletePrintServersRequest",
    fields: &[ParamSpec::array("printServerIds", "A list of print server IDs to be deleted.")],
    encode: encode_body::<models::BatchDeletePrintServersRequest>,
};

pub(crate) static DOMAINS: BodyCodec = BodyCodec {
    model: "Domains",
    fields: &[
        ParamSpec::string("domainName", "The domain name of the customer."),
        ParamSpec::string("etag", ""),
        ParamSpec::boolean("isPrimary", "Indicates if the domain is a primary domain."),
        ParamSpec::string("kind", ""),
        ParamSpec::boolean("verified", "Indicates the verification state of a domain."),
        ParamSpec::string("creationTime", ""),
        ParamSpec::array("domainAliases", "A list of domain alias objects."),
    ],
    encode: encode_body::<models::Domains>,
};

pub(crate) static DOMAIN_ALIAS: BodyCodec = BodyCodec {
    model: "DomainAlias",
    fields: &[
        ParamSpec::string("parentDomainName", "The parent domain name of the domain alias."),
        ParamSpec::boolean("verified", "Indicates the verification state of a domain alias."),
        ParamSpec::string("creationTime", ""),
        ParamSpec::string("domainAliasName", "The domain alias name."),
        ParamSpec::string("etag", ""),
        ParamSpec::string("kind", ""),
    ],
    encode: encode_body::<models::DomainAlias>,
};

pub(crate) static ROLE: BodyCodec = BodyCodec {
    model: "Role",
    fields: &[
        ParamSpec::string("roleName", "Name of the role."),
        ParamSpec::array("rolePrivileges", "The set of privileges that are granted to this role."),
        ParamSpec::string("etag", ""),
        ParamSpec::boolean("isSuperAdminRole", ""),
        ParamSpec::boolean("isSystemRole", ""),
        ParamSpec::string("kind", ""),
        ParamSpec::string("roleDescription", "A short description of the role."),
        ParamSpec::string("roleId", "ID of the role."),
    ],
    encode: encode_body::<models::Role>,
};

pub(crate) static ROLE_ASSIGNMENT: BodyCodec = BodyCodec {
    model: "RoleAssignment",
    fields: &[
        ParamSpec::string("orgUnitId", "If the role is restricted to an organization unit."),
        ParamSpec::string("roleAssignmentId", "ID of this roleAssignment."),
        ParamSpec::string("roleId", "The ID of the role that is assigned."),
        ParamSpec::string("scopeType", "The scope in which this role is assigned."),
        ParamSpec::string("assignedTo", "The unique ID of the entity this role is assigned to."),
        ParamSpec::string("assigneeType", "The type of the assignee."),
        ParamSpec::string("etag", ""),
        ParamSpec::string("kind", ""),
    ],
    encode: encode_body::<models::RoleAssignment>,
};

pub(crate) static SCHEMA: BodyCodec = BodyCodec {
    model: "Schema",
    fields: &[
        ParamSpec::array("fields", "A list of fields in the schema."),
        ParamSpec::string("kind", ""),
        ParamSpec::string("schemaId", "The unique identifier of the schema."),
        ParamSpec::string("schemaName", "The schema's name."),
        ParamSpec::string("displayName", "Display name for the schema."),
        ParamSpec::string("etag", ""),
    ],
    encode: encode_body::<models::Schema>,
};

pub(crate) static BUILDING: BodyCodec = BodyCodec {
    model: "Building",
    fields: &[
        ParamSpec::string("buildingName", "The building name as seen by users in Calendar."),
        ParamSpec::object("coordinates", "The geographic coordinates of the building center."),
        ParamSpec::string("description", "A brief description of the building."),
        ParamSpec::string("etags", ""),
        ParamSpec::array("floorNames", "The display names for all floors in this building."),
        ParamSpec::string("kind", ""),
        ParamSpec::object("address", "The postal address of the building."),
        ParamSpec::string("buildingId", "Unique identifier for the building."),
    ],
    encode: encode_body::<models::Building>,
};

pub(crate) static CALENDAR_RESOURCE: BodyCodec = BodyCodec {
    model: "CalendarResource",
    fields: &[
        ParamSpec::string("userVisibleDescription", "Description visible to users and admins."),
        ParamSpec::string("floorName", "Name of the floor a resource is located on."),
        ParamSpec::number("capacity", "Capacity of a resource, number of seats in a room."),
        ParamSpec::string("kind", ""),
        ParamSpec::string("resourceDescription", "Description visible only to admins."),
        ParamSpec::string("featureInstances", "Instances of features for the calendar resource."),
        ParamSpec::string("resourceEmail", "The read-only email for the calendar resource."),
        ParamSpec::string("buildingId", "Unique ID for the building a resource is located in."),
        ParamSpec::string("floorSection", "Name of the section within a floor."),
        ParamSpec::string("resourceId", "The unique ID for the calendar resource."),
        ParamSpec::string("etags", ""),
        ParamSpec::string("resourceName", "The name of the calendar resource."),
        ParamSpec::string("resourceType", "The type of the calendar resource."),
        ParamSpec::string("resourceCategory", "The category of the calendar resource."),
        ParamSpec::string("generatedResourceName", "The auto-generated name of the resource."),
    ],
    encode: encode_body::<models::CalendarResource>,
};

pub(crate) static FEATURE: BodyCodec = BodyCodec {
    model: "Feature",
    fields: &[
        ParamSpec::string("etags", ""),
        ParamSpec::string("kind", ""),
        ParamSpec::string("name", "The name of the feature."),
    ],
    encode: encode_body::<models::Feature>,
};

pub(crate) static FEATURE_RENAME: BodyCodec = BodyCodec {
    model: "FeatureRename",
    fields: &[ParamSpec::string("newName", "New name of the feature.")],
    encode: encode_body::<models::FeatureRename>,
};
