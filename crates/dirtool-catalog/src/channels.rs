//! Notification channels.

use dirtool_core::render::decode_untyped;
use dirtool_core::{Endpoint, Method};

use crate::codecs;

pub(crate) static ENDPOINTS: &[Endpoint] = &[
    // The underscore in `directory_v1` is how the upstream API spells this
    // path; it is not a typo.
    Endpoint {
        method: Method::Post,
        path: "/admin/directory_v1/channels/stop",
        description: "Stops watching resources through this channel.",
        path_params: &[],
        query_params: &[],
        body: Some(&codecs::CHANNEL),
        decode: decode_untyped,
    },
];
