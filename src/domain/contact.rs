//! The fixed-schema output row.

use serde::Serialize;

/// Output header, in column order.
pub const OUTPUT_HEADER: [&str; 8] = [
    "First Name",
    "Last Name",
    "Email",
    "Mobile Phone",
    "Address",
    "City",
    "State",
    "Zip Code",
];

/// One normalized contact ready for SMS import.
///
/// Every field is a plain string; anything missing in the source is an empty
/// string, never omitted. Field order matches [`OUTPUT_HEADER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedContact {
    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Last Name")]
    pub last_name: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Mobile Phone")]
    pub mobile_phone: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "State")]
    pub state: String,

    #[serde(rename = "Zip Code")]
    pub zip_code: String,
}
