//! Domain value objects and types.
//!
//! Raw lead records, the resolved column roles, and the normalized contact
//! row, plus the small value objects the pipeline filters with.

pub mod contact;
pub mod email;
pub mod errors;
pub mod phone;
pub mod record;
pub mod roles;

pub use contact::{NormalizedContact, OUTPUT_HEADER};
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::{LineTypeFilter, DEFAULT_ACCEPTED_LINE_TYPES};
pub use record::{normalize_column_name, CellValue, RawRecord};
pub use roles::{AddressColumns, ColumnRoleSet, NameColumns};
