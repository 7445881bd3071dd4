//! Application layer.
//!
//! - `codec` - pure text <-> hex conversion
//! - `settings` - persisted theme / last-opened-file record
//! - `state` - widget coordinator driven by `messages`
//! - `error` - shared error taxonomy

pub mod codec;
pub mod error;
pub mod file_filters;
pub mod messages;
pub mod settings;
pub mod state;

pub use codec::{HexError, decode_from_hex, encode_to_hex};
pub use error::AppError;
pub use messages::Message;
pub use settings::{AppSettings, SettingsStore, Theme};
