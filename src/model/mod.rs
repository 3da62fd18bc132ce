//! Record model types.
//!
//! The model is the intermediate representation between text extraction
//! and the external document store: plain data structs with the camelCase
//! wire shape the hosted store uses.

mod record;

pub use record::{Gender, VoterRecord, DEFAULT_OCCUPATION, DEFAULT_PHOTO_URL};
