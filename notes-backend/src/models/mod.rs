pub mod note;

pub use note::{Note, SaveNoteRequest, StatusResponse};
