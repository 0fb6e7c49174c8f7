pub mod error;
pub mod field;
pub mod note;
pub mod record;
pub mod rules;

pub use error::CoreError;
pub use field::{Address, Birthday, Email, Name, Phone, BIRTHDAY_FORMAT};
pub use note::Note;
pub use record::Record;
