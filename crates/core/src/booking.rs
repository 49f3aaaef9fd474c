pub mod dates;
pub mod draft;
pub mod selection;
pub mod slots;
