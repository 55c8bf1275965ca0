mod display;
mod entry;
mod page;
pub mod wire;

pub use display::{dex_number, display_name, normalize_query};
pub use entry::{id_from_reference, Entry, EntryRecord, ListEntry, NamedResource};
pub use page::{Page, PageCursor};
