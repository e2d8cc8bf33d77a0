pub mod import;
pub mod labels;
pub mod list;
pub mod lookup;
pub mod show;
