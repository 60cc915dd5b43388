pub mod document;
pub mod errors;
pub mod importer;
pub mod layout;
pub mod models;
pub mod parser;
pub mod repo;
pub mod review;
pub mod selector;

pub use document::*;
pub use errors::*;
pub use importer::*;
pub use layout::*;
pub use models::*;
pub use parser::*;
pub use repo::*;
pub use review::*;
pub use selector::*;
