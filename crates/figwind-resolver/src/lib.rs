//! Theme-driven class name resolution for figwind.
//!
//! This crate turns numeric design values into utility class suffixes:
//! - Theme loading (built-in default theme or custom JSON)
//! - Keyword tables inverted from theme scales
//! - Keyword vs arbitrary-value resolution per scale
//! - Conflict-aware merging of class lists

mod error;
pub mod keywords;
pub mod merge;
pub mod resolve;
pub mod theme;

pub use error::{Result, ThemeError};
pub use keywords::{format_number, KeywordTable, KeywordTables};
pub use merge::{merge_classes, Category};
pub use resolve::{keyword_or_arbitrary, ClassResolver, REM_PX};
pub use theme::{Theme, ThemeValue};
