//! CLI command implementations.
//!
//! One module per command:
//! - `check_all`: print every robot grouped by type
//! - `check_type`: print robots of one type
//! - `use_by_type`: reserve the first free robot of a type
//! - `use_by_id`: reserve a robot by exact id
//! - `use_by_alias`: reserve a robot by exact alias

pub mod check_all;
pub mod check_type;
pub mod use_by_alias;
pub mod use_by_id;
pub mod use_by_type;

pub use check_all::CheckAllCommand;
pub use check_type::CheckTypeCommand;
pub use use_by_alias::UseByAliasCommand;
pub use use_by_id::UseByIdCommand;
pub use use_by_type::UseByTypeCommand;
