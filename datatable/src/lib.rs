//! Table configuration model
//!
//! Describes how a collection of records is rendered as columns: which
//! property each column reads, its header, alignment and order, and how the
//! raw value becomes display text (a format specifier or a custom
//! template).

pub mod accessor;
pub mod cell;
pub mod collection;
pub mod column;
pub mod error;
pub mod format;
pub mod fragment;
pub mod model;
pub mod table;

mod data_table;

pub use accessor::Accessors;
pub use cell::Cell;
pub use cell::CellContent;
pub use collection::RecordCollection;
pub use collection::RowId;
pub use column::Alignment;
pub use column::ColumnConfig;
pub use column::ColumnSpec;
pub use data_table::*;
pub use format::FormatSpec;
pub use fragment::Fragment;
pub use model::RenderContext;
pub use model::Value;
pub use table::RenderedTable;
pub use table::TableConfig;
