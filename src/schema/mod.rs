pub mod ddl;
pub mod normalize;
pub mod types;

pub use ddl::{build_catalog_ddl, build_table_ddl, CALCULATED_FIELD_MARKER};
pub use normalize::{engine_data_type, is_geometry_type, GEOMETRY_TYPES};
pub use types::{BuildResult, Column, ColumnEntry, DdlFilters, ForeignKey, TableMetadata};
