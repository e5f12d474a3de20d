// src/schema/normalize.rs

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Spatial (PostGIS-style) type names, lower-case.
pub static GEOMETRY_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "geometry",
        "geography",
        "point",
        "linestring",
        "polygon",
        "multipoint",
        "multilinestring",
        "multipolygon",
        "geometrycollection",
    ]
    .into_iter()
    .collect()
});

/// Map a vendor column type onto the name the query engine understands.
///
/// Matching is case-insensitive and the result is always upper-case:
/// - BPCHAR, NAME, UUID, INET          → VARCHAR
/// - OID                               → INT
/// - BIGNUMERIC                        → NUMERIC
/// - BYTES                             → BYTEA
/// - DATETIME                          → TIMESTAMP
/// - FLOAT64                           → DOUBLE
/// - INT64                             → BIGINT
/// - any spatial type                  → GEOMETRY
/// - fallback                          → input, upper-cased
pub fn engine_data_type(data_type: &str) -> String {
    let upper = data_type.to_uppercase();
    let mapped = match upper.as_str() {
        "BPCHAR" | "NAME" | "UUID" | "INET" => "VARCHAR",
        "OID" => "INT",
        "BIGNUMERIC" => "NUMERIC",
        "BYTES" => "BYTEA",
        "DATETIME" => "TIMESTAMP",
        "FLOAT64" => "DOUBLE",
        "INT64" => "BIGINT",
        "GEOMETRY" | "GEOGRAPHY" | "POINT" | "LINESTRING" | "POLYGON" | "MULTIPOINT"
        | "MULTILINESTRING" | "MULTIPOLYGON" | "GEOMETRYCOLLECTION" => "GEOMETRY",
        _ => return upper,
    };
    mapped.to_string()
}

/// True for spatial column types, in any case.
pub fn is_geometry_type(data_type: &str) -> bool {
    GEOMETRY_TYPES.contains(data_type.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_vendor_types_case_insensitively() {
        let cases = [
            ("bpchar", "VARCHAR"),
            ("Name", "VARCHAR"),
            ("UUID", "VARCHAR"),
            ("inet", "VARCHAR"),
            ("Oid", "INT"),
            ("bignumeric", "NUMERIC"),
            ("Bytes", "BYTEA"),
            ("datetime", "TIMESTAMP"),
            ("float64", "DOUBLE"),
            ("INT64", "BIGINT"),
            ("Geography", "GEOMETRY"),
            ("multiPolygon", "GEOMETRY"),
            ("GeometryCollection", "GEOMETRY"),
        ];
        for (raw, expected) in cases {
            assert_eq!(engine_data_type(raw), expected, "mapping {}", raw);
        }
    }

    #[test]
    fn unmapped_types_are_upper_cased() {
        assert_eq!(engine_data_type("varchar"), "VARCHAR");
        assert_eq!(engine_data_type("timestamp with time zone"), "TIMESTAMP WITH TIME ZONE");
        assert_eq!(engine_data_type("Decimal(10,2)"), "DECIMAL(10,2)");
        assert_eq!(engine_data_type(""), "");
        // near misses are not mapped
        assert_eq!(engine_data_type("int64 "), "INT64 ");
    }

    #[test]
    fn geometry_classification() {
        for name in GEOMETRY_TYPES.iter() {
            assert!(is_geometry_type(name));
            assert!(is_geometry_type(&name.to_uppercase()));
        }
        assert_eq!(GEOMETRY_TYPES.len(), 9);
        assert!(is_geometry_type("MultiLineString"));

        assert!(!is_geometry_type("unknown"));
        assert!(!is_geometry_type("json"));
        assert!(!is_geometry_type("geometry(point, 4326)"));
        assert!(!is_geometry_type(""));
    }
}
