pub mod date_normalizer;
pub mod exporter;
pub mod params;
