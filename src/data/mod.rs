/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  recording .csv (with '#' metadata lines)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip comments, parse rows → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  Vec<Column>, per-column numeric/text tag
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Series   │  (time, values) pair per channel, unit-scalable
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
