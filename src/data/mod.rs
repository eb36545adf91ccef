/// Data layer: core types, simulation, filtering, averaging and export.
///
/// Architecture:
/// ```text
///   ┌───────────┐
///   │ generator │  uniform draws → ProductionSeries
///   └───────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ ProductionSeries │  Vec<DailyRecord>, one per day
///   └──────────────────┘
///        │                      │
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  filter   │          │  export   │  .parquet / .csv / .json
///   └──────────┘          └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  column means → Insights
///   └───────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod generator;
pub mod model;
