pub mod extract;
pub mod filter;
pub mod report;
pub mod source;

pub use extract::extract_interactions;
pub use filter::filter_and_sort;
pub use filter::InteractionFilter;
pub use filter::SortDirection;
pub use filter::SortField;
pub use filter::SortSpec;
pub use report::AnalysisReport;
pub use report::NetworkScan;
pub use report::ScanOutcome;
pub use source::SourceBatch;
pub use source::TransactionSource;
