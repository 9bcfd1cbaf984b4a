/// Domain services for turning a report into ordered, summarized findings
pub mod finding_collector;
pub mod finding_sorter;
pub mod finding_summary;
pub mod report_parser;

pub use finding_collector::FindingCollector;
pub use finding_sorter::FindingSorter;
pub use finding_summary::FindingSummary;
pub use report_parser::ReportParser;
