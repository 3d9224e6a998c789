mod backup;
mod dashboard;
mod kpi_builder;

pub use dashboard::DataInsightsDashboard;
