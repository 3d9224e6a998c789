mod dashboard;

pub use dashboard::AdvancedAnalyticsDashboard;
