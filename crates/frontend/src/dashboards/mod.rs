pub mod d400_overview;
pub mod d401_data_insights;
pub mod d402_analytics;
pub mod d403_advanced_analytics;

pub use d400_overview::ui::OverviewDashboard;
pub use d401_data_insights::ui::DataInsightsDashboard;
pub use d402_analytics::ui::AnalyticsDashboard;
pub use d403_advanced_analytics::ui::AdvancedAnalyticsDashboard;
