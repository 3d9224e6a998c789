pub mod d400_overview;
pub mod d401_data_insights;
pub mod d402_analytics;
pub mod d403_advanced_analytics;
