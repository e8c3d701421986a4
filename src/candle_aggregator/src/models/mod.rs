pub mod aggregated_bar;
pub mod daily_bar;
pub mod period;
