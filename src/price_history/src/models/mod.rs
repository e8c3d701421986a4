pub mod daily_series;
pub mod price_row;
