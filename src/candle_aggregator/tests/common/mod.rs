#![allow(dead_code)]

use candle_aggregator::DailyBar;
use chrono::{Duration, NaiveDate};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Mon 2024-03-04 .. Fri 2024-03-08 with hand-picked OHLCV values.
pub fn trading_week() -> Vec<DailyBar> {
    let opens = [10.0, 11.0, 12.0, 13.0, 14.0];
    let closes = [10.5, 11.5, 12.2, 13.4, 14.8];
    let highs = [10.6, 11.6, 12.5, 13.5, 15.0];
    let lows = [9.8, 10.9, 11.8, 12.9, 13.9];
    let volumes = [100.0, 200.0, 150.0, 300.0, 250.0];
    let monday = date(2024, 3, 4);
    (0..5)
        .map(|i| {
            DailyBar::new(
                monday + Duration::days(i as i64),
                opens[i],
                highs[i],
                lows[i],
                closes[i],
                volumes[i],
            )
        })
        .collect()
}

/// `count` consecutive calendar days starting at `start`, slowly trending up.
pub fn consecutive_days(start: NaiveDate, count: usize) -> Vec<DailyBar> {
    (0..count)
        .map(|i| {
            let open = 50.0 + i as f64;
            DailyBar::new(
                start + Duration::days(i as i64),
                open,
                open + 2.0,
                open - 1.0,
                open + 1.0,
                1_000.0 + i as f64,
            )
        })
        .collect()
}
