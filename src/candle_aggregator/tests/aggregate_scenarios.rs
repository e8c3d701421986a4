mod common;

use candle_aggregator::{
    AggregateError, AggregateWarning, Aggregator, AggregatorConfig, BarViolation,
    InvalidBarPolicy, Period, aggregate, aggregate_all,
};
use common::{consecutive_days, date, trading_week};

#[test]
fn trading_week_snapshot() {
    let weeks = aggregate(&trading_week(), Period::Weekly).unwrap();
    insta::assert_json_snapshot!(weeks, @r#"
    [
      {
        "bucket_key": "2024-03-04",
        "open": 10.0,
        "high": 15.0,
        "low": 9.8,
        "close": 14.8,
        "volume": 1000.0,
        "bar_count": 5
      }
    ]
    "#);
}

#[test]
fn thirty_five_days_make_two_months() {
    let bars = consecutive_days(date(2024, 3, 1), 35);
    let months = aggregate(&bars, Period::Monthly).unwrap();
    assert_eq!(months.len(), 2);
    assert_eq!(months[0].bucket_key, date(2024, 3, 1));
    assert_eq!(months[1].bucket_key, date(2024, 4, 1));
    assert_eq!(months[0].bar_count, 31);
    assert_eq!(months[1].bar_count, 4);
    assert_eq!(months[0].open, bars[0].open);
    assert_eq!(months[0].close, bars[30].close);
    assert_eq!(months[1].open, bars[31].open);
    assert_eq!(months[1].close, bars[34].close);
}

#[test]
fn thirty_five_days_weekly_split_on_mondays() {
    // 2024-03-01 is a Friday, so the first week is partial
    let bars = consecutive_days(date(2024, 3, 1), 35);
    let weeks = aggregate_all(&bars, Period::Weekly).unwrap();
    assert_eq!(weeks[0].bucket_key, date(2024, 2, 26));
    assert_eq!(weeks[0].bar_count, 3);
    assert!(weeks[1..].iter().all(|w| w.bucket_key.format("%a").to_string() == "Mon"));
    let total: usize = weeks.iter().map(|w| w.bar_count).sum();
    assert_eq!(total, 35);
}

#[test]
fn empty_input_returns_empty_output() {
    assert!(aggregate(&[], Period::Weekly).unwrap().is_empty());
    let agg = Aggregator::default().aggregate(&[], Period::Daily).unwrap();
    assert_eq!(agg.report().warnings, vec![AggregateWarning::EmptyInput]);
}

#[test]
fn malformed_bar_with_abort_fails_the_call() {
    let mut bars = trading_week();
    bars[2].high = 1.0;
    let aborting = Aggregator::new(AggregatorConfig::default().with_policy(InvalidBarPolicy::Abort));
    match aborting.aggregate(&bars, Period::Weekly) {
        Err(AggregateError::InvalidBar(err)) => {
            assert_eq!(err.index, 2);
            assert!(matches!(err.violation, BarViolation::HighBelowLow { .. }));
        }
        other => panic!("expected an aborted aggregation, got {other:?}"),
    }
}

#[test]
fn malformed_bar_with_drop_keeps_the_other_four() {
    let mut bars = trading_week();
    bars[2].high = 1.0;
    let dropping = Aggregator::new(AggregatorConfig::default().with_policy(InvalidBarPolicy::Drop));
    let agg = dropping.aggregate(&bars, Period::Weekly).unwrap();

    let week = agg.bars()[0];
    assert_eq!(week.bar_count, 4);
    assert_eq!(week.open, 10.0);
    assert_eq!(week.close, 14.8);
    assert_eq!(week.volume, 850.0);

    insta::assert_json_snapshot!(agg.report(), @r#"
    {
      "period": "weekly",
      "policy": "drop",
      "input_bars": 5,
      "accepted_bars": 4,
      "buckets": 1,
      "rejected": [
        {
          "index": 2,
          "date": "2024-03-06",
          "violation": {
            "kind": "high_below_low",
            "high": 1.0,
            "low": 11.8
          }
        }
      ],
      "warnings": []
    }
    "#);
}

#[test]
fn aggregators_can_run_on_many_threads() {
    let aggregator = Aggregator::default();
    let series: Vec<_> = (0..4)
        .map(|i| consecutive_days(date(2023, 1 + i, 1), 90))
        .collect();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = series
            .iter()
            .map(|bars| scope.spawn(move || aggregator.aggregate(bars, Period::Monthly)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (bars, result) in series.iter().zip(results) {
        let agg = result.unwrap();
        assert_eq!(agg.bars(), aggregate_all(bars, Period::Monthly).unwrap());
    }
}
