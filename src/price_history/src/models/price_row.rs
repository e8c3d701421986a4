//! Wire shape of one row of the backend's daily-price endpoint.
//!
//! The backend (`GET /api/stock/{stockItemId}`) names fields `tradeDate`,
//! `openPrice`, ... while older frontend payloads carry `date`, `open`, ...
//! Both spellings are captured here as separate optional fields; resolving
//! them into one canonical [`DailyBar`](candle_aggregator::DailyBar) is the
//! job of [`crate::normalize`], nowhere else.

use serde::{Deserialize, Serialize};

/// A price that may be serialized as a JSON number or a numeric string
/// (`BigDecimal` columns frequently arrive as strings).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Numeric value, accepting `,` thousands separators in the string form.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Numeric::Number(n) => Some(*n),
            Numeric::Text(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        }
    }

    pub fn raw(&self) -> String {
        match self {
            Numeric::Number(n) => n.to_string(),
            Numeric::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

/// One daily price row as sent by the backend. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPriceDailyRow {
    pub stock_price_daily_id: Option<i64>,
    pub stock_name: Option<String>,

    pub trade_date: Option<String>,
    pub open_price: Option<Numeric>,
    pub high_price: Option<Numeric>,
    pub low_price: Option<Numeric>,
    pub close_price: Option<Numeric>,
    pub volume: Option<Numeric>,

    // frontend aliases
    pub date: Option<String>,
    pub open: Option<Numeric>,
    pub high: Option<Numeric>,
    pub low: Option<Numeric>,
    pub close: Option<Numeric>,
}

/// Body of the daily-price endpoint: either a bare list or wrapped in the
/// `{ success, data, message }` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DailyPricesBody {
    Rows(Vec<StockPriceDailyRow>),
    Envelope { data: Vec<StockPriceDailyRow> },
}

impl DailyPricesBody {
    pub fn into_rows(self) -> Vec<StockPriceDailyRow> {
        match self {
            DailyPricesBody::Rows(rows) => rows,
            DailyPricesBody::Envelope { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_row_deserializes() {
        let row: StockPriceDailyRow = serde_json::from_str(
            r#"{
                "stockPriceDailyId": 17,
                "stockName": "삼성전자",
                "tradeDate": "2024-03-04",
                "openPrice": 71500,
                "highPrice": "73000.00",
                "lowPrice": 71000,
                "closePrice": 72500,
                "volume": 12500000,
                "createdAt": "2024-03-04T18:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(row.stock_price_daily_id, Some(17));
        assert_eq!(row.trade_date.as_deref(), Some("2024-03-04"));
        assert_eq!(row.open_price, Some(Numeric::Number(71500.0)));
        assert_eq!(row.high_price, Some(Numeric::Text("73000.00".into())));
        assert_eq!(row.date, None);
    }

    #[test]
    fn numeric_text_accepts_thousands_separators() {
        assert_eq!(Numeric::Text(" 72,500 ".into()).to_f64(), Some(72500.0));
        assert_eq!(Numeric::Text("n/a".into()).to_f64(), None);
        assert_eq!(Numeric::Number(1.5).raw(), "1.5");
    }

    #[test]
    fn body_accepts_list_or_envelope() {
        let bare: DailyPricesBody = serde_json::from_str(r#"[{"tradeDate": "2024-03-04"}]"#).unwrap();
        assert_eq!(bare.into_rows().len(), 1);

        let wrapped: DailyPricesBody = serde_json::from_str(
            r#"{"success": true, "data": [{"date": "2024-03-04"}, {"date": "2024-03-05"}]}"#,
        )
        .unwrap();
        assert_eq!(wrapped.into_rows().len(), 2);
    }
}
