pub mod accounts;
pub mod orders;

use serde::{Deserialize, Serialize};

/*----- */
// Coinbase Order Enums
/*----- */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinbaseSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinbaseOrderType {
    Limit,
    Market,
    Stop,
}

/*
GTC: good till cancelled
GTT: good till time, requires cancel_after
IOC: immediate or cancel
FOK: fill or kill
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinbaseTimeInForce {
    GTC,
    GTT,
    IOC,
    FOK,
}

// Loss triggers at or below stop_price, entry at or above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinbaseStop {
    Loss,
    Entry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinbaseCancelAfter {
    Min,
    Hour,
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinbaseOrderStatus {
    Open,
    Pending,
    Rejected,
    Done,
    Active,
    Received,
    All,
}
