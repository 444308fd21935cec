use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::RequestBuildError,
    protocols::http::rest_request::RestRequest,
    shared::de::{de_opt_str, de_str},
};

use super::{
    CoinbaseCancelAfter, CoinbaseOrderStatus, CoinbaseOrderType, CoinbaseSide, CoinbaseStop,
    CoinbaseTimeInForce,
};

const EXCHANGE: &str = "coinbase";

/*----- */
// Coinbase New Order
/*----- */
#[derive(Debug, Clone, Serialize)]
pub struct CoinbaseNewOrder {
    product_id: String,
    side: CoinbaseSide,
    r#type: CoinbaseOrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    funds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<CoinbaseStop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_in_force: Option<CoinbaseTimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cancel_after: Option<CoinbaseCancelAfter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    post_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_oid: Option<Uuid>,
}

impl CoinbaseNewOrder {
    pub fn limit(
        product_id: impl Into<String>,
        side: CoinbaseSide,
        price: f64,
        size: f64,
    ) -> Result<Self, RequestBuildError> {
        CoinbaseNewOrderBuilder::new()
            .product_id(product_id.into())
            .side(side)
            .r#type(CoinbaseOrderType::Limit)
            .price(price.to_string())
            .size(size.to_string())
            .time_in_force(CoinbaseTimeInForce::GTC)
            .client_oid(Uuid::new_v4())
            .build()
    }

    // Market buys are sized in quote currency, market sells in base currency
    pub fn market(
        product_id: impl Into<String>,
        side: CoinbaseSide,
        amount: f64,
    ) -> Result<Self, RequestBuildError> {
        let builder = CoinbaseNewOrderBuilder::new()
            .product_id(product_id.into())
            .side(side)
            .r#type(CoinbaseOrderType::Market)
            .client_oid(Uuid::new_v4());

        match side {
            CoinbaseSide::Buy => builder.funds(amount.to_string()).build(),
            CoinbaseSide::Sell => builder.size(amount.to_string()).build(),
        }
    }
}

impl RestRequest for CoinbaseNewOrder {
    type Response = CoinbaseOrderResponse;
    type Body = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/orders")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

/*----- */
// Coinbase New Order Builder
/*----- */
#[derive(Debug, Default)]
pub struct CoinbaseNewOrderBuilder {
    product_id: Option<String>,
    side: Option<CoinbaseSide>,
    r#type: Option<CoinbaseOrderType>,
    price: Option<String>,
    size: Option<String>,
    funds: Option<String>,
    stop: Option<CoinbaseStop>,
    stop_price: Option<String>,
    time_in_force: Option<CoinbaseTimeInForce>,
    cancel_after: Option<CoinbaseCancelAfter>,
    post_only: Option<bool>,
    client_oid: Option<Uuid>,
}

impl CoinbaseNewOrderBuilder {
    pub fn new() -> Self {
        CoinbaseNewOrderBuilder::default()
    }

    pub fn product_id(self, product_id: String) -> Self {
        Self {
            product_id: Some(product_id),
            ..self
        }
    }

    pub fn side(self, side: CoinbaseSide) -> Self {
        Self {
            side: Some(side),
            ..self
        }
    }

    pub fn r#type(self, r#type: CoinbaseOrderType) -> Self {
        Self {
            r#type: Some(r#type),
            ..self
        }
    }

    pub fn price(self, price: String) -> Self {
        Self {
            price: Some(price),
            ..self
        }
    }

    pub fn size(self, size: String) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    pub fn funds(self, funds: String) -> Self {
        Self {
            funds: Some(funds),
            ..self
        }
    }

    pub fn stop(self, stop: CoinbaseStop, stop_price: String) -> Self {
        Self {
            stop: Some(stop),
            stop_price: Some(stop_price),
            ..self
        }
    }

    pub fn time_in_force(self, time_in_force: CoinbaseTimeInForce) -> Self {
        Self {
            time_in_force: Some(time_in_force),
            ..self
        }
    }

    pub fn cancel_after(self, cancel_after: CoinbaseCancelAfter) -> Self {
        Self {
            cancel_after: Some(cancel_after),
            ..self
        }
    }

    pub fn post_only(self, post_only: bool) -> Self {
        Self {
            post_only: Some(post_only),
            ..self
        }
    }

    pub fn client_oid(self, client_oid: Uuid) -> Self {
        Self {
            client_oid: Some(client_oid),
            ..self
        }
    }

    pub fn build(self) -> Result<CoinbaseNewOrder, RequestBuildError> {
        let mandatory = |field: &'static str| RequestBuildError::MandatoryField {
            exchange: EXCHANGE,
            request: "new order",
            field,
        };
        let invalid = |reason: &'static str| RequestBuildError::InvalidCombination {
            exchange: EXCHANGE,
            request: "new order",
            reason,
        };

        let r#type = self.r#type.unwrap_or(CoinbaseOrderType::Limit);

        match r#type {
            CoinbaseOrderType::Limit if self.price.is_none() => return Err(mandatory("price")),
            CoinbaseOrderType::Limit if self.size.is_none() => return Err(mandatory("size")),
            CoinbaseOrderType::Market | CoinbaseOrderType::Stop
                if self.size.is_none() && self.funds.is_none() =>
            {
                return Err(invalid("one of size or funds is required"))
            }
            _ if self.size.is_some() && self.funds.is_some() => {
                return Err(invalid("size and funds are mutually exclusive"))
            }
            _ => {}
        }

        match (self.stop, &self.stop_price) {
            (None, None) if r#type == CoinbaseOrderType::Stop => return Err(mandatory("stop")),
            (Some(_), None) => return Err(mandatory("stop_price")),
            (None, Some(_)) => return Err(mandatory("stop")),
            _ => {}
        }

        match (self.time_in_force, self.cancel_after) {
            (Some(CoinbaseTimeInForce::GTT), None) => return Err(mandatory("cancel_after")),
            (Some(CoinbaseTimeInForce::GTT), Some(_)) | (_, None) => {}
            (_, Some(_)) => return Err(invalid("cancel_after requires GTT time in force")),
        }

        Ok(CoinbaseNewOrder {
            product_id: self.product_id.ok_or_else(|| mandatory("product_id"))?,
            side: self.side.ok_or_else(|| mandatory("side"))?,
            r#type,
            price: self.price,
            size: self.size,
            funds: self.funds,
            stop: self.stop,
            stop_price: self.stop_price,
            time_in_force: self.time_in_force,
            cancel_after: self.cancel_after,
            post_only: self.post_only,
            client_oid: self.client_oid,
        })
    }
}

/*----- */
// Coinbase New Order Response
/*----- */
#[derive(Debug, Clone, Deserialize)]
pub struct CoinbaseOrderResponse {
    pub id: String,
    pub product_id: String,
    pub side: CoinbaseSide,
    pub r#type: CoinbaseOrderType,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub size: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_str")]
    pub funds: Option<f64>,
    pub time_in_force: Option<CoinbaseTimeInForce>,
    #[serde(default)]
    pub post_only: bool,
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "de_str")]
    pub fill_fees: f64,
    #[serde(deserialize_with = "de_str")]
    pub filled_size: f64,
    #[serde(deserialize_with = "de_str")]
    pub executed_value: f64,
    pub status: CoinbaseOrderStatus,
    pub settled: bool,
}

/*----- */
// Coinbase Cancel Order
/*----- */
#[derive(Debug)]
pub struct CoinbaseCancelOrder {
    order_id: String,
    product_id: Option<String>,
}

impl CoinbaseCancelOrder {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            product_id: None,
        }
    }

    pub fn with_product_id(self, product_id: impl Into<String>) -> Self {
        Self {
            product_id: Some(product_id.into()),
            ..self
        }
    }
}

impl RestRequest for CoinbaseCancelOrder {
    // Coinbase answers with the id of the cancelled order
    type Response = String;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        match &self.product_id {
            Some(product_id) => Cow::Owned(format!(
                "/orders/{}?product_id={}",
                self.order_id, product_id
            )),
            None => Cow::Owned(format!("/orders/{}", self.order_id)),
        }
    }

    fn method() -> reqwest::Method {
        reqwest::Method::DELETE
    }
}

/*----- */
// Tests
/*----- */
