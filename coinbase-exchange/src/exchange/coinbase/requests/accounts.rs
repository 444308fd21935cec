use std::borrow::Cow;

use serde::Deserialize;

use crate::{protocols::http::rest_request::RestRequest, shared::de::de_str};

/*----- */
// Coinbase Accounts
/*----- */
#[derive(Debug)]
pub struct CoinbaseAccounts;

impl RestRequest for CoinbaseAccounts {
    type Response = Vec<CoinbaseAccount>;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/accounts")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

/*----- */
// Coinbase Account By Id
/*----- */
#[derive(Debug)]
pub struct CoinbaseAccountById {
    account_id: String,
}

impl CoinbaseAccountById {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

impl RestRequest for CoinbaseAccountById {
    type Response = CoinbaseAccount;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/accounts/{}", self.account_id))
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

/*----- */
// Coinbase Account Response
/*----- */
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoinbaseAccount {
    pub id: String,
    pub currency: String,
    #[serde(deserialize_with = "de_str")]
    pub balance: f64,
    #[serde(deserialize_with = "de_str")]
    pub available: f64,
    #[serde(deserialize_with = "de_str")]
    pub hold: f64,
    pub profile_id: String,
    pub trading_enabled: bool,
}

/*----- */
// Tests
/*----- */
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_account_request_paths() {
        assert_eq!(CoinbaseAccounts.path(), "/accounts");
        assert_eq!(
            CoinbaseAccountById::new("71452118-efc7-4cc4-8780-a5e22d4baa53").path(),
            "/accounts/71452118-efc7-4cc4-8780-a5e22d4baa53"
        );
        assert_eq!(CoinbaseAccounts::method(), reqwest::Method::GET);
    }

    #[test]
    fn test_de_accounts() {
        let response = r#"[
            {
                "id": "71452118-efc7-4cc4-8780-a5e22d4baa53",
                "currency": "BTC",
                "balance": "0.0000000000000000",
                "available": "0.0000000000000000",
                "hold": "0.0000000000000000",
                "profile_id": "75da88c5-05bf-4f54-bc85-5c775bd68254",
                "trading_enabled": true
            },
            {
                "id": "e316cb9a-0808-4fd7-8914-97829c1925de",
                "currency": "USD",
                "balance": "80.2301373066930000",
                "available": "79.2266348066930000",
                "hold": "1.0035025000000000",
                "profile_id": "75da88c5-05bf-4f54-bc85-5c775bd68254",
                "trading_enabled": true
            }
        ]"#;

        let accounts = serde_json::from_str::<Vec<CoinbaseAccount>>(response).unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].currency, "BTC");
        assert_eq!(accounts[0].balance, 0.0);
        assert_eq!(accounts[1].available, 79.226634806693);
        assert_eq!(accounts[1].hold, 1.0035025);
        assert!(accounts[1].trading_enabled);
    }

    #[test]
    fn test_de_account_rejects_unquoted_decimal() {
        let response = r#"{
            "id": "e316cb9a-0808-4fd7-8914-97829c1925de",
            "currency": "USD",
            "balance": 80.23,
            "available": "79.22",
            "hold": "1.00",
            "profile_id": "75da88c5-05bf-4f54-bc85-5c775bd68254",
            "trading_enabled": true
        }"#;

        assert!(serde_json::from_str::<CoinbaseAccount>(response).is_err());
    }
}
