use serde::{de::DeserializeOwned, Serialize};
use std::{borrow::Cow, time::Duration};

pub trait RestRequest {
    type Response: DeserializeOwned;
    type Body: Serialize;

    // Path relative to the base url, query string included
    fn path(&self) -> Cow<'static, str>;

    fn method() -> reqwest::Method;

    fn body(&self) -> Option<&Self::Body> {
        None
    }

    // None falls back to the timeout the client was built with
    fn timeout() -> Option<Duration> {
        None
    }
}
