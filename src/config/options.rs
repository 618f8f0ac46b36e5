// src/config/options.rs
use super::consts::*;

/// Headers and cookie sent with the squad page request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    pub user_agent: String,
    pub accept_language: String,
    pub referer: String,
    pub cookie: String,
    pub timeout_secs: u64,
    /// Honour `HTTP(S)_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            accept_language: s!(ACCEPT_LANGUAGE),
            referer: s!(REFERER),
            cookie: s!(CONSENT_COOKIE),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            system_proxy: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WindowOptions {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl WindowOptions {
    pub fn new(title: &str, (width, height): (f32, f32)) -> Self {
        Self { title: s!(title), width, height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    pub url: String,
    pub request: RequestOptions,
    pub category_field: String,
    pub value_field: String,
    pub window: WindowOptions,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(SQUAD_URL),
            request: RequestOptions::default(),
            category_field: s!(CATEGORY_FIELD),
            value_field: s!(VALUE_FIELD),
            window: WindowOptions::new("Market values", MARKET_WINDOW),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignalOptions {
    pub time_start: f64,
    pub time_end: f64,
    pub samples: usize,
    pub message_frequency: f64,
    pub carrier_frequency: f64,
    pub sampling_rate: u32,
    pub window: WindowOptions,
}

impl Default for SignalOptions {
    fn default() -> Self {
        Self {
            time_start: TIME_START,
            time_end: TIME_END,
            samples: TIME_SAMPLES,
            message_frequency: MESSAGE_FREQUENCY,
            carrier_frequency: CARRIER_FREQUENCY,
            sampling_rate: SAMPLING_RATE,
            window: WindowOptions::new("FM signal", SIGNAL_WINDOW),
        }
    }
}
