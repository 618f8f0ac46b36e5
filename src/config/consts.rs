// src/config/consts.rs

// Net config
pub const SQUAD_URL: &str = "https://www.transfermarkt.com/real-madrid/startseite/verein/418";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const REFERER: &str = "https://www.transfermarkt.com/";
pub const CONSENT_COOKIE: &str = "consentCookie=true";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Squad page layout
pub const CONTAINER_SELECTOR: &str = "#tm-main > div.row.vereinsstartseite > div.large-8.columns > div.box > div.responsive-table";
pub const TABLE_SELECTOR: &str = "table.items";
pub const VALUE_CELL_SELECTOR: &str = "td.rechts.hauptlink";
pub const MIN_ROW_CELLS: usize = 5;
pub const PLAYER_CELL: usize = 1;

// Chart fields
pub const CATEGORY_FIELD: &str = "Player";
pub const VALUE_FIELD: &str = "MarketValue";

// Signal demo
pub const TIME_START: f64 = 0.0;
pub const TIME_END: f64 = 5.0;
pub const TIME_SAMPLES: usize = 5000;
pub const MESSAGE_FREQUENCY: f64 = 2.0;
pub const CARRIER_FREQUENCY: f64 = 20.0;
pub const SAMPLING_RATE: u32 = 1000;

// Windows
pub const MARKET_WINDOW: (f32, f32) = (1000.0, 700.0);
pub const SIGNAL_WINDOW: (f32, f32) = (1400.0, 800.0);

// Local log
pub const LOG_DIR: &str = ".marketwave";
pub const LOG_FILE: &str = "debug.log";
