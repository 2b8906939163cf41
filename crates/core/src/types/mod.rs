//! Core types for the LunaDesire storefront.

pub mod connection;
pub mod locale;
pub mod price;

pub use connection::{Connection, Cursor, PageInfo};
pub use locale::{Locale, LocaleError};
pub use price::{CurrencyCode, FREE_SHIPPING_THRESHOLD, Price, PriceError, parse_amount};
