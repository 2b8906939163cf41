//! GraphQL query definitions for the Shopify Storefront API.
//!
//! Every operation is read-only and takes the request locale through
//! `@inContext`.

use graphql_client::GraphQLQuery;

// Scalar types for Shopify GraphQL schema
// Must be defined in the same module where GraphQLQuery derive is used
// Note: These MUST match the GraphQL schema scalar names exactly (uppercase)
#[allow(clippy::upper_case_acronyms)]
type Decimal = String;
#[allow(clippy::upper_case_acronyms)]
type URL = String;
#[allow(clippy::upper_case_acronyms)]
type HTML = String;

// Enums passed through as their wire strings
type CountryCode = String;
type LanguageCode = String;
type CurrencyCode = String;
type MenuItemType = String;

// Product queries
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/storefront/schema.graphql",
    query_path = "graphql/storefront/queries/products.graphql",
    response_derives = "Debug, Clone",
    extern_enums("CountryCode", "LanguageCode", "CurrencyCode")
)]
pub struct AllProducts;

// Page queries
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/storefront/schema.graphql",
    query_path = "graphql/storefront/queries/pages.graphql",
    response_derives = "Debug, Clone",
    extern_enums("CountryCode", "LanguageCode"),
    selected_operation = "Page"
)]
pub struct Page;

// The derive names the operation after the struct; keep the Rust-facing names.
pub type PageByHandle = Page;
pub use page as page_by_handle;

// Layout queries
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/storefront/schema.graphql",
    query_path = "graphql/storefront/queries/layout.graphql",
    response_derives = "Debug, Clone",
    extern_enums("CountryCode", "LanguageCode", "MenuItemType")
)]
pub struct Header;

// Cart queries
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/storefront/schema.graphql",
    query_path = "graphql/storefront/queries/cart.graphql",
    response_derives = "Debug, Clone",
    extern_enums("CountryCode", "LanguageCode")
)]
pub struct CartQuantity;
