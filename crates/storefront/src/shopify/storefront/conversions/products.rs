//! Product type conversion functions.

use luna_desire_core::{Cursor, PageInfo};

use crate::shopify::types::{Image, Money, PriceRange, ProductConnection, ProductItem};

use super::super::queries::all_products::{
    AllProductsProducts, ImageFields, MoneyFields, PageInfoFields, ProductItem as ProductItemFields,
};

pub fn convert_product_connection(conn: AllProductsProducts) -> ProductConnection {
    ProductConnection {
        nodes: conn.nodes.into_iter().map(convert_product_item).collect(),
        page_info: convert_page_info(conn.page_info),
    }
}

fn convert_product_item(product: ProductItemFields) -> ProductItem {
    ProductItem {
        id: product.id,
        handle: product.handle,
        title: product.title,
        vendor: product.vendor,
        featured_image: product.featured_image.map(convert_image),
        price_range: PriceRange {
            min_variant_price: Some(convert_money(product.price_range.min_variant_price)),
            max_variant_price: Some(convert_money(product.price_range.max_variant_price)),
        },
    }
}

fn convert_page_info(info: PageInfoFields) -> PageInfo {
    PageInfo {
        has_previous_page: info.has_previous_page,
        has_next_page: info.has_next_page,
        start_cursor: info.start_cursor.map(Cursor::from),
        end_cursor: info.end_cursor.map(Cursor::from),
    }
}

fn convert_image(image: ImageFields) -> Image {
    Image {
        id: image.id,
        url: image.url,
        alt_text: image.alt_text,
        width: image.width,
        height: image.height,
    }
}

fn convert_money(money: MoneyFields) -> Money {
    Money {
        amount: money.amount,
        currency_code: money.currency_code,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_product_connection() {
        let conn: AllProductsProducts = serde_json::from_value(serde_json::json!({
            "nodes": [{
                "id": "gid://shopify/Product/1",
                "handle": "silk-robe",
                "title": "Silk Robe",
                "vendor": "Luna",
                "featuredImage": null,
                "priceRange": {
                    "minVariantPrice": {"amount": "49.0", "currencyCode": "USD"},
                    "maxVariantPrice": {"amount": "79.0", "currencyCode": "USD"}
                }
            }],
            "pageInfo": {
                "hasPreviousPage": false,
                "hasNextPage": true,
                "startCursor": "s1",
                "endCursor": "e1"
            }
        }))
        .unwrap();

        let connection = convert_product_connection(conn);
        assert_eq!(connection.len(), 1);
        let product = &connection.nodes[0];
        assert_eq!(product.handle, "silk-robe");
        assert!(product.featured_image.is_none());
        assert!(product.price_range.has_discount());
        assert_eq!(
            connection.page_info.next_cursor().map(Cursor::as_str),
            Some("e1")
        );
        assert!(connection.page_info.previous_cursor().is_none());
    }

    #[test]
    fn test_convert_featured_image() {
        let product: ProductItemFields = serde_json::from_value(serde_json::json!({
            "id": "gid://shopify/Product/2",
            "handle": "candle",
            "title": "Candle",
            "vendor": "Luna",
            "featuredImage": {
                "id": "gid://shopify/ProductImage/9",
                "altText": null,
                "url": "https://cdn.shopify.com/s/files/candle.jpg",
                "width": 1200,
                "height": 800
            },
            "priceRange": {
                "minVariantPrice": {"amount": "24.0", "currencyCode": "EUR"},
                "maxVariantPrice": {"amount": "24.0", "currencyCode": "EUR"}
            }
        }))
        .unwrap();
        let item = convert_product_item(product);
        let image = item.featured_image.unwrap();
        assert_eq!(image.url, "https://cdn.shopify.com/s/files/candle.jpg");
        assert_eq!(image.width, Some(1200));
        assert_eq!(item.price_range.min_variant_price.as_ref().unwrap().currency_code, "EUR");
        assert!(!item.price_range.has_discount());
    }
}
