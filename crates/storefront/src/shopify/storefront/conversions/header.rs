//! Shop and menu conversion functions.

use crate::shopify::types::{HeaderData, Menu, MenuItem, Shop};

use super::super::queries::header;

pub fn convert_header(data: header::ResponseData) -> HeaderData {
    HeaderData {
        shop: Shop {
            id: data.shop.id,
            name: data.shop.name,
            primary_domain_url: data.shop.primary_domain.url,
        },
        menu: data.menu.map(|menu| Menu {
            id: menu.id,
            items: menu.items.into_iter().map(convert_menu_item).collect(),
        }),
    }
}

fn convert_menu_item(item: header::MenuItemFields) -> MenuItem {
    MenuItem {
        id: item.id,
        title: item.title,
        url: item.url,
        kind: item.kind,
        resource_id: item.resource_id,
        tags: item.tags,
    }
}
