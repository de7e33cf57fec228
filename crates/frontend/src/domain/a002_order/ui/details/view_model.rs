//! Staging helpers for the order detail page. Edits to customer,
//! shipping and items mutate a local copy of the order; only the status
//! save reaches the backend.

use contracts::domain::a002_order::aggregate::Order;
use uuid::Uuid;

/// Order items never drop below one unit while staged.
pub fn clamp_item_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}

/// Stage a quantity change for one item; other items are untouched.
pub fn stage_item_quantity(order: &mut Order, item_id: Uuid, quantity: i64) {
    if let Some(item) = order.items.iter_mut().find(|i| i.id == item_id) {
        item.quantity = clamp_item_quantity(quantity);
    }
}

/// Stage removal of one item.
pub fn stage_item_removal(order: &mut Order, item_id: Uuid) {
    order.items.retain(|i| i.id != item_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::ProductId;
    use contracts::domain::a002_order::aggregate::{
        CustomerInfo, OrderId, OrderItem, OrderStatus, ShippingInfo,
    };

    fn order_with_items(quantities: &[u32]) -> Order {
        Order {
            id: OrderId::new(Uuid::new_v4()),
            status: OrderStatus::Pending,
            customer: CustomerInfo::default(),
            shipping: ShippingInfo::default(),
            items: quantities
                .iter()
                .map(|q| OrderItem {
                    id: Uuid::new_v4(),
                    product_id: ProductId::new(Uuid::new_v4()),
                    product_title: String::new(),
                    color_id: None,
                    size: None,
                    quantity: *q,
                    price: 10.0,
                })
                .collect(),
            created_at: None,
        }
    }

    #[test]
    fn quantity_is_clamped_to_at_least_one() {
        assert_eq!(clamp_item_quantity(0), 1);
        assert_eq!(clamp_item_quantity(-5), 1);
        assert_eq!(clamp_item_quantity(3), 3);
    }

    #[test]
    fn staging_touches_only_the_target_item() {
        let mut order = order_with_items(&[2, 4]);
        let target = order.items[0].id;
        stage_item_quantity(&mut order, target, 0);
        assert_eq!(order.items[0].quantity, 1);
        assert_eq!(order.items[1].quantity, 4);
    }

    #[test]
    fn removal_drops_the_item_and_shrinks_the_total() {
        let mut order = order_with_items(&[2, 4]);
        let target = order.items[1].id;
        stage_item_removal(&mut order, target);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total_amount(), 20.0);
    }

    #[test]
    fn staging_an_unknown_item_is_a_no_op() {
        let mut order = order_with_items(&[2]);
        stage_item_quantity(&mut order, Uuid::new_v4(), 9);
        assert_eq!(order.items[0].quantity, 2);
    }
}
