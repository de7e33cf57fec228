pub mod a001_product;
pub mod a002_order;
pub mod a003_delivery_area;
pub mod a004_color;
pub mod a005_size;
