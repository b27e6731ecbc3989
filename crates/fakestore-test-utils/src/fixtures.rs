//! The reference catalog the live service serves: 20 products over 4 categories.

use fakestore_api::types::Product;
use serde_json::json;

/// Number of products in [`reference_catalog`].
pub const REFERENCE_CATALOG_LEN: usize = 20;

/// Category labels in the order `/products/categories/` lists them.
pub fn reference_categories() -> Vec<String> {
    ["electronics", "jewelery", "men's clothing", "women's clothing"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// The products of the reference catalog in server order (ids `1..=20`).
pub fn reference_catalog() -> Vec<Product> {
    let raw = json!([
        product(1, "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops", 109.95, "men's clothing", "81fPKd-2AYL._AC_SL1500_.jpg", 3.9, 120),
        product(2, "Mens Casual Premium Slim Fit T-Shirts ", 22.3, "men's clothing", "71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg", 4.1, 259),
        product(3, "Mens Cotton Jacket", 55.99, "men's clothing", "71li-ujtlUL._AC_UX679_.jpg", 4.7, 500),
        product(4, "Mens Casual Slim Fit", 15.99, "men's clothing", "71YXzeOuslL._AC_UY879_.jpg", 2.1, 430),
        product(5, "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet", 695.0, "jewelery", "71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg", 4.6, 400),
        product(6, "Solid Gold Petite Micropave ", 168.0, "jewelery", "61sbMiUnoGL._AC_UL640_QL65_ML3_.jpg", 3.9, 70),
        product(7, "White Gold Plated Princess", 9.99, "jewelery", "71YAIFU48IL._AC_UL640_QL65_ML3_.jpg", 3.0, 400),
        product(8, "Pierced Owl Rose Gold Plated Stainless Steel Double", 10.99, "jewelery", "51UDEzMJVpL._AC_UL640_QL65_ML3_.jpg", 1.9, 100),
        product(9, "WD 2TB Elements Portable External Hard Drive - USB 3.0 ", 64.0, "electronics", "61IBBVJvSDL._AC_SY879_.jpg", 3.3, 203),
        product(10, "SanDisk SSD PLUS 1TB Internal SSD - SATA III 6 Gb/s", 109.0, "electronics", "61U7T1koQqL._AC_SX679_.jpg", 2.9, 470),
        product(11, "Silicon Power 256GB SSD 3D NAND A55 SLC Cache Performance Boost SATA III 2.5", 109.0, "electronics", "71kWymZ+c+L._AC_SX679_.jpg", 4.8, 319),
        product(12, "WD 4TB Gaming Drive Works with Playstation 4 Portable External Hard Drive", 114.0, "electronics", "61mtL65D4cL._AC_SX679_.jpg", 4.8, 400),
        product(13, "Acer SB220Q bi 21.5 inches Full HD (1920 x 1080) IPS Ultra-Thin", 599.0, "electronics", "81QpkIctqPL._AC_SX679_.jpg", 2.9, 250),
        product(14, "Samsung 49-Inch CHG90 144Hz Curved Gaming Monitor (LC49HG90DMNXZA) - Super Ultrawide Screen QLED ", 999.99, "electronics", "81Zt42ioCgL._AC_SX679_.jpg", 2.2, 140),
        product(15, "BIYLACLESEN Women's 3-in-1 Snowboard Jacket Winter Coats", 56.99, "women's clothing", "51Y5NI-I5jL._AC_UX679_.jpg", 2.6, 235),
        product(16, "Lock and Love Women's Removable Hooded Faux Leather Moto Biker Jacket", 29.95, "women's clothing", "81XH0e8fefL._AC_UY879_.jpg", 2.9, 340),
        product(17, "Rain Jacket Women Windbreaker Striped Climbing Raincoats", 39.99, "women's clothing", "71HblAHs5xL._AC_UY879_-2.jpg", 3.8, 679),
        product(18, "MBJ Women's Solid Short Sleeve Boat Neck V ", 9.85, "women's clothing", "71z3kpMAYsL._AC_UY879_.jpg", 4.7, 130),
        product(19, "Opna Women's Short Sleeve Moisture", 7.95, "women's clothing", "51eg55uWmdL._AC_UX679_.jpg", 4.5, 146),
        product(20, "DANVOUY Womens T Shirt Casual Cotton Short", 12.99, "women's clothing", "61pHAEJ4NML._AC_UX679_.jpg", 3.6, 145),
    ]);

    serde_json::from_value(raw).expect("reference catalog should decode")
}

fn product(
    id: u64,
    title: &str,
    price: f64,
    category: &str,
    image: &str,
    rate: f64,
    count: u32,
) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("{title}. Reference catalog item {id}."),
        "category": category,
        "image": format!("https://fakestoreapi.com/img/{image}"),
        "rating": { "rate": rate, "count": count },
    })
}
