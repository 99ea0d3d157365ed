//! Typed records for the Chargily Pay resources.
//!
//! Response records tolerate missing and unknown fields so the client stays
//! a pass-through for whatever the API returns. Parameter records omit
//! unset optional fields when serialized, which is what makes the
//! `Update*Params` types partial updates.

mod balance;
mod checkout;
mod common;
mod customer;
mod payment_link;
mod price;
mod product;


pub use balance::{Balance, Wallet};
pub use checkout::{
    Checkout, CheckoutItem, CheckoutItemParams, CheckoutStatus, CreateCheckoutParams,
};
pub use common::{DeleteItemResponse, ListResponse, Locale, Metadata, PaymentMethod};
pub use customer::{Address, CreateCustomerParams, Customer, UpdateCustomerParams};
pub use payment_link::{
    CreatePaymentLinkParams, PaymentLink, PaymentLinkItem, PaymentLinkItemParams,
    UpdatePaymentLinkParams,
};
pub use price::{CreatePriceParams, Price, UpdatePriceParams};
pub use product::{CreateProductParams, Product, UpdateProductParams};
