pub mod bulk_delete_orders;
pub mod bulk_delete_orders_screencast;
pub mod default_address_lock;
pub mod default_address_lock_screencast;
pub mod faq;
pub mod home;
pub mod privacy_policy;
