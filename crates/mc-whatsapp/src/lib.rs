//! WhatsApp deep links and the message catalogs behind them.
//!
//! Two destination numbers are in use: the contact form hands its fallback
//! to the sales line, while the floating widget, product buttons and quick
//! messages go to the store line.

pub mod agent;
pub mod hours;
pub mod link;
pub mod messages;

pub use agent::is_mobile_user_agent;
pub use hours::{is_business_open, is_open_at};
pub use link::{LinkError, WhatsAppLink, compose_whatsapp_url, compose_whatsapp_web_url};
pub use messages::{QuickMessage, contact_form_message, product_inquiry_message, section_greeting};

/// Destination of the contact form's WhatsApp fallback.
pub const FORM_WHATSAPP_NUMBER: &str = "5562932901188";

/// Destination of the floating widget, product and quick-message links.
pub const WIDGET_WHATSAPP_NUMBER: &str = "556232901188";
