pub mod configuration;
pub mod controller;
pub mod domain;
pub mod form_client;
pub mod page;
pub mod status;
pub mod telemetry;
pub mod util;

pub use controller::ContactForm;
pub use page::ContactPage;
