pub mod json;
pub mod message;
pub mod whatsapp;
