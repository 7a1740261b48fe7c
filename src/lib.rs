//! Domain core of the event-planning app: the typed event-creation form, its
//! pure update and due-amount derivation rules, and thin HTTP clients for the
//! auth and WhatsApp messaging backends.

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod services;
