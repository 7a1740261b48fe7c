pub mod auth;
pub mod whatsapp;

pub use auth::{AuthClient, AuthToken, LoginRequest, RegisterRequest};
pub use whatsapp::{
    CreateGroupRequest, GroupDescriptor, PaymentRequest, PollRequest, WhatsappClient,
};
