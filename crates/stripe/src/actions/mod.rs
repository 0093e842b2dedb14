//! Stripe actions.

mod create_payment_intent;

pub use create_payment_intent::CreatePaymentIntent;
