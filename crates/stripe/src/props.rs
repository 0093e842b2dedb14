//! Shared Stripe prop catalog.
//!
//! One entry per reusable form field. Every entry is optional here;
//! actions tighten requiredness, defaults, and descriptions at the
//! point of reference.

use weft_parameter::prelude::*;

fn coded_options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(label, value)| SelectOption::new(*label, *value))
        .collect()
}

/// Build the shared Stripe prop catalog.
#[must_use]
pub fn catalog() -> PropCatalog {
    PropCatalog::new()
        .with(PropDef::Integer(
            IntegerProp::new("amount", "Amount")
                .with_description(
                    "Amount intended to be collected by this payment. A positive integer in the \
                     smallest currency unit (e.g., 100 cents to charge $1.00 or 100 to charge \
                     ¥100, a zero-decimal currency).",
                )
                .optional(),
        ))
        .with(PropDef::Select(
            SelectProp::new("country", "Country")
                .with_description("Country of the account processing the payment.")
                .optional()
                .with_options(coded_options(&[
                    ("Australia", "AU"),
                    ("Canada", "CA"),
                    ("France", "FR"),
                    ("Germany", "DE"),
                    ("Ireland", "IE"),
                    ("Italy", "IT"),
                    ("Japan", "JP"),
                    ("Netherlands", "NL"),
                    ("Singapore", "SG"),
                    ("Spain", "ES"),
                    ("United Kingdom", "GB"),
                    ("United States", "US"),
                ])),
        ))
        .with(PropDef::Select(
            SelectProp::new("currency", "Currency")
                .with_description(
                    "Three-letter ISO currency code, in lowercase. Must be a supported currency.",
                )
                .optional()
                .with_options(coded_options(&[
                    ("AUD (Australian Dollar)", "aud"),
                    ("CAD (Canadian Dollar)", "cad"),
                    ("CHF (Swiss Franc)", "chf"),
                    ("EUR (Euro)", "eur"),
                    ("GBP (British Pound)", "gbp"),
                    ("JPY (Japanese Yen)", "jpy"),
                    ("NZD (New Zealand Dollar)", "nzd"),
                    ("SEK (Swedish Krona)", "sek"),
                    ("SGD (Singapore Dollar)", "sgd"),
                    ("USD (US Dollar)", "usd"),
                ])),
        ))
        .with(PropDef::MultiSelect(
            MultiSelectProp::new("payment_method_types", "Payment Method Types")
                .with_description(
                    "The list of payment method types that this PaymentIntent is allowed to use.",
                )
                .optional()
                .with_options(coded_options(&[
                    ("Card", "card"),
                    ("Alipay", "alipay"),
                    ("BECS Direct Debit", "au_becs_debit"),
                    ("Bancontact", "bancontact"),
                    ("EPS", "eps"),
                    ("giropay", "giropay"),
                    ("iDEAL", "ideal"),
                    ("Klarna", "klarna"),
                    ("Przelewy24", "p24"),
                    ("SEPA Direct Debit", "sepa_debit"),
                    ("Sofort", "sofort"),
                    ("US Bank Account", "us_bank_account"),
                ])),
        ))
        .with(PropDef::Text(
            TextProp::new("statement_descriptor", "Statement Descriptor")
                .with_description(
                    "Text that appears on the customer's statement as the statement descriptor. \
                     The complete descriptor is limited to 22 characters.",
                )
                .optional(),
        ))
        .with(PropDef::Object(
            ObjectProp::new("metadata", "Metadata")
                .with_description(
                    "Set of key-value pairs to attach to the payment. Useful for storing \
                     additional information about the object in a structured format.",
                )
                .optional(),
        ))
        .with(PropDef::Object(
            ObjectProp::new("advanced", "Advanced Options")
                .with_description("Add any additional parameters that you require.")
                .optional(),
        ))
}
