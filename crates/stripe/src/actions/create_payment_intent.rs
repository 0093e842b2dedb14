use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use weft_action::{Action, ActionError, Descriptor};
use weft_parameter::prelude::*;

use crate::app::{SLUG, StripeApp};

/// Hard cut applied to descriptor text before submission.
const STATEMENT_DESCRIPTOR_MAX: usize = 21;

/// The `stripe-create-payment-intent` action.
///
/// Collects the payment form fields, assembles the vendor payload
/// from the allow-listed subset plus the advanced-options bag, and
/// submits it. The vendor response is returned unmodified.
pub struct CreatePaymentIntent {
    app: Arc<StripeApp>,
    descriptor: Descriptor,
}

impl CreatePaymentIntent {
    /// Action key.
    pub const KEY: &'static str = "stripe-create-payment-intent";

    /// Build the action against a shared app.
    ///
    /// # Errors
    ///
    /// [`PropError::NotFound`] if the app catalog is missing one of the
    /// referenced entries.
    pub fn new(app: Arc<StripeApp>) -> Result<Self, PropError> {
        let catalog = app.catalog();
        let props = PropSchema::new()
            .with_ref(catalog, "amount", PropOverrides::new().required())?
            .with_ref(catalog, "country", PropOverrides::new().required())?
            .with_ref(catalog, "currency", PropOverrides::new().required())?
            .with_ref(
                catalog,
                "payment_method_types",
                PropOverrides::new().with_default(serde_json::json!(["card"])),
            )?
            .with_ref(catalog, "statement_descriptor", PropOverrides::new())?
            .with_ref(catalog, "metadata", PropOverrides::new())?
            .with_ref(
                catalog,
                "advanced",
                PropOverrides::new().with_description(
                    "Specify less-common options that you require. See [Create a PaymentIntent]\
                     (https://stripe.com/docs/api/payment_intents/create) for a list of \
                     supported options.",
                ),
            )?;

        let descriptor = Descriptor::new(
            Self::KEY,
            "Create a Payment Intent",
            "Create a [payment intent](https://stripe.com/docs/payments/payment-intents)",
        )
        .with_app(SLUG)
        .with_props(props);

        Ok(Self { app, descriptor })
    }
}

#[async_trait]
impl Action for CreatePaymentIntent {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    async fn run(&self, input: ParamValues) -> Result<Value, ActionError> {
        let payload = build_payload(&input);
        self.app.client().create_payment_intent(&payload).await
    }
}

/// The slice of the form that is forwarded to the vendor.
///
/// A fixed field set: anything the form collects that is not named
/// here stays local. `country` narrows the form's choices but never
/// reaches the payload. Values pass through uninterpreted; the vendor
/// performs its own validation.
#[derive(Debug, Clone, Default, PartialEq)]
struct PaymentIntentParams {
    amount: Option<Value>,
    currency: Option<Value>,
    payment_method_types: Option<Value>,
    statement_descriptor: Option<Value>,
    metadata: Option<Value>,
}

impl PaymentIntentParams {
    /// Select the allow-listed fields. A JSON `null` counts as absent.
    fn pick(input: &ParamValues) -> Self {
        Self {
            amount: present(input, "amount"),
            currency: present(input, "currency"),
            payment_method_types: present(input, "payment_method_types"),
            statement_descriptor: present(input, "statement_descriptor"),
            metadata: present(input, "metadata"),
        }
    }

    fn into_map(self) -> Map<String, Value> {
        let mut map = Map::new();
        insert_present(&mut map, "amount", self.amount);
        insert_present(&mut map, "currency", self.currency);
        insert_present(&mut map, "payment_method_types", self.payment_method_types);
        insert_present(&mut map, "statement_descriptor", self.statement_descriptor);
        insert_present(&mut map, "metadata", self.metadata);
        map
    }
}

fn present(input: &ParamValues, key: &str) -> Option<Value> {
    input.get(key).filter(|value| !value.is_null()).cloned()
}

fn insert_present(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_owned(), value);
    }
}

/// Coerce a descriptor field to text and cut it to the vendor limit.
/// Too-long input is truncated, never rejected.
fn descriptor_text(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    text.chars().take(STATEMENT_DESCRIPTOR_MAX).collect()
}

/// Assemble the vendor payload.
///
/// Allow-listed fields first, both statement-descriptor truncations,
/// then the advanced bag overlaid. On a key collision the advanced
/// value wins; the replace is shallow, never a deep merge.
fn build_payload(input: &ParamValues) -> Map<String, Value> {
    let mut params = PaymentIntentParams::pick(input);
    if let Some(descriptor) = params.statement_descriptor.take() {
        params.statement_descriptor = Some(Value::String(descriptor_text(&descriptor)));
    }

    let mut advanced = input.object_or_empty("advanced");
    let suffix = advanced
        .get("statement_descriptor_suffix")
        .filter(|value| !value.is_null())
        .map(descriptor_text);
    if let Some(suffix) = suffix {
        advanced.insert("statement_descriptor_suffix".to_owned(), Value::String(suffix));
    }

    let mut payload = params.into_map();
    payload.extend(advanced);
    payload
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::app::StripeConfig;

    fn action() -> CreatePaymentIntent {
        let app = Arc::new(StripeApp::new(StripeConfig::new("sk_test_abc")));
        CreatePaymentIntent::new(app).unwrap()
    }

    fn input(pairs: &[(&str, Value)]) -> ParamValues {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    #[test]
    fn schema_references_resolve_in_order() {
        let action = action();
        let props = &action.descriptor().props;

        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(
            keys,
            vec![
                "amount",
                "country",
                "currency",
                "payment_method_types",
                "statement_descriptor",
                "metadata",
                "advanced",
            ]
        );

        assert!(!props.get("amount").unwrap().is_optional());
        assert!(!props.get("country").unwrap().is_optional());
        assert!(!props.get("currency").unwrap().is_optional());
        assert!(props.get("statement_descriptor").unwrap().is_optional());
        assert_eq!(
            props.get("payment_method_types").unwrap().default_value(),
            Some(json!(["card"]))
        );
    }

    #[test]
    fn advanced_description_is_overridden_without_touching_the_catalog() {
        let app = Arc::new(StripeApp::new(StripeConfig::new("sk_test_abc")));
        let action = CreatePaymentIntent::new(Arc::clone(&app)).unwrap();

        let overridden = action
            .descriptor()
            .props
            .get("advanced")
            .unwrap()
            .metadata()
            .description
            .clone()
            .unwrap();
        assert!(overridden.contains("Create a PaymentIntent"));

        let original = app
            .catalog()
            .get("advanced")
            .unwrap()
            .metadata()
            .description
            .clone()
            .unwrap();
        assert_eq!(original, "Add any additional parameters that you require.");
    }

    #[test]
    fn descriptor_identity() {
        let action = action();
        let descriptor = action.descriptor();
        assert_eq!(descriptor.key, "stripe-create-payment-intent");
        assert_eq!(descriptor.name, "Create a Payment Intent");
        assert_eq!(descriptor.version.to_string(), "0.0.1");
        assert_eq!(descriptor.app, "stripe");
    }

    #[test]
    fn payload_keeps_only_allow_listed_fields() {
        let payload = build_payload(&input(&[
            ("amount", json!(500)),
            ("country", json!("US")),
            ("currency", json!("usd")),
            ("customer_email", json!("jenny.rosen@example.com")),
        ]));

        assert_eq!(payload, object(json!({ "amount": 500, "currency": "usd" })));
    }

    #[test]
    fn long_statement_descriptor_is_cut_to_21_chars() {
        let payload = build_payload(&input(&[
            ("amount", json!(500)),
            ("currency", json!("usd")),
            ("statement_descriptor", json!("A".repeat(30))),
            ("advanced", json!({})),
        ]));

        assert_eq!(
            payload,
            object(json!({
                "amount": 500,
                "currency": "usd",
                "statement_descriptor": "A".repeat(21),
            }))
        );
    }

    #[test]
    fn short_statement_descriptor_is_unchanged() {
        let payload = build_payload(&input(&[(
            "statement_descriptor",
            json!("WEFT ORDER"),
        )]));

        assert_eq!(payload["statement_descriptor"], json!("WEFT ORDER"));
    }

    #[test]
    fn suffix_is_truncated_independently() {
        let payload = build_payload(&input(&[
            ("amount", json!(1000)),
            ("currency", json!("eur")),
            (
                "advanced",
                json!({ "statement_descriptor_suffix": "B".repeat(25) }),
            ),
        ]));

        assert_eq!(
            payload,
            object(json!({
                "amount": 1000,
                "currency": "eur",
                "statement_descriptor_suffix": "B".repeat(21),
            }))
        );
        assert!(!payload.contains_key("statement_descriptor"));
    }

    #[test]
    fn advanced_wins_on_key_collision_shallow() {
        let payload = build_payload(&input(&[
            ("metadata", json!({ "a": 1 })),
            ("advanced", json!({ "metadata": { "b": 2 } })),
        ]));

        assert_eq!(payload["metadata"], json!({ "b": 2 }));
    }

    #[test]
    fn non_string_descriptor_is_coerced_to_its_json_text() {
        let payload = build_payload(&input(&[("statement_descriptor", json!(4242))]));
        assert_eq!(payload["statement_descriptor"], json!("4242"));

        let payload = build_payload(&input(&[(
            "statement_descriptor",
            json!({ "brand": "Weft", "region": "EU", "tier": 3 }),
        )]));
        let text = payload["statement_descriptor"].as_str().unwrap();
        assert_eq!(text.chars().count(), 21);
        assert!(text.starts_with("{\"brand\""));
    }

    #[test]
    fn truncation_never_splits_a_code_point() {
        let payload = build_payload(&input(&[(
            "statement_descriptor",
            json!("ÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉÉ"),
        )]));

        let text = payload["statement_descriptor"].as_str().unwrap();
        assert_eq!(text.chars().count(), 21);
        assert!(text.chars().all(|c| c == 'É'));
    }

    #[test]
    fn null_fields_are_absent_from_the_payload() {
        let payload = build_payload(&input(&[
            ("amount", json!(500)),
            ("statement_descriptor", json!(null)),
            ("metadata", json!(null)),
        ]));

        assert_eq!(payload, object(json!({ "amount": 500 })));
    }

    #[test]
    fn payload_synthesizes_no_defaults() {
        let payload = build_payload(&input(&[("amount", json!(500))]));
        assert!(!payload.contains_key("payment_method_types"));
    }

    #[test]
    fn advanced_can_introduce_arbitrary_vendor_fields() {
        let payload = build_payload(&input(&[
            ("amount", json!(2000)),
            ("currency", json!("usd")),
            (
                "advanced",
                json!({ "capture_method": "manual", "customer": "cus_4fdAW5ftNQow1a" }),
            ),
        ]));

        assert_eq!(payload["capture_method"], json!("manual"));
        assert_eq!(payload["customer"], json!("cus_4fdAW5ftNQow1a"));
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }
}
