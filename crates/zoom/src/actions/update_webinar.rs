use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use weft_action::{Action, ActionError, Descriptor};
use weft_parameter::prelude::*;

use crate::app::{SLUG, ZoomApp};

const START_TIME_HELP: &str =
    "Webinar start time. We support two formats for `start_time` - local time and GMT.\n\n\
     To set time as GMT the format should be `yyyy-MM-ddTHH:mm:ssZ`.\n\n\
     To set time using a specific timezone, use `yyyy-MM-ddTHH:mm:ss` format and specify the \
     timezone [ID](https://marketplace.zoom.us/docs/api-reference/other-references/abbreviation-lists#timezones) \
     in the `timezone` field OR leave it blank and the timezone set on your Zoom account will \
     be used. You can also set the time as UTC as the timezone field.\n\n\
     The `start_time` should only be used for scheduled and / or recurring webinars with \
     fixed time.";

const TIMEZONE_HELP: &str =
    "Time zone to format start_time. For example, \"America/Los_Angeles\". For scheduled \
     meetings only. Please reference our [time zone](https://marketplace.zoom.us/docs/api-reference/other-references/abbreviation-lists#timezones) \
     list for supported time zones and their formats.";

const PASSWORD_HELP: &str =
    "Webinar passcode. Passcode may only contain the following characters: \
     [a-z A-Z 0-9 @ - _ * !]. Max of 10 characters.\n\n\
     If \"Require a passcode when scheduling new meetings\" setting has been **enabled** \
     **and** [locked](https://support.zoom.us/hc/en-us/articles/115005269866-Using-Tiered-Settings#locked) \
     for the user, the passcode field will be autogenerated for the Webinar in the response \
     even if it is not provided in the API request.";

const RECURRENCE_HELP: &str = r#"Recurrence object. Use this object only for a webinar of type 9 i.e., a recurring webinar with fixed time. See https://marketplace.zoom.us/docs/api-reference/zoom-api/webinars/webinarcreate. JSON Example:
{
  "type": "1-Daily/2-Weekly/3-Monthly",
  "repeat_interval": "Define the interval at which the webinar should recur. For instance, if you would like to schedule a Webinar that recurs every two months, you must set the value of this field as 2 and the value of the type parameter as 3",
  "weekly_days": "1-Sunday/2-Monday/3-Tuesday/4-Wednesday/5-Thursday/6-Friday/7-Saturday",
  "monthly_day": "The value range is from 1 to 31",
  "monthly_week": "-1-Last week/1-First week/2-Second week/3-Third week/4-Fourth week",
  "monthly_week_day": "1-Sunday/2-Monday/3-Tuesday/4-Wednesday/5-Thursday/6-Friday/7-Saturday",
  "end_times": "Select how many times the webinar will recur before it is canceled. (Cannot be used with "end_date_time".)",
  "end_date_time": "Select a date when the webinar will recur before it is canceled. Should be in UTC time, such as 2017-11-25T12:00:00Z. (Cannot be used with "end_times".)"
}"#;

/// The `zoom-update-webinar` action.
///
/// The full form is declared and rendered; the run routine is not
/// wired to the API yet and refuses every invocation with a distinct
/// error rather than pretending the update happened.
pub struct UpdateWebinar {
    /// Client and auth for the pending API wiring.
    #[allow(dead_code)]
    app: Arc<ZoomApp>,
    descriptor: Descriptor,
}

impl UpdateWebinar {
    /// Action key.
    pub const KEY: &'static str = "zoom-update-webinar";

    /// Build the action against a shared app.
    #[must_use]
    pub fn new(app: Arc<ZoomApp>) -> Self {
        let descriptor = Descriptor::new(
            Self::KEY,
            "Update webinar details",
            "Update the details of a webinar",
        )
        .with_app(SLUG)
        .with_props(props());

        Self { app, descriptor }
    }
}

#[async_trait]
impl Action for UpdateWebinar {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    async fn run(&self, _input: ParamValues) -> Result<Value, ActionError> {
        // TODO: map the declared fields onto the Zoom payload and
        // submit through ZoomClient::update_webinar.
        tracing::warn!(action = %Self::KEY, "invoked an action with no run logic");
        Err(ActionError::not_implemented(Self::KEY))
    }
}

fn props() -> PropSchema {
    PropSchema::new()
        .with_prop(PropDef::Integer(
            IntegerProp::new("webinarId", "WebinarId").with_description("The webinar ID"),
        ))
        .with_prop(PropDef::Text(
            TextProp::new("occurrenceIds", "Occurrence ids")
                .with_description("Occurrence ID")
                .optional(),
        ))
        .with_prop(PropDef::Text(
            TextProp::new("topic", "Topic")
                .with_description("Webinar topic.")
                .optional(),
        ))
        .with_prop(PropDef::Select(
            SelectProp::new("type", "Type")
                .with_description(
                    "Webinar Types: 5 - Webinar. 6 - Recurring webinar with no fixed time. \
                     9 - Recurring webinar with a fixed time.",
                )
                .optional()
                .with_option(SelectOption::new("5 - Webinar", 5))
                .with_option(SelectOption::new("6 - Recurring webinar with no fixed time", 6))
                .with_option(SelectOption::new("9 - Recurring webinar with a fixed time", 9)),
        ))
        .with_prop(PropDef::Text(
            TextProp::new("startTime", "Start time")
                .with_description(START_TIME_HELP)
                .optional(),
        ))
        .with_prop(PropDef::Integer(
            IntegerProp::new("duration", "Duration")
                .with_description("Webinar duration (minutes). Used for scheduled webinar only.")
                .optional(),
        ))
        .with_prop(PropDef::Text(
            TextProp::new("timezone", "Timezone")
                .with_description(TIMEZONE_HELP)
                .optional(),
        ))
        .with_prop(PropDef::Text(
            TextProp::new("password", "Password")
                .with_description(PASSWORD_HELP)
                .optional(),
        ))
        .with_prop(PropDef::Text(
            TextProp::new("agenda", "Agenda")
                .with_description("Webinar description.")
                .optional(),
        ))
        .with_prop(PropDef::List(
            ListProp::new("trackingFields", "Tracking fields")
                .with_description(
                    "Tracking fields. JSON Example: \
                     '[{\"field\": \"Tracking fields type\", \"value\": \"Tracking fields value\"}]'",
                )
                .optional(),
        ))
        .with_prop(PropDef::Object(
            ObjectProp::new("recurrence", "Recurrence")
                .with_description(RECURRENCE_HELP)
                .optional(),
        ))
        .with_prop(PropDef::Object(
            ObjectProp::new("settings", "Settings")
                .with_description(
                    "Create Webinar settings. See documentation for more information: \
                     https://marketplace.zoom.us/docs/api-reference/zoom-api/webinars/webinarupdate",
                )
                .optional(),
        ))
}
