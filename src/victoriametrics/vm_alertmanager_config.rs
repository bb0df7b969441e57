// This file is part of the terraform-provider-k8s project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use tf_provider::Value;

use crate::manifest::ManifestKind;
use crate::schema::{StringMap, Validator};

use super::common::{HttpConfig, SecretKeySelector};
use super::API_VERSION;

/// `VMAlertmanagerConfig` holds a partial Alertmanager configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VmAlertmanagerConfig;

impl ManifestKind for VmAlertmanagerConfig {
    const TYPE_NAME: &'static str =
        "operator_victoriametrics_com_vm_alertmanager_config_v1beta1_manifest";
    const API_VERSION: &'static str = API_VERSION;
    const KIND: &'static str = "VMAlertmanagerConfig";
    const DESCRIPTION: &'static str =
        "VMAlertmanagerConfig is the Schema for the vmalertmanagerconfigs API.";
    const WITH_ID: bool = true;

    type Spec = VmAlertmanagerConfigSpec;
}

manifest_object! {
    /// Routing tree entry
    pub struct Route {
        /// Name of the receiver for this route.
        receiver: Value<String> => "receiver", required, [Validator::MinLength(1)];
        /// Labels used to group the alerts.
        group_by: Value<Vec<Value<String>>> => "group_by", optional;
        /// How long to wait before sending the first notification of a group.
        group_wait: Value<String> => "group_wait", optional, [Validator::Duration];
        /// How long to wait before notifying about new alerts of a group.
        group_interval: Value<String> => "group_interval", optional, [Validator::Duration];
        /// How long to wait before resending a notification.
        repeat_interval: Value<String> => "repeat_interval", optional, [Validator::Duration];
        /// Matchers the alerts must fulfill to match the route.
        matchers: Value<Vec<Value<String>>> => "matchers", optional;
        /// Keep matching the following sibling routes.
        r#continue: Value<bool> => "continue", optional;
        /// Child routes, each one given as an opaque YAML or JSON document.
        routes: Value<Vec<Value<String>>> => "routes", optional;
        /// Time intervals during which the route is muted.
        mute_time_intervals: Value<Vec<Value<String>>> => "mute_time_intervals", optional;
        /// Time intervals during which the route is active.
        active_time_intervals: Value<Vec<Value<String>>> => "active_time_intervals", optional;
    }
}

manifest_object! {
    /// Rule muting alerts while other alerts are firing
    pub struct InhibitRule {
        /// Matchers the muted alerts must fulfill.
        target_matchers: Value<Vec<Value<String>>> => "target_matchers", optional;
        /// Matchers the inhibiting alerts must fulfill.
        source_matchers: Value<Vec<Value<String>>> => "source_matchers", optional;
        /// Labels that must have an equal value in the source and target alerts.
        equal: Value<Vec<Value<String>>> => "equal", optional;
    }
}

manifest_object! {
    /// Time range within a day
    pub struct TimeRange {
        /// Start time in 24h format, e.g. `09:00`.
        start_time: Value<String> => "start_time", required;
        /// End time in 24h format, e.g. `17:00`.
        end_time: Value<String> => "end_time", required;
    }
}

manifest_object! {
    /// Recurring period of time
    pub struct TimeInterval {
        /// Time ranges within a day.
        times: Value<Vec<Value<TimeRange>>> => "times", optional;
        /// Days of the week, e.g. `monday:friday`.
        weekdays: Value<Vec<Value<String>>> => "weekdays", optional;
        /// Days of the month, e.g. `1:5`.
        days_of_month: Value<Vec<Value<String>>> => "days_of_month", optional;
        /// Months of the year, e.g. `january:march`.
        months: Value<Vec<Value<String>>> => "months", optional;
        /// Years, e.g. `2024:2026`.
        years: Value<Vec<Value<String>>> => "years", optional;
        /// Location used to interpret the times, `UTC` by default.
        location: Value<String> => "location", optional;
    }
}

manifest_object! {
    /// Named list of time intervals
    pub struct TimeIntervals {
        /// Name of the time interval, referenced by the routes.
        name: Value<String> => "name", required, [Validator::MinLength(1)];
        /// Periods composing the time interval.
        time_intervals: Value<Vec<Value<TimeInterval>>> => "time_intervals", required, [Validator::MinItems(1)];
    }
}

manifest_object! {
    /// Notifications sent by email
    pub struct EmailConfig {
        /// Notify about resolved alerts.
        send_resolved: Value<bool> => "send_resolved", optional;
        /// Address to send notifications to.
        to: Value<String> => "to", optional;
        /// Sender address.
        from: Value<String> => "from", optional;
        /// SMTP host through which emails are sent, in the `host:port` form.
        smarthost: Value<String> => "smarthost", optional;
        /// Hostname used to identify to the SMTP server.
        hello: Value<String> => "hello", optional;
        /// SMTP authentication username.
        auth_username: Value<String> => "auth_username", optional;
        /// Secret key holding the SMTP authentication password.
        auth_password: Value<SecretKeySelector> => "auth_password", optional;
        /// SMTP authentication identity.
        auth_identity: Value<String> => "auth_identity", optional;
        /// Secret key holding the SMTP authentication secret.
        auth_secret: Value<SecretKeySelector> => "auth_secret", optional;
        /// Additional email headers.
        headers: Value<StringMap> => "headers", optional;
        /// HTML body of the email.
        html: Value<String> => "html", optional;
        /// Text body of the email.
        text: Value<String> => "text", optional;
        /// Require STARTTLS.
        require_tls: Value<bool> => "require_tls", optional;
    }
}

manifest_object! {
    /// Notifications sent to PagerDuty
    pub struct PagerdutyConfig {
        /// Notify about resolved alerts.
        send_resolved: Value<bool> => "send_resolved", optional;
        /// Secret key holding the PagerDuty integration key for the Events API v2.
        routing_key: Value<SecretKeySelector> => "routing_key", optional;
        /// Secret key holding the PagerDuty integration key for the Prometheus integration.
        service_key: Value<SecretKeySelector> => "service_key", optional;
        /// URL to send requests to.
        url: Value<String> => "url", optional;
        /// Client identification.
        client: Value<String> => "client", optional;
        /// Backlink to the sender of the notification.
        client_url: Value<String> => "client_url", optional;
        /// Description of the incident.
        description: Value<String> => "description", optional;
        /// Severity of the incident.
        severity: Value<String> => "severity", optional;
        /// Arbitrary key/value pairs providing further detail about the incident.
        details: Value<StringMap> => "details", optional;
        /// HTTP client configuration.
        http_config: Value<HttpConfig> => "http_config", optional;
    }
}

manifest_object! {
    /// Field of a Slack attachment
    pub struct SlackField {
        /// Title of the field.
        title: Value<String> => "title", required, [Validator::MinLength(1)];
        /// Value of the field.
        value: Value<String> => "value", required, [Validator::MinLength(1)];
        /// Display the field next to other short fields.
        short: Value<bool> => "short", optional;
    }
}

manifest_object! {
    /// Notifications sent to Slack
    pub struct SlackConfig {
        /// Notify about resolved alerts.
        send_resolved: Value<bool> => "send_resolved", optional;
        /// Secret key holding the Slack webhook URL.
        api_url: Value<SecretKeySelector> => "api_url", optional;
        /// Channel or user to send notifications to.
        channel: Value<String> => "channel", optional;
        /// Name of the sender.
        username: Value<String> => "username", optional;
        /// Color of the attachment.
        color: Value<String> => "color", optional;
        /// Title of the message.
        title: Value<String> => "title", optional;
        /// Link of the title.
        title_link: Value<String> => "title_link", optional;
        /// Pretext of the message.
        pretext: Value<String> => "pretext", optional;
        /// Text of the message.
        text: Value<String> => "text", optional;
        /// Fields of the attachment.
        fields: Value<Vec<Value<SlackField>>> => "fields", optional;
        /// Footer of the message.
        footer: Value<String> => "footer", optional;
        /// Fallback text of the message.
        fallback: Value<String> => "fallback", optional;
        /// Emoji used as the sender icon.
        icon_emoji: Value<String> => "icon_emoji", optional;
        /// URL of the sender icon.
        icon_url: Value<String> => "icon_url", optional;
        /// Find and link channel names and usernames.
        link_names: Value<bool> => "link_names", optional;
        /// HTTP client configuration.
        http_config: Value<HttpConfig> => "http_config", optional;
    }
}

manifest_object! {
    /// Notifications sent to a generic webhook
    pub struct WebhookConfig {
        /// Notify about resolved alerts.
        send_resolved: Value<bool> => "send_resolved", optional;
        /// URL to send POST requests to, mutually exclusive with `url_secret`.
        url: Value<String> => "url", optional;
        /// Secret key holding the URL to send POST requests to.
        url_secret: Value<SecretKeySelector> => "url_secret", optional;
        /// Maximum number of alerts in a single message, `0` means all of them.
        max_alerts: Value<i64> => "max_alerts", optional, [Validator::AtLeast(0)];
        /// HTTP client configuration.
        http_config: Value<HttpConfig> => "http_config", optional;
    }
}

manifest_object! {
    /// Notifications sent through a Telegram bot
    pub struct TelegramConfig {
        /// Notify about resolved alerts.
        send_resolved: Value<bool> => "send_resolved", optional;
        /// Telegram API URL, `https://api.telegram.org` by default.
        api_url: Value<String> => "api_url", optional;
        /// Secret key holding the bot token.
        bot_token: Value<SecretKeySelector> => "bot_token", required;
        /// Identifier of the chat receiving the messages.
        chat_id: Value<i64> => "chat_id", required;
        /// Message template.
        message: Value<String> => "message", optional;
        /// Send the messages silently.
        disable_notifications: Value<bool> => "disable_notifications", optional;
        /// Parse mode of the messages: `MarkdownV2`, `Markdown` or `HTML`.
        parse_mode: Value<String> => "parse_mode", optional, [Validator::OneOf(&["MarkdownV2", "Markdown", "HTML"])];
        /// HTTP client configuration.
        http_config: Value<HttpConfig> => "http_config", optional;
    }
}

manifest_object! {
    /// Notifications sent to OpsGenie
    pub struct OpsGenieConfig {
        /// Notify about resolved alerts.
        send_resolved: Value<bool> => "send_resolved", optional;
        /// Secret key holding the OpsGenie API key.
        api_key: Value<SecretKeySelector> => "apiKey", optional;
        /// URL to send requests to.
        api_url: Value<String> => "apiURL", optional;
        /// Alert text limited to 130 characters.
        message: Value<String> => "message", optional;
        /// Description of the incident.
        description: Value<String> => "description", optional;
        /// Backlink to the sender of the notification.
        source: Value<String> => "source", optional;
        /// Comma separated list of tags attached to the notifications.
        tags: Value<String> => "tags", optional;
        /// Additional alert note.
        note: Value<String> => "note", optional;
        /// Priority level of the alert: `P1` to `P5`.
        priority: Value<String> => "priority", optional, [Validator::OneOf(&["P1", "P2", "P3", "P4", "P5"])];
        /// Arbitrary key/value pairs providing further detail about the incident.
        details: Value<StringMap> => "details", optional;
        /// HTTP client configuration.
        http_config: Value<HttpConfig> => "http_config", optional;
    }
}

manifest_object! {
    /// Named set of notification integrations
    pub struct Receiver {
        /// Name of the receiver, referenced by the routes.
        name: Value<String> => "name", required, [Validator::MinLength(1)];
        /// Email integrations.
        email_configs: Value<Vec<Value<EmailConfig>>> => "email_configs", optional;
        /// PagerDuty integrations.
        pagerduty_configs: Value<Vec<Value<PagerdutyConfig>>> => "pagerduty_configs", optional;
        /// Slack integrations.
        slack_configs: Value<Vec<Value<SlackConfig>>> => "slack_configs", optional;
        /// Webhook integrations.
        webhook_configs: Value<Vec<Value<WebhookConfig>>> => "webhook_configs", optional;
        /// Telegram integrations.
        telegram_configs: Value<Vec<Value<TelegramConfig>>> => "telegram_configs", optional;
        /// OpsGenie integrations.
        opsgenie_configs: Value<Vec<Value<OpsGenieConfig>>> => "opsgenie_configs", optional;
    }
}

manifest_object! {
    /// Desired state of a VMAlertmanagerConfig
    pub struct VmAlertmanagerConfigSpec {
        /// Root of the routing tree.
        route: Value<Route> => "route", optional;
        /// Receivers referenced by the routes.
        receivers: Value<Vec<Value<Receiver>>> => "receivers", optional;
        /// Rules muting alerts while other alerts are firing.
        inhibit_rules: Value<Vec<Value<InhibitRule>>> => "inhibit_rules", optional;
        /// Named time intervals referenced by the routes.
        time_intervals: Value<Vec<Value<TimeIntervals>>> => "time_intervals", optional;
        /// Deprecated alias of `time_intervals`.
        mute_time_intervals: Value<Vec<Value<TimeIntervals>>> => "mute_time_intervals", optional;
    }
}
