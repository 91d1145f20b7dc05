// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The messages exchanged with the Compute Engine firewall policies service.
//!
//! The service uses the `camelCase` JSON encoding of the Compute discovery
//! document. `uint64` fields are encoded as decimal strings on the wire.

/// Represents a Firewall Policy resource.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FirewallPolicy {
    /// A list of associations that belong to this firewall policy.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<crate::model::FirewallPolicyAssociation>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,

    /// An optional description of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// User-provided name of the organization firewall policy. The name should
    /// be unique in the organization in which the firewall policy is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Specifies a fingerprint for this resource, which is essentially a hash
    /// of the metadata's contents and used for optimistic locking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// The unique identifier for the resource. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub id: Option<u64>,

    /// Type of the resource. Always `compute#firewallPolicy` for firewall
    /// policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Name of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The parent of the firewall policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Total count of all firewall policy rule tuples. A firewall policy can
    /// not exceed a set number of tuples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_tuple_count: Option<i32>,

    /// A list of rules that belong to this policy.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<crate::model::FirewallPolicyRule>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// Server-defined URL for this resource with the resource id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link_with_id: Option<String>,

    /// User-provided name of the organization firewall policy. This field is
    /// not applicable to network firewall policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

impl FirewallPolicy {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [associations][Self::associations].
    pub fn set_associations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::FirewallPolicyAssociation>,
    {
        self.associations = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [creation_timestamp][Self::creation_timestamp].
    pub fn set_creation_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.creation_timestamp = Some(v.into());
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [fingerprint][Self::fingerprint].
    pub fn set_fingerprint<T: Into<String>>(mut self, v: T) -> Self {
        self.fingerprint = Some(v.into());
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: Into<u64>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [kind][Self::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [parent][Self::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [rule_tuple_count][Self::rule_tuple_count].
    pub fn set_rule_tuple_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.rule_tuple_count = Some(v.into());
        self
    }

    /// Sets the value of [rules][Self::rules].
    pub fn set_rules<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::FirewallPolicyRule>,
    {
        self.rules = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [self_link][Self::self_link].
    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    /// Sets the value of [self_link_with_id][Self::self_link_with_id].
    pub fn set_self_link_with_id<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link_with_id = Some(v.into());
        self
    }

    /// Sets the value of [short_name][Self::short_name].
    pub fn set_short_name<T: Into<String>>(mut self, v: T) -> Self {
        self.short_name = Some(v.into());
        self
    }
}

/// An association between a firewall policy and an attachment target.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FirewallPolicyAssociation {
    /// The target that the firewall policy is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_target: Option<String>,

    /// Deprecated, please use short name instead. The display name of the
    /// firewall policy of the association.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The firewall policy ID of the association.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_policy_id: Option<String>,

    /// The name for an association.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The short name of the firewall policy of the association.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

impl FirewallPolicyAssociation {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [attachment_target][Self::attachment_target].
    pub fn set_attachment_target<T: Into<String>>(mut self, v: T) -> Self {
        self.attachment_target = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Self::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [firewall_policy_id][Self::firewall_policy_id].
    pub fn set_firewall_policy_id<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy_id = Some(v.into());
        self
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [short_name][Self::short_name].
    pub fn set_short_name<T: Into<String>>(mut self, v: T) -> Self {
        self.short_name = Some(v.into());
        self
    }
}

/// Represents a rule that describes one or more match conditions along with
/// the action to be taken when traffic matches this condition (allow or deny).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FirewallPolicyRule {
    /// The Action to perform when the client connection triggers the rule.
    /// Can currently be either "allow" or "deny()" where valid values for
    /// status are 403, 404, and 502.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// An optional description for this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The direction in which this rule applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<crate::model::firewall_policy_rule::Direction>,

    /// Denotes whether the firewall policy rule is disabled. When set to true,
    /// the firewall policy rule is not enforced and traffic behaves as if it
    /// did not exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Denotes whether to enable logging for a particular rule. If logging is
    /// enabled, logs will be exported to the configured export destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_logging: Option<bool>,

    /// Type of the resource. Always `compute#firewallPolicyRule` for firewall
    /// policy rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// A match condition that incoming traffic is evaluated against. If it
    /// evaluates to true, the corresponding 'action' is enforced.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_: Option<crate::model::FirewallPolicyRuleMatcher>,

    /// An integer indicating the priority of a rule in the list. The priority
    /// must be a positive value between 0 and 2147483647. Rules are evaluated
    /// from highest to lowest priority where 0 is the highest priority and
    /// 2147483647 is the lowest priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// Calculation of the complexity of a single firewall policy rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_tuple_count: Option<i32>,

    /// A list of network resource URLs to which this rule applies. This field
    /// allows you to control which network's VMs get this rule. If this field
    /// is left blank, all VMs within the organization will receive the rule.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_resources: Vec<String>,

    /// A list of service accounts indicating the sets of instances that are
    /// applied with this rule.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_service_accounts: Vec<String>,
}

impl FirewallPolicyRule {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [action][Self::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = Some(v.into());
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [direction][Self::direction].
    pub fn set_direction<T: Into<crate::model::firewall_policy_rule::Direction>>(
        mut self,
        v: T,
    ) -> Self {
        self.direction = Some(v.into());
        self
    }

    /// Sets the value of [disabled][Self::disabled].
    pub fn set_disabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.disabled = Some(v.into());
        self
    }

    /// Sets the value of [enable_logging][Self::enable_logging].
    pub fn set_enable_logging<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_logging = Some(v.into());
        self
    }

    /// Sets the value of [kind][Self::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [match_][Self::match_].
    pub fn set_match<T: Into<crate::model::FirewallPolicyRuleMatcher>>(mut self, v: T) -> Self {
        self.match_ = Some(v.into());
        self
    }

    /// Sets the value of [priority][Self::priority].
    pub fn set_priority<T: Into<i32>>(mut self, v: T) -> Self {
        self.priority = Some(v.into());
        self
    }

    /// Sets the value of [rule_tuple_count][Self::rule_tuple_count].
    pub fn set_rule_tuple_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.rule_tuple_count = Some(v.into());
        self
    }

    /// Sets the value of [target_resources][Self::target_resources].
    pub fn set_target_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.target_resources = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [target_service_accounts][Self::target_service_accounts].
    pub fn set_target_service_accounts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.target_service_accounts = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// Defines additional types related to [FirewallPolicyRule].
pub mod firewall_policy_rule {
    /// The direction in which a rule applies.
    #[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Direction {
        /// The rule applies to incoming traffic.
        Ingress,
        /// The rule applies to outgoing traffic.
        Egress,
    }
}

/// Represents a match condition that incoming traffic is evaluated against.
/// Exactly one field must be specified.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FirewallPolicyRuleMatcher {
    /// CIDR IP address range. Maximum number of destination CIDR IP ranges
    /// allowed is 256.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dest_ip_ranges: Vec<String>,

    /// Pairs of IP protocols and ports that the rule should match.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layer4_configs: Vec<crate::model::FirewallPolicyRuleMatcherLayer4Config>,

    /// CIDR IP address range. Maximum number of source CIDR IP ranges allowed
    /// is 256.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub src_ip_ranges: Vec<String>,
}

impl FirewallPolicyRuleMatcher {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [dest_ip_ranges][Self::dest_ip_ranges].
    pub fn set_dest_ip_ranges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dest_ip_ranges = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [layer4_configs][Self::layer4_configs].
    pub fn set_layer4_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::FirewallPolicyRuleMatcherLayer4Config>,
    {
        self.layer4_configs = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [src_ip_ranges][Self::src_ip_ranges].
    pub fn set_src_ip_ranges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.src_ip_ranges = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// A pair of IP protocol and ports.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FirewallPolicyRuleMatcherLayer4Config {
    /// The IP protocol to which this rule applies. The protocol type is
    /// required when creating a firewall rule. This value can either be one of
    /// the following well known protocol strings (tcp, udp, icmp, esp, ah,
    /// ipip, sctp), or the IP protocol number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<String>,

    /// An optional list of ports to which this rule applies. This field is
    /// only applicable for UDP or TCP protocol. Each entry must be either an
    /// integer or a range. If not specified, this rule applies to connections
    /// through any port.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
}

impl FirewallPolicyRuleMatcherLayer4Config {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [ip_protocol][Self::ip_protocol].
    pub fn set_ip_protocol<T: Into<String>>(mut self, v: T) -> Self {
        self.ip_protocol = Some(v.into());
        self
    }

    /// Sets the value of [ports][Self::ports].
    pub fn set_ports<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ports = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// The response to a list request for firewall policies.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FirewallPolicyList {
    /// Unique identifier for the resource; defined by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// A list of FirewallPolicy resources.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<crate::model::FirewallPolicy>,

    /// Type of resource. Always `compute#firewallPolicyList` for lists of
    /// firewall policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// This token allows you to get the next page of results for list
    /// requests. If the number of results is larger than `maxResults`, use the
    /// `nextPageToken` as a value for the query parameter `pageToken` in the
    /// next list request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl FirewallPolicyList {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [items][Self::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::FirewallPolicy>,
    {
        self.items = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [kind][Self::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [next_page_token][Self::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

impl gax::paginator::internal::PageableResponse for FirewallPolicyList {
    type PageItem = crate::model::FirewallPolicy;

    fn items(self) -> Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The response to a list request for firewall policy associations.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FirewallPoliciesListAssociationsResponse {
    /// A list of associations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<crate::model::FirewallPolicyAssociation>,

    /// Type of the resource. Always
    /// `compute#FirewallPoliciesListAssociations` for lists of firewall policy
    /// associations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl FirewallPoliciesListAssociationsResponse {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [associations][Self::associations].
    pub fn set_associations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::FirewallPolicyAssociation>,
    {
        self.associations = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [kind][Self::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }
}

/// Represents an Operation resource.
///
/// Operations are returned by every mutation of a firewall policy. Inspect
/// the terminal state with [to_result][Operation::to_result].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The value of `requestId` if you provided it in the request. Not present
    /// otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_operation_id: Option<String>,

    /// Creation timestamp in RFC3339 text format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,

    /// A textual description of the operation, which is set when the operation
    /// is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The time that this operation was completed. This value is in RFC3339
    /// text format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// If errors are generated during processing of the operation, this field
    /// will be populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<crate::model::operation::Error>,

    /// If the operation fails, this field contains the HTTP error message that
    /// was returned, such as `NOT FOUND`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error_message: Option<String>,

    /// If the operation fails, this field contains the HTTP error status code
    /// that was returned. For example, a `404` means the resource was not
    /// found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error_status_code: Option<i32>,

    /// The unique identifier for the operation. This identifier is defined by
    /// the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub id: Option<u64>,

    /// The time that this operation was requested. This value is in RFC3339
    /// text format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_time: Option<String>,

    /// Type of the resource. Always `compute#operation` for Operation
    /// resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Name of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The type of operation, such as `insert`, `update`, or `delete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,

    /// An optional progress indicator that ranges from 0 to 100. There is no
    /// requirement that this be linear or support any granularity of
    /// operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,

    /// The URL of the region where the operation resides. Only applicable when
    /// performing regional operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// The time that this operation was started by the server. This value is
    /// in RFC3339 text format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// The status of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<crate::model::operation::Status>,

    /// An optional textual description of the current status of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,

    /// The unique target ID, which identifies a specific incarnation of the
    /// target resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub target_id: Option<u64>,

    /// The URL of the resource that the operation modifies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_link: Option<String>,

    /// User who requested the operation, for example: `user@example.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// The URL of the zone where the operation resides. Only applicable when
    /// performing per-zone operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

impl Operation {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [client_operation_id][Self::client_operation_id].
    pub fn set_client_operation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.client_operation_id = Some(v.into());
        self
    }

    /// Sets the value of [creation_timestamp][Self::creation_timestamp].
    pub fn set_creation_timestamp<T: Into<String>>(mut self, v: T) -> Self {
        self.creation_timestamp = Some(v.into());
        self
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [end_time][Self::end_time].
    pub fn set_end_time<T: Into<String>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [error][Self::error].
    pub fn set_error<T: Into<crate::model::operation::Error>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }

    /// Sets the value of [http_error_message][Self::http_error_message].
    pub fn set_http_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.http_error_message = Some(v.into());
        self
    }

    /// Sets the value of [http_error_status_code][Self::http_error_status_code].
    pub fn set_http_error_status_code<T: Into<i32>>(mut self, v: T) -> Self {
        self.http_error_status_code = Some(v.into());
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: Into<u64>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [insert_time][Self::insert_time].
    pub fn set_insert_time<T: Into<String>>(mut self, v: T) -> Self {
        self.insert_time = Some(v.into());
        self
    }

    /// Sets the value of [kind][Self::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [operation_type][Self::operation_type].
    pub fn set_operation_type<T: Into<String>>(mut self, v: T) -> Self {
        self.operation_type = Some(v.into());
        self
    }

    /// Sets the value of [progress][Self::progress].
    pub fn set_progress<T: Into<i32>>(mut self, v: T) -> Self {
        self.progress = Some(v.into());
        self
    }

    /// Sets the value of [region][Self::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets the value of [self_link][Self::self_link].
    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    /// Sets the value of [start_time][Self::start_time].
    pub fn set_start_time<T: Into<String>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets the value of [status][Self::status].
    pub fn set_status<T: Into<crate::model::operation::Status>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [status_message][Self::status_message].
    pub fn set_status_message<T: Into<String>>(mut self, v: T) -> Self {
        self.status_message = Some(v.into());
        self
    }

    /// Sets the value of [target_id][Self::target_id].
    pub fn set_target_id<T: Into<u64>>(mut self, v: T) -> Self {
        self.target_id = Some(v.into());
        self
    }

    /// Sets the value of [target_link][Self::target_link].
    pub fn set_target_link<T: Into<String>>(mut self, v: T) -> Self {
        self.target_link = Some(v.into());
        self
    }

    /// Sets the value of [user][Self::user].
    pub fn set_user<T: Into<String>>(mut self, v: T) -> Self {
        self.user = Some(v.into());
        self
    }

    /// Sets the value of [zone][Self::zone].
    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }
}

/// Defines additional types related to [Operation].
pub mod operation {
    /// The status of an operation.
    #[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Status {
        /// The operation is waiting to be processed.
        Pending,
        /// The operation is being processed.
        Running,
        /// The operation has completed. Completion does not imply success,
        /// check the error fields.
        Done,
    }

    /// The errors generated while processing an operation.
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Error {
        /// The array of errors encountered while processing this operation.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub errors: Vec<crate::model::operation::error::Errors>,
    }

    impl Error {
        /// Create a new instance.
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [errors][Self::errors].
        pub fn set_errors<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::operation::error::Errors>,
        {
            self.errors = v.into_iter().map(|v| v.into()).collect();
            self
        }
    }

    /// Defines additional types related to [Error].
    pub mod error {
        /// A single error encountered while processing an operation.
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Errors {
            /// The error type identifier for this error.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub code: Option<String>,

            /// Indicates the field in the request that caused the error. This
            /// property is optional.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub location: Option<String>,

            /// An optional, human-readable error message.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub message: Option<String>,
        }

        impl Errors {
            /// Create a new instance.
            pub fn new() -> Self {
                Self::default()
            }

            /// Sets the value of [code][Self::code].
            pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
                self.code = Some(v.into());
                self
            }

            /// Sets the value of [location][Self::location].
            pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
                self.location = Some(v.into());
                self
            }

            /// Sets the value of [message][Self::message].
            pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
                self.message = Some(v.into());
                self
            }
        }
    }
}

/// An Identity and Access Management (IAM) policy, which specifies access
/// controls for Google Cloud resources.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Policy {
    /// Specifies cloud audit logging configuration for this policy.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audit_configs: Vec<crate::model::AuditConfig>,

    /// Associates a list of `members`, or principals, with a `role`.
    /// Optionally, may specify a `condition` that determines how and when the
    /// `bindings` are applied. Each of the `bindings` must contain at least
    /// one principal.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<crate::model::Binding>,

    /// `etag` is used for optimistic concurrency control as a way to help
    /// prevent simultaneous updates of a policy from overwriting each other.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_owned: Option<bool>,

    /// Specifies the format of the policy. Valid values are `0`, `1`, and
    /// `3`. Requests that specify an invalid value are rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

impl Policy {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [audit_configs][Self::audit_configs].
    pub fn set_audit_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::AuditConfig>,
    {
        self.audit_configs = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [bindings][Self::bindings].
    pub fn set_bindings<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Binding>,
    {
        self.bindings = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [etag][Self::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [iam_owned][Self::iam_owned].
    pub fn set_iam_owned<T: Into<bool>>(mut self, v: T) -> Self {
        self.iam_owned = Some(v.into());
        self
    }

    /// Sets the value of [version][Self::version].
    pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }
}

/// Specifies the audit configuration for a service.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AuditConfig {
    /// The configuration for logging of each type of permission.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audit_log_configs: Vec<crate::model::AuditLogConfig>,

    /// Specifies a service that will be enabled for audit logging. For
    /// example, `storage.googleapis.com`, `cloudsql.googleapis.com`.
    /// `allServices` is a special value that covers all services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl AuditConfig {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [audit_log_configs][Self::audit_log_configs].
    pub fn set_audit_log_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::AuditLogConfig>,
    {
        self.audit_log_configs = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [service][Self::service].
    pub fn set_service<T: Into<String>>(mut self, v: T) -> Self {
        self.service = Some(v.into());
        self
    }
}

/// Provides the configuration for logging a type of permissions.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AuditLogConfig {
    /// Specifies the identities that do not cause logging for this type of
    /// permission.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exempted_members: Vec<String>,

    /// The log type that this config enables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_type: Option<String>,
}

impl AuditLogConfig {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [exempted_members][Self::exempted_members].
    pub fn set_exempted_members<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.exempted_members = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [log_type][Self::log_type].
    pub fn set_log_type<T: Into<String>>(mut self, v: T) -> Self {
        self.log_type = Some(v.into());
        self
    }
}

/// Associates `members`, or principals, with a `role`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Binding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_id: Option<String>,

    /// The condition that is associated with this binding. If the condition
    /// evaluates to `true`, then this binding applies to the current request.
    /// If the condition evaluates to `false`, then this binding does not apply
    /// to the current request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<crate::model::Expr>,

    /// Specifies the principals requesting access for a Google Cloud resource.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,

    /// Role that is assigned to the list of `members`, or principals. For
    /// example, `roles/viewer`, `roles/editor`, or `roles/owner`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Binding {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [binding_id][Self::binding_id].
    pub fn set_binding_id<T: Into<String>>(mut self, v: T) -> Self {
        self.binding_id = Some(v.into());
        self
    }

    /// Sets the value of [condition][Self::condition].
    pub fn set_condition<T: Into<crate::model::Expr>>(mut self, v: T) -> Self {
        self.condition = Some(v.into());
        self
    }

    /// Sets the value of [members][Self::members].
    pub fn set_members<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.members = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [role][Self::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }
}

/// Represents a textual expression in the Common Expression Language (CEL)
/// syntax.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Expr {
    /// Optional. Description of the expression. This is a longer text which
    /// describes the expression, e.g. when hovered over it in a UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Textual representation of an expression in Common Expression Language
    /// syntax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Optional. String indicating the location of the expression for error
    /// reporting, e.g. a file name and a position in the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Optional. Title for the expression, i.e. a short string describing its
    /// purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Expr {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [description][Self::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [expression][Self::expression].
    pub fn set_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.expression = Some(v.into());
        self
    }

    /// Sets the value of [location][Self::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [title][Self::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }
}

/// The request body for setting an organization-level IAM policy.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GlobalOrganizationSetPolicyRequest {
    /// Flatten Policy to create a backward compatible wire-format. Deprecated.
    /// Use 'policy' to specify bindings.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<crate::model::Binding>,

    /// Flatten Policy to create a backward compatible wire-format. Deprecated.
    /// Use 'policy' to specify the etag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// REQUIRED: The complete policy to be applied to the 'resource'. The size
    /// of the policy is limited to a few 10s of KB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<crate::model::Policy>,
}

impl GlobalOrganizationSetPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bindings][Self::bindings].
    pub fn set_bindings<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Binding>,
    {
        self.bindings = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [etag][Self::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [policy][Self::policy].
    pub fn set_policy<T: Into<crate::model::Policy>>(mut self, v: T) -> Self {
        self.policy = Some(v.into());
        self
    }
}

/// A request to test the permissions a caller holds on a resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestPermissionsRequest {
    /// The set of permissions to check for the 'resource'. Permissions with
    /// wildcards (such as `*` or `storage.*`) are not allowed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
}

impl TestPermissionsRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [permissions][Self::permissions].
    pub fn set_permissions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.permissions = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// The subset of requested permissions the caller holds.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestPermissionsResponse {
    /// A subset of `TestPermissionsRequest.permissions` that the caller is
    /// allowed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
}

impl TestPermissionsResponse {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [permissions][Self::permissions].
    pub fn set_permissions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.permissions = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// A request message for inserting an association.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddAssociationFirewallPolicyRequest {
    /// Name of the firewall policy to update.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// The body resource for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_policy_association_resource: Option<crate::model::FirewallPolicyAssociation>,

    /// Indicates whether or not to replace it if an association of the
    /// attachment already exists. This is false by default, in which case an
    /// error will be returned if an association already exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_existing_association: Option<bool>,

    /// An optional request ID to identify requests. Specify a unique request
    /// ID so that if you must retry your request, the server will know to
    /// ignore the request if it has already been completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl AddAssociationFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [firewall_policy_association_resource][Self::firewall_policy_association_resource].
    pub fn set_firewall_policy_association_resource<
        T: Into<crate::model::FirewallPolicyAssociation>,
    >(
        mut self,
        v: T,
    ) -> Self {
        self.firewall_policy_association_resource = Some(v.into());
        self
    }

    /// Sets the value of [replace_existing_association][Self::replace_existing_association].
    pub fn set_replace_existing_association<T: Into<bool>>(mut self, v: T) -> Self {
        self.replace_existing_association = Some(v.into());
        self
    }

    /// Sets the value of [request_id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// A request message for inserting a rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddRuleFirewallPolicyRequest {
    /// Name of the firewall policy to update.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// The body resource for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_policy_rule_resource: Option<crate::model::FirewallPolicyRule>,

    /// An optional request ID to identify requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl AddRuleFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [firewall_policy_rule_resource][Self::firewall_policy_rule_resource].
    pub fn set_firewall_policy_rule_resource<T: Into<crate::model::FirewallPolicyRule>>(
        mut self,
        v: T,
    ) -> Self {
        self.firewall_policy_rule_resource = Some(v.into());
        self
    }

    /// Sets the value of [request_id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// A request message for copying the rules of another firewall policy.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CloneRulesFirewallPolicyRequest {
    /// Name of the firewall policy to update.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// An optional request ID to identify requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// The firewall policy from which to copy rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_firewall_policy: Option<String>,
}

impl CloneRulesFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [request_id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sets the value of [source_firewall_policy][Self::source_firewall_policy].
    pub fn set_source_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.source_firewall_policy = Some(v.into());
        self
    }
}

/// A request message for deleting a firewall policy.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteFirewallPolicyRequest {
    /// Name of the firewall policy to delete.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// An optional request ID to identify requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl DeleteFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [request_id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// A request message for fetching a firewall policy.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetFirewallPolicyRequest {
    /// Name of the firewall policy to get.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,
}

impl GetFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }
}

/// A request message for fetching an association.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetAssociationFirewallPolicyRequest {
    /// Name of the firewall policy to which the queried rule belongs.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// The name of the association to get from the firewall policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GetAssociationFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// A request message for fetching the access control policy of a resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetIamPolicyFirewallPolicyRequest {
    /// Requested IAM Policy version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_requested_policy_version: Option<i32>,

    /// Name or id of the resource for this request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource: String,
}

impl GetIamPolicyFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [options_requested_policy_version][Self::options_requested_policy_version].
    pub fn set_options_requested_policy_version<T: Into<i32>>(mut self, v: T) -> Self {
        self.options_requested_policy_version = Some(v.into());
        self
    }

    /// Sets the value of [resource][Self::resource].
    pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }
}

/// A request message for fetching a rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetRuleFirewallPolicyRequest {
    /// Name of the firewall policy to which the queried rule belongs.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// The priority of the rule to get from the firewall policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl GetRuleFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [priority][Self::priority].
    pub fn set_priority<T: Into<i32>>(mut self, v: T) -> Self {
        self.priority = Some(v.into());
        self
    }
}

/// A request message for creating a firewall policy.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InsertFirewallPolicyRequest {
    /// The body resource for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_policy_resource: Option<crate::model::FirewallPolicy>,

    /// Parent ID for this request. The ID can be either be `folders/[FOLDER_ID]`
    /// if the parent is a folder or `organizations/[ORGANIZATION_ID]` if the
    /// parent is an organization.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent_id: String,

    /// An optional request ID to identify requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl InsertFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy_resource][Self::firewall_policy_resource].
    pub fn set_firewall_policy_resource<T: Into<crate::model::FirewallPolicy>>(
        mut self,
        v: T,
    ) -> Self {
        self.firewall_policy_resource = Some(v.into());
        self
    }

    /// Sets the value of [parent_id][Self::parent_id].
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = v.into();
        self
    }

    /// Sets the value of [request_id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// A request message for listing firewall policies.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListFirewallPoliciesRequest {
    /// A filter expression that filters resources listed in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// The maximum number of results per page that should be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,

    /// Sorts list results by a certain order. By default, results are returned
    /// in alphanumerical order based on the resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Specifies a page token to use. Set `pageToken` to the `nextPageToken`
    /// returned by a previous list request to get the next page of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,

    /// Parent ID for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Opt-in for partial success behavior which provides partial results in
    /// case of failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_partial_success: Option<bool>,
}

impl ListFirewallPoliciesRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [filter][Self::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [max_results][Self::max_results].
    pub fn set_max_results<T: Into<u32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Sets the value of [order_by][Self::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = Some(v.into());
        self
    }

    /// Sets the value of [page_token][Self::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Sets the value of [parent_id][Self::parent_id].
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = Some(v.into());
        self
    }

    /// Sets the value of [return_partial_success][Self::return_partial_success].
    pub fn set_return_partial_success<T: Into<bool>>(mut self, v: T) -> Self {
        self.return_partial_success = Some(v.into());
        self
    }
}

/// A request message for listing the associations of a target resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAssociationsFirewallPolicyRequest {
    /// The target resource to list associations. It is an organization, or a
    /// folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_resource: Option<String>,
}

impl ListAssociationsFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [target_resource][Self::target_resource].
    pub fn set_target_resource<T: Into<String>>(mut self, v: T) -> Self {
        self.target_resource = Some(v.into());
        self
    }
}

/// A request message for moving a firewall policy to a different parent.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MoveFirewallPolicyRequest {
    /// Name of the firewall policy to update.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// The new parent of the firewall policy. The ID can be either be
    /// `folders/[FOLDER_ID]` if the parent is a folder or
    /// `organizations/[ORGANIZATION_ID]` if the parent is an organization.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent_id: String,

    /// An optional request ID to identify requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl MoveFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [parent_id][Self::parent_id].
    pub fn set_parent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_id = v.into();
        self
    }

    /// Sets the value of [request_id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// A request message for patching a firewall policy.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PatchFirewallPolicyRequest {
    /// Name of the firewall policy to update.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// The body resource for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_policy_resource: Option<crate::model::FirewallPolicy>,

    /// An optional request ID to identify requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl PatchFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [firewall_policy_resource][Self::firewall_policy_resource].
    pub fn set_firewall_policy_resource<T: Into<crate::model::FirewallPolicy>>(
        mut self,
        v: T,
    ) -> Self {
        self.firewall_policy_resource = Some(v.into());
        self
    }

    /// Sets the value of [request_id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// A request message for patching a rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PatchRuleFirewallPolicyRequest {
    /// Name of the firewall policy to update.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// The body resource for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_policy_rule_resource: Option<crate::model::FirewallPolicyRule>,

    /// The priority of the rule to patch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// An optional request ID to identify requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl PatchRuleFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [firewall_policy_rule_resource][Self::firewall_policy_rule_resource].
    pub fn set_firewall_policy_rule_resource<T: Into<crate::model::FirewallPolicyRule>>(
        mut self,
        v: T,
    ) -> Self {
        self.firewall_policy_rule_resource = Some(v.into());
        self
    }

    /// Sets the value of [priority][Self::priority].
    pub fn set_priority<T: Into<i32>>(mut self, v: T) -> Self {
        self.priority = Some(v.into());
        self
    }

    /// Sets the value of [request_id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// A request message for removing an association.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RemoveAssociationFirewallPolicyRequest {
    /// Name of the firewall policy to update.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// Name for the association that will be removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// An optional request ID to identify requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl RemoveAssociationFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [request_id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// A request message for deleting a rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RemoveRuleFirewallPolicyRequest {
    /// Name of the firewall policy to update.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firewall_policy: String,

    /// The priority of the rule to remove from the firewall policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    /// An optional request ID to identify requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl RemoveRuleFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [firewall_policy][Self::firewall_policy].
    pub fn set_firewall_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.firewall_policy = v.into();
        self
    }

    /// Sets the value of [priority][Self::priority].
    pub fn set_priority<T: Into<i32>>(mut self, v: T) -> Self {
        self.priority = Some(v.into());
        self
    }

    /// Sets the value of [request_id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// A request message for setting the access control policy on a resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SetIamPolicyFirewallPolicyRequest {
    /// The body resource for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_organization_set_policy_request_resource:
        Option<crate::model::GlobalOrganizationSetPolicyRequest>,

    /// Name or id of the resource for this request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource: String,
}

impl SetIamPolicyFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [global_organization_set_policy_request_resource][Self::global_organization_set_policy_request_resource].
    pub fn set_global_organization_set_policy_request_resource<
        T: Into<crate::model::GlobalOrganizationSetPolicyRequest>,
    >(
        mut self,
        v: T,
    ) -> Self {
        self.global_organization_set_policy_request_resource = Some(v.into());
        self
    }

    /// Sets the value of [resource][Self::resource].
    pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }
}

/// A request message for testing the permissions a caller holds.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestIamPermissionsFirewallPolicyRequest {
    /// Name or id of the resource for this request.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource: String,

    /// The body resource for this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_permissions_request_resource: Option<crate::model::TestPermissionsRequest>,
}

impl TestIamPermissionsFirewallPolicyRequest {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource][Self::resource].
    pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = v.into();
        self
    }

    /// Sets the value of [test_permissions_request_resource][Self::test_permissions_request_resource].
    pub fn set_test_permissions_request_resource<T: Into<crate::model::TestPermissionsRequest>>(
        mut self,
        v: T,
    ) -> Self {
        self.test_permissions_request_resource = Some(v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn firewall_policy_wire_format() -> TestResult {
        let policy = FirewallPolicy::new()
            .set_id(123456789_u64)
            .set_name("test-policy")
            .set_short_name("short")
            .set_rule_tuple_count(2)
            .set_rules([FirewallPolicyRule::new()
                .set_action("allow")
                .set_direction(firewall_policy_rule::Direction::Ingress)
                .set_priority(1000)
                .set_match(
                    FirewallPolicyRuleMatcher::new()
                        .set_src_ip_ranges(["10.0.0.0/8"])
                        .set_layer4_configs([FirewallPolicyRuleMatcherLayer4Config::new()
                            .set_ip_protocol("tcp")
                            .set_ports(["80", "443"])]),
                )]);
        let got = serde_json::to_value(&policy)?;
        let want = json!({
            "id": "123456789",
            "name": "test-policy",
            "shortName": "short",
            "ruleTupleCount": 2,
            "rules": [{
                "action": "allow",
                "direction": "INGRESS",
                "priority": 1000,
                "match": {
                    "srcIpRanges": ["10.0.0.0/8"],
                    "layer4Configs": [{"ipProtocol": "tcp", "ports": ["80", "443"]}]
                }
            }]
        });
        assert_eq!(got, want);

        let roundtrip = serde_json::from_value::<FirewallPolicy>(got)?;
        assert_eq!(roundtrip, policy);
        Ok(())
    }

    #[test]
    fn operation_wire_format() -> TestResult {
        let input = json!({
            "id": "987654321",
            "name": "operation-12345",
            "operationType": "insert",
            "status": "DONE",
            "targetId": "123456789",
            "httpErrorStatusCode": 409,
            "httpErrorMessage": "CONFLICT",
            "error": {
                "errors": [{"code": "RESOURCE_EXISTS", "message": "already there"}]
            }
        });
        let got = serde_json::from_value::<Operation>(input)?;
        let want = Operation::new()
            .set_id(987654321_u64)
            .set_name("operation-12345")
            .set_operation_type("insert")
            .set_status(operation::Status::Done)
            .set_target_id(123456789_u64)
            .set_http_error_status_code(409)
            .set_http_error_message("CONFLICT")
            .set_error(operation::Error::new().set_errors([operation::error::Errors::new()
                .set_code("RESOURCE_EXISTS")
                .set_message("already there")]));
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn list_response_paging() {
        use gax::paginator::internal::PageableResponse;
        let list = FirewallPolicyList::new()
            .set_items([
                FirewallPolicy::new().set_name("p0"),
                FirewallPolicy::new().set_name("p1"),
            ])
            .set_next_page_token("token-1");
        assert_eq!(list.next_page_token(), "token-1");
        let names = list
            .items()
            .into_iter()
            .map(|p| p.name.unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["p0", "p1"]);

        let list = FirewallPolicyList::new();
        assert_eq!(list.next_page_token(), "");
    }

    #[test]
    fn policy_wire_format() -> TestResult {
        let policy = Policy::new()
            .set_version(3)
            .set_etag("BwWKmjvelug=")
            .set_bindings([Binding::new()
                .set_role("roles/compute.admin")
                .set_members(["user:test@example.com"])
                .set_condition(Expr::new().set_expression("request.time < timestamp('2030-01-01T00:00:00Z')"))]);
        let got = serde_json::to_value(&policy)?;
        let want = json!({
            "version": 3,
            "etag": "BwWKmjvelug=",
            "bindings": [{
                "role": "roles/compute.admin",
                "members": ["user:test@example.com"],
                "condition": {"expression": "request.time < timestamp('2030-01-01T00:00:00Z')"}
            }]
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn request_defaults_serialize_empty() -> TestResult {
        let got = serde_json::to_value(ListFirewallPoliciesRequest::new())?;
        assert_eq!(got, json!({}));
        let got = serde_json::to_value(GetFirewallPolicyRequest::new())?;
        assert_eq!(got, json!({}));
        Ok(())
    }
}
