use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Subscription tier, in ascending order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Anon,
    Free,
    Basic,
    Pro,
    Vip,
}

impl Plan {
    pub const ALL: [Plan; 5] = [Plan::Anon, Plan::Free, Plan::Basic, Plan::Pro, Plan::Vip];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Anon => "anon",
            Plan::Free => "free",
            Plan::Basic => "basic",
            Plan::Pro => "pro",
            Plan::Vip => "vip",
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plan::ALL
            .into_iter()
            .find(|plan| plan.as_str() == s)
            .ok_or_else(|| format!("Unknown plan: {}", s))
    }
}

/// Logged-in user of the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub plan: Plan,
}

impl Account {
    /// Mock account handed out by the login action; new accounts start on the free plan.
    pub fn new_login() -> Self {
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
        Self {
            id: format!("usr_{}", suffix),
            name: "Sora Creator".to_string(),
            email: "creator@example.com".to_string(),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Sora".to_string(),
            plan: Plan::Free,
        }
    }
}

/// Whoever is using the page right now.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Identity {
    Anonymous,
    Account(Account),
}

impl Identity {
    pub fn plan(&self) -> Plan {
        match self {
            Identity::Anonymous => Plan::Anon,
            Identity::Account(account) => account.plan,
        }
    }

    pub fn usage_scope(&self) -> UsageScope {
        match self {
            Identity::Anonymous => UsageScope::Anonymous,
            Identity::Account(_) => UsageScope::Authenticated,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Identity::Account(_))
    }
}

impl From<Option<Account>> for Identity {
    fn from(account: Option<Account>) -> Self {
        account.map_or(Identity::Anonymous, Identity::Account)
    }
}

/// Usage counters are kept apart for anonymous and logged-in use; switching
/// identity never inherits the other counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageScope {
    Anonymous,
    Authenticated,
}

impl UsageScope {
    pub fn storage_key(&self) -> &'static str {
        match self {
            UsageScope::Anonymous => "anon_downloads_today",
            UsageScope::Authenticated => "user_downloads_today",
        }
    }
}
