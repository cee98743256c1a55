use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Logical content key → relative resource path.
pub type PathMap = HashMap<String, String>;

/// Logical content key → fallback value. Its key set is the canonical one.
pub type DefaultMap = HashMap<String, String>;

/// Final key → text mapping after default substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedContent {
    values: HashMap<String, String>,
}

impl ResolvedContent {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Resolves every canonical key: loaded value if non-empty, else the
    /// default if non-empty, else "".
    pub fn resolve(loaded: &HashMap<String, String>, defaults: &DefaultMap) -> Self {
        let values = defaults
            .iter()
            .map(|(key, default)| {
                let value = match loaded.get(key) {
                    Some(text) if !text.is_empty() => text.clone(),
                    _ if !default.is_empty() => default.clone(),
                    _ => String::new(),
                };
                (key.clone(), value)
            })
            .collect();
        Self { values }
    }

    /// Missing keys read as "".
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub street: String,
    pub postal_city: String,
    pub opening_hours: String,
    pub email: String,
    pub phone_display: String,
    pub phone_intl: String,
}

impl ContactFields {
    pub fn from_content(content: &ResolvedContent) -> Self {
        Self {
            street: content.get("street").to_string(),
            postal_city: content.get("postalCity").to_string(),
            opening_hours: content.get("openingHours").to_string(),
            email: content.get("email").to_string(),
            phone_display: content.get("phoneDisplay").to_string(),
            phone_intl: content.get("phoneIntl").to_string(),
        }
    }

    /// Value for the `tel:` link: international form first.
    pub fn dial_number(&self) -> &str {
        if self.phone_intl.is_empty() {
            &self.phone_display
        } else {
            &self.phone_intl
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Home,
    About,
    Contact,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Home, PageKind::About, PageKind::Contact];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::About => "about",
            PageKind::Contact => "contact",
        }
    }

    /// Reads a page marker; anything unrecognised is the home page.
    pub fn from_marker(marker: Option<&str>) -> Self {
        marker.and_then(|m| m.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "home" => Ok(PageKind::Home),
            "about" => Ok(PageKind::About),
            "contact" => Ok(PageKind::Contact),
            other => Err(format!("unknown page type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn visible_if(condition: bool) -> Self {
        if condition {
            Display::Block
        } else {
            Display::None
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }
}

/// What the text fetcher does when a resource cannot be reached at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportPolicy {
    /// Treat the resource as empty.
    #[default]
    Empty,
    /// Propagate the failure to the caller.
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BootState {
    Idle,
    HeroLoading,
    PageLoading(PageKind),
    Done,
    Failed,
}

impl fmt::Display for BootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootState::Idle => f.write_str("idle"),
            BootState::HeroLoading => f.write_str("hero-loading"),
            BootState::PageLoading(kind) => write!(f, "page-loading({})", kind),
            BootState::Done => f.write_str("done"),
            BootState::Failed => f.write_str("failed"),
        }
    }
}
