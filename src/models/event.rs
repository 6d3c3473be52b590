use serde::Deserialize;
use serde_json::Value;

/// One page of the discovery API's event search.
///
/// Everything is optional: the final page of a search often has no
/// `_embedded` block at all, and only non-final pages carry `_links.next`.
#[derive(Debug, Default, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "_embedded", default)]
    embedded: Option<Embedded>,
    #[serde(rename = "_links", default)]
    links: Option<Links>,
    /// Paging metadata, only ever logged, so its shape is not enforced.
    #[serde(default)]
    pub page: Option<Value>,
    #[serde(default)]
    pub errors: Option<Value>,
    #[serde(default)]
    pub fault: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct Embedded {
    #[serde(default)]
    events: Vec<EventRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct Links {
    #[serde(default)]
    next: Option<Link>,
}

#[derive(Debug, Default, Deserialize)]
struct Link {
    #[serde(default)]
    href: Option<String>,
}

impl PageResponse {
    /// Events in upstream order. Missing `_embedded` yields an empty slice.
    pub fn events(&self) -> &[EventRecord] {
        self.embedded
            .as_ref()
            .map(|embedded| embedded.events.as_slice())
            .unwrap_or(&[])
    }

    /// `_links.next.href`, or `None` once the search is exhausted.
    /// An empty href is treated as absent.
    pub fn next_href(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.next.as_ref())
            .and_then(|next| next.href.as_deref())
            .filter(|href| !href.is_empty())
    }

    /// Upstream-reported problems, from either the `errors` or `fault` key.
    pub fn reported_errors(&self) -> Option<&Value> {
        self.errors
            .as_ref()
            .filter(|v| !v.is_null())
            .or_else(|| self.fault.as_ref().filter(|v| !v.is_null()))
    }
}

/// A single event entry. Only the name and start date fields are read.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    dates: Option<EventDates>,
}

#[derive(Debug, Default, Clone, Deserialize)]
struct EventDates {
    #[serde(default)]
    start: Option<EventStart>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventStart {
    #[serde(default)]
    date_time: Option<String>,
    #[serde(default)]
    local_date: Option<String>,
    #[serde(default)]
    local_time: Option<String>,
}

impl EventRecord {
    /// Display name; falls back to `""` when the event has none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// `dates.start.dateTime`. `None` if any level is missing or the value is empty.
    pub fn start_date_time(&self) -> Option<&str> {
        self.start().and_then(|s| non_empty(&s.date_time))
    }

    /// `dates.start.localDate`, same fallback as [`Self::start_date_time`].
    pub fn start_local_date(&self) -> Option<&str> {
        self.start().and_then(|s| non_empty(&s.local_date))
    }

    /// `dates.start.localTime`, same fallback as [`Self::start_date_time`].
    pub fn start_local_time(&self) -> Option<&str> {
        self.start().and_then(|s| non_empty(&s.local_time))
    }

    fn start(&self) -> Option<&EventStart> {
        self.dates.as_ref().and_then(|d| d.start.as_ref())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

