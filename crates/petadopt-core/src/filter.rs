//! Catalog filter compilation
//!
//! Turns optional caller-supplied criteria into a predicate fragment with
//! positional placeholders (`$1`, `$2`, ...) and the values to bind to them.
//! Caller values never appear in the predicate text.
//!
//! Only the five keys in [`FilterKey::ORDERED`] participate, always in that
//! order, so the generated text is stable for a given set of present keys.
//! A key whose value is absent or the empty string is not a constraint.

use serde::Deserialize;

/// A recognized filter key, mapped one-to-one onto a `pets` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Type,
    Breed,
    Size,
    Age,
    Location,
}

impl FilterKey {
    /// Fixed compilation order.
    pub const ORDERED: [FilterKey; 5] = [
        FilterKey::Type,
        FilterKey::Breed,
        FilterKey::Size,
        FilterKey::Age,
        FilterKey::Location,
    ];

    /// Column compared against this key's value.
    pub fn column(self) -> &'static str {
        match self {
            FilterKey::Type => "type",
            FilterKey::Breed => "breed",
            FilterKey::Size => "size",
            FilterKey::Age => "age",
            FilterKey::Location => "location",
        }
    }

    /// Parse a query-string key. Unrecognized keys yield `None`.
    pub fn from_query_key(key: &str) -> Option<Self> {
        match key {
            "type" => Some(FilterKey::Type),
            "breed" => Some(FilterKey::Breed),
            "size" => Some(FilterKey::Size),
            "age" => Some(FilterKey::Age),
            "location" => Some(FilterKey::Location),
            _ => None,
        }
    }
}

/// Optional equality constraints over pet attributes.
///
/// Deserializes straight from a query string; unknown keys are dropped by serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "type", default)]
    pub pet_type: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from arbitrary key/value pairs, ignoring unrecognized keys.
    /// A repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |criteria, (key, value)| {
                match FilterKey::from_query_key(key.as_ref()) {
                    Some(key) => criteria.with(key, value),
                    None => criteria,
                }
            })
    }

    /// Set one key's value.
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        *self.slot_mut(key) = Some(value.into());
        self
    }

    /// The value constraining `key`, if it is present and non-empty.
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        let slot = match key {
            FilterKey::Type => &self.pet_type,
            FilterKey::Breed => &self.breed,
            FilterKey::Size => &self.size,
            FilterKey::Age => &self.age,
            FilterKey::Location => &self.location,
        };
        slot.as_deref().filter(|v| !v.is_empty())
    }

    fn slot_mut(&mut self, key: FilterKey) -> &mut Option<String> {
        match key {
            FilterKey::Type => &mut self.pet_type,
            FilterKey::Breed => &mut self.breed,
            FilterKey::Size => &mut self.size,
            FilterKey::Age => &mut self.age,
            FilterKey::Location => &mut self.location,
        }
    }
}

/// Output of [`compile`]: predicate text plus its positional parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledFilter {
    predicate: String,
    params: Vec<String>,
}

impl CompiledFilter {
    /// Predicate fragment without the `WHERE` keyword; empty when unconstrained.
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    /// Values for `$1..$n`, in placeholder order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// True when no recognized key constrained the query.
    pub fn is_unconstrained(&self) -> bool {
        self.params.is_empty()
    }
}

/// Compile criteria into an AND-joined equality predicate.
pub fn compile(criteria: &FilterCriteria) -> CompiledFilter {
    let mut clauses = Vec::new();
    let mut params = Vec::new();

    for key in FilterKey::ORDERED {
        if let Some(value) = criteria.get(key) {
            params.push(value.to_string());
            clauses.push(format!("{} = ${}", key.column(), params.len()));
        }
    }

    CompiledFilter {
        predicate: clauses.join(" AND "),
        params,
    }
}
