use std::collections::BTreeMap;

use crate::animation::color::Color;
use crate::foundation::error::{TweenlabError, TweenlabResult};

/// A parameter value as stored in a [`ParamSet`](crate::ParamSet). Serializes as plain JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<ParamValue>),
    Record(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Flag(_) => "flag",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParamKind {
    Number {
        min: f64,
        max: f64,
        step: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<&'static str>,
    },
    Choice {
        options: &'static [&'static str],
    },
    Flag,
    Text,
    Color,
    List {
        item: Box<ParamKind>,
        min_len: usize,
        max_len: usize,
        /// Appended by `AddItem` unless the demo supplies its own.
        new_item: ParamValue,
    },
    Record {
        fields: Vec<ParamSpec>,
    },
}

impl ParamKind {
    pub fn number(min: f64, max: f64, step: f64) -> Self {
        Self::Number {
            min,
            max,
            step,
            unit: None,
        }
    }

    pub fn frames(max: f64) -> Self {
        Self::Number {
            min: 0.0,
            max,
            step: 1.0,
            unit: Some("frames"),
        }
    }

    pub fn pixels(min: f64, max: f64) -> Self {
        Self::Number {
            min,
            max,
            step: 1.0,
            unit: Some("px"),
        }
    }

    pub fn choice(options: &'static [&'static str]) -> Self {
        Self::Choice { options }
    }

    /// Convert raw user text into a value of this kind.
    ///
    /// Numbers never fail: unparsable input becomes 0, then everything is clamped into range.
    /// Lists and records take JSON.
    pub fn parse_raw(&self, raw: &str) -> TweenlabResult<ParamValue> {
        let trimmed = raw.trim();
        match self {
            Self::Number { .. } => {
                let v = trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .unwrap_or(0.0);
                self.coerce(ParamValue::Number(v))
            }
            Self::Flag => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(ParamValue::Flag(true)),
                "false" | "0" | "off" | "no" => Ok(ParamValue::Flag(false)),
                other => Err(TweenlabError::parameter(format!(
                    "'{other}' is not a flag value"
                ))),
            },
            Self::Choice { .. } | Self::Color => self.coerce(ParamValue::text(trimmed)),
            Self::Text => Ok(ParamValue::text(raw)),
            Self::List { .. } | Self::Record { .. } => {
                let value: ParamValue = serde_json::from_str(trimmed)?;
                self.coerce(value)
            }
        }
    }

    /// Check `value` against this kind, clamping numbers and filling missing record fields.
    pub fn coerce(&self, value: ParamValue) -> TweenlabResult<ParamValue> {
        match (self, value) {
            (Self::Number { min, max, .. }, ParamValue::Number(v)) => {
                let v = if v.is_finite() { v } else { 0.0 };
                Ok(ParamValue::Number(v.clamp(*min, *max)))
            }
            (Self::Number { .. }, ParamValue::Text(s)) => self.parse_raw(&s),
            (Self::Choice { options }, ParamValue::Text(s)) => {
                if options.contains(&s.as_str()) {
                    Ok(ParamValue::Text(s))
                } else {
                    Err(TweenlabError::parameter(format!(
                        "'{s}' is not one of {options:?}"
                    )))
                }
            }
            (Self::Flag, ParamValue::Flag(b)) => Ok(ParamValue::Flag(b)),
            (Self::Flag, ParamValue::Text(s)) => self.parse_raw(&s),
            (Self::Text, ParamValue::Text(s)) => Ok(ParamValue::Text(s)),
            (Self::Color, ParamValue::Text(s)) => {
                s.parse::<Color>()?;
                Ok(ParamValue::Text(s))
            }
            (
                Self::List {
                    item,
                    min_len,
                    max_len,
                    ..
                },
                ParamValue::List(items),
            ) => {
                if items.len() < *min_len || items.len() > *max_len {
                    return Err(TweenlabError::parameter(format!(
                        "list needs {min_len}..={max_len} items, got {}",
                        items.len()
                    )));
                }
                let items = items
                    .into_iter()
                    .map(|v| item.coerce(v))
                    .collect::<TweenlabResult<Vec<_>>>()?;
                Ok(ParamValue::List(items))
            }
            (Self::Record { fields }, ParamValue::Record(mut given)) => {
                let mut out = BTreeMap::new();
                for spec in fields {
                    let v = match given.remove(spec.key) {
                        Some(v) => spec.kind.coerce(v)?,
                        None => spec.default.clone(),
                    };
                    out.insert(spec.key.to_owned(), v);
                }
                if let Some(unknown) = given.keys().next() {
                    return Err(TweenlabError::parameter(format!(
                        "unknown record field '{unknown}'"
                    )));
                }
                Ok(ParamValue::Record(out))
            }
            (kind, value) => Err(TweenlabError::parameter(format!(
                "expected {}, got {}",
                kind.type_name(),
                value.type_name()
            ))),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Number { .. } => "number",
            Self::Choice { .. } => "choice",
            Self::Flag => "flag",
            Self::Text => "text",
            Self::Color => "color",
            Self::List { .. } => "list",
            Self::Record { .. } => "record",
        }
    }
}

/// One declared parameter.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParamSpec {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: ParamKind,
    pub default: ParamValue,
}

impl ParamSpec {
    pub fn new(
        key: &'static str,
        label: &'static str,
        kind: ParamKind,
        default: impl Into<ParamValue>,
    ) -> Self {
        Self {
            key,
            label,
            kind,
            default: default.into(),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

/// The declared parameters of one demo, in display order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ParamSchema {
    fields: Vec<ParamSpec>,
}

impl ParamSchema {
    pub fn new(fields: Vec<ParamSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[ParamSpec] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&ParamSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Kind declared for a dotted `path` such as `colors.2` or `sequences.0.from`.
    pub fn resolve(&self, path: &str) -> TweenlabResult<&ParamKind> {
        let mut segments = path.split('.');
        let head = segments.next().unwrap_or_default();
        let mut kind = &self
            .field(head)
            .ok_or_else(|| TweenlabError::parameter(format!("unknown parameter '{head}'")))?
            .kind;
        for seg in segments {
            kind = match kind {
                ParamKind::List { item, .. } => {
                    seg.parse::<usize>().map_err(|_| {
                        TweenlabError::parameter(format!("'{seg}' in '{path}' is not a list index"))
                    })?;
                    item.as_ref()
                }
                ParamKind::Record { fields } => {
                    &fields
                        .iter()
                        .find(|f| f.key == seg)
                        .ok_or_else(|| {
                            TweenlabError::parameter(format!("unknown field '{seg}' in '{path}'"))
                        })?
                        .kind
                }
                _ => {
                    return Err(TweenlabError::parameter(format!(
                        "'{path}' descends into a scalar parameter"
                    )));
                }
            };
        }
        Ok(kind)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/schema.rs"]
mod tests;
