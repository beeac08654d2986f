use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::foundation::error::{TweenlabError, TweenlabResult};
use crate::params::schema::{ParamKind, ParamSchema, ParamValue};

/// Current parameter values of one demo, keyed like its [`ParamSchema`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ParamSet {
    values: BTreeMap<String, ParamValue>,
}

impl ParamSet {
    /// Every field at its declared default.
    pub fn defaults(schema: &ParamSchema) -> Self {
        Self {
            values: schema
                .fields()
                .iter()
                .map(|f| (f.key.to_owned(), f.default.clone()))
                .collect(),
        }
    }

    pub fn values(&self) -> &BTreeMap<String, ParamValue> {
        &self.values
    }

    pub fn get(&self, path: &str) -> Option<&ParamValue> {
        let mut segments = path.split('.');
        let mut cur = self.values.get(segments.next()?)?;
        for seg in segments {
            cur = match cur {
                ParamValue::List(items) => items.get(seg.parse::<usize>().ok()?)?,
                ParamValue::Record(fields) => fields.get(seg)?,
                _ => return None,
            };
        }
        Some(cur)
    }

    pub fn number(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(ParamValue::as_f64)
    }

    /// Parse `raw` per the schema and store it at `path`.
    pub fn set_raw(&mut self, schema: &ParamSchema, path: &str, raw: &str) -> TweenlabResult<()> {
        let value = schema.resolve(path)?.parse_raw(raw)?;
        *self.slot_mut(path)? = value;
        Ok(())
    }

    /// Validate `value` per the schema and store it at `path`.
    pub fn set_value(
        &mut self,
        schema: &ParamSchema,
        path: &str,
        value: ParamValue,
    ) -> TweenlabResult<()> {
        let value = schema.resolve(path)?.coerce(value)?;
        *self.slot_mut(path)? = value;
        Ok(())
    }

    /// Overlay a partial JSON object of top-level values. Unmentioned keys keep their value.
    pub fn merge_json(
        &mut self,
        schema: &ParamSchema,
        partial: &serde_json::Map<String, serde_json::Value>,
    ) -> TweenlabResult<()> {
        for (key, json) in partial {
            let value: ParamValue = serde_json::from_value(json.clone())?;
            self.set_value(schema, key, value)?;
        }
        Ok(())
    }

    /// Append `item` to the list at `path`, respecting its `max_len`.
    pub fn push_item(
        &mut self,
        schema: &ParamSchema,
        path: &str,
        item: ParamValue,
    ) -> TweenlabResult<usize> {
        let (item_kind, max_len) = match schema.resolve(path)? {
            ParamKind::List { item, max_len, .. } => (item.as_ref(), *max_len),
            _ => return Err(not_a_list(path)),
        };
        let item = item_kind.coerce(item)?;
        let items = self.list_mut(path)?;
        if items.len() >= max_len {
            return Err(TweenlabError::parameter(format!(
                "'{path}' already has the maximum of {max_len} items"
            )));
        }
        items.push(item);
        Ok(items.len())
    }

    /// Remove item `index` from the list at `path`, respecting its `min_len`.
    pub fn remove_item(
        &mut self,
        schema: &ParamSchema,
        path: &str,
        index: usize,
    ) -> TweenlabResult<ParamValue> {
        let min_len = match schema.resolve(path)? {
            ParamKind::List { min_len, .. } => *min_len,
            _ => return Err(not_a_list(path)),
        };
        let items = self.list_mut(path)?;
        if items.len() <= min_len {
            return Err(TweenlabError::parameter(format!(
                "'{path}' needs at least {min_len} items"
            )));
        }
        if index >= items.len() {
            return Err(TweenlabError::parameter(format!(
                "index {index} out of range for '{path}' ({} items)",
                items.len()
            )));
        }
        Ok(items.remove(index))
    }

    /// Deserialize into a demo's typed params struct.
    pub fn to_typed<T: DeserializeOwned>(&self) -> TweenlabResult<T> {
        let json = serde_json::to_value(&self.values)?;
        Ok(serde_json::from_value(json)?)
    }

    fn list_mut(&mut self, path: &str) -> TweenlabResult<&mut Vec<ParamValue>> {
        match self.slot_mut(path)? {
            ParamValue::List(items) => Ok(items),
            _ => Err(not_a_list(path)),
        }
    }

    fn slot_mut(&mut self, path: &str) -> TweenlabResult<&mut ParamValue> {
        let missing = || TweenlabError::parameter(format!("no value at '{path}'"));
        let mut segments = path.split('.');
        let head = segments.next().unwrap_or_default();
        let mut cur = self.values.get_mut(head).ok_or_else(missing)?;
        for seg in segments {
            cur = match cur {
                ParamValue::List(items) => seg
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| items.get_mut(i))
                    .ok_or_else(missing)?,
                ParamValue::Record(fields) => fields.get_mut(seg).ok_or_else(missing)?,
                _ => return Err(missing()),
            };
        }
        Ok(cur)
    }
}

fn not_a_list(path: &str) -> TweenlabError {
    TweenlabError::parameter(format!("'{path}' is not a list parameter"))
}

#[cfg(test)]
#[path = "../../tests/unit/params/set.rs"]
mod tests;
