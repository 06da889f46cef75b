//! Object dumps for the "fetch user / wallets / clients" actions.
//!
//! Wallet objects point at each other (a wallet knows its connector, the
//! connector knows the wallet it is connected to), so a dump is a graph,
//! not a tree. Back-references are held weakly; [`safe_stringify`] emits
//! [`CIRCULAR_MARKER`] for any object it has already visited.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, Weak},
};

use serde_json::{Map, Number, Value};

use crate::constants::CIRCULAR_MARKER;

type Fields = Mutex<Vec<(String, Dump)>>;

#[derive(Debug, Clone)]
pub enum Dump {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Dump>),
    Object(DumpObject),
    /// Non-owning reference to an object that owns (directly or not) this node.
    Back(Weak<Fields>),
}

#[derive(Debug, Clone, Default)]
pub struct DumpObject(Arc<Fields>);

impl DumpObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: &str, value: impl Into<Dump>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&self, key: &str, value: impl Into<Dump>) {
        let mut fields = self.0.lock().unwrap_or_else(|e| e.into_inner());
        let value = value.into();
        match fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => fields.push((key.to_string(), value)),
        }
    }

    pub fn back_ref(&self) -> Dump {
        Dump::Back(Arc::downgrade(&self.0))
    }

    fn id(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl From<DumpObject> for Dump {
    fn from(obj: DumpObject) -> Self {
        Dump::Object(obj)
    }
}

impl From<&str> for Dump {
    fn from(s: &str) -> Self {
        Dump::String(s.to_string())
    }
}

impl From<String> for Dump {
    fn from(s: String) -> Self {
        Dump::String(s)
    }
}

impl From<bool> for Dump {
    fn from(b: bool) -> Self {
        Dump::Bool(b)
    }
}

impl From<u64> for Dump {
    fn from(n: u64) -> Self {
        Dump::Number(n.into())
    }
}

impl<T: Into<Dump>> From<Option<T>> for Dump {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Dump::Null)
    }
}

impl<T: Into<Dump>> From<Vec<T>> for Dump {
    fn from(items: Vec<T>) -> Self {
        Dump::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for Dump {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Dump::Null,
            Value::Bool(b) => Dump::Bool(b),
            Value::Number(n) => Dump::Number(n),
            Value::String(s) => Dump::String(s),
            Value::Array(items) => Dump::List(items.into_iter().map(Dump::from).collect()),
            Value::Object(map) => {
                let obj = DumpObject::new();
                for (k, v) in map {
                    obj.insert(&k, Dump::from(v));
                }
                Dump::Object(obj)
            }
        }
    }
}

/// Pretty-prints a dump with two-space indentation. Never fails; revisited
/// objects become `"[Circular]"`.
pub fn safe_stringify(dump: &Dump) -> String {
    let mut seen = HashSet::new();
    let value = to_value(dump, &mut seen);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| CIRCULAR_MARKER.to_string())
}

fn to_value(dump: &Dump, seen: &mut HashSet<usize>) -> Value {
    match dump {
        Dump::Null => Value::Null,
        Dump::Bool(b) => Value::Bool(*b),
        Dump::Number(n) => Value::Number(n.clone()),
        Dump::String(s) => Value::String(s.clone()),
        Dump::List(items) => Value::Array(items.iter().map(|d| to_value(d, seen)).collect()),
        Dump::Object(obj) => object_to_value(obj, seen),
        Dump::Back(weak) => match weak.upgrade() {
            Some(fields) => object_to_value(&DumpObject(fields), seen),
            None => Value::Null,
        },
    }
}

fn object_to_value(obj: &DumpObject, seen: &mut HashSet<usize>) -> Value {
    if !seen.insert(obj.id()) {
        return Value::String(CIRCULAR_MARKER.to_string());
    }
    let fields = obj.0.lock().unwrap_or_else(|e| e.into_inner()).clone();
    let mut map = Map::new();
    for (key, value) in &fields {
        map.insert(key.clone(), to_value(value, seen));
    }
    Value::Object(map)
}
