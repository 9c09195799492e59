use crate::domain::model::Action;
use crate::domain::ports::{Displayable, Printable, Serializable};
use crate::operations::{
    DisplayConsole, DisplayReverse, PrintConsole, PrintReverse, SerializeJson, SerializeXml,
};
use crate::utils::error::{DispatchError, Result};
use std::collections::HashMap;
use std::fmt;

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Registry key for an action/variant pair, e.g. `display` + `reverse` -> `DisplayReverse`.
pub fn operation_key(action: &str, variant: &str) -> String {
    format!("{}{}", capitalize(action), capitalize(variant))
}

/// Named operation implementations, one map per capability.
#[derive(Default)]
pub struct OperationRegistry {
    displays: HashMap<String, Box<dyn Displayable>>,
    printers: HashMap<String, Box<dyn Printable>>,
    serializers: HashMap<String, Box<dyn Serializable>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register_display("console", DisplayConsole)
            .register_display("reverse", DisplayReverse)
            .register_print("console", PrintConsole)
            .register_print("reverse", PrintReverse)
            .register_serializer("json", SerializeJson)
            .register_serializer("xml", SerializeXml);
        registry
    }

    pub fn register_display(
        &mut self,
        variant: &str,
        op: impl Displayable + 'static,
    ) -> &mut Self {
        let key = operation_key(Action::Display.name(), variant);
        self.displays.insert(key, Box::new(op));
        self
    }

    pub fn register_print(&mut self, variant: &str, op: impl Printable + 'static) -> &mut Self {
        let key = operation_key(Action::Print.name(), variant);
        self.printers.insert(key, Box::new(op));
        self
    }

    pub fn register_serializer(
        &mut self,
        variant: &str,
        op: impl Serializable + 'static,
    ) -> &mut Self {
        let key = operation_key(Action::Serialize.name(), variant);
        self.serializers.insert(key, Box::new(op));
        self
    }

    pub fn display(&self, variant: &str) -> Result<&dyn Displayable> {
        lookup(&self.displays, Action::Display, variant)
    }

    pub fn print(&self, variant: &str) -> Result<&dyn Printable> {
        lookup(&self.printers, Action::Print, variant)
    }

    pub fn serializer(&self, variant: &str) -> Result<&dyn Serializable> {
        lookup(&self.serializers, Action::Serialize, variant)
    }

    /// All registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .displays
            .keys()
            .chain(self.printers.keys())
            .chain(self.serializers.keys())
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

fn lookup<'a, T: ?Sized>(
    ops: &'a HashMap<String, Box<T>>,
    action: Action,
    variant: &str,
) -> Result<&'a T> {
    let key = operation_key(action.name(), variant);
    match ops.get(&key) {
        Some(op) => {
            tracing::debug!("Resolved {}:{} -> {}", action.name(), variant, key);
            Ok(op.as_ref())
        }
        None => Err(DispatchError::UnknownOperation {
            key,
            action: action.name().to_string(),
            variant: variant.to_string(),
        }),
    }
}
