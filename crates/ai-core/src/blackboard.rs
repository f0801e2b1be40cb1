use std::any::Any;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::{
    BlackboardError, ExecutionLedger, NodeExecutionRecord, Status, TelemetryConfig,
};

/// Typed handle to a blackboard slot.
///
/// Keys are plain strings so that nodes can derive them at runtime (for
/// example `"cooldown_" + node name`); the type parameter only fixes what a
/// given handle reads and writes.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BbKey<T: 'static> {
    name: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Clone for BbKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: 'static> BbKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _phantom: PhantomData,
        }
    }

    pub fn owned(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            _phantom: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Per-actor memory plus the execution ledger of its tree.
///
/// Memory entries live until overwritten or removed; nothing expires on its
/// own. Callers that need expiry store a timestamp and compare it themselves.
#[derive(Default)]
pub struct Blackboard {
    values: BTreeMap<Cow<'static, str>, Box<dyn Any>>,
    ledger: ExecutionLedger,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_telemetry(config: TelemetryConfig) -> Self {
        Self {
            values: BTreeMap::new(),
            ledger: ExecutionLedger::new(config),
        }
    }

    /// Drop every memory entry. The execution ledger is kept.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains<T: 'static>(&self, key: &BbKey<T>) -> bool {
        self.values.contains_key(key.name())
    }

    pub fn set<T: 'static>(&mut self, key: &BbKey<T>, value: T) {
        self.values.insert(key.name.clone(), Box::new(value));
    }

    /// Look up `key`, distinguishing a missing entry (`Ok(None)`) from one
    /// stored under a different type.
    pub fn try_get<T: 'static>(&self, key: &BbKey<T>) -> Result<Option<&T>, BlackboardError> {
        let Some(value) = self.values.get(key.name()) else {
            return Ok(None);
        };
        value
            .downcast_ref::<T>()
            .map(Some)
            .ok_or_else(|| BlackboardError::TypeMismatch {
                key: key.name().to_owned(),
            })
    }

    pub fn get<T: 'static>(&self, key: &BbKey<T>) -> Option<&T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "blackboard lookup ignored");
                None
            }
        }
    }

    pub fn get_mut<T: 'static>(&mut self, key: &BbKey<T>) -> Option<&mut T> {
        let value = self.values.get_mut(key.name())?;
        let value = value.downcast_mut::<T>();
        if value.is_none() {
            tracing::warn!(key = key.name(), "blackboard type mismatch on mutable lookup");
        }
        value
    }

    /// Delete `key`, returning the stored value.
    ///
    /// An entry stored under a different type is left in place.
    pub fn remove<T: 'static>(&mut self, key: &BbKey<T>) -> Option<T> {
        let value = self.values.remove(key.name())?;
        match value.downcast::<T>() {
            Ok(value) => Some(*value),
            Err(value) => {
                tracing::warn!(key = key.name(), "blackboard type mismatch on remove");
                self.values.insert(key.name.clone(), value);
                None
            }
        }
    }

    pub fn record_node_execution(
        &mut self,
        name: &str,
        status: Status,
        time: f64,
        depth: u32,
        debug_info: &str,
    ) {
        self.ledger.record(name, status, time, depth, debug_info);
    }

    /// Read-only view of every named node's ledger entry.
    pub fn node_execution_data(&self) -> &BTreeMap<String, NodeExecutionRecord> {
        self.ledger.records()
    }

    pub fn node_execution(&self, name: &str) -> Option<&NodeExecutionRecord> {
        self.ledger.get(name)
    }

    pub fn ledger(&self) -> &ExecutionLedger {
        &self.ledger
    }
}
