use crate::value::Value;

/// Named runtime arguments for a deploy session or payment.
///
/// Insertion order is preserved; inserting an existing name overwrites the
/// previous value in place.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(borsh::BorshSerialize, borsh::BorshDeserialize)]
pub struct RuntimeArgs(Vec<(String, Value)>);

impl RuntimeArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an argument, overwriting any previous value under the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(String, Value)>> for RuntimeArgs {
    fn from(args: Vec<(String, Value)>) -> Self {
        let mut result = Self::new();
        for (name, value) in args {
            result.insert(name, value);
        }
        result
    }
}
