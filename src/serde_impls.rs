//! Serde support: a stream serializes as a sequence of its elements

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::stream::Stream;

/// Forces the whole stream. Do not serialize an infinite stream.
impl<T: Serialize> Serialize for Stream<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for Stream<T>
where
    T: Deserialize<'de> + 'static,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Stream::from)
    }
}
