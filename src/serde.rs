use crate::ScanQueue;
use core::fmt;
use core::marker::PhantomData;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

pub struct ScanQueueVisitor<T> {
    marker: PhantomData<fn() -> ScanQueue<T>>,
}

impl<T> ScanQueueVisitor<T> {
    fn new() -> Self {
        ScanQueueVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for ScanQueueVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = ScanQueue<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of (value, priority) pairs")
    }

    fn visit_seq<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: SeqAccess<'de>,
    {
        let mut queue = ScanQueue::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((value, priority)) = access.next_element()? {
            queue.enqueue_with(value, priority);
        }

        Ok(queue)
    }
}

impl<'de, T> Deserialize<'de> for ScanQueue<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ScanQueueVisitor::<T>::new())
    }
}

impl<T> Serialize for ScanQueue<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.iter() {
            seq.serialize_element(&(entry.value(), entry.priority()))?;
        }
        seq.end()
    }
}
