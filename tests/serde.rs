#![cfg(feature = "serde")]

use scanq::ScanQueue;

#[test]
fn serialize_emits_insertion_order() {
    let mut queue = ScanQueue::new();
    queue.enqueue_with("b", 2);
    queue.enqueue_with("a", 1);

    let json = serde_json::to_string(&queue).unwrap();
    assert_eq!(json, r#"[["b",2],["a",1]]"#);
}

#[test]
fn round_trip_preserves_entries_and_order() {
    let mut queue = ScanQueue::new();
    queue.enqueue_with("first".to_string(), 1);
    queue.enqueue("rand_item".to_string());
    queue.enqueue_with("tied".to_string(), 1);

    let json = serde_json::to_string(&queue).unwrap();
    let restored: ScanQueue<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, queue);

    let mut restored = restored;
    assert_eq!(restored.dequeue(), Ok("first".to_string()));
    assert_eq!(restored.dequeue(), Ok("tied".to_string()));
    assert_eq!(restored.dequeue(), Ok("rand_item".to_string()));
}

#[test]
fn deserialize_empty_sequence() {
    let queue: ScanQueue<u32> = serde_json::from_str("[]").unwrap();
    assert!(queue.is_empty());
}
