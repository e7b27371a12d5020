//! End-to-end behaviour of the receipt pipeline through the public API.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use points_core::{DuplicateError, ExpiringCache, Item, Receipt, ValidationError};
use points_service::{MemoryCache, ProcessError, ReceiptProcessor};

fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Knorr Creamy Chicken", "1.26"),
            Item::new("Doritos Nacho Cheese", "3.35"),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total: "9.00".to_string(),
        items: vec![Item::new("Gatorade", "2.25"); 4],
    }
}

#[test]
fn scores_known_receipts() {
    let processor = ReceiptProcessor::in_memory(None);

    assert_eq!(processor.process(&target_receipt()).unwrap().points, 28);
    // 12 (name) + 50 + 25 + 10 (two pairs) + 10 (14:33)
    assert_eq!(processor.process(&corner_market_receipt()).unwrap().points, 107);
}

#[test]
fn second_identical_submission_is_duplicate() {
    let processor = ReceiptProcessor::in_memory(None);
    let first = processor.process(&target_receipt()).unwrap();

    assert_eq!(first.id.len(), 64);
    assert!(first.id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(
        processor.process(&target_receipt()),
        Err(ProcessError::Duplicate(DuplicateError { id: first.id }))
    );
}

#[test]
fn reordered_items_are_the_same_receipt() {
    let processor = ReceiptProcessor::in_memory(None);
    let first = processor.process(&target_receipt()).unwrap();

    let mut reordered = target_receipt();
    reordered.items.rotate_left(2);
    assert_eq!(
        processor.process(&reordered),
        Err(ProcessError::Duplicate(DuplicateError { id: first.id }))
    );
}

#[test]
fn validation_failures_are_field_specific() {
    let processor = ReceiptProcessor::in_memory(None);

    let mut empty_retailer = target_receipt();
    empty_retailer.retailer.clear();
    let mut short_total = target_receipt();
    short_total.total = "10.5".to_string();
    let mut no_items = target_receipt();
    no_items.items.clear();

    let fields: Vec<Option<String>> = [empty_retailer, short_total, no_items]
        .iter()
        .map(|r| match processor.process(r) {
            Err(ProcessError::Validation(err)) => err.field().map(str::to_string),
            other => panic!("expected validation error, got {:?}", other),
        })
        .collect();

    assert_eq!(
        fields,
        vec![
            Some("retailer".to_string()),
            Some("total".to_string()),
            Some("items".to_string())
        ]
    );
}

#[test]
fn lookup_by_id() {
    let processor = ReceiptProcessor::in_memory(None);
    let processed = processor.process(&corner_market_receipt()).unwrap();

    assert_eq!(processor.points(&processed.id), Ok(processed.points));
    assert_eq!(
        processor.points("abc 123"),
        Err(ProcessError::Validation(ValidationError::InvalidId(
            "abc 123".to_string()
        )))
    );
}

#[test]
fn concurrent_identical_submissions_accept_exactly_one() {
    let processor = ReceiptProcessor::in_memory(None);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let processor = processor.clone();
            thread::spawn(move || processor.process(&target_receipt()))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let accepted = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(ProcessError::Duplicate(_))))
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(duplicates, 7);
}

#[test]
fn concurrent_distinct_receipts_score_independently() {
    let processor = ReceiptProcessor::in_memory(None);

    let handles: Vec<_> = (0..16u32)
        .map(|n| {
            let processor = processor.clone();
            thread::spawn(move || {
                let mut receipt = target_receipt();
                receipt.purchase_date = format!("2022-01-{:02}", n + 1);
                processor.process(&receipt).map(|p| (n, p.points))
            })
        })
        .collect();

    for handle in handles {
        let (n, points) = handle.join().unwrap().unwrap();
        let odd_day = if (n + 1) % 2 == 1 { 6 } else { 0 };
        assert_eq!(points, 22 + odd_day, "day {}", n + 1);
    }
    assert_eq!(processor.cache().len(), 16);
}

#[test]
fn shared_cache_handed_in_by_caller() {
    let cache: Arc<MemoryCache<Receipt>> = Arc::new(MemoryCache::new(Some(Duration::from_secs(60))));
    let processor = ReceiptProcessor::new(Arc::clone(&cache));

    let processed = processor.process(&target_receipt()).unwrap();
    let stored: &MemoryCache<Receipt> = &cache;
    assert_eq!(stored.get(&processed.id), Some(target_receipt()));
}

#[test]
fn twenty_digit_amounts_are_accepted_and_scored() {
    let processor = ReceiptProcessor::in_memory(None);
    let mut receipt = target_receipt();
    receipt.total = "99999999999999999999.00".to_string();
    receipt.items.push(Item::new("Abc", "10000000000000000000.00"));

    // 28 + 5 (third pair) + 50 (round dollar) + 25 (quarter) + 2e18 ("Abc")
    let processed = processor.process(&receipt).unwrap();
    assert_eq!(processed.points, 2_000_000_000_000_000_108);
    assert_eq!(processor.points(&processed.id), Ok(processed.points));

    assert_eq!(
        processor.process(&receipt),
        Err(ProcessError::Duplicate(DuplicateError { id: processed.id }))
    );
}
