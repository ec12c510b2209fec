//! Integration tests for the sum, product, and XOR visitors.
//!
//! These exercise the visitors through the element dispatch entry points and
//! the batch helper, the way the driver uses them.

use approx::assert_relative_eq;
use proptest::prelude::*;
use vk_core::{Accumulator, Error, Visitable};
use vk_elements::{ArrayElement, Element, ElementVisitor, SingleElement, StringElement};
use vk_visitors::{apply_all, AcceptAll, MultiplyVisitor, SumVisitor, XorVisitor};

const SAMPLE_TEXT: &str = "Hello World 123456789\u{2}";

fn singles() -> Vec<SingleElement> {
    (1..=9).map(|v| SingleElement::new(f64::from(v))).collect()
}

fn arrays() -> Vec<ArrayElement> {
    vec![
        ArrayElement::new(vec![1.0]),
        ArrayElement::new(vec![2.0, 3.0]),
        ArrayElement::new(vec![4.0, 5.0, 6.0]),
        ArrayElement::new(vec![7.0, 8.0, 9.0]),
    ]
}

// ─── Sample collections ───────────────────────────────────────────────────────

#[test]
fn test_singles_sum_and_product() {
    let mut sum = SumVisitor::new();
    let mut product = MultiplyVisitor::new();
    apply_all(&mut sum, &singles()).unwrap();
    apply_all(&mut product, &singles()).unwrap();
    assert_eq!(sum.value(), 45.0);
    assert_eq!(product.value(), 362_880.0);
}

#[test]
fn test_arrays_sum_and_product() {
    let mut sum = SumVisitor::new();
    let mut product = MultiplyVisitor::new();
    arrays().iter().accept_all(&mut sum).unwrap();
    arrays().iter().accept_all(&mut product).unwrap();
    assert_eq!(sum.value(), 45.0);
    assert_eq!(product.value(), 362_880.0);
}

#[test]
fn test_string_sum_product_checksum() {
    let text = StringElement::new(SAMPLE_TEXT);
    let mut sum = SumVisitor::new();
    let mut product = MultiplyVisitor::new();
    let mut xor = XorVisitor::new();
    text.accept(&mut sum).unwrap();
    text.accept(&mut product).unwrap();
    text.accept(&mut xor).unwrap();
    assert_eq!(sum.value(), 45.0);
    assert_eq!(product.value(), 362_880.0);
    assert_eq!(xor.value(), 51);
}

#[test]
fn test_xor_rejects_sample_singles_and_arrays() {
    let mut xor = XorVisitor::new();
    let err = apply_all(&mut xor, &singles()).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedOperation {
            operation: "XOR",
            element: "a single-value"
        }
    );
    let err = apply_all(&mut xor, &arrays()).unwrap_err();
    assert_eq!(err.to_string(), "cannot apply XOR to an array element");
    assert!(xor.is_identity());
}

// ─── Dispatch ─────────────────────────────────────────────────────────────────

#[test]
fn test_heterogeneous_collection_via_trait_objects() {
    let elements: Vec<Element> = vec![
        Element::from(2.0),
        Element::from(vec![3.0, 4.0]),
        Element::from("5x"),
    ];
    let mut sum = SumVisitor::new();
    let mut product = MultiplyVisitor::new();
    {
        let visitors: [&mut dyn ElementVisitor; 2] = [&mut sum, &mut product];
        for visitor in visitors {
            apply_all(visitor, &elements).unwrap();
        }
    }
    assert_eq!(sum.value(), 14.0);
    assert_eq!(product.value(), 120.0);
}

#[test]
fn test_mutated_element_is_seen_on_next_visit() {
    let mut element = SingleElement::new(2.0);
    let mut sum = SumVisitor::new();
    element.accept(&mut sum).unwrap();
    element.set_value(40.0);
    element.accept(&mut sum).unwrap();
    assert_eq!(sum.value(), 42.0);
}

#[test]
fn test_reset_between_runs() {
    let mut sum = SumVisitor::new();
    let mut product = MultiplyVisitor::new();
    let mut xor = XorVisitor::new();
    apply_all(&mut sum, &singles()).unwrap();
    apply_all(&mut product, &singles()).unwrap();
    StringElement::new(SAMPLE_TEXT).accept(&mut xor).unwrap();

    sum.reset();
    product.reset();
    xor.reset();
    assert_eq!(sum.value(), 0.0);
    assert_eq!(product.value(), 1.0);
    assert_eq!(xor.value(), 0);
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_singles_sum_and_product(values in prop::collection::vec(-100.0f64..100.0, 0..16)) {
        let elements: Vec<SingleElement> = values.iter().copied().map(SingleElement::new).collect();
        let mut sum = SumVisitor::new();
        let mut product = MultiplyVisitor::new();
        apply_all(&mut sum, &elements).unwrap();
        apply_all(&mut product, &elements).unwrap();

        let expected_sum: f64 = values.iter().sum();
        let expected_product: f64 = values.iter().product();
        assert_relative_eq!(sum.value(), expected_sum, epsilon = 1e-9, max_relative = 1e-12);
        assert_relative_eq!(product.value(), expected_product, epsilon = 1e-9, max_relative = 1e-12);
    }

    #[test]
    fn prop_array_contribution(values in prop::collection::vec(-10.0f64..10.0, 0..8)) {
        let mut sum = SumVisitor::new();
        let mut product = MultiplyVisitor::new();
        let element = ArrayElement::new(values.clone());
        element.accept(&mut sum).unwrap();
        element.accept(&mut product).unwrap();
        prop_assert_eq!(sum.value(), values.iter().sum::<f64>());
        prop_assert_eq!(product.value(), values.iter().product::<f64>());
    }

    #[test]
    fn prop_string_digits(text in "[a-z0-9 ]{0,24}") {
        let digits: Vec<f64> = text
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(f64::from)
            .collect();
        let mut sum = SumVisitor::new();
        let mut product = MultiplyVisitor::new();
        StringElement::new(text.as_str()).accept(&mut sum).unwrap();
        StringElement::new(text.as_str()).accept(&mut product).unwrap();
        prop_assert_eq!(sum.value(), digits.iter().sum::<f64>());
        prop_assert_eq!(product.value(), digits.iter().product::<f64>());
    }

    #[test]
    fn prop_xor_combines_not_overwrites(a in ".{0,16}", b in ".{0,16}") {
        let mut xor = XorVisitor::new();
        StringElement::new(a.as_str()).accept(&mut xor).unwrap();
        StringElement::new(b.as_str()).accept(&mut xor).unwrap();
        let expected = a.bytes().chain(b.bytes()).fold(0u8, |acc, x| acc ^ x);
        prop_assert_eq!(xor.value(), expected);
    }

    #[test]
    fn prop_xor_rejection_keeps_state(text in ".{0,16}", value in any::<f64>()) {
        let mut xor = XorVisitor::new();
        StringElement::new(text.as_str()).accept(&mut xor).unwrap();
        let before = xor.value();
        prop_assert!(SingleElement::new(value).accept(&mut xor).is_err());
        prop_assert!(ArrayElement::new(vec![value]).accept(&mut xor).is_err());
        prop_assert_eq!(xor.value(), before);
    }
}
