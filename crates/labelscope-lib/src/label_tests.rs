use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::Error;
use crate::label::{Label, LabelPolicy};

#[test]
fn accepts_alphanumeric_labels() {
    for label in ["NewLabel", "a", "Tenant42", "Größe", "ラベル"] {
        assert!(Label::new(label).is_ok(), "{label} should be legal");
    }
}

#[test]
fn rejects_illegal_labels() {
    for label in ["", "1bad", "has space", " lead", "trail ", "bad-label", "a.b", "`x`", "_under"] {
        let err = Label::new(label).unwrap_err();
        assert!(
            matches!(&err, Error::InvalidLabel { label: l } if l == label),
            "{label:?} gave {err:?}"
        );
    }
}

#[test]
fn invalid_label_message() {
    let err = Label::new("1bad").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Only labels with alpha-numeric characters are allowed, starting with an alphabetic character. This label does not match the rule: 1bad"
    );
}

#[test]
fn constant_policy_resolves_every_time() {
    let policy = LabelPolicy::constant("Tenant");
    assert_eq!(policy.resolve().unwrap().as_str(), "Tenant");
    assert_eq!(policy.resolve().unwrap().as_str(), "Tenant");
}

#[test]
fn constant_policy_validates_on_resolve() {
    let policy = LabelPolicy::from("not valid");
    assert!(matches!(policy.resolve(), Err(Error::InvalidLabel { .. })));
}

#[test]
fn provider_is_called_once_per_resolve() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let policy = LabelPolicy::provider(move || {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        format!("Tenant{n}")
    });

    assert_eq!(policy.resolve().unwrap().as_str(), "Tenant0");
    assert_eq!(policy.resolve().unwrap().as_str(), "Tenant1");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn policy_debug_hides_provider() {
    assert_eq!(format!("{:?}", LabelPolicy::constant("A")), r#"Constant("A")"#);
    assert_eq!(
        format!("{:?}", LabelPolicy::provider(|| "A".into())),
        "Provider(..)"
    );
}
