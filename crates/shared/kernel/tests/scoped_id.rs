use mfg_kernel::security::scope::{ScopedId, ScopedIdError};

#[test]
fn scoped_id_accepts_own_model_and_bare_ids() {
    assert_eq!(ScopedId::verify("insole-fleece", "sp250").unwrap(), "insole-fleece");
    assert_eq!(ScopedId::verify("sp250:insole-fleece", "sp250").unwrap(), "insole-fleece");
    assert!(matches!(
        ScopedId::verify("sp300:insole-fleece", "sp250"),
        Err(ScopedIdError::Foreign { .. })
    ));
}

#[test]
fn known_local_ids_with_colons_are_not_split() {
    let local = ["perf:gold"];
    let known = |id: &str| local.contains(&id);

    assert_eq!(ScopedId::verify_known("perf:gold", "sp250", known).unwrap(), "perf:gold");
    assert_eq!(ScopedId::verify_known("sp250:perf:gold", "sp250", known).unwrap(), "perf:gold");
    assert!(matches!(
        ScopedId::verify_known("perf:silver", "sp250", known),
        Err(ScopedIdError::Foreign { .. })
    ));
}
