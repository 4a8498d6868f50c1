use collatz_core::profile;
use collatz_core::TraceMode;

#[test]
fn profile_id_is_stable_for_same_profile() {
    let p = profile::defaults::default_profile();
    let a = profile::format::profile_id_16(&p);
    let b = profile::format::profile_id_16(&p);
    assert_eq!(a, b);
    assert_eq!(profile::format::profile_id_hex(&p).len(), 32);
}

#[test]
fn profile_id_changes_with_any_knob() {
    let base = profile::defaults::default_profile();
    let id0 = profile::format::profile_id_16(&base);

    let mut p = base.clone();
    p.params.increment = -1;
    assert_ne!(id0, profile::format::profile_id_16(&p));

    let mut p = base.clone();
    p.config.mode = TraceMode::OddOnly;
    assert_ne!(id0, profile::format::profile_id_16(&p));

    let mut p = base.clone();
    p.config.residue_bits = vec![8, 12];
    assert_ne!(id0, profile::format::profile_id_16(&p));

    let mut p = base;
    p.config.max_steps += 1;
    assert_ne!(id0, profile::format::profile_id_16(&p));
}
