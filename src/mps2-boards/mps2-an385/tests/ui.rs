#[cfg(feature = "gpio-mmio32")]
#[test]
fn pin_aliases() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pins/*.rs");
}
