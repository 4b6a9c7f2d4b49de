use super::*;

#[test]
fn decimal_reads_signed_values_and_restores_on_failure() {
    let mut s = Scanner::new("-12.5,3");
    assert_eq!(s.decimal(), Some(-12.5));
    assert!(s.eat(b','));
    assert_eq!(s.decimal(), Some(3.0));
    assert!(s.is_eof());

    let mut bad = Scanner::new("-x");
    assert_eq!(bad.decimal(), None);
    assert!(bad.eat(b'-'));

    let mut dots = Scanner::new("1.2.3");
    assert_eq!(dots.decimal(), None);
    assert!(dots.eat(b'1'));
}

#[test]
fn uint_and_literals() {
    let mut s = Scanner::new("hsl(  210");
    assert!(s.eat_str("hsl("));
    assert!(!s.eat_str("hsl("));
    s.skip_ws();
    assert_eq!(s.uint(), Some(210));
    assert_eq!(s.uint(), None);
}

#[test]
fn at_clamps_start_position() {
    let s = Scanner::at("abc", 10);
    assert!(s.is_eof());
}
